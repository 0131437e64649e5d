//! Build weighted co-authorship networks from tabular publication exports.
//!
//! `authnet` turns a row-oriented publication export (author lists,
//! affiliations, titles) into a co-authorship graph: one node per unique
//! author and one directed, weighted link per ordered co-author pair. The
//! result serializes to a `{nodes, links}` JSON document consumable by
//! graph visualization tools.
//!
//! # Key Characteristics
//!
//! - **Single pass**: rows are folded into a node registry and a link
//!   table once, then frozen into an output document.
//! - **Insertion-ordered output**: nodes appear in first-appearance order,
//!   links in outer-then-inner insertion order, so identical input always
//!   produces identical output.
//! - **Explicit aggregation policies**: the first affiliation seen for an
//!   author wins, and repeated occurrences of one name in a row never link
//!   to themselves unless explicitly enabled.
//!
//! # Basic Usage
//!
//! ```rust
//! use authnet::{GraphBuilder, ScopusParser};
//!
//! let input = "Authors,Authors with affiliations,Title\n\
//!     \"A., B.\",\"A., Dept X, USA; B., Dept Y, UK\",T1";
//!
//! let rows = ScopusParser::new().parse(input).unwrap();
//! let mut builder = GraphBuilder::new();
//! for row in &rows {
//!     builder.add(row);
//! }
//!
//! let network = builder.finish();
//! assert_eq!(network.nodes.len(), 2);
//! assert_eq!(network.links.len(), 2);
//! assert_eq!(network.nodes[1].country, "UK");
//! ```
//!
//! # File Pipeline
//!
//! [`generate`] runs the whole transform between two paths: read the
//! export, build the network, write indented JSON. It is all-or-nothing;
//! any failure leaves a previous output file untouched.
//!
//! # Error Handling
//!
//! Operations return [`NetworkError`] (or [`ParseError`] for row
//! ingestion). There is no partial-success mode: the first malformed row
//! aborts the run.

use std::path::Path;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub mod error;
pub mod export;
pub mod graph;
pub mod scopus;

// Reexports
pub use error::{NetworkError, ParseError, ValueError};
pub use graph::GraphBuilder;
pub use scopus::{ScopusConfig, ScopusParser};

/// One publication row from the export.
///
/// `authors` holds the comma-split, individually trimmed name tokens.
/// `affiliations` holds the semicolon-split tokens exactly as exported
/// (surrounding whitespace included); the i-th entry belongs to the i-th
/// author. The two lists may have different lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    /// Ordered author name tokens
    pub authors: Vec<String>,
    /// Raw affiliation tokens, positionally aligned with `authors`
    pub affiliations: Vec<String>,
    /// Title of the work
    pub title: String,
}

/// A unique author with aggregated per-author statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorNode {
    /// Trimmed author name, unique across the network
    pub id: String,
    /// Affiliation string from the author's first appearance, kept verbatim
    pub affiliation: String,
    /// Country token extracted from `affiliation`
    pub country: CompactString,
    /// Number of author-list occurrences across all rows
    pub publications: u64,
    /// One title per occurrence, in row order, duplicates allowed
    pub titles: Vec<String>,
}

/// A directed co-authorship relation.
///
/// Both orientations of a pair are recorded separately and carry equal
/// values by construction; they are never merged into an undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoauthorLink {
    pub source: String,
    pub target: String,
    /// Number of rows in which both names appear together
    pub value: u64,
}

/// The complete output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<AuthorNode>,
    pub links: Vec<CoauthorLink>,
}

/// Counts from a completed [`generate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Publication rows ingested
    pub rows: usize,
    /// Unique authors in the output
    pub nodes: usize,
    /// Directed links in the output
    pub links: usize,
}

/// Run the whole transform: read a publication export from `input`, build
/// the co-authorship network, and write it to `output` as indented JSON.
///
/// The input is read and parsed in full before any graph state is built,
/// and the output document is serialized in full before a single write
/// call, so no failure mode leaves a truncated file behind.
///
/// # Arguments
///
/// * `input` - Path of the CSV export
/// * `output` - Path of the JSON document to write
/// * `config` - Column and dialect configuration for the export
/// * `self_links` - Whether repeated author names within one row link to
///   themselves (see [`GraphBuilder::with_self_links`])
///
/// # Errors
///
/// Returns [`NetworkError::SourceRead`] if the input cannot be read,
/// [`NetworkError::Parse`] for a malformed export, and
/// [`NetworkError::Serialize`] / [`NetworkError::SinkWrite`] when the
/// output cannot be produced.
pub fn generate(
    input: &Path,
    output: &Path,
    config: &ScopusConfig,
    self_links: bool,
) -> Result<Summary, NetworkError> {
    let text = std::fs::read_to_string(input).map_err(|source| NetworkError::SourceRead {
        path: input.to_path_buf(),
        source,
    })?;

    let rows = ScopusParser::with_config(config.clone()).parse(&text)?;
    debug!(rows = rows.len(), input = %input.display(), "parsed publication export");

    let mut builder = GraphBuilder::new().with_self_links(self_links);
    for row in &rows {
        builder.add(row);
    }
    let network = builder.finish();

    let summary = Summary {
        rows: rows.len(),
        nodes: network.nodes.len(),
        links: network.links.len(),
    };
    info!(
        nodes = summary.nodes,
        links = summary.links,
        "built co-authorship network"
    );

    export::write(&network, output)?;
    Ok(summary)
}
