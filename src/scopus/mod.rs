//! Publication export ingestion.
//!
//! This module parses row-oriented CSV exports of publications into
//! [`Publication`] rows: the author-list column is split on `,` with each
//! token trimmed, the affiliation column is split on `;` with tokens kept
//! verbatim, and the title is carried through unchanged.
//!
//! # Example
//!
//! ```
//! use authnet::scopus::ScopusParser;
//!
//! let input = "Authors,Authors with affiliations,Title\n\
//!     Smith J.,\"Smith J., MIT, Cambridge, USA\",An Example Paper";
//!
//! let rows = ScopusParser::new().parse(input).unwrap();
//! assert_eq!(rows[0].authors, vec!["Smith J."]);
//! assert_eq!(rows[0].title, "An Example Paper");
//! ```

mod config;
mod parse;

use crate::Publication;
use crate::error::ParseError;
pub use config::ScopusConfig;
use parse::parse_export;

/// Parser for Scopus-style publication exports.
///
/// Expects a header row naming the author-list, affiliation-list and title
/// columns; all other columns are ignored. Rows whose field count differs
/// from the header abort parsing. Column names and the CSV dialect are
/// adjustable through [`ScopusConfig`].
///
/// # Examples
///
/// With custom configuration:
/// ```
/// use authnet::scopus::{ScopusConfig, ScopusParser};
///
/// let mut config = ScopusConfig::new();
/// config.set_delimiter(b';');
///
/// let parser = ScopusParser::with_config(config);
/// ```
#[derive(Debug, Clone)]
pub struct ScopusParser {
    config: ScopusConfig,
}

impl Default for ScopusParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopusParser {
    /// Creates a new parser with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScopusConfig::new(),
        }
    }

    /// Creates a new parser with custom configuration.
    #[must_use]
    pub fn with_config(config: ScopusConfig) -> Self {
        Self { config }
    }

    /// Gets a reference to the current configuration.
    pub fn config(&self) -> &ScopusConfig {
        &self.config
    }

    /// Gets a mutable reference to the current configuration.
    pub fn config_mut(&mut self) -> &mut ScopusConfig {
        &mut self.config
    }

    /// Parses a string containing a publication export.
    ///
    /// # Arguments
    ///
    /// * `input` - The full text of the export, header row included
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when a required column is absent from the
    /// header or a row is malformed; the error carries the row's line
    /// number where the underlying reader provides one.
    pub fn parse(&self, input: &str) -> Result<Vec<Publication>, ParseError> {
        parse_export(input, &self.config)
    }
}
