//! Co-authorship graph construction.
//!
//! This module folds publication rows into two insertion-ordered
//! accumulators: a node registry keyed by author name and a nested link
//! table counting ordered co-author pairs. Both are frozen into a
//! [`Network`] once all rows are in; nothing mutates after that.

mod country;

use std::collections::HashMap;

use itertools::Itertools;

use crate::{AuthorNode, CoauthorLink, Network, Publication};
use country::extract_country;

/// Sentinel affiliation for authors whose row has fewer affiliation
/// entries than authors.
pub const UNKNOWN_AFFILIATION: &str = "Unknown";

/// Accumulates publication rows into a co-authorship [`Network`].
///
/// Nodes come out in first-appearance order; links come out grouped by
/// source in the order each source first linked, then by target in the
/// order each target first appeared for that source. Identical input
/// therefore always produces an identical network.
///
/// # Aggregation policies
///
/// - An author's `affiliation` and `country` are fixed at first
///   appearance; later rows never update them.
/// - `publications` counts occurrences in author lists, and one title is
///   appended per occurrence, so a name repeated within one row counts
///   twice for that row.
/// - Equal name tokens within one row do not link to themselves unless
///   [`with_self_links`](GraphBuilder::with_self_links) is enabled.
///
/// # Examples
///
/// ```
/// use authnet::{GraphBuilder, Publication};
///
/// let row = Publication {
///     authors: vec!["A.".to_string(), "B.".to_string()],
///     affiliations: vec!["A., Dept X, USA".to_string()],
///     title: "T1".to_string(),
/// };
///
/// let mut builder = GraphBuilder::new();
/// builder.add(&row);
/// let network = builder.finish();
///
/// assert_eq!(network.nodes[1].affiliation, "Unknown");
/// assert_eq!(network.links.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: NodeRegistry,
    links: LinkTable,
    self_links: bool,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count repeated occurrences of one author name within a single row
    /// as links from the name to itself.
    ///
    /// Off by default: equal name tokens never link, whatever their
    /// positions. When enabled, only the identical position is excluded,
    /// so a name appearing twice in a row produces a self-link with one
    /// increment per ordered position pair.
    #[must_use]
    pub fn with_self_links(mut self, enabled: bool) -> Self {
        self.self_links = enabled;
        self
    }

    /// Fold one publication row into the registry and the link table.
    pub fn add(&mut self, publication: &Publication) {
        for (i, author) in publication.authors.iter().enumerate() {
            let affiliation = publication
                .affiliations
                .get(i)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_AFFILIATION.to_string());
            self.nodes.upsert(author, affiliation, &publication.title);
        }

        let authors = &publication.authors;
        for ((i, author), (j, co_author)) in authors
            .iter()
            .enumerate()
            .cartesian_product(authors.iter().enumerate())
        {
            let excluded = if self.self_links {
                i == j
            } else {
                author == co_author
            };
            if !excluded {
                self.links.increment(author, co_author);
            }
        }
    }

    /// Freeze the accumulated state into a network document.
    #[must_use]
    pub fn finish(self) -> Network {
        Network {
            nodes: self.nodes.into_nodes(),
            links: self.links.into_links(),
        }
    }
}

/// Insertion-ordered author registry: nodes live in a `Vec`, the map only
/// holds positions, so projection order never depends on hashing.
#[derive(Debug, Default)]
struct NodeRegistry {
    entries: Vec<AuthorNode>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    fn upsert(&mut self, author: &str, affiliation: String, title: &str) {
        match self.index.get(author) {
            Some(&position) => {
                let node = &mut self.entries[position];
                node.publications += 1;
                node.titles.push(title.to_string());
            }
            None => {
                let country = extract_country(&affiliation);
                self.index.insert(author.to_string(), self.entries.len());
                self.entries.push(AuthorNode {
                    id: author.to_string(),
                    affiliation,
                    country,
                    publications: 1,
                    titles: vec![title.to_string()],
                });
            }
        }
    }

    fn into_nodes(self) -> Vec<AuthorNode> {
        self.entries
    }
}

/// Nested insertion-ordered pair counter: sources in the order they first
/// linked, targets per source in the order they first appeared.
#[derive(Debug, Default)]
struct LinkTable {
    sources: Vec<SourceLinks>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
struct SourceLinks {
    name: String,
    targets: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl LinkTable {
    fn increment(&mut self, source: &str, target: &str) {
        let position = match self.index.get(source) {
            Some(&position) => position,
            None => {
                self.index.insert(source.to_string(), self.sources.len());
                self.sources.push(SourceLinks {
                    name: source.to_string(),
                    targets: Vec::new(),
                    index: HashMap::new(),
                });
                self.sources.len() - 1
            }
        };

        let entry = &mut self.sources[position];
        match entry.index.get(target) {
            Some(&position) => entry.targets[position].1 += 1,
            None => {
                entry.index.insert(target.to_string(), entry.targets.len());
                entry.targets.push((target.to_string(), 1));
            }
        }
    }

    fn into_links(self) -> Vec<CoauthorLink> {
        self.sources
            .into_iter()
            .flat_map(|source| {
                let name = source.name;
                source
                    .targets
                    .into_iter()
                    .map(move |(target, value)| CoauthorLink {
                        source: name.clone(),
                        target,
                        value,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(authors: &[&str], affiliations: &[&str], title: &str) -> Publication {
        Publication {
            authors: authors.iter().map(|s| s.to_string()).collect(),
            affiliations: affiliations.iter().map(|s| s.to_string()).collect(),
            title: title.to_string(),
        }
    }

    fn link(source: &str, target: &str, value: u64) -> CoauthorLink {
        CoauthorLink {
            source: source.to_string(),
            target: target.to_string(),
            value,
        }
    }

    #[test]
    fn test_single_row_three_authors() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(
            &["A.", "B.", "C."],
            &["A., Dept X, USA", " B., Dept Y, UK", " C., Dept Z, USA"],
            "T1",
        ));
        let network = builder.finish();

        assert_eq!(network.nodes.len(), 3);
        let countries: Vec<&str> = network
            .nodes
            .iter()
            .map(|n| n.country.as_str())
            .collect();
        assert_eq!(countries, vec!["USA", "UK", "USA"]);
        for node in &network.nodes {
            assert_eq!(node.publications, 1);
            assert_eq!(node.titles, vec!["T1".to_string()]);
        }

        assert_eq!(
            network.links,
            vec![
                link("A.", "B.", 1),
                link("A.", "C.", 1),
                link("B.", "A.", 1),
                link("B.", "C.", 1),
                link("C.", "A.", 1),
                link("C.", "B.", 1),
            ]
        );
    }

    #[test]
    fn test_repeated_collaboration_accumulates() {
        let authors = ["A.", "B.", "C."];
        let affiliations = ["A., Dept X, USA", " B., Dept Y, UK", " C., Dept Z, USA"];

        let mut builder = GraphBuilder::new();
        builder.add(&row(&authors, &affiliations, "T1"));
        builder.add(&row(&authors, &affiliations, "T2"));
        let network = builder.finish();

        assert_eq!(network.nodes.len(), 3);
        for node in &network.nodes {
            assert_eq!(node.publications, 2);
            assert_eq!(node.titles, vec!["T1".to_string(), "T2".to_string()]);
        }
        assert_eq!(network.links.len(), 6);
        for l in &network.links {
            assert_eq!(l.value, 2);
        }
    }

    #[test]
    fn test_first_affiliation_wins() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A."], &["A., MIT, USA"], "T1"));
        builder.add(&row(&["A."], &["A., ETH, Switzerland"], "T2"));
        let network = builder.finish();

        assert_eq!(network.nodes.len(), 1);
        assert_eq!(network.nodes[0].affiliation, "A., MIT, USA");
        assert_eq!(network.nodes[0].country, "USA");
        assert_eq!(network.nodes[0].publications, 2);
    }

    #[test]
    fn test_missing_affiliation_uses_sentinel() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A.", "B."], &["A., MIT, USA"], "T1"));
        let network = builder.finish();

        assert_eq!(network.nodes[1].affiliation, UNKNOWN_AFFILIATION);
        assert_eq!(network.nodes[1].country, UNKNOWN_AFFILIATION);
    }

    #[test]
    fn test_node_order_is_first_appearance() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["B.", "A."], &[], "T1"));
        builder.add(&row(&["C.", "A."], &[], "T2"));
        let network = builder.finish();

        let ids: Vec<&str> = network.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B.", "A.", "C."]);
    }

    #[test]
    fn test_link_order_follows_source_insertion() {
        // A. gets its node first but only becomes a link source in the
        // second row, after B. has already linked.
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A."], &[], "T1"));
        builder.add(&row(&["B.", "A."], &[], "T2"));
        let network = builder.finish();

        let ids: Vec<&str> = network.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A.", "B."]);
        assert_eq!(
            network.links,
            vec![link("B.", "A.", 1), link("A.", "B.", 1)]
        );
    }

    #[test]
    fn test_duplicate_name_in_row_default() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A.", "A."], &["A., MIT, USA"], "T1"));
        let network = builder.finish();

        assert_eq!(network.nodes.len(), 1);
        assert_eq!(network.nodes[0].publications, 2);
        assert_eq!(
            network.nodes[0].titles,
            vec!["T1".to_string(), "T1".to_string()]
        );
        assert!(network.links.is_empty());
    }

    #[test]
    fn test_duplicate_name_in_row_with_self_links() {
        let mut builder = GraphBuilder::new().with_self_links(true);
        builder.add(&row(&["A.", "A."], &["A., MIT, USA"], "T1"));
        let network = builder.finish();

        assert_eq!(network.nodes.len(), 1);
        assert_eq!(network.links, vec![link("A.", "A.", 2)]);
    }

    #[test]
    fn test_duplicate_name_still_links_to_others() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A.", "B.", "A."], &[], "T1"));
        let network = builder.finish();

        // Each occurrence of A. links to B. and back, but the two A.
        // occurrences never link to each other.
        assert_eq!(
            network.links,
            vec![link("A.", "B.", 2), link("B.", "A.", 2)]
        );
    }

    #[test]
    fn test_publication_sum_matches_token_count() {
        let rows = vec![
            row(&["A.", "B."], &[], "T1"),
            row(&["B.", "C.", "D."], &[], "T2"),
            row(&["A."], &[], "T3"),
        ];
        let token_count: usize = rows.iter().map(|r| r.authors.len()).sum();

        let mut builder = GraphBuilder::new();
        for r in &rows {
            builder.add(r);
        }
        let network = builder.finish();

        let publication_sum: u64 = network.nodes.iter().map(|n| n.publications).sum();
        assert_eq!(publication_sum, token_count as u64);
    }

    #[test]
    fn test_pair_increment_count_per_row() {
        let mut builder = GraphBuilder::new();
        builder.add(&row(&["A.", "B.", "C.", "D."], &[], "T1"));
        let network = builder.finish();

        // k distinct authors produce k * (k - 1) directed increments.
        let total: u64 = network.links.iter().map(|l| l.value).sum();
        assert_eq!(total, 4 * 3);
        assert_eq!(network.links.len(), 12);
    }

    #[test]
    fn test_empty_builder_finishes_empty() {
        let network = GraphBuilder::new().finish();
        assert!(network.nodes.is_empty());
        assert!(network.links.is_empty());
    }
}
