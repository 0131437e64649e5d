//! Column mapping and dialect configuration for publication exports.

/// Default header name of the author-list column.
pub(crate) const AUTHORS_COLUMN: &str = "Authors";
/// Default header name of the affiliation-list column.
pub(crate) const AFFILIATIONS_COLUMN: &str = "Authors with affiliations";
/// Default header name of the title column.
pub(crate) const TITLE_COLUMN: &str = "Title";

/// Configuration for reading a publication export.
///
/// The defaults match a Scopus CSV export: comma-delimited, double-quoted,
/// with `Authors`, `Authors with affiliations` and `Title` columns. Exports
/// with renamed columns or another delimiter can override each setting.
/// Column names are matched exactly, including case.
///
/// # Examples
///
/// ```
/// use authnet::scopus::ScopusConfig;
///
/// let mut config = ScopusConfig::new();
/// config
///     .set_authors_column("Author Names")
///     .set_delimiter(b';');
/// ```
#[derive(Debug, Clone)]
pub struct ScopusConfig {
    /// Header name of the author-list column
    pub(crate) authors_column: String,
    /// Header name of the affiliation-list column
    pub(crate) affiliations_column: String,
    /// Header name of the title column
    pub(crate) title_column: String,
    /// Field delimiter
    pub(crate) delimiter: u8,
    /// Quote character
    pub(crate) quote: u8,
}

impl Default for ScopusConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopusConfig {
    /// Creates a new configuration with Scopus export defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            authors_column: AUTHORS_COLUMN.to_string(),
            affiliations_column: AFFILIATIONS_COLUMN.to_string(),
            title_column: TITLE_COLUMN.to_string(),
            delimiter: b',',
            quote: b'"',
        }
    }

    /// Sets the header name of the author-list column.
    pub fn set_authors_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.authors_column = name.into();
        self
    }

    /// Sets the header name of the affiliation-list column.
    pub fn set_affiliations_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.affiliations_column = name.into();
        self
    }

    /// Sets the header name of the title column.
    pub fn set_title_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.title_column = name.into();
        self
    }

    /// Sets the field delimiter.
    pub fn set_delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    pub fn set_quote(&mut self, quote: u8) -> &mut Self {
        self.quote = quote;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        for name in [
            &self.authors_column,
            &self.affiliations_column,
            &self.title_column,
        ] {
            if name.is_empty() {
                return Err("column names must not be empty".to_string());
            }
        }

        if self.authors_column == self.affiliations_column
            || self.authors_column == self.title_column
            || self.affiliations_column == self.title_column
        {
            return Err("column names must be distinct".to_string());
        }

        if self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err("delimiter cannot be a newline character".to_string());
        }

        Ok(())
    }
}
