//! Low-level CSV reading for publication exports.
//!
//! This module drives the `csv` reader and turns each record into a
//! [`Publication`] row. Field counts are strict: a row with more or fewer
//! fields than the header aborts the run with its line number.

use crate::Publication;
use crate::error::{ParseError, ValueError};
use crate::scopus::config::ScopusConfig;
use csv::{ReaderBuilder, StringRecord};

/// Positions of the three required columns within the header row.
struct ColumnIndexes {
    authors: usize,
    affiliations: usize,
    title: usize,
}

/// Parse the content of a publication export, returning its rows in order.
pub(crate) fn parse_export<S: AsRef<str>>(
    text: S,
    config: &ScopusConfig,
) -> Result<Vec<Publication>, ParseError> {
    let text = text.as_ref();

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    config.validate().map_err(|msg| {
        ParseError::without_position(ValueError::Syntax(format!(
            "invalid export configuration: {}",
            msg
        )))
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(ParseError::from)?.clone();
    let columns = locate_columns(&headers, config)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(ParseError::from)?;
        rows.push(publication_from_record(&record, &columns));
    }

    Ok(rows)
}

/// Find the required columns in the header, failing before any row is read
/// when one is absent.
fn locate_columns(
    headers: &StringRecord,
    config: &ScopusConfig,
) -> Result<ColumnIndexes, ParseError> {
    let locate = |name: &str| {
        headers.iter().position(|header| header == name).ok_or_else(|| {
            ParseError::without_position(ValueError::MissingColumn(name.to_string()))
        })
    };

    Ok(ColumnIndexes {
        authors: locate(&config.authors_column)?,
        affiliations: locate(&config.affiliations_column)?,
        title: locate(&config.title_column)?,
    })
}

/// Split one record into a publication row.
///
/// Author tokens are trimmed individually; affiliation tokens are kept
/// verbatim so first-seen affiliations survive into the output unchanged.
fn publication_from_record(record: &StringRecord, columns: &ColumnIndexes) -> Publication {
    let authors = record
        .get(columns.authors)
        .unwrap_or("")
        .split(',')
        .map(|token| token.trim().to_string())
        .collect();

    let affiliations = record
        .get(columns.affiliations)
        .unwrap_or("")
        .split(';')
        .map(String::from)
        .collect();

    let title = record.get(columns.title).unwrap_or("").to_string();

    Publication {
        authors,
        affiliations,
        title,
    }
}
