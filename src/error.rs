//! Error types for network-building operations.
//!
//! This module defines a structured error hierarchy covering the whole
//! pipeline: reading the export, parsing rows, and writing the output
//! document. Parse failures carry line positions where available.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the export-to-network pipeline.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The input file was missing, unreadable, or not valid UTF-8.
    /// Raised before any row is processed.
    #[error("failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The network could not be serialized. No output is written.
    #[error("failed to serialize network: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output path could not be written. Any previous file at that
    /// path is left as it was.
    #[error("failed to write {}: {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse error with location context.
///
/// Parsing is all-or-nothing: the first malformed row aborts the run, so a
/// single `ParseError` describes why no network was produced.
#[derive(Error, Debug)]
#[error("error in publication export{}: {error}",
    match line {
        Some(l) => format!(" at line {}", l),
        None => String::new(),
    }
)]
pub struct ParseError {
    /// Line number where the error occurred (1-based, None if not available)
    pub line: Option<usize>,
    /// The specific error that occurred
    pub error: ValueError,
}

impl ParseError {
    /// Create a ParseError with line information.
    pub fn at_line(line: usize, error: ValueError) -> Self {
        Self {
            line: Some(line),
            error,
        }
    }

    /// Create a ParseError without position information.
    pub fn without_position(error: ValueError) -> Self {
        Self { line: None, error }
    }
}

/// Specific value-level errors that can occur during parsing.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("bad syntax: {0}")]
    Syntax(String),

    #[error("missing required column \"{0}\"")]
    MissingColumn(String),
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|position| position.line() as usize);

        ParseError {
            line,
            error: ValueError::Syntax(err.to_string()),
        }
    }
}
