//! Projection of a network into its JSON document form.
//!
//! The document is always materialized fully in memory before anything
//! touches the filesystem, so a failed run never leaves a truncated file
//! where a previous output used to be.

use std::fs;
use std::path::Path;

use crate::Network;
use crate::error::NetworkError;

/// Serialize a network as an indented JSON document.
///
/// Nodes and links keep their builder insertion order. Non-ASCII
/// characters pass through unescaped.
pub fn to_json_pretty(network: &Network) -> Result<String, NetworkError> {
    Ok(serde_json::to_string_pretty(network)?)
}

/// Write a network to `path` as an indented JSON document.
///
/// Serialization happens first and in full; only then is the file written,
/// in a single call.
pub fn write(network: &Network, path: &Path) -> Result<(), NetworkError> {
    let json = to_json_pretty(network)?;

    fs::write(path, json).map_err(|source| NetworkError::SinkWrite {
        path: path.to_path_buf(),
        source,
    })
}
