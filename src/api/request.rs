//! Request types for the overlap engine API.
//!
//! This module defines the JSON request body shared by the `/records` and
//! `/pairs` endpoints: an already-tokenized CSV table plus optional file
//! metadata from the upload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Row, TokenizedTable};

/// Request body for the `/records` and `/pairs` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentTableRequest {
    /// Metadata of the uploaded file, checked when present.
    #[serde(default)]
    pub file: Option<FileMetadataRequest>,
    /// Header row cells.
    pub headers: Vec<String>,
    /// Data rows keyed by header name.
    #[serde(default)]
    pub rows: Vec<HashMap<String, String>>,
}

/// Declared metadata of an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadataRequest {
    /// The file name, including extension.
    pub name: String,
    /// The declared media type (e.g., "text/csv").
    pub media_type: String,
}

impl From<AssignmentTableRequest> for TokenizedTable {
    /// Trims header names and row keys, and drops rows with no cells.
    fn from(req: AssignmentTableRequest) -> Self {
        TokenizedTable {
            headers: req
                .headers
                .into_iter()
                .map(|h| h.trim().to_string())
                .collect(),
            rows: req
                .rows
                .into_iter()
                .filter(|row| !row.is_empty())
                .map(trim_keys)
                .collect(),
        }
    }
}

/// Trims every key of a row.
///
/// When two keys trim to the same name, a key that was already trimmed wins;
/// otherwise the raw key that sorts first wins.
fn trim_keys(row: HashMap<String, String>) -> Row {
    let mut cells: Vec<(String, String)> = row.into_iter().collect();
    cells.sort_by(|(a, _), (b, _)| {
        (a.trim() != a.as_str(), a).cmp(&(b.trim() != b.as_str(), b))
    });

    let mut trimmed = Row::with_capacity(cells.len());
    for (key, value) in cells {
        trimmed.entry(key.trim().to_string()).or_insert(value);
    }
    trimmed
}
