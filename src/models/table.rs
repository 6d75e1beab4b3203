//! Tokenized input tables and ingestion output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// One tokenized data row: column name to raw cell text.
pub type Row = HashMap<String, String>;

/// A table as delivered by a CSV tokenizer.
///
/// Header names are expected to be trimmed already.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Data rows in file order.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TokenizedTable {
    /// Returns true if the header row contains `name` exactly.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// The outcome of ingesting a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionResult {
    /// Records in input row order.
    pub records: Vec<EmployeeRecord>,
    /// Row numbers holding at least one ambiguous date, ascending and unique.
    pub ambiguous_rows: Vec<usize>,
}
