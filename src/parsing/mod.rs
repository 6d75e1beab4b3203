//! Parsing of tokenized assignment tables.
//!
//! This module turns raw text rows into typed [`EmployeeRecord`]s:
//! flexible date interpretation with ambiguity detection, per-row
//! validation, all-or-nothing ingestion of a whole table, and the file
//! type check applied to uploads before any of that runs.
//!
//! [`EmployeeRecord`]: crate::models::EmployeeRecord

mod date_interpreter;
mod ingestion;
mod row_validator;
mod upload;

pub use date_interpreter::{DateFormat, DateInterpreter, ParseResult, SUPPORTED_FORMATS};
pub use ingestion::{FIRST_DATA_ROW, ingest};
pub use row_validator::{EMP_ID, PROJECT_ID, REQUIRED_HEADERS, ValidatedRow, validate_row};
pub use upload::validate_upload;
