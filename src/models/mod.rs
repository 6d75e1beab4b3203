//! Core data models for the overlap engine.
//!
//! This module contains the plain data types that flow from tokenized
//! tables through ingestion to pair results.

mod employee_record;
mod pair_result;
mod table;

pub use employee_record::EmployeeRecord;
pub use pair_result::{DominantPair, PairResult};
pub use table::{IngestionResult, Row, TokenizedTable};
