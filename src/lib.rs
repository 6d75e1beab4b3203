//! Employee project overlap engine
//!
//! This crate ingests tabular employee-to-project assignment records with
//! loosely formatted dates, then finds, for every project, how many calendar
//! days each pair of employees worked on it at the same time.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
