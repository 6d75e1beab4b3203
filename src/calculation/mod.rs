//! Overlap calculations over ingested assignment records.
//!
//! This module computes per-project employee-pair overlaps in whole
//! calendar days and derives the pair with the longest total collaboration.

mod dominant_pair;
mod overlap;

pub use dominant_pair::find_dominant_pair;
pub use overlap::{aggregate_pairs, overlap_days};
