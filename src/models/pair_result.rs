//! Pair overlap result models.

use serde::{Deserialize, Serialize};

/// A confirmed overlap between two employees on one project.
///
/// `emp1` is the employee whose record appeared first within the project's
/// group of records, not the numerically smaller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairResult {
    /// Employee from the earlier record.
    pub emp1: i64,
    /// Employee from the later record.
    pub emp2: i64,
    /// The shared project.
    pub project_id: i64,
    /// Overlapping calendar days, always at least 1.
    pub days_worked: i64,
}

impl PairResult {
    /// Returns the pair as an order-independent key.
    pub fn unordered_key(&self) -> (i64, i64) {
        if self.emp1 <= self.emp2 {
            (self.emp1, self.emp2)
        } else {
            (self.emp2, self.emp1)
        }
    }
}

/// The employee pair with the most overlapping days across all projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantPair {
    /// First employee, oriented as in the first pair result seen.
    pub emp1: i64,
    /// Second employee.
    pub emp2: i64,
    /// Sum of `days_worked` over every shared project.
    pub total_days: i64,
    /// The pair's per-project results, longest first.
    pub projects: Vec<PairResult>,
}
