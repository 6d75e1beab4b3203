//! Employee assignment model.
//!
//! This module defines the [`EmployeeRecord`] struct, one employee's
//! assignment to one project over an inclusive span of calendar days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One assignment of an employee to a project.
///
/// Both dates are calendar days with no time-of-day or zone component, so
/// day arithmetic between them is exact. `date_from` may fall after
/// `date_to`; such a record simply overlaps with nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee identifier (`EmpID`).
    pub emp_id: i64,
    /// The project identifier (`ProjectID`).
    pub project_id: i64,
    /// First day of the assignment, inclusive.
    pub date_from: NaiveDate,
    /// Last day of the assignment, inclusive.
    pub date_to: NaiveDate,
}
