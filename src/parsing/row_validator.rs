//! Validation of a single tokenized assignment row.

use crate::error::{DateField, RowError};
use crate::models::{EmployeeRecord, Row};

use super::date_interpreter::{DateInterpreter, ParseResult};

/// Employee identifier column.
pub const EMP_ID: &str = "EmpID";
/// Project identifier column.
pub const PROJECT_ID: &str = "ProjectID";

/// Columns every assignment table must carry, in reporting order.
pub const REQUIRED_HEADERS: [&str; 4] = [EMP_ID, PROJECT_ID, "DateFrom", "DateTo"];

/// A row that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    /// The typed assignment.
    pub record: EmployeeRecord,
    /// True if either date cell could be read as more than one day.
    pub is_ambiguous: bool,
}

/// Validates one data row and converts it into an [`EmployeeRecord`].
///
/// Checks run in a fixed order: identifiers, then presence of both dates,
/// then parsing of `DateFrom` and `DateTo`. The first failure is returned.
///
/// # Arguments
///
/// * `row` - Column name to raw cell text
/// * `row_number` - The 1-based row number used in error messages
/// * `interpreter` - The date interpreter supplying "today" for `NULL` cells
///
/// # Example
///
/// ```
/// use overlap_engine::models::Row;
/// use overlap_engine::parsing::{validate_row, DateInterpreter};
/// use chrono::NaiveDate;
///
/// let interpreter = DateInterpreter::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// let row: Row = [
///     ("EmpID", "143"),
///     ("ProjectID", "12"),
///     ("DateFrom", "2013-11-01"),
///     ("DateTo", "NULL"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let validated = validate_row(&row, 2, &interpreter).unwrap();
/// assert_eq!(validated.record.emp_id, 143);
/// assert_eq!(validated.record.date_to, interpreter.today());
/// ```
pub fn validate_row(
    row: &Row,
    row_number: usize,
    interpreter: &DateInterpreter,
) -> Result<ValidatedRow, RowError> {
    let (emp_id, project_id) = match (
        parse_identifier(row.get(EMP_ID)),
        parse_identifier(row.get(PROJECT_ID)),
    ) {
        (Some(emp_id), Some(project_id)) => (emp_id, project_id),
        _ => return Err(RowError::InvalidIdentifier { row: row_number }),
    };

    let from_text = required_cell(row, row_number, DateField::DateFrom)?;
    let to_text = required_cell(row, row_number, DateField::DateTo)?;

    let from = parse_date(interpreter, row_number, DateField::DateFrom, from_text)?;
    let to = parse_date(interpreter, row_number, DateField::DateTo, to_text)?;

    Ok(ValidatedRow {
        record: EmployeeRecord {
            emp_id,
            project_id,
            date_from: from.date,
            date_to: to.date,
        },
        is_ambiguous: from.is_ambiguous || to.is_ambiguous,
    })
}

fn parse_identifier(value: Option<&String>) -> Option<i64> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

fn required_cell(row: &Row, row_number: usize, field: DateField) -> Result<&str, RowError> {
    match row.get(field.column()) {
        Some(text) if !text.trim().is_empty() => Ok(text.as_str()),
        _ => Err(RowError::MissingDate {
            row: row_number,
            field,
        }),
    }
}

fn parse_date(
    interpreter: &DateInterpreter,
    row_number: usize,
    field: DateField,
    text: &str,
) -> Result<ParseResult, RowError> {
    interpreter
        .parse(Some(text))
        .map_err(|_| RowError::InvalidDate {
            row: row_number,
            field,
            text: text.to_string(),
        })
}
