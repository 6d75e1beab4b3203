//! Table-level ingestion of assignment rows.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{IngestionResult, TokenizedTable};

use super::date_interpreter::DateInterpreter;
use super::row_validator::{REQUIRED_HEADERS, validate_row};

/// Row number of the first data row; the header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// Validates every row of a tokenized table.
///
/// Ingestion is all-or-nothing: the first invalid row aborts the whole table
/// and no records are returned. Ambiguous dates do not fail a row; their row
/// numbers are reported once each, in ascending order.
///
/// # Errors
///
/// - [`EngineError::MissingHeaders`] listing every absent required column
/// - [`EngineError::Row`] for the first row that fails validation
///
/// # Example
///
/// ```
/// use overlap_engine::models::TokenizedTable;
/// use overlap_engine::parsing::{ingest, DateInterpreter};
/// use chrono::NaiveDate;
///
/// let interpreter = DateInterpreter::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
/// let table = TokenizedTable {
///     headers: vec!["EmpID".into(), "ProjectID".into(), "DateFrom".into()],
///     rows: vec![],
/// };
///
/// let err = ingest(&table, &interpreter).unwrap_err();
/// assert_eq!(err.to_string(), "Missing required header(s): DateTo");
/// ```
pub fn ingest(
    table: &TokenizedTable,
    interpreter: &DateInterpreter,
) -> EngineResult<IngestionResult> {
    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|name| !table.has_header(name))
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(EngineError::MissingHeaders { names: missing });
    }

    let mut records = Vec::with_capacity(table.rows.len());
    let mut ambiguous_rows = BTreeSet::new();

    for (index, row) in table.rows.iter().enumerate() {
        let row_number = index + FIRST_DATA_ROW;
        let validated = validate_row(row, row_number, interpreter)?;

        if validated.is_ambiguous {
            ambiguous_rows.insert(row_number);
        }
        records.push(validated.record);
    }

    debug!(records = records.len(), "Ingested assignment table");
    if !ambiguous_rows.is_empty() {
        warn!(rows = ?ambiguous_rows, "Ambiguous dates read with the highest-priority format");
    }

    Ok(IngestionResult {
        records,
        ambiguous_rows: ambiguous_rows.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateField, RowError};
    use crate::models::Row;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn interpreter() -> DateInterpreter {
        DateInterpreter::new(make_date("2024-06-15"))
    }

    fn headers() -> Vec<String> {
        REQUIRED_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    fn make_row(emp_id: &str, project_id: &str, date_from: &str, date_to: &str) -> Row {
        [
            ("EmpID", emp_id),
            ("ProjectID", project_id),
            ("DateFrom", date_from),
            ("DateTo", date_to),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn make_table(rows: Vec<Row>) -> TokenizedTable {
        TokenizedTable {
            headers: headers(),
            rows,
        }
    }

    #[test]
    fn test_ingests_rows_in_order() {
        let table = make_table(vec![
            make_row("1", "100", "2023-01-01", "2023-01-31"),
            make_row("2", "200", "2023-02-01", "2023-02-28"),
            make_row("3", "100", "2023-01-15", "2023-02-15"),
        ]);

        let result = ingest(&table, &interpreter()).unwrap();
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.records[1].emp_id, 2);
        assert_eq!(result.records[1].project_id, 200);
        assert!(result.ambiguous_rows.is_empty());
    }

    #[test]
    fn test_empty_table_with_headers_is_ok() {
        let result = ingest(&make_table(vec![]), &interpreter()).unwrap();
        assert!(result.records.is_empty());
        assert!(result.ambiguous_rows.is_empty());
    }

    #[test]
    fn test_missing_date_to_header() {
        let table = TokenizedTable {
            headers: vec!["EmpID".into(), "ProjectID".into(), "DateFrom".into()],
            rows: vec![],
        };

        match ingest(&table, &interpreter()) {
            Err(EngineError::MissingHeaders { names }) => assert_eq!(names, vec!["DateTo"]),
            other => panic!("Expected MissingHeaders, got {:?}", other),
        }
    }

    #[test]
    fn test_no_headers_reports_all_required() {
        let err = ingest(&TokenizedTable::default(), &interpreter()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required header(s): EmpID, ProjectID, DateFrom, DateTo"
        );
    }

    #[test]
    fn test_headers_are_case_sensitive() {
        let table = TokenizedTable {
            headers: vec![
                "empid".into(),
                "ProjectID".into(),
                "DateFrom".into(),
                "DateTo".into(),
            ],
            rows: vec![],
        };
        match ingest(&table, &interpreter()) {
            Err(EngineError::MissingHeaders { names }) => assert_eq!(names, vec!["EmpID"]),
            other => panic!("Expected MissingHeaders, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut table = make_table(vec![make_row("1", "100", "2023-01-01", "2023-01-31")]);
        table.headers.push("Notes".into());
        table.rows[0].insert("Notes".into(), "contractor".into());

        let result = ingest(&table, &interpreter()).unwrap();
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_fails_fast_on_first_bad_row() {
        let table = make_table(vec![
            make_row("1", "100", "2023-01-01", "2023-01-31"),
            make_row("abc", "100", "2023-01-01", "2023-01-31"),
            make_row("3", "100", "", "2023-01-31"),
        ]);

        let err = ingest(&table, &interpreter()).unwrap_err();
        assert_eq!(err.row_number(), Some(3));
        assert_eq!(err.to_string(), "Invalid EmpID or ProjectID at row 3");
    }

    #[test]
    fn test_invalid_date_row_error() {
        let table = make_table(vec![make_row("1", "100", "2023-01-01", "invalid-date")]);

        match ingest(&table, &interpreter()) {
            Err(EngineError::Row(err)) => {
                assert_eq!(
                    err,
                    RowError::InvalidDate {
                        row: 2,
                        field: DateField::DateTo,
                        text: "invalid-date".to_string(),
                    }
                );
            }
            other => panic!("Expected Row error, got {:?}", other),
        }
    }

    #[test]
    fn test_ambiguous_rows_are_unique_and_ordered() {
        let table = make_table(vec![
            make_row("1", "100", "2023-01-01", "2023-01-31"),
            // Both cells ambiguous; row reported once.
            make_row("2", "100", "01/05/2023", "02/03/2023"),
            make_row("3", "100", "2023-01-01", "03/04/2023"),
        ]);

        let result = ingest(&table, &interpreter()).unwrap();
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.ambiguous_rows, vec![3, 4]);
    }

    #[test]
    fn test_null_date_to_becomes_today() {
        let table = make_table(vec![make_row("1", "100", "2023-01-01", "NULL")]);
        let result = ingest(&table, &interpreter()).unwrap();
        assert_eq!(result.records[0].date_to, make_date("2024-06-15"));
    }
}
