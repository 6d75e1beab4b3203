//! Pairwise day-overlap aggregation per project.
//!
//! Records are grouped by project in order of first appearance, and every
//! pair of records within a group is compared. The comparison is quadratic
//! in the size of a project's roster, which stays small in practice.

use std::collections::HashMap;

use crate::models::{EmployeeRecord, PairResult};

/// Counts the calendar days two inclusive date ranges share.
///
/// Returns 0 or less when the ranges do not intersect, including when either
/// range is reversed.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::overlap_days;
/// use overlap_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
///
/// let date = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
/// let a = EmployeeRecord { emp_id: 1, project_id: 100, date_from: date("2023-01-01"), date_to: date("2023-01-31") };
/// let b = EmployeeRecord { emp_id: 2, project_id: 100, date_from: date("2023-01-15"), date_to: date("2023-02-15") };
/// assert_eq!(overlap_days(&a, &b), 17);
/// ```
pub fn overlap_days(a: &EmployeeRecord, b: &EmployeeRecord) -> i64 {
    let start = a.date_from.max(b.date_from);
    let end = a.date_to.min(b.date_to);
    (end - start).num_days() + 1
}

/// Computes every positive employee-pair overlap within each project.
///
/// # Ordering
///
/// - Projects are visited in order of their first appearance in `records`
/// - Within a project, pairs `(i, j)` with `i < j` are emitted in
///   lexicographic order of record position
/// - `emp1` comes from record `i` and `emp2` from record `j`, whatever
///   their numeric values
///
/// Pairs with no shared day are omitted. Two records for the same employee
/// on one project are compared like any other pair.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::aggregate_pairs;
///
/// assert!(aggregate_pairs(&[]).is_empty());
/// ```
pub fn aggregate_pairs(records: &[EmployeeRecord]) -> Vec<PairResult> {
    let mut group_index: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<(i64, Vec<&EmployeeRecord>)> = Vec::new();

    for record in records {
        let index = *group_index.entry(record.project_id).or_insert_with(|| {
            groups.push((record.project_id, Vec::new()));
            groups.len() - 1
        });
        groups[index].1.push(record);
    }

    let mut results = Vec::new();

    for (project_id, members) in &groups {
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                let days_worked = overlap_days(a, b);
                if days_worked > 0 {
                    results.push(PairResult {
                        emp1: a.emp_id,
                        emp2: b.emp_id,
                        project_id: *project_id,
                        days_worked,
                    });
                }
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(emp_id: i64, project_id: i64, from: &str, to: &str) -> EmployeeRecord {
        EmployeeRecord {
            emp_id,
            project_id,
            date_from: make_date(from),
            date_to: make_date(to),
        }
    }

    #[test]
    fn test_empty_records_yield_no_pairs() {
        assert!(aggregate_pairs(&[]).is_empty());
    }

    #[test]
    fn test_one_employee_per_project_yields_no_pairs() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-31"),
            make_record(2, 200, "2023-01-01", "2023-01-31"),
        ];
        assert!(aggregate_pairs(&records).is_empty());
    }

    #[test]
    fn test_two_employees_same_project() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-31"),
            make_record(2, 100, "2023-01-15", "2023-02-15"),
        ];

        assert_eq!(
            aggregate_pairs(&records),
            vec![PairResult {
                emp1: 1,
                emp2: 2,
                project_id: 100,
                days_worked: 17,
            }]
        );
    }

    #[test]
    fn test_single_shared_day_counts_as_one() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-15"),
            make_record(2, 100, "2023-01-15", "2023-01-31"),
        ];

        let result = aggregate_pairs(&records);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].days_worked, 1);
    }

    #[test]
    fn test_disjoint_ranges_yield_no_pair() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-15"),
            make_record(2, 100, "2023-01-16", "2023-01-31"),
        ];
        assert!(aggregate_pairs(&records).is_empty());
    }

    #[test]
    fn test_identical_ranges() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-10"),
            make_record(2, 100, "2023-01-01", "2023-01-10"),
        ];
        assert_eq!(aggregate_pairs(&records)[0].days_worked, 10);
    }

    #[test]
    fn test_reversed_range_overlaps_nothing() {
        let records = vec![
            make_record(1, 100, "2023-01-20", "2023-01-10"),
            make_record(2, 100, "2023-01-01", "2023-01-31"),
        ];
        assert!(aggregate_pairs(&records).is_empty());
    }

    #[test]
    fn test_projects_are_independent() {
        let records = vec![
            make_record(1, 100, "2023-01-01", "2023-01-31"),
            make_record(2, 100, "2023-01-15", "2023-02-15"),
            make_record(1, 200, "2023-02-01", "2023-02-28"),
            make_record(3, 200, "2023-02-15", "2023-03-15"),
        ];

        let result = aggregate_pairs(&records);
        assert_eq!(
            result,
            vec![
                PairResult {
                    emp1: 1,
                    emp2: 2,
                    project_id: 100,
                    days_worked: 17,
                },
                PairResult {
                    emp1: 1,
                    emp2: 3,
                    project_id: 200,
                    days_worked: 14,
                },
            ]
        );
    }

    #[test]
    fn test_three_employees_emit_all_pairs_in_position_order() {
        // Ids deliberately out of numeric order.
        let records = vec![
            make_record(30, 100, "2023-01-01", "2023-01-31"),
            make_record(10, 100, "2023-01-15", "2023-02-15"),
            make_record(20, 100, "2023-01-20", "2023-02-20"),
        ];

        let pairs: Vec<(i64, i64)> = aggregate_pairs(&records)
            .iter()
            .map(|p| (p.emp1, p.emp2))
            .collect();
        assert_eq!(pairs, vec![(30, 10), (30, 20), (10, 20)]);
    }

    #[test]
    fn test_projects_visited_in_first_appearance_order() {
        let records = vec![
            make_record(1, 500, "2023-01-01", "2023-01-31"),
            make_record(1, 100, "2023-01-01", "2023-01-31"),
            make_record(2, 100, "2023-01-01", "2023-01-05"),
            make_record(2, 500, "2023-01-01", "2023-01-02"),
        ];

        let projects: Vec<i64> = aggregate_pairs(&records)
            .iter()
            .map(|p| p.project_id)
            .collect();
        assert_eq!(projects, vec![500, 100]);
    }

    #[test]
    fn test_overlap_across_month_boundary_and_leap_day() {
        let a = make_record(1, 100, "2024-02-20", "2024-03-10");
        let b = make_record(2, 100, "2024-02-28", "2024-03-31");
        // Feb 28, Feb 29, then Mar 1 through Mar 10.
        assert_eq!(overlap_days(&a, &b), 12);
    }
}
