//! Selection of the longest-collaborating employee pair.

use std::collections::HashMap;

use crate::models::{DominantPair, PairResult};

/// Finds the pair of employees with the largest total overlap.
///
/// Pair results are summed per unordered employee pair, so `(1, 2)` on one
/// project and `(2, 1)` on another count toward the same total. On a tie the
/// pair whose first result appears earliest in `pairs` wins. The reported
/// `emp1`/`emp2` keep the orientation of that first result.
///
/// Returns `None` when `pairs` is empty.
///
/// # Example
///
/// ```
/// use overlap_engine::calculation::find_dominant_pair;
/// use overlap_engine::models::PairResult;
///
/// let pairs = vec![
///     PairResult { emp1: 1, emp2: 2, project_id: 100, days_worked: 10 },
///     PairResult { emp1: 1, emp2: 3, project_id: 100, days_worked: 12 },
///     PairResult { emp1: 2, emp2: 1, project_id: 200, days_worked: 5 },
/// ];
///
/// let dominant = find_dominant_pair(&pairs).unwrap();
/// assert_eq!((dominant.emp1, dominant.emp2), (1, 2));
/// assert_eq!(dominant.total_days, 15);
/// assert_eq!(dominant.projects.len(), 2);
/// ```
pub fn find_dominant_pair(pairs: &[PairResult]) -> Option<DominantPair> {
    let mut slot_by_key: HashMap<(i64, i64), usize> = HashMap::new();
    // (first result seen, running total) in insertion order
    let mut totals: Vec<(&PairResult, i64)> = Vec::new();

    for pair in pairs {
        match slot_by_key.get(&pair.unordered_key()) {
            Some(&slot) => totals[slot].1 += pair.days_worked,
            None => {
                slot_by_key.insert(pair.unordered_key(), totals.len());
                totals.push((pair, pair.days_worked));
            }
        }
    }

    let mut best: Option<(&PairResult, i64)> = None;
    for &(first, total) in &totals {
        if best.is_none_or(|(_, best_total)| total > best_total) {
            best = Some((first, total));
        }
    }

    let (first, total_days) = best?;
    let key = first.unordered_key();

    let mut projects: Vec<PairResult> = pairs
        .iter()
        .filter(|p| p.unordered_key() == key)
        .copied()
        .collect();
    projects.sort_by(|a, b| b.days_worked.cmp(&a.days_worked));

    Some(DominantPair {
        emp1: first.emp1,
        emp2: first.emp2,
        total_days,
        projects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(emp1: i64, emp2: i64, project_id: i64, days_worked: i64) -> PairResult {
        PairResult {
            emp1,
            emp2,
            project_id,
            days_worked,
        }
    }

    #[test]
    fn test_no_pairs_means_no_dominant_pair() {
        assert_eq!(find_dominant_pair(&[]), None);
    }

    #[test]
    fn test_single_pair_is_dominant() {
        let dominant = find_dominant_pair(&[pair(1, 2, 100, 17)]).unwrap();
        assert_eq!(dominant.emp1, 1);
        assert_eq!(dominant.emp2, 2);
        assert_eq!(dominant.total_days, 17);
        assert_eq!(dominant.projects, vec![pair(1, 2, 100, 17)]);
    }

    #[test]
    fn test_totals_sum_across_projects() {
        let pairs = vec![
            pair(1, 2, 100, 10),
            pair(3, 4, 100, 25),
            pair(1, 2, 200, 20),
        ];

        let dominant = find_dominant_pair(&pairs).unwrap();
        assert_eq!((dominant.emp1, dominant.emp2), (1, 2));
        assert_eq!(dominant.total_days, 30);
    }

    #[test]
    fn test_orientation_does_not_split_totals() {
        let pairs = vec![
            pair(2, 1, 100, 10),
            pair(3, 4, 100, 15),
            pair(1, 2, 200, 10),
        ];

        let dominant = find_dominant_pair(&pairs).unwrap();
        assert_eq!((dominant.emp1, dominant.emp2), (2, 1));
        assert_eq!(dominant.total_days, 20);
        assert_eq!(dominant.projects.len(), 2);
    }

    #[test]
    fn test_tie_goes_to_first_encountered_pair() {
        let pairs = vec![pair(5, 6, 100, 10), pair(1, 2, 100, 10)];

        let dominant = find_dominant_pair(&pairs).unwrap();
        assert_eq!((dominant.emp1, dominant.emp2), (5, 6));
    }

    #[test]
    fn test_projects_sorted_longest_first() {
        let pairs = vec![
            pair(1, 2, 100, 3),
            pair(1, 2, 200, 9),
            pair(1, 2, 300, 3),
            pair(1, 2, 400, 5),
        ];

        let dominant = find_dominant_pair(&pairs).unwrap();
        let projects: Vec<i64> = dominant.projects.iter().map(|p| p.project_id).collect();
        assert_eq!(projects, vec![200, 400, 100, 300]);
    }
}
