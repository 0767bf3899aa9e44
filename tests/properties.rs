//! Property-based checks of the solver against a brute-force reference:
//! every emitted solution is a valid exact cover (primary items covered
//! exactly once, secondary items covered at most once), no item is covered
//! twice, and the full solution set matches exhaustive enumeration over
//! small random matrices with a random primary/secondary item split.

use std::collections::HashSet;

use proptest::collection::vec as pvec;
use proptest::prelude::*;

use xcover::lowlevel::Matrix;

const MAX_ITEMS: usize = 6;
const MAX_ROWS: usize = 6;

/// A random row: a non-empty, duplicate-free subset of `1..=item_count`.
fn row_strategy(item_count: usize) -> impl Strategy<Value = Vec<usize>> {
    pvec(1..=item_count, 1..=item_count).prop_map(|mut items| {
        items.sort_unstable();
        items.dedup();
        items
    })
}

/// A random subset of `1..=item_count` to mark as secondary.
fn secondary_strategy(item_count: usize) -> impl Strategy<Value = Vec<usize>> {
    pvec(any::<bool>(), item_count).prop_map(move |flags| {
        (1..=item_count).filter(|&i| flags[i - 1]).collect()
    })
}

fn matrix_strategy() -> impl Strategy<Value = (usize, Vec<usize>, Vec<Vec<usize>>)> {
    (1..=MAX_ITEMS).prop_flat_map(|item_count| {
        (
            Just(item_count),
            secondary_strategy(item_count),
            pvec(row_strategy(item_count), 0..=MAX_ROWS),
        )
    })
}

/// Exhaustively enumerates every subset of `rows` that covers each primary
/// item in `1..=item_count` exactly once and each item in `secondary` at
/// most once, for comparison against the solver's own output.
fn brute_force(item_count: usize, secondary: &[usize], rows: &[Vec<usize>]) -> HashSet<Vec<usize>> {
    let mut solutions = HashSet::new();
    for mask in 0u32..(1 << rows.len()) {
        let mut covered = vec![0u8; item_count + 1];
        let mut chosen = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            if mask & (1 << i) != 0 {
                chosen.push(i + 1);
                for &item in row {
                    covered[item] += 1;
                }
            }
        }
        let valid = (1..=item_count).all(|item| {
            if secondary.contains(&item) {
                covered[item] <= 1
            } else {
                covered[item] == 1
            }
        });
        if valid {
            solutions.insert(chosen);
        }
    }
    solutions
}

proptest! {
    #[test]
    fn every_emitted_solution_is_a_valid_exact_cover(
        (item_count, secondary, rows) in matrix_strategy()
    ) {
        let matrix = Matrix::with_secondary(item_count, &secondary, rows.clone()).unwrap();
        for solution in matrix {
            let mut covered = vec![0u8; item_count + 1];
            for &row_number in &solution {
                for &item in &rows[row_number - 1] {
                    covered[item] += 1;
                }
            }
            for item in 1..=item_count {
                if secondary.contains(&item) {
                    prop_assert!(covered[item] <= 1, "secondary item {} covered {} times", item, covered[item]);
                } else {
                    prop_assert_eq!(covered[item], 1, "item {} covered {} times", item, covered[item]);
                }
            }
        }
    }

    #[test]
    fn no_row_is_repeated_within_a_solution(
        (item_count, secondary, rows) in matrix_strategy()
    ) {
        let matrix = Matrix::with_secondary(item_count, &secondary, rows).unwrap();
        for solution in matrix {
            let unique: HashSet<_> = solution.iter().copied().collect();
            prop_assert_eq!(unique.len(), solution.len());
        }
    }

    #[test]
    fn solution_set_matches_brute_force_enumeration(
        (item_count, secondary, rows) in matrix_strategy()
    ) {
        let matrix = Matrix::with_secondary(item_count, &secondary, rows.clone()).unwrap();
        let found: HashSet<Vec<usize>> = matrix.collect();
        let expected = brute_force(item_count, &secondary, &rows);
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn search_is_deterministic_across_runs(
        (item_count, secondary, rows) in matrix_strategy()
    ) {
        let first: Vec<_> =
            Matrix::with_secondary(item_count, &secondary, rows.clone()).unwrap().collect();
        let second: Vec<_> = Matrix::with_secondary(item_count, &secondary, rows).unwrap().collect();
        prop_assert_eq!(first, second);
    }
}
