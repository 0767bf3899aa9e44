//! A low-level exact cover matrix addressed by plain `usize` item indices,
//! for callers that have already numbered their own items and want to skip
//! the label-interning layer in [`crate::coverings`].
//!
//! Build a [`Matrix`] with a known item count, add rows as item-index
//! slices, then iterate it for solutions.
//!
//! ```
//! use xcover::lowlevel::Matrix;
//!
//! // The canonical Knuth example: 7 items, 6 rows, one solution {B, D, F}.
//! let mut matrix = Matrix::new(7, vec![
//!     vec![1, 4, 7], // A
//!     vec![1, 4],    // B
//!     vec![4, 5, 7], // C
//!     vec![3, 5, 6], // D
//!     vec![2, 3, 6, 7], // E
//!     vec![2, 7],    // F
//! ]).unwrap();
//!
//! assert_eq!(matrix.next(), Some(vec![2, 4, 6]));
//! assert_eq!(matrix.next(), None);
//! ```

use std::collections::HashSet;

use crate::error::BuildError;
use crate::mesh::{ItemKind, Mesh};
use crate::search::Search;

/// An exact cover matrix over items `1..=item_count`, ready to be driven as
/// an [`Iterator`] of solutions (each a `Vec` of 1-based row numbers, in the
/// order rows were supplied to [`Matrix::new`]/[`Matrix::with_secondary`]).
pub struct Matrix {
    search: Search,
}

impl Matrix {
    /// Builds a matrix where every item in `1..=item_count` must be covered
    /// exactly once.
    pub fn new(item_count: usize, rows: Vec<Vec<usize>>) -> Result<Matrix, BuildError> {
        Matrix::with_secondary(item_count, &[], rows)
    }

    /// Builds a matrix where items listed in `secondary` may be covered at
    /// most once, and every other item in `1..=item_count` must be covered
    /// exactly once.
    pub fn with_secondary(
        item_count: usize,
        secondary: &[usize],
        rows: Vec<Vec<usize>>,
    ) -> Result<Matrix, BuildError> {
        let mut kinds = vec![ItemKind::Primary; item_count];
        for &s in secondary {
            assert!((1..=item_count).contains(&s), "secondary item {s} out of range");
            kinds[s - 1] = ItemKind::Secondary;
        }

        let mut mesh = Mesh::new(&kinds);
        for (row_index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(BuildError::EmptyRow { row_index });
            }
            let mut seen = HashSet::with_capacity(row.len());
            for &col in row {
                assert!((1..=item_count).contains(&col), "item {col} out of range");
                if !seen.insert(col) {
                    return Err(BuildError::DuplicateItem { row_index });
                }
            }
            mesh.add_row(row);
        }

        Ok(Matrix { search: Search::new(mesh) })
    }
}

impl Iterator for Matrix {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.search.next()
    }
}
