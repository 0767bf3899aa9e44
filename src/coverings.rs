//! The label-generic, payload-returning facade: build an exact cover problem
//! directly from rows of arbitrary item labels, rather than pre-numbered
//! `usize` indices (see [`crate::lowlevel`] for that lower-level entry point).
//!
//! ```
//! use xcover::coverings;
//!
//! // The canonical Knuth example, with rows labelled A..F and items
//! // re-labelled as strings: the one solution is {B, D, F}.
//! let solutions: Vec<_> = coverings(vec![
//!     ("A", vec!["c1", "c4", "c7"]),
//!     ("B", vec!["c1", "c4"]),
//!     ("C", vec!["c4", "c5", "c7"]),
//!     ("D", vec!["c3", "c5", "c6"]),
//!     ("E", vec!["c2", "c3", "c6", "c7"]),
//!     ("F", vec!["c2", "c7"]),
//! ])
//! .unwrap()
//! .collect();
//!
//! assert_eq!(solutions, vec![vec!["B", "D", "F"]]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::BuildError;
use crate::item::ItemRegistry;
use crate::mesh::{ItemKind, Mesh};
use crate::search::Search;

/// An exact cover enumerator over caller-chosen item labels `L` and
/// per-row payloads `P`. Yields one `Vec<P>` per solution: the payloads of
/// the rows making up that solution, in the order the rows were supplied.
pub struct Coverings<L, P> {
    search: Search,
    payloads: Vec<P>,
    _labels: PhantomData<L>,
}

/// Builds a [`Coverings`] where every item mentioned in `rows` must be
/// covered exactly once.
pub fn coverings<L, P>(
    rows: impl IntoIterator<Item = (P, Vec<L>)>,
) -> Result<Coverings<L, P>, BuildError>
where
    L: Eq + Hash,
{
    coverings_with_secondary(rows, std::iter::empty())
}

/// Builds a [`Coverings`] where items in `secondary` may be covered at most
/// once, and every other item mentioned in `rows` must be covered exactly
/// once. A secondary item that never appears in any row still gets a header
/// (and is trivially satisfied, covering zero rows).
pub fn coverings_with_secondary<L, P>(
    rows: impl IntoIterator<Item = (P, Vec<L>)>,
    secondary: impl IntoIterator<Item = L>,
) -> Result<Coverings<L, P>, BuildError>
where
    L: Eq + Hash,
{
    let mut registry = ItemRegistry::new();
    let mut prepared: Vec<(P, Vec<usize>)> = Vec::new();
    for (row_index, (payload, labels)) in rows.into_iter().enumerate() {
        if labels.is_empty() {
            return Err(BuildError::EmptyRow { row_index });
        }
        let mut indices = Vec::with_capacity(labels.len());
        let mut seen = HashSet::with_capacity(labels.len());
        for label in labels {
            let idx = registry.intern(label);
            if !seen.insert(idx) {
                return Err(BuildError::DuplicateItem { row_index });
            }
            indices.push(idx);
        }
        prepared.push((payload, indices));
    }

    let secondary_indices: Vec<usize> = secondary
        .into_iter()
        .map(|label| registry.intern(label))
        .collect();

    let mut kinds = vec![ItemKind::Primary; registry.len()];
    for idx in secondary_indices {
        kinds[idx - 1] = ItemKind::Secondary;
    }

    let mut mesh = Mesh::new(&kinds);
    for (_, indices) in &prepared {
        mesh.add_row(indices);
    }

    let payloads = prepared.into_iter().map(|(payload, _)| payload).collect();

    Ok(Coverings { search: Search::new(mesh), payloads, _labels: PhantomData })
}

impl<L, P: Clone> Iterator for Coverings<L, P> {
    type Item = Vec<P>;

    fn next(&mut self) -> Option<Vec<P>> {
        let rows = self.search.next()?;
        Some(rows.into_iter().map(|r| self.payloads[r - 1].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knuth_example_by_label() {
        let rows = vec![
            ("A", vec!["c1", "c4", "c7"]),
            ("B", vec!["c1", "c4"]),
            ("C", vec!["c4", "c5", "c7"]),
            ("D", vec!["c3", "c5", "c6"]),
            ("E", vec!["c2", "c3", "c6", "c7"]),
            ("F", vec!["c2", "c7"]),
        ];
        let solutions: Vec<_> = coverings(rows).unwrap().collect();
        assert_eq!(solutions, vec![vec!["B", "D", "F"]]);
    }

    #[test]
    fn rejects_empty_row() {
        let rows = vec![("A", vec!["x"]), ("B", vec![])];
        let err = coverings(rows).unwrap_err();
        assert_eq!(err, BuildError::EmptyRow { row_index: 1 });
    }

    #[test]
    fn rejects_duplicate_label_in_row() {
        let rows = vec![("A", vec!["x", "x"])];
        let err = coverings(rows).unwrap_err();
        assert_eq!(err, BuildError::DuplicateItem { row_index: 0 });
    }

    #[test]
    fn secondary_label_never_used_is_trivially_satisfied() {
        let rows = vec![("A", vec!["x"])];
        let solutions: Vec<_> =
            coverings_with_secondary(rows, vec!["unused"]).unwrap().collect();
        assert_eq!(solutions, vec![vec!["A"]]);
    }
}
