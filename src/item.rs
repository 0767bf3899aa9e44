//! Interns caller-supplied item labels into the dense `usize` indices the
//! [`crate::mesh`] and [`crate::search`] modules operate on.
//!
//! Labels are compared for equality only; this crate never looks at them
//! again once the mesh is built. Using an [`indexmap::IndexSet`] (rather than
//! a plain `HashMap`) means the index assigned to a label is exactly its
//! first-appearance order, which is what the S-heuristic's tie-break rule
//! relies on to stay deterministic across runs.

use std::hash::Hash;

use indexmap::IndexSet;

pub(crate) struct ItemRegistry<L> {
    labels: IndexSet<L>,
}

impl<L: Eq + Hash> ItemRegistry<L> {
    pub(crate) fn new() -> Self {
        ItemRegistry { labels: IndexSet::new() }
    }

    /// Returns the 1-based item index for `label`, assigning a fresh one if
    /// this is the first time it has been seen.
    pub(crate) fn intern(&mut self, label: L) -> usize {
        self.labels.insert_full(label).0 + 1
    }

    pub(crate) fn index_of(&self, label: &L) -> Option<usize> {
        self.labels.get_index_of(label).map(|i| i + 1)
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_labels_reuse_the_same_index() {
        let mut reg = ItemRegistry::new();
        assert_eq!(reg.intern("a"), 1);
        assert_eq!(reg.intern("b"), 2);
        assert_eq!(reg.intern("a"), 1);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of(&"b"), Some(2));
        assert_eq!(reg.index_of(&"c"), None);
    }
}
