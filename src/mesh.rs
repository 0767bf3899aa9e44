//! The toroidal doubly-linked mesh that backs the dancing-links search.
//!
//! Every item (primary or secondary) gets one header node; every occurrence
//! of an item in a row gets one cell node. All nodes live in a single flat
//! arena (`Vec<Node>`) and refer to each other by index, so the mesh is
//! trivially freed by dropping the vector and carries no reference cycles.
//!
//! ```text
//! root  <->  h1  <->  h2  <->  h3        (h4 is secondary: self-looped, off the root ring)
//!            |        |        |
//!           c11      c21      c31
//!            |        |
//!           c12      c22
//! ```

/// Index of the root node. The root anchors the horizontal ring of primary
/// item headers; it is never a cell or a secondary header.
pub(crate) const ROOT: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ItemKind {
    Primary,
    Secondary,
}

/// One node of the mesh: either the root, an item header, or a cell.
///
/// `item` is the owning header's index (for a header node, its own index;
/// unused for the root). `row` is the 1-based row number a cell belongs to,
/// or 0 for the root and every header.
#[derive(Clone, Debug)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    item: usize,
    row: usize,
}

/// The linked mesh plus the per-item column sizes used by the S-heuristic.
#[derive(Clone, Debug)]
pub(crate) struct Mesh {
    nodes: Vec<Node>,
    col_size: Vec<usize>,
    row_count: usize,
}

impl Mesh {
    /// Builds an empty mesh (no rows yet) with one header per entry in
    /// `kinds`, indices `1..=kinds.len()`. Primary headers are spliced into
    /// the root ring in order; secondary headers are self-looped and never
    /// touch the root.
    pub(crate) fn new(kinds: &[ItemKind]) -> Mesh {
        let n = kinds.len();
        let mut nodes = Vec::with_capacity(n + 1);
        nodes.push(Node { left: ROOT, right: ROOT, up: ROOT, down: ROOT, item: ROOT, row: 0 });
        for i in 1..=n {
            nodes.push(Node { left: i, right: i, up: i, down: i, item: i, row: 0 });
        }

        let mut mesh = Mesh { nodes, col_size: vec![0; n + 1], row_count: 0 };
        for (i, kind) in kinds.iter().enumerate() {
            let header = i + 1;
            if *kind == ItemKind::Primary {
                mesh.splice_into_root_ring(header);
            }
        }
        mesh
    }

    fn splice_into_root_ring(&mut self, header: usize) {
        let left = self.nodes[ROOT].left;
        self.nodes[left].right = header;
        self.nodes[header].left = left;
        self.nodes[header].right = ROOT;
        self.nodes[ROOT].left = header;
    }

    /// Appends one row, `items` being 1-based header indices in input order.
    /// Rows are numbered starting at 1; row 0 is reserved for header/root
    /// nodes and never matches a real row.
    pub(crate) fn add_row(&mut self, items: &[usize]) -> usize {
        self.row_count += 1;
        let row = self.row_count;

        let mut positions = Vec::with_capacity(items.len());
        for &col in items {
            let pos = self.nodes.len();
            let up = self.nodes[col].up;
            self.nodes.push(Node { left: pos, right: pos, up, down: col, item: col, row });
            self.nodes[up].down = pos;
            self.nodes[col].up = pos;
            self.col_size[col] += 1;
            positions.push(pos);
        }

        let len = positions.len();
        for (w, &cur) in positions.iter().enumerate() {
            let next = positions[(w + 1) % len];
            let prev = positions[(w + len - 1) % len];
            self.nodes[cur].right = next;
            self.nodes[cur].left = prev;
        }

        row
    }

    #[inline]
    pub(crate) fn root_ring_empty(&self) -> bool {
        self.nodes[ROOT].right == ROOT
    }

    /// Picks the primary header with the smallest column size (S-heuristic),
    /// breaking ties by root-ring traversal order. Returns `None` only when
    /// the root ring is empty (use [`Mesh::root_ring_empty`] to check that
    /// first; this always returns `Some` otherwise).
    pub(crate) fn choose_branch_item(&self) -> Option<(usize, usize)> {
        let mut j = self.nodes[ROOT].right;
        if j == ROOT {
            return None;
        }
        let mut best = j;
        let mut best_size = self.col_size[j];
        while j != ROOT {
            let size = self.col_size[j];
            if size < best_size {
                best = j;
                best_size = size;
            }
            j = self.nodes[j].right;
        }
        Some((best, best_size))
    }

    /// Covers `header`: unlinks it from the root ring (a no-op if it is a
    /// self-looped secondary header) and hides every row that shares a
    /// column with it.
    pub(crate) fn cover(&mut self, header: usize) {
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut i = self.nodes[header].down;
        while i != header {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down, col) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].item);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.col_size[col] -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Undoes [`Mesh::cover`], traversing up then left — the exact reverse
    /// order of `cover`'s down-then-right walk.
    pub(crate) fn uncover(&mut self, header: usize) {
        let mut i = self.nodes[header].up;
        while i != header {
            let mut j = self.nodes[i].left;
            while j != i {
                let col = self.nodes[j].item;
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[up].down = j;
                self.nodes[down].up = j;
                self.col_size[col] += 1;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    #[inline]
    pub(crate) fn down(&self, n: usize) -> usize {
        self.nodes[n].down
    }
    #[inline]
    pub(crate) fn right(&self, n: usize) -> usize {
        self.nodes[n].right
    }
    #[inline]
    pub(crate) fn left(&self, n: usize) -> usize {
        self.nodes[n].left
    }
    #[inline]
    pub(crate) fn item_of(&self, n: usize) -> usize {
        self.nodes[n].item
    }
    #[inline]
    pub(crate) fn row_of(&self, n: usize) -> usize {
        self.nodes[n].row
    }

    /// True iff every header's size and every node's four links match a
    /// freshly built mesh with the same rows — used by tests to assert full
    /// undo after exhaustive search.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> (Vec<usize>, Vec<(usize, usize, usize, usize)>) {
        let links = self.nodes.iter().map(|n| (n.left, n.right, n.up, n.down)).collect();
        (self.col_size.clone(), links)
    }
}
