//! Algorithm X over the [`Mesh`], driven as an explicit state machine rather
//! than recursion.
//!
//! Recursive backtracking is replaced with a `Stage` enum and a frame stack
//! that `Iterator::next` resumes on each call: the search is suspended
//! between one solution and the next with no hidden call-stack recursion, so
//! a deep search tree (the 324-item Sudoku matrix, say) never risks a stack
//! overflow.

use log::{debug, trace};

use crate::mesh::Mesh;

/// One level of the search: the branch item covered at this depth, and the
/// cell currently being tried from that item's vertical ring.
struct Frame {
    candidate: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Check for a complete solution, else pick and cover a branch item.
    SelectItem,
    /// Try (or exhaust) the current candidate row for the innermost frame.
    TryCandidate,
    /// Undo the row just returned from and advance to the next candidate.
    Backtrack,
}

/// Runs Algorithm X with dancing links over a [`Mesh`], yielding one
/// solution (a list of 1-based row numbers) per call to [`Search::next`].
pub(crate) struct Search {
    mesh: Mesh,
    frames: Vec<Frame>,
    partial_solution: Vec<usize>,
    stage: Stage,
    exhausted: bool,
}

impl Search {
    pub(crate) fn new(mesh: Mesh) -> Search {
        debug!("search starting");
        Search {
            mesh,
            frames: Vec::new(),
            partial_solution: Vec::new(),
            stage: Stage::SelectItem,
            exhausted: false,
        }
    }

    /// Covers every other item in the row through cell `r`, in horizontal
    /// ring order starting to the right of `r`.
    fn cover_row(&mut self, r: usize) {
        let mut j = self.mesh.right(r);
        while j != r {
            self.mesh.cover(self.mesh.item_of(j));
            j = self.mesh.right(j);
        }
    }

    /// The exact inverse of [`Search::cover_row`]: walks left instead of
    /// right, undoing covers in reverse order.
    fn uncover_row(&mut self, r: usize) {
        let mut j = self.mesh.left(r);
        while j != r {
            self.mesh.uncover(self.mesh.item_of(j));
            j = self.mesh.left(j);
        }
    }

    pub(crate) fn advance(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }

        loop {
            match self.stage {
                Stage::SelectItem => {
                    if self.mesh.root_ring_empty() {
                        let solution = self.partial_solution.clone();
                        trace!("solution found, {} rows", solution.len());
                        self.stage = Stage::Backtrack;
                        return Some(solution);
                    }

                    // `choose_branch_item` only returns `None` when the root
                    // ring is empty, which was just ruled out above.
                    let (item, size) = self.mesh.choose_branch_item().unwrap();
                    trace!("branch item {item} has {size} candidate rows");
                    if size == 0 {
                        self.stage = Stage::Backtrack;
                        continue;
                    }

                    self.mesh.cover(item);
                    let candidate = self.mesh.down(item);
                    self.frames.push(Frame { candidate });
                    self.stage = Stage::TryCandidate;
                }

                Stage::TryCandidate => {
                    let frame = self.frames.last().unwrap();
                    let item = self.mesh.item_of(frame.candidate);
                    if frame.candidate == item {
                        // Every candidate row tried: give up on this item.
                        self.frames.pop();
                        self.mesh.uncover(item);
                        self.stage = Stage::Backtrack;
                        continue;
                    }

                    let r = frame.candidate;
                    self.cover_row(r);
                    self.partial_solution.push(self.mesh.row_of(r));
                    self.stage = Stage::SelectItem;
                }

                Stage::Backtrack => {
                    let frame = match self.frames.last_mut() {
                        Some(frame) => frame,
                        None => {
                            debug!("search exhausted");
                            self.exhausted = true;
                            return None;
                        }
                    };

                    self.partial_solution.pop();
                    let r = frame.candidate;
                    self.uncover_row(r);
                    frame.candidate = self.mesh.down(r);
                    self.stage = Stage::TryCandidate;
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl Iterator for Search {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance()
    }
}
