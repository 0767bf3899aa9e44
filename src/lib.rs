//! An implementation of Knuth's Algorithm X with dancing links: exact cover
//! over a sparse matrix of items and rows, with support for secondary
//! (at-most-once) items alongside the usual exactly-once ones.
//!
//! Two entry points are provided. [`coverings`] and [`coverings_with_secondary`]
//! take rows of arbitrary, hashable item labels plus a payload to return per
//! row — the natural API for modelling a puzzle (sudoku cells, board squares,
//! set members) without hand-numbering items first. [`lowlevel::Matrix`] skips
//! the label layer for callers who have already numbered their own items.
//!
//! Both drive the same non-recursive search underneath: solutions are pulled
//! lazily through an [`Iterator`], one at a time, with no recursive call stack
//! and no hidden allocation once the mesh is built.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

mod error;
mod item;
mod mesh;
mod search;

pub mod coverings;
pub mod lowlevel;

pub use crate::coverings::{coverings, coverings_with_secondary, Coverings};
pub use crate::error::BuildError as Error;
