//! Diff engine for listdelta.
//!
//! Computes the set of structural edits (inserts, deletes, moves, content
//! updates) required to transform one ordered sequence of [`Diffable`]
//! items into another. The output is ordered for batch-style consumers:
//! all deletes first (indices relative to the pre-edit sequence), then
//! inserts, moves, and updates (indices relative to the post-edit
//! sequence), each group ascending by index.
//!
//! The computation is a pure synchronous function over two snapshots. Each
//! call allocates its own indexes and classification buffers and discards
//! them on return, so concurrent invocations share no state.
//!
//! # Key Types
//!
//! - [`diff_sequences`] — The sole entry point
//! - [`SequenceDiff`] — The resulting ordered step collection
//!
//! [`Diffable`]: listdelta_types::Diffable

mod classify;
mod index;
pub mod sequence_diff;

pub use sequence_diff::{diff_sequences, SequenceDiff};
