//! Sequence-level diff: compare two ordered sequences and produce the edit
//! steps that transform one into the other.
//!
//! Items are matched across the sequences by [`Diffable::diff_identifier`];
//! content equality only decides whether a matched pair needs an update.
//! Steps come out in the fixed batch-apply group order: deletes, inserts,
//! moves, updates.

use listdelta_types::{DiffStep, Diffable};
use tracing::debug;

use crate::classify::classify;

/// The result of diffing two sequences: an ordered collection of steps.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceDiff<T> {
    /// The edit steps, in batch-apply group order.
    pub steps: Vec<DiffStep<T>>,
}

impl<T> SequenceDiff<T> {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the sequences were identical.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Iterate over the steps in batch-apply order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffStep<T>> {
        self.steps.iter()
    }

    /// Number of inserted items.
    pub fn insertions(&self) -> usize {
        self.steps.iter().filter(|s| s.is_insert()).count()
    }

    /// Number of deleted items.
    pub fn deletions(&self) -> usize {
        self.steps.iter().filter(|s| s.is_delete()).count()
    }

    /// Number of moved items.
    pub fn moves(&self) -> usize {
        self.steps.iter().filter(|s| s.is_move()).count()
    }

    /// Number of in-place content updates.
    pub fn updates(&self) -> usize {
        self.steps.iter().filter(|s| s.is_update()).count()
    }
}

impl<T> Default for SequenceDiff<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a SequenceDiff<T> {
    type Item = &'a DiffStep<T>;
    type IntoIter = std::slice::Iter<'a, DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<T> IntoIterator for SequenceDiff<T> {
    type Item = DiffStep<T>;
    type IntoIter = std::vec::IntoIter<DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Compute the edit steps that transform `old` into `new`.
///
/// Delete steps carry indices relative to the pre-edit sequence; insert,
/// move, and update steps carry indices relative to the post-edit
/// sequence (updates additionally carry the pre-edit index). A matched
/// pair that both moved and changed content emits only a `Move` whose
/// value already reflects the new content; the batch-update model this
/// engine targets refreshes the destination cell on move, so no separate
/// update signal is needed.
///
/// Runs in O(n + m) plus an O(k log k) move-detection pass over the k
/// matched pairs. Never fails on finite input; a lawless identity or
/// equality implementation on `T` yields meaningless (but safe) steps.
pub fn diff_sequences<T: Diffable + Clone>(old: &[T], new: &[T]) -> SequenceDiff<T> {
    let classification = classify(old, new);

    let mut deletes = Vec::new();
    let mut inserts = Vec::new();
    let mut moves = Vec::new();
    let mut updates = Vec::new();

    for &index in &classification.deleted {
        deletes.push(DiffStep::Delete {
            value: old[index].clone(),
            index,
        });
    }
    for &index in &classification.inserted {
        inserts.push(DiffStep::Insert {
            value: new[index].clone(),
            index,
        });
    }
    for pair in &classification.pairs {
        if pair.moved {
            moves.push(DiffStep::Move {
                value: new[pair.new_index].clone(),
                from_index: pair.old_index,
                to_index: pair.new_index,
            });
        } else if pair.changed {
            updates.push(DiffStep::Update {
                value: new[pair.new_index].clone(),
                index: pair.new_index,
                old_index: pair.old_index,
            });
        }
    }

    debug!(
        old_len = old.len(),
        new_len = new.len(),
        deletes = deletes.len(),
        inserts = inserts.len(),
        moves = moves.len(),
        updates = updates.len(),
        "computed sequence diff"
    );

    // Fixed group order for batch consumers. Each group already ascends by
    // its reported index: deleted/inserted positions are collected in walk
    // order, and pairs are produced in new-sequence order.
    let mut steps = deletes;
    steps.extend(inserts);
    steps.extend(moves);
    steps.extend(updates);

    SequenceDiff { steps }
}
