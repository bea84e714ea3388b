//! Per-sequence occurrence index: identity -> ordered occurrence positions.
//!
//! Built once per sequence per diff invocation and discarded on return.
//! Duplicate identities keep every position; [`OccurrenceIndex::consume`]
//! hands them out earliest-first, which is what makes duplicate resolution
//! deterministic.

use std::collections::HashMap;
use std::hash::Hash;

use listdelta_types::Diffable;

/// Maps each identity to the positions at which it occurs in one sequence.
///
/// # Invariants
///
/// - The positions list per identity preserves original sequence order.
/// - `next` only grows; positions before it have been matched.
pub(crate) struct OccurrenceIndex<I> {
    entries: HashMap<I, Occurrences>,
}

#[derive(Default)]
struct Occurrences {
    /// Positions in original sequence order.
    positions: Vec<usize>,
    /// Offset of the earliest position not yet consumed.
    next: usize,
}

impl<I: Hash + Eq> OccurrenceIndex<I> {
    /// Build the index for a sequence in O(n) time and space.
    pub(crate) fn build<T>(items: &[T]) -> Self
    where
        T: Diffable<Identifier = I>,
    {
        let mut entries: HashMap<I, Occurrences> = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            entries
                .entry(item.diff_identifier())
                .or_default()
                .positions
                .push(position);
        }
        Self { entries }
    }

    /// Pop the earliest unconsumed position for `id`, if one remains.
    pub(crate) fn consume(&mut self, id: &I) -> Option<usize> {
        let occ = self.entries.get_mut(id)?;
        let position = occ.positions.get(occ.next).copied()?;
        occ.next += 1;
        Some(position)
    }
}
