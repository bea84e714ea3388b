//! Batch application of listdelta edit steps.
//!
//! [`apply_steps`] replays a step collection against a slice the way a
//! batch-update consumer would: removals (deletes and move sources) are
//! resolved against the pre-edit index space, then insertions (inserts and
//! move destinations) against the post-edit space in ascending destination
//! order, then in-place updates. A step collection produced by
//! `listdelta-diff` always applies cleanly; hand-built or corrupted step
//! collections surface out-of-range indices as [`ApplyError`].

use listdelta_types::DiffStep;

/// Errors that can occur while applying a step collection.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// A delete or move-source index fell outside the old sequence.
    #[error("removal index {index} out of bounds for sequence of length {len}")]
    RemovalOutOfBounds { index: usize, len: usize },

    /// An insert or move destination fell outside the sequence being built.
    #[error("insertion index {index} out of bounds for sequence of length {len}")]
    InsertionOutOfBounds { index: usize, len: usize },

    /// An update index fell outside the rebuilt sequence.
    #[error("update index {index} out of bounds for sequence of length {len}")]
    UpdateOutOfBounds { index: usize, len: usize },
}

/// Convenience alias for apply results.
pub type ApplyResult<T> = Result<T, ApplyError>;

/// Apply a step collection to `old`, producing the post-edit sequence.
///
/// Step order within the collection does not matter for correctness here;
/// the group discipline (deletes before inserts before moves before
/// updates) exists for consumers that apply steps one at a time against a
/// live view.
pub fn apply_steps<T: Clone>(old: &[T], steps: &[DiffStep<T>]) -> ApplyResult<Vec<T>> {
    let mut removed = vec![false; old.len()];
    let mut insertions: Vec<(usize, &T)> = Vec::new();
    let mut updates: Vec<(usize, &T)> = Vec::new();

    for step in steps {
        match step {
            DiffStep::Delete { index, .. } => {
                mark_removed(&mut removed, *index)?;
            }
            DiffStep::Move {
                value,
                from_index,
                to_index,
            } => {
                mark_removed(&mut removed, *from_index)?;
                insertions.push((*to_index, value));
            }
            DiffStep::Insert { value, index } => insertions.push((*index, value)),
            DiffStep::Update { value, index, .. } => updates.push((*index, value)),
        }
    }

    // Survivors of the pre-edit sequence, in order.
    let mut result: Vec<T> = old
        .iter()
        .zip(&removed)
        .filter(|(_, &gone)| !gone)
        .map(|(value, _)| value.clone())
        .collect();

    // Inserts and move destinations target the post-edit index space, so
    // they must land in ascending destination order.
    insertions.sort_by_key(|&(index, _)| index);
    for (index, value) in insertions {
        if index > result.len() {
            return Err(ApplyError::InsertionOutOfBounds {
                index,
                len: result.len(),
            });
        }
        result.insert(index, value.clone());
    }

    for (index, value) in updates {
        let len = result.len();
        match result.get_mut(index) {
            Some(slot) => *slot = value.clone(),
            None => return Err(ApplyError::UpdateOutOfBounds { index, len }),
        }
    }

    Ok(result)
}

fn mark_removed(removed: &mut [bool], index: usize) -> ApplyResult<()> {
    let len = removed.len();
    match removed.get_mut(index) {
        Some(slot) => {
            *slot = true;
            Ok(())
        }
        None => Err(ApplyError::RemovalOutOfBounds { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listdelta_diff::diff_sequences;
    use listdelta_types::Diffable;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u8,
        version: u8,
    }

    impl Diffable for Row {
        type Identifier = u8;

        fn diff_identifier(&self) -> u8 {
            self.id
        }
    }

    fn row(id: u8, version: u8) -> Row {
        Row { id, version }
    }

    #[test]
    fn applies_each_step_kind() {
        let old = vec!['a', 'b', 'c'];

        let deleted = apply_steps(
            &old,
            &[DiffStep::Delete { value: 'b', index: 1 }],
        )
        .unwrap();
        assert_eq!(deleted, vec!['a', 'c']);

        let inserted = apply_steps(
            &old,
            &[DiffStep::Insert { value: 'x', index: 1 }],
        )
        .unwrap();
        assert_eq!(inserted, vec!['a', 'x', 'b', 'c']);

        let moved = apply_steps(
            &old,
            &[DiffStep::Move { value: 'c', from_index: 2, to_index: 0 }],
        )
        .unwrap();
        assert_eq!(moved, vec!['c', 'a', 'b']);

        let updated = apply_steps(
            &old,
            &[DiffStep::Update { value: 'z', index: 2, old_index: 2 }],
        )
        .unwrap();
        assert_eq!(updated, vec!['a', 'b', 'z']);
    }

    #[test]
    fn interleaved_inserts_and_moves_share_the_destination_space() {
        // old = [a, b], new = [b, x, a]: the move lands after the insert.
        let old = vec!['a', 'b'];
        let steps = vec![
            DiffStep::Insert { value: 'x', index: 1 },
            DiffStep::Move { value: 'a', from_index: 0, to_index: 2 },
        ];
        assert_eq!(apply_steps(&old, &steps).unwrap(), vec!['b', 'x', 'a']);
    }

    #[test]
    fn out_of_range_indices_are_reported() {
        let old = vec!['a'];

        let err = apply_steps(&old, &[DiffStep::Delete { value: 'a', index: 3 }])
            .unwrap_err();
        assert!(matches!(err, ApplyError::RemovalOutOfBounds { index: 3, len: 1 }));

        let err = apply_steps(&old, &[DiffStep::Insert { value: 'x', index: 5 }])
            .unwrap_err();
        assert!(matches!(err, ApplyError::InsertionOutOfBounds { index: 5, .. }));

        let err = apply_steps(
            &old,
            &[DiffStep::Update { value: 'z', index: 2, old_index: 2 }],
        )
        .unwrap_err();
        assert!(matches!(err, ApplyError::UpdateOutOfBounds { index: 2, len: 1 }));
    }

    #[test]
    fn round_trips_a_mixed_edit() {
        let old = vec![row(1, 0), row(2, 0), row(3, 0), row(4, 0)];
        let new = vec![row(4, 0), row(2, 1), row(5, 0), row(3, 0)];

        let diff = diff_sequences(&old, &new);
        assert_eq!(apply_steps(&old, &diff.steps).unwrap(), new);
    }

    fn rows() -> impl Strategy<Value = Vec<Row>> {
        // Small id range on purpose: collisions exercise the duplicate
        // identity policy, versions exercise updates.
        prop::collection::vec((0u8..8, 0u8..4), 0..24)
            .prop_map(|v| v.into_iter().map(|(id, version)| row(id, version)).collect())
    }

    proptest! {
        #[test]
        fn round_trip_reconstructs_new(old in rows(), new in rows()) {
            let diff = diff_sequences(&old, &new);
            let rebuilt = apply_steps(&old, &diff.steps).unwrap();
            prop_assert_eq!(rebuilt, new);
        }
    }
}
