//! The edit-step type produced by the diff engine.
//!
//! A [`DiffStep`] is one unit of change. Steps are immutable, carry the
//! affected item value, and report indices with batch-apply semantics:
//! delete indices are relative to the pre-edit sequence, insert and move
//! destinations to the post-edit sequence, and updates carry both so a
//! consumer can refresh a view still showing its pre-edit state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single edit in a diff result.
///
/// Two steps are equal iff their variant and all carried fields are equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffStep<T> {
    /// An item newly present at `index` in the new sequence.
    Insert { value: T, index: usize },
    /// An item removed from `index` in the old sequence.
    Delete { value: T, index: usize },
    /// An item present in both sequences whose relative position changed.
    Move {
        value: T,
        from_index: usize,
        to_index: usize,
    },
    /// An item present in both sequences whose content changed in place.
    /// `old_index` is kept distinct from `index` so the stale view can be
    /// looked up even when surrounding edits shifted the position.
    Update {
        value: T,
        index: usize,
        old_index: usize,
    },
}

impl<T> DiffStep<T> {
    /// Returns `true` for an [`Insert`](DiffStep::Insert) step.
    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    /// Returns `true` for a [`Delete`](DiffStep::Delete) step.
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }

    /// Returns `true` for a [`Move`](DiffStep::Move) step.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }

    /// Returns `true` for an [`Update`](DiffStep::Update) step.
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// The item value carried by this step.
    pub fn value(&self) -> &T {
        match self {
            Self::Insert { value, .. }
            | Self::Delete { value, .. }
            | Self::Move { value, .. }
            | Self::Update { value, .. } => value,
        }
    }

    /// The index associated with this step. For a move, the destination.
    pub fn index(&self) -> usize {
        match self {
            Self::Insert { index, .. }
            | Self::Update { index, .. }
            | Self::Delete { index, .. } => *index,
            Self::Move { to_index, .. } => *to_index,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for DiffStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { value, index } => {
                write!(f, "insert {value:?} at index {index}")
            }
            Self::Delete { value, index } => {
                write!(f, "delete {value:?} at index {index}")
            }
            Self::Move {
                value,
                from_index,
                to_index,
            } => {
                write!(f, "move {value:?} from index {from_index} to index {to_index}")
            }
            Self::Update {
                value,
                index,
                old_index,
            } => {
                write!(f, "update {value:?} at index {index} (old index {old_index})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variant() {
        let insert = DiffStep::Insert { value: 'a', index: 0 };
        let delete = DiffStep::Delete { value: 'a', index: 0 };
        let mv = DiffStep::Move { value: 'a', from_index: 0, to_index: 1 };
        let update = DiffStep::Update { value: 'a', index: 1, old_index: 0 };

        assert!(insert.is_insert() && !insert.is_delete());
        assert!(delete.is_delete() && !delete.is_move());
        assert!(mv.is_move() && !mv.is_update());
        assert!(update.is_update() && !update.is_insert());
    }

    #[test]
    fn move_index_reports_destination() {
        let mv = DiffStep::Move { value: "x", from_index: 4, to_index: 2 };
        assert_eq!(mv.index(), 2);
        assert_eq!(*mv.value(), "x");
    }

    #[test]
    fn equality_compares_all_fields() {
        let a = DiffStep::Update { value: 1u32, index: 3, old_index: 3 };
        let b = DiffStep::Update { value: 1u32, index: 3, old_index: 3 };
        let c = DiffStep::Update { value: 1u32, index: 3, old_index: 2 };

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, DiffStep::Insert { value: 1u32, index: 3 });
    }

    #[test]
    fn display_describes_the_edit() {
        let mv = DiffStep::Move { value: 'b', from_index: 1, to_index: 0 };
        assert_eq!(mv.to_string(), "move 'b' from index 1 to index 0");

        let update = DiffStep::Update { value: 'a', index: 2, old_index: 2 };
        assert_eq!(update.to_string(), "update 'a' at index 2 (old index 2)");
    }

    #[test]
    fn serde_round_trip() {
        let step = DiffStep::Move {
            value: String::from("row"),
            from_index: 3,
            to_index: 0,
        };

        let json = serde_json::to_string(&step).unwrap();
        let back: DiffStep<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
