//! The identity + content-equality contract for diffed items.
//!
//! [`Diffable`] is the only capability the engine requires of an item type:
//! a stable identifier that matches the same logical entity across two
//! sequence snapshots, and content equality (the `PartialEq` supertrait)
//! used purely to detect in-place updates.

use std::hash::Hash;

/// The contract every item type diffed by the engine must satisfy.
///
/// `diff_identifier` decides *identity*: two items with equal identifiers
/// are the same logical entity even when their content differs (think of a
/// record's primary key). The `PartialEq` supertrait decides *content*: it
/// is consulted only for matched pairs, to flag an update, never to match
/// items across sequences.
///
/// # Contract
///
/// - `diff_identifier` must be deterministic and stable for the duration
///   of a single diff call.
/// - `==` must be a true equivalence relation; a lawless implementation
///   yields nonsensical (but memory-safe) update flags.
///
/// Identifiers are *expected* to be unique within one sequence. Duplicates
/// are not an error: the engine matches the first unmatched occurrence in
/// sequence order and treats the rest as plain inserts or deletes.
pub trait Diffable: PartialEq {
    /// The identity key type.
    type Identifier: Hash + Eq;

    /// The stable identity of this item.
    fn diff_identifier(&self) -> Self::Identifier;
}

/// Self-identifying conformances: for plain value types the value *is* the
/// identity, so any content change reads as a delete + insert rather than
/// an update.
macro_rules! impl_self_identifying {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Diffable for $ty {
                type Identifier = Self;

                fn diff_identifier(&self) -> Self::Identifier {
                    self.clone()
                }
            }
        )*
    };
}

impl_self_identifying!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, String,
);

impl<'a> Diffable for &'a str {
    type Identifier = &'a str;

    fn diff_identifier(&self) -> Self::Identifier {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        text: String,
    }

    impl Diffable for Row {
        type Identifier = u32;

        fn diff_identifier(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn custom_type_identity_ignores_content() {
        let a = Row { id: 7, text: "old".into() };
        let b = Row { id: 7, text: "new".into() };

        assert_eq!(a.diff_identifier(), b.diff_identifier());
        assert_ne!(a, b);
    }

    #[test]
    fn primitives_identify_as_themselves() {
        assert_eq!(42u32.diff_identifier(), 42u32);
        assert_eq!('x'.diff_identifier(), 'x');
        assert_eq!(String::from("a").diff_identifier(), "a");
        assert_eq!("slice".diff_identifier(), "slice");
    }
}
