//! Matched-pair classification between two sequences.
//!
//! Walks the new sequence consuming the old occurrence index to match
//! items by identity, then walks the old sequence consuming the new index
//! to find deletions. Both walks hand out occurrences earliest-first, so
//! they agree on which occurrence of a duplicated identity is matched.
//! Move detection is a separate pass over the matched pairs.

use listdelta_types::Diffable;

use crate::index::OccurrenceIndex;

/// One old-position/new-position match, with its edit flags.
pub(crate) struct MatchedPair {
    pub(crate) old_index: usize,
    pub(crate) new_index: usize,
    /// The pair's relative order among matched items changed.
    pub(crate) moved: bool,
    /// Content equality failed for the pair.
    pub(crate) changed: bool,
}

/// The full classification of both sequences.
///
/// `pairs` is in new-sequence order; `inserted` and `deleted` ascend.
pub(crate) struct Classification {
    pub(crate) pairs: Vec<MatchedPair>,
    pub(crate) inserted: Vec<usize>,
    pub(crate) deleted: Vec<usize>,
}

/// Classify every position of `old` and `new` as matched, inserted, or
/// deleted, and flag matched pairs that moved or changed content.
pub(crate) fn classify<T: Diffable>(old: &[T], new: &[T]) -> Classification {
    let mut old_index = OccurrenceIndex::build(old);
    let mut new_index = OccurrenceIndex::build(new);

    let mut pairs = Vec::new();
    let mut inserted = Vec::new();
    for (new_pos, item) in new.iter().enumerate() {
        match old_index.consume(&item.diff_identifier()) {
            Some(old_pos) => pairs.push(MatchedPair {
                old_index: old_pos,
                new_index: new_pos,
                moved: false,
                changed: old[old_pos] != *item,
            }),
            None => inserted.push(new_pos),
        }
    }

    // An old position whose identity has no unconsumed new occurrence was
    // not matched above: earliest-first consumption pairs the k-th old
    // occurrence of an identity with its k-th new occurrence on both walks.
    let mut deleted = Vec::new();
    for (old_pos, item) in old.iter().enumerate() {
        if new_index.consume(&item.diff_identifier()).is_none() {
            deleted.push(old_pos);
        }
    }

    mark_moves(&mut pairs);

    Classification {
        pairs,
        inserted,
        deleted,
    }
}

/// Flag every matched pair whose relative order among matched items
/// changed.
///
/// Raw index comparison is not enough: after a prefix insert every raw
/// index differs with nothing actually reordered, and an item can keep its
/// raw index while genuinely moving past its neighbors. Instead the pairs
/// are walked in old order and the longest strictly increasing run of new
/// positions (patience algorithm, O(k log k)) is left in place; every pair
/// off that run is a move. This keeps the move count minimal.
fn mark_moves(pairs: &mut [MatchedPair]) {
    if pairs.is_empty() {
        return;
    }

    // Pair slots reordered by old position.
    let mut by_old: Vec<usize> = (0..pairs.len()).collect();
    by_old.sort_unstable_by_key(|&slot| pairs[slot].old_index);

    // Patience pass over new positions, with backpointers for recovery.
    // `tails[l]` is the walk offset ending the best increasing run of
    // length l + 1 seen so far.
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; by_old.len()];
    for walk in 0..by_old.len() {
        let value = pairs[by_old[walk]].new_index;
        let slot = tails.partition_point(|&t| pairs[by_old[t]].new_index < value);
        if slot > 0 {
            prev[walk] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(walk);
        } else {
            tails[slot] = walk;
        }
    }

    // Everything moves except the recovered run.
    for pair in pairs.iter_mut() {
        pair.moved = true;
    }
    let mut cursor = tails.last().copied();
    while let Some(walk) = cursor {
        pairs[by_old[walk]].moved = false;
        cursor = prev[walk];
    }
}
