// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key ranges for the fixed two-level order-3 B-tree board.
//!
//! This only judges that one small shape; there is no splitting, merging, or
//! general B-tree balancing here.

use arbor_board::{LeafPosition, TwoLevelBTree};

use crate::{Verdict, Violation};

/// Checks root key order and that every leaf key sits in the open range its
/// position implies.
///
/// With root keys `k0` (and optionally `k1`):
/// - the left leaf must be below `k0`,
/// - the middle leaf must be between `k0` and `k1`, and exists only when the
///   root has two keys,
/// - the right leaf must be above the last root key.
///
/// Leaves are checked left to right. An absent tree is valid.
#[must_use]
pub fn validate_btree(tree: Option<&TwoLevelBTree>) -> Verdict {
    tree.map_or(Ok(()), check).into()
}

fn check(tree: &TwoLevelBTree) -> Result<(), Violation> {
    let Some((&first, rest)) = tree.root_keys().split_first() else {
        return Ok(());
    };
    let second = rest.first().copied();
    if let Some(second) = second
        && second <= first
    {
        return Err(Violation::BTreeRootOrder { first, second });
    }
    let last = second.unwrap_or(first);

    for (position, key) in tree.leaves() {
        let (lower, upper) = match position {
            LeafPosition::Left => (None, Some(first)),
            LeafPosition::Middle => match second {
                Some(second) => (Some(first), Some(second)),
                None => return Err(Violation::BTreeFanout { key }),
            },
            LeafPosition::Right => (Some(last), None),
        };
        let inside = lower.is_none_or(|lo| key > lo) && upper.is_none_or(|hi| key < hi);
        if !inside {
            return Err(Violation::BTreeOrder {
                key,
                position,
                lower,
                upper,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_btree;
    use crate::{ErrorKind, Violation};
    use arbor_board::{BTREE_SLOT_COUNT, BoardSlotMap, LeafPosition, SlotIndex, decode_btree};

    fn btree(tokens: &[(u32, i64)]) -> Option<arbor_board::TwoLevelBTree> {
        let mut board = BoardSlotMap::new();
        for &(slot, value) in tokens {
            board.place(SlotIndex::new(slot).unwrap(), value);
        }
        decode_btree(&board, BTREE_SLOT_COUNT)
    }

    #[test]
    fn two_key_root_with_three_leaves() {
        let tree = btree(&[(1, 20), (2, 40), (3, 10), (4, 30), (5, 50)]);
        assert!(validate_btree(tree.as_ref()).is_valid());
    }

    #[test]
    fn one_key_root_with_outer_leaves() {
        let tree = btree(&[(1, 20), (3, 10), (5, 30)]);
        assert!(validate_btree(tree.as_ref()).is_valid());
    }

    #[test]
    fn root_keys_must_ascend() {
        let tree = btree(&[(1, 40), (2, 20)]);
        assert_eq!(
            validate_btree(tree.as_ref()).violation(),
            Some(&Violation::BTreeRootOrder {
                first: 40,
                second: 20,
            })
        );
    }

    #[test]
    fn middle_leaf_outside_root_keys() {
        let tree = btree(&[(1, 20), (2, 40), (3, 10), (4, 45), (5, 50)]);
        assert_eq!(
            validate_btree(tree.as_ref()).violation(),
            Some(&Violation::BTreeOrder {
                key: 45,
                position: LeafPosition::Middle,
                lower: Some(20),
                upper: Some(40),
            })
        );
    }

    #[test]
    fn leaf_equal_to_root_key_is_rejected() {
        let tree = btree(&[(1, 20), (5, 20)]);
        let verdict = validate_btree(tree.as_ref());
        assert_eq!(verdict.kind(), Some(ErrorKind::BtreeOrder));
        assert_eq!(verdict.offending_value(), Some(20));
    }

    #[test]
    fn middle_leaf_needs_two_root_keys() {
        let tree = btree(&[(1, 20), (4, 25)]);
        assert_eq!(
            validate_btree(tree.as_ref()).violation(),
            Some(&Violation::BTreeFanout { key: 25 })
        );
    }

    #[test]
    fn leaves_checked_left_to_right() {
        let tree = btree(&[(1, 20), (2, 40), (3, 30), (5, 10)]);
        assert_eq!(validate_btree(tree.as_ref()).offending_value(), Some(30));
    }
}
