// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed five-slot layout used by B-tree boards.
//!
//! B-tree boards do not use `2i`/`2i + 1` addressing. Instead:
//!
//! | Slot | Meaning |
//! |------|---------|
//! | 1 | first root key |
//! | 2 | second root key (optional) |
//! | 3 | left leaf |
//! | 4 | middle leaf |
//! | 5 | right leaf |

use core::fmt;
use core::num::NonZeroU32;

use smallvec::SmallVec;

use crate::{BoardSlotMap, SlotIndex};

/// Capacity of a B-tree board.
pub const BTREE_SLOT_COUNT: u32 = 5;

const SECOND_KEY_SLOT: SlotIndex = SlotIndex::from_nonzero(NonZeroU32::MIN.saturating_add(1));
const LEFT_LEAF_SLOT: SlotIndex = SlotIndex::from_nonzero(NonZeroU32::MIN.saturating_add(2));
const MIDDLE_LEAF_SLOT: SlotIndex = SlotIndex::from_nonzero(NonZeroU32::MIN.saturating_add(3));
const RIGHT_LEAF_SLOT: SlotIndex = SlotIndex::from_nonzero(NonZeroU32::MIN.saturating_add(4));

/// Where a leaf hangs relative to the root keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LeafPosition {
    /// Before the first root key.
    Left,
    /// Between the two root keys.
    Middle,
    /// After the last root key.
    Right,
}

impl LeafPosition {
    /// All positions, left to right.
    pub const ALL: [Self; 3] = [Self::Left, Self::Middle, Self::Right];

    /// The board slot holding this leaf.
    #[must_use]
    pub const fn slot(self) -> SlotIndex {
        match self {
            Self::Left => LEFT_LEAF_SLOT,
            Self::Middle => MIDDLE_LEAF_SLOT,
            Self::Right => RIGHT_LEAF_SLOT,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

impl fmt::Display for LeafPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        })
    }
}

/// A two-level, order-3 B-tree: one root with one or two keys and up to three
/// single-key leaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwoLevelBTree {
    root_keys: SmallVec<[i64; 2]>,
    leaves: [Option<i64>; 3],
}

impl TwoLevelBTree {
    /// Root keys in slot order. Always one or two keys; not necessarily sorted.
    #[must_use]
    pub fn root_keys(&self) -> &[i64] {
        &self.root_keys
    }

    /// The key in the leaf at `position`, if populated.
    #[must_use]
    pub fn leaf(&self, position: LeafPosition) -> Option<i64> {
        self.leaves[position.index()]
    }

    /// Populated leaves, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = (LeafPosition, i64)> + '_ {
        LeafPosition::ALL
            .into_iter()
            .filter_map(|position| self.leaf(position).map(|key| (position, key)))
    }
}

/// Reads the five-slot B-tree layout off a board.
///
/// Only slots within `slot_count` are read, so a board smaller than
/// [`BTREE_SLOT_COUNT`] simply has fewer places for keys. Slots past `5` are
/// never part of the layout. Returns `None` when slot `1` is empty or outside
/// the board.
///
/// ```rust
/// use arbor_board::{BTREE_SLOT_COUNT, BoardSlotMap, LeafPosition, decode_btree};
///
/// let board = BoardSlotMap::from_values(&[20, 40, 10, 30, 50]);
/// let btree = decode_btree(&board, BTREE_SLOT_COUNT).unwrap();
/// assert_eq!(btree.root_keys(), &[20, 40]);
/// assert_eq!(btree.leaf(LeafPosition::Middle), Some(30));
///
/// let small = decode_btree(&board, 3).unwrap();
/// assert_eq!(small.leaf(LeafPosition::Middle), None);
/// ```
#[must_use]
pub fn decode_btree(board: &BoardSlotMap, slot_count: u32) -> Option<TwoLevelBTree> {
    let value_at = |slot: SlotIndex| {
        Some(slot)
            .filter(|s| s.fits(slot_count))
            .and_then(|s| board.get(s))
            .map(|p| p.value)
    };
    let first = value_at(SlotIndex::ROOT)?;
    let mut root_keys = SmallVec::new();
    root_keys.push(first);
    if let Some(second) = value_at(SECOND_KEY_SLOT) {
        root_keys.push(second);
    }
    let leaves = LeafPosition::ALL.map(|position| value_at(position.slot()));
    Some(TwoLevelBTree { root_keys, leaves })
}
