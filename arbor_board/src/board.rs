// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat slot → token mapping submitted by a player.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::{Color, Placement, SlotIndex};

/// A board as submitted: which token sits in which slot.
///
/// Slots without an entry are empty positions. Iteration is in ascending slot
/// order, so anything derived from a board is deterministic.
///
/// On the wire this is an object keyed by slot number:
///
/// ```rust
/// use arbor_board::{BoardSlotMap, Color, SlotIndex};
///
/// let board: BoardSlotMap = serde_json::from_str(
///     r#"{ "1": { "value": 50, "color": "black" }, "2": { "value": 30 } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(board.len(), 2);
/// let root = board.get(SlotIndex::ROOT).unwrap();
/// assert_eq!(root.value, 50);
/// assert_eq!(root.effective_color(), Color::Black);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSlotMap {
    slots: BTreeMap<SlotIndex, Placement>,
}

impl BoardSlotMap {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills slots `1..=values.len()` in order with uncolored tokens.
    ///
    /// Handy for tests and for traversal boards, where slot order is the
    /// submitted sequence.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        let mut board = Self::new();
        for (slot, &value) in (1..).filter_map(SlotIndex::new).zip(values) {
            board.place(slot, value);
        }
        board
    }

    /// Puts an uncolored token into `slot`, replacing whatever was there.
    pub fn place(&mut self, slot: SlotIndex, value: i64) -> Option<Placement> {
        self.slots.insert(slot, Placement::new(value))
    }

    /// Puts a colored token into `slot`, replacing whatever was there.
    pub fn place_colored(&mut self, slot: SlotIndex, value: i64, color: Color) -> Option<Placement> {
        self.slots.insert(slot, Placement::colored(value, color))
    }

    /// Empties `slot`, returning the token that was there.
    pub fn clear_slot(&mut self, slot: SlotIndex) -> Option<Placement> {
        self.slots.remove(&slot)
    }

    /// The token in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: SlotIndex) -> Option<&Placement> {
        self.slots.get(&slot)
    }

    /// Whether `slot` holds a token.
    #[must_use]
    pub fn is_populated(&self, slot: SlotIndex) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Populated slots in ascending order.
    pub fn iter(&self) -> btree_map::Iter<'_, SlotIndex, Placement> {
        self.slots.iter()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The largest populated slot index.
    #[must_use]
    pub fn highest_slot(&self) -> Option<SlotIndex> {
        self.slots.keys().next_back().copied()
    }

    /// Populated slots that fit on a board of `slot_count` slots.
    pub fn populated_within(
        &self,
        slot_count: u32,
    ) -> impl Iterator<Item = (SlotIndex, &Placement)> + '_ {
        self.slots
            .iter()
            .take_while(move |(slot, _)| slot.fits(slot_count))
            .map(|(slot, placement)| (*slot, placement))
    }
}

impl<'a> IntoIterator for &'a BoardSlotMap {
    type Item = (&'a SlotIndex, &'a Placement);
    type IntoIter = btree_map::Iter<'a, SlotIndex, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl FromIterator<(SlotIndex, Placement)> for BoardSlotMap {
    fn from_iter<I: IntoIterator<Item = (SlotIndex, Placement)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSlotMap;
    use crate::{Color, Placement, SlotIndex};
    use alloc::vec::Vec;

    fn slot(i: u32) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn place_replaces_and_clear_empties() {
        let mut board = BoardSlotMap::new();
        assert_eq!(board.place(slot(2), 30), None);
        assert_eq!(board.place(slot(2), 35), Some(Placement::new(30)));
        assert_eq!(board.clear_slot(slot(2)), Some(Placement::new(35)));
        assert!(board.is_empty());
    }

    #[test]
    fn from_values_fills_from_the_root() {
        let board = BoardSlotMap::from_values(&[50, 30, 70]);
        assert_eq!(board.len(), 3);
        assert_eq!(board.get(SlotIndex::ROOT), Some(&Placement::new(50)));
        assert_eq!(board.get(slot(3)), Some(&Placement::new(70)));
        assert_eq!(board.highest_slot(), Some(slot(3)));
    }

    #[test]
    fn populated_within_ignores_slots_past_capacity() {
        let mut board = BoardSlotMap::from_values(&[1, 2, 3]);
        board.place_colored(slot(9), 9, Color::Red);
        let within: Vec<u32> = board.populated_within(7).map(|(s, _)| s.get()).collect();
        assert_eq!(within, [1, 2, 3]);
        assert_eq!(board.populated_within(15).count(), 4);
    }
}
