// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot addressing and the token placed in a slot.

use alloc::string::String;
use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BoardError;

/// Position of a slot on a board, under complete-binary-tree addressing.
///
/// Slot `1` is the root; the children of slot `i` are `2i` and `2i + 1`.
/// The index is never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlotIndex(NonZeroU32);

impl SlotIndex {
    /// The root slot.
    pub const ROOT: Self = Self(NonZeroU32::MIN);

    /// Creates a slot index, or `None` for `0`.
    #[must_use]
    pub const fn new(index: u32) -> Option<Self> {
        match NonZeroU32::new(index) {
            Some(nz) => Some(Self(nz)),
            None => None,
        }
    }

    /// The raw 1-based index.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Wraps an index already known to be non-zero.
    #[must_use]
    pub const fn from_nonzero(index: NonZeroU32) -> Self {
        Self(index)
    }

    /// Whether this is slot `1`.
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0.get() == 1
    }

    /// Slot `2i`. `None` if the index would overflow.
    #[must_use]
    pub fn left_child(self) -> Option<Self> {
        self.get().checked_mul(2).and_then(Self::new)
    }

    /// Slot `2i + 1`. `None` if the index would overflow.
    #[must_use]
    pub fn right_child(self) -> Option<Self> {
        self.get()
            .checked_mul(2)
            .and_then(|i| i.checked_add(1))
            .and_then(Self::new)
    }

    /// Slot `i / 2`, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        if self.is_root() {
            None
        } else {
            Self::new(self.get() / 2)
        }
    }

    /// Distance from the root; the root has depth `0`.
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.get().ilog2()
    }

    /// Whether the slot lies within a board of `slot_count` slots.
    #[must_use]
    pub const fn fits(self, slot_count: u32) -> bool {
        self.get() <= slot_count
    }
}

impl TryFrom<u32> for SlotIndex {
    type Error = BoardError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(BoardError::ZeroSlot)
    }
}

impl From<SlotIndex> for u32 {
    fn from(slot: SlotIndex) -> Self {
        slot.get()
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Token color. Only red-black boards care; everything else is black.
///
/// Serialized in lowercase; any capitalization is accepted when reading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
    /// A red token.
    Red,
    /// A black token. Boards that carry no color use this.
    #[default]
    Black,
}

impl Color {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("red") {
            Ok(Self::Red)
        } else if s.eq_ignore_ascii_case("black") {
            Ok(Self::Black)
        } else {
            Err(BoardError::UnknownColor(s.into()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = BoardError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// A token sitting in a slot: its key and, optionally, its color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Integer key printed on the token.
    pub value: i64,
    /// Token color, if the board supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Placement {
    /// An uncolored token.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value, color: None }
    }

    /// A colored token.
    #[must_use]
    pub const fn colored(value: i64, color: Color) -> Self {
        Self {
            value,
            color: Some(color),
        }
    }

    /// The color the token counts as: black unless stated otherwise.
    #[must_use]
    pub fn effective_color(&self) -> Color {
        self.color.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Placement, SlotIndex};
    use crate::BoardError;

    fn slot(i: u32) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn child_and_parent_arithmetic() {
        let s = slot(3);
        assert_eq!(s.left_child(), Some(slot(6)));
        assert_eq!(s.right_child(), Some(slot(7)));
        assert_eq!(slot(6).parent(), Some(s));
        assert_eq!(slot(7).parent(), Some(s));
        assert_eq!(SlotIndex::ROOT.parent(), None);
    }

    #[test]
    fn only_slot_one_is_root() {
        assert!(SlotIndex::ROOT.is_root());
        assert!(!slot(2).is_root());
        assert!(!slot(3).is_root());
        assert_eq!(slot(2).parent().map(SlotIndex::is_root), Some(true));
    }

    #[test]
    fn depth_counts_levels_from_root() {
        assert_eq!(SlotIndex::ROOT.depth(), 0);
        assert_eq!(slot(2).depth(), 1);
        assert_eq!(slot(3).depth(), 1);
        assert_eq!(slot(7).depth(), 2);
        assert_eq!(slot(8).depth(), 3);
        assert_eq!(slot(15).depth(), 3);
    }

    #[test]
    fn zero_is_not_a_slot() {
        assert_eq!(SlotIndex::new(0), None);
        assert_eq!(SlotIndex::try_from(0), Err(BoardError::ZeroSlot));
    }

    #[test]
    fn overflowing_children_are_absent() {
        let last = slot(u32::MAX);
        assert_eq!(last.left_child(), None);
        assert_eq!(last.right_child(), None);
    }

    #[test]
    fn color_parsing_is_case_insensitive() {
        assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
        assert_eq!("Black".parse::<Color>(), Ok(Color::Black));
        assert!(matches!(
            "green".parse::<Color>(),
            Err(BoardError::UnknownColor(_))
        ));
    }

    #[test]
    fn uncolored_tokens_count_as_black() {
        assert_eq!(Placement::new(5).effective_color(), Color::Black);
        assert_eq!(
            Placement::colored(5, Color::Red).effective_color(),
            Color::Red
        );
    }
}
