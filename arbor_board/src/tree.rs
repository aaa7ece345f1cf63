// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned binary trees and the decoder that builds them from a slot board.

use alloc::boxed::Box;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{BoardSlotMap, Color, SlotIndex};

/// One placed token, owning its (possibly absent) children.
///
/// Trees are snapshots: built fresh from a board, inspected, and dropped.
/// Nothing here is mutated after construction, and no derived data such as
/// subtree height is stored on the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryTreeNode {
    slot: SlotIndex,
    value: i64,
    color: Color,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl BinaryTreeNode {
    /// Creates a childless node.
    #[must_use]
    pub const fn new(slot: SlotIndex, value: i64, color: Color) -> Self {
        Self {
            slot,
            value,
            color,
            left: None,
            right: None,
        }
    }

    /// Attaches `child` as the left subtree, replacing any previous one.
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attaches `child` as the right subtree, replacing any previous one.
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// The slot this token was decoded from.
    #[must_use]
    pub const fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// The token's key.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The token's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether the token is red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Left subtree.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Right subtree.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether both children are absent.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Self::len) + self.right().map_or(0, Self::len)
    }

    /// In-order (left, node, right) walk over this subtree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(Some(self))
    }
}

/// In-order iterator over a [`BinaryTreeNode`] subtree.
///
/// Keeps an explicit stack of pending ancestors; boards are shallow, so the
/// stack normally lives inline.
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: SmallVec<[&'a BinaryTreeNode; 8]>,
}

impl<'a> InOrder<'a> {
    /// Walks `root` in order; an absent root yields nothing.
    #[must_use]
    pub fn new(root: Option<&'a BinaryTreeNode>) -> Self {
        let mut it = Self {
            stack: SmallVec::new(),
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a BinaryTreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a BinaryTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Builds the tree rooted at slot `1` of a board with `slot_count` slots.
///
/// Node `i` gets node `2i` as its left child and node `2i + 1` as its right
/// child when those slots exist on the board and are populated. Linkage comes
/// only from that index arithmetic, so the result is always a strict tree.
///
/// Returns `None` when slot `1` is empty. Sparse boards are fine; deciding
/// whether a board must be complete is up to the caller. Populated slots past
/// `slot_count`, and populated slots whose parent slot is empty, are not part
/// of the returned tree (see [`decode_forest`] to get at those).
///
/// ```rust
/// use arbor_board::{BoardSlotMap, decode};
///
/// let board = BoardSlotMap::from_values(&[50, 30, 70]);
/// let root = decode(&board, 7).unwrap();
/// assert_eq!(root.value(), 50);
/// assert_eq!(root.left().unwrap().value(), 30);
/// assert_eq!(root.right().unwrap().value(), 70);
/// ```
#[must_use]
pub fn decode(board: &BoardSlotMap, slot_count: u32) -> Option<BinaryTreeNode> {
    build(board, SlotIndex::ROOT, slot_count)
}

fn build(board: &BoardSlotMap, slot: SlotIndex, slot_count: u32) -> Option<BinaryTreeNode> {
    if !slot.fits(slot_count) {
        return None;
    }
    let placement = board.get(slot)?;
    let mut node = BinaryTreeNode::new(slot, placement.value, placement.effective_color());
    node.left = slot
        .left_child()
        .and_then(|child| build(board, child, slot_count))
        .map(Box::new);
    node.right = slot
        .right_child()
        .and_then(|child| build(board, child, slot_count))
        .map(Box::new);
    Some(node)
}

/// Every token on a board, grouped into the trees the slot arithmetic implies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Forest {
    root: Option<BinaryTreeNode>,
    detached: Vec<BinaryTreeNode>,
}

impl Forest {
    /// The tree hanging from slot `1`.
    #[must_use]
    pub fn root(&self) -> Option<&BinaryTreeNode> {
        self.root.as_ref()
    }

    /// Subtrees whose top slot has an empty parent slot, in slot order.
    #[must_use]
    pub fn detached(&self) -> &[BinaryTreeNode] {
        &self.detached
    }

    /// Total number of nodes across the root tree and all detached subtrees.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, BinaryTreeNode::len)
            + self.detached.iter().map(BinaryTreeNode::len).sum::<usize>()
    }
}

/// Like [`decode`], but also keeps tokens that are not connected to the root.
///
/// A populated slot whose parent slot is empty starts a detached subtree.
/// Every populated slot in `1..=slot_count` ends up in exactly one tree, so
/// [`Forest::node_count`] equals the number of such slots.
#[must_use]
pub fn decode_forest(board: &BoardSlotMap, slot_count: u32) -> Forest {
    let root = decode(board, slot_count);
    let detached: Vec<_> = board
        .populated_within(slot_count)
        .filter(|(slot, _)| slot.parent().is_some_and(|p| !board.is_populated(p)))
        .filter_map(|(slot, _)| build(board, slot, slot_count))
        .collect();
    tracing::trace!(
        slot_count,
        has_root = root.is_some(),
        detached = detached.len(),
        "decoded slot board"
    );
    Forest { root, detached }
}
