// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reference tree a drill grades against.

use alloc::boxed::Box;
use core::cmp::Ordering;

use arbor_board::{BoardSlotMap, SlotIndex};
use smallvec::SmallVec;

use crate::DrillError;

type Link = Option<Box<Node>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    value: i64,
    left: Link,
    right: Link,
}

impl Node {
    const fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree of distinct keys.
///
/// This is the textbook structure the drill asks players to operate by hand:
/// no rebalancing, so the shape depends on insertion order.
///
/// ```rust
/// use arbor_drill::SearchTree;
///
/// let mut tree: SearchTree = [50, 30, 70, 20, 40].into_iter().collect();
/// assert!(tree.contains(40));
/// assert!(!tree.insert(30));
///
/// assert!(tree.remove(30));
/// assert_eq!(tree.in_order().collect::<Vec<_>>(), [20, 40, 50, 70]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTree {
    root: Link,
    len: usize,
}

impl SearchTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key at the root, if any.
    #[must_use]
    pub fn root(&self) -> Option<i64> {
        self.root.as_ref().map(|n| n.value)
    }

    /// Adds `value` as a new leaf.
    ///
    /// Returns `false`, leaving the tree unchanged, if the key is already present.
    pub fn insert(&mut self, value: i64) -> bool {
        let inserted = insert_into(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Whether `value` is in the tree.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `value`, returning whether it was present.
    ///
    /// A node with two children takes the key of its in-order successor, which
    /// is then removed from the right subtree.
    pub fn remove(&mut self, value: i64) -> bool {
        let removed = remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Keys in ascending order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_> {
        let mut it = InOrder {
            stack: SmallVec::new(),
        };
        it.push_left_spine(self.root.as_deref());
        it
    }

    /// Number of levels; an empty tree has height 0.
    #[must_use]
    pub fn height(&self) -> u32 {
        fn level(link: &Link) -> u32 {
            link.as_ref()
                .map_or(0, |n| 1 + level(&n.left).max(level(&n.right)))
        }
        level(&self.root)
    }

    /// Lays the tree out on a board of `slot_count` slots.
    ///
    /// The root goes into slot `1` and every child into `2i` or `2i + 1` of
    /// its parent, so [`arbor_board::decode`] gives back the same shape.
    ///
    /// # Errors
    ///
    /// [`DrillError::TooDeep`] if some node falls past `slot_count`.
    pub fn to_board(&self, slot_count: u32) -> Result<BoardSlotMap, DrillError> {
        let mut board = BoardSlotMap::new();
        if let Some(root) = &self.root {
            export(root, Some(SlotIndex::ROOT), 0, slot_count, &mut board)?;
        }
        Ok(board)
    }
}

impl FromIterator<i64> for SearchTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i64> for SearchTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

fn insert_into(link: &mut Link, value: i64) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node::leaf(value)));
            true
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_into(&mut node.left, value),
            Ordering::Greater => insert_into(&mut node.right, value),
            Ordering::Equal => false,
        },
    }
}

fn remove_from(link: &mut Link, value: i64) -> bool {
    let Some(node) = link else {
        return false;
    };
    match value.cmp(&node.value) {
        Ordering::Less => remove_from(&mut node.left, value),
        Ordering::Greater => remove_from(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some()
                && let Some(successor) = take_min(&mut node.right)
            {
                node.value = successor;
            } else {
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }
            true
        }
    }
}

/// Unlinks the smallest node under `link` and returns its key.
fn take_min(link: &mut Link) -> Option<i64> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }
    let value = node.value;
    let rest = node.right.take();
    *link = rest;
    Some(value)
}

fn export(
    node: &Node,
    slot: Option<SlotIndex>,
    depth: u32,
    slot_count: u32,
    board: &mut BoardSlotMap,
) -> Result<(), DrillError> {
    let slot = slot
        .filter(|s| s.fits(slot_count))
        .ok_or(DrillError::TooDeep {
            value: node.value,
            depth,
            slot_count,
        })?;
    board.place(slot, node.value);
    if let Some(left) = &node.left {
        export(left, slot.left_child(), depth + 1, slot_count, board)?;
    }
    if let Some(right) = &node.right {
        export(right, slot.right_child(), depth + 1, slot_count, board)?;
    }
    Ok(())
}

/// Ascending iterator over the keys of a [`SearchTree`].
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: SmallVec<[&'a Node; 8]>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.value)
    }
}
