// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Red-black coloring rules.
//!
//! Absent children count as black leaves, each contributing one unit of
//! black height. The black height of a node counts the black nodes strictly
//! below it on any path down to (and including) a nil leaf, so a lone black
//! root has black height `1`.

use arbor_board::BinaryTreeNode;

use crate::bst::check_order;
use crate::{Verdict, Violation};

/// Checks that `root` is a valid red-black tree.
///
/// Rules are checked in this order, and the first failure wins:
///
/// 1. the root is black ([`ErrorKind::RbRootColor`](crate::ErrorKind::RbRootColor));
/// 2. keys obey search-tree ordering ([`ErrorKind::BstOrder`](crate::ErrorKind::BstOrder));
/// 3. walking depth-first, left before right: no red node has a red child
///    ([`ErrorKind::RbRedRed`](crate::ErrorKind::RbRedRed)), and both subtrees of
///    every node have equal black height
///    ([`ErrorKind::RbBlackHeight`](crate::ErrorKind::RbBlackHeight)).
///
/// An absent tree is valid.
///
/// ```rust
/// use arbor_board::{BoardSlotMap, Color, SlotIndex, decode};
/// use arbor_check::{ErrorKind, validate_rb};
///
/// let mut board = BoardSlotMap::new();
/// board.place_colored(SlotIndex::ROOT, 50, Color::Black);
/// board.place_colored(SlotIndex::new(2).unwrap(), 30, Color::Red);
/// board.place_colored(SlotIndex::new(4).unwrap(), 20, Color::Red);
///
/// let verdict = validate_rb(decode(&board, 7).as_ref());
/// assert_eq!(verdict.kind(), Some(ErrorKind::RbRedRed));
/// ```
#[must_use]
pub fn validate_rb(root: Option<&BinaryTreeNode>) -> Verdict {
    let Some(root) = root else {
        return Verdict::VALID;
    };
    if root.is_red() {
        return Verdict::invalid(Violation::RbRootColor {
            value: root.value(),
        });
    }
    check_order(Some(root))
        .and_then(|()| walk(Some(root)).map(drop))
        .into()
}

/// Black height of `root`, or the first coloring violation below it.
///
/// This checks only the red-red and equal-black-height rules; root color and
/// key ordering are left to [`validate_rb`]. An absent tree has black height `0`.
pub fn black_height(root: Option<&BinaryTreeNode>) -> Result<u32, Violation> {
    match root {
        None => Ok(0),
        Some(node) => walk(Some(node)).map(|h| h - own_weight(node)),
    }
}

/// Black nodes on every path from `node` down to a nil leaf, counting both
/// `node` itself and the nil.
fn walk(node: Option<&BinaryTreeNode>) -> Result<u32, Violation> {
    let Some(node) = node else {
        return Ok(1);
    };
    if node.is_red() {
        let red_child = [node.left(), node.right()]
            .into_iter()
            .flatten()
            .find(|child| child.is_red());
        if let Some(child) = red_child {
            return Err(Violation::RbRedRed {
                parent: node.value(),
                child: child.value(),
            });
        }
    }
    let left = walk(node.left())?;
    let right = walk(node.right())?;
    if left != right {
        return Err(Violation::RbBlackHeight {
            value: node.value(),
            left,
            right,
        });
    }
    Ok(left + own_weight(node))
}

fn own_weight(node: &BinaryTreeNode) -> u32 {
    u32::from(!node.is_red())
}

#[cfg(test)]
mod tests {
    use super::{black_height, validate_rb};
    use crate::{ErrorKind, Violation};
    use arbor_board::{BinaryTreeNode, BoardSlotMap, Color, SlotIndex, decode};

    fn slot(i: u32) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn board(tokens: &[(u32, i64, Color)]) -> Option<BinaryTreeNode> {
        let mut board = BoardSlotMap::new();
        for &(s, value, color) in tokens {
            board.place_colored(slot(s), value, color);
        }
        decode(&board, 15)
    }

    use Color::{Black, Red};

    #[test]
    fn lone_black_root() {
        let root = board(&[(1, 50, Black)]);
        assert!(validate_rb(root.as_ref()).is_valid());
        assert_eq!(black_height(root.as_ref()), Ok(1));
    }

    #[test]
    fn black_root_with_two_red_leaves() {
        let root = board(&[(1, 50, Black), (2, 30, Red), (3, 70, Red)]);
        assert!(validate_rb(root.as_ref()).is_valid());
        assert_eq!(black_height(root.as_ref()), Ok(1));
    }

    #[test]
    fn red_child_of_red_node() {
        let root = board(&[(1, 50, Black), (2, 30, Red), (4, 20, Red)]);
        let verdict = validate_rb(root.as_ref());
        assert_eq!(
            verdict.violation(),
            Some(&Violation::RbRedRed {
                parent: 30,
                child: 20,
            })
        );
    }

    #[test]
    fn unequal_black_heights() {
        // Left subtree is a black node (black height 2 with its nil leaves),
        // right subtree is a bare nil (black height 1).
        let root = board(&[(1, 50, Black), (2, 30, Black)]);
        let verdict = validate_rb(root.as_ref());
        assert_eq!(
            verdict.violation(),
            Some(&Violation::RbBlackHeight {
                value: 50,
                left: 2,
                right: 1,
            })
        );
    }

    #[test]
    fn red_root_is_reported_before_anything_else() {
        // Also out of order and red-red, but the root rule comes first.
        let root = board(&[(1, 50, Red), (2, 60, Red)]);
        let verdict = validate_rb(root.as_ref());
        assert_eq!(verdict.kind(), Some(ErrorKind::RbRootColor));
        assert_eq!(verdict.offending_value(), Some(50));
    }

    #[test]
    fn ordering_is_reported_as_ordering() {
        let root = board(&[(1, 50, Black), (2, 60, Red), (3, 70, Red)]);
        assert_eq!(validate_rb(root.as_ref()).kind(), Some(ErrorKind::BstOrder));
    }

    #[test]
    fn uncolored_boards_are_all_black() {
        let values = BoardSlotMap::from_values(&[50, 30, 70, 20, 40, 60, 80]);
        let root = decode(&values, 7);
        assert!(validate_rb(root.as_ref()).is_valid());
        assert_eq!(black_height(root.as_ref()), Ok(3));
    }

    #[test]
    fn seven_node_textbook_tree() {
        let root = board(&[
            (1, 50, Black),
            (2, 30, Red),
            (3, 70, Black),
            (4, 20, Black),
            (5, 40, Black),
            (6, 60, Red),
            (7, 80, Red),
        ]);
        // 70 has black height 1 on both sides; 30's children reach 2. Left of
        // the root reaches 2 (through red 30), right reaches 2 (through 70).
        assert!(validate_rb(root.as_ref()).is_valid());
        assert_eq!(black_height(root.as_ref()), Ok(2));
    }

    #[test]
    fn red_red_found_before_later_height_mismatch() {
        let root = board(&[(1, 50, Black), (2, 30, Red), (4, 20, Red), (3, 70, Black), (7, 80, Black)]);
        assert_eq!(validate_rb(root.as_ref()).kind(), Some(ErrorKind::RbRedRed));
    }

    #[test]
    fn empty_tree_is_valid() {
        assert!(validate_rb(None).is_valid());
        assert_eq!(black_height(None), Ok(0));
    }
}
