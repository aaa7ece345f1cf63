// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AVL height balance.

use arbor_board::BinaryTreeNode;

use crate::bst::check_order;
use crate::{Verdict, Violation};

/// Height of a subtree: `0` when absent, otherwise `1 + max(left, right)`.
///
/// Recomputed from the children on every call; nodes never store it.
#[must_use]
pub fn height(node: Option<&BinaryTreeNode>) -> u32 {
    node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
}

/// `height(left) - height(right)` for `node`.
#[must_use]
pub fn balance_factor(node: &BinaryTreeNode) -> i64 {
    i64::from(height(node.left())) - i64::from(height(node.right()))
}

/// Checks that `root` is a search tree whose every node has a balance factor
/// in `[-1, 1]`.
///
/// Ordering is checked first and an ordering failure is reported as such.
/// Heights are then computed bottom-up in a single post-order pass; the first
/// unbalanced node reached (left subtree before right, children before
/// parents) is reported with both subtree heights.
///
/// An absent tree is valid.
#[must_use]
pub fn validate_avl(root: Option<&BinaryTreeNode>) -> Verdict {
    check_order(root)
        .and_then(|()| balanced_height(root).map(drop))
        .into()
}

fn balanced_height(node: Option<&BinaryTreeNode>) -> Result<u32, Violation> {
    let Some(node) = node else {
        return Ok(0);
    };
    let left_height = balanced_height(node.left())?;
    let right_height = balanced_height(node.right())?;
    if left_height.abs_diff(right_height) > 1 {
        return Err(Violation::AvlBalance {
            value: node.value(),
            left_height,
            right_height,
        });
    }
    Ok(1 + left_height.max(right_height))
}
