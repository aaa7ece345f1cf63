// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary-search-tree ordering.

use arbor_board::BinaryTreeNode;

use crate::{Verdict, Violation};

/// Checks the search-tree ordering of `root`.
///
/// Every key must lie strictly inside the open range set by its ancestors:
/// going left tightens the upper bound to the parent's key, going right
/// tightens the lower bound. Equal keys are therefore always rejected.
/// The left subtree is searched before the right, and the first violation
/// found is the one reported.
///
/// An absent tree is valid.
///
/// ```rust
/// use arbor_board::{BoardSlotMap, decode};
/// use arbor_check::{ErrorKind, validate_bst};
///
/// // 55 sits left of 50's right child 70 but is fine; 45 would not be.
/// let ok = BoardSlotMap::from_values(&[50, 30, 70, 20, 40, 55, 80]);
/// assert!(validate_bst(decode(&ok, 7).as_ref()).is_valid());
///
/// let bad = BoardSlotMap::from_values(&[50, 30, 70, 20, 40, 45, 80]);
/// let verdict = validate_bst(decode(&bad, 7).as_ref());
/// assert_eq!(verdict.kind(), Some(ErrorKind::BstOrder));
/// assert_eq!(verdict.offending_value(), Some(45));
/// ```
#[must_use]
pub fn validate_bst(root: Option<&BinaryTreeNode>) -> Verdict {
    check_order(root).into()
}

/// Shorthand for `validate_bst(root).is_valid()`.
#[must_use]
pub fn is_valid_bst(root: Option<&BinaryTreeNode>) -> bool {
    check_order(root).is_ok()
}

pub(crate) fn check_order(root: Option<&BinaryTreeNode>) -> Result<(), Violation> {
    within(root, None, None)
}

fn within(
    node: Option<&BinaryTreeNode>,
    lower: Option<i64>,
    upper: Option<i64>,
) -> Result<(), Violation> {
    let Some(node) = node else {
        return Ok(());
    };
    let value = node.value();
    if lower.is_some_and(|lo| value <= lo) || upper.is_some_and(|hi| value >= hi) {
        return Err(Violation::BstOrder {
            value,
            lower,
            upper,
        });
    }
    within(node.left(), lower, Some(value))?;
    within(node.right(), Some(value), upper)
}
