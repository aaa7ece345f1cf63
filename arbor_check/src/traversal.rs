// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-order traversal of the reference tree.

use arbor_board::{BinaryTreeNode, BoardSlotMap, decode};

use crate::{Verdict, Violation};

/// Slot contents of the reference tree, slots `1..=7`.
///
/// It is the tree the BST drill builds by inserting 50, 30, 70, 20, 40, 60
/// and 80 in that order.
pub const REFERENCE_SLOTS: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Number of values in a traversal answer.
pub const TRAVERSAL_LENGTH: usize = REFERENCE_SLOTS.len();

const CANONICAL_IN_ORDER: [i64; TRAVERSAL_LENGTH] = [20, 30, 40, 50, 60, 70, 80];

/// The reference tree, decoded from [`REFERENCE_SLOTS`].
#[must_use]
pub fn reference_tree() -> Option<BinaryTreeNode> {
    decode(&BoardSlotMap::from_values(&REFERENCE_SLOTS), 7)
}

/// In-order traversal of [`reference_tree`].
#[must_use]
pub const fn canonical_sequence() -> [i64; TRAVERSAL_LENGTH] {
    CANONICAL_IN_ORDER
}

/// Checks a submitted traversal against [`canonical_sequence`].
///
/// A sequence shorter than seven values is incomplete. Otherwise the first
/// wrong position (counting from 1) is reported; a value past the seventh
/// counts as wrong at position 8.
///
/// ```rust
/// use arbor_check::{ErrorKind, Violation, validate_traversal};
///
/// assert!(validate_traversal(&[20, 30, 40, 50, 60, 70, 80]).is_valid());
///
/// let verdict = validate_traversal(&[20, 30, 40, 50, 60, 80, 70]);
/// assert_eq!(verdict.kind(), Some(ErrorKind::TraversalMismatch));
/// assert_eq!(verdict.violation(), Some(&Violation::TraversalMismatch { position: 6 }));
/// ```
#[must_use]
pub fn validate_traversal(sequence: &[i64]) -> Verdict {
    compare_sequence(sequence, &CANONICAL_IN_ORDER)
}

/// Compares `submitted` with `expected` element by element.
///
/// Shared by [`validate_traversal`] and by callers grading a traversal of a
/// tree of their own.
#[must_use]
pub fn compare_sequence(submitted: &[i64], expected: &[i64]) -> Verdict {
    mismatch(submitted, expected).into()
}

fn mismatch(submitted: &[i64], expected: &[i64]) -> Result<(), Violation> {
    if submitted.len() < expected.len() {
        return Err(Violation::Incomplete {
            populated: submitted.len(),
            required: expected.len(),
        });
    }
    let wrong = submitted
        .iter()
        .zip(expected)
        .position(|(got, want)| got != want)
        .or_else(|| (submitted.len() > expected.len()).then_some(expected.len()));
    match wrong {
        Some(index) => Err(Violation::TraversalMismatch {
            position: index + 1,
        }),
        None => Ok(()),
    }
}
