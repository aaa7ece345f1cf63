// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Check: invariant checkers for trees built on slot boards.
//!
//! Given a tree decoded by [`arbor_board`], decide whether it is a valid
//! instance of a target structure and, if not, say exactly which rule broke
//! and where.
//!
//! - [`validate_bst`] / [`is_valid_bst`]: search-tree ordering, via open ranges
//!   tightened on the way down.
//! - [`validate_avl`]: ordering plus a balance factor in `[-1, 1]` at every node.
//! - [`validate_rb`]: black root, ordering, no red node with a red child, and
//!   equal black height on both sides of every node.
//! - [`validate_btree`]: key ranges for the fixed two-level order-3 B-tree board.
//! - [`validate_traversal`]: a submitted sequence against the in-order
//!   traversal of the reference tree.
//!
//! Every checker returns a [`Verdict`]: valid, or the first [`Violation`] found,
//! which carries an [`ErrorKind`], a message for the player, and usually the
//! offending key. Failing a check is the normal outcome of an unfinished board,
//! so it is a value, not an error.
//!
//! ## Whole boards
//!
//! [`Challenge`] ties a [`BoardShape`] to board rules (capacity, whether every
//! slot must be filled) and runs decode-then-check in one call.
//! [`ChallengeSet`] holds the rules for every shape and can be loaded from
//! configuration. [`Report`] is the flat form of a verdict for the session layer.
//!
//! ```rust
//! use arbor_board::{BoardSlotMap, Color, SlotIndex};
//! use arbor_check::{BoardShape, ChallengeSet, ErrorKind, Report};
//!
//! let rules = ChallengeSet::default();
//!
//! let mut board = BoardSlotMap::new();
//! board.place_colored(SlotIndex::ROOT, 50, Color::Red);
//!
//! let verdict = rules.validate(BoardShape::Rb, &board);
//! assert_eq!(verdict.kind(), Some(ErrorKind::RbRootColor));
//!
//! let report = Report::new(BoardShape::Rb, &verdict);
//! assert_eq!(report.message, "Root 50 must be black.");
//! ```
//!
//! Checkers are pure: each call works on a borrowed snapshot and builds a fresh
//! verdict, so calls may run concurrently without coordination.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod avl;
mod bst;
mod btree;
mod challenge;
mod rb;
mod report;
mod traversal;
mod verdict;

pub use avl::{balance_factor, height, validate_avl};
pub use bst::{is_valid_bst, validate_bst};
pub use btree::validate_btree;
pub use challenge::{
    BoardShape, Challenge, ChallengeOverrides, ChallengeSet, UnknownShape, validate_board,
};
pub use rb::{black_height, validate_rb};
pub use report::Report;
pub use traversal::{
    REFERENCE_SLOTS, TRAVERSAL_LENGTH, canonical_sequence, compare_sequence, reference_tree,
    validate_traversal,
};
pub use verdict::{ErrorKind, Verdict, Violation};
