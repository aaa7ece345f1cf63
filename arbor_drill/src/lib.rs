// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Drill: a scripted binary-search-tree exercise.
//!
//! A drill is a fixed list of questions ("insert 50", "search for 40",
//! "delete 20", "read the tree back in order") answered one at a time.
//!
//! - [`SearchTree`]: the plain, unbalanced search tree the questions act on,
//!   exportable to a slot board with [`SearchTree::to_board`].
//! - [`Script`], [`Step`], [`Operation`]: the questions. [`Script::standard`]
//!   builds the seven-node reference tree, searches, deletes, and asks for the
//!   traversal.
//! - [`DrillSession`]: walks a script, grading each [`Answer`] into an
//!   [`Outcome`] and keeping the expected tree and score counters.
//!
//! ```rust
//! use arbor_drill::{Answer, DrillSession, Outcome};
//!
//! let mut session = DrillSession::default();
//! assert_eq!(session.answer(Answer::Insert(50)), Outcome::Correct);
//! assert!(matches!(session.answer(Answer::Search(30)), Outcome::WrongOperation { .. }));
//! assert!(matches!(session.answer(Answer::Insert(31)), Outcome::Incorrect(_)));
//! assert_eq!(session.answer(Answer::Insert(30)), Outcome::Correct);
//!
//! assert_eq!((session.correct(), session.attempted()), (2, 3));
//! ```
//!
//! The in-order question is graded with [`arbor_check::compare_sequence`], so a
//! wrong readout names the first position that is off.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod script;
mod search_tree;
mod session;

pub use error::DrillError;
pub use script::{Operation, Script, Step};
pub use search_tree::{InOrder, SearchTree};
pub use session::{Answer, DrillSession, Mistake, Outcome};
