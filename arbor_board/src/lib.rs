// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Board: slot boards for tree-building puzzles.
//!
//! Players build trees by dropping numbered tokens into a fixed grid of slots.
//! This crate turns such a board into something an algorithm can look at.
//!
//! - [`SlotIndex`]: a 1-based slot position under complete-binary-tree addressing
//!   (slot `i` has children `2i` and `2i + 1`).
//! - [`Placement`] and [`Color`]: the token in a slot and its (optional) color.
//! - [`BoardSlotMap`]: the flat slot → token mapping a player submits.
//! - [`decode`] / [`decode_forest`]: build an owned [`BinaryTreeNode`] tree from a board.
//! - [`decode_btree`]: read the separate five-slot layout used by B-tree boards into a
//!   [`TwoLevelBTree`].
//!
//! Decoding never fails and never judges. A board missing its root decodes to `None`;
//! whether a tree is a valid search tree, balanced, and so on is for a checker to decide.
//!
//! ## Example
//!
//! ```rust
//! use arbor_board::{BoardSlotMap, Color, SlotIndex, decode};
//!
//! let mut board = BoardSlotMap::new();
//! board.place(SlotIndex::ROOT, 50);
//! board.place_colored(SlotIndex::new(2).unwrap(), 30, Color::Red);
//! board.place_colored(SlotIndex::new(3).unwrap(), 70, Color::Red);
//!
//! let root = decode(&board, 7).unwrap();
//! let keys: Vec<i64> = root.in_order().map(|n| n.value()).collect();
//! assert_eq!(keys, [30, 50, 70]);
//! assert!(root.left().unwrap().is_red());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
mod btree;
mod error;
mod slot;
mod tree;

pub use board::BoardSlotMap;
pub use btree::{BTREE_SLOT_COUNT, LeafPosition, TwoLevelBTree, decode_btree};
pub use error::BoardError;
pub use slot::{Color, Placement, SlotIndex};
pub use tree::{BinaryTreeNode, Forest, InOrder, decode, decode_forest};
