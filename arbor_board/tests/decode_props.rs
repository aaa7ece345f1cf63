// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural properties of the slot decoder over arbitrary sparse boards.

use arbor_board::{BinaryTreeNode, BoardSlotMap, SlotIndex, decode, decode_forest};
use proptest::prelude::*;

const SLOTS: u32 = 15;

/// Board with slot `i` populated (value `i * 10`) when bit `i - 1` of `mask` is set.
fn board_from_mask(mask: u16) -> BoardSlotMap {
    let mut board = BoardSlotMap::new();
    for i in 1..=SLOTS {
        if mask & (1 << (i - 1)) != 0 {
            board.place(SlotIndex::new(i).unwrap(), i64::from(i) * 10);
        }
    }
    board
}

fn check_links(node: &BinaryTreeNode, board: &BoardSlotMap) -> Result<(), TestCaseError> {
    let slot = node.slot();
    prop_assert_eq!(node.value(), board.get(slot).unwrap().value);
    let left = slot.left_child().unwrap();
    let right = slot.right_child().unwrap();
    let expect_left = left.fits(SLOTS) && board.is_populated(left);
    let expect_right = right.fits(SLOTS) && board.is_populated(right);
    prop_assert_eq!(node.left().map(BinaryTreeNode::slot), expect_left.then_some(left));
    prop_assert_eq!(node.right().map(BinaryTreeNode::slot), expect_right.then_some(right));
    if let Some(l) = node.left() {
        check_links(l, board)?;
    }
    if let Some(r) = node.right() {
        check_links(r, board)?;
    }
    Ok(())
}

proptest! {
    /// Every populated slot becomes exactly one node.
    #[test]
    fn node_count_matches_populated_slots(mask in 0_u16..(1 << 15)) {
        let board = board_from_mask(mask);
        let forest = decode_forest(&board, SLOTS);
        prop_assert_eq!(forest.node_count(), board.len());
    }

    /// Children are exactly slots `2i` and `2i + 1` when populated, absent otherwise.
    #[test]
    fn links_follow_index_arithmetic(mask in 0_u16..(1 << 15)) {
        let board = board_from_mask(mask);
        let forest = decode_forest(&board, SLOTS);
        for tree in forest.root().into_iter().chain(forest.detached()) {
            check_links(tree, &board)?;
        }
    }

    /// A board whose populated slots are all connected decodes into one tree.
    #[test]
    fn connected_boards_have_no_detached_tokens(len in 1_usize..=15) {
        let values: Vec<i64> = (1..=len as i64).collect();
        let board = BoardSlotMap::from_values(&values);
        let forest = decode_forest(&board, SLOTS);
        prop_assert!(forest.detached().is_empty());
        prop_assert_eq!(decode(&board, SLOTS).map(|root| root.len()), Some(len));
    }
}
