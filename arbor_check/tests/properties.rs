// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-checks of the checkers against independent formulations.

use arbor_board::{BinaryTreeNode, BoardSlotMap, Color, SlotIndex, decode};
use arbor_check::{
    BoardShape, Challenge, height, is_valid_bst, validate_avl, validate_bst, validate_rb,
};
use proptest::prelude::*;

fn permutations(items: &mut Vec<i64>, k: usize, out: &mut Vec<Vec<i64>>) {
    if k == items.len() {
        out.push(items.clone());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permutations(items, k + 1, out);
        items.swap(k, i);
    }
}

fn in_order_is_sorted(root: Option<&BinaryTreeNode>) -> bool {
    let keys: Vec<i64> = root
        .into_iter()
        .flat_map(BinaryTreeNode::in_order)
        .map(BinaryTreeNode::value)
        .collect();
    keys.windows(2).all(|w| w[0] < w[1])
}

/// Every placement of seven distinct keys on a seven-slot board is a search
/// tree exactly when its in-order walk is sorted.
#[test]
fn bst_check_agrees_with_sorted_in_order_walk() {
    let mut all = Vec::new();
    permutations(&mut vec![10, 20, 30, 40, 50, 60, 70], 0, &mut all);
    assert_eq!(all.len(), 5040);

    let mut valid = 0;
    for perm in &all {
        let root = decode(&BoardSlotMap::from_values(perm), 7);
        let expected = in_order_is_sorted(root.as_ref());
        assert_eq!(is_valid_bst(root.as_ref()), expected, "placement {perm:?}");
        valid += usize::from(expected);
    }
    // A full three-level tree over fixed keys has one valid placement.
    assert_eq!(valid, 1);
}

fn height_balanced(node: Option<&BinaryTreeNode>) -> bool {
    node.is_none_or(|n| {
        height(n.left()).abs_diff(height(n.right())) <= 1
            && height_balanced(n.left())
            && height_balanced(n.right())
    })
}

/// Black tokens on each root-to-nil path, the nil leaf included.
fn path_black_counts(node: Option<&BinaryTreeNode>, above: u32, out: &mut Vec<u32>) {
    match node {
        None => out.push(above + 1),
        Some(n) => {
            let here = above + u32::from(!n.is_red());
            path_black_counts(n.left(), here, out);
            path_black_counts(n.right(), here, out);
        }
    }
}

fn red_under_red(node: Option<&BinaryTreeNode>, parent_red: bool) -> bool {
    node.is_some_and(|n| {
        (parent_red && n.is_red())
            || red_under_red(n.left(), n.is_red())
            || red_under_red(n.right(), n.is_red())
    })
}

fn is_red_black(root: Option<&BinaryTreeNode>) -> bool {
    let mut counts = Vec::new();
    path_black_counts(root, 0, &mut counts);
    root.is_none_or(|r| !r.is_red())
        && is_valid_bst(root)
        && !red_under_red(root, false)
        && counts.windows(2).all(|w| w[0] == w[1])
}

fn arb_board(max_slot: u32) -> impl Strategy<Value = BoardSlotMap> {
    proptest::collection::btree_map(1..=max_slot, (-50_i64..50, any::<bool>()), 0..=max_slot as usize)
        .prop_map(|slots| {
            let mut board = BoardSlotMap::new();
            for (slot, (value, red)) in slots {
                let color = if red { Color::Red } else { Color::Black };
                board.place_colored(SlotIndex::new(slot).unwrap(), value, color);
            }
            board
        })
}

proptest! {
    /// Checking twice gives the same answer; nothing on the tree changes.
    #[test]
    fn checkers_are_idempotent(board in arb_board(15)) {
        let root = decode(&board, 15);
        let before = root.clone();
        prop_assert_eq!(validate_bst(root.as_ref()), validate_bst(root.as_ref()));
        prop_assert_eq!(validate_avl(root.as_ref()), validate_avl(root.as_ref()));
        prop_assert_eq!(validate_rb(root.as_ref()), validate_rb(root.as_ref()));
        prop_assert_eq!(root, before);
    }

    /// AVL validity is search-tree validity plus per-node balance.
    #[test]
    fn avl_is_bst_and_balanced(board in arb_board(15)) {
        let root = decode(&board, 15);
        let expected = is_valid_bst(root.as_ref()) && height_balanced(root.as_ref());
        prop_assert_eq!(validate_avl(root.as_ref()).is_valid(), expected);
    }

    /// Every valid red-black tree is a valid search tree with a black root.
    #[test]
    fn valid_rb_implies_bst(board in arb_board(15)) {
        let root = decode(&board, 15);
        if validate_rb(root.as_ref()).is_valid() {
            prop_assert!(is_valid_bst(root.as_ref()));
            prop_assert!(root.as_ref().is_none_or(|r| !r.is_red()));
        }
    }

    /// The checker agrees with a path-by-path reading of the coloring rules.
    #[test]
    fn rb_agrees_with_path_counts(board in arb_board(15)) {
        let root = decode(&board, 15);
        prop_assert_eq!(validate_rb(root.as_ref()).is_valid(), is_red_black(root.as_ref()));
    }

    /// Whole-board validation never panics and is deterministic.
    #[test]
    fn board_validation_is_deterministic(board in arb_board(20)) {
        for shape in BoardShape::ALL {
            let challenge = Challenge::standard(shape);
            prop_assert_eq!(challenge.validate(&board), challenge.validate(&board));
        }
    }
}
