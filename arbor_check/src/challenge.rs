// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board shapes, per-shape challenge rules, and whole-board validation.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use arbor_board::{
    BTREE_SLOT_COUNT, BinaryTreeNode, BoardSlotMap, SlotIndex, decode_btree, decode_forest,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    TRAVERSAL_LENGTH, Verdict, Violation, validate_avl, validate_bst, validate_btree, validate_rb,
    validate_traversal,
};

const TRAVERSAL_SLOTS: u32 = 7;
const _: () = assert!(TRAVERSAL_SLOTS as usize == TRAVERSAL_LENGTH);

/// Which structure a board is meant to be.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardShape {
    /// Binary search tree.
    Bst,
    /// AVL tree.
    Avl,
    /// Red-black tree.
    Rb,
    /// Two-level order-3 B-tree on the five-slot layout.
    Btree,
    /// In-order traversal of the reference tree, one value per slot.
    Traversal,
}

impl BoardShape {
    /// All shapes.
    pub const ALL: [Self; 5] = [Self::Bst, Self::Avl, Self::Rb, Self::Btree, Self::Traversal];

    /// Wire name (`"bst"`, `"avl"`, `"rb"`, `"btree"`, `"traversal"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bst => "bst",
            Self::Avl => "avl",
            Self::Rb => "rb",
            Self::Btree => "btree",
            Self::Traversal => "traversal",
        }
    }

    /// What a player builds on this board, for messages.
    #[must_use]
    pub const fn structure(self) -> &'static str {
        match self {
            Self::Bst => "binary search tree",
            Self::Avl => "AVL tree",
            Self::Rb => "red-black tree",
            Self::Btree => "B-tree",
            Self::Traversal => "in-order traversal",
        }
    }
}

impl fmt::Display for BoardShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized shape name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownShape;

impl fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown board shape; expected one of bst, avl, rb, btree, traversal")
    }
}

impl core::error::Error for UnknownShape {}

impl FromStr for BoardShape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownShape)
    }
}

/// Rules for judging one board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    /// The structure being built.
    pub shape: BoardShape,
    /// Board capacity. Slots past this are ignored.
    pub slot_count: u32,
    /// Whether every slot must hold a token.
    pub require_complete: bool,
    /// Whether tokens not connected to the root fail the board.
    ///
    /// Only meaningful for binary-tree shapes.
    pub reject_detached: bool,
}

impl Challenge {
    /// The built-in rules for `shape`.
    ///
    /// | Shape | Slots | Complete board required |
    /// |-------|-------|-------------------------|
    /// | `bst` | 7 | yes |
    /// | `avl` | 15 | no |
    /// | `rb` | 7 | no |
    /// | `btree` | 5 | no |
    /// | `traversal` | 7 | yes |
    ///
    /// Detached tokens are rejected everywhere.
    #[must_use]
    pub const fn standard(shape: BoardShape) -> Self {
        let (slot_count, require_complete) = match shape {
            BoardShape::Bst => (7, true),
            BoardShape::Avl => (15, false),
            BoardShape::Rb => (7, false),
            BoardShape::Btree => (BTREE_SLOT_COUNT, false),
            BoardShape::Traversal => (TRAVERSAL_SLOTS, true),
        };
        Self {
            shape,
            slot_count,
            require_complete,
            reject_detached: true,
        }
    }

    /// Judges `board` under these rules.
    ///
    /// Checks run in this order, and the first failure wins:
    /// an empty board ([`Violation::Empty`]), a board short of tokens when a
    /// complete one is required ([`Violation::Incomplete`]), a missing root,
    /// tokens cut off from the root ([`Violation::Detached`]), and finally the
    /// shape's own invariants.
    ///
    /// ```rust
    /// use arbor_board::BoardSlotMap;
    /// use arbor_check::{BoardShape, Challenge, ErrorKind};
    ///
    /// let bst = Challenge::standard(BoardShape::Bst);
    ///
    /// let board = BoardSlotMap::from_values(&[50, 30, 70, 20, 40, 60, 80]);
    /// assert!(bst.validate(&board).is_valid());
    ///
    /// let partial = BoardSlotMap::from_values(&[50, 30, 70]);
    /// assert_eq!(bst.validate(&partial).kind(), Some(ErrorKind::Incomplete));
    /// ```
    #[must_use]
    pub fn validate(&self, board: &BoardSlotMap) -> Verdict {
        let verdict = match self.shape {
            BoardShape::Bst => self.binary_board(board, validate_bst),
            BoardShape::Avl => self.binary_board(board, validate_avl),
            BoardShape::Rb => self.binary_board(board, validate_rb),
            BoardShape::Btree => self.btree_board(board),
            BoardShape::Traversal => self.traversal_board(board),
        };
        tracing::debug!(
            shape = %self.shape,
            tokens = board.len(),
            valid = verdict.is_valid(),
            kind = ?verdict.kind(),
            "validated board"
        );
        verdict
    }

    fn admit(&self, board: &BoardSlotMap) -> Result<(), Violation> {
        let populated = board.populated_within(self.slot_count).count();
        if populated == 0 {
            return Err(Violation::Empty);
        }
        let required = self.slot_count as usize;
        if self.require_complete && populated < required {
            return Err(Violation::Incomplete {
                populated,
                required,
            });
        }
        Ok(())
    }

    fn binary_board(
        &self,
        board: &BoardSlotMap,
        check: fn(Option<&BinaryTreeNode>) -> Verdict,
    ) -> Verdict {
        if let Err(violation) = self.admit(board) {
            return Verdict::invalid(violation);
        }
        let forest = decode_forest(board, self.slot_count);
        let Some(root) = forest.root() else {
            return Verdict::invalid(Violation::Empty);
        };
        if self.reject_detached
            && let Some(stray) = forest.detached().first()
        {
            return Verdict::invalid(Violation::Detached {
                slot: stray.slot(),
                value: stray.value(),
            });
        }
        check(Some(root))
    }

    fn btree_board(&self, board: &BoardSlotMap) -> Verdict {
        if let Err(violation) = self.admit(board) {
            return Verdict::invalid(violation);
        }
        match decode_btree(board, self.slot_count) {
            Some(tree) => validate_btree(Some(&tree)),
            None => Verdict::invalid(Violation::Empty),
        }
    }

    fn traversal_board(&self, board: &BoardSlotMap) -> Verdict {
        if let Err(violation) = self.admit(board) {
            return Verdict::invalid(violation);
        }
        // The answer is the run of filled slots starting at slot 1; a gap
        // ends it, which leaves the answer short.
        let sequence: SmallVec<[i64; TRAVERSAL_LENGTH]> = (1..=self.slot_count)
            .filter_map(SlotIndex::new)
            .map_while(|slot| board.get(slot).map(|p| p.value))
            .collect();
        validate_traversal(&sequence)
    }
}

/// Per-shape overrides of [`Challenge::standard`], as read from configuration.
///
/// Every field is optional; anything left out keeps the built-in value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChallengeOverrides {
    /// Board capacity. Zero is rejected when reading configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_count: Option<NonZeroU32>,
    /// Whether every slot must hold a token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_complete: Option<bool>,
    /// Whether tokens not connected to the root fail the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_detached: Option<bool>,
}

impl ChallengeOverrides {
    fn apply(&self, mut challenge: Challenge) -> Challenge {
        if let Some(slot_count) = self.slot_count {
            challenge.slot_count = slot_count.get();
        }
        if let Some(require_complete) = self.require_complete {
            challenge.require_complete = require_complete;
        }
        if let Some(reject_detached) = self.reject_detached {
            challenge.reject_detached = reject_detached;
        }
        challenge
    }
}

/// Challenge rules for every shape.
///
/// The default is [`Challenge::standard`] for each shape. As configuration it
/// reads as one optional table per shape:
///
/// ```rust
/// use arbor_check::{BoardShape, ChallengeSet};
///
/// let set: ChallengeSet = toml::from_str(
///     r#"
///     [rb]
///     require_complete = true
///
///     [avl]
///     slot_count = 7
///     "#,
/// )
/// .unwrap();
///
/// assert!(set.challenge(BoardShape::Rb).require_complete);
/// assert_eq!(set.challenge(BoardShape::Rb).slot_count, 7);
/// assert_eq!(set.challenge(BoardShape::Avl).slot_count, 7);
/// assert!(set.challenge(BoardShape::Bst).require_complete);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChallengeSet {
    /// Overrides for `bst` boards.
    pub bst: ChallengeOverrides,
    /// Overrides for `avl` boards.
    pub avl: ChallengeOverrides,
    /// Overrides for `rb` boards.
    pub rb: ChallengeOverrides,
    /// Overrides for `btree` boards.
    pub btree: ChallengeOverrides,
    /// Overrides for `traversal` boards.
    pub traversal: ChallengeOverrides,
}

impl ChallengeSet {
    /// The effective rules for `shape`.
    #[must_use]
    pub fn challenge(&self, shape: BoardShape) -> Challenge {
        let overrides = match shape {
            BoardShape::Bst => &self.bst,
            BoardShape::Avl => &self.avl,
            BoardShape::Rb => &self.rb,
            BoardShape::Btree => &self.btree,
            BoardShape::Traversal => &self.traversal,
        };
        overrides.apply(Challenge::standard(shape))
    }

    /// Judges `board` as a `shape` board under these rules.
    #[must_use]
    pub fn validate(&self, shape: BoardShape, board: &BoardSlotMap) -> Verdict {
        self.challenge(shape).validate(board)
    }
}

/// Judges `board` under `challenge`; see [`Challenge::validate`].
#[must_use]
pub fn validate_board(challenge: &Challenge, board: &BoardSlotMap) -> Verdict {
    challenge.validate(board)
}
