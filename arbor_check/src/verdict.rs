// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdicts: what a checker says about a board.

use alloc::string::{String, ToString};
use core::fmt;

use arbor_board::{LeafPosition, SlotIndex};
use serde::{Deserialize, Serialize};

/// Category of a failed validation.
///
/// On the wire these are upper snake case (`"BST_ORDER"`, `"RB_RED_RED"`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No root present.
    Empty,
    /// Fewer tokens than the challenge requires, or tokens not connected to the root.
    Incomplete,
    /// An ancestor/descendant ordering violation.
    BstOrder,
    /// A balance factor outside `[-1, 1]`.
    AvlBalance,
    /// A red root.
    RbRootColor,
    /// A red node with a red child.
    RbRedRed,
    /// Unequal black heights below a node.
    RbBlackHeight,
    /// A B-tree key outside the range its position implies.
    BtreeOrder,
    /// A traversal sequence differing from the expected one.
    TraversalMismatch,
}

impl ErrorKind {
    /// The wire name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Incomplete => "INCOMPLETE",
            Self::BstOrder => "BST_ORDER",
            Self::AvlBalance => "AVL_BALANCE",
            Self::RbRootColor => "RB_ROOT_COLOR",
            Self::RbRedRed => "RB_RED_RED",
            Self::RbBlackHeight => "RB_BLACK_HEIGHT",
            Self::BtreeOrder => "BTREE_ORDER",
            Self::TraversalMismatch => "TRAVERSAL_MISMATCH",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first broken rule found on a board, with enough detail to point at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Nothing in the root slot.
    Empty,
    /// The challenge needs a full board.
    Incomplete {
        /// Tokens placed.
        populated: usize,
        /// Tokens required.
        required: usize,
    },
    /// A token whose parent slot is empty.
    Detached {
        /// Slot holding the token.
        slot: SlotIndex,
        /// The token's key.
        value: i64,
    },
    /// `value` lies outside the open range its ancestors allow.
    BstOrder {
        /// The misplaced key.
        value: i64,
        /// Exclusive lower bound, `None` for no bound.
        lower: Option<i64>,
        /// Exclusive upper bound, `None` for no bound.
        upper: Option<i64>,
    },
    /// Subtree heights under `value` differ by more than one.
    AvlBalance {
        /// Key of the unbalanced node.
        value: i64,
        /// Height of the left subtree.
        left_height: u32,
        /// Height of the right subtree.
        right_height: u32,
    },
    /// The root is red.
    RbRootColor {
        /// Key of the root.
        value: i64,
    },
    /// A red node with a red child.
    RbRedRed {
        /// Key of the red parent.
        parent: i64,
        /// Key of its red child.
        child: i64,
    },
    /// Paths below `value` pass through different numbers of black nodes.
    RbBlackHeight {
        /// Key of the node whose subtrees disagree.
        value: i64,
        /// Black height of the left subtree, counting the nil leaf.
        left: u32,
        /// Black height of the right subtree, counting the nil leaf.
        right: u32,
    },
    /// The two root keys of a B-tree are not ascending.
    BTreeRootOrder {
        /// First root key.
        first: i64,
        /// Second root key.
        second: i64,
    },
    /// A B-tree leaf key outside the range implied by its position.
    BTreeOrder {
        /// The misplaced key.
        key: i64,
        /// Which leaf it sits in.
        position: LeafPosition,
        /// Exclusive lower bound, `None` for no bound.
        lower: Option<i64>,
        /// Exclusive upper bound, `None` for no bound.
        upper: Option<i64>,
    },
    /// A middle leaf under a root with a single key.
    BTreeFanout {
        /// Key in the middle leaf.
        key: i64,
    },
    /// The sequence is wrong at `position` (1-based).
    TraversalMismatch {
        /// First wrong position, counting from 1.
        position: usize,
    },
}

impl Violation {
    /// The category this violation belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::Empty,
            Self::Incomplete { .. } | Self::Detached { .. } => ErrorKind::Incomplete,
            Self::BstOrder { .. } => ErrorKind::BstOrder,
            Self::AvlBalance { .. } => ErrorKind::AvlBalance,
            Self::RbRootColor { .. } => ErrorKind::RbRootColor,
            Self::RbRedRed { .. } => ErrorKind::RbRedRed,
            Self::RbBlackHeight { .. } => ErrorKind::RbBlackHeight,
            Self::BTreeRootOrder { .. } | Self::BTreeOrder { .. } | Self::BTreeFanout { .. } => {
                ErrorKind::BtreeOrder
            }
            Self::TraversalMismatch { .. } => ErrorKind::TraversalMismatch,
        }
    }

    /// The token the player should look at, when there is one.
    ///
    /// Traversal mismatches only ever name a position.
    #[must_use]
    pub const fn offending_value(&self) -> Option<i64> {
        match *self {
            Self::Empty | Self::Incomplete { .. } | Self::TraversalMismatch { .. } => None,
            Self::Detached { value, .. }
            | Self::BstOrder { value, .. }
            | Self::AvlBalance { value, .. }
            | Self::RbRootColor { value }
            | Self::RbBlackHeight { value, .. } => Some(value),
            Self::RbRedRed { child, .. } => Some(child),
            Self::BTreeRootOrder { second, .. } => Some(second),
            Self::BTreeOrder { key, .. } | Self::BTreeFanout { key } => Some(key),
        }
    }
}

struct Lower(Option<i64>);

impl fmt::Display for Lower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("-∞"),
        }
    }
}

struct Upper(Option<i64>);

impl fmt::Display for Upper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("∞"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("The board is empty."),
            Self::Incomplete {
                populated,
                required,
            } => write!(
                f,
                "Incomplete board: {populated} of {required} slots filled. Use all tokens."
            ),
            Self::Detached { slot, value } => write!(
                f,
                "Token {value} in slot {slot} is not connected to the root."
            ),
            Self::BstOrder {
                value,
                lower,
                upper,
            } => write!(
                f,
                "Violation: node {value} must be between {} and {}.",
                Lower(lower),
                Upper(upper)
            ),
            Self::AvlBalance {
                value,
                left_height,
                right_height,
            } => write!(
                f,
                "Node {value} is unbalanced: left height {left_height}, right height {right_height} (balance factor {}).",
                i64::from(left_height) - i64::from(right_height)
            ),
            Self::RbRootColor { value } => write!(f, "Root {value} must be black."),
            Self::RbRedRed { parent, child } => {
                write!(f, "Red node {parent} has red child {child}.")
            }
            Self::RbBlackHeight { value, left, right } => write!(
                f,
                "Black height mismatch below node {value}: left {left}, right {right}."
            ),
            Self::BTreeRootOrder { first, second } => write!(
                f,
                "Root keys must be ascending, but {first} comes before {second}."
            ),
            Self::BTreeOrder {
                key,
                position,
                lower,
                upper,
            } => write!(
                f,
                "Key {key} in the {position} leaf must be between {} and {}.",
                Lower(lower),
                Upper(upper)
            ),
            Self::BTreeFanout { key } => write!(
                f,
                "Key {key} in the middle leaf needs a second root key."
            ),
            Self::TraversalMismatch { position } => write!(f, "Position {position} is wrong."),
        }
    }
}

impl core::error::Error for Violation {}

/// Outcome of one validation call.
///
/// Either valid, or carrying the first [`Violation`] found. Verdicts are
/// built once and never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    violation: Option<Violation>,
}

impl Verdict {
    /// A passing verdict.
    pub const VALID: Self = Self { violation: None };

    /// A failing verdict.
    #[must_use]
    pub const fn invalid(violation: Violation) -> Self {
        Self {
            violation: Some(violation),
        }
    }

    /// Whether the board satisfied every checked invariant.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// The failure, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    /// Category of the failure, if any.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.violation.as_ref().map(Violation::kind)
    }

    /// Human-readable explanation of the failure; empty when valid.
    #[must_use]
    pub fn message(&self) -> String {
        self.violation
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// The token the player should look at, if any.
    #[must_use]
    pub fn offending_value(&self) -> Option<i64> {
        self.violation.as_ref().and_then(Violation::offending_value)
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<(), Violation> {
        match self.violation {
            None => Ok(()),
            Some(violation) => Err(violation),
        }
    }
}

impl From<Result<(), Violation>> for Verdict {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Self::VALID,
            Err(violation) => Self::invalid(violation),
        }
    }
}
