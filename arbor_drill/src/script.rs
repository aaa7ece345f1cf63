// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill questions and the order they are asked in.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{DrillError, SearchTree};

/// What a drill step asks the player to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Add a key.
    Insert,
    /// Find a key.
    Search,
    /// Remove a key.
    Delete,
    /// Read the keys back in order.
    InOrder,
}

impl Operation {
    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Search => "search",
            Self::Delete => "delete",
            Self::InOrder => "inorder",
        }
    }

    /// Whether answers to this operation carry a single key.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::InOrder)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One question.
///
/// `value` is the key the step is about; it is `None` for the in-order step,
/// whose expected answer comes from the tree at that point. When read from
/// configuration, insert, search, and delete steps must carry a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StepEntry")]
pub struct Step {
    /// Requested operation.
    pub operation: Operation,
    /// Key involved, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl Step {
    /// Ask for `value` to be inserted.
    #[must_use]
    pub const fn insert(value: i64) -> Self {
        Self {
            operation: Operation::Insert,
            value: Some(value),
        }
    }

    /// Ask for `value` to be found.
    #[must_use]
    pub const fn search(value: i64) -> Self {
        Self {
            operation: Operation::Search,
            value: Some(value),
        }
    }

    /// Ask for `value` to be removed.
    #[must_use]
    pub const fn delete(value: i64) -> Self {
        Self {
            operation: Operation::Delete,
            value: Some(value),
        }
    }

    /// Ask for the in-order traversal of the current tree.
    #[must_use]
    pub const fn in_order() -> Self {
        Self {
            operation: Operation::InOrder,
            value: None,
        }
    }

    /// Applies the step to `tree` as if answered correctly.
    pub fn apply(&self, tree: &mut SearchTree) {
        match (self.operation, self.value) {
            (Operation::Insert, Some(value)) => {
                tree.insert(value);
            }
            (Operation::Delete, Some(value)) => {
                tree.remove(value);
            }
            _ => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StepEntry {
    operation: Operation,
    #[serde(default)]
    value: Option<i64>,
}

impl TryFrom<StepEntry> for Step {
    type Error = DrillError;

    fn try_from(entry: StepEntry) -> Result<Self, Self::Error> {
        match (entry.operation, entry.value) {
            (Operation::InOrder, _) => Ok(Self::in_order()),
            (operation, Some(value)) => Ok(Self {
                operation,
                value: Some(value),
            }),
            (operation, None) => Err(DrillError::MissingValue { operation }),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.operation, self.value) {
            (Operation::Insert, Some(v)) => write!(f, "Insert node {v}"),
            (Operation::Search, Some(v)) => write!(f, "Search for node {v}"),
            (Operation::Delete, Some(v)) => write!(f, "Delete node {v}"),
            (Operation::InOrder, _) => f.write_str("Verify the in-order traversal"),
            (op, None) => write!(f, "{op} (no key given)"),
        }
    }
}

const STANDARD: [Step; 10] = [
    Step::insert(50),
    Step::insert(30),
    Step::insert(70),
    Step::insert(20),
    Step::insert(40),
    Step::insert(60),
    Step::insert(80),
    Step::search(40),
    Step::delete(20),
    Step::in_order(),
];

/// An ordered list of steps.
///
/// Serialized as a plain array of steps, so custom drills can be loaded from
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Wraps `steps`.
    #[must_use]
    pub const fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Build the tree 50, 30, 70, 20, 40, 60, 80; search 40; delete 20; then
    /// read the tree back in order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD.to_vec())
    }

    /// All steps, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there is nothing to ask.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::standard()
    }
}
