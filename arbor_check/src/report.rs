// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat verdict handed back across the session boundary.

use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::{BoardShape, ErrorKind, Verdict};

/// Wire form of a [`Verdict`].
///
/// Field names are camel case (`errorKind`, `offendingValue`) to match what
/// the session layer already speaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Whether the board passed.
    pub valid: bool,
    /// Failure category; `null` when valid.
    pub error_kind: Option<ErrorKind>,
    /// Text to show the player.
    pub message: String,
    /// The token to highlight, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offending_value: Option<i64>,
}

impl Report {
    /// Flattens `verdict` for a `shape` board.
    #[must_use]
    pub fn new(shape: BoardShape, verdict: &Verdict) -> Self {
        let message = if verdict.is_valid() {
            success_message(shape)
        } else {
            verdict.message()
        };
        Self {
            valid: verdict.is_valid(),
            error_kind: verdict.kind(),
            message,
            offending_value: verdict.offending_value(),
        }
    }
}

fn success_message(shape: BoardShape) -> String {
    match shape {
        BoardShape::Traversal => String::from("Correct in-order traversal."),
        shape => format!("Valid {}.", shape.structure()),
    }
}
