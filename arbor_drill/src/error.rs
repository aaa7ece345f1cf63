// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Operation;

/// Requests a drill cannot honor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrillError {
    /// A node would land past the last slot of the board.
    #[error("node {value} sits at depth {depth}, past the last slot of a {slot_count}-slot board")]
    TooDeep {
        /// The key that does not fit.
        value: i64,
        /// Its depth in the tree; the root is at depth 0.
        depth: u32,
        /// Capacity of the target board.
        slot_count: u32,
    },
    /// An insert, search, or delete step that names no key.
    #[error("a `{operation}` step needs a key")]
    MissingValue {
        /// The step's operation.
        operation: Operation,
    },
    /// A resume point past the end of the script.
    #[error("cannot resume at step {index}; the script has {len} steps")]
    StepOutOfRange {
        /// Requested cursor.
        index: usize,
        /// Steps in the script.
        len: usize,
    },
}
