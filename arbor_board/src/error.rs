// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for board input that cannot be represented at all.

use alloc::string::String;

/// Input that does not describe a board.
///
/// These are distinct from validation failures: a board that breaks a tree
/// invariant is still a board, while slot `0` or a color named `"green"` is not.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Slots are 1-indexed; slot `0` does not exist.
    #[error("slot 0 does not exist; slots are numbered from 1")]
    ZeroSlot,
    /// A color name other than `red` or `black`.
    #[error("unknown token color `{0}`; expected `red` or `black`")]
    UnknownColor(String),
}

#[cfg(test)]
mod tests {
    use super::BoardError;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            BoardError::ZeroSlot.to_string(),
            "slot 0 does not exist; slots are numbered from 1"
        );
        assert_eq!(
            BoardError::UnknownColor("green".into()).to_string(),
            "unknown token color `green`; expected `red` or `black`"
        );
    }
}
