// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grading answers as a drill progresses.

use alloc::vec::Vec;
use core::fmt;

use arbor_check::{Violation, compare_sequence};
use smallvec::SmallVec;

use crate::{DrillError, Operation, Script, SearchTree, Step};

/// What the player did for the current step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Inserted a key.
    Insert(i64),
    /// Searched for a key.
    Search(i64),
    /// Deleted a key.
    Delete(i64),
    /// Read out the keys in order.
    InOrder(Vec<i64>),
}

impl Answer {
    /// The operation this answer performs.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Insert(_) => Operation::Insert,
            Self::Search(_) => Operation::Search,
            Self::Delete(_) => Operation::Delete,
            Self::InOrder(_) => Operation::InOrder,
        }
    }
}

/// Why a correctly-typed answer was still wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mistake {
    /// The right operation on the wrong key.
    WrongValue {
        /// Operation performed.
        operation: Operation,
        /// Key the player used.
        given: i64,
    },
    /// The in-order readout differs from the tree.
    WrongSequence(Violation),
}

impl fmt::Display for Mistake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongValue { operation, .. } => match operation {
                Operation::Insert => f.write_str("Wrong value inserted."),
                Operation::Search => f.write_str("Wrong value searched."),
                Operation::Delete => f.write_str("Wrong value deleted."),
                Operation::InOrder => f.write_str("Wrong value."),
            },
            Self::WrongSequence(violation) => fmt::Display::fmt(violation, f),
        }
    }
}

/// Result of [`DrillSession::answer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted; the session moved on to the next step.
    Correct,
    /// Right operation, wrong content. Counts as an attempt.
    Incorrect(Mistake),
    /// The answer performs a different operation than asked. Not counted.
    WrongOperation {
        /// What the step asks for.
        expected: Operation,
        /// What the player did.
        given: Operation,
    },
    /// Every step has already been answered.
    Finished,
}

impl Outcome {
    /// Whether the answer was accepted.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct."),
            Self::Incorrect(mistake) => write!(f, "{mistake} Try again."),
            Self::WrongOperation { expected, .. } => {
                write!(f, "Wrong operation! The question asks for {expected}.")
            }
            Self::Finished => f.write_str("The drill is complete."),
        }
    }
}

/// A player working through a [`Script`].
///
/// The session keeps the tree as it should look after every correctly
/// answered step, so later questions (the in-order readout in particular) are
/// graded against the tree the player actually built.
#[derive(Clone, Debug)]
pub struct DrillSession {
    script: Script,
    cursor: usize,
    tree: SearchTree,
    correct: u32,
    attempted: u32,
}

impl DrillSession {
    /// Starts `script` from the first step with an empty tree.
    #[must_use]
    pub const fn new(script: Script) -> Self {
        Self {
            script,
            cursor: 0,
            tree: SearchTree::new(),
            correct: 0,
            attempted: 0,
        }
    }

    /// Picks `script` up at step `index`.
    ///
    /// Only the step cursor is stored between visits, so the tree is rebuilt
    /// by replaying the first `index` steps as if each had been answered
    /// correctly. Counters start from zero.
    ///
    /// # Errors
    ///
    /// [`DrillError::StepOutOfRange`] if `index` is past the end of the script.
    /// Resuming exactly at the end is allowed and yields a finished session.
    pub fn resume_at(script: Script, index: usize) -> Result<Self, DrillError> {
        let len = script.len();
        let replay = script
            .steps()
            .get(..index)
            .ok_or(DrillError::StepOutOfRange { index, len })?;
        let mut tree = SearchTree::new();
        for step in replay {
            step.apply(&mut tree);
        }
        Ok(Self {
            cursor: index,
            tree,
            ..Self::new(script)
        })
    }

    /// The step awaiting an answer, or `None` once finished.
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.script.get(self.cursor)
    }

    /// Index of the current step.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Whether every step has been answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len()
    }

    /// The tree as of the current step.
    #[must_use]
    pub const fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// The script being played.
    #[must_use]
    pub const fn script(&self) -> &Script {
        &self.script
    }

    /// Answers accepted so far.
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.correct
    }

    /// Answers graded so far, right or wrong.
    #[must_use]
    pub const fn attempted(&self) -> u32 {
        self.attempted
    }

    /// Grades `answer` against the current step.
    pub fn answer(&mut self, answer: Answer) -> Outcome {
        let index = self.cursor;
        let outcome = self.grade(&answer);
        tracing::debug!(
            step = index,
            operation = %answer.operation(),
            ?outcome,
            "drill answer"
        );
        outcome
    }

    fn grade(&mut self, answer: &Answer) -> Outcome {
        let Some(step) = self.current_step().copied() else {
            return Outcome::Finished;
        };
        if answer.operation() != step.operation {
            return Outcome::WrongOperation {
                expected: step.operation,
                given: answer.operation(),
            };
        }
        self.attempted += 1;
        let mistake = match answer {
            Answer::InOrder(sequence) => {
                let expected: SmallVec<[i64; 16]> = self.tree.in_order().collect();
                compare_sequence(sequence, &expected)
                    .into_result()
                    .err()
                    .map(Mistake::WrongSequence)
            }
            Answer::Insert(given) | Answer::Search(given) | Answer::Delete(given) => {
                (step.value != Some(*given)).then_some(Mistake::WrongValue {
                    operation: step.operation,
                    given: *given,
                })
            }
        };
        if let Some(mistake) = mistake {
            return Outcome::Incorrect(mistake);
        }
        step.apply(&mut self.tree);
        self.correct += 1;
        self.cursor += 1;
        Outcome::Correct
    }
}

impl Default for DrillSession {
    fn default() -> Self {
        Self::new(Script::standard())
    }
}
