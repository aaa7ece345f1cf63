// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Play the standard BST drill with a canned list of answers.
//!
//! Some answers are deliberately off: a wrong operation, a wrong key, and a
//! stale traversal that still lists a deleted node. After the drill the final
//! tree is laid out on a seven-slot board and checked as a BST.
//!
//! Run:
//! - `cargo run -p arbor_demos --example bst_drill`
//! - `RUST_LOG=arbor_drill=debug cargo run -p arbor_demos --example bst_drill`

use anyhow::Result;
use arbor_board::decode;
use arbor_check::{BoardShape, Report, validate_bst};
use arbor_drill::{Answer, DrillSession, Outcome};
use tracing_subscriber::EnvFilter;

fn answers() -> Vec<Answer> {
    vec![
        Answer::Insert(50),
        Answer::Insert(30),
        Answer::Search(70),
        Answer::Insert(70),
        Answer::Insert(20),
        Answer::Insert(40),
        Answer::Insert(66),
        Answer::Insert(60),
        Answer::Insert(80),
        Answer::Search(40),
        Answer::Delete(20),
        Answer::InOrder(vec![20, 30, 40, 50, 60, 70, 80]),
        Answer::InOrder(vec![30, 40, 50, 60, 70, 80]),
        Answer::Insert(90),
    ]
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = DrillSession::default();
    for answer in answers() {
        let prompt = session
            .current_step()
            .map_or_else(|| String::from("(no question)"), ToString::to_string);
        let outcome = session.answer(answer);
        println!("{prompt:<32} {outcome}");
        if outcome == Outcome::Finished {
            break;
        }
    }
    println!(
        "score: {} correct out of {} attempts",
        session.correct(),
        session.attempted()
    );

    let board = session.tree().to_board(7)?;
    let root = decode(&board, 7);
    let report = Report::new(BoardShape::Bst, &validate_bst(root.as_ref()));
    println!("final board: {}", serde_json::to_string(&board)?);
    println!("as a BST:    {}", serde_json::to_string(&report)?);
    Ok(())
}
