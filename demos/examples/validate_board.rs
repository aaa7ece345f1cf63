// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validate one tree puzzle board and print the verdict as JSON.
//!
//! The request names a shape and the board:
//!
//! ```json
//! { "shape": "rb", "board": { "1": { "value": 50, "color": "black" } } }
//! ```
//!
//! The report goes to stdout; logs go to stderr and follow `RUST_LOG`.
//!
//! Run:
//! - `cargo run -p arbor_demos --example validate_board -- demos/data/rb_red_red.json`
//! - `cargo run -p arbor_demos --example validate_board -- --config demos/data/challenges.toml demos/data/sparse_bst.json`

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arbor_board::BoardSlotMap;
use arbor_check::{BoardShape, ChallengeSet, Report};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "validate_board")]
#[command(about = "Check a tree puzzle board and print the verdict as JSON", long_about = None)]
struct Args {
    /// Request file; stdin when omitted
    input: Option<PathBuf>,

    /// TOML file with per-shape challenge rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate as this shape instead of the one in the request
    #[arg(short, long)]
    shape: Option<BoardShape>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Request {
    shape: BoardShape,
    board: BoardSlotMap,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rules = match &args.config {
        Some(path) => load_rules(path)?,
        None => ChallengeSet::default(),
    };

    let text = read_request(args.input.as_deref())?;
    let request: Request = serde_json::from_str(&text).context("malformed board request")?;
    let shape = args.shape.unwrap_or(request.shape);

    let verdict = rules.validate(shape, &request.board);
    tracing::info!(%shape, tokens = request.board.len(), valid = verdict.is_valid(), "validated");

    let report = Report::new(shape, &verdict);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn load_rules(path: &Path) -> Result<ChallengeSet> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading challenge rules from {}", path.display()))?;
    let rules: ChallengeSet = toml::from_str(&text)
        .with_context(|| format!("parsing challenge rules in {}", path.display()))?;
    tracing::debug!(?rules, "loaded challenge rules");
    Ok(rules)
}

fn read_request(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading board request from {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading board request from stdin")?;
            Ok(text)
        }
    }
}
