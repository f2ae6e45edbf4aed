//! Command-line interface for fuzzy-join.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **reconcile**: Match every line of a query file against the
//!   best-scoring record of a delimited reference file
//! - **score**: Print the similarity score of two strings
//!
//! ## Usage
//!
//! ```text
//! # Match queries against a tab-delimited reference file
//! fuzzy-join reconcile names.tsv queries.txt
//!
//! # Pipe queries on stdin, comma-delimited reference
//! cat queries.txt | fuzzy-join reconcile names.csv - --delimiter ,
//!
//! # JSON output for scripting
//! fuzzy-join reconcile names.tsv queries.txt --format json
//!
//! # Check a single pair of strings
//! fuzzy-join score Jon_Smith John_Smith
//! ```

use clap::{Parser, Subcommand};

pub mod reconcile;
pub mod score;

#[derive(Parser)]
#[command(name = "fuzzy-join")]
#[command(version)]
#[command(about = "Reconcile two delimited datasets by fuzzy matching of their keys")]
#[command(
    long_about = "fuzzy-join pairs each line of a query stream with the best-matching record of a reference file when no exact join key exists.\n\nEach query is scored against every reference key with a normalized edit-distance similarity (0-100), the best-scoring record is echoed next to the query, and matches below a configurable minimum score are flagged on stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match each query line against the best-scoring reference record
    Reconcile(reconcile::ReconcileArgs),

    /// Score two strings against each other
    Score(score::ScoreArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
