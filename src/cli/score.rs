//! Score command - compare two strings directly using the scoring algorithm.
//!
//! Useful for checking what the matcher would make of a particular pair
//! without setting up reference and query files.

use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::scoring::{levenshtein, similarity};

#[derive(Args)]
pub struct ScoreArgs {
    /// First string
    #[arg(required = true)]
    pub a: String,

    /// Second string
    #[arg(required = true)]
    pub b: String,
}

/// Execute the score subcommand.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let score = similarity(&args.a, &args.b);

    if verbose {
        eprintln!(
            "Edit distance: {} over combined length {}",
            levenshtein(&args.a, &args.b),
            args.a.chars().count() + args.b.chars().count(),
        );
    }

    match format {
        OutputFormat::Text => println!("{score}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": args.a,
                "b": args.b,
                "score": score,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("a\tb\tscore");
            println!("{}\t{}\t{score}", args.a, args.b);
        }
    }

    Ok(())
}
