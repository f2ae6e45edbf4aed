//! Reconcile command - match a query stream against a reference file.

use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::matching::engine::{MatchResult, Matcher, MatcherConfig, DEFAULT_MIN_SCORE};
use crate::parsing::delimited;

#[derive(Args)]
pub struct ReconcileArgs {
    /// Reference file: one record per line, fields split on the delimiter,
    /// field 0 is the match key
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Query file: one query string per line. Use '-' for stdin
    #[arg(required = true)]
    pub queries: PathBuf,

    /// Field delimiter for reference input and text output
    #[arg(short, long, default_value_t = '\t')]
    pub delimiter: char,

    /// Minimum acceptable score (0-100); matches below it are reported as
    /// low-confidence on stderr but still emitted
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: u32,

    /// Strip the final filename extension from each query before matching
    /// (the output still echoes the original query)
    #[arg(long)]
    pub strip_extension: bool,
}

/// One output row: a query with its best match.
struct Row<'a> {
    query: String,
    result: MatchResult<'a>,
}

/// Execute the reconcile subcommand.
///
/// # Errors
///
/// Returns an error if the reference or query input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReconcileArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = delimited::parse_reference_file(&args.reference, args.delimiter)?;

    if verbose {
        eprintln!(
            "Loaded {} reference records from {}",
            records.len(),
            args.reference.display()
        );
    }

    let queries = read_queries(&args.queries)?;

    if verbose {
        eprintln!("Read {} queries", queries.len());
    }

    let config = MatcherConfig {
        min_score: args.min_score,
    };
    let matcher = Matcher::with_config(&records, config);

    let mut rows = Vec::with_capacity(queries.len());
    for query in queries {
        let needle = if args.strip_extension {
            delimited::strip_extension(&query)
        } else {
            query.as_str()
        };

        let result = matcher.find_best(needle);

        if result.is_low_confidence(matcher.min_score()) {
            warn!(
                query = %query,
                matched = result.record.map_or("<none>", |r| r.key()),
                score = result.score,
                min_score = matcher.min_score(),
                "low-confidence match"
            );
        }

        rows.push(Row { query, result });
    }

    match format {
        OutputFormat::Text => print_text_rows(&rows, args.delimiter),
        OutputFormat::Json => print_json_rows(&rows, args.min_score)?,
        OutputFormat::Tsv => print_tsv_rows(&rows),
    }

    Ok(())
}

fn read_queries(path: &PathBuf) -> anyhow::Result<Vec<String>> {
    use std::io::Read;

    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(delimited::parse_query_text(&buffer));
    }

    Ok(delimited::parse_query_file(path)?)
}

/// Text output: `query <delim> record fields... <delim> score`, one line per
/// query. An unmatched query has no record fields between query and score.
fn print_text_rows(rows: &[Row<'_>], delimiter: char) {
    let sep = delimiter.to_string();
    for row in rows {
        let mut fields = vec![row.query.clone()];
        if let Some(record) = row.result.record {
            fields.extend(record.fields.iter().cloned());
        }
        fields.push(row.result.score.to_string());
        println!("{}", fields.join(&sep));
    }
}

fn print_json_rows(rows: &[Row<'_>], min_score: u32) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "query": row.query,
                "record": row.result.record,
                "score": row.result.score,
                "low_confidence": row.result.is_low_confidence(min_score),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_rows(rows: &[Row<'_>]) {
    println!("query\tmatched_key\tscore\trecord");
    for row in rows {
        let (key, fields) = match row.result.record {
            Some(record) => (record.key(), record.fields.join(",")),
            None => ("", String::new()),
        };
        println!("{}\t{}\t{}\t{}", row.query, key, row.result.score, fields);
    }
}
