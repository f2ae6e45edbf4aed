//! # fuzzy-join
//!
//! A library for reconciling two datasets whose join keys are spelled
//! inconsistently (name variants, typos) when no exact key exists.
//!
//! Each query string is scored against the key of every record in a
//! reference set using a normalized edit-distance similarity (an integer in
//! `[0, 100]`, 100 = identical), and the best-scoring record is returned.
//! Ties go to the earliest record, and the scan short-circuits on the first
//! exact match. Results below a configurable minimum score are flagged as
//! low-confidence without being suppressed.
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_join::{Matcher, Record, RecordSet};
//!
//! let records = RecordSet::new(vec![
//!     Record::new(vec!["John_Smith".into(), "100".into()]),
//!     Record::new(vec!["Jane_Doe".into(), "200".into()]),
//! ]);
//!
//! let matcher = Matcher::new(&records);
//! let result = matcher.find_best("Jon_Smith");
//!
//! assert_eq!(result.record.unwrap().key(), "John_Smith");
//! assert_eq!(result.score, 89);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record and record-set data types
//! - [`matching`]: Similarity scoring and best-match search
//! - [`parsing`]: Parsers for delimited reference and query files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::record::{Record, RecordSet};
pub use crate::matching::engine::{MatchResult, Matcher, MatcherConfig, DEFAULT_MIN_SCORE};
pub use crate::matching::scoring::{levenshtein, similarity, EXACT_SCORE};
pub use crate::parsing::ParseError;
