use crate::core::record::{Record, RecordSet};
use crate::matching::scoring::{similarity, EXACT_SCORE};

/// Default minimum score below which a match is reported as low-confidence.
pub const DEFAULT_MIN_SCORE: u32 = 80;

/// Configuration for the matcher.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum acceptable score; results below it are flagged as
    /// low-confidence but still returned.
    pub min_score: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Result of matching one query against the reference set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The best-scoring record, or `None` when the reference set was empty.
    pub record: Option<&'a Record>,

    /// Similarity score of the best record's key against the query,
    /// in `[0, 100]`. 0 when no record matched.
    pub score: u32,
}

impl MatchResult<'_> {
    /// True when the score falls below the given minimum.
    #[must_use]
    pub fn is_low_confidence(&self, min_score: u32) -> bool {
        self.score < min_score
    }
}

/// The best-match searcher.
///
/// Scans the reference set linearly for each query, which is the right
/// trade-off for the small reference sets this tool targets. The set is
/// borrowed read-only, so a `Matcher` can be shared freely.
pub struct Matcher<'a> {
    records: &'a RecordSet,
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with the default configuration.
    pub fn new(records: &'a RecordSet) -> Self {
        Self {
            records,
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with a custom configuration.
    pub fn with_config(records: &'a RecordSet, config: MatcherConfig) -> Self {
        Self { records, config }
    }

    #[must_use]
    pub fn min_score(&self) -> u32 {
        self.config.min_score
    }

    /// Find the single best-scoring record for `query`.
    ///
    /// Candidates are scanned in insertion order and the running best is
    /// replaced only on strict improvement, so the earliest of equal-scoring
    /// records wins. The scan stops at the first exact (score 100) match.
    /// An empty reference set, or one where every key scores 0, yields
    /// `(None, 0)`.
    #[must_use]
    pub fn find_best(&self, query: &str) -> MatchResult<'a> {
        let mut best = MatchResult {
            record: None,
            score: 0,
        };

        for record in self.records.records() {
            let score = similarity(query, record.key());

            if score > best.score {
                best = MatchResult {
                    record: Some(record),
                    score,
                };
            }

            if score == EXACT_SCORE {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_set(rows: &[&[&str]]) -> RecordSet {
        RecordSet::new(
            rows.iter()
                .map(|fields| Record::new(fields.iter().map(ToString::to_string).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_find_best_picks_highest_score() {
        let set = record_set(&[&["John_Smith", "100"], &["Jane_Doe", "200"]]);
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("Jon_Smith");
        assert_eq!(result.record.unwrap().key(), "John_Smith");
        assert_eq!(result.score, 89);
    }

    #[test]
    fn test_tie_break_first_seen_wins() {
        // Identical keys, distinct payloads: the earlier record must win.
        let set = record_set(&[&["abc", "X"], &["abc", "Y"]]);
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("abd");
        assert_eq!(result.record.unwrap().fields[1], "X");
    }

    #[test]
    fn test_early_exit_on_first_exact_match() {
        let set = record_set(&[&["xyz", "A"], &["query", "B"], &["query", "C"]]);
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("query");
        assert_eq!(result.score, 100);
        assert_eq!(result.record.unwrap().fields[1], "B");
    }

    #[test]
    fn test_empty_reference_set() {
        let set = RecordSet::default();
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("anything");
        assert!(result.record.is_none());
        assert_eq!(result.score, 0);
        assert!(result.is_low_confidence(DEFAULT_MIN_SCORE));
    }

    #[test]
    fn test_all_zero_scores_keep_the_absent_sentinel() {
        // A score of 0 is no improvement over the initial best, so nothing
        // is ever selected.
        let set = record_set(&[&["zzzz", "1"], &["yyyy", "2"]]);
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("aaaa");
        assert!(result.record.is_none());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_running_best_is_monotonic() {
        let set = record_set(&[&["a", "1"], &["ab", "2"], &["abc", "3"], &["ab", "4"]]);
        let matcher = Matcher::new(&set);

        // Best of incrementally longer prefixes of the query; each prefix of
        // the set can only raise the winning score, never lower it.
        let mut last = 0;
        for end in 1..=4 {
            let prefix = RecordSet::new(set.records()[..end].to_vec());
            let score = Matcher::new(&prefix).find_best("abc").score;
            assert!(score >= last, "running best regressed: {score} < {last}");
            last = score;
        }
    }

    #[test]
    fn test_deterministic() {
        let set = record_set(&[&["John_Smith", "100"], &["Jane_Doe", "200"]]);
        let matcher = Matcher::new(&set);

        let first = matcher.find_best("Jon_Smith");
        let second = matcher.find_best("Jon_Smith");
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_low_confidence_threshold() {
        let set = record_set(&[&["John_Smith", "100"], &["Jane_Doe", "200"]]);
        let matcher = Matcher::new(&set);

        let result = matcher.find_best("Jon_Smith");
        assert!(!result.is_low_confidence(80));
        assert!(result.is_low_confidence(95));
    }
}
