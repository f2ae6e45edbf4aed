//! Edit-distance-based similarity scoring.
//!
//! The score between two strings is the Levenshtein distance normalized to
//! an integer in `[0, 100]`, where 100 means the strings are identical and
//! 0 means they share essentially nothing. Comparison is over Unicode
//! scalar values with no further normalization.

/// Similarity score that means an exact match.
pub const EXACT_SCORE: u32 = 100;

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions,
/// or substitutions required to transform `a` into `b`. Characters are
/// Unicode scalar values.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full matrix.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity score in `[0, 100]`.
///
/// Defined as `round(100 * (|a| + |b| - 2*d) / (|a| + |b|))` where `d` is
/// the Levenshtein distance, clamped to the valid range. Two empty strings
/// score 100. Symmetric in its arguments and total over all string pairs.
///
/// Rounding is half-up, done in integer arithmetic so edge-case scores are
/// stable across platforms.
#[must_use]
pub fn similarity(a: &str, b: &str) -> u32 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let total = len_a + len_b;

    if total == 0 {
        return EXACT_SCORE;
    }

    let distance = levenshtein(a, b);

    // The raw numerator goes negative when the distance exceeds half the
    // combined length (e.g. empty vs. non-empty); clamp those pairs to 0.
    let Some(matched) = total.checked_sub(2 * distance) else {
        return 0;
    };

    // round(100 * matched / total), half-up.
    let score = (200 * matched + total) / (2 * total);
    u32::try_from(score).unwrap_or(EXACT_SCORE).min(EXACT_SCORE)
}
