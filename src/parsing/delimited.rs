use std::path::Path;

use thiserror::Error;

use crate::core::record::{Record, RecordSet};

/// Errors from reading reference or query files.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No records found in reference file")]
    EmptyReference,
}

/// Parse a delimited reference file into a `RecordSet`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::EmptyReference` if it contains no records.
pub fn parse_reference_file(path: &Path, delimiter: char) -> Result<RecordSet, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_reference_text(&content, delimiter)
}

/// Parse delimited reference text, one record per line.
///
/// Each non-empty, non-comment line is split on `delimiter`; field 0 is the
/// match key and every field is kept as payload. Line order is preserved
/// exactly, since it drives the first-seen-wins tie-break.
///
/// # Errors
///
/// Returns `ParseError::EmptyReference` if no records are found.
pub fn parse_reference_text(text: &str, delimiter: char) -> Result<RecordSet, ParseError> {
    let mut records = Vec::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<String> = line.split(delimiter).map(str::to_string).collect();
        records.push(Record::new(fields));
    }

    if records.is_empty() {
        return Err(ParseError::EmptyReference);
    }

    Ok(RecordSet::new(records))
}

/// Read query strings from text, one per line, trimmed of surrounding
/// whitespace. Blank lines are skipped.
#[must_use]
pub fn parse_query_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read query strings from a file, one per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn parse_query_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_query_text(&content))
}

/// Strip the final extension from a filename-like query.
/// E.g. `"foo.png"` -> `"foo"`, `"archive.tar.gz"` -> `"archive.tar"`.
/// A name with no dot, or a leading-dot name like `".bashrc"`, is unchanged.
#[must_use]
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_text() {
        let text = "John_Smith\t100\nJane_Doe\t200\n";
        let set = parse_reference_text(text, '\t').unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].key(), "John_Smith");
        assert_eq!(set.records()[0].fields, ["John_Smith", "100"]);
        assert_eq!(set.records()[1].key(), "Jane_Doe");
    }

    #[test]
    fn test_parse_reference_text_comma() {
        let text = "John_Smith,100\nJane_Doe,200\n";
        let set = parse_reference_text(text, ',').unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[1].fields, ["Jane_Doe", "200"]);
    }

    #[test]
    fn test_parse_reference_skips_blanks_and_comments() {
        let text = "# header comment\n\nJohn_Smith\t100\n\n# trailing\n";
        let set = parse_reference_text(text, '\t').unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_reference_keeps_duplicates_in_order() {
        let text = "abc\tX\nabc\tY\n";
        let set = parse_reference_text(text, '\t').unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].fields[1], "X");
        assert_eq!(set.records()[1].fields[1], "Y");
    }

    #[test]
    fn test_parse_reference_single_field_lines() {
        // A line with no delimiter is a one-field record whose key is the
        // whole line.
        let set = parse_reference_text("lonely\n", '\t').unwrap();
        assert_eq!(set.records()[0].fields, ["lonely"]);
    }

    #[test]
    fn test_parse_reference_empty_is_error() {
        let err = parse_reference_text("\n# only comments\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::EmptyReference));
    }

    #[test]
    fn test_parse_reference_crlf() {
        let set = parse_reference_text("John_Smith\t100\r\n", '\t').unwrap();
        assert_eq!(set.records()[0].fields, ["John_Smith", "100"]);
    }

    #[test]
    fn test_parse_query_text() {
        let queries = parse_query_text("Jon_Smith\n\n  Jane_Doe  \n");
        assert_eq!(queries, ["Jon_Smith", "Jane_Doe"]);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("foo.png"), "foo");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension(".bashrc"), ".bashrc");
        assert_eq!(strip_extension(""), "");
    }
}
