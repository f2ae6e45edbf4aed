use serde::Serialize;

/// A single reference record: an ordered list of string fields.
///
/// Field 0 is the match key; every field (the key included) is payload that
/// gets echoed on output. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    /// All fields in file order; never empty.
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        debug_assert!(!fields.is_empty(), "a record always has at least one field");
        Self { fields }
    }

    /// The match key (field 0).
    #[must_use]
    pub fn key(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }
}

/// An insertion-ordered reference set.
///
/// Order is semantically significant: on equal scores the earliest record
/// wins, so the sequence must be preserved exactly as read. Duplicate keys
/// are legal.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
