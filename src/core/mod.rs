//! Core data types for reference records.

pub mod record;
