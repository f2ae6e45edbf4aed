//! Best-match search and similarity scoring.

pub mod engine;
pub mod scoring;
