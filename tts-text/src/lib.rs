//! Text normalization and chunking for TTS pipelines
//!
//! Turns prose into an ordered sequence of fragments short enough to feed a
//! text-to-speech engine one at a time:
//! - Normalizer: collapses stray line breaks and rewrites dash asides
//! - Chunker: cascading segmentation (sentence, minor punctuation,
//!   subordinate clause, hard cut) under a character limit

pub mod chunker;
pub mod error;
pub mod normalizer;
pub mod rules;

pub use chunker::{DEFAULT_CHUNK_LIMIT, chunk, chunk_with};
pub use error::{ChunkError, Result};
pub use normalizer::{normalize, normalize_with};
pub use rules::RuleSet;

use serde::Serialize;

/// Which fallback tier produced a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Whole sentence fit under the limit
    Sentence,
    /// Comma/semicolon split, greedily regrouped
    MinorPunct,
    /// Split before a subordinating conjunction
    ClauseSubordinator,
    /// Length-only cut with no linguistic boundary
    HardCut,
}

impl SplitRule {
    /// Tag used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            SplitRule::Sentence => "sentence",
            SplitRule::MinorPunct => "minor_punct",
            SplitRule::ClauseSubordinator => "clause_subordinator",
            SplitRule::HardCut => "hard_cut",
        }
    }
}

/// A fragment of text ready for TTS synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkRecord {
    /// The text content
    #[serde(rename = "chunk")]
    pub text: String,
    /// The fallback tier that produced this fragment
    pub rule: SplitRule,
    /// Length of the text in characters
    pub length: usize,
}

impl ChunkRecord {
    /// Create a new chunk record; length is derived from the text.
    pub fn new(text: String, rule: SplitRule) -> Self {
        let length = text.chars().count();
        Self { text, rule, length }
    }
}
