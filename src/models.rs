//! Data structures for the near-verbatim matching pipeline.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A run of `m` words starting at index `i` in the reference sequence that
/// equals, word for word, the run starting at index `j` in the generated
/// sequence.
///
/// For blocks produced by the matcher, `i_end == i + m` and
/// `j_end == j + m`. Merged blocks keep the span ends of the last
/// constituent block while `m` stays the sum of matched lengths, so the
/// span may be wider than `m` (gaps are not counted as matched).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub i: usize,
    pub j: usize,
    pub m: usize,
    pub i_end: usize,
    pub j_end: usize,
}

impl Block {
    /// Create a gap-free verbatim block of `m` words.
    pub fn verbatim(i: usize, j: usize, m: usize) -> Self {
        Block {
            i,
            j,
            m,
            i_end: i + m,
            j_end: j + m,
        }
    }

    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.i, self.j, self.m)
    }
}

// Blocks serialize as plain (i, j, m) triples.
impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_tuple().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (i, j, m) = <(usize, usize, usize)>::deserialize(deserializer)?;
        Ok(Block::verbatim(i, j, m))
    }
}

/// Aggregate near-verbatim metrics for one reference/generated text pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearVerbatimMetrics {
    pub blocks: Vec<Block>,
    pub matched: usize,
    pub nv_recall: f64,
    pub missing: usize,
    pub additional: usize,
    pub book_len_words: usize,
    pub gen_len_words: usize,
}

/// Invalid parameter configuration.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("min_len_{stage} must be at least 1 (got {value})")]
    MinLenTooSmall { stage: u8, value: usize },
    #[error("max_response_tokens must be at least 1")]
    ZeroResponseTokens,
    #[error("tokens_per_word must be positive (got {0})")]
    NonPositiveTokensPerWord(f64),
}

/// Thresholds for the two merge-and-filter consolidation passes.
///
/// Pass 1 collapses small local perturbations (single inserted or
/// substituted tokens) with tight thresholds; pass 2 re-consolidates the
/// cleaned block set across slightly larger edits and drops anything still
/// short enough to be coincidental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeParams {
    /// Maximum index advance in either sequence for two blocks to merge.
    pub tau_gap_1: usize,
    /// Maximum skew between the two sequences' gaps.
    pub tau_align_1: usize,
    /// Minimum matched length kept after pass 1.
    pub min_len_1: usize,
    pub tau_gap_2: usize,
    pub tau_align_2: usize,
    /// Minimum matched length kept after pass 2.
    pub min_len_2: usize,
    /// Lowercase both texts before tokenizing.
    pub lower: bool,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            tau_gap_1: 2,
            tau_align_1: 1,
            min_len_1: 20,
            tau_gap_2: 10,
            tau_align_2: 3,
            min_len_2: 100,
            lower: false,
        }
    }
}

impl MergeParams {
    /// Fail fast on threshold combinations that would produce nonsensical
    /// blocks.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.min_len_1 < 1 {
            return Err(ParamsError::MinLenTooSmall {
                stage: 1,
                value: self.min_len_1,
            });
        }
        if self.min_len_2 < 1 {
            return Err(ParamsError::MinLenTooSmall {
                stage: 2,
                value: self.min_len_2,
            });
        }
        Ok(())
    }
}

/// Parameters for the short-text similarity score.
///
/// The response is truncated to a word cap derived from a token budget and
/// an average tokens-per-word constant before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreParams {
    pub max_response_tokens: usize,
    pub tokens_per_word: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            max_response_tokens: 1000,
            tokens_per_word: 1.35,
        }
    }
}

impl ScoreParams {
    /// Number of response words kept for scoring.
    pub fn response_word_cap(&self) -> usize {
        (self.max_response_tokens as f64 / self.tokens_per_word) as usize
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_response_tokens < 1 {
            return Err(ParamsError::ZeroResponseTokens);
        }
        if !(self.tokens_per_word > 0.0) {
            return Err(ParamsError::NonPositiveTokensPerWord(self.tokens_per_word));
        }
        Ok(())
    }
}
