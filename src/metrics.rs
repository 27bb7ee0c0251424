//! Near-verbatim metrics pipeline.
//!
//! Tokenizes a reference text and a generated text, discovers verbatim
//! blocks, runs the two merge-and-filter consolidation passes, and reduces
//! the final block set into aggregate recall-style metrics. Deterministic,
//! no randomness, no I/O.

use crate::align::find_blocks;
use crate::filter::filter_blocks;
use crate::merge::merge_blocks;
use crate::models::{Block, MergeParams, NearVerbatimMetrics, ParamsError};
use crate::normalize::text_to_words;

/// Two-stage consolidation of raw matcher blocks.
///
/// Stage 1 merges with tight thresholds and drops short fragments before
/// they can compound across long stretches; stage 2 re-merges the cleaned
/// set across slightly larger edits and keeps only spans long enough to be
/// non-coincidental.
fn consolidate(blocks: Vec<Block>, params: &MergeParams) -> Vec<Block> {
    let blocks = merge_blocks(&blocks, params.tau_gap_1, params.tau_align_1);
    let blocks = filter_blocks(&blocks, params.min_len_1);
    let blocks = merge_blocks(&blocks, params.tau_gap_2, params.tau_align_2);
    filter_blocks(&blocks, params.min_len_2)
}

fn blocks_from_words(book_words: &[String], gen_words: &[String], params: &MergeParams) -> Vec<Block> {
    consolidate(find_blocks(book_words, gen_words), params)
}

/// Final ordered set of near-verbatim blocks for a text pair.
pub fn near_verbatim_blocks(
    book_text: &str,
    gen_text: &str,
    params: &MergeParams,
) -> Result<Vec<Block>, ParamsError> {
    params.validate()?;
    let book_words = text_to_words(book_text, params.lower);
    let gen_words = text_to_words(gen_text, params.lower);
    Ok(blocks_from_words(&book_words, &gen_words, params))
}

/// Compute matched word count, recall, missing, and additional for a
/// reference/generated text pair.
///
/// `nv_recall` is the fraction of reference words covered by matched
/// blocks, `0.0` for an empty reference. `missing` and `additional` account
/// for every word not covered by a block, so
/// `matched + missing == book_len_words` and
/// `matched + additional == gen_len_words` always hold.
pub fn near_verbatim_metrics(
    book_text: &str,
    gen_text: &str,
    params: &MergeParams,
) -> Result<NearVerbatimMetrics, ParamsError> {
    params.validate()?;
    let book_words = text_to_words(book_text, params.lower);
    let gen_words = text_to_words(gen_text, params.lower);

    let blocks = blocks_from_words(&book_words, &gen_words, params);

    let matched: usize = blocks.iter().map(|b| b.m).sum();
    let book_len = book_words.len();
    let gen_len = gen_words.len();
    let nv_recall = if book_len > 0 {
        matched as f64 / book_len as f64
    } else {
        0.0
    };

    Ok(NearVerbatimMetrics {
        blocks,
        matched,
        nv_recall,
        missing: book_len - matched,
        additional: gen_len - matched,
        book_len_words: book_len,
        gen_len_words: gen_len,
    })
}
