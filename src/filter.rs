//! Minimum-length filtering of merged blocks.

use crate::models::Block;

/// Keep only blocks with at least `min_len` matched words; order preserved.
pub fn filter_blocks(blocks: &[Block], min_len: usize) -> Vec<Block> {
    blocks.iter().copied().filter(|b| b.m >= min_len).collect()
}
