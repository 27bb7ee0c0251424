//! Greedy verbatim-block discovery between two word sequences.
//!
//! This is the HOT PATH - performance is critical here.
//! The algorithm repeatedly finds the longest contiguous matching run in a
//! subrange and recurses on the remainders to the left and right of it.
//! It is a greedy divide-and-conquer alignment, not a true LCS optimum,
//! and the exact tie-break rules matter: among runs of equal maximum
//! length, the one with the smallest reference index wins, then the
//! smallest generated index.

use crate::models::Block;
use std::collections::HashMap;

/// Index of every position at which each word occurs in the generated
/// sequence. Built once per `find_blocks` call.
type WordPositions<'a> = HashMap<&'a str, Vec<usize>>;

/// Find the maximal ordered set of non-overlapping verbatim matching runs.
///
/// Every word is eligible to match regardless of how often it occurs; no
/// frequency-based junk suppression is applied. Returned blocks are sorted
/// by reference index and are non-overlapping in both sequences. If either
/// sequence is empty, returns an empty list.
pub fn find_blocks(a: &[String], b: &[String]) -> Vec<Block> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut b2j: WordPositions = HashMap::new();
    for (j, word) in b.iter().enumerate() {
        b2j.entry(word.as_str()).or_default().push(j);
    }

    // Explicit worklist of half-open (alo, ahi, blo, bhi) subranges instead
    // of call-stack recursion; large inputs would otherwise recurse deeply.
    let mut raw: Vec<Block> = Vec::new();
    let mut pending: Vec<(usize, usize, usize, usize)> = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        raw.push(Block::verbatim(i, j, size));
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    // Blocks never overlap in the reference sequence, so sorting by i
    // restores the in-order traversal of the recursion.
    raw.sort_by_key(|blk| (blk.i, blk.j));
    coalesce_adjacent(raw)
}

/// Longest contiguous matching run within a half-open subrange pair.
///
/// Returns `(i, j, size)` with size 0 when the subranges share no word.
/// Runs are grown row by row: `j2len` holds, for each generated index `j`,
/// the length of the run ending at the current reference index and `j`.
/// The strict `size > best_size` update gives the required tie-break
/// (smallest `i`, then smallest `j`).
fn longest_match(
    a: &[String],
    b2j: &WordPositions,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(a[i].as_str()) {
            // Positions are ascending, so everything past bhi can be skipped.
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let size = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}

/// Rejoin runs the recursion split at exactly adjacent boundaries.
///
/// A block ending precisely where the next one begins in both sequences is
/// a single verbatim run; emitting it as one block keeps matcher output
/// canonical (maximal runs).
fn coalesce_adjacent(blocks: Vec<Block>) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    for blk in blocks {
        if let Some(last) = out.last_mut() {
            if last.i_end == blk.i && last.j_end == blk.j {
                *last = Block::verbatim(last.i, last.j, last.m + blk.m);
                continue;
            }
        }
        out.push(blk);
    }
    out
}
