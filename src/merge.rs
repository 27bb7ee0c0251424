//! Merge nearby, approximately aligned blocks into near-verbatim spans.
//!
//! Raw matcher output fragments a copied passage wherever the generated
//! text inserts, drops, or substitutes a token. A single left-to-right scan
//! re-joins fragments whose gaps are small and roughly equal on both sides.

use crate::models::Block;

/// Merge consecutive blocks whose gaps satisfy the adjacency and alignment
/// tolerances.
///
/// For the current accumulator `cur` and the next block `nxt`, let
/// `delta_a = nxt.i - cur.i_end` and `delta_b = nxt.j - cur.j_end` (both
/// non-negative by the ordering invariant). The blocks merge iff
/// `max(delta_a, delta_b) <= tau_gap` and the signed skew
/// `delta_a - delta_b <= tau_align`. Merging is transitive within the scan:
/// a grown accumulator is re-tested against the following block under the
/// same rule.
///
/// The merged block's `m` is the sum of matched lengths; gap words are not
/// counted as matched.
pub fn merge_blocks(blocks: &[Block], tau_gap: usize, tau_align: usize) -> Vec<Block> {
    let mut iter = blocks.iter();
    let Some(&first) = iter.next() else {
        return Vec::new();
    };

    let mut merged: Vec<Block> = Vec::new();
    let mut cur = first;

    for &nxt in iter {
        let delta_a = nxt.i - cur.i_end;
        let delta_b = nxt.j - cur.j_end;
        let skew = delta_a as i64 - delta_b as i64;

        if delta_a.max(delta_b) <= tau_gap && skew <= tau_align as i64 {
            cur = Block {
                i: cur.i,
                j: cur.j,
                m: cur.m + nxt.m,
                i_end: nxt.i_end,
                j_end: nxt.j_end,
            };
        } else {
            merged.push(cur);
            cur = nxt;
        }
    }

    merged.push(cur);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(merge_blocks(&[], 2, 1).is_empty());
    }

    #[test]
    fn test_single_block_unchanged() {
        let blocks = vec![Block::verbatim(5, 7, 10)];
        assert_eq!(merge_blocks(&blocks, 2, 1), blocks);
    }

    #[test]
    fn test_merge_small_insertion_gap() {
        // One token inserted in the generated text: delta_a=0, delta_b=1.
        let blocks = vec![Block::verbatim(0, 0, 10), Block::verbatim(10, 11, 10)];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].m, 20);
        assert_eq!(merged[0].i, 0);
        assert_eq!(merged[0].j, 0);
        assert_eq!(merged[0].i_end, 20);
        assert_eq!(merged[0].j_end, 21);
    }

    #[test]
    fn test_gap_tolerance_rejects_wide_gap() {
        let blocks = vec![Block::verbatim(0, 0, 10), Block::verbatim(15, 15, 10)];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_alignment_tolerance_rejects_skew() {
        // delta_a=2, delta_b=0: within tau_gap but skew 2 > tau_align 1.
        let blocks = vec![Block::verbatim(0, 0, 10), Block::verbatim(12, 10, 10)];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_negative_skew_allowed() {
        // delta_a=0, delta_b=2: skew is -2, which never exceeds tau_align.
        let blocks = vec![Block::verbatim(0, 0, 10), Block::verbatim(10, 12, 10)];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].m, 20);
    }

    #[test]
    fn test_transitive_merge() {
        let blocks = vec![
            Block::verbatim(0, 0, 10),
            Block::verbatim(11, 11, 10),
            Block::verbatim(22, 22, 10),
        ];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].m, 30);
        assert_eq!(merged[0].i_end, 32);
    }

    #[test]
    fn test_merged_length_excludes_gaps() {
        let blocks = vec![Block::verbatim(0, 0, 10), Block::verbatim(12, 12, 10)];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 1);
        // Span covers 22 reference words, but only 20 matched.
        assert_eq!(merged[0].m, 20);
        assert_eq!(merged[0].i_end - merged[0].i, 22);
    }

    #[test]
    fn test_merge_restarts_after_rejection() {
        let blocks = vec![
            Block::verbatim(0, 0, 10),
            Block::verbatim(30, 30, 10),
            Block::verbatim(41, 41, 10),
        ];
        let merged = merge_blocks(&blocks, 2, 1);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].m, 10);
        assert_eq!(merged[1].m, 20);
    }
}
