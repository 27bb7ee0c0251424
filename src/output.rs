//! Output formatting for metrics records (summary lines, JSON).

use crate::models::{Block, NearVerbatimMetrics};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a metrics record as pretty JSON.
pub fn write_json<W: Write>(metrics: &NearVerbatimMetrics, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(metrics)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write a metrics record as pretty JSON to a file.
pub fn write_json_file(metrics: &NearVerbatimMetrics, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(metrics, &mut file)
}

/// Print the metrics summary to stdout.
pub fn print_metrics(metrics: &NearVerbatimMetrics) {
    println!("matched_words={}", metrics.matched);
    println!("nv_recall={:.6}", metrics.nv_recall);
    println!("missing_words={}", metrics.missing);
    println!("additional_words={}", metrics.additional);
    println!("num_blocks={}", metrics.blocks.len());
}

/// Format a block as a human-readable string.
pub fn format_block(block: &Block) -> String {
    format!(
        "Block: ref[{}..{}] ↔ gen[{}..{}] matched={}",
        block.i, block.i_end, block.j, block.j_end, block.m
    )
}

/// Print blocks in a human-readable format.
pub fn print_blocks(blocks: &[Block], limit: Option<usize>) {
    let to_print = match limit {
        Some(n) => &blocks[..n.min(blocks.len())],
        None => blocks,
    };

    for block in to_print {
        println!("{}", format_block(block));
    }

    if let Some(n) = limit {
        if blocks.len() > n {
            println!("... and {} more blocks", blocks.len() - n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> NearVerbatimMetrics {
        NearVerbatimMetrics {
            blocks: vec![Block::verbatim(0, 5, 120)],
            matched: 120,
            nv_recall: 0.8,
            missing: 30,
            additional: 10,
            book_len_words: 150,
            gen_len_words: 130,
        }
    }

    #[test]
    fn test_json_keys_and_block_tuples() {
        let mut buf = Vec::new();
        write_json(&sample_metrics(), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["matched"], 120);
        assert_eq!(value["nv_recall"], 0.8);
        assert_eq!(value["missing"], 30);
        assert_eq!(value["additional"], 10);
        assert_eq!(value["book_len_words"], 150);
        assert_eq!(value["gen_len_words"], 130);
        assert_eq!(value["blocks"][0][0], 0);
        assert_eq!(value["blocks"][0][1], 5);
        assert_eq!(value["blocks"][0][2], 120);
    }

    #[test]
    fn test_json_round_trip() {
        let metrics = sample_metrics();
        let mut buf = Vec::new();
        write_json(&metrics, &mut buf).unwrap();
        let back: NearVerbatimMetrics = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn test_format_block() {
        let formatted = format_block(&Block::verbatim(3, 7, 5));
        assert!(formatted.contains("ref[3..8]"));
        assert!(formatted.contains("gen[7..12]"));
        assert!(formatted.contains("matched=5"));
    }
}
