//! Near-Verbatim Matching and Scoring Library
//!
//! Evaluates how much of a reference text a generated text reproduces
//! verbatim. Both texts are tokenized into word sequences, verbatim
//! matching blocks are discovered with a greedy longest-run alignment, and
//! two merge-and-filter passes consolidate nearby, approximately aligned
//! blocks into near-verbatim spans from which recall-style metrics are
//! derived. A separate longest-common-run score measures how closely a
//! short continuation tracks an expected one.
//!
//! # Example
//!
//! ```
//! use verbatim_recall::prelude::*;
//!
//! let book: String = (0..150).map(|i| format!("w{i} ")).collect();
//! let params = MergeParams::default();
//!
//! let metrics = near_verbatim_metrics(&book, &book, &params).unwrap();
//! assert_eq!(metrics.nv_recall, 1.0);
//! assert_eq!(metrics.blocks.len(), 1);
//! ```
//!
//! # Short-text Scoring Example
//!
//! ```
//! use verbatim_recall::prelude::*;
//!
//! let score = similarity_score(
//!     "a dark and stormy night",
//!     "it was a dark and stormy night when",
//!     &ScoreParams::default(),
//! ).unwrap();
//! assert_eq!(score, 1.0);
//! ```

pub mod align;
pub mod filter;
pub mod merge;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod output;
pub mod score;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::find_blocks;
    pub use crate::filter::filter_blocks;
    pub use crate::merge::merge_blocks;
    pub use crate::metrics::{near_verbatim_blocks, near_verbatim_metrics};
    pub use crate::models::{Block, MergeParams, NearVerbatimMetrics, ParamsError, ScoreParams};
    pub use crate::normalize::{normalize_text, text_to_words};
    pub use crate::output::{
        format_block, print_blocks, print_metrics, write_json, write_json_file, OutputError,
    };
    pub use crate::score::{longest_common_run, similarity_score};
}

// Re-export commonly used types at the crate root
pub use models::{Block, MergeParams, NearVerbatimMetrics, ParamsError, ScoreParams};
