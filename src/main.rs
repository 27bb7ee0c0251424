//! Near-verbatim matching and scoring CLI.
//!
//! `metrics` compares a reference file against a generated-text file and
//! reports near-verbatim recall; `score` computes the short-text similarity
//! between a target and a response.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod align;
mod filter;
mod merge;
mod metrics;
mod models;
mod normalize;
mod output;
mod score;

use models::{MergeParams, ScoreParams};
use output::{print_blocks, print_metrics, write_json_file};

#[derive(Parser)]
#[command(name = "verbatim-recall")]
#[command(about = "Near-verbatim matching and recall metrics for generated text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute near-verbatim block metrics for a reference/generated pair
    ///
    /// All thresholds default to the two-pass settings from
    /// MergeParams::default(). Override any threshold explicitly to
    /// customize behavior.
    Metrics {
        /// Path to file with the reference text
        #[arg(long = "ref")]
        ref_file: PathBuf,

        /// Path to file with the generated text
        #[arg(long = "gen")]
        gen_file: PathBuf,

        /// Lowercase both texts before tokenizing
        #[arg(long)]
        lower: bool,

        /// Write the full metrics record as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Print the first N blocks to stdout
        #[arg(long)]
        show_blocks: Option<usize>,

        /// Pass-1 gap tolerance [default: 2]
        #[arg(long)]
        tau_gap_1: Option<usize>,

        /// Pass-1 alignment tolerance [default: 1]
        #[arg(long)]
        tau_align_1: Option<usize>,

        /// Pass-1 minimum block length [default: 20]
        #[arg(long)]
        min_len_1: Option<usize>,

        /// Pass-2 gap tolerance [default: 10]
        #[arg(long)]
        tau_gap_2: Option<usize>,

        /// Pass-2 alignment tolerance [default: 3]
        #[arg(long)]
        tau_align_2: Option<usize>,

        /// Pass-2 minimum block length [default: 100]
        #[arg(long)]
        min_len_2: Option<usize>,
    },

    /// Compute the short-text similarity score for a target/response pair
    Score {
        /// Path to file with the target text
        #[arg(long = "target")]
        target_file: PathBuf,

        /// Path to file with the response text
        #[arg(long = "response")]
        response_file: PathBuf,

        /// Token budget for the response cap [default: 1000]
        #[arg(long)]
        max_response_tokens: Option<usize>,

        /// Average tokens per word used to derive the cap [default: 1.35]
        #[arg(long)]
        tokens_per_word: Option<f64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics {
            ref_file,
            gen_file,
            lower,
            json,
            show_blocks,
            tau_gap_1,
            tau_align_1,
            min_len_1,
            tau_gap_2,
            tau_align_2,
            min_len_2,
        } => {
            // Overlay user-specified thresholds onto the defaults
            let defaults = MergeParams::default();
            let params = MergeParams {
                tau_gap_1: tau_gap_1.unwrap_or(defaults.tau_gap_1),
                tau_align_1: tau_align_1.unwrap_or(defaults.tau_align_1),
                min_len_1: min_len_1.unwrap_or(defaults.min_len_1),
                tau_gap_2: tau_gap_2.unwrap_or(defaults.tau_gap_2),
                tau_align_2: tau_align_2.unwrap_or(defaults.tau_align_2),
                min_len_2: min_len_2.unwrap_or(defaults.min_len_2),
                lower,
            };

            let book_text = std::fs::read_to_string(&ref_file)?;
            let gen_text = std::fs::read_to_string(&gen_file)?;

            let m = metrics::near_verbatim_metrics(&book_text, &gen_text, &params)?;
            print_metrics(&m);

            if let Some(path) = json {
                write_json_file(&m, &path)?;
                eprintln!("JSON output: {}", path.display());
            }

            if let Some(limit) = show_blocks {
                print_blocks(&m.blocks, Some(limit));
            }
        }

        Commands::Score {
            target_file,
            response_file,
            max_response_tokens,
            tokens_per_word,
        } => {
            let defaults = ScoreParams::default();
            let params = ScoreParams {
                max_response_tokens: max_response_tokens.unwrap_or(defaults.max_response_tokens),
                tokens_per_word: tokens_per_word.unwrap_or(defaults.tokens_per_word),
            };

            let target_text = std::fs::read_to_string(&target_file)?;
            let response_text = std::fs::read_to_string(&response_file)?;

            let s = score::similarity_score(&target_text, &response_text, &params)?;
            println!("similarity={s:.6}");
        }
    }

    Ok(())
}
