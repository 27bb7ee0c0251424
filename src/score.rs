//! Short-text similarity scoring.
//!
//! Measures how closely a short generated continuation tracks an expected
//! continuation: the length of the longest contiguous word run shared by
//! target and (length-capped) response, normalized by the target length.
//! Unlike the block matcher this is a single contiguous run, classic
//! longest-common-substring over word sequences.

use crate::models::{ParamsError, ScoreParams};
use crate::normalize::text_to_words;

/// Length of the longest run of words appearing contiguously, in order, in
/// both sequences.
///
/// Dynamic programming over a (target+1) x (response+1) table; only the
/// previous row is kept. O(len(target) * len(response)) time.
pub fn longest_common_run(target: &[String], response: &[String]) -> usize {
    if target.is_empty() || response.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; response.len() + 1];
    let mut curr = vec![0usize; response.len() + 1];
    let mut best = 0usize;

    for t_word in target {
        for (j, r_word) in response.iter().enumerate() {
            curr[j + 1] = if t_word == r_word { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Normalized similarity in [0, 1] between a target string and a response.
///
/// The response is truncated to `params.response_word_cap()` words before
/// scoring. Returns `0.0` for an empty target. Equals `1.0` exactly when
/// the whole target appears as a contiguous run within the capped response.
pub fn similarity_score(
    target: &str,
    response: &str,
    params: &ScoreParams,
) -> Result<f64, ParamsError> {
    params.validate()?;

    let target_words = text_to_words(target, false);
    let mut response_words = text_to_words(response, false);
    response_words.truncate(params.response_word_cap());

    if target_words.is_empty() {
        return Ok(0.0);
    }

    let longest = longest_common_run(&target_words, &response_words);
    Ok(longest as f64 / target_words.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_run_empty_inputs() {
        assert_eq!(longest_common_run(&[], &words("a b")), 0);
        assert_eq!(longest_common_run(&words("a b"), &[]), 0);
    }

    #[test]
    fn test_run_identical() {
        let seq = words("a b c d e");
        assert_eq!(longest_common_run(&seq, &seq), 5);
    }

    #[test]
    fn test_run_interior() {
        let t = words("x b c d y");
        let r = words("a b c d e");
        assert_eq!(longest_common_run(&t, &r), 3);
    }

    #[test]
    fn test_run_not_subsequence() {
        // "a c" is a subsequence of "a b c" but not a contiguous run.
        let t = words("a c");
        let r = words("a b c");
        assert_eq!(longest_common_run(&t, &r), 1);
    }

    #[test]
    fn test_score_exact() {
        let score = similarity_score("it was a dark night", "it was a dark night", &ScoreParams::default()).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_score_target_within_response() {
        let score = similarity_score(
            "a dark night",
            "they say it was a dark night indeed",
            &ScoreParams::default(),
        )
        .unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_score_empty_target() {
        let score = similarity_score("", "anything at all", &ScoreParams::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_disjoint() {
        let score = similarity_score("a b c", "x y z", &ScoreParams::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_within_bounds() {
        let score = similarity_score("a b c d", "c d x y", &ScoreParams::default()).unwrap();
        assert!(score >= 0.0 && score <= 1.0);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_cap_truncates_response() {
        // 14 tokens at 1.35 tokens per word caps the response at 10 words,
        // so a target taken from beyond the cap cannot match.
        let params = ScoreParams {
            max_response_tokens: 14,
            ..Default::default()
        };
        assert_eq!(params.response_word_cap(), 10);

        let response_words: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
        let response = response_words.join(" ");
        let target = response_words[10..15].join(" ");

        let score = similarity_score(&target, &response, &params).unwrap();
        assert_eq!(score, 0.0);

        let target_in_cap = response_words[0..5].join(" ");
        let score = similarity_score(&target_in_cap, &response, &params).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let params = ScoreParams {
            tokens_per_word: -1.0,
            ..Default::default()
        };
        assert!(similarity_score("a", "a", &params).is_err());
    }
}
