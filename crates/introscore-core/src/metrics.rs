//! Pure calculators behind the rate, vocabulary, filler, and grammar
//! criteria. Tokens are whitespace-separated and compared verbatim
//! unless a function says otherwise.

use std::collections::HashSet;

use crate::error::{Result, ScoreError};
use crate::rubric;

/// Speaking rate in words per minute.
pub fn words_per_minute(word_count: usize, duration_secs: f64) -> Result<f64> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(ScoreError::NonPositiveDuration {
            seconds: duration_secs,
        });
    }
    if word_count == 0 {
        return Err(ScoreError::EmptyTranscript);
    }
    Ok(word_count as f64 / duration_secs * 60.0)
}

/// Distinct tokens over total tokens. Case and punctuation differences
/// keep tokens distinct, so "Hello" and "hello," count separately.
pub fn type_token_ratio(text: &str) -> Result<f64> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(ScoreError::EmptyTranscript);
    }
    let distinct: HashSet<&str> = words.iter().copied().collect();
    Ok(distinct.len() as f64 / words.len() as f64)
}

/// Number of tokens exactly equal to a filler-list entry.
pub fn filler_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|word| rubric::FILLER_WORDS.contains(word))
        .count()
}

/// Filler tokens as a percentage of all tokens. 0.0 for empty text.
pub fn filler_word_rate(text: &str) -> f64 {
    let total = text.split_whitespace().count();
    if total == 0 {
        return 0.0;
    }
    filler_word_count(text) as f64 / total as f64 * 100.0
}

/// Grammar quality in [0, 1] from a flagged-issue count:
/// `1 - min(issues_per_100_words / 10, 1)`.
pub fn grammar_quality(issue_count: usize, word_count: usize) -> Result<f64> {
    if word_count == 0 {
        return Err(ScoreError::EmptyTranscript);
    }
    let errors_per_100 = issue_count as f64 / word_count as f64 * 100.0;
    Ok(1.0 - (errors_per_100 / 10.0).min(1.0))
}
