//! Speaking-pace suggestion from word and sentence complexity.

use std::sync::LazyLock;

use regex::Regex;

use super::{Complexity, PaceAnalysis};

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

pub(super) fn analyze_pace(text: &str) -> PaceAnalysis {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let avg_word_length =
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len().max(1) as f64;
    let avg_sentence_length = words.len() as f64 / sentence_count.max(1) as f64;

    let (complexity, suggested_rate) = if avg_word_length < 4.0 && avg_sentence_length < 12.0 {
        // Simple text can run slightly faster.
        (Complexity::Simple, 1.1)
    } else if avg_word_length > 6.0 && avg_sentence_length > 20.0 {
        // Dense text slows down for clarity.
        (Complexity::Complex, 0.85)
    } else {
        (Complexity::Moderate, 1.0)
    };

    PaceAnalysis {
        suggested_rate,
        complexity,
        avg_word_length,
        avg_sentence_length,
    }
}
