//! Formality and technicality detection.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{CASUAL_KEYWORDS, FORMAL_KEYWORDS, TECHNICAL_KEYWORDS};
use super::{ToneAnalysis, ToneType};

static CONTRACTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"n't|'ll|'ve|'re|'m|'d").unwrap());

fn hit_count(table: &[(&str, f64)], text_lower: &str) -> usize {
    table
        .iter()
        .filter(|(word, _)| text_lower.contains(word))
        .count()
}

pub(super) fn analyze_tone(text: &str, text_lower: &str) -> ToneAnalysis {
    let formal_hits = hit_count(FORMAL_KEYWORDS, text_lower);
    let casual_hits = hit_count(CASUAL_KEYWORDS, text_lower);
    let technical_hits = hit_count(TECHNICAL_KEYWORDS, text_lower);

    let word_count = text.split_whitespace().count();

    let formality_score = if formal_hits + casual_hits > 0 {
        formal_hits as f64 / (formal_hits + casual_hits) as f64
    } else {
        // No explicit markers either way; contraction density reads as casual.
        let contraction_count = CONTRACTIONS.find_iter(text_lower).count();
        (1.0 - contraction_count as f64 / word_count.max(1) as f64 * 10.0).max(0.0)
    };

    let technical_level =
        (technical_hits as f64 / (word_count as f64 / 10.0).max(1.0)).min(1.0);

    let tone_type = if technical_level > 0.5 {
        ToneType::Technical
    } else if formality_score > 0.6 {
        ToneType::Formal
    } else if casual_hits > formal_hits {
        ToneType::Casual
    } else if technical_hits > 0 {
        ToneType::Technical
    } else {
        ToneType::Conversational
    };

    ToneAnalysis {
        formality_score,
        tone_type,
        technical_level,
        formal_hits,
        casual_hits,
        technical_hits,
    }
}
