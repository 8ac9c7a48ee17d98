//! Keyword-weighted sentiment scoring.

use super::keywords::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, URGENT_KEYWORDS};
use super::{Sentiment, SentimentAnalysis};

fn weight_sum(table: &[(&str, f64)], text_lower: &str) -> f64 {
    table
        .iter()
        .filter(|(word, _)| text_lower.contains(word))
        .map(|(_, weight)| weight)
        .sum()
}

pub(super) fn analyze_sentiment(text_lower: &str) -> SentimentAnalysis {
    let positive_sum = weight_sum(POSITIVE_KEYWORDS, text_lower);
    let negative_sum = weight_sum(NEGATIVE_KEYWORDS, text_lower);
    let urgent_sum = weight_sum(URGENT_KEYWORDS, text_lower);

    // Normalize into 0..=1; the max(1) guard keeps keyword-free text at zero.
    let total = (positive_sum + negative_sum + urgent_sum).max(1.0);
    let positive_score = (positive_sum / (total * 0.5)).min(1.0);
    let negative_score = ((negative_sum + urgent_sum) / (total * 0.5)).min(1.0);
    let neutral_score = 1.0 - positive_score - negative_score;

    let dominant_sentiment = if positive_score > 0.6 {
        Sentiment::Positive
    } else if negative_score > 0.6 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let emotion_markers: Vec<&'static str> = POSITIVE_KEYWORDS
        .iter()
        .chain(NEGATIVE_KEYWORDS.iter())
        .filter(|(word, _)| text_lower.contains(word) && *word != "urgent")
        .map(|(word, _)| *word)
        .take(5)
        .collect();

    SentimentAnalysis {
        positive_score,
        negative_score,
        neutral_score,
        dominant_sentiment,
        emotion_markers,
    }
}
