//! Rule-based text analysis for auto-prompt generation
//!
//! Scores raw text across four independent dimensions (sentiment, tone,
//! content type, pace) using the static weighted-keyword tables in
//! [`keywords`]. No statistical models; every scorer is a pure function of
//! its input, so analysis is deterministic and safe to run concurrently.

mod content;
mod keywords;
mod pace;
mod sentiment;
mod tone;

use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneType {
    Formal,
    Casual,
    Technical,
    Conversational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Educational,
    Narrative,
    Dialogue,
    Instructions,
    Poetry,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentAnalysis {
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
    pub dominant_sentiment: Sentiment,
    /// First matched positive/negative keywords, table order, at most five.
    pub emotion_markers: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToneAnalysis {
    /// 0 = casual, 1 = formal.
    pub formality_score: f64,
    pub tone_type: ToneType,
    /// 0 = lay, 1 = highly technical.
    pub technical_level: f64,
    pub formal_hits: usize,
    pub casual_hits: usize,
    pub technical_hits: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentCharacteristics {
    pub educational_markers: usize,
    pub dialogue_ratio: f64,
    pub question_ratio: f64,
    pub imperative_count: usize,
    pub narrative_markers: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub primary_type: ContentType,
    pub confidence: f64,
    pub characteristics: ContentCharacteristics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaceAnalysis {
    /// 0.25–4.0, 1.0 = normal speed.
    pub suggested_rate: f64,
    pub complexity: Complexity,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
}

/// Complete analysis of one text chunk. Produced fresh per chunk, never
/// shared or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub sentiment: SentimentAnalysis,
    pub tone: ToneAnalysis,
    pub content_type: ContentAnalysis,
    pub pace: PaceAnalysis,
}

/// Analyze text across all four dimensions. Blank input yields `None`.
pub fn analyze(text: &str) -> Option<AnalysisResult> {
    if text.trim().is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    let sentiment = sentiment::analyze_sentiment(&lower);
    let tone = tone::analyze_tone(text, &lower);
    let content_type = content::analyze_content_type(text, &lower);
    let pace = pace::analyze_pace(text);

    info!(
        target = "analysis",
        sentiment = ?sentiment.dominant_sentiment,
        tone = ?tone.tone_type,
        content = ?content_type.primary_type,
        "Text analysis complete"
    );

    Some(AnalysisResult {
        sentiment,
        tone,
        content_type,
        pace,
    })
}
