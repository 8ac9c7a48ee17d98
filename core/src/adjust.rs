//! Audio parameter deltas derived from analysis
//!
//! The orchestrator applies these only to fields the caller left unset;
//! explicit caller values are never overwritten.

use serde::Serialize;

use crate::analysis::{AnalysisResult, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioAdjustments {
    /// Semitone offset, -20.0..=20.0.
    pub pitch: f64,
    /// Absolute rate, 0.25..=4.0, 1.0 = normal.
    pub speaking_rate: f64,
    /// Gain offset in dB.
    pub volume: f64,
}

impl Default for AudioAdjustments {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            speaking_rate: 1.0,
            volume: 0.0,
        }
    }
}

pub fn derive_adjustments(analysis: Option<&AnalysisResult>) -> AudioAdjustments {
    let Some(analysis) = analysis else {
        return AudioAdjustments::default();
    };

    let (pitch, volume) = match analysis.sentiment.dominant_sentiment {
        Sentiment::Positive => (4.0, 2.0),
        Sentiment::Negative => (-3.0, -3.0),
        Sentiment::Neutral => (0.0, 0.0),
    };

    AudioAdjustments {
        pitch,
        speaking_rate: analysis.pace.suggested_rate,
        volume,
    }
}
