//! Pipeline configuration loaded from environment variables
//!
//! Env overrides:
//! - TTS_ENDPOINT, TTS_VOICE, TTS_LANGUAGE, TTS_MODEL
//! - TTS_CHUNK_BUDGET_BYTES, TTS_MAX_INPUT_CHARS
//! - TTS_REQUEST_TIMEOUT_MS, TTS_TOTAL_TIMEOUT_MS, TTS_MAX_ATTEMPTS

use crate::synth::AudioEncoding;

/// Hard remote limit on `len(input.text) + len(input.prompt)` in UTF-8 bytes.
pub const PAYLOAD_CEILING_BYTES: usize = 4000;

#[derive(Debug, Clone)]
pub struct TtsConfig {
    pub endpoint: String,
    pub voice_name: String,
    pub language_code: String,
    pub model_name: String,
    pub audio_encoding: AudioEncoding,
    /// Per-chunk byte budget for text plus directive. Kept well under the
    /// remote ceiling so individual calls stay fast.
    pub chunk_budget_bytes: usize,
    /// Canonical whole-request input ceiling, in characters.
    pub max_input_chars: usize,
    pub request_timeout_ms: u64,
    /// Deadline for the whole chunk-synthesis phase of one request.
    pub total_timeout_ms: u64,
    /// Total attempts per chunk, including the first.
    pub max_attempts: u32,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("TTS_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| {
                    "https://texttospeech.googleapis.com/v1beta1/text:synthesize".to_string()
                }),
            voice_name: std::env::var("TTS_VOICE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Achernar".to_string()),
            language_code: std::env::var("TTS_LANGUAGE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "en-US".to_string()),
            model_name: std::env::var("TTS_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "gemini-2.5-pro-tts".to_string()),
            audio_encoding: AudioEncoding::Linear16,
            chunk_budget_bytes: std::env::var("TTS_CHUNK_BUDGET_BYTES")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1200),
            max_input_chars: std::env::var("TTS_MAX_INPUT_CHARS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(5000),
            request_timeout_ms: std::env::var("TTS_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(30_000),
            // Worst case per chunk is max_attempts * request_timeout plus
            // 1s + 2s of backoff; five chunks of headroom by default.
            total_timeout_ms: std::env::var("TTS_TOTAL_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5 * (3 * 30_000 + 3_000)),
            max_attempts: std::env::var("TTS_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(3),
        }
    }
}
