//! Remote speech-synthesis wire contract and client
//!
//! The remote service is a single POST endpoint taking text plus a style
//! directive and returning base64 audio. It enforces a hard 4000-byte limit
//! on `input.text + input.prompt` (UTF-8 bytes), which the client validates
//! before dispatch.

mod auth;
mod client;

pub use auth::{AccessTokenProvider, EnvTokenProvider, SharedToken};
pub use client::{HttpTransport, SynthesisClient, SynthesisTransport};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEncoding {
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "ALAW")]
    Alaw,
    #[serde(rename = "MULAW")]
    Mulaw,
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
}

impl AudioEncoding {
    /// Raw-sample container formats whose chunks concatenate losslessly
    /// after stripping the repeated container header.
    pub fn is_pcm_family(self) -> bool {
        matches!(
            self,
            AudioEncoding::Linear16 | AudioEncoding::Alaw | AudioEncoding::Mulaw
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
            AudioEncoding::Mp3 => "MP3",
            AudioEncoding::Alaw => "ALAW",
            AudioEncoding::Mulaw => "MULAW",
            AudioEncoding::OggOpus => "OGG_OPUS",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisInput {
    pub text: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
    pub model_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub pitch: f64,
    pub speaking_rate: f64,
}

/// Full request body for one chunk synthesis call. Immutable once
/// dispatched; owned by exactly one call for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeBody {
    pub input: SynthesisInput,
    pub voice: VoiceSelection,
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub audio_content: String,
    #[serde(default)]
    pub audio_duration: Option<f64>,
}

/// Decoded audio for one chunk, consumed exactly once by the combiner.
#[derive(Debug, Clone)]
pub struct AudioChunkResult {
    pub index: usize,
    pub bytes: Vec<u8>,
    pub encoding: AudioEncoding,
    pub duration_secs: Option<f64>,
}
