//! Request orchestration: segment, analyze, synthesize, combine
//!
//! Sequences the pipeline for one request: split oversized text into
//! chunks, derive a style directive per chunk (unless the caller supplied
//! one), derive audio parameters once from whole-text analysis for any
//! field the caller left unset, dispatch chunks concurrently, and reassemble
//! the audio in sequence order. Any chunk's unrecoverable failure aborts the
//! whole request; no partial audio is returned.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;
use tokio::time::{Duration, Instant};
use tracing::{info, warn};

use crate::adjust::{derive_adjustments, AudioAdjustments};
use crate::analysis::{analyze, AnalysisResult};
use crate::combine::combine;
use crate::config::TtsConfig;
use crate::prompt::{generate_prompt, max_directive_bytes};
use crate::segment::segment;
use crate::synth::{
    AudioChunkResult, AudioConfig, AudioEncoding, EnvTokenProvider, HttpTransport, SharedToken,
    SynthesisClient, SynthesisInput, SynthesisTransport, SynthesizeBody, VoiceSelection,
};
use crate::{Result, TtsError};

/// Fixed directive used when auto-prompting is off and the caller supplied
/// no directive of their own.
const DEFAULT_DIRECTIVE: &str = "Read aloud like an experienced teacher explaining to students";

/// Caller-facing request options. Absent pitch/rate/directive means
/// "derive from analysis at dispatch time".
#[derive(Debug, Clone)]
pub struct SynthesizeOptions {
    pub voice_name: Option<String>,
    pub language_code: Option<String>,
    pub model_name: Option<String>,
    pub audio_encoding: Option<AudioEncoding>,
    pub pitch: Option<f64>,
    pub speaking_rate: Option<f64>,
    pub style_directive: Option<String>,
    pub auto_prompt: bool,
}

impl Default for SynthesizeOptions {
    fn default() -> Self {
        Self {
            voice_name: None,
            language_code: None,
            model_name: None,
            audio_encoding: None,
            pitch: None,
            speaking_rate: None,
            style_directive: None,
            auto_prompt: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub audio: Vec<u8>,
    pub encoding: AudioEncoding,
    /// One directive per chunk, in chunk order.
    pub generated_prompts: Vec<String>,
    /// Sum of per-chunk durations when the service reported them all.
    pub duration_secs: Option<f64>,
    /// True when a non-concatenatable encoding forced first-chunk-only output.
    pub degraded_combine: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub analysis: Option<AnalysisResult>,
    pub generated_prompt: String,
    pub adjustments: AudioAdjustments,
}

pub struct TtsPipeline {
    pub cfg: TtsConfig,
    client: Arc<SynthesisClient>,
}

impl TtsPipeline {
    pub fn new(cfg: TtsConfig, transport: Arc<dyn SynthesisTransport>) -> Self {
        let client = Arc::new(SynthesisClient::new(transport, cfg.max_attempts));
        Self { cfg, client }
    }

    /// Production wiring: HTTP transport against the configured endpoint,
    /// bearer token from the environment.
    pub fn from_env() -> Result<Self> {
        let cfg = TtsConfig::default();
        let token = Arc::new(SharedToken::new(Arc::new(EnvTokenProvider)));
        let transport = Arc::new(HttpTransport::new(
            cfg.endpoint.clone(),
            cfg.request_timeout_ms,
            token,
        )?);
        Ok(Self::new(cfg, transport))
    }

    /// Read-only analysis of a text: classification, the directive it would
    /// produce, and the derived audio adjustments.
    pub fn analyze(&self, text: &str) -> AnalysisOutcome {
        let analysis = analyze(text);
        AnalysisOutcome {
            generated_prompt: generate_prompt(analysis.as_ref()).to_string(),
            adjustments: derive_adjustments(analysis.as_ref()),
            analysis,
        }
    }

    /// Convert text to speech, chunking and auto-prompting as needed.
    pub async fn synthesize(
        &self,
        text: &str,
        opts: &SynthesizeOptions,
    ) -> Result<SynthesisOutcome> {
        if text.trim().is_empty() {
            return Err(TtsError::Validation("Text cannot be empty".to_string()));
        }
        let char_count = text.chars().count();
        if char_count > self.cfg.max_input_chars {
            return Err(TtsError::Validation(format!(
                "Text exceeds maximum length of {} characters",
                self.cfg.max_input_chars
            )));
        }

        let reserved = opts
            .style_directive
            .as_ref()
            .map(|d| d.len())
            .unwrap_or_else(max_directive_bytes);
        let chunks = segment(text, reserved, self.cfg.chunk_budget_bytes);

        // Audio parameters are derived once from the whole text, and only
        // fill fields the caller left unset.
        let full_analysis = analyze(text);
        let adjustments = derive_adjustments(full_analysis.as_ref());
        let pitch = opts.pitch.unwrap_or(adjustments.pitch);
        let speaking_rate = opts.speaking_rate.unwrap_or(adjustments.speaking_rate);
        let encoding = opts.audio_encoding.unwrap_or(self.cfg.audio_encoding);

        let voice = VoiceSelection {
            language_code: opts
                .language_code
                .clone()
                .unwrap_or_else(|| self.cfg.language_code.clone()),
            name: opts
                .voice_name
                .clone()
                .unwrap_or_else(|| self.cfg.voice_name.clone()),
            model_name: opts
                .model_name
                .clone()
                .unwrap_or_else(|| self.cfg.model_name.clone()),
        };

        info!(
            target = "pipeline",
            chars = char_count,
            chunks = chunks.len(),
            voice = %voice.name,
            encoding = encoding.as_str(),
            auto_prompt = opts.auto_prompt,
            "Starting synthesis"
        );

        let mut generated_prompts = Vec::with_capacity(chunks.len());
        let mut set: JoinSet<Result<AudioChunkResult>> = JoinSet::new();

        for chunk in &chunks {
            let directive = match &opts.style_directive {
                Some(d) => d.clone(),
                None if opts.auto_prompt => {
                    generate_prompt(analyze(&chunk.text).as_ref()).to_string()
                }
                None => DEFAULT_DIRECTIVE.to_string(),
            };
            generated_prompts.push(directive.clone());

            let body = SynthesizeBody {
                input: SynthesisInput {
                    text: chunk.text.clone(),
                    prompt: directive,
                },
                voice: voice.clone(),
                audio_config: AudioConfig {
                    audio_encoding: encoding,
                    pitch,
                    speaking_rate,
                },
            };
            let client = Arc::clone(&self.client);
            let index = chunk.index;
            set.spawn(async move { client.synthesize_chunk(index, body).await });
        }

        let results = self.collect_ordered(set, chunks.len()).await?;

        let duration_secs = results
            .iter()
            .map(|r| r.duration_secs)
            .sum::<Option<f64>>();

        let combined = combine(results, encoding)?;
        if combined.degraded {
            warn!(
                target = "pipeline",
                encoding = encoding.as_str(),
                "Returning first chunk only; encoding cannot be concatenated"
            );
        }

        info!(
            target = "pipeline",
            audio_bytes = combined.bytes.len(),
            chunks = generated_prompts.len(),
            "Synthesis complete"
        );

        Ok(SynthesisOutcome {
            audio: combined.bytes,
            encoding: combined.encoding,
            generated_prompts,
            duration_secs,
            degraded_combine: combined.degraded,
        })
    }

    /// Drain the join set into sequence order, bounded by the request-level
    /// deadline. The first failure aborts every remaining chunk.
    async fn collect_ordered(
        &self,
        mut set: JoinSet<Result<AudioChunkResult>>,
        total: usize,
    ) -> Result<Vec<AudioChunkResult>> {
        let deadline = Instant::now() + Duration::from_millis(self.cfg.total_timeout_ms);
        let mut slots: Vec<Option<AudioChunkResult>> = (0..total).map(|_| None).collect();

        loop {
            let joined = match tokio::time::timeout_at(deadline, set.join_next()).await {
                Ok(Some(joined)) => joined,
                Ok(None) => break,
                Err(_) => {
                    set.abort_all();
                    return Err(TtsError::Timeout(format!(
                        "synthesis exceeded the {}ms request budget",
                        self.cfg.total_timeout_ms
                    )));
                }
            };

            match joined {
                Ok(Ok(chunk_audio)) => {
                    let index = chunk_audio.index;
                    slots[index] = Some(chunk_audio);
                }
                Ok(Err(e)) => {
                    set.abort_all();
                    return Err(e);
                }
                Err(join_err) => {
                    set.abort_all();
                    return Err(TtsError::Transient(format!(
                        "synthesis task failed: {join_err}"
                    )));
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| TtsError::Combine("missing chunk result".to_string())))
            .collect()
    }
}
