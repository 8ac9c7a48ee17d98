//! Per-chunk synthesis calls with bounded exponential-backoff retry.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use tokio::time::Duration;
use tracing::{debug, error, warn};

use super::auth::SharedToken;
use super::{AudioChunkResult, SynthesizeBody, SynthesizeResponse};
use crate::config::PAYLOAD_CEILING_BYTES;
use crate::{Result, TtsError};

/// Minimal directive substituted when text plus directive would bust the
/// remote payload ceiling.
pub(crate) const FALLBACK_DIRECTIVE: &str = "Speak clearly and naturally.";

/// Seam between the retry policy and the wire. Tests substitute fakes.
#[async_trait]
pub trait SynthesisTransport: Send + Sync {
    async fn dispatch(&self, body: &SynthesizeBody) -> Result<SynthesizeResponse>;
}

/// Production transport: one POST per chunk with a bearer token.
pub struct HttpTransport {
    http: Client,
    endpoint: String,
    token: Arc<SharedToken>,
}

impl HttpTransport {
    pub fn new(endpoint: String, request_timeout_ms: u64, token: Arc<SharedToken>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms))
            .build()
            .map_err(|e| TtsError::Transient(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl SynthesisTransport for HttpTransport {
    async fn dispatch(&self, body: &SynthesizeBody) -> Result<SynthesizeResponse> {
        let token = self.token.current().await?;

        debug!(
            target = "synth",
            endpoint = %self.endpoint,
            text_bytes = body.input.text.len(),
            "POST synthesize"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout(format!("synthesis request timed out: {e}"))
                } else {
                    TtsError::Transient(format!("synthesis request failed: {e}"))
                }
            })?;

        let status = resp.status();
        if status.is_success() {
            return resp.json::<SynthesizeResponse>().await.map_err(|e| {
                TtsError::Remote {
                    status: status.as_u16(),
                    detail: format!("unparseable response body: {e}"),
                }
            });
        }

        let detail = resp.text().await.unwrap_or_default();
        error!(target = "synth", %status, body = %detail, "Synthesis service error");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(TtsError::Auth(format!("status {status}: {detail}")))
        } else if status.is_server_error() {
            Err(TtsError::Transient(format!("status {status}: {detail}")))
        } else {
            Err(TtsError::Remote {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

/// Issues one remote call per chunk, retrying transient failures with
/// exponential backoff (1s, 2s between the up-to-three attempts).
pub struct SynthesisClient {
    transport: Arc<dyn SynthesisTransport>,
    max_attempts: u32,
}

impl SynthesisClient {
    pub fn new(transport: Arc<dyn SynthesisTransport>, max_attempts: u32) -> Self {
        Self {
            transport,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Synthesize one chunk. Validates the payload ceiling first, degrading
    /// the directive to [`FALLBACK_DIRECTIVE`] rather than failing the call.
    pub async fn synthesize_chunk(
        &self,
        index: usize,
        mut body: SynthesizeBody,
    ) -> Result<AudioChunkResult> {
        if body.input.text.len() + body.input.prompt.len() > PAYLOAD_CEILING_BYTES {
            warn!(
                target = "synth",
                chunk = index,
                text_bytes = body.input.text.len(),
                prompt_bytes = body.input.prompt.len(),
                "Payload over ceiling; replacing directive with fallback"
            );
            body.input.prompt = FALLBACK_DIRECTIVE.to_string();
        }

        let encoding = body.audio_config.audio_encoding;
        let mut attempt = 0u32;
        let response = loop {
            attempt += 1;
            match self.transport.dispatch(&body).await {
                Ok(resp) => break resp,
                Err(e) if e.is_retriable() && attempt < self.max_attempts => {
                    let delay = Duration::from_secs(1 << (attempt - 1));
                    warn!(
                        target = "synth",
                        chunk = index,
                        attempt,
                        delay_secs = delay.as_secs(),
                        error = %e,
                        "Retriable synthesis failure; backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) if e.is_retriable() => {
                    return Err(TtsError::ChunkFailed {
                        index,
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                // Auth and remote validation failures propagate immediately
                // without consuming retry budget.
                Err(e) => return Err(e),
            }
        };

        let bytes = BASE64
            .decode(response.audio_content.as_bytes())
            .map_err(|e| TtsError::Remote {
                status: 200,
                detail: format!("invalid base64 audio content: {e}"),
            })?;

        debug!(
            target = "synth",
            chunk = index,
            audio_bytes = bytes.len(),
            attempts = attempt,
            "Chunk synthesized"
        );

        Ok(AudioChunkResult {
            index,
            bytes,
            encoding,
            duration_secs: response.audio_duration,
        })
    }
}
