//! Bearer-token material for the outbound synthesis call
//!
//! Token acquisition itself (service-account OAuth and friends) lives
//! outside this crate; callers plug it in through [`AccessTokenProvider`].
//! [`SharedToken`] is the process-wide, read-mostly cache: concurrent chunk
//! calls read the same token, and a refresh never races an in-flight reader
//! because readers clone the string out under the lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use tracing::debug;

use crate::{Result, TtsError};

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Fetch a fresh bearer token together with its lifetime.
    async fn fetch_token(&self) -> Result<(String, Duration)>;
}

/// Reads a pre-acquired static token from `TTS_ACCESS_TOKEN`.
pub struct EnvTokenProvider;

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn fetch_token(&self) -> Result<(String, Duration)> {
        let token = std::env::var("TTS_ACCESS_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TtsError::Auth("TTS_ACCESS_TOKEN is not set".to_string()))?;
        // Static tokens get a nominal hour before a re-read.
        Ok((token, Duration::from_secs(3600)))
    }
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Shared, refreshable token cache with a bounded lifetime.
pub struct SharedToken {
    provider: Arc<dyn AccessTokenProvider>,
    cached: RwLock<Option<CachedToken>>,
}

impl SharedToken {
    pub fn new(provider: Arc<dyn AccessTokenProvider>) -> Self {
        Self {
            provider,
            cached: RwLock::new(None),
        }
    }

    /// Current token, refreshing through the provider when expired.
    pub async fn current(&self) -> Result<String> {
        {
            let guard = self.cached.read().await;
            if let Some(tok) = guard.as_ref() {
                if Instant::now() < tok.expires_at {
                    return Ok(tok.value.clone());
                }
            }
        }

        let mut guard = self.cached.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(tok) = guard.as_ref() {
            if Instant::now() < tok.expires_at {
                return Ok(tok.value.clone());
            }
        }

        let (value, ttl) = self.provider.fetch_token().await?;
        debug!(target = "synth", ttl_secs = ttl.as_secs(), "Refreshed access token");
        // Refresh slightly early so a token never expires mid-retry.
        let expires_at = Instant::now() + ttl.saturating_sub(Duration::from_secs(30));
        let out = value.clone();
        *guard = Some(CachedToken { value, expires_at });
        Ok(out)
    }
}
