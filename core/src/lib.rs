// Lectern Core Library
// Chunked long-form text-to-speech orchestration runtime

pub mod adjust;
pub mod analysis;
pub mod combine;
pub mod config;
pub mod pipeline;
pub mod prompt;
pub mod segment;
pub mod synth;

// Export core types
pub use adjust::{derive_adjustments, AudioAdjustments};
pub use analysis::{analyze, AnalysisResult};
pub use combine::{combine, CombinedAudio};
pub use config::TtsConfig;
pub use pipeline::{AnalysisOutcome, SynthesisOutcome, SynthesizeOptions, TtsPipeline};
pub use prompt::generate_prompt;
pub use segment::{segment, TextChunk};
pub use synth::{AudioChunkResult, AudioEncoding, SynthesisClient};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Credential error: {0}")]
    Auth(String),

    #[error("Synthesis service error (status {status}): {detail}")]
    Remote { status: u16, detail: String },

    #[error("Synthesis request timed out: {0}")]
    Timeout(String),

    #[error("Transient synthesis failure: {0}")]
    Transient(String),

    #[error("Chunk {index} failed after {attempts} attempt(s): {source}")]
    ChunkFailed {
        index: usize,
        attempts: u32,
        #[source]
        source: Box<TtsError>,
    },

    #[error("Audio combine error: {0}")]
    Combine(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TtsError {
    /// Whether the retry policy may attempt this call again.
    pub fn is_retriable(&self) -> bool {
        matches!(self, TtsError::Timeout(_) | TtsError::Transient(_))
    }
}

pub type Result<T> = std::result::Result<T, TtsError>;
