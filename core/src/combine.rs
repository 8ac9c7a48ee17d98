//! Lossless reassembly of per-chunk audio into one buffer
//!
//! PCM-family chunks all carry the same 44-byte RIFF container header,
//! since the pipeline uses one fixed encoding per request. The first chunk
//! is kept whole and the repeated header is stripped from the rest. Compressed containers do not concatenate losslessly; those degrade
//! to the first chunk with a warning rather than failing the request.

use tracing::{debug, warn};

use crate::synth::{AudioChunkResult, AudioEncoding};
use crate::{Result, TtsError};

const WAV_MAGIC: &[u8; 4] = b"RIFF";
const WAV_HEADER_LEN: usize = 44;

/// Final artifact of one synthesis request.
#[derive(Debug, Clone)]
pub struct CombinedAudio {
    pub bytes: Vec<u8>,
    pub encoding: AudioEncoding,
    /// True when multi-chunk output could not be concatenated and only the
    /// first chunk is returned.
    pub degraded: bool,
}

/// Concatenate ordered chunk results into a single buffer.
pub fn combine(results: Vec<AudioChunkResult>, encoding: AudioEncoding) -> Result<CombinedAudio> {
    if results.is_empty() {
        return Err(TtsError::Combine("no audio chunks produced".to_string()));
    }

    if results.len() == 1 {
        let only = results.into_iter().next().unwrap();
        return Ok(CombinedAudio {
            bytes: only.bytes,
            encoding,
            degraded: false,
        });
    }

    if !encoding.is_pcm_family() {
        warn!(
            target = "combine",
            encoding = encoding.as_str(),
            chunks = results.len(),
            "Encoding does not concatenate losslessly; returning first chunk only"
        );
        let first = results.into_iter().next().unwrap();
        return Ok(CombinedAudio {
            bytes: first.bytes,
            encoding,
            degraded: true,
        });
    }

    let mut bytes = Vec::with_capacity(results.iter().map(|r| r.bytes.len()).sum());
    for (i, chunk) in results.into_iter().enumerate() {
        if i == 0 {
            bytes.extend_from_slice(&chunk.bytes);
        } else {
            bytes.extend_from_slice(strip_container_header(&chunk.bytes));
        }
    }

    debug!(
        target = "combine",
        total_bytes = bytes.len(),
        encoding = encoding.as_str(),
        "Combined audio chunks"
    );

    Ok(CombinedAudio {
        bytes,
        encoding,
        degraded: false,
    })
}

fn strip_container_header(bytes: &[u8]) -> &[u8] {
    if bytes.len() >= WAV_HEADER_LEN && bytes[..4] == WAV_MAGIC[..] {
        &bytes[WAV_HEADER_LEN..]
    } else {
        bytes
    }
}
