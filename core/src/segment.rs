//! Byte-bounded text segmentation at sentence boundaries
//!
//! Splits oversized input into chunks that fit the remote payload budget
//! alongside their style directive. Pure and deterministic; no I/O.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

/// Headroom left per chunk for punctuation drift and joining whitespace.
const SAFETY_MARGIN_BYTES: usize = 50;

// Sentence terminator run followed by whitespace; the split point is after
// the terminators, the whitespace run is consumed.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?]+)(\s+)").unwrap());

/// One bounded slice of the original text, dispatched as a single remote
/// synthesis call. `index` defines final audio order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
    pub byte_len: usize,
}

impl TextChunk {
    fn new(index: usize, text: String) -> Self {
        let byte_len = text.len();
        Self {
            index,
            text,
            byte_len,
        }
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last = 0;
    for caps in SENTENCE_BOUNDARY.captures_iter(text) {
        let terminator_end = caps.get(1).unwrap().end();
        let sentence = text[last..terminator_end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last = caps.get(0).unwrap().end();
    }
    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Split `text` into ordered chunks whose byte length stays within
/// `budget_bytes` minus `reserved_bytes` of directive headroom.
///
/// A single sentence longer than the budget is emitted as its own oversized
/// chunk rather than being cut mid-sentence; the downstream client degrades
/// the directive for such chunks instead of failing them.
pub fn segment(text: &str, reserved_bytes: usize, budget_bytes: usize) -> Vec<TextChunk> {
    // Fast path: comfortably inside the budget, no splitting needed.
    if text.len() <= budget_bytes / 2 {
        return vec![TextChunk::new(0, text.to_string())];
    }

    let available = budget_bytes
        .saturating_sub(reserved_bytes)
        .saturating_sub(SAFETY_MARGIN_BYTES)
        .max(1);

    let mut chunks: Vec<TextChunk> = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        let joined_len = if current.is_empty() {
            sentence.len()
        } else {
            current.len() + 1 + sentence.len()
        };

        if joined_len <= available {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
            continue;
        }

        if !current.is_empty() {
            chunks.push(TextChunk::new(chunks.len(), std::mem::take(&mut current)));
        }

        if sentence.len() > available {
            // Documented limitation: an unbreakable sentence ships oversized.
            warn!(
                target = "segment",
                bytes = sentence.len(),
                budget = budget_bytes,
                "Sentence exceeds chunk budget; emitting oversized chunk"
            );
            chunks.push(TextChunk::new(chunks.len(), sentence.to_string()));
        } else {
            current.push_str(sentence);
        }
    }

    if !current.is_empty() {
        chunks.push(TextChunk::new(chunks.len(), current));
    }

    debug!(
        target = "segment",
        total_bytes = text.len(),
        chunks = chunks.len(),
        "Segmented text"
    );
    chunks
}
