use lectern_core::combine::combine;
use lectern_core::synth::{AudioChunkResult, AudioEncoding};
use lectern_core::TtsError;

/// Minimal valid WAV: RIFF magic, 40 filler header bytes, then samples.
fn wav(samples: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(44 + samples.len());
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&[0u8; 40]);
    buf.extend_from_slice(samples);
    buf
}

fn chunk(index: usize, bytes: Vec<u8>, encoding: AudioEncoding) -> AudioChunkResult {
    AudioChunkResult {
        index,
        bytes,
        encoding,
        duration_secs: None,
    }
}

#[test]
fn empty_input_is_a_combine_error() {
    let err = combine(vec![], AudioEncoding::Linear16).unwrap_err();
    assert!(matches!(err, TtsError::Combine(_)));
}

#[test]
fn single_chunk_returns_verbatim() {
    let bytes = wav(&[7, 8, 9]);
    let out = combine(
        vec![chunk(0, bytes.clone(), AudioEncoding::Linear16)],
        AudioEncoding::Linear16,
    )
    .unwrap();
    assert_eq!(out.bytes, bytes);
    assert!(!out.degraded);
}

#[test]
fn linear16_chunks_concatenate_with_one_header() {
    let c1 = wav(&[1, 1, 1, 1]);
    let c2 = wav(&[2, 2]);
    let (l1, l2) = (c1.len(), c2.len());

    let out = combine(
        vec![
            chunk(0, c1.clone(), AudioEncoding::Linear16),
            chunk(1, c2, AudioEncoding::Linear16),
        ],
        AudioEncoding::Linear16,
    )
    .unwrap();

    assert_eq!(out.bytes.len(), l1 + l2 - 44);
    assert_eq!(&out.bytes[..44], &c1[..44]);
    assert_eq!(&out.bytes[l1..], &[2, 2]);
    assert!(!out.degraded);
}

#[test]
fn headerless_pcm_chunks_concatenate_untouched() {
    // ALAW/MULAW payloads without a RIFF header must not lose bytes.
    let out = combine(
        vec![
            chunk(0, vec![5; 100], AudioEncoding::Mulaw),
            chunk(1, vec![6; 100], AudioEncoding::Mulaw),
        ],
        AudioEncoding::Mulaw,
    )
    .unwrap();
    assert_eq!(out.bytes.len(), 200);
}

#[test]
fn mp3_multi_chunk_degrades_to_first_chunk() {
    let first = vec![0xFF, 0xFB, 0x90, 0x00, 1, 2, 3];
    let out = combine(
        vec![
            chunk(0, first.clone(), AudioEncoding::Mp3),
            chunk(1, vec![9; 50], AudioEncoding::Mp3),
        ],
        AudioEncoding::Mp3,
    )
    .unwrap();
    assert_eq!(out.bytes, first);
    assert!(out.degraded);
    assert_eq!(out.encoding, AudioEncoding::Mp3);
}
