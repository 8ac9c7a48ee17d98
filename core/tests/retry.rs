use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tokio::time::{Duration, Instant};

use lectern_core::synth::{
    AudioConfig, AudioEncoding, SynthesisClient, SynthesisInput, SynthesisTransport,
    SynthesizeBody, SynthesizeResponse, VoiceSelection,
};
use lectern_core::{Result, TtsError};

/// Replays a scripted sequence of outcomes and records when and with what
/// body each dispatch happened.
struct ScriptedTransport {
    script: Mutex<VecDeque<Result<SynthesizeResponse>>>,
    calls: Mutex<Vec<(Instant, SynthesizeBody)>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<SynthesizeResponse>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    fn call_bodies(&self) -> Vec<SynthesizeBody> {
        self.calls.lock().unwrap().iter().map(|(_, b)| b.clone()).collect()
    }
}

#[async_trait]
impl SynthesisTransport for ScriptedTransport {
    async fn dispatch(&self, body: &SynthesizeBody) -> Result<SynthesizeResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), body.clone()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("transport dispatched more times than scripted"))
    }
}

fn ok_response() -> SynthesizeResponse {
    SynthesizeResponse {
        audio_content: BASE64.encode(b"pcm-data"),
        audio_duration: Some(1.5),
    }
}

fn body(text: &str, prompt: &str) -> SynthesizeBody {
    SynthesizeBody {
        input: SynthesisInput {
            text: text.to_string(),
            prompt: prompt.to_string(),
        },
        voice: VoiceSelection {
            language_code: "en-US".to_string(),
            name: "Achernar".to_string(),
            model_name: "gemini-2.5-pro-tts".to_string(),
        },
        audio_config: AudioConfig {
            audio_encoding: AudioEncoding::Linear16,
            pitch: 0.0,
            speaking_rate: 1.0,
        },
    }
}

#[tokio::test(start_paused = true)]
async fn two_timeouts_then_success_backs_off_one_then_two_seconds() {
    let transport = ScriptedTransport::new(vec![
        Err(TtsError::Timeout("t1".into())),
        Err(TtsError::Timeout("t2".into())),
        Ok(ok_response()),
    ]);
    let client = SynthesisClient::new(transport.clone(), 3);

    let started = Instant::now();
    let result = client
        .synthesize_chunk(0, body("hello", "warmly"))
        .await
        .unwrap();

    assert_eq!(result.bytes, b"pcm-data");
    assert_eq!(result.duration_secs, Some(1.5));

    let times = transport.call_times();
    assert_eq!(times.len(), 3);
    assert_eq!(times[1] - times[0], Duration::from_secs(1));
    assert_eq!(times[2] - times[1], Duration::from_secs(2));
    // No sleep after the final success.
    assert_eq!(started.elapsed(), Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn retry_budget_exhaustion_names_the_chunk_and_attempts() {
    let transport = ScriptedTransport::new(vec![
        Err(TtsError::Transient("s1".into())),
        Err(TtsError::Timeout("s2".into())),
        Err(TtsError::Transient("s3".into())),
    ]);
    let client = SynthesisClient::new(transport.clone(), 3);

    let err = client
        .synthesize_chunk(4, body("hello", "warmly"))
        .await
        .unwrap_err();

    match err {
        TtsError::ChunkFailed {
            index,
            attempts,
            source,
        } => {
            assert_eq!(index, 4);
            assert_eq!(attempts, 3);
            assert!(matches!(*source, TtsError::Transient(_)));
        }
        other => panic!("expected ChunkFailed, got {other:?}"),
    }
    assert_eq!(transport.call_times().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn remote_errors_propagate_without_retry_or_sleep() {
    let transport = ScriptedTransport::new(vec![Err(TtsError::Remote {
        status: 400,
        detail: "bad voice".into(),
    })]);
    let client = SynthesisClient::new(transport.clone(), 3);

    let started = Instant::now();
    let err = client
        .synthesize_chunk(0, body("hello", "warmly"))
        .await
        .unwrap_err();

    assert!(matches!(err, TtsError::Remote { status: 400, .. }));
    assert_eq!(transport.call_times().len(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn auth_errors_propagate_without_retry() {
    let transport = ScriptedTransport::new(vec![Err(TtsError::Auth("expired".into()))]);
    let client = SynthesisClient::new(transport.clone(), 3);

    let err = client
        .synthesize_chunk(0, body("hello", "warmly"))
        .await
        .unwrap_err();

    assert!(matches!(err, TtsError::Auth(_)));
    assert_eq!(transport.call_times().len(), 1);
}

#[tokio::test]
async fn oversized_payload_degrades_directive_instead_of_failing() {
    let transport = ScriptedTransport::new(vec![Ok(ok_response())]);
    let client = SynthesisClient::new(transport.clone(), 3);

    let text = "x".repeat(3900);
    let long_prompt = "y".repeat(300);
    client
        .synthesize_chunk(0, body(&text, &long_prompt))
        .await
        .unwrap();

    let bodies = transport.call_bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].input.prompt, "Speak clearly and naturally.");
    assert_eq!(bodies[0].input.text, text);
}
