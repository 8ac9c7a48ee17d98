use std::io::Read;
use std::path::PathBuf;

use lectern_core::{SynthesizeOptions, TtsPipeline};
use tracing::info;

fn usage() -> ! {
    eprintln!("Usage: speak <input.txt|-> [output.wav]");
    eprintln!("       speak analyze <input.txt|->");
    eprintln!();
    eprintln!("Env: TTS_ACCESS_TOKEN (required for synthesis), TTS_ENDPOINT,");
    eprintln!("     TTS_VOICE, TTS_LANGUAGE, TTS_MODEL, RUST_LOG");
    std::process::exit(2);
}

fn read_input(arg: &str) -> std::io::Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(arg)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging / tracing
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,lectern_core=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    if args[0] == "analyze" {
        let Some(input) = args.get(1) else { usage() };
        let text = read_input(input)?;
        let pipeline = TtsPipeline::from_env()?;
        let outcome = pipeline.analyze(&text);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let text = read_input(&args[0])?;
    let out_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("speech.wav"));

    let pipeline = TtsPipeline::from_env()?;
    info!(
        target = "speak",
        chars = text.chars().count(),
        voice = %pipeline.cfg.voice_name,
        "Synthesizing"
    );

    let outcome = pipeline
        .synthesize(&text, &SynthesizeOptions::default())
        .await?;

    std::fs::write(&out_path, &outcome.audio)?;
    info!(
        target = "speak",
        path = %out_path.display(),
        bytes = outcome.audio.len(),
        chunks = outcome.generated_prompts.len(),
        encoding = outcome.encoding.as_str(),
        degraded = outcome.degraded_combine,
        "Wrote audio"
    );
    if let Some(secs) = outcome.duration_secs {
        info!(target = "speak", duration_secs = secs, "Reported duration");
    }
    Ok(())
}
