//! ElevenLabs CLI — 查询模型、音色并合成语音的命令行工具
//!
//! Usage:
//!   elevenlabs-cli models [--json]                     List synthesis models
//!   elevenlabs-cli voices [--json]                     List voices
//!   elevenlabs-cli speak <voice> <text> [--out <file>] Synthesize speech

use anyhow::{bail, Context};
use elevenlabs_kit::{get_client, ElevenLabsClient, TtsOptions};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let rest = &args[2..];
    let outcome = match args[1].as_str() {
        "models" => cmd_models(rest).await,
        "voices" => cmd_voices(rest).await,
        "speak" => cmd_speak(rest).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"elevenlabs-cli — ElevenLabs 命令行工具

USAGE:
    elevenlabs-cli <COMMAND> [OPTIONS]

COMMANDS:
    models [--json]                 List synthesis models available to the account
    voices [--json]                 List voices available to the account
    speak <voice> <text>            Synthesize speech (voice id or name)
        --out <file>                Output file (default: speech.<ext>)
        --model <id>                Model id (default: eleven_multilingual_v2)
        --format <fmt>              Output format (default: mp3_44100_128)
    version                         Show version information
    help                            Show this help message

GLOBAL OPTIONS:
    --api-key <key>                 Use this key instead of ELEVENLABS_API_KEY

ENVIRONMENT:
    ELEVENLABS_API_KEY              API key (also read from a .env file)
    ELEVENLABS_BASE_URL             API root override
    ELEVENLABS_TIMEOUT_SECS         Request timeout in seconds
    ELEVENLABS_PROXY_URL            HTTP(S) proxy
    RUST_LOG                        Log filter (e.g. elevenlabs_kit=debug)"#
    );
}

fn cmd_version() {
    println!("elevenlabs-cli {}", env!("CARGO_PKG_VERSION"));
}

/// Value following `--name`, if present.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Positional arguments, skipping flags and their values.
fn positionals(args: &[String]) -> Vec<&str> {
    const VALUED: &[&str] = &["--api-key", "--out", "--model", "--format"];
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUED.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

fn client(args: &[String]) -> anyhow::Result<Arc<ElevenLabsClient>> {
    Ok(get_client(flag_value(args, "--api-key"))?)
}

async fn cmd_models(args: &[String]) -> anyhow::Result<()> {
    let client = client(args)?;
    let models = client.list_models().await?;

    if has_flag(args, "--json") {
        let maps: Vec<_> = models.iter().map(|m| m.to_map()).collect();
        println!("{}", serde_json::to_string_pretty(&maps)?);
        return Ok(());
    }

    println!("{} models:", models.len());
    for model in &models {
        let languages = model.language_ids();
        println!(
            "  {:<32} {:<36} tts={:<5} languages={}",
            model.display_id(),
            model.name.as_deref().unwrap_or("-"),
            model.supports_text_to_speech(),
            if languages.is_empty() {
                "-".to_string()
            } else {
                languages.join(",")
            }
        );
    }
    Ok(())
}

async fn cmd_voices(args: &[String]) -> anyhow::Result<()> {
    let client = client(args)?;
    let voices = client.list_voices().await?;

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&voices)?);
        return Ok(());
    }

    println!("{} voices:", voices.len());
    for voice in &voices {
        println!(
            "  {:<24} {:<20} {}",
            voice.resolved_id().unwrap_or("-"),
            voice.name,
            voice.category.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

async fn cmd_speak(args: &[String]) -> anyhow::Result<()> {
    let pos = positionals(args);
    let (query, text) = match pos.as_slice() {
        [voice, words @ ..] if !words.is_empty() => (*voice, words.join(" ")),
        _ => bail!("usage: elevenlabs-cli speak <voice> <text> [--out <file>]"),
    };

    let client = client(args)?;
    let voice_id = match client.find_voice(query).await? {
        Some(voice) => voice
            .resolved_id()
            .map(str::to_string)
            .with_context(|| format!("voice '{}' has no id", voice.name))?,
        // Not in the account's list; let the service judge the raw id.
        None => query.to_string(),
    };

    let mut options = TtsOptions::default();
    if let Some(model) = flag_value(args, "--model") {
        options = options.with_model(model);
    }
    if let Some(format) = flag_value(args, "--format") {
        options = options.with_output_format(format);
    }

    let audio = client
        .text_to_speech_stream(&voice_id, &text, &options)
        .await?;
    let out = flag_value(args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("speech.{}", audio.format.extension())));
    let output_format = audio.output_format.clone();
    let written = audio
        .write_to(&out)
        .await
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Wrote {} bytes ({}) to {}", written, output_format, out.display());
    Ok(())
}
