// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line front end: embed, extract and inspect export payloads.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chatskin_core::{embed_with, extract_with, CodecConfig, EmbedPolicy, ExportRecord, PngContainer};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chatskin", about = "Hide chat theme exports in PNG images")]
struct Cli {
    /// TOML file with `keyword` and `policy`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the payload keyword.
    #[arg(long, global = true)]
    keyword: Option<String>,
    /// Keep earlier payloads instead of replacing them.
    #[arg(long, global = true)]
    append: bool,
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a payload into an image.
    Embed {
        image: PathBuf,
        /// JSON export file; validated before embedding.
        #[arg(long, conflicts_with = "text", required_unless_present = "text")]
        json: Option<PathBuf>,
        /// Raw text to embed as-is.
        #[arg(long)]
        text: Option<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the payload stored in an image. Exits with 1 if there is none.
    Extract {
        image: PathBuf,
        /// Pretty-print the payload as JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// List the chunks of an image.
    Inspect { image: PathBuf },
    /// Report whether a file is a well-formed PNG.
    Check { image: PathBuf },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<CodecConfig> {
    let base = match &cli.config {
        Some(path) => CodecConfig::load(path)?,
        None => CodecConfig::default(),
    };
    let mut builder = CodecConfig::builder().keyword(cli.keyword.clone().unwrap_or(base.keyword));
    builder = builder.policy(if cli.append { EmbedPolicy::Append } else { base.policy });
    Ok(builder.build()?)
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// How a command finished, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// No payload found, or the file is not a usable PNG.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Execute `cli`, writing command output to `out`. Diagnostics go to stderr.
fn run(cli: Cli, out: &mut dyn Write) -> Result<Outcome> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Embed { image, json, text, output } => {
            let payload = match (json, text) {
                (Some(path), _) => {
                    let s = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    ExportRecord::from_json(&s)
                        .with_context(|| format!("{} is not an export document", path.display()))?;
                    s
                }
                (None, Some(text)) => text,
                (None, None) => bail!("either --json or --text is required"),
            };
            let cover = read_image(&image)?;
            let embedded = embed_with(&cover, &payload, &config)
                .with_context(|| format!("failed to embed into {}", image.display()))?;
            fs::write(&output, &embedded).with_context(|| format!("failed to write {}", output.display()))?;
            eprintln!("wrote {} ({} -> {} bytes)", output.display(), cover.len(), embedded.len());
        }
        Command::Extract { image, pretty } => {
            let data = read_image(&image)?;
            let Some(text) = extract_with(&data, &config)
                .with_context(|| format!("failed to read payload from {}", image.display()))?
            else {
                eprintln!("no payload with keyword {:?}", config.keyword);
                return Ok(Outcome::Failure);
            };
            if pretty {
                let value: serde_json::Value =
                    serde_json::from_str(&text).context("payload is not JSON")?;
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(out, "{text}")?;
            }
        }
        Command::Inspect { image } => {
            let data = read_image(&image)?;
            let png = PngContainer::from_bytes(&data)
                .with_context(|| format!("failed to parse {}", image.display()))?;
            for chunk in png.summary() {
                writeln!(out, "{}  {:>10}  crc={:08x}", chunk.chunk_type, chunk.len, chunk.crc)?;
            }
            for text in png.text_chunks() {
                writeln!(out, "text {:?}: {} bytes", text.keyword, text.text.len())?;
            }
            if !png.trailing().is_empty() {
                writeln!(out, "trailing data: {} bytes", png.trailing().len())?;
            }
        }
        Command::Check { image } => {
            let data = read_image(&image)?;
            match PngContainer::from_bytes(&data) {
                Ok(png) => writeln!(out, "ok: {} chunks", png.chunks().len())?,
                Err(e) if e.is_foreign_format() => {
                    writeln!(out, "not a PNG")?;
                    return Ok(Outcome::Failure);
                }
                Err(e) => {
                    writeln!(out, "corrupt PNG: {e}")?;
                    return Ok(Outcome::Failure);
                }
            }
        }
    }
    Ok(Outcome::Success)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli, &mut std::io::stdout().lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
