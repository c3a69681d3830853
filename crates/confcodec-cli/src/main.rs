//! `confcodec` CLI: convert, check and normalize config documents.
//!
//! ## Usage
//!
//! ```sh
//! # JSON to config text (stdin → stdout)
//! echo '{"db":{"host":"localhost","port":5432}}' | confcodec encode
//!
//! # Config text back to pretty-printed JSON
//! confcodec decode -i app.conf
//!
//! # Reject documents with unrecognized lines
//! confcodec decode --strict -i app.conf
//! confcodec check -i app.conf
//!
//! # Normalize indentation, drop comments
//! confcodec fmt -i app.conf -o app.conf
//!
//! # Log skipped lines to stderr
//! confcodec -v decode -i app.conf
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use confcodec_core::{DecodeOptions, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "confcodec",
    version,
    about = "Indentation-structured config codec CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON object as a config document
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode a config document to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail on lines that would otherwise be skipped
        #[arg(long)]
        strict: bool,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Validate a config document in strict mode
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-encode a config document with canonical indentation
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let value =
                confcodec_core::from_json_str(&json).context("Failed to read JSON input")?;
            write_output(output.as_deref(), &confcodec_core::encode(&value))?;
        }
        Commands::Decode {
            input,
            output,
            strict,
            compact,
        } => {
            let text = read_input(input.as_deref())?;
            let options = DecodeOptions {
                strict,
                ..DecodeOptions::default()
            };
            let value = confcodec_core::decode_with(&text, &options)
                .context("Failed to decode config document")?;
            let mut json = confcodec_core::to_json_string(&value, !compact)?;
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let value = confcodec_core::decode_with(&text, &DecodeOptions::strict())
                .context("Document is not well-formed")?;
            println!("ok: {} top-level keys", top_level_len(&value));
        }
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = confcodec_core::decode(&text);
            write_output(output.as_deref(), &confcodec_core::encode(&value))?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn top_level_len(value: &Value) -> usize {
    value.as_mapping().map_or(0, |map| map.len())
}

fn read_input(path: Option<&str>) -> Result<String> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    tracing::debug!(source = path.unwrap_or("stdin"), bytes = content.len(), "read input");
    Ok(content)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
