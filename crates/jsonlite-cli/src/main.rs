//! `jsonlite` CLI — convert between standard JSON and the extended-escaped
//! jsonlite wire format, and build RPC call envelopes.
//!
//! ## Usage
//!
//! ```sh
//! # Standard JSON → jsonlite text (stdin → stdout)
//! echo '{"note":"a,b"}' | jsonlite encode
//!
//! # Encode from file to file
//! jsonlite encode -i data.json -o data.jsonl
//!
//! # jsonlite text → standard JSON
//! jsonlite decode -i data.jsonl
//!
//! # Pretty-printed output
//! jsonlite decode -i data.jsonl --pretty
//!
//! # Build an RPC call envelope from a params array
//! echo '[2,3]' | jsonlite call --method add
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonlite_core::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jsonlite",
    version,
    about = "Extended-escaped JSON codec CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode standard JSON into jsonlite text
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode jsonlite text back into standard JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Build an RPC call envelope from a method name and a JSON params array
    Call {
        /// Method name to call (unprefixed)
        #[arg(short, long)]
        method: String,
        /// Input file with the params array (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let parsed: serde_json::Value =
                serde_json::from_str(&json).context("Input is not valid JSON")?;
            let value = Value::from(parsed);
            write_output(output.as_deref(), &jsonlite_core::encode(&value))?;
        }
        Commands::Decode {
            input,
            output,
            pretty,
        } => {
            let text = read_input(input.as_deref())?;
            let value = jsonlite_core::decode(&text).context("Failed to decode input")?;
            let json = serde_json::Value::from(&value);
            let rendered = if pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Call {
            method,
            input,
            output,
        } => {
            let json = read_input(input.as_deref())?;
            let parsed: serde_json::Value =
                serde_json::from_str(&json).context("Params are not valid JSON")?;
            let params = match Value::from(parsed) {
                Value::Sequence(items) => items,
                _ => anyhow::bail!("Params must be a JSON array"),
            };
            write_output(
                output.as_deref(),
                &jsonlite_core::encode_call(&method, &params),
            )?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
