//! `strukt` CLI — structural operations on JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Deep-merge two or more JSON files (later files win on conflicts)
//! strukt merge base.json overlay.json
//!
//! # Merge stdin into a file
//! echo '{"a":1}' | strukt merge - overrides.json
//!
//! # Deep intersection of two documents
//! strukt intersect left.json right.json
//!
//! # One-level intersection (nested entries compared by whole-value equality)
//! strukt intersect --shallow left.json right.json
//!
//! # Prune empty entries (null, false, 0, "", empty containers), recursively
//! echo '{"a":1,"b":null,"c":[]}' | strukt filter
//!
//! # Canonicalize a document
//! strukt convert -i data.json -o canonical.json
//! ```
//!
//! Every subcommand reads JSON, applies the operation from `strukt-core`,
//! and writes pretty-printed JSON to stdout or `-o`. The special input
//! path `-` means stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use strukt_core::{Limits, Value};

#[derive(Parser)]
#[command(name = "strukt", version, about = "Structural JSON operations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum recursion depth for nested documents
    #[arg(long, global = true)]
    max_depth: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge documents left to right; later documents win on conflicts
    Merge {
        /// Input files, merged in order (`-` reads stdin; none reads stdin)
        inputs: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Intersect two documents
    Intersect {
        /// Left document (`-` reads stdin)
        left: String,
        /// Right document (`-` reads stdin)
        right: String,
        /// One-level intersection instead of the deep walk
        #[arg(long)]
        shallow: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Drop empty entries (null, false, 0, "", empty containers), recursively
    Filter {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Canonicalize a document
    Convert {
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
    let limits = match cli.max_depth {
        Some(max_depth) => Limits::with_max_depth(max_depth),
        None => Limits::default(),
    };

    match cli.command {
        Commands::Merge { inputs, output } => {
            let values = if inputs.is_empty() {
                vec![read_value(None)?]
            } else {
                inputs
                    .iter()
                    .map(|path| read_value(Some(path.as_str())))
                    .collect::<Result<Vec<_>>>()?
            };
            let merged =
                strukt_core::merge_with(values, limits).context("Failed to merge documents")?;
            write_value(output.as_deref(), &merged)?;
        }
        Commands::Intersect {
            left,
            right,
            shallow,
            output,
        } => {
            let left = read_value(Some(left.as_str()))?;
            let right = read_value(Some(right.as_str()))?;
            let common = if shallow {
                strukt_core::intersect_with(&left, &right, limits)
            } else {
                strukt_core::intersect_deep_with(&left, &right, limits)
            }
            .context("Failed to intersect documents")?;
            write_value(output.as_deref(), &common)?;
        }
        Commands::Filter { input, output } => {
            let subject = read_value(input.as_deref())?;
            let kept = strukt_core::filter_with_limits(&subject, None, limits)
                .context("Failed to filter document")?;
            write_value(output.as_deref(), &kept)?;
        }
        Commands::Convert { input, output } => {
            let subject = read_value(input.as_deref())?;
            let canonical = strukt_core::convert_deep_with(&subject, limits)
                .context("Failed to convert document")?;
            write_value(output.as_deref(), &canonical)?;
        }
    }

    Ok(())
}

/// Read and parse a JSON document from a file, or stdin for `None` / `-`.
fn read_value(path: Option<&str>) -> Result<Value> {
    let raw = match path {
        Some("-") | None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
    };
    let json: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.unwrap_or("stdin")))?;
    Ok(Value::from_json(&json))
}

/// Pretty-print a value as JSON to a file or stdout.
fn write_value(path: Option<&str>, value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&value.to_json())?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
