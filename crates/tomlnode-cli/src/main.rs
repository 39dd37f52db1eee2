//! `tomlnode` CLI — parse, check and inspect TOML files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert TOML to pretty JSON (stdin → stdout)
//! echo 'port = 8080' | tomlnode parse
//!
//! # toml-test tagged JSON, from file to file
//! tomlnode parse --format tagged -i config.toml -o config.json
//!
//! # Redact credentials before dumping
//! tomlnode parse --filter-preset secrets -i config.toml
//!
//! # Validate only
//! tomlnode check -i config.toml
//!
//! # Read one value by dotted path
//! tomlnode get server.port -i config.toml
//!
//! # Outline of keys and value types
//! tomlnode inspect -i config.toml
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default
//! `tomlnode=warn`); `--verbose` raises it to debug.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::process;
use tomlnode_core::{filter_keys, to_tagged_json, Node, NodeType, RedactPreset};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tomlnode",
    version,
    about = "Parse TOML into a flat tagged-value tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert TOML to JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// JSON shape to emit
        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,
        /// Comma-separated key patterns to remove before output
        #[arg(long)]
        filter: Option<String>,
        /// Use a predefined filter preset (e.g., "secrets")
        #[arg(long)]
        filter_preset: Option<String>,
    },
    /// Validate TOML and report the first error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dotted key path as JSON
    Get {
        /// Dotted key path, e.g. "server.port"
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print an indented outline of keys and value types
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Tables as objects, scalars as native JSON values (inf and nan become
    /// null; use tagged to keep them)
    Plain,
    /// toml-test encoding: every scalar as {"type", "value"}
    Tagged,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            input,
            output,
            format,
            filter,
            filter_preset,
        } => {
            let text = read_input(input.as_deref())?;
            let root = parse_document(&text, input.as_deref())?;

            let patterns = build_filter_patterns(filter.as_deref(), filter_preset.as_deref())?;
            let root = if patterns.is_empty() {
                root
            } else {
                let pattern_refs: Vec<&str> = patterns.iter().map(|s| s.as_str()).collect();
                filter_keys(&root, &pattern_refs)
            };

            let json = match format {
                Format::Plain => serde_json::to_string_pretty(&root)?,
                Format::Tagged => serde_json::to_string_pretty(&to_tagged_json(&root))?,
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let result = tomlnode_core::parse(&text);
            match result.error() {
                None => println!("OK"),
                Some(err) => {
                    eprintln!(
                        "{}:{}:{}: {}",
                        input.as_deref().unwrap_or("<stdin>"),
                        err.line,
                        err.column,
                        err.description
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref())?;
            let root = parse_document(&text, input.as_deref())?;
            match root.get_path(&path) {
                Some(node) => println!("{}", serde_json::to_string_pretty(node)?),
                None => {
                    eprintln!("Key not found: {}", path);
                    process::exit(1);
                }
            }
        }
        Commands::Inspect { input } => {
            let text = read_input(input.as_deref())?;
            let root = parse_document(&text, input.as_deref())?;
            let mut out = String::new();
            outline(&root, 0, &mut out);
            print!("{}", out);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("tomlnode=debug,tomlnode_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tomlnode=warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Parse `text`, turning a grammar failure into an error that names the source.
fn parse_document(text: &str, source: Option<&str>) -> Result<Node> {
    let source = source.unwrap_or("<stdin>");
    tracing::info!(source, "parsing");
    tomlnode_core::parse(text)
        .into_result()
        .with_context(|| format!("Failed to parse {}", source))
}

/// Build key patterns from the --filter and --filter-preset arguments.
///
/// - `--filter password,db.user` produces `["password", "db.user"]`
/// - `--filter-preset secrets` produces the credential patterns
/// - Both can be combined (patterns are merged)
fn build_filter_patterns(filter: Option<&str>, filter_preset: Option<&str>) -> Result<Vec<String>> {
    let mut patterns = Vec::new();

    if let Some(raw) = filter {
        for part in raw.split(',') {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                patterns.push(trimmed.to_string());
            }
        }
    }

    if let Some(preset) = filter_preset {
        match preset {
            "secrets" => {
                for p in RedactPreset::secrets() {
                    patterns.push(p.to_string());
                }
            }
            other => {
                anyhow::bail!(
                    "Unknown filter preset: '{}'. Available presets: secrets",
                    other
                );
            }
        }
    }

    Ok(patterns)
}

/// Render `node`'s children as `key: type` lines, two spaces per level.
/// Array elements are listed as `[i]: type`.
fn outline(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node.get_type() {
        NodeType::Table => {
            for (key, child) in node.entries() {
                out.push_str(&format!("{}{}: {}\n", indent, key, describe(child)));
                outline(child, depth + 1, out);
            }
        }
        NodeType::Array => {
            for (i, child) in node.elements().iter().enumerate() {
                out.push_str(&format!("{}[{}]: {}\n", indent, i, describe(child)));
                outline(child, depth + 1, out);
            }
        }
        _ => {}
    }
}

fn describe(node: &Node) -> String {
    match node.get_type() {
        NodeType::Array => format!("array ({})", node.get_array_size()),
        NodeType::Table => format!("table ({})", node.get_table_size()),
        other => other.as_str().to_string(),
    }
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
