//! ddlkit CLI
//!
//! Parses a script of CREATE / ATTACH statements and prints the syntax trees.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use ddlkit_core::parser::DEFAULT_MAX_DEPTH;
use ddlkit_core::{CreateQuery, ParseOptions};

/// Parse ClickHouse-style CREATE and ATTACH statements.
#[derive(Parser)]
#[command(name = "ddlkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script to parse. Reads standard input when absent or `-`.
    file: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, env = "DDLKIT_FORMAT", value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Maximum expression nesting depth.
    #[arg(long, env = "DDLKIT_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed Rust debug output.
    Debug,
    /// JSON array of statements.
    Json,
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}

fn render(queries: &[CreateQuery], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Debug => Ok(queries
            .iter()
            .map(|query| format!("{query:#?}"))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => {
            serde_json::to_string_pretty(queries).context("failed to serialize statements")
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = read_input(cli.file.as_ref())?;
    debug!(bytes = source.len(), max_depth = cli.max_depth, "parsing input");

    let options = ParseOptions::default().max_depth(cli.max_depth);
    let queries = ddlkit_core::Parser::with_options(&source, options)
        .parse_create_queries()
        .context("failed to parse input")?;
    info!("Parsed {} statement(s).", queries.len());

    println!("{}", render(&queries, cli.format)?);
    Ok(())
}
