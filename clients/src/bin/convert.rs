//! `semgraph-convert`: Decodes a graph in one format and re-encodes it in
//! another, optionally closing it under the RDFS rules in between.
//!
//! **Usage:**
//! ```
//! semgraph-convert <input> [--from <format>] [--to <format>] [--output <path>]
//!                  [--strict] [--infer] [--max-rounds <n>]
//! ```
//!
//! Formats are `turtle`, `ntriples` and `jsonld`. When `--from` or `--to` is
//! omitted the format is taken from the file extension.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use semgraph::{DecodeOptions, Format, Reasoner, ReasonerConfig};
use semgraph_clients::init_logging;
use tracing::{info, warn};

/// Convert a graph between Turtle, N-Triples and JSON-LD.
#[derive(Parser)]
#[command(
    name = "semgraph-convert",
    about = "Convert a graph between Turtle, N-Triples and JSON-LD"
)]
struct Args {
    /// Input file.
    input: PathBuf,

    /// Input format (default: from the input extension).
    #[arg(long)]
    from: Option<Format>,

    /// Output format (default: from the output extension).
    #[arg(long)]
    to: Option<Format>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail on the first malformed statement instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Close the graph under the RDFS rules before encoding.
    #[arg(long)]
    infer: bool,

    /// Stop entailment after this many rounds.
    #[arg(long, requires = "infer")]
    max_rounds: Option<usize>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let from = match args.from {
        Some(format) => format,
        None => Format::from_path(&args.input).with_context(|| {
            format!("Cannot tell the format of {}; pass --from", args.input.display())
        })?,
    };
    let to = match (args.to, &args.output) {
        (Some(format), _) => format,
        (None, Some(path)) => Format::from_path(path)
            .with_context(|| format!("Cannot tell the format of {}; pass --to", path.display()))?,
        (None, None) => bail!("--to is required when writing to stdout"),
    };

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let options = if args.strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::lenient()
    };
    let mut graph = from
        .decode(&text, &options)
        .with_context(|| format!("Failed to decode {} as {from}", args.input.display()))?;
    info!(statements = graph.len(), format = %from, "decoded");

    if args.infer {
        let result = Reasoner::new(ReasonerConfig {
            max_rounds: args.max_rounds,
        })
        .run(graph);
        if !result.reached_fixpoint {
            warn!(rounds = result.rounds, "closure is incomplete");
        }
        info!(rounds = result.rounds, derived = result.derived, "entailment finished");
        graph = result.graph;
    }

    let encoded = to
        .encode(&graph)
        .with_context(|| format!("Failed to encode graph as {to}"))?;
    match &args.output {
        Some(path) => {
            fs::write(path, &encoded)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %to, "written");
        }
        None => print!("{encoded}"),
    }
    Ok(())
}
