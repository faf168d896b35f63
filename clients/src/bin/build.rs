//! `semgraph-build`: Lowers an ontology-definition document into a graph and
//! writes it in every supported format.
//!
//! **Outputs:**
//! - `<out>/<stem>.ttl`: Turtle
//! - `<out>/<stem>.nt`: N-Triples
//! - `<out>/<stem>.jsonld`: JSON-LD
//!
//! **Usage:**
//! ```
//! semgraph-build <document.toml|document.json> [--out <path>] [--base <uri>]
//!                [--infer] [--max-rounds <n>] [--strict-characteristics]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use semgraph::{lower_document, Format, LoweringOptions, Reasoner, ReasonerConfig};
use semgraph_clients::{init_logging, load_document};
use tracing::{info, warn};

/// Build graph artifacts from an ontology-definition document.
#[derive(Parser)]
#[command(
    name = "semgraph-build",
    about = "Lower an ontology document to Turtle, N-Triples and JSON-LD"
)]
struct Args {
    /// Definition document (`.toml` or `.json`).
    document: PathBuf,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Base URI overriding the document's own `base`.
    #[arg(long)]
    base: Option<String>,

    /// Close the graph under the RDFS rules before writing.
    #[arg(long)]
    infer: bool,

    /// Stop entailment after this many rounds.
    #[arg(long, requires = "infer")]
    max_rounds: Option<usize>,

    /// Fail on property characteristics that do not apply to the property kind.
    #[arg(long)]
    strict_characteristics: bool,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut document = load_document(&args.document)?;
    if let Some(base) = args.base {
        document.base = Some(base);
    }

    let options = if args.strict_characteristics {
        LoweringOptions::strict()
    } else {
        LoweringOptions::permissive()
    };
    let mut graph = lower_document(&document, &options)
        .with_context(|| format!("Failed to lower {}", args.document.display()))?;
    info!(
        classes = document.classes.len(),
        properties = document.properties.len(),
        restrictions = document.restrictions.len(),
        individuals = document.individuals.len(),
        statements = graph.len(),
        "lowered document"
    );

    if args.infer {
        let config = ReasonerConfig {
            max_rounds: args.max_rounds,
        };
        let result = Reasoner::new(config).run(graph);
        if !result.reached_fixpoint {
            warn!(rounds = result.rounds, "closure is incomplete");
        }
        info!(rounds = result.rounds, derived = result.derived, "entailment finished");
        graph = result.graph;
    }

    let out = &args.out;
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;
    let stem = args
        .document
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");

    for format in Format::ALL {
        let path = out.join(format!("{stem}.{}", format.extension()));
        let text = format
            .encode(&graph)
            .with_context(|| format!("Failed to encode graph as {format}"))?;
        fs::write(&path, &text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "written");
    }

    info!("build complete");
    Ok(())
}
