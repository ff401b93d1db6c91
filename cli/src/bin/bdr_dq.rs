//! `bdr-dq`: runs data quality assessments over an occurrence graph and
//! exports the quality vocabulary.
//!
//! **Usage:**
//! ```text
//! bdr-dq assess <PATH> [-s] [--config <FILE>] [--only <KIND>]... [--format turtle|ntriples] [--out <FILE>]
//! bdr-dq definitions [--out <FILE>]
//! bdr-dq template [--out <FILE>]
//! bdr-dq -v
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the default `info` level); graph
//! and JSON output goes to stdout unless `--out` is given.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use dq_assess::{merge_outcomes, AssessConfig, AssessmentKind, Assessor};
use dq_graph::serializer::{ntriples, turtle};
use dq_graph::load_data;
use dq_vocab::Registry;
use tracing_subscriber::EnvFilter;

/// Assess biodiversity occurrence graphs for data quality.
#[derive(Parser)]
#[command(
    name = "bdr-dq",
    version,
    disable_version_flag = true,
    about = "BDR data quality assessments"
)]
struct Args {
    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a Turtle or N-Triples file and print the result statements.
    Assess {
        /// Graph to assess (`.nt` is read as N-Triples, anything else as Turtle).
        path: PathBuf,
        /// Announce shape validation before assessing.
        #[arg(short = 's', long)]
        shacl_validate: bool,
        /// TOML assessment configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Run only these assessments (repeatable); overrides the configuration.
        #[arg(long = "only")]
        only: Vec<AssessmentKind>,
        /// Serialization of the result graph.
        #[arg(long, value_enum, default_value_t = Format::Turtle)]
        format: Format,
        /// Write results here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print every label definition as a Turtle concept scheme.
    Definitions {
        /// Write the definitions here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the use-case review template and definitions table as JSON.
    Template {
        /// Write the template here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Turtle,
    Ntriples,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Assess {
            path,
            shacl_validate,
            config,
            only,
            format,
            out,
        } => {
            let mut config = match config {
                Some(file) => AssessConfig::load(&file)
                    .with_context(|| format!("Failed to load config {}", file.display()))?,
                None => AssessConfig::default(),
            };
            if !only.is_empty() {
                config.assessments = only;
            }
            if shacl_validate {
                tracing::info!(path = %path.display(), "shape validation requested; no shapes are bundled");
            }
            let graph = load_data(path.as_path())
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!(statements = graph.len(), path = %path.display(), "loaded graph");

            let outcomes = Assessor::new(config).run_all(&graph);
            let results = merge_outcomes(&outcomes);
            let skipped: usize = outcomes.iter().map(|o| o.skipped_count()).sum();
            tracing::info!(statements = results.len(), skipped, "assessment run complete");

            let text = match format {
                Format::Turtle => turtle::to_turtle(&results),
                Format::Ntriples => ntriples::to_ntriples(&results),
            };
            emit(out.as_deref(), &text)
        }
        Command::Definitions { out } => {
            let text = turtle::to_turtle(&Registry::full().definition_graph());
            emit(out.as_deref(), &text)
        }
        Command::Template { out } => {
            let template = Registry::full().review_template();
            let json = serde_json::to_string_pretty(&template)
                .context("Failed to serialize review template to JSON")?;
            emit(out.as_deref(), &json)
        }
    }
}

fn emit(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "written");
        }
        None => print!("{text}"),
    }
    Ok(())
}
