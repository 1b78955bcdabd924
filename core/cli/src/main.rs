#![warn(clippy::pedantic)]

//! # Tree Store CLI
//!
//! Command line interface for the tree store.
//!
//! Reads a JSON array of flat records (`{"id": .., "parentId": .., ...}`) from a
//! file or stdin, indexes it, and prints the result of a single query as JSON:
//!
//! * `--structure` – every item with children, with its nested subtree (default).
//! * `--all`       – the records exactly as read.
//! * `--item ID`   – one record.
//! * `--children ID` – the immediate children of a record.
//! * `--parents ID`  – the ancestors of a record, nearest first.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – IO, JSON, ordering or lookup failure.
//!
//! ## Example
//! ```bash
//! treestore items.json --parents 7 --pretty
//! ```

mod parser;
use anyhow::Context;
use clap::Parser;
use parser::{Cli, Query};
use serde::Serialize;
use std::{
    fs,
    io::{self, Read},
    path::Path,
    process,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tree_store::{Record, TreeStore};

/// Entry point for the CLI executable.
///
/// On any failure a diagnostic is printed to stderr and the process exits with code `1`.
fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
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
        .init();
}

fn run(args: &Cli) -> anyhow::Result<String> {
    let source = read_input(&args.path)?;
    let records: Vec<Record> = serde_json::from_str(&source)
        .with_context(|| format!("invalid records in {}", args.path.display()))?;
    debug!(records = records.len(), path = %args.path.display(), "read records");

    let store = TreeStore::new(records)?;
    let query = args.query();
    debug!(?query, "running query");

    match query {
        Query::Structure => render(&store.get_structure(), args.pretty),
        Query::All => render(store.get_all(), args.pretty),
        Query::Item(id) => render(store.get_item(id)?, args.pretty),
        Query::Children(id) => render(&store.get_children(id)?, args.pretty),
        Query::Parents(id) => render(&store.get_all_parents(id)?, args.pretty),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return Ok(source);
    }
    if !path.exists() {
        anyhow::bail!("path not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
