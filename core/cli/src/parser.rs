//! Command line argument parsing for the `treestore` binary.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct captures
//! the input path, the query to run and the output options.

use clap::{ArgGroup, Parser};

/// Command line interface definition for `treestore`.
///
/// The input is a JSON array of flat records, each with an integer `id` and an
/// integer `parentId` (`0` marks a root). Parents must appear before their
/// children. Any other fields are carried through unchanged.
///
/// At most one query flag may be given. Without one, the nested structure is
/// printed.
///
/// ## Examples
///
/// Print the nested structure:
/// ```bash
/// treestore items.json
/// ```
///
/// Print the ancestors of item 7, pretty printed:
/// ```bash
/// treestore items.json --parents 7 --pretty
/// ```
///
/// Read the records from stdin:
/// ```bash
/// cat items.json | treestore - --children 1
/// ```
#[derive(Parser)]
#[command(
    name = "treestore",
    author,
    version,
    about = "Query a flat list of parent-referencing records as a tree",
    long_about = "The 'treestore' command indexes a JSON array of records with 'id' and 'parentId' fields \
and prints the result of one query as JSON. Without a query flag the nested structure is printed."
)]
#[command(group(
    ArgGroup::new("query")
        .args(["structure", "all", "item", "children", "parents"])
        .multiple(false)
))]
pub(crate) struct Cli {
    /// Path to a JSON file holding an array of records, or `-` for stdin.
    pub(crate) path: std::path::PathBuf,

    /// Print every item that has children with its nested subtree (default).
    #[clap(long = "structure", action = clap::ArgAction::SetTrue)]
    pub(crate) structure: bool,

    /// Print the records exactly as they were read.
    #[clap(long = "all", action = clap::ArgAction::SetTrue)]
    pub(crate) all: bool,

    /// Print the record with the given id.
    #[clap(long = "item", value_name = "ID")]
    pub(crate) item: Option<u32>,

    /// Print the immediate children of the given id, in input order.
    #[clap(long = "children", value_name = "ID")]
    pub(crate) children: Option<u32>,

    /// Print the ancestors of the given id, nearest first.
    #[clap(long = "parents", value_name = "ID")]
    pub(crate) parents: Option<u32>,

    /// Pretty print the JSON output.
    #[clap(long = "pretty", action = clap::ArgAction::SetTrue)]
    pub(crate) pretty: bool,

    /// Increase log verbosity on stderr (`-v` debug, `-vv` trace).
    ///
    /// `RUST_LOG` takes precedence when set.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

/// The query selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Query {
    Structure,
    All,
    Item(u32),
    Children(u32),
    Parents(u32),
}

impl Cli {
    pub(crate) fn query(&self) -> Query {
        if self.all {
            Query::All
        } else if let Some(id) = self.item {
            Query::Item(id)
        } else if let Some(id) = self.children {
            Query::Children(id)
        } else if let Some(id) = self.parents {
            Query::Parents(id)
        } else {
            Query::Structure
        }
    }
}
