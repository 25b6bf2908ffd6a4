//! CLI argument parsing for trellis
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;

use trellis_core::format::OutputFormat;

pub use parse::EdgeSpec;
use parse::{parse_edge, parse_format, parse_log_level};

/// Trellis - in-memory graph CLI
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(
        long,
        global = true,
        value_parser = parse_format,
        default_value = "human",
        env = "TRELLIS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_parser = parse_log_level,
        env = "TRELLIS_LOG_LEVEL"
    )]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "TRELLIS_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags that assemble the working graph.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Add a node with the given payload (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append, value_name = "PAYLOAD")]
    pub node: Vec<String>,

    /// Add a link, inserting missing endpoints (can be specified multiple times)
    #[arg(
        long,
        action = clap::ArgAction::Append,
        value_parser = parse_edge,
        value_name = "X:Y[:WEIGHT]"
    )]
    pub edge: Vec<EdgeSpec>,

    /// Treat links as one-way
    #[arg(long)]
    pub directed: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the graph's structure
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Walk the graph from a root node
    Traverse {
        /// Payload of the node to start from
        #[arg(long)]
        root: String,

        /// Traversal order
        #[arg(long, value_enum, default_value = "bfs")]
        algo: Algo,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Compute cheapest routes from a source node
    Shortest {
        /// Payload of the source node
        #[arg(long)]
        from: String,

        /// Also reconstruct the path to this node
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the adjacency matrix
    Matrix {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

/// Traversal orders for the traverse command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    Bfs,
    Dfs,
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algo::Bfs => write!(f, "bfs"),
            Algo::Dfs => write!(f, "dfs"),
        }
    }
}
