//! `trellis traverse` command - walk the graph from a root
//!
//! Visits every node reachable from the root in breadth-first or
//! depth-first order and reports the visit sequence.

use serde::Serialize;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::{breadth_first, depth_first, Collector, WeightedGraph};

use crate::cli::{Algo, Cli};
use crate::commands::helpers::payload_or_unknown;

#[derive(Serialize)]
struct TraverseReport {
    algo: String,
    root: String,
    count: usize,
    visited: Vec<String>,
}

/// Execute the traverse command
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>, root: &str, algo: Algo) -> Result<()> {
    let root = root.to_string();
    let mut collector = Collector::new();
    match algo {
        Algo::Bfs => breadth_first(graph, &root, &mut collector)?,
        Algo::Dfs => depth_first(graph, &root, &mut collector)?,
    }

    let visited: Vec<String> = collector
        .visited()
        .iter()
        .map(|id| payload_or_unknown(graph, *id))
        .collect();
    let report = TraverseReport {
        algo: algo.to_string(),
        root,
        count: visited.len(),
        visited,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!(
                "{} from ({}): {} visited",
                report.algo, report.root, report.count
            );
            for payload in &report.visited {
                println!("  ({})", payload);
            }
        }
    }

    Ok(())
}
