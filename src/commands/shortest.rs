//! `trellis shortest` command - cheapest routes from a source
//!
//! Runs Dijkstra from the source and reports a distance and predecessor
//! for every node, in insertion order. With `--to`, also reconstructs the
//! cheapest path to that node.

use serde::Serialize;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::{dijkstra, CostTable, WeightedGraph};

use crate::cli::Cli;
use crate::commands::helpers::payload_or_unknown;

#[derive(Serialize)]
struct ShortestReport {
    source: String,
    costs: Vec<CostReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathReport>,
}

#[derive(Serialize)]
struct CostReport {
    node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<String>,
}

#[derive(Serialize)]
struct PathReport {
    to: String,
    found: bool,
    nodes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
}

/// Execute the shortest command
pub fn execute(
    cli: &Cli,
    graph: &WeightedGraph<String>,
    from: &str,
    to: Option<&str>,
) -> Result<()> {
    let source = from.to_string();
    let table = dijkstra(graph, &source)?;

    let costs: Vec<CostReport> = graph
        .nodes()
        .iter()
        .map(|node| CostReport {
            node: node.data().clone(),
            distance: table.distance(node.id()),
            via: table
                .predecessor(node.id())
                .map(|id| payload_or_unknown(graph, id)),
        })
        .collect();

    let path = match to {
        Some(target) => Some(path_report(graph, &table, target)?),
        None => None,
    };

    let report = ShortestReport {
        source,
        costs,
        path,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_human(cli, &report),
    }

    Ok(())
}

fn path_report(
    graph: &WeightedGraph<String>,
    table: &CostTable,
    target: &str,
) -> Result<PathReport> {
    let target_id = graph.find_node(&target.to_string())?;
    match table.path_to(target_id) {
        Some(path) => Ok(PathReport {
            to: target.to_string(),
            found: true,
            nodes: path.iter().map(|id| payload_or_unknown(graph, id)).collect(),
            cost: graph.cost(&path).ok(),
        }),
        None => Ok(PathReport {
            to: target.to_string(),
            found: false,
            nodes: Vec::new(),
            cost: None,
        }),
    }
}

fn print_human(cli: &Cli, report: &ShortestReport) {
    println!("shortest from ({})", report.source);
    for cost in &report.costs {
        match (cost.distance, &cost.via) {
            (Some(distance), Some(via)) => {
                println!("  ({}): {} via ({})", cost.node, distance, via)
            }
            (Some(distance), None) => println!("  ({}): {}", cost.node, distance),
            _ => println!("  ({}): unreachable", cost.node),
        }
    }
    if let Some(path) = &report.path {
        if path.found {
            let rendered: Vec<String> = path.nodes.iter().map(|n| format!("({})", n)).collect();
            match path.cost {
                Some(cost) => println!("path: {} [cost {}]", rendered.join("---"), cost),
                None => println!("path: {}", rendered.join("---")),
            }
        } else if !cli.quiet {
            println!("no path to ({})", path.to);
        }
    }
}
