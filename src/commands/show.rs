//! `trellis show` command - report the graph's structure
//!
//! Prints order, size, direction, completeness, and the node and link
//! lists in insertion order.

use serde::Serialize;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::WeightedGraph;
use trellis_core::link::{LinkKind, Weighted, WeightedLink};

use crate::cli::Cli;
use crate::commands::helpers::payload_or_unknown;

#[derive(Serialize)]
struct ShowReport {
    directed: bool,
    order: usize,
    size: usize,
    complete: bool,
    nodes: Vec<String>,
    links: Vec<LinkReport>,
}

#[derive(Serialize)]
struct LinkReport {
    from: String,
    to: String,
    weight: f64,
}

/// Execute the show command
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>) -> Result<()> {
    let report = ShowReport {
        directed: graph.is_directed(),
        order: graph.order(),
        size: graph.size(),
        complete: graph.is_complete(),
        nodes: graph.nodes().iter().map(|node| node.data().clone()).collect(),
        links: graph
            .links()
            .iter()
            .map(|link| link_report(graph, link))
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            let kind = if report.directed { "directed" } else { "undirected" };
            println!(
                "{} graph: order {}, size {}, complete: {}",
                kind, report.order, report.size, report.complete
            );
            for node in &report.nodes {
                println!("  ({})", node);
            }
            for link in &report.links {
                println!("  ({}) --{}--> ({})", link.from, link.weight, link.to);
            }
        }
    }

    Ok(())
}

fn link_report(graph: &WeightedGraph<String>, link: &WeightedLink) -> LinkReport {
    let (x, y) = link.endpoints();
    LinkReport {
        from: payload_or_unknown(graph, x),
        to: payload_or_unknown(graph, y),
        weight: link.weight(),
    }
}
