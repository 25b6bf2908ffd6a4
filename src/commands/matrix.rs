//! `trellis matrix` command - adjacency matrix export
//!
//! Rows and columns follow node insertion order.

use serde::Serialize;

use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::WeightedGraph;
use trellis_core::matrix::Matrix;

use crate::cli::Cli;

#[derive(Serialize)]
struct MatrixReport {
    order: usize,
    nodes: Vec<String>,
    matrix: Matrix,
}

/// Execute the matrix command
pub fn execute(cli: &Cli, graph: &WeightedGraph<String>) -> Result<()> {
    let report = MatrixReport {
        order: graph.order(),
        nodes: graph.nodes().iter().map(|node| node.data().clone()).collect(),
        matrix: graph.adjacency_matrix(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", report.nodes.join(", "));
            println!("{}", report.matrix);
        }
    }

    Ok(())
}
