//! Graph assembly from command-line flags

use trellis_core::error::Result;
use trellis_core::graph::WeightedGraph;

use crate::cli::GraphArgs;

/// Build the working graph from `--node`, `--edge`, and `--directed`.
/// Edge endpoints are inserted on first mention; repeated payloads and
/// repeated undirected pairs are ignored.
pub fn assemble(args: &GraphArgs) -> Result<WeightedGraph<String>> {
    let mut graph = if args.directed {
        WeightedGraph::directed()
    } else {
        WeightedGraph::undirected()
    };

    for payload in &args.node {
        graph.insert(payload.clone());
    }
    for edge in &args.edge {
        graph.insert(edge.from.clone());
        graph.insert(edge.to.clone());
        graph.link_weighted(&edge.from, &edge.to, edge.weight)?;
    }

    tracing::debug!(order = graph.order(), size = graph.size(), "assemble_graph");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EdgeSpec;

    fn edge(from: &str, to: &str, weight: f64) -> EdgeSpec {
        EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    #[test]
    fn test_edge_endpoints_are_inserted() {
        let args = GraphArgs {
            node: vec!["a".to_string()],
            edge: vec![edge("a", "b", 1.0)],
            directed: true,
        };
        let graph = assemble(&args).unwrap();
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_repeated_nodes_are_ignored() {
        let args = GraphArgs {
            node: vec!["a".to_string(), "a".to_string()],
            edge: vec![edge("a", "a", 1.0)],
            directed: false,
        };
        let graph = assemble(&args).unwrap();
        assert_eq!(graph.order(), 1);
    }

    #[test]
    fn test_undirected_duplicate_edges_are_ignored() {
        let args = GraphArgs {
            node: Vec::new(),
            edge: vec![edge("a", "b", 1.0), edge("b", "a", 5.0)],
            directed: false,
        };
        let graph = assemble(&args).unwrap();
        assert_eq!(graph.size(), 1);
    }
}
