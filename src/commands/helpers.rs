//! Shared helpers for command output

use trellis_core::graph::WeightedGraph;
use trellis_core::node::NodeId;

/// Payload text for a handle, with a placeholder for handles that no
/// longer resolve.
pub fn payload_or_unknown(graph: &WeightedGraph<String>, id: NodeId) -> String {
    graph
        .payload(id)
        .cloned()
        .unwrap_or_else(|| "?".to_string())
}
