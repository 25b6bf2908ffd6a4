//! Nodes and node handles
//!
//! A node pairs one payload value with a stable handle. Handles are issued
//! by the owning graph at insert time and never reused, so links, paths and
//! cost tables can refer to nodes without borrowing them; a handle whose
//! node has been removed simply stops resolving.

use std::fmt;

use serde::Serialize;

/// Stable handle for a node within its owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One payload value and its handle.
///
/// Payloads are only reachable by shared reference; the owning graph
/// enforces the no-duplicate-payload invariant at insert time.
#[derive(Debug, Clone, Serialize)]
pub struct Node<T> {
    id: NodeId,
    data: T,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, data: T) -> Self {
        Node { id, data }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display_wraps_payload() {
        let node = Node::new(NodeId::new(0), 42);
        assert_eq!(node.to_string(), "(42)");
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(7).to_string(), "#7");
    }
}
