//! Node sequences
//!
//! A [`Path`] is an ordered sequence of node handles. It carries no
//! reference to a graph; validity and cost against a particular graph are
//! checked by the graph's own methods.

use std::collections::HashSet;
use std::slice;

use serde::Serialize;

use crate::node::NodeId;

/// An ordered sequence of node handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn push(&mut self, id: NodeId) {
        self.nodes.push(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Whether no node appears more than once.
    pub fn is_elementary(&self) -> bool {
        let mut seen = HashSet::new();
        self.nodes.iter().all(|id| seen.insert(*id))
    }

    /// Collapse cycles until no node repeats.
    ///
    /// For each repeated node, the segment between its first occurrence and
    /// its last occurrence is removed, keeping the first occurrence. The
    /// first and last nodes of the original path survive the reduction.
    pub fn to_elementary(&self) -> Path {
        let mut nodes = self.nodes.clone();
        'scan: loop {
            for i in 0..nodes.len() {
                for j in (i + 1..nodes.len()).rev() {
                    if nodes[j] == nodes[i] {
                        nodes.drain(i + 1..=j);
                        continue 'scan;
                    }
                }
            }
            break;
        }
        Path { nodes }
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Path { nodes }
    }
}

impl FromIterator<NodeId> for Path {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Path {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
