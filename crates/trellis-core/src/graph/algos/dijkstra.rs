//! Single-source shortest paths
//!
//! Dijkstra over non-negative link weights. Every node gets a cost entry;
//! unreached nodes keep an infinite distance and no predecessor. Selection
//! scans nodes in insertion order and keeps the first minimum, so equal
//! distances resolve toward earlier-inserted nodes. Only outgoing links
//! relax, with undirected links counting as outgoing from both endpoints,
//! and the loop stops once no unfinalized node has a finite distance.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::Result;
use crate::graph::container::Graph;
use crate::link::Weighted;
use crate::node::NodeId;
use crate::path::Path;

/// Cheapest known approach to one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cost {
    distance: f64,
    predecessor: Option<NodeId>,
}

impl Cost {
    fn start() -> Self {
        Cost {
            distance: 0.0,
            predecessor: None,
        }
    }

    fn unreached() -> Self {
        Cost {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Shortest-path costs from a single source.
#[derive(Debug, Clone)]
pub struct CostTable {
    source: NodeId,
    costs: HashMap<NodeId, Cost>,
}

impl CostTable {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn get(&self, id: NodeId) -> Option<&Cost> {
        self.costs.get(&id)
    }

    /// Finite distance to `id`, when it was reached.
    pub fn distance(&self, id: NodeId) -> Option<f64> {
        self.costs
            .get(&id)
            .filter(|cost| cost.is_reachable())
            .map(Cost::distance)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.costs.get(&id).and_then(Cost::predecessor)
    }

    /// Reconstruct the cheapest path from the source to `target`, walking
    /// the predecessor chain backwards.
    pub fn path_to(&self, target: NodeId) -> Option<Path> {
        if !self.get(target)?.is_reachable() {
            return None;
        }
        let mut nodes = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            nodes.push(previous);
            current = previous;
            // A predecessor chain never outgrows the table.
            if nodes.len() > self.costs.len() {
                return None;
            }
        }
        if current != self.source {
            return None;
        }
        nodes.reverse();
        Some(Path::from(nodes))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Cost)> + '_ {
        self.costs.iter().map(|(id, cost)| (*id, cost))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Compute the cheapest distance from the node holding `source` to every
/// node it can reach.
#[tracing::instrument(skip_all)]
pub fn dijkstra<T: PartialEq, L: Weighted>(graph: &Graph<T, L>, source: &T) -> Result<CostTable> {
    let source_id = graph.find_node(source)?;
    let mut costs: HashMap<NodeId, Cost> = graph
        .nodes()
        .iter()
        .map(|node| {
            let cost = if node.id() == source_id {
                Cost::start()
            } else {
                Cost::unreached()
            };
            (node.id(), cost)
        })
        .collect();
    let mut finalized: HashSet<NodeId> = HashSet::new();

    while let Some(current) = select_next(graph, &costs, &finalized) {
        relax_neighbors(graph, &mut costs, current);
        finalized.insert(current);
    }

    tracing::debug!(
        finalized = finalized.len(),
        unreachable = costs.values().filter(|cost| !cost.is_reachable()).count(),
        "dijkstra complete"
    );
    Ok(CostTable {
        source: source_id,
        costs,
    })
}

/// Unfinalized node with the smallest finite distance; the first scanned
/// wins ties.
fn select_next<T, L>(
    graph: &Graph<T, L>,
    costs: &HashMap<NodeId, Cost>,
    finalized: &HashSet<NodeId>,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in graph.nodes() {
        let id = node.id();
        if finalized.contains(&id) {
            continue;
        }
        let distance = match costs.get(&id) {
            Some(cost) if cost.is_reachable() => cost.distance(),
            _ => continue,
        };
        if best.map_or(true, |(_, smallest)| distance < smallest) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}

fn relax_neighbors<T, L: Weighted>(
    graph: &Graph<T, L>,
    costs: &mut HashMap<NodeId, Cost>,
    current: NodeId,
) {
    let from = match costs.get(&current) {
        Some(cost) => *cost,
        None => return,
    };
    for link in graph.successor_links_of(current) {
        let (x, y) = link.endpoints();
        let other = if x == current { y } else { x };
        let candidate = from.distance() + link.weight();
        if let Some(entry) = costs.get_mut(&other) {
            if candidate < entry.distance() {
                *entry = Cost {
                    distance: candidate,
                    predecessor: Some(current),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests;
