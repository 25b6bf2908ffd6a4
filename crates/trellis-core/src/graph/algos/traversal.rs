//! Breadth-first and depth-first traversal
//!
//! One engine drives both orders. The frontier is seeded with the root and
//! popped from the front; newly discovered successors go to the back for a
//! breadth-first walk or onto the front, in discovery order, for a
//! depth-first walk. Nodes are marked at discovery so cycles cannot
//! re-enqueue them, and the walk ends when the frontier runs dry, never by
//! counting visits. Unreachable nodes are simply never discovered.

use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::container::Graph;
use crate::link::LinkKind;
use crate::node::NodeId;

/// Receives nodes as a traversal reaches them.
pub trait Sink<T> {
    fn visit(&mut self, id: NodeId, data: &T);

    /// Called once, after the frontier is exhausted.
    fn complete(&mut self) {}
}

impl<T, F: FnMut(NodeId, &T)> Sink<T> for F {
    fn visit(&mut self, id: NodeId, data: &T) {
        self(id, data);
    }
}

/// Sink that records the visit order.
#[derive(Debug, Default)]
pub struct Collector {
    visited: Vec<NodeId>,
    completed: bool,
}

impl Collector {
    pub fn new() -> Self {
        Collector::default()
    }

    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl<T> Sink<T> for Collector {
    fn visit(&mut self, id: NodeId, _data: &T) {
        self.visited.push(id);
    }

    fn complete(&mut self) {
        self.completed = true;
    }
}

enum Order {
    Breadth,
    Depth,
}

struct Walk<'a, T, L> {
    graph: &'a Graph<T, L>,
    frontier: VecDeque<NodeId>,
    seen: HashSet<NodeId>,
    order: Order,
}

impl<'a, T, L: LinkKind> Walk<'a, T, L> {
    fn new(graph: &'a Graph<T, L>, root: NodeId, order: Order) -> Self {
        Walk {
            graph,
            frontier: VecDeque::from([root]),
            seen: HashSet::from([root]),
            order,
        }
    }

    fn next_node(&mut self) -> Option<NodeId> {
        let current = self.frontier.pop_front()?;
        let discovered: Vec<NodeId> = self
            .graph
            .successors_of(current)
            .into_iter()
            .map(|node| node.id())
            .filter(|id| self.seen.insert(*id))
            .collect();
        match self.order {
            Order::Breadth => self.frontier.extend(discovered),
            Order::Depth => {
                // Reversed pushes keep the first successor on top.
                for id in discovered.into_iter().rev() {
                    self.frontier.push_front(id);
                }
            }
        }
        Some(current)
    }
}

/// Breadth-first iterator over node handles.
pub struct Bfs<'a, T, L> {
    walk: Walk<'a, T, L>,
}

impl<'a, T: PartialEq, L: LinkKind> Bfs<'a, T, L> {
    /// Start a walk at the node holding `root`.
    pub fn new(graph: &'a Graph<T, L>, root: &T) -> Result<Self> {
        let id = graph.find_node(root)?;
        Ok(Bfs {
            walk: Walk::new(graph, id, Order::Breadth),
        })
    }
}

impl<T, L: LinkKind> Iterator for Bfs<'_, T, L> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.walk.next_node()
    }
}

/// Depth-first iterator over node handles.
pub struct Dfs<'a, T, L> {
    walk: Walk<'a, T, L>,
}

impl<'a, T: PartialEq, L: LinkKind> Dfs<'a, T, L> {
    /// Start a walk at the node holding `root`.
    pub fn new(graph: &'a Graph<T, L>, root: &T) -> Result<Self> {
        let id = graph.find_node(root)?;
        Ok(Dfs {
            walk: Walk::new(graph, id, Order::Depth),
        })
    }
}

impl<T, L: LinkKind> Iterator for Dfs<'_, T, L> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.walk.next_node()
    }
}

/// Walk breadth-first from `root`, feeding every reached node to `sink`.
#[tracing::instrument(skip_all)]
pub fn breadth_first<T, L, S>(graph: &Graph<T, L>, root: &T, sink: &mut S) -> Result<()>
where
    T: PartialEq,
    L: LinkKind,
    S: Sink<T> + ?Sized,
{
    drive(Bfs::new(graph, root)?, graph, sink);
    Ok(())
}

/// Walk depth-first from `root`, feeding every reached node to `sink`.
#[tracing::instrument(skip_all)]
pub fn depth_first<T, L, S>(graph: &Graph<T, L>, root: &T, sink: &mut S) -> Result<()>
where
    T: PartialEq,
    L: LinkKind,
    S: Sink<T> + ?Sized,
{
    drive(Dfs::new(graph, root)?, graph, sink);
    Ok(())
}

fn drive<T, L, S>(walker: impl Iterator<Item = NodeId>, graph: &Graph<T, L>, sink: &mut S)
where
    S: Sink<T> + ?Sized,
{
    let mut count = 0usize;
    for id in walker {
        if let Some(node) = graph.node(id) {
            sink.visit(id, node.data());
        }
        count += 1;
    }
    tracing::debug!(visited = count, "traversal complete");
    sink.complete();
}
