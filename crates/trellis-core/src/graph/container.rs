//! Graph container
//!
//! [`Graph`] owns its nodes and links and hands out [`NodeId`] handles.
//! Payload equality is node identity: a payload occurs at most once per
//! graph, and the public mutation API resolves payloads to handles before
//! touching anything, so a link can never reference a missing node.
//!
//! Whether the graph is directed is fixed at construction. Undirected
//! graphs treat a link as present in both orientations and refuse to store
//! the same pair twice; directed graphs match orientation exactly and
//! accept parallel links.

use std::fmt;

use crate::error::{Result, TrellisError};
use crate::link::{Link, LinkKind, RelationLink, WeightedLink};
use crate::matrix::Matrix;
use crate::node::{Node, NodeId};
use crate::path::Path;

/// An in-memory graph over payloads of type `T` and links of kind `L`.
#[derive(Debug, Clone)]
pub struct Graph<T, L = Link> {
    nodes: Vec<Node<T>>,
    links: Vec<L>,
    directed: bool,
    next_id: u32,
}

/// Graph with plain unweighted links.
pub type StandardGraph<T> = Graph<T, Link>;

/// Graph with weighted links.
pub type WeightedGraph<T> = Graph<T, WeightedLink>;

/// Graph with relation-labelled links.
pub type RelationGraph<T> = Graph<T, RelationLink>;

impl<T, L> Graph<T, L> {
    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Graph::with_direction(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Graph::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Graph {
            nodes: Vec::new(),
            links: Vec::new(),
            directed,
            next_id: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links.
    pub fn size(&self) -> usize {
        self.links.len()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Links in insertion order.
    pub fn links(&self) -> &[L] {
        &self.links
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Look up a payload by handle.
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::data)
    }

    pub fn contains_id(&self, id: NodeId) -> bool {
        self.position(id).is_some()
    }

    /// Insertion-order index of a node, used for matrix cells.
    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id() == id)
    }

    /// Render a path as `(a)---(b)---(c)`. Handles that no longer resolve
    /// render as `(?)`.
    pub fn format_path(&self, path: &Path) -> String
    where
        T: fmt::Display,
    {
        let parts: Vec<String> = path
            .iter()
            .map(|id| match self.node(id) {
                Some(node) => node.to_string(),
                None => "(?)".to_string(),
            })
            .collect();
        parts.join("---")
    }
}

impl<T, L: LinkKind> Graph<T, L> {
    /// Directed graphs match orientation exactly; undirected graphs accept
    /// either orientation.
    fn link_matches(&self, link: &L, x: NodeId, y: NodeId) -> bool {
        link.matches(x, y) || (!self.directed && link.matches(y, x))
    }

    /// The first link from `x` to `y`, by handle.
    pub fn link_between(&self, x: NodeId, y: NodeId) -> Result<&L> {
        if !self.contains_id(x) || !self.contains_id(y) {
            return Err(TrellisError::NodeNotFound);
        }
        self.links
            .iter()
            .find(|link| self.link_matches(link, x, y))
            .ok_or(TrellisError::LinkNotFound)
    }

    pub fn has_link_between(&self, x: NodeId, y: NodeId) -> bool {
        self.link_between(x, y).is_ok()
    }

    /// Nodes with a link into `id`, deduplicated, in link insertion order.
    pub fn predecessors_of(&self, id: NodeId) -> Vec<&Node<T>> {
        let mut out: Vec<&Node<T>> = Vec::new();
        for link in &self.links {
            let (x, y) = link.endpoints();
            let neighbor = if y == id {
                x
            } else if !self.directed && x == id {
                y
            } else {
                continue;
            };
            if out.iter().all(|node| node.id() != neighbor) {
                if let Some(node) = self.node(neighbor) {
                    out.push(node);
                }
            }
        }
        out
    }

    /// Nodes with a link out of `id`, deduplicated, in link insertion order.
    pub fn successors_of(&self, id: NodeId) -> Vec<&Node<T>> {
        let mut out: Vec<&Node<T>> = Vec::new();
        for link in &self.links {
            let (x, y) = link.endpoints();
            let neighbor = if x == id {
                y
            } else if !self.directed && y == id {
                x
            } else {
                continue;
            };
            if out.iter().all(|node| node.id() != neighbor) {
                if let Some(node) = self.node(neighbor) {
                    out.push(node);
                }
            }
        }
        out
    }

    /// Links leaving `id`.
    pub fn successor_links_of(&self, id: NodeId) -> Vec<&L> {
        self.links
            .iter()
            .filter(|link| {
                let (x, y) = link.endpoints();
                x == id || (!self.directed && y == id)
            })
            .collect()
    }

    /// Links arriving at `id`.
    pub fn predecessor_links_of(&self, id: NodeId) -> Vec<&L> {
        self.links
            .iter()
            .filter(|link| {
                let (x, y) = link.endpoints();
                y == id || (!self.directed && x == id)
            })
            .collect()
    }

    /// Links touching `id` in either role.
    pub fn neighbor_links_of(&self, id: NodeId) -> Vec<&L> {
        self.links
            .iter()
            .filter(|link| link.is_incident(id))
            .collect()
    }

    /// Predecessors and successors of `id`, deduplicated, predecessors
    /// first.
    pub fn open_neighborhood_of(&self, id: NodeId) -> Vec<&Node<T>> {
        let mut out = self.predecessors_of(id);
        for node in self.successors_of(id) {
            if out.iter().all(|seen| seen.id() != node.id()) {
                out.push(node);
            }
        }
        out
    }

    /// Whether every ordered pair of distinct nodes is linked. Graphs with
    /// fewer than two nodes are complete.
    pub fn is_complete(&self) -> bool {
        self.nodes.iter().all(|a| {
            self.nodes
                .iter()
                .filter(|b| b.id() != a.id())
                .all(|b| self.has_link_between(a.id(), b.id()))
        })
    }

    /// Whether every consecutive pair in `path` is linked. Paths with fewer
    /// than two nodes are valid.
    pub fn is_path_valid(&self, path: &Path) -> bool {
        path.nodes()
            .windows(2)
            .all(|pair| self.has_link_between(pair[0], pair[1]))
    }

    /// Adjacency matrix over node insertion order: cell (i, j) is 1 when a
    /// link from the i-th to the j-th node is stored. Undirected links set
    /// only the cell for their stored orientation.
    pub fn adjacency_matrix(&self) -> Matrix {
        let mut matrix = Matrix::square(self.order());
        for link in &self.links {
            let (x, y) = link.endpoints();
            if let (Some(row), Some(col)) = (self.position(x), self.position(y)) {
                matrix.set(row, col, 1);
            }
        }
        matrix
    }
}

impl<T: PartialEq, L: LinkKind> Graph<T, L> {
    /// Add a node. Returns false without changes when an equal payload is
    /// already present.
    pub fn insert(&mut self, data: T) -> bool {
        if self.contains(&data) {
            return false;
        }
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node::new(id, data));
        true
    }

    pub fn contains(&self, data: &T) -> bool {
        self.nodes.iter().any(|node| node.data() == data)
    }

    /// Resolve a payload to its handle.
    pub fn find_node(&self, data: &T) -> Result<NodeId> {
        self.nodes
            .iter()
            .find(|node| node.data() == data)
            .map(Node::id)
            .ok_or(TrellisError::NodeNotFound)
    }

    /// Remove a node and every link touching it.
    pub fn remove(&mut self, data: &T) -> Result<()> {
        let id = self.find_node(data)?;
        self.links.retain(|link| !link.is_incident(id));
        self.nodes.retain(|node| node.id() != id);
        Ok(())
    }

    /// Link `x` to `y`. Returns false without changes when an undirected
    /// graph already holds the pair in either orientation.
    pub fn link(&mut self, x: &T, y: &T) -> Result<bool> {
        self.link_with(x, y, L::connect)
    }

    pub(crate) fn link_with(
        &mut self,
        x: &T,
        y: &T,
        connect: impl FnOnce(NodeId, NodeId) -> L,
    ) -> Result<bool> {
        let xi = self.find_node(x)?;
        let yi = self.find_node(y)?;
        if !self.directed
            && self
                .links
                .iter()
                .any(|link| link.matches(xi, yi) || link.matches(yi, xi))
        {
            return Ok(false);
        }
        self.links.push(connect(xi, yi));
        Ok(true)
    }

    /// Remove one link from `x` to `y`, the earliest inserted match.
    pub fn unlink(&mut self, x: &T, y: &T) -> Result<()> {
        let xi = self.find_node(x)?;
        let yi = self.find_node(y)?;
        let pos = self
            .links
            .iter()
            .position(|link| self.link_matches(link, xi, yi))
            .ok_or(TrellisError::LinkNotFound)?;
        self.links.remove(pos);
        Ok(())
    }

    /// The first link from `x` to `y`, by payload.
    pub fn find_link(&self, x: &T, y: &T) -> Result<&L> {
        let xi = self.find_node(x)?;
        let yi = self.find_node(y)?;
        self.link_between(xi, yi)
    }

    /// Predecessors by payload. Unknown payloads have no predecessors.
    pub fn predecessors(&self, data: &T) -> Vec<&Node<T>> {
        self.find_node(data)
            .map(|id| self.predecessors_of(id))
            .unwrap_or_default()
    }

    /// Successors by payload. Unknown payloads have no successors.
    pub fn successors(&self, data: &T) -> Vec<&Node<T>> {
        self.find_node(data)
            .map(|id| self.successors_of(id))
            .unwrap_or_default()
    }

    pub fn successor_links(&self, data: &T) -> Vec<&L> {
        self.find_node(data)
            .map(|id| self.successor_links_of(id))
            .unwrap_or_default()
    }

    pub fn predecessor_links(&self, data: &T) -> Vec<&L> {
        self.find_node(data)
            .map(|id| self.predecessor_links_of(id))
            .unwrap_or_default()
    }

    pub fn neighbor_links(&self, data: &T) -> Vec<&L> {
        self.find_node(data)
            .map(|id| self.neighbor_links_of(id))
            .unwrap_or_default()
    }

    /// Open neighborhood by payload. Unknown payloads have an empty one.
    pub fn open_neighborhood(&self, data: &T) -> Vec<&Node<T>> {
        self.find_node(data)
            .map(|id| self.open_neighborhood_of(id))
            .unwrap_or_default()
    }

    /// Open neighborhood plus the node itself, appended last unless a
    /// self-loop already brought it in.
    pub fn closed_neighborhood(&self, data: &T) -> Result<Vec<&Node<T>>> {
        let id = self.find_node(data)?;
        let mut out = self.open_neighborhood_of(id);
        if out.iter().all(|node| node.id() != id) {
            if let Some(node) = self.node(id) {
                out.push(node);
            }
        }
        Ok(out)
    }
}
