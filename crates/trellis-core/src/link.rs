//! Link kinds
//!
//! A graph stores links of a single kind. [`LinkKind`] is the minimal
//! capability set the container and algorithms need: construct a link from
//! two endpoints, read the endpoints back, and match against a queried
//! pair. Weight is a separate capability ([`Weighted`]) that only weighted
//! kinds expose; Dijkstra and path costing require it.
//!
//! Structural equality of every kind is by endpoints only. Weights and
//! relation names ride along but never participate in identity, so lookups
//! and undirected dedup behave the same for all kinds.

use std::fmt;

use serde::Serialize;

use crate::node::NodeId;

/// Weight assigned to links created without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Minimal capability set for a graph's link kind.
pub trait LinkKind {
    /// Create a link from `x` to `y`.
    fn connect(x: NodeId, y: NodeId) -> Self;

    /// The (source, target) pair.
    fn endpoints(&self) -> (NodeId, NodeId);

    /// The reversed counterpart, used for undirected matching.
    fn symmetrical(&self) -> Self;

    fn source(&self) -> NodeId {
        self.endpoints().0
    }

    fn target(&self) -> NodeId {
        self.endpoints().1
    }

    /// Whether this link runs exactly from `x` to `y`.
    fn matches(&self, x: NodeId, y: NodeId) -> bool {
        self.endpoints() == (x, y)
    }

    /// Whether `id` is either endpoint.
    fn is_incident(&self, id: NodeId) -> bool {
        let (x, y) = self.endpoints();
        x == id || y == id
    }
}

/// Capability for link kinds that carry a weight.
pub trait Weighted: LinkKind {
    /// Create a link from `x` to `y` with an explicit weight.
    fn connect_weighted(x: NodeId, y: NodeId, weight: f64) -> Self;

    fn weight(&self) -> f64;
}

/// An unweighted ordered pair of node handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    x: NodeId,
    y: NodeId,
}

impl LinkKind for Link {
    fn connect(x: NodeId, y: NodeId) -> Self {
        Link { x, y }
    }

    fn endpoints(&self) -> (NodeId, NodeId) {
        (self.x, self.y)
    }

    fn symmetrical(&self) -> Self {
        Link {
            x: self.y,
            y: self.x,
        }
    }
}

/// A link carrying a floating-point weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightedLink {
    x: NodeId,
    y: NodeId,
    weight: f64,
}

// Equality is by endpoints; two links between the same pair compare equal
// even when their weights differ.
impl PartialEq for WeightedLink {
    fn eq(&self, other: &Self) -> bool {
        (self.x, self.y) == (other.x, other.y)
    }
}

impl LinkKind for WeightedLink {
    fn connect(x: NodeId, y: NodeId) -> Self {
        WeightedLink {
            x,
            y,
            weight: DEFAULT_WEIGHT,
        }
    }

    fn endpoints(&self) -> (NodeId, NodeId) {
        (self.x, self.y)
    }

    fn symmetrical(&self) -> Self {
        WeightedLink {
            x: self.y,
            y: self.x,
            weight: self.weight,
        }
    }
}

impl Weighted for WeightedLink {
    fn connect_weighted(x: NodeId, y: NodeId, weight: f64) -> Self {
        WeightedLink { x, y, weight }
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// A link labelled with a relation name, for knowledge-style graphs.
#[derive(Debug, Clone, Serialize)]
pub struct RelationLink {
    x: NodeId,
    y: NodeId,
    relation: String,
}

impl RelationLink {
    /// Create a link from `x` to `y` labelled `relation`.
    pub fn relate(x: NodeId, y: NodeId, relation: impl Into<String>) -> Self {
        RelationLink {
            x,
            y,
            relation: relation.into(),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

// Equality is by endpoints; the relation name rides along like a weight.
impl PartialEq for RelationLink {
    fn eq(&self, other: &Self) -> bool {
        (self.x, self.y) == (other.x, other.y)
    }
}

impl LinkKind for RelationLink {
    fn connect(x: NodeId, y: NodeId) -> Self {
        RelationLink {
            x,
            y,
            relation: String::new(),
        }
    }

    fn endpoints(&self) -> (NodeId, NodeId) {
        (self.x, self.y)
    }

    fn symmetrical(&self) -> Self {
        RelationLink {
            x: self.y,
            y: self.x,
            relation: self.relation.clone(),
        }
    }
}

impl fmt::Display for RelationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.x, self.relation, self.y)
    }
}
