//! Operations available when links carry a relation label.

use crate::error::Result;
use crate::graph::container::Graph;
use crate::link::RelationLink;

impl<T: PartialEq> Graph<T, RelationLink> {
    /// Link `x` to `y` under the given relation name. Duplicate handling
    /// follows [`Graph::link`]; labels never affect matching.
    pub fn link_related(&mut self, x: &T, y: &T, relation: &str) -> Result<bool> {
        self.link_with(x, y, |xi, yi| RelationLink::relate(xi, yi, relation))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::container::RelationGraph;

    #[test]
    fn test_link_related_keeps_label() {
        let mut graph = RelationGraph::directed();
        graph.insert("claim");
        graph.insert("evidence");
        assert!(graph.link_related(&"claim", &"evidence", "supported-by").unwrap());

        let link = graph.find_link(&"claim", &"evidence").unwrap();
        assert_eq!(link.relation(), "supported-by");
    }

    #[test]
    fn test_undirected_dedup_ignores_label() {
        let mut graph = RelationGraph::undirected();
        graph.insert("a");
        graph.insert("b");
        assert!(graph.link_related(&"a", &"b", "first").unwrap());
        assert!(!graph.link_related(&"b", &"a", "second").unwrap());
        assert_eq!(graph.find_link(&"a", &"b").unwrap().relation(), "first");
    }
}
