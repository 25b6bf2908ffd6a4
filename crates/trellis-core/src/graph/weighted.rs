//! Operations available when the link kind carries a weight.

use crate::error::Result;
use crate::graph::container::Graph;
use crate::link::Weighted;
use crate::path::Path;

impl<T: PartialEq, L: Weighted> Graph<T, L> {
    /// Link `x` to `y` with an explicit weight. Duplicate handling follows
    /// [`Graph::link`]; a rejected duplicate keeps the stored weight.
    pub fn link_weighted(&mut self, x: &T, y: &T, weight: f64) -> Result<bool> {
        self.link_with(x, y, |xi, yi| L::connect_weighted(xi, yi, weight))
    }

    /// Total weight along `path`. Paths with fewer than two nodes cost
    /// nothing.
    pub fn cost(&self, path: &Path) -> Result<f64> {
        let mut total = 0.0;
        for pair in path.nodes().windows(2) {
            total += self.link_between(pair[0], pair[1])?.weight();
        }
        Ok(total)
    }

    /// Whether the total cost of `path` is negative. A path that fails to
    /// resolve is also reported absorbing.
    pub fn is_path_absorbing(&self, path: &Path) -> bool {
        self.cost(path).map(|total| total < 0.0).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TrellisError;
    use crate::graph::container::WeightedGraph;
    use crate::link::{Weighted, DEFAULT_WEIGHT};
    use crate::path::Path;

    fn chain() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::directed();
        graph.insert("a");
        graph.insert("b");
        graph.insert("c");
        graph.link_weighted(&"a", &"b", 2.0).unwrap();
        graph.link_weighted(&"b", &"c", 3.5).unwrap();
        graph
    }

    fn path_of(graph: &WeightedGraph<&'static str>, payloads: &[&str]) -> Path {
        payloads
            .iter()
            .map(|p| graph.find_node(p).unwrap())
            .collect()
    }

    #[test]
    fn test_cost_sums_link_weights() {
        let graph = chain();
        let path = path_of(&graph, &["a", "b", "c"]);
        assert_eq!(graph.cost(&path).unwrap(), 5.5);
    }

    #[test]
    fn test_short_paths_cost_nothing() {
        let graph = chain();
        assert_eq!(graph.cost(&Path::new()).unwrap(), 0.0);
        assert_eq!(graph.cost(&path_of(&graph, &["b"])).unwrap(), 0.0);
    }

    #[test]
    fn test_cost_of_unresolvable_path_is_an_error() {
        let graph = chain();
        let path = path_of(&graph, &["c", "a"]);
        assert!(matches!(
            graph.cost(&path),
            Err(TrellisError::LinkNotFound)
        ));
    }

    #[test]
    fn test_plain_link_uses_default_weight() {
        let mut graph = chain();
        graph.link(&"a", &"c").unwrap();
        let link = graph.find_link(&"a", &"c").unwrap();
        assert_eq!(link.weight(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_undirected_duplicate_keeps_stored_weight() {
        let mut graph = WeightedGraph::undirected();
        graph.insert("a");
        graph.insert("b");
        assert!(graph.link_weighted(&"a", &"b", 2.0).unwrap());
        assert!(!graph.link_weighted(&"b", &"a", 9.0).unwrap());
        assert_eq!(graph.find_link(&"a", &"b").unwrap().weight(), 2.0);
    }

    #[test]
    fn test_absorbing_when_total_is_negative() {
        let mut graph = WeightedGraph::directed();
        graph.insert("a");
        graph.insert("b");
        graph.link_weighted(&"a", &"b", -4.0).unwrap();

        let path = path_of(&graph, &["a", "b"]);
        assert!(graph.is_path_absorbing(&path));
    }

    #[test]
    fn test_absorbing_false_for_non_negative_total() {
        let graph = chain();
        let path = path_of(&graph, &["a", "b", "c"]);
        assert!(!graph.is_path_absorbing(&path));
        assert!(!graph.is_path_absorbing(&Path::new()));
    }

    #[test]
    fn test_absorbing_true_when_path_cannot_be_resolved() {
        // Unresolvable paths report absorbing rather than erroring.
        let graph = chain();
        let backwards = path_of(&graph, &["c", "b", "a"]);
        assert!(graph.is_path_absorbing(&backwards));
    }
}
