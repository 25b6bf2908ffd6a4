use super::*;
use crate::error::TrellisError;
use crate::graph::container::WeightedGraph;

fn wired() -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::directed();
    for payload in ["a", "b", "c", "d"] {
        graph.insert(payload);
    }
    graph.link_weighted(&"a", &"b", 1.0).unwrap();
    graph.link_weighted(&"b", &"c", 2.0).unwrap();
    graph.link_weighted(&"a", &"c", 10.0).unwrap();
    graph.link_weighted(&"c", &"d", 1.0).unwrap();
    graph
}

#[test]
fn test_distances_take_the_cheapest_route() {
    let graph = wired();
    let table = dijkstra(&graph, &"a").unwrap();

    assert_eq!(table.distance(graph.find_node(&"a").unwrap()), Some(0.0));
    assert_eq!(table.distance(graph.find_node(&"b").unwrap()), Some(1.0));
    assert_eq!(table.distance(graph.find_node(&"c").unwrap()), Some(3.0));
    assert_eq!(table.distance(graph.find_node(&"d").unwrap()), Some(4.0));
}

#[test]
fn test_predecessors_chain_back_to_the_source() {
    let graph = wired();
    let table = dijkstra(&graph, &"a").unwrap();

    let a = graph.find_node(&"a").unwrap();
    let b = graph.find_node(&"b").unwrap();
    let c = graph.find_node(&"c").unwrap();
    let d = graph.find_node(&"d").unwrap();

    assert_eq!(table.source(), a);
    assert_eq!(table.predecessor(a), None);
    assert_eq!(table.predecessor(b), Some(a));
    assert_eq!(table.predecessor(c), Some(b));
    assert_eq!(table.predecessor(d), Some(c));
}

#[test]
fn test_path_reconstruction() {
    let graph = wired();
    let table = dijkstra(&graph, &"a").unwrap();

    let a = graph.find_node(&"a").unwrap();
    let d = graph.find_node(&"d").unwrap();

    let path = table.path_to(d).unwrap();
    assert_eq!(graph.format_path(&path), "(a)---(b)---(c)---(d)");
    assert_eq!(graph.cost(&path).unwrap(), 4.0);
    assert!(graph.is_path_valid(&path));

    assert_eq!(table.path_to(a), Some(Path::from(vec![a])));
}

#[test]
fn test_unreachable_nodes_keep_infinite_distance() {
    let mut graph = wired();
    graph.insert("island");
    let table = dijkstra(&graph, &"a").unwrap();
    let island = graph.find_node(&"island").unwrap();

    let cost = table.get(island).unwrap();
    assert!(!cost.is_reachable());
    assert_eq!(cost.predecessor(), None);
    assert_eq!(table.distance(island), None);
    assert!(table.path_to(island).is_none());
    assert!(table.path_to(NodeId::new(99)).is_none());
    assert_eq!(table.len(), 5);
}

#[test]
fn test_missing_source_is_an_error() {
    let graph = wired();
    assert!(matches!(
        dijkstra(&graph, &"z"),
        Err(TrellisError::NodeNotFound)
    ));
}

#[test]
fn test_directed_links_relax_forward_only() {
    let mut graph = WeightedGraph::directed();
    graph.insert("a");
    graph.insert("b");
    graph.link_weighted(&"b", &"a", 1.0).unwrap();

    let table = dijkstra(&graph, &"a").unwrap();
    assert_eq!(table.distance(graph.find_node(&"b").unwrap()), None);
}

#[test]
fn test_undirected_links_relax_both_ways() {
    let mut graph = WeightedGraph::undirected();
    graph.insert("a");
    graph.insert("b");
    graph.insert("c");
    graph.link_weighted(&"b", &"a", 2.0).unwrap();
    graph.link_weighted(&"b", &"c", 3.0).unwrap();

    let table = dijkstra(&graph, &"a").unwrap();
    assert_eq!(table.distance(graph.find_node(&"c").unwrap()), Some(5.0));
}

#[test]
fn test_equal_cost_routes_prefer_earlier_nodes() {
    // Two routes to d cost the same; the earlier-inserted b relaxes d
    // first and keeps it.
    let mut graph = WeightedGraph::directed();
    for payload in ["a", "b", "c", "d"] {
        graph.insert(payload);
    }
    graph.link_weighted(&"a", &"b", 1.0).unwrap();
    graph.link_weighted(&"a", &"c", 1.0).unwrap();
    graph.link_weighted(&"b", &"d", 1.0).unwrap();
    graph.link_weighted(&"c", &"d", 1.0).unwrap();

    let table = dijkstra(&graph, &"a").unwrap();
    let b = graph.find_node(&"b").unwrap();
    let d = graph.find_node(&"d").unwrap();
    assert_eq!(table.predecessor(d), Some(b));
    assert_eq!(table.distance(d), Some(2.0));
}

#[test]
fn test_default_weight_links_cost_one() {
    let mut graph = WeightedGraph::directed();
    graph.insert("a");
    graph.insert("b");
    graph.insert("c");
    graph.link(&"a", &"b").unwrap();
    graph.link(&"b", &"c").unwrap();

    let table = dijkstra(&graph, &"a").unwrap();
    assert_eq!(table.distance(graph.find_node(&"c").unwrap()), Some(2.0));
}
