//! Graph container and the algorithms over it.

pub mod algos;
pub mod container;
mod relation;
mod weighted;

pub use algos::{breadth_first, depth_first, dijkstra, Bfs, Collector, Cost, CostTable, Dfs, Sink};
pub use container::{Graph, RelationGraph, StandardGraph, WeightedGraph};
