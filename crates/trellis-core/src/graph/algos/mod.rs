//! Algorithms over graphs.

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::{dijkstra, Cost, CostTable};
pub use traversal::{breadth_first, depth_first, Bfs, Collector, Dfs, Sink};
