//! # Trellis Core Library
//!
//! In-memory graphs over arbitrary payload types: an insertion-ordered
//! container with directed or undirected links, traversals, shortest
//! paths, and adjacency-matrix export. Payload equality is node identity;
//! links are resolved through integer handles so they can never dangle.

pub mod error;
pub mod format;
pub mod graph;
pub mod link;
pub mod logging;
pub mod matrix;
pub mod node;
pub mod path;
pub mod storage;
