//! Dijkstra SSSP - Single-Source Shortest Paths with an Adaptable Priority Queue
//!
//! This library computes single-source shortest-path distances over weighted
//! directed graphs with non-negative integer edge weights, using the classic
//! interleaving of "settle the closest vertex" and "relax its outgoing edges"
//! driven by a priority queue with handle-based decrease-key.
//!
//! Three operations are exposed through [`ShortestPathAlgorithm`]:
//! distances from a source to every reachable vertex, the distance to a
//! single target with early termination, and shortest-path-tree
//! reconstruction from a finalized distance map.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, Distance, DistanceMap, ShortestPathAlgorithm, ShortestPathTree,
};
pub use data_structures::{AdaptableHeap, HeapHandle};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{EdgeId, Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight on edge {0} -> {1}")]
    NegativeWeight(usize, usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
