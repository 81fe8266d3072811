pub mod dijkstra;
pub mod traits;

pub use traits::{Distance, DistanceMap, ShortestPathAlgorithm, ShortestPathTree};
