use num_traits::PrimInt;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::{EdgeId, Graph};
use crate::Result;

/// A tentative distance: either a finite path length or not yet reached.
///
/// `Unreached` orders above every finite distance, so it plays the role of
/// the textbook "infinity" priority without risking arithmetic overflow --
/// relaxation never adds a weight to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance<W>
where
    W: PrimInt + Debug,
{
    Finite(W),
    Unreached,
}

impl<W> Distance<W>
where
    W: PrimInt + Debug,
{
    /// Returns the finite distance, or `None` for `Unreached`
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreached => None,
        }
    }
}

/// Final shortest-path distances: every reachable vertex mapped to its
/// exact distance from the source. Unreachable vertices are absent.
pub type DistanceMap<W> = HashMap<usize, W>;

/// Shortest-path tree: every reachable non-source vertex mapped to the
/// incoming edge used to reach it from its parent on a shortest path.
pub type ShortestPathTree = HashMap<usize, EdgeId>;

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes shortest-path distances from `source` to every reachable
    /// vertex of the graph. Vertices with no path from the source do not
    /// appear in the result.
    ///
    /// Precondition: all edge weights are non-negative; results are
    /// undefined otherwise (see `Graph::validate_non_negative`).
    fn distances_from_source(&self, graph: &G, source: usize) -> Result<DistanceMap<W>>;

    /// Computes the shortest-path distance from `source` to `target`,
    /// stopping as soon as the target's distance is finalized.
    ///
    /// Returns `Ok(None)` if the target is unreachable from the source.
    fn distance_to_target(&self, graph: &G, source: usize, target: usize) -> Result<Option<W>>;

    /// Reconstructs a shortest-path tree rooted at `source` from a
    /// finalized distance map produced by `distances_from_source`.
    ///
    /// Each reachable vertex v other than the source is mapped to an
    /// incoming edge (u, v) with `distances[v] == distances[u] + weight`.
    /// Tight edges are traversed forward from the source and each vertex
    /// keeps its discovering edge, so every parent chain leads back to the
    /// source even when zero-weight cycles make multiple incoming edges
    /// tight. Ties go to the first discovery in traversal order; callers
    /// must not depend on a particular choice among ties.
    fn shortest_path_tree(
        &self,
        graph: &G,
        source: usize,
        distances: &DistanceMap<W>,
    ) -> ShortestPathTree {
        let mut tree = ShortestPathTree::new();
        if !distances.contains_key(&source) {
            return tree;
        }

        let mut stack = vec![source];
        while let Some(u) = stack.pop() {
            let dist_u = distances[&u];
            for e in graph.outgoing_edges(u) {
                let v = graph.opposite(u, e);
                if v == source || tree.contains_key(&v) {
                    continue;
                }
                if let Some(&dist_v) = distances.get(&v) {
                    if Some(dist_v) == dist_u.checked_add(&graph.edge_weight(e)) {
                        tree.insert(v, e);
                        stack.push(v);
                    }
                }
            }
        }

        tree
    }
}
