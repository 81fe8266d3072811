use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{Error, Result};

/// Opaque identity token for an edge of a graph.
///
/// Edge ids are stable for the lifetime of the graph and index into the
/// graph's internal edge storage; they are never raw references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an edge id from a position in a graph's edge storage.
    ///
    /// Intended for `Graph` implementors; an id minted for one graph has no
    /// meaning in another.
    pub fn from_index(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the position of this edge in the graph's edge storage
    pub fn index(self) -> usize {
        self.0
    }
}

/// Trait representing a weighted directed graph with integer edge weights
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertex ids of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the ids of edges leaving a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns an iterator over the ids of edges entering a vertex
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns the endpoint of `edge` opposite to `vertex`.
    ///
    /// # Panics
    /// Panics if `edge` is unknown or not incident to `vertex`; passing an
    /// edge that did not come from this graph is a caller programming error.
    fn opposite(&self, vertex: usize, edge: EdgeId) -> usize;

    /// Returns the weight of an edge.
    ///
    /// # Panics
    /// Panics if `edge` is not an edge of this graph.
    fn edge_weight(&self, edge: EdgeId) -> W;

    /// Returns the `(from, to)` endpoints of an edge.
    ///
    /// # Panics
    /// Panics if `edge` is not an edge of this graph.
    fn endpoints(&self, edge: EdgeId) -> (usize, usize);

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Checks every edge weight and reports the first negative one.
    ///
    /// Shortest-path computations require non-negative weights; callers that
    /// cannot guarantee the precondition can run this before computing.
    fn validate_non_negative(&self) -> Result<()> {
        for v in self.vertices() {
            for e in self.outgoing_edges(v) {
                if self.edge_weight(e) < W::zero() {
                    let (from, to) = self.endpoints(e);
                    return Err(Error::NegativeWeight(from, to));
                }
            }
        }
        Ok(())
    }
}

/// Trait for mutable graph operations.
///
/// Deliberately offers no removal: edge ids handed out by `add_edge` stay
/// valid for the lifetime of the graph.
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Returns `None` if either endpoint does not exist or the weight is
    /// negative, otherwise the stable id of the new edge.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<EdgeId>;

    /// Updates the weight of an existing edge; rejects negative weights
    fn update_edge_weight(&mut self, edge: EdgeId, weight: W) -> bool;
}
