use crate::graph::traits::{EdgeId, Graph, MutableGraph};
use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A single directed edge stored in the edge arena
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeRecord<W> {
    from: usize,
    to: usize,
    weight: W,
}

/// A directed graph implementation using an edge arena plus adjacency lists.
///
/// Every edge gets a stable [`EdgeId`] at insertion; adjacency lists store
/// ids rather than endpoint copies so that an edge can be resolved to its
/// opposite endpoint and weight from either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Edge storage indexed by `EdgeId`
    edges: Vec<EdgeRecord<W>>,

    /// Outgoing edge ids for each vertex
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edge ids for each vertex
    incoming: Vec<Vec<EdgeId>>,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertices],
            incoming: vec![Vec::new(); vertices],
        }
    }

    fn record(&self, edge: EdgeId) -> &EdgeRecord<W> {
        &self.edges[edge.0]
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.vertex_count())
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.incoming.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn opposite(&self, vertex: usize, edge: EdgeId) -> usize {
        let rec = self.record(edge);
        if rec.from == vertex {
            rec.to
        } else if rec.to == vertex {
            rec.from
        } else {
            panic!("edge {:?} is not incident to vertex {}", edge, vertex);
        }
    }

    fn edge_weight(&self, edge: EdgeId) -> W {
        self.record(edge).weight
    }

    fn endpoints(&self, edge: EdgeId) -> (usize, usize) {
        let rec = self.record(edge);
        (rec.from, rec.to)
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.outgoing.len();
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<EdgeId> {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return None;
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord { from, to, weight });
        self.outgoing[from].push(id);
        self.incoming[to].push(id);
        Some(id)
    }

    fn update_edge_weight(&mut self, edge: EdgeId, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }
        match self.edges.get_mut(edge.0) {
            Some(rec) => {
                rec.weight = weight;
                true
            }
            None => false,
        }
    }
}
