use log::{debug, trace};
use num_traits::PrimInt;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::{Distance, DistanceMap, ShortestPathAlgorithm};
use crate::data_structures::{AdaptableHeap, HeapHandle};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with a handle-based adaptable priority queue.
///
/// Every vertex is inserted into the queue up front with an `Unreached`
/// priority (the source with `Finite(0)`); relaxation lowers priorities in
/// place via decrease-key instead of pushing duplicate entries.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Per-run working state: tentative distances and queue handles.
///
/// A vertex owns a handle only while it is unsettled; settling removes it.
struct Frontier<W>
where
    W: PrimInt + Debug,
{
    dist: HashMap<usize, Distance<W>>,
    queue: AdaptableHeap<Distance<W>, usize>,
    handles: HashMap<usize, HeapHandle>,
}

impl<W> Frontier<W>
where
    W: PrimInt + Debug,
{
    /// Inserts every vertex of the graph into the queue, the source at
    /// distance zero and everything else unreached.
    fn init<G: Graph<W>>(graph: &G, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut frontier = Frontier {
            dist: HashMap::with_capacity(n),
            queue: AdaptableHeap::with_capacity(n),
            handles: HashMap::with_capacity(n),
        };

        for v in graph.vertices() {
            let d = if v == source {
                Distance::Finite(W::zero())
            } else {
                Distance::Unreached
            };
            frontier.dist.insert(v, d);
            let handle = frontier.queue.insert(d, v);
            frontier.handles.insert(v, handle);
        }

        frontier
    }

    /// Relaxes the outgoing edges of the settled vertex `u` at distance
    /// `dist_u`, skipping endpoints already in `cloud`.
    fn relax_outgoing<G: Graph<W>>(
        &mut self,
        graph: &G,
        cloud: &DistanceMap<W>,
        u: usize,
        dist_u: W,
    ) {
        for e in graph.outgoing_edges(u) {
            let v = graph.opposite(u, e);
            if cloud.contains_key(&v) {
                continue;
            }

            // A path whose length exceeds W's range can never beat a
            // representable one, so overflow means skip.
            let Some(sum) = dist_u.checked_add(&graph.edge_weight(e)) else {
                continue;
            };
            let candidate = Distance::Finite(sum);
            if candidate < self.dist[&v] {
                trace!("relaxing edge ({}, {}) to {:?}", u, v, candidate);
                self.dist.insert(v, candidate);
                self.queue.decrease_key(self.handles[&v], candidate);
            }
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn distances_from_source(&self, graph: &G, source: usize) -> Result<DistanceMap<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        debug!(
            "computing distances from source {} over {} vertices",
            source,
            graph.vertex_count()
        );

        let mut frontier = Frontier::init(graph, source);
        let mut cloud = DistanceMap::new();

        while let Some((key, u)) = frontier.queue.remove_min() {
            let dist_u = match key.finite() {
                Some(d) => d,
                // Minimum is unreached: nothing left in the queue has a
                // path from the source.
                None => break,
            };

            cloud.insert(u, dist_u);
            frontier.handles.remove(&u);
            frontier.relax_outgoing(graph, &cloud, u, dist_u);
        }

        debug!("settled {} reachable vertices", cloud.len());
        Ok(cloud)
    }

    fn distance_to_target(&self, graph: &G, source: usize, target: usize) -> Result<Option<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        let mut frontier = Frontier::init(graph, source);
        let mut cloud = DistanceMap::new();

        while let Some((key, u)) = frontier.queue.remove_min() {
            let dist_u = match key.finite() {
                Some(d) => d,
                None => break,
            };

            cloud.insert(u, dist_u);
            frontier.handles.remove(&u);

            // Compare extracted vertex identity, not its distance: the
            // target is done the moment it is settled.
            if u == target {
                debug!("target {} settled at distance {:?}", target, dist_u);
                return Ok(Some(dist_u));
            }

            frontier.relax_outgoing(graph, &cloud, u, dist_u);
        }

        debug!("target {} is unreachable from {}", target, source);
        Ok(None)
    }
}
