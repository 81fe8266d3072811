use dijkstra_sssp::graph::generators::random_graph;
use dijkstra_sssp::{Dijkstra, DirectedGraph, Error, Graph, MutableGraph, ShortestPathAlgorithm};
use std::collections::HashMap;

// Builds the scenario graph A->B(1), A->C(4), B->C(2), B->D(5), C->D(1)
// with vertex ids A=0, B=1, C=2, D=3.
fn diamond_graph() -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 4).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(1, 3, 5).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph
}

// Reference distances by Bellman-Ford relaxation sweeps, used as an
// oracle against the priority-queue implementation.
fn bellman_ford(graph: &DirectedGraph<u64>, source: usize) -> HashMap<usize, u64> {
    let mut dist: HashMap<usize, u64> = HashMap::new();
    dist.insert(source, 0);

    for _ in 0..graph.vertex_count() {
        let mut changed = false;
        for u in graph.vertices() {
            let Some(&dist_u) = dist.get(&u) else {
                continue;
            };
            for e in graph.outgoing_edges(u) {
                let v = graph.opposite(u, e);
                let candidate = dist_u + graph.edge_weight(e);
                if dist.get(&v).map_or(true, |&d| candidate < d) {
                    dist.insert(v, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    dist
}

#[test]
fn test_diamond_graph_distances() {
    let graph = diamond_graph();
    let distances = Dijkstra::new().distances_from_source(&graph, 0).unwrap();

    assert_eq!(distances[&0], 0);
    assert_eq!(distances[&1], 1);
    assert_eq!(distances[&2], 3);
    assert_eq!(distances[&3], 4);
    assert_eq!(distances.len(), 4);
}

#[test]
fn test_distance_to_target_matches_full_run() {
    let graph = diamond_graph();
    let dijkstra = Dijkstra::new();

    let distances = dijkstra.distances_from_source(&graph, 0).unwrap();
    for v in graph.vertices() {
        assert_eq!(
            dijkstra.distance_to_target(&graph, 0, v).unwrap(),
            distances.get(&v).copied(),
            "distance_to_target disagrees for vertex {}",
            v
        );
    }
    assert_eq!(dijkstra.distance_to_target(&graph, 0, 3).unwrap(), Some(4));
}

#[test]
fn test_source_distance_is_zero() {
    let graph = diamond_graph();
    let dijkstra = Dijkstra::new();

    for source in graph.vertices() {
        let distances = dijkstra.distances_from_source(&graph, source).unwrap();
        assert_eq!(distances[&source], 0);
    }
}

#[test]
fn test_source_with_no_outgoing_edges() {
    // D has no outgoing edges, so from D only D itself is reachable.
    let graph = diamond_graph();
    let distances = Dijkstra::new().distances_from_source(&graph, 3).unwrap();

    assert_eq!(distances.len(), 1);
    assert_eq!(distances[&3], 0);
}

#[test]
fn test_disconnected_vertex_is_omitted() {
    let mut graph = diamond_graph();
    let isolated = graph.add_vertex();

    let distances = Dijkstra::new().distances_from_source(&graph, 0).unwrap();
    assert!(!distances.contains_key(&isolated));
    assert_eq!(distances.len(), 4);
}

#[test]
fn test_unreachable_target_returns_none() {
    let mut graph = diamond_graph();
    let isolated = graph.add_vertex();

    let dijkstra = Dijkstra::new();
    assert_eq!(
        dijkstra.distance_to_target(&graph, 0, isolated).unwrap(),
        None
    );
    // Edges point away from the source here, so A is unreachable from D.
    assert_eq!(dijkstra.distance_to_target(&graph, 3, 0).unwrap(), None);
}

#[test]
fn test_invalid_source_and_target_are_rejected() {
    let graph = diamond_graph();
    let dijkstra = Dijkstra::new();

    assert_eq!(
        dijkstra.distances_from_source(&graph, 99).unwrap_err(),
        Error::SourceNotFound
    );
    assert_eq!(
        dijkstra.distance_to_target(&graph, 99, 0).unwrap_err(),
        Error::SourceNotFound
    );
    assert_eq!(
        dijkstra.distance_to_target(&graph, 0, 99).unwrap_err(),
        Error::InvalidVertex(99)
    );
}

#[test]
fn test_idempotent_on_unmodified_graph() {
    let graph = random_graph(50, 200, 100, 7);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.distances_from_source(&graph, 0).unwrap();
    let second = dijkstra.distances_from_source(&graph, 0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_matches_bellman_ford_oracle() {
    for seed in 0..10 {
        let graph = random_graph(30, 90, 50, seed);
        let expected = bellman_ford(&graph, 0);
        let actual = Dijkstra::new().distances_from_source(&graph, 0).unwrap();
        assert_eq!(actual, expected, "mismatch for seed {}", seed);
    }
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();

    let distances = Dijkstra::new().distances_from_source(&graph, 0).unwrap();
    assert_eq!(distances[&1], 0);
    assert_eq!(distances[&2], 0);
}

#[test]
fn test_relaxation_skips_paths_exceeding_weight_range() {
    // 200 + 200 does not fit in u8; the only route to vertex 2 is
    // unrepresentable, so vertex 2 must be reported unreachable instead of
    // wrapping around to a bogus small distance.
    let mut graph: DirectedGraph<u8> = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 200).unwrap();
    graph.add_edge(1, 2, 200).unwrap();

    let dijkstra = Dijkstra::new();
    let distances = dijkstra.distances_from_source(&graph, 0).unwrap();
    assert_eq!(distances[&1], 200);
    assert!(!distances.contains_key(&2));

    // A representable direct edge wins over the overflowing route.
    graph.add_edge(0, 2, 250).unwrap();
    let distances = dijkstra.distances_from_source(&graph, 0).unwrap();
    assert_eq!(distances[&2], 250);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = DirectedGraph::with_vertices(2);
    graph.add_edge(0, 1, 9).unwrap();
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(0, 1, 5).unwrap();

    let distances = Dijkstra::new().distances_from_source(&graph, 0).unwrap();
    assert_eq!(distances[&1], 2);
}
