use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and `m` edges.
///
/// Edge endpoints are chosen uniformly (self-loops excluded, parallel edges
/// allowed) with weights in `1..=max_weight`. The rng is seeded so that a
/// given `(n, m, max_weight, seed)` always produces the same graph.
pub fn random_graph(n: usize, m: usize, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    assert!(n > 1, "need at least two vertices");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut added = 0;
    while added < m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to {
            continue;
        }
        let weight = rng.gen_range(1..=max_weight);
        let _ = graph.add_edge(from, to, weight);
        added += 1;
    }

    graph
}

/// Generates a `width` x `height` grid graph with unit-weight edges in the
/// four cardinal directions. Vertex `(x, y)` has id `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let directions = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    let _ = graph.add_edge(vertex, neighbor, 1);
                }
            }
        }
    }

    graph
}
