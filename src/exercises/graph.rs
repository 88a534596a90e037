//! Graph Exercises
//!
//! Inputs describe a graph as a vertex count plus an edge list, e.g.
//! `{"n": 4, "edges": [[0, 1], [1, 2]], "start": 0}`.

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use katas_algo::graph::{self, Graph};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct GraphInput {
    n: usize,
    edges: Vec<(usize, usize)>,
    #[serde(default)]
    start: usize,
    #[serde(default)]
    target: usize,
}

#[derive(Debug, Deserialize)]
struct WeightedInput {
    n: usize,
    edges: Vec<(usize, usize, u64)>,
    start: usize,
}

pub fn register_graph(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "bfs_order",
        "Breadth-first visit order over an undirected graph.",
        Category::Graph,
        vec![
            case(
                json!({"n": 5, "edges": [[0, 1], [0, 2], [1, 3], [2, 4]], "start": 0}),
                json!([0, 1, 2, 3, 4]),
            ),
            case(
                json!({"n": 5, "edges": [[0, 1], [0, 2], [1, 3], [2, 4]], "start": 3}),
                json!([3, 1, 0, 2, 4]),
            ),
            case(json!({"n": 3, "edges": [], "start": 1}), json!([1])),
            case(json!({"n": 2, "edges": [[0, 1]], "start": 5}), json!([])),
            case(
                json!({"n": 4, "edges": [[0, 1], [1, 2], [2, 3], [3, 0]], "start": 0}),
                json!([0, 1, 3, 2]),
            ),
        ],
        typed(|g: GraphInput| graph::bfs(&Graph::from_undirected_edges(g.n, &g.edges), g.start)),
    )?;

    registry.register(
        "dfs_order",
        "Depth-first visit order over an undirected graph.",
        Category::Graph,
        vec![
            case(
                json!({"n": 5, "edges": [[0, 1], [0, 2], [1, 3], [2, 4]], "start": 0}),
                json!([0, 1, 3, 2, 4]),
            ),
            case(
                json!({"n": 4, "edges": [[0, 1], [1, 2], [2, 3], [3, 0]], "start": 0}),
                json!([0, 1, 2, 3]),
            ),
            case(json!({"n": 1, "edges": [], "start": 0}), json!([0])),
            case(json!({"n": 3, "edges": [[1, 2]], "start": 0}), json!([0])),
            case(json!({"n": 3, "edges": [[0, 1], [0, 2]], "start": 2}), json!([2, 0, 1])),
        ],
        typed(|g: GraphInput| graph::dfs(&Graph::from_undirected_edges(g.n, &g.edges), g.start)),
    )?;

    registry.register(
        "shortest_hops",
        "Fewest edges between two vertices of an undirected graph.",
        Category::Graph,
        vec![
            case(
                json!({"n": 5, "edges": [[0, 1], [0, 2], [1, 3], [2, 4]], "start": 3, "target": 4}),
                json!(4),
            ),
            case(json!({"n": 2, "edges": [], "start": 0, "target": 1}), json!(null)),
            case(json!({"n": 1, "edges": [], "start": 0, "target": 0}), json!(0)),
            case(
                json!({"n": 4, "edges": [[0, 1], [1, 2], [2, 3], [0, 3]], "start": 0, "target": 2}),
                json!(2),
            ),
            case(json!({"n": 2, "edges": [[0, 1]], "start": 0, "target": 7}), json!(null)),
        ],
        typed(|g: GraphInput| {
            graph::shortest_hops(&Graph::from_undirected_edges(g.n, &g.edges), g.start, g.target)
        }),
    )?;

    registry.register(
        "dijkstra",
        "Shortest distances from a source over non-negative directed weights.",
        Category::Graph,
        vec![
            case(
                json!({"n": 5, "edges": [[0, 1, 4], [0, 2, 1], [2, 1, 2], [1, 3, 1], [2, 3, 5]], "start": 0}),
                json!([0, 3, 1, 4, null]),
            ),
            case(json!({"n": 1, "edges": [], "start": 0}), json!([0])),
            case(
                json!({"n": 3, "edges": [[0, 1, 7], [1, 2, 0]], "start": 0}),
                json!([0, 7, 7]),
            ),
            case(
                json!({"n": 3, "edges": [[0, 1, 1], [1, 2, 1]], "start": 2}),
                json!([null, null, 0]),
            ),
            case(
                json!({"n": 4, "edges": [[0, 1, 10], [0, 2, 3], [2, 1, 4], [1, 3, 2], [2, 3, 8]], "start": 0}),
                json!([0, 7, 3, 9]),
            ),
        ],
        typed(|w: WeightedInput| {
            let mut adj: Vec<Vec<(usize, u64)>> = vec![Vec::new(); w.n];
            for (u, v, weight) in w.edges {
                if u < w.n {
                    adj[u].push((v, weight));
                }
            }
            graph::dijkstra(&adj, w.start)
        }),
    )?;

    registry.register(
        "topological_sort",
        "Smallest-first topological order of a DAG, or null when cyclic.",
        Category::Graph,
        vec![
            case(
                json!({"n": 6, "edges": [[5, 2], [5, 0], [4, 0], [4, 1], [2, 3], [3, 1]]}),
                json!([4, 5, 0, 2, 3, 1]),
            ),
            case(json!({"n": 3, "edges": [[0, 1], [1, 2], [2, 0]]}), json!(null)),
            case(json!({"n": 3, "edges": []}), json!([0, 1, 2])),
            case(json!({"n": 2, "edges": [[1, 0]]}), json!([1, 0])),
            case(json!({"n": 0, "edges": []}), json!([])),
        ],
        typed(|g: GraphInput| graph::topological_sort(&Graph::from_edges(g.n, &g.edges))),
    )?;

    registry.register(
        "connected_components",
        "Count connected components with union-find.",
        Category::Graph,
        vec![
            case(json!({"n": 5, "edges": [[0, 1], [1, 2], [3, 4]]}), json!(2)),
            case(json!({"n": 5, "edges": [[0, 1], [1, 2], [2, 3], [3, 4]]}), json!(1)),
            case(json!({"n": 4, "edges": []}), json!(4)),
            case(json!({"n": 0, "edges": []}), json!(0)),
            case(json!({"n": 3, "edges": [[0, 0]]}), json!(3)),
        ],
        typed(|g: GraphInput| graph::connected_components(&Graph::from_edges(g.n, &g.edges))),
    )?;

    registry.register(
        "number_of_islands",
        "Count 4-connected groups of 1s in a grid.",
        Category::Graph,
        vec![
            case(
                json!([[1, 1, 0, 0, 0], [1, 1, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 1, 1]]),
                json!(3),
            ),
            case(json!([[1, 1, 1], [0, 1, 0], [1, 1, 1]]), json!(1)),
            case(json!([[0, 0], [0, 0]]), json!(0)),
            case(json!([]), json!(0)),
            case(json!([[1, 0, 1, 0, 1]]), json!(3)),
        ],
        typed(|grid: Vec<Vec<u8>>| graph::count_islands(&grid)),
    )?;

    Ok(())
}
