//! Graph traversal and shortest paths
//!
//! Graphs are adjacency lists over vertices `0..n`. Traversals visit
//! neighbours in insertion order so their output is deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::collections::UnionFind;

// ============================================================================
// Adjacency List
// ============================================================================

/// Unweighted adjacency-list graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Build a directed graph from an edge list.
    ///
    /// Edges that name a vertex `>= n` are ignored.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Build an undirected graph from an edge list.
    pub fn from_undirected_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            g.add_undirected_edge(u, v);
        }
        g
    }

    /// Add a directed edge. Returns false if either endpoint is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if from >= self.adj.len() || to >= self.adj.len() {
            return false;
        }
        self.adj[from].push(to);
        true
    }

    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> bool {
        if !self.add_edge(a, b) {
            return false;
        }
        if a != b {
            self.adj[b].push(a);
        }
        true
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Breadth-first visit order from `start`.
///
/// # Test Cases
/// - bfs(0-1, 0-2, 1-3, 2-4; start 0) = [0, 1, 2, 3, 4]
pub fn bfs(graph: &Graph, start: usize) -> Vec<usize> {
    if start >= graph.len() {
        return Vec::new();
    }
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &next in graph.neighbors(v) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    order
}

/// Number of edges on a shortest path from `from` to `to`.
pub fn shortest_hops(graph: &Graph, from: usize, to: usize) -> Option<usize> {
    if from >= graph.len() || to >= graph.len() {
        return None;
    }
    let mut dist: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    dist[from] = Some(0);
    queue.push_back(from);

    while let Some(v) = queue.pop_front() {
        let d = dist[v]?;
        if v == to {
            return Some(d);
        }
        for &next in graph.neighbors(v) {
            if dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Depth-first visit order from `start`.
///
/// Iterative; neighbours are pushed in reverse so the first-added neighbour is
/// explored first, matching the recursive formulation.
pub fn dfs(graph: &Graph, start: usize) -> Vec<usize> {
    if start >= graph.len() {
        return Vec::new();
    }
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        order.push(v);
        for &next in graph.neighbors(v).iter().rev() {
            if !visited[next] {
                stack.push(next);
            }
        }
    }
    order
}

// ============================================================================
// Shortest Paths
// ============================================================================

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    position: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap on cost, ties on position for determinism
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's shortest distances from `start` over non-negative weights.
///
/// `adj[u]` lists `(v, weight)` pairs. Unreachable vertices are `None`.
pub fn dijkstra(adj: &[Vec<(usize, u64)>], start: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; adj.len()];
    if start >= adj.len() {
        return dist;
    }
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(State {
        cost: 0,
        position: start,
    });

    while let Some(State { cost, position }) = heap.pop() {
        if dist[position].is_some_and(|best| cost > best) {
            continue;
        }
        for &(next, weight) in &adj[position] {
            if next >= adj.len() {
                continue;
            }
            let next_cost = cost.saturating_add(weight);
            if dist[next].map_or(true, |d| next_cost < d) {
                dist[next] = Some(next_cost);
                heap.push(State {
                    cost: next_cost,
                    position: next,
                });
            }
        }
    }
    dist
}

// ============================================================================
// Ordering & Connectivity
// ============================================================================

/// Kahn's algorithm. Returns `None` when the graph has a cycle.
///
/// Among ready vertices the smallest index goes first, so the result is the
/// lexicographically smallest topological order.
pub fn topological_sort(graph: &Graph) -> Option<Vec<usize>> {
    let n = graph.len();
    let mut indegree = vec![0usize; n];
    for v in 0..n {
        for &next in graph.neighbors(v) {
            indegree[next] += 1;
        }
    }

    let mut ready: BinaryHeap<std::cmp::Reverse<usize>> = (0..n)
        .filter(|&v| indegree[v] == 0)
        .map(std::cmp::Reverse)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(std::cmp::Reverse(v)) = ready.pop() {
        order.push(v);
        for &next in graph.neighbors(v) {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                ready.push(std::cmp::Reverse(next));
            }
        }
    }

    if order.len() == n {
        Some(order)
    } else {
        None
    }
}

/// Number of connected components, treating every edge as undirected.
pub fn connected_components(graph: &Graph) -> usize {
    let mut uf = UnionFind::new(graph.len());
    for v in 0..graph.len() {
        for &next in graph.neighbors(v) {
            uf.union(v, next);
        }
    }
    uf.count()
}

/// Count 4-connected islands of non-zero cells.
///
/// # Test Cases
/// - count_islands([[1,1,0],[0,1,0],[1,0,1]]) = 3
pub fn count_islands(grid: &[Vec<u8>]) -> usize {
    let rows = grid.len();
    let mut seen: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut islands = 0;

    for r in 0..rows {
        for c in 0..grid[r].len() {
            if grid[r][c] == 0 || seen[r][c] {
                continue;
            }
            islands += 1;
            let mut stack = vec![(r, c)];
            seen[r][c] = true;
            while let Some((y, x)) = stack.pop() {
                let mut visit = |ny: usize, nx: usize| {
                    if ny < rows && nx < grid[ny].len() && grid[ny][nx] != 0 && !seen[ny][nx] {
                        seen[ny][nx] = true;
                        stack.push((ny, nx));
                    }
                };
                if y > 0 {
                    visit(y - 1, x);
                }
                if x > 0 {
                    visit(y, x - 1);
                }
                visit(y + 1, x);
                visit(y, x + 1);
            }
        }
    }
    islands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Graph {
        Graph::from_undirected_edges(5, &[(0, 1), (0, 2), (1, 3), (2, 4)])
    }

    #[test]
    fn test_bfs() {
        assert_eq!(bfs(&tree(), 0), vec![0, 1, 2, 3, 4]);
        assert!(bfs(&tree(), 9).is_empty());
    }

    #[test]
    fn test_dfs() {
        assert_eq!(dfs(&tree(), 0), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_shortest_hops() {
        let g = tree();
        assert_eq!(shortest_hops(&g, 3, 4), Some(4));
        assert_eq!(shortest_hops(&g, 0, 0), Some(0));
        let disconnected = Graph::new(2);
        assert_eq!(shortest_hops(&disconnected, 0, 1), None);
    }

    #[test]
    fn test_dijkstra() {
        let adj = vec![
            vec![(1, 4), (2, 1)],
            vec![(3, 1)],
            vec![(1, 2), (3, 5)],
            vec![],
            vec![],
        ];
        assert_eq!(
            dijkstra(&adj, 0),
            vec![Some(0), Some(3), Some(1), Some(4), None]
        );
    }

    #[test]
    fn test_topological_sort() {
        let dag = Graph::from_edges(6, &[(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]);
        assert_eq!(topological_sort(&dag), Some(vec![4, 5, 0, 2, 3, 1]));

        let cyclic = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(topological_sort(&cyclic), None);
    }

    #[test]
    fn test_connected_components() {
        let g = Graph::from_edges(5, &[(0, 1), (3, 4)]);
        assert_eq!(connected_components(&g), 3);
        assert_eq!(connected_components(&Graph::new(0)), 0);
    }

    #[test]
    fn test_count_islands() {
        let grid = vec![vec![1, 1, 0], vec![0, 1, 0], vec![1, 0, 1]];
        assert_eq!(count_islands(&grid), 3);
        assert_eq!(count_islands(&[]), 0);
        assert_eq!(count_islands(&[vec![0, 0]]), 0);
    }
}
