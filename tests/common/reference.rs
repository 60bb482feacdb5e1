//! Independent reference algorithms to check search results against

use routegraph::{CostCalculator, Graph, VertexId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Floyd-Warshall over the undirected graph
///
/// Unreachable pairs are absent from the result.
pub fn all_pairs_distances(
    graph: &Graph,
    calculator: &dyn CostCalculator,
) -> HashMap<(VertexId, VertexId), f64> {
    let ids: Vec<VertexId> = graph.vertices().map(|v| v.id).collect();
    let n = ids.len();
    let index: HashMap<VertexId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in graph.edges() {
        let (a, b) = (index[&edge.start], index[&edge.end]);
        let cost = calculator.costs(edge);
        if cost < dist[a][b] {
            dist[a][b] = cost;
            dist[b][a] = cost;
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }

    let mut result = HashMap::new();
    for i in 0..n {
        for j in 0..n {
            if dist[i][j].is_finite() {
                result.insert((ids[i], ids[j]), dist[i][j]);
            }
        }
    }
    result
}

/// Breadth-first reachability over undirected edges
pub fn is_reachable(graph: &Graph, from: VertexId, to: VertexId) -> bool {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for edge in graph.incident_edges(current) {
            if let Some(next) = edge.opposite(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    false
}
