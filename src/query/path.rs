//! A* path finding

use super::frontier::Frontier;
use super::types::PathResult;
use crate::cost::CostCalculator;
use crate::graph::{Edge, Graph, VertexId};
use std::collections::{HashMap, HashSet};

/// Per-query bookkeeping for one discovered vertex
#[derive(Debug, Clone, Copy)]
struct Scratch<'g> {
    cost_so_far: f64,
    estimated_total: f64,
    /// Vertex we came from and the edge taken
    predecessor: Option<(VertexId, &'g Edge)>,
}

/// Find the path from `start` to `target` minimizing `calculator` costs
///
/// All search state lives in a scratch map owned by this call, so the graph
/// is only borrowed and nothing needs resetting on any exit path.
///
/// Relaxation uses a non-strict rule: a pending neighbor reached again at
/// exactly its best known cost takes the new predecessor. An expanded vertex
/// is only reopened by a strictly cheaper route, so zero-cost edges cannot
/// cycle. Neighbors are found by scanning all edges, and parallel edges are
/// each relaxed on their own. Edge costs must be non-negative.
#[tracing::instrument(level = "debug", skip(graph, calculator))]
pub fn astar(
    graph: &Graph,
    start: VertexId,
    target: VertexId,
    calculator: &dyn CostCalculator,
) -> PathResult {
    let (Some(start_vertex), Some(target_vertex)) = (graph.vertex(start), graph.vertex(target))
    else {
        tracing::warn!(%start, %target, "search endpoint is not a vertex of the graph");
        return PathResult::not_found(0);
    };

    let mut scratch: HashMap<VertexId, Scratch<'_>> = HashMap::new();
    let mut expanded: HashSet<VertexId> = HashSet::new();
    let mut frontier = Frontier::new();
    let mut expansions = 0;

    let estimate = calculator.estimated_costs(start_vertex, target_vertex);
    scratch.insert(
        start,
        Scratch {
            cost_so_far: 0.0,
            estimated_total: estimate,
            predecessor: None,
        },
    );
    frontier.push(start, estimate);

    while let Some(entry) = frontier.pop() {
        let current = entry.vertex;
        let Some(state) = scratch.get(&current).copied() else {
            continue;
        };
        // Superseded by a cheaper route, or already expanded at this cost
        if entry.estimated_total > state.estimated_total || !expanded.insert(current) {
            continue;
        }
        expansions += 1;

        if current == target {
            let edges = reconstruct_path(&scratch, target);
            let total_cost = edges.iter().map(|e| calculator.costs(e)).sum();
            tracing::debug!(
                edges = edges.len(),
                cost = total_cost,
                expansions,
                pending = frontier.len(),
                "route found"
            );
            return PathResult::found(edges, total_cost, expansions);
        }

        for edge in graph.incident_edges(current) {
            let Some(neighbor_id) = edge.opposite(current) else {
                continue;
            };
            let Some(neighbor) = graph.vertex(neighbor_id) else {
                continue;
            };

            let tentative = state.cost_so_far + calculator.costs(edge);
            let (improves, ties) = match scratch.get(&neighbor_id) {
                None => (true, false),
                Some(known) => (
                    tentative < known.cost_so_far,
                    tentative == known.cost_so_far && !expanded.contains(&neighbor_id),
                ),
            };
            if !improves && !ties {
                continue;
            }

            let estimated_total = tentative + calculator.estimated_costs(neighbor, target_vertex);
            scratch.insert(
                neighbor_id,
                Scratch {
                    cost_so_far: tentative,
                    estimated_total,
                    predecessor: Some((current, edge)),
                },
            );
            // A tie only swaps the predecessor; the neighbor is already
            // waiting in the frontier at this priority.
            if improves {
                expanded.remove(&neighbor_id);
                frontier.push(neighbor_id, estimated_total);
            }
        }
    }

    tracing::info!(%start, %target, expansions, "no route found");
    PathResult::not_found(expansions)
}

/// Walk predecessor links back from `target`, then flip into travel order
fn reconstruct_path(scratch: &HashMap<VertexId, Scratch<'_>>, target: VertexId) -> Vec<Edge> {
    let mut path = Vec::new();
    let mut current = target;

    while let Some((previous, edge)) = scratch.get(&current).and_then(|s| s.predecessor) {
        path.push(edge.clone());
        current = previous;
        // predecessor links form a tree, so a walk never outgrows it
        if path.len() > scratch.len() {
            tracing::warn!(%target, "predecessor cycle while rebuilding path");
            break;
        }
    }

    path.reverse();
    path
}
