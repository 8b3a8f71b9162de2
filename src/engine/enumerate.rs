use super::error::EngineError;
use super::graph::AdjacencyGraph;
use crate::core::config::SketchConfig;
use crate::core::models::connectivity::Connectivity;
use tracing::debug;

/// Hard ceiling imposed by the `u64` visited bitmask.
const BITMASK_LIMIT: usize = 64;

/// Enumerates every Hamiltonian path of the sketch graph, and for each found
/// path also its exact reverse (both chain termini are valid starts).
///
/// The search walks all simple paths between every unordered node pair with
/// an explicit stack and a dense-index visited bitmask; partial paths are
/// discarded. This is exponential in the node count by construction, so the
/// configured `max_elements` guard is enforced before any search starts.
pub fn enumerate_connectivities(
    graph: &AdjacencyGraph,
    config: &SketchConfig,
) -> Result<Vec<Connectivity>, EngineError> {
    let n = graph.node_count();
    let limit = config.max_elements.min(BITMASK_LIMIT);
    if n > limit {
        return Err(EngineError::TooManyElements { count: n, limit });
    }

    // Paths run between distinct termini, so fewer than two nodes yields
    // nothing.
    let mut found = Vec::new();
    for start in 0..n {
        for goal in (start + 1)..n {
            collect_full_paths(graph, start, goal, &mut found);
        }
    }

    debug!(nodes = n, connectivities = found.len(), "enumeration complete");
    Ok(found)
}

/// Depth-first walk over all simple paths from `start` to `goal`, keeping
/// only those that visit every node. `goal` is never pushed as an interior
/// node, so reaching it closes the path.
fn collect_full_paths(
    graph: &AdjacencyGraph,
    start: usize,
    goal: usize,
    found: &mut Vec<Connectivity>,
) {
    let n = graph.node_count();
    let mut path: Vec<usize> = vec![start];
    let mut cursors: Vec<usize> = vec![0];
    let mut visited: u64 = 1 << start;

    while !path.is_empty() {
        let depth = path.len() - 1;
        let node = path[depth];
        let neighbors = graph.neighbors(node);
        let cursor = &mut cursors[depth];

        if *cursor >= neighbors.len() {
            path.pop();
            cursors.pop();
            visited &= !(1 << node);
            continue;
        }

        let next = neighbors[*cursor];
        *cursor += 1;

        if next == goal {
            if path.len() + 1 == n {
                let mut order: Vec<_> = path.iter().map(|&i| graph.node_id(i)).collect();
                order.push(graph.node_id(goal));
                let conn = Connectivity::from_path(order);
                found.push(conn.reversed());
                found.push(conn);
            }
            continue;
        }
        if visited & (1 << next) != 0 {
            continue;
        }

        visited |= 1 << next;
        path.push(next);
        cursors.push(0);
    }
}
