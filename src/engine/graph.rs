use super::error::EngineError;
use crate::core::config::SketchConfig;
use crate::core::models::architecture::Architecture;
use crate::core::models::connectivity::Connectivity;
use crate::core::models::ids::SseId;
use std::collections::HashMap;
use tracing::debug;

/// Undirected adjacency graph over the placed elements of an absolute
/// architecture.
///
/// Two rules contribute edges:
///
/// - grid adjacency: elements whose layer indices differ by at most 1 and
///   whose column indices differ by at most 1;
/// - long-range contact: any pair whose planar (x, z) center distance is
///   within the configured link threshold, which admits non-grid contacts
///   such as sheet greek keys. Within a single layer this rule is capped by
///   type: strands may reach two columns over, helices only one.
///
/// Nodes are densely indexed in the architecture's layer-major order, which
/// is what the enumerator's visited bitmask relies on.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    nodes: Vec<SseId>,
    index: HashMap<SseId, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    pub fn build(architecture: &Architecture, config: &SketchConfig) -> Result<Self, EngineError> {
        if architecture.is_relative() {
            return Err(EngineError::RelativeArchitecture);
        }

        let mut nodes = Vec::new();
        let mut grid = Vec::new();
        let mut centers = Vec::new();
        for (layer, column, sse) in architecture.iter_sses() {
            nodes.push(sse.id);
            grid.push((layer, column));
            centers.push((sse.coordinates.x, sse.coordinates.z));
        }

        let index: HashMap<SseId, usize> =
            nodes.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let n = nodes.len();
        let mut adjacency = vec![Vec::new(); n];

        for a in 0..n {
            for b in (a + 1)..n {
                if Self::connected(a, b, &nodes, &grid, &centers, config) {
                    adjacency[a].push(b);
                    adjacency[b].push(a);
                }
            }
        }

        let edge_count: usize = adjacency.iter().map(|adj| adj.len()).sum::<usize>() / 2;
        debug!(nodes = n, edges = edge_count, "sketch graph built");

        Ok(Self {
            nodes,
            index,
            adjacency,
        })
    }

    fn connected(
        a: usize,
        b: usize,
        nodes: &[SseId],
        grid: &[(usize, usize)],
        centers: &[(f64, f64)],
        config: &SketchConfig,
    ) -> bool {
        let (la, ca) = grid[a];
        let (lb, cb) = grid[b];
        let layer_diff = la.abs_diff(lb);
        let column_diff = ca.abs_diff(cb);

        // Rule A: grid neighbours.
        if layer_diff <= 1 && column_diff <= 1 {
            return true;
        }

        // Rule B: long-range planar contact.
        if layer_diff == 0 && nodes[a].sse_type == nodes[b].sse_type {
            let reach = if nodes[a].sse_type.is_strand() { 2 } else { 1 };
            if column_diff > reach {
                return false;
            }
        }
        let (xa, za) = centers[a];
        let (xb, zb) = centers[b];
        let planar = ((xa - xb).powi(2) + (za - zb).powi(2)).sqrt();
        planar <= config.distance.max_loop
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[SseId] {
        &self.nodes
    }

    pub fn node_id(&self, index: usize) -> SseId {
        self.nodes[index]
    }

    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    pub fn contains_edge(&self, a: &SseId, b: &SseId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.adjacency[ia].contains(&ib),
            _ => false,
        }
    }

    /// Validates an externally supplied ordering against the graph and turns
    /// it into a [`Connectivity`]. The ordering must visit every node exactly
    /// once and every consecutive pair must be an edge; this is the only way
    /// a connectivity is created outside the enumerator.
    pub fn secure_ordering(&self, order: &[SseId]) -> Result<Connectivity, EngineError> {
        if order.len() != self.node_count() {
            return Err(EngineError::IncompleteOrdering {
                got: order.len(),
                want: self.node_count(),
            });
        }

        let mut seen = vec![false; self.node_count()];
        for id in order {
            let index = *self
                .index
                .get(id)
                .ok_or(EngineError::UnknownElement(*id))?;
            if seen[index] {
                return Err(EngineError::IncompleteOrdering {
                    got: order.len(),
                    want: self.node_count(),
                });
            }
            seen[index] = true;
        }

        for pair in order.windows(2) {
            if !self.contains_edge(&pair[0], &pair[1]) {
                return Err(EngineError::NotAdjacent {
                    a: pair[0],
                    b: pair[1],
                });
            }
        }

        Ok(Connectivity::from_path(order.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sse::SecondaryStructureElement;

    fn sse(id: &str) -> SecondaryStructureElement {
        SecondaryStructureElement::new(id.parse().unwrap())
    }

    fn build(layers: Vec<Vec<SecondaryStructureElement>>) -> AdjacencyGraph {
        let config = SketchConfig::default();
        let arch = Architecture::from_layers(layers)
            .unwrap()
            .cast_absolute(&config)
            .unwrap();
        AdjacencyGraph::build(&arch, &config).unwrap()
    }

    fn id(raw: &str) -> SseId {
        raw.parse().unwrap()
    }

    #[test]
    fn requires_absolute_architecture() {
        let arch = Architecture::from_layers(vec![vec![sse("A1H")]]).unwrap();
        assert!(matches!(
            AdjacencyGraph::build(&arch, &SketchConfig::default()),
            Err(EngineError::RelativeArchitecture)
        ));
    }

    #[test]
    fn two_by_two_grid_is_fully_linked() {
        let graph = build(vec![
            vec![sse("A1H"), sse("A2H")],
            vec![sse("B1E"), sse("B2E")],
        ]);
        assert_eq!(graph.node_count(), 4);
        for (a, b) in [
            ("A1H", "A2H"),
            ("B1E", "B2E"),
            ("A1H", "B1E"),
            ("A2H", "B2E"),
            ("A1H", "B2E"),
            ("A2H", "B1E"),
        ] {
            assert!(graph.contains_edge(&id(a), &id(b)), "missing {a}-{b}");
        }
    }

    #[test]
    fn strands_reach_two_columns_for_greek_keys() {
        let graph = build(vec![vec![sse("A1E"), sse("A2E"), sse("A3E"), sse("A4E")]]);
        assert!(graph.contains_edge(&id("A1E"), &id("A3E")));
        assert!(graph.contains_edge(&id("A2E"), &id("A4E")));
        // Three columns over is out of reach regardless of distance.
        assert!(!graph.contains_edge(&id("A1E"), &id("A4E")));
    }

    #[test]
    fn helices_only_reach_grid_neighbours_in_a_layer() {
        let graph = build(vec![vec![sse("A1H"), sse("A2H"), sse("A3H")]]);
        assert!(graph.contains_edge(&id("A1H"), &id("A2H")));
        assert!(!graph.contains_edge(&id("A1H"), &id("A3H")));
    }

    #[test]
    fn secure_ordering_enforces_graph_edges() {
        let graph = build(vec![
            vec![sse("A1H"), sse("A2H")],
            vec![sse("B1E"), sse("B2E")],
        ]);

        let good = [id("A1H"), id("A2H"), id("B2E"), id("B1E")];
        let conn = graph.secure_ordering(&good).unwrap();
        assert_eq!(conn.order(), &good);

        assert!(matches!(
            graph.secure_ordering(&[id("A1H"), id("A2H")]),
            Err(EngineError::IncompleteOrdering { got: 2, want: 4 })
        ));
        assert!(matches!(
            graph.secure_ordering(&[id("A1H"), id("A2H"), id("B2E"), id("C1E")]),
            Err(EngineError::UnknownElement(_))
        ));
    }

    #[test]
    fn secure_ordering_rejects_non_adjacent_pairs() {
        // Distant helices in one layer: A1H-A3H is not an edge.
        let graph = build(vec![vec![sse("A1H"), sse("A2H"), sse("A3H")]]);
        assert!(matches!(
            graph.secure_ordering(&[id("A2H"), id("A1H"), id("A3H")]),
            Err(EngineError::NotAdjacent { .. })
        ));
    }
}
