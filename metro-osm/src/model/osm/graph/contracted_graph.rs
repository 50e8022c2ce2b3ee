use geo::LineString;

use super::{EdgeRecord, IntersectionRecord};

/// final result of contraction: the edge table in emission order, the node
/// table ordered by compact id and, if requested, one geometry per edge.
#[derive(Debug, Clone, Default)]
pub struct ContractedGraph {
    pub edges: Vec<EdgeRecord>,
    pub intersections: Vec<IntersectionRecord>,
    /// aligned with `edges` when present
    pub geometries: Option<Vec<LineString<f64>>>,
}

impl ContractedGraph {
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_intersections(&self) -> usize {
        self.intersections.len()
    }

    /// total length of all directed edges in kilometers
    pub fn total_length_km(&self) -> f64 {
        self.edges.iter().map(|e| e.length_km).sum()
    }
}
