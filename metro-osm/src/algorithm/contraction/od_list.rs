use crate::{
    algorithm::topology::AppearanceCount,
    model::osm::graph::OsmNodeId,
};
use itertools::Itertools;

/// the positions, within a way's node list, of the nodes that become vertices
/// of the contracted graph: the first node, the last node, and every interior
/// node referenced more than once across all ways.
///
/// positions are kept instead of node ids so that a node occurring twice in
/// the same way (closed ways) splits at the right place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdList {
    positions: Vec<usize>,
}

impl OdList {
    pub fn new(nodes: &[OsmNodeId], appearances: &AppearanceCount) -> OdList {
        let last = nodes.len().saturating_sub(1);
        let positions = nodes
            .iter()
            .enumerate()
            .filter(|(idx, node_id)| *idx == 0 || *idx == last || appearances.is_shared(node_id))
            .map(|(idx, _)| idx)
            .collect_vec();
        OdList { positions }
    }

    #[cfg(test)]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// the OD node ids in way order.
    pub fn node_ids(&self, nodes: &[OsmNodeId]) -> Vec<OsmNodeId> {
        self.positions.iter().map(|idx| nodes[*idx]).collect_vec()
    }

    /// consecutive (origin, destination) position pairs, one per segment.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().copied().tuple_windows()
    }

    pub fn n_segments(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}
