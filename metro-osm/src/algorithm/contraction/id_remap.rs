use crate::model::osm::graph::{CompactId, OsmNodeId};
use itertools::Itertools;
use std::collections::HashMap;

/// first-seen registry from source node ids to dense [`CompactId`]s.
///
/// ids are handed out from 0 in the order nodes are first looked up. once a
/// node has an id it keeps it: looking the same node up again always returns
/// the same id.
#[derive(Debug, Default, Clone)]
pub struct IdRemap {
    ids: HashMap<OsmNodeId, CompactId>,
}

impl IdRemap {
    pub fn new() -> IdRemap {
        IdRemap::default()
    }

    /// returns the id of this node, assigning the next free id on first sight.
    pub fn get_or_assign(&mut self, node_id: OsmNodeId) -> CompactId {
        let next = CompactId(self.ids.len());
        *self.ids.entry(node_id).or_insert(next)
    }

    pub fn get(&self, node_id: &OsmNodeId) -> Option<CompactId> {
        self.ids.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// all (source id, compact id) pairs ordered by compact id.
    pub fn sorted_by_compact_id(&self) -> Vec<(OsmNodeId, CompactId)> {
        self.ids
            .iter()
            .map(|(osmid, id)| (*osmid, *id))
            .sorted_by_key(|(_, id)| *id)
            .collect_vec()
    }
}
