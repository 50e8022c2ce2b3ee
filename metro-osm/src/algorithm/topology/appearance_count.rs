use crate::model::osm::graph::{OsmNodeId, OsmWayData};
use std::collections::HashMap;

/// accumulates, during the topology scan, how many times each node is
/// referenced by a way. see [`AppearanceCounter::freeze`].
#[derive(Debug, Default)]
pub struct AppearanceCounter {
    counts: HashMap<OsmNodeId, u32>,
}

impl AppearanceCounter {
    pub fn new() -> AppearanceCounter {
        AppearanceCounter::default()
    }

    /// counts every node reference of this way once.
    pub fn add_way(&mut self, way: &OsmWayData) {
        for node_id in way.nodes.iter() {
            *self.counts.entry(*node_id).or_insert(0) += 1;
        }
    }

    /// ends the scan. the returned counts can no longer be modified.
    pub fn freeze(self) -> AppearanceCount {
        AppearanceCount {
            counts: self.counts,
        }
    }
}

/// read-only node appearance counts, fixed before contraction starts.
#[derive(Debug, Default, Clone)]
pub struct AppearanceCount {
    counts: HashMap<OsmNodeId, u32>,
}

impl AppearanceCount {
    /// number of way references of this node, 0 if never referenced.
    pub fn get(&self, node_id: &OsmNodeId) -> u32 {
        self.counts.get(node_id).copied().unwrap_or(0)
    }

    /// true if the node is referenced more than once, which makes it an
    /// intersection wherever it occurs in a way.
    pub fn is_shared(&self, node_id: &OsmNodeId) -> bool {
        self.get(node_id) > 1
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsmNodeId, &u32)> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AppearanceCounter;
    use crate::model::osm::graph::{OsmNodeId, OsmWayData};
    use std::collections::HashMap;

    #[test]
    fn test_exact_counts() {
        let mut counter = AppearanceCounter::new();
        counter.add_way(&OsmWayData::from_tags(1, vec![1, 2, 3], vec![]));
        counter.add_way(&OsmWayData::from_tags(2, vec![3, 4, 5], vec![]));
        counter.add_way(&OsmWayData::from_tags(3, vec![6, 4, 7], vec![]));
        let counts = counter.freeze();

        let expected: HashMap<OsmNodeId, u32> = [(1, 1), (2, 1), (3, 2), (4, 2), (5, 1), (6, 1), (7, 1)]
            .into_iter()
            .map(|(id, n)| (OsmNodeId(id), n))
            .collect();
        let result: HashMap<OsmNodeId, u32> = counts.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(result, expected);
        assert!(counts.is_shared(&OsmNodeId(3)));
        assert!(!counts.is_shared(&OsmNodeId(2)));
        assert_eq!(counts.get(&OsmNodeId(100)), 0);
    }

    #[test]
    fn test_closed_way_counts_endpoint_twice() {
        let mut counter = AppearanceCounter::new();
        counter.add_way(&OsmWayData::from_tags(1, vec![1, 2, 3, 1], vec![]));
        let counts = counter.freeze();
        assert_eq!(counts.get(&OsmNodeId(1)), 2);
        assert_eq!(counts.get(&OsmNodeId(2)), 1);
    }
}
