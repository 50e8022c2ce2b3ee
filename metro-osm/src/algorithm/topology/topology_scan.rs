use super::{AppearanceCount, AppearanceCounter};
use crate::{
    config::OsmImportConfiguration,
    model::osm::{
        graph::{OsmNodeData, OsmNodeId, OsmNodes},
        ElementSelection, ElementSource, OsmElement, OsmError,
    },
};
use kdam::{Bar, BarExt};
use std::collections::HashMap;

/// result of the first pass over the source: every node with its coordinates
/// and name, and the frozen appearance count of every referenced node.
#[derive(Debug, Default, Clone)]
pub struct TopologyScan {
    pub nodes: OsmNodes,
    pub appearances: AppearanceCount,
    /// number of ways visited, whether or not they were counted
    pub ways_visited: usize,
}

impl TopologyScan {
    /// streams all nodes and ways once. unless `count_excluded_ways` is
    /// disabled, every way is counted, road or not.
    pub fn scan(
        source: &dyn ElementSource,
        conf: &OsmImportConfiguration,
    ) -> Result<TopologyScan, OsmError> {
        let mut bar = Bar::builder()
            .desc(format!("scan {}", source.description()))
            .unit(" rows")
            .unit_scale(true)
            .build()
            .map_err(OsmError::InternalError)?;

        let mut nodes: OsmNodes = HashMap::new();
        let mut counter = AppearanceCounter::new();
        let mut ways_visited: usize = 0;
        let mut ways_counted: usize = 0;

        source.for_each_element(ElementSelection::NodesAndWays, &mut |element| {
            match element {
                OsmElement::Node(node) => register_node(&mut nodes, node),
                OsmElement::Way(way) => {
                    ways_visited += 1;
                    if conf.count_excluded_ways || conf.way_filter.accept(&way) {
                        counter.add_way(&way);
                        ways_counted += 1;
                    }
                }
            }
            let _ = bar.update(1);
            Ok(())
        })?;
        eprintln!();

        if nodes.is_empty() {
            return Err(OsmError::NoNodesFound);
        }
        if ways_visited == 0 {
            return Err(OsmError::NoWaysFound);
        }

        let appearances = counter.freeze();
        let n_shared = appearances.iter().filter(|(_, count)| **count > 1).count();
        log::info!(
            "topology scan registered {} nodes, counted {} of {} ways referencing {} distinct nodes ({} shared)",
            nodes.len(),
            ways_counted,
            ways_visited,
            appearances.len(),
            n_shared
        );
        Ok(TopologyScan {
            nodes,
            appearances,
            ways_visited,
        })
    }

    pub fn get_node(&self, node_id: &OsmNodeId) -> Option<&OsmNodeData> {
        self.nodes.get(node_id)
    }
}

fn register_node(nodes: &mut OsmNodes, node: OsmNodeData) {
    if nodes.contains_key(&node.osmid) {
        log::warn!(
            "node with OSMID {} occurs more than once in this source",
            node.osmid
        );
    }
    nodes.insert(node.osmid, node);
}

#[cfg(test)]
mod tests {
    use super::TopologyScan;
    use crate::{
        config::OsmImportConfiguration,
        model::osm::{
            graph::{OsmNodeData, OsmNodeId, OsmWayData},
            InMemorySource, OsmError,
        },
    };

    fn source() -> InMemorySource {
        InMemorySource::new(
            vec![
                OsmNodeData::from_tags(1, 2.0, 48.0, vec![]),
                OsmNodeData::from_tags(2, 2.1, 48.0, vec![("name", "Élysée")]),
                OsmNodeData::from_tags(3, 2.2, 48.0, vec![]),
                OsmNodeData::from_tags(4, 2.1, 48.1, vec![]),
            ],
            vec![
                OsmWayData::from_tags(10, vec![1, 2, 3], vec![("highway", "primary")]),
                OsmWayData::from_tags(11, vec![2, 4], vec![("highway", "footway")]),
            ],
        )
    }

    #[test]
    fn test_scan_counts_all_ways() {
        let scan = TopologyScan::scan(&source(), &OsmImportConfiguration::default())
            .expect("scan should succeed");
        assert_eq!(scan.nodes.len(), 4);
        assert_eq!(scan.ways_visited, 2);
        assert_eq!(scan.appearances.get(&OsmNodeId(2)), 2);
        assert_eq!(scan.appearances.get(&OsmNodeId(4)), 1);
        assert_eq!(
            scan.get_node(&OsmNodeId(2)).map(|n| n.name.as_str()),
            Some("Elysee")
        );
    }

    #[test]
    fn test_scan_counts_only_roads_when_configured() {
        let conf = OsmImportConfiguration {
            count_excluded_ways: false,
            ..Default::default()
        };
        let scan = TopologyScan::scan(&source(), &conf).expect("scan should succeed");
        assert_eq!(scan.appearances.get(&OsmNodeId(2)), 1);
        assert_eq!(scan.appearances.get(&OsmNodeId(4)), 0);
        assert_eq!(scan.ways_visited, 2);
    }

    #[test]
    fn test_scan_keeps_node_zero() {
        let source = InMemorySource::new(
            vec![
                OsmNodeData::from_tags(0, 2.0, 48.0, vec![]),
                OsmNodeData::from_tags(-5, 2.1, 48.0, vec![]),
            ],
            vec![OsmWayData::from_tags(10, vec![0, -5], vec![("highway", "primary")])],
        );
        let scan = TopologyScan::scan(&source, &OsmImportConfiguration::default())
            .expect("scan should succeed");
        assert_eq!(scan.nodes.len(), 2);
        assert_eq!(
            scan.get_node(&OsmNodeId(0)).map(|n| n.name.as_str()),
            Some("0")
        );
    }

    #[test]
    fn test_scan_empty_sources() {
        let conf = OsmImportConfiguration::default();
        let no_nodes = InMemorySource::new(vec![], vec![OsmWayData::from_tags(1, vec![1, 2], vec![])]);
        assert!(matches!(
            TopologyScan::scan(&no_nodes, &conf),
            Err(OsmError::NoNodesFound)
        ));
        let no_ways = InMemorySource::new(vec![OsmNodeData::from_tags(1, 0.0, 0.0, vec![])], vec![]);
        assert!(matches!(
            TopologyScan::scan(&no_ways, &conf),
            Err(OsmError::NoWaysFound)
        ));
    }
}
