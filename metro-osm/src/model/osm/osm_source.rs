use super::{
    graph::{OsmNodeData, OsmWayData},
    OsmError,
};
use osmpbf::{Element, ElementReader};
use std::path::Path;

/// an element streamed from an OSM source
#[derive(Debug, Clone, PartialEq)]
pub enum OsmElement {
    Node(OsmNodeData),
    Way(OsmWayData),
}

/// which elements a pass over the source needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSelection {
    NodesAndWays,
    WaysOnly,
}

impl ElementSelection {
    pub fn includes_nodes(&self) -> bool {
        matches!(self, ElementSelection::NodesAndWays)
    }
}

/// a source of OSM elements that can be streamed more than once, in the same
/// order each time. contraction streams it twice.
pub trait ElementSource {
    /// a human-readable description used in logs and progress bars
    fn description(&self) -> String;

    /// streams elements in source order into `op`. the first error returned by
    /// `op` stops the stream and is returned.
    fn for_each_element(
        &self,
        selection: ElementSelection,
        op: &mut dyn FnMut(OsmElement) -> Result<(), OsmError>,
    ) -> Result<(), OsmError>;
}

/// an `.osm.pbf` file on disk. each pass re-opens the file.
#[derive(Debug, Clone)]
pub struct PbfSource {
    pub pbf_filepath: String,
}

impl PbfSource {
    pub fn new(pbf_filepath: &str) -> PbfSource {
        PbfSource {
            pbf_filepath: String::from(pbf_filepath),
        }
    }
}

impl ElementSource for PbfSource {
    fn description(&self) -> String {
        self.pbf_filepath.clone()
    }

    fn for_each_element(
        &self,
        selection: ElementSelection,
        op: &mut dyn FnMut(OsmElement) -> Result<(), OsmError>,
    ) -> Result<(), OsmError> {
        let fp = Path::new(&self.pbf_filepath);
        if !fp.is_file() {
            return Err(OsmError::InputUnavailable(format!(
                "{}: file not found",
                self.pbf_filepath
            )));
        }
        let reader = ElementReader::from_path(fp).map_err(|e| {
            OsmError::InputUnavailable(format!("{}: {e}", self.pbf_filepath))
        })?;

        let include_nodes = selection.includes_nodes();
        let mut failure: Option<OsmError> = None;
        reader
            .for_each(|e| {
                if failure.is_some() {
                    return;
                }
                let element = match e {
                    Element::Node(node) if include_nodes => {
                        Some(OsmElement::Node(OsmNodeData::from(&node)))
                    }
                    // from documentation on DenseNode:
                    // So, if you want to [pattern match on] `Node`, you also likely want to match [`DenseNode`].
                    Element::DenseNode(dense) if include_nodes => {
                        Some(OsmElement::Node(OsmNodeData::from(&dense)))
                    }
                    Element::Way(way) => Some(OsmElement::Way(OsmWayData::new(&way))),
                    _ => None,
                };
                if let Some(element) = element {
                    if let Err(err) = op(element) {
                        record_failure(&mut failure, err, &self.pbf_filepath);
                    }
                }
            })
            .map_err(|e| OsmError::PbfLibError { source: e })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// keeps the first error raised while streaming a pbf file. the reader cannot
/// be interrupted, so the error is logged right away while the remaining
/// blocks are skipped.
fn record_failure(failure: &mut Option<OsmError>, err: OsmError, pbf_filepath: &str) {
    if failure.is_none() {
        log::error!("stopping read of {pbf_filepath}, skipping remaining elements: {err}");
        *failure = Some(err);
    }
}

/// elements held in memory, streamed as nodes first then ways.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub nodes: Vec<OsmNodeData>,
    pub ways: Vec<OsmWayData>,
}

impl InMemorySource {
    pub fn new(nodes: Vec<OsmNodeData>, ways: Vec<OsmWayData>) -> InMemorySource {
        InMemorySource { nodes, ways }
    }
}

impl ElementSource for InMemorySource {
    fn description(&self) -> String {
        format!(
            "in-memory source ({} nodes, {} ways)",
            self.nodes.len(),
            self.ways.len()
        )
    }

    fn for_each_element(
        &self,
        selection: ElementSelection,
        op: &mut dyn FnMut(OsmElement) -> Result<(), OsmError>,
    ) -> Result<(), OsmError> {
        if selection.includes_nodes() {
            for node in self.nodes.iter() {
                op(OsmElement::Node(node.clone()))?;
            }
        }
        for way in self.ways.iter() {
            op(OsmElement::Way(way.clone()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        record_failure, ElementSelection, ElementSource, InMemorySource, OsmElement, PbfSource,
    };
    use crate::model::osm::{
        graph::{OsmNodeData, OsmWayData},
        OsmError,
    };

    #[test]
    fn test_missing_pbf_is_input_unavailable() {
        let source = PbfSource::new("/definitely/not/here.osm.pbf");
        let result = source.for_each_element(ElementSelection::NodesAndWays, &mut |_| Ok(()));
        assert!(matches!(result, Err(OsmError::InputUnavailable(_))));
    }

    #[test]
    fn test_in_memory_ways_only() {
        let source = InMemorySource::new(
            vec![OsmNodeData::from_tags(1, 0.0, 0.0, vec![])],
            vec![OsmWayData::from_tags(10, vec![1, 2], vec![])],
        );
        let mut n_nodes = 0;
        let mut n_ways = 0;
        source
            .for_each_element(ElementSelection::WaysOnly, &mut |e| {
                match e {
                    OsmElement::Node(_) => n_nodes += 1,
                    OsmElement::Way(_) => n_ways += 1,
                }
                Ok(())
            })
            .expect("should stream");
        assert_eq!((n_nodes, n_ways), (0, 1));
    }

    #[test]
    fn test_in_memory_stops_on_error() {
        let source = InMemorySource::new(
            vec![],
            vec![
                OsmWayData::from_tags(10, vec![1, 2], vec![]),
                OsmWayData::from_tags(11, vec![2, 3], vec![]),
            ],
        );
        let mut visited = 0;
        let result = source.for_each_element(ElementSelection::NodesAndWays, &mut |_| {
            visited += 1;
            Err(OsmError::InternalError(String::from("stop")))
        });
        assert!(result.is_err());
        assert_eq!(visited, 1);
    }

    #[test]
    fn test_first_pbf_failure_is_kept() {
        let mut failure = None;
        record_failure(
            &mut failure,
            OsmError::NoNodesFound,
            "region.osm.pbf",
        );
        record_failure(
            &mut failure,
            OsmError::InternalError(String::from("later")),
            "region.osm.pbf",
        );
        assert!(matches!(failure, Some(OsmError::NoNodesFound)));
    }
}
