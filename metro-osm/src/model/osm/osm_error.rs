use thiserror::Error;

use super::graph::{OsmNodeId, OsmWayId};

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("invalid OSM import configuration: {0}")]
    ConfigurationError(String),
    #[error("unable to open OSM source {0}")]
    InputUnavailable(String),
    #[error("failure reading .pbf file: {source}")]
    PbfLibError { source: osmpbf::Error },
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure writing output: {0}")]
    OutputError(String),
    #[error("node '{node}' referenced by way '{way}' has no coordinates in the source")]
    MissingGeometry { way: OsmWayId, node: OsmNodeId },
    #[error("way '{0}' has fewer than 2 distinct nodes")]
    DegenerateWay(OsmWayId),
    #[error("two-pass contraction invariant violated: {0}")]
    InvariantViolation(String),
    #[error("OSM source does not contain any 'node' elements")]
    NoNodesFound,
    #[error("OSM source does not contain any 'way' elements")]
    NoWaysFound,
    #[error("{0}")]
    InternalError(String),
}
