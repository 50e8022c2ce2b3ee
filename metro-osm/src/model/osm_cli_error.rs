use super::osm::OsmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure running OSM contraction: {source}")]
    OsmError {
        #[from]
        source: OsmError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
