pub mod feature;
pub mod osm;
mod osm_cli_error;

pub use osm_cli_error::OsmCliError;
