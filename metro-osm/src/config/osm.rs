use crate::{
    config::RoadClassPolicy,
    model::{osm::graph::osm_element_filter::WayFilter, OsmCliError},
};
use serde::{Deserialize, Serialize};

/// defines behaviors for an OSM network contraction
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct OsmImportConfiguration {
    /// which ways qualify as roads
    pub way_filter: WayFilter,
    pub road_class_policy: RoadClassPolicy,
    /// congestion function code shared by all roads under the uniform policy
    pub road_class: u32,
    /// capacity written to every edge
    pub capacity: u32,
    pub default_lanes: u32,
    pub default_speed_kph: f64,
    /// names longer than this many characters are truncated
    pub max_name_length: usize,
    /// when false, only ways accepted by the way filter contribute to node
    /// appearance counts during the topology scan
    pub count_excluded_ways: bool,
    /// skip ways with fewer than 2 distinct nodes instead of failing the run
    pub ignore_degenerate_ways: bool,
    /// read per-direction lanes and maxspeed tags for bidirectional ways
    pub directional_attributes: bool,
    pub write_geometries: bool,
    pub overwrite: bool,
}

impl Default for OsmImportConfiguration {
    fn default() -> Self {
        Self {
            way_filter: Default::default(),
            road_class_policy: Default::default(),
            road_class: 2,
            capacity: 3000,
            default_lanes: 1,
            default_speed_kph: 50.0,
            max_name_length: 45,
            count_excluded_ways: true,
            ignore_degenerate_ways: false,
            directional_attributes: false,
            write_geometries: false,
            overwrite: false,
        }
    }
}

impl TryFrom<&String> for OsmImportConfiguration {
    type Error = OsmCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(OsmCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
