use serde::{Deserialize, Serialize};

use super::CompactId;

/// a directed edge of the contracted graph. serialized columns, in order:
/// `id name lanes length speed capacity function origin destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "id")]
    pub edge_id: usize,
    pub name: String,
    pub lanes: u32,
    #[serde(rename = "length")]
    pub length_km: f64,
    /// km/h
    pub speed: f64,
    pub capacity: u32,
    #[serde(rename = "function")]
    pub road_class: u32,
    pub origin: CompactId,
    pub destination: CompactId,
}
