mod compact_id;
mod contracted_graph;
mod edge_record;
mod intersection_record;
mod metro_writer;
pub mod osm_element_filter;
pub mod osm_node_data;
mod osm_node_id;
pub mod osm_way_data;
pub mod osm_way_ops;
mod osm_way_id;
pub mod way_attributes;

pub use compact_id::CompactId;
pub use contracted_graph::ContractedGraph;
pub use edge_record::EdgeRecord;
pub use intersection_record::IntersectionRecord;
pub use metro_writer::MetroWriter;
pub use osm_node_data::OsmNodeData;
pub use osm_node_id::OsmNodeId;
pub use osm_way_data::OsmWayData;
pub use osm_way_id::OsmWayId;
pub use way_attributes::WayAttributes;

use std::collections::{HashMap, HashSet};

/// node registry built by the topology scan, keyed by source id
pub type OsmNodes = HashMap<OsmNodeId, OsmNodeData>;
/// source ids of the nodes that are an endpoint of at least one emitted edge
pub type UsedNodeSet = HashSet<OsmNodeId>;
