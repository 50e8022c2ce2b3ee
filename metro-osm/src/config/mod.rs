mod osm;
mod road_class_policy;

pub use osm::OsmImportConfiguration;
pub use road_class_policy::RoadClassPolicy;
