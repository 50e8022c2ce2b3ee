use crate::model::feature::highway::Highway;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::OsmWayData;

/// decides which ways qualify as roads during contraction.
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum WayFilter {
    /// any way with a `highway` tag that is not one of [`Highway::EXCLUDED`].
    #[default]
    Drivable,
    /// only ways whose `highway` tag is in the provided set.
    HighwayTags { tags: HashSet<Highway> },
}

impl WayFilter {
    /// true if this way qualifies as a road. ways without a `highway` tag never do.
    pub fn accept(&self, way: &OsmWayData) -> bool {
        let highway = match way.get_highway() {
            Some(h) => h,
            None => return false,
        };
        match self {
            WayFilter::Drivable => highway.is_road(),
            WayFilter::HighwayTags { tags } => tags.contains(&highway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WayFilter;
    use crate::model::{feature::highway::Highway, osm::graph::OsmWayData};
    use std::collections::HashSet;

    fn way(tags: Vec<(&str, &str)>) -> OsmWayData {
        OsmWayData::from_tags(1, vec![1, 2], tags)
    }

    #[test]
    fn test_drivable() {
        let filter = WayFilter::Drivable;
        assert!(filter.accept(&way(vec![("highway", "primary")])));
        assert!(filter.accept(&way(vec![("highway", "residential")])));
        assert!(!filter.accept(&way(vec![("highway", "footway")])));
        assert!(!filter.accept(&way(vec![("highway", "service")])));
        assert!(!filter.accept(&way(vec![("highway", "bus_guideway")])));
        assert!(!filter.accept(&way(vec![("railway", "rail")])));
    }

    #[test]
    fn test_highway_tags() {
        let filter = WayFilter::HighwayTags {
            tags: HashSet::from([Highway::Motorway, Highway::Trunk]),
        };
        assert!(filter.accept(&way(vec![("highway", "motorway")])));
        assert!(!filter.accept(&way(vec![("highway", "primary")])));
        assert!(!filter.accept(&way(vec![])));
    }

    #[test]
    fn test_deserialize() {
        let filter: WayFilter =
            serde_json::from_str(r#"{"type": "highway_tags", "tags": ["motorway", "trunk_link"]}"#)
                .expect("should deserialize");
        match filter {
            WayFilter::HighwayTags { tags } => {
                assert!(tags.contains(&Highway::TrunkLink));
                assert_eq!(tags.len(), 2);
            }
            other => panic!("unexpected filter {other:?}"),
        }
    }
}
