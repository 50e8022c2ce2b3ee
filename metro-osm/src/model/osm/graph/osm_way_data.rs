use super::{OsmNodeId, OsmWayId};
use crate::model::feature::{highway::Highway, road_category::RoadCategory};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// an OSM way with the subset of tags used to derive road attributes.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmWayData {
    pub osmid: OsmWayId,
    pub nodes: Vec<OsmNodeId>,
    pub highway: Option<String>,
    pub junction: Option<String>,
    pub lanes: Option<String>,
    pub lanes_forward: Option<String>,
    pub lanes_backward: Option<String>,
    pub maxspeed: Option<String>,
    pub maxspeed_forward: Option<String>,
    pub maxspeed_backward: Option<String>,
    pub name: Option<String>,
    pub addr_street: Option<String>,
    pub oneway: Option<String>,
    pub _ref: Option<String>,
}

impl OsmWayData {
    pub fn new(way: &osmpbf::elements::Way) -> OsmWayData {
        OsmWayData::from_tags(way.id(), way.refs(), way.tags())
    }

    /// builds a way from its raw parts. consecutive duplicate node references
    /// are collapsed so that every consumer sees the same node chain.
    pub fn from_tags<'a>(
        osmid: i64,
        refs: impl IntoIterator<Item = i64>,
        tags: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> OsmWayData {
        let mut out = OsmWayData {
            osmid: OsmWayId(osmid),
            nodes: refs.into_iter().map(OsmNodeId).collect_vec(),
            ..Default::default()
        };
        let n_refs = out.nodes.len();
        out.nodes.dedup();
        if out.nodes.len() != n_refs {
            log::debug!(
                "way {} had {} node references, {} after removing consecutive duplicates",
                osmid,
                n_refs,
                out.nodes.len()
            );
        }

        for (k, v) in tags {
            let value = Some(String::from(v.trim()));
            match k {
                "highway" => out.highway = value,
                "junction" => out.junction = value,
                "lanes" => out.lanes = value,
                "lanes:forward" => out.lanes_forward = value,
                "lanes:backward" => out.lanes_backward = value,
                "maxspeed" => out.maxspeed = value,
                "maxspeed:forward" => out.maxspeed_forward = value,
                "maxspeed:backward" => out.maxspeed_backward = value,
                "name" => out.name = value,
                "addr:street" => out.addr_street = value,
                "oneway" => out.oneway = value,
                "ref" => out._ref = value,
                _ => {}
            }
        }
        out
    }

    /// interpret the highway field as a [`Highway`] enumeration type.
    pub fn get_highway(&self) -> Option<Highway> {
        self.highway
            .as_deref()
            .and_then(|h| Highway::from_str(h).ok())
    }

    /// the road category encoded in the `ref` tag, if any.
    pub fn get_road_category(&self) -> Option<RoadCategory> {
        self._ref.as_deref().and_then(RoadCategory::from_ref)
    }

    pub fn is_roundabout(&self) -> bool {
        matches!(self.junction.as_deref(), Some("roundabout"))
    }

    /// a way is traversed in one direction only when tagged `oneway=yes`, or when
    /// it is a roundabout. the roundabout rule wins over an explicit `oneway=no`.
    pub fn is_one_way(&self) -> bool {
        self.is_roundabout() || matches!(self.oneway.as_deref(), Some("yes"))
    }

    /// the first non-empty tag among `name` and `addr:street`.
    pub fn get_street_name(&self) -> Option<&str> {
        [self.name.as_deref(), self.addr_street.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
    }
}

impl<'a> From<&'a osmpbf::elements::Way<'a>> for OsmWayData {
    fn from(value: &'a osmpbf::elements::Way) -> Self {
        OsmWayData::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::OsmWayData;
    use crate::model::{
        feature::{highway::Highway, road_category::RoadCategory},
        osm::graph::OsmNodeId,
    };

    #[test]
    fn test_consecutive_duplicates_removed() {
        let way = OsmWayData::from_tags(1, vec![1, 2, 2, 3, 1], vec![]);
        assert_eq!(
            way.nodes,
            vec![OsmNodeId(1), OsmNodeId(2), OsmNodeId(3), OsmNodeId(1)]
        );
    }

    #[test]
    fn test_roundabout_overrides_oneway_no() {
        let way = OsmWayData::from_tags(
            1,
            vec![1, 2, 3, 1],
            vec![("junction", "roundabout"), ("oneway", "no")],
        );
        assert!(way.is_one_way());
    }

    #[test]
    fn test_oneway_only_when_yes() {
        let yes = OsmWayData::from_tags(1, vec![1, 2], vec![("oneway", "yes")]);
        let no = OsmWayData::from_tags(2, vec![1, 2], vec![("oneway", "no")]);
        let missing = OsmWayData::from_tags(3, vec![1, 2], vec![]);
        assert!(yes.is_one_way());
        assert!(!no.is_one_way());
        assert!(!missing.is_one_way());
    }

    #[test]
    fn test_tag_accessors() {
        let way = OsmWayData::from_tags(
            7,
            vec![1, 2],
            vec![
                ("highway", "primary"),
                ("ref", "N 7"),
                ("addr:street", "Rue de Rivoli"),
            ],
        );
        assert_eq!(way.get_highway(), Some(Highway::Primary));
        assert_eq!(way.get_road_category(), Some(RoadCategory::National));
        assert_eq!(way.get_street_name(), Some("Rue de Rivoli"));
    }
}
