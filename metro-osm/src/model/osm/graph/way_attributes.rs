use super::{osm_way_ops, OsmWayData};
use crate::config::OsmImportConfiguration;

/// attributes shared by every edge derived from a single way. they depend on
/// the way's tags only, never on the topology.
#[derive(Debug, Clone, PartialEq)]
pub struct WayAttributes {
    pub name: String,
    pub lanes: u32,
    /// km/h
    pub speed: f64,
    /// lanes in the direction opposite to the node order
    pub reverse_lanes: u32,
    /// km/h in the direction opposite to the node order
    pub reverse_speed: f64,
    pub capacity: u32,
    pub road_class: u32,
    pub oneway: bool,
}

impl WayAttributes {
    pub fn new(way: &OsmWayData, conf: &OsmImportConfiguration) -> WayAttributes {
        let name = match way.get_street_name() {
            Some(n) => osm_way_ops::truncate_name(n, conf.max_name_length),
            None => way.osmid.to_string(),
        };
        let oneway = way.is_one_way();
        let lanes = osm_way_ops::lanes_count(way.lanes.as_deref()).unwrap_or(conf.default_lanes);
        let speed = declared_or_inferred_speed(way, conf);
        let road_class = conf
            .road_class_policy
            .road_class(way.get_highway().as_ref(), conf.road_class);

        let mut attributes = WayAttributes {
            name,
            lanes,
            speed,
            reverse_lanes: lanes,
            reverse_speed: speed,
            capacity: conf.capacity,
            road_class,
            oneway,
        };
        if conf.directional_attributes && !oneway {
            attributes.apply_directional_tags(way);
        }
        attributes
    }

    /// splits lanes and speed by travel direction using the `:forward` and
    /// `:backward` variants of the tags. without them, the total lane count is
    /// shared between both directions.
    fn apply_directional_tags(&mut self, way: &OsmWayData) {
        let shared_lanes = osm_way_ops::lanes_count(way.lanes.as_deref()).map(|l| (l / 2).max(1));
        self.lanes = osm_way_ops::lanes_count(way.lanes_forward.as_deref())
            .or(shared_lanes)
            .unwrap_or(self.lanes);
        self.reverse_lanes = osm_way_ops::lanes_count(way.lanes_backward.as_deref())
            .or(shared_lanes)
            .unwrap_or(self.reverse_lanes);
        let speed = self.speed;
        self.speed = osm_way_ops::speed_kph(way.maxspeed_forward.as_deref()).unwrap_or(speed);
        self.reverse_speed =
            osm_way_ops::speed_kph(way.maxspeed_backward.as_deref()).unwrap_or(speed);
    }
}

/// the `maxspeed` tag if it parses, else the default of the road category in
/// the `ref` tag, else the configured default.
fn declared_or_inferred_speed(way: &OsmWayData, conf: &OsmImportConfiguration) -> f64 {
    if let Some(speed) = osm_way_ops::speed_kph(way.maxspeed.as_deref()) {
        return speed;
    }
    match way.get_road_category() {
        Some(category) => category.default_speed_kph(),
        None => conf.default_speed_kph,
    }
}
