use super::{segment_length, IdRemap, OdList};
use crate::{
    algorithm::topology::TopologyScan,
    config::OsmImportConfiguration,
    model::osm::{
        graph::{
            CompactId, ContractedGraph, EdgeRecord, IntersectionRecord, OsmWayData, UsedNodeSet,
            WayAttributes,
        },
        OsmError,
    },
};
use geo::LineString;
use std::collections::HashSet;

/// second pass of the import. owns the id registry, the used node set and the
/// edge counter, which are only ever mutated through `&mut self`.
pub struct ContractionEngine<'a> {
    scan: &'a TopologyScan,
    conf: &'a OsmImportConfiguration,
    id_remap: IdRemap,
    used_nodes: UsedNodeSet,
    edges: Vec<EdgeRecord>,
    geometries: Option<Vec<LineString<f64>>>,
    next_edge_id: usize,
    ways_contracted: usize,
}

impl<'a> ContractionEngine<'a> {
    pub fn new(scan: &'a TopologyScan, conf: &'a OsmImportConfiguration) -> ContractionEngine<'a> {
        let geometries = if conf.write_geometries {
            Some(vec![])
        } else {
            None
        };
        ContractionEngine {
            scan,
            conf,
            id_remap: IdRemap::new(),
            used_nodes: HashSet::new(),
            edges: vec![],
            geometries,
            next_edge_id: 0,
            ways_contracted: 0,
        }
    }

    pub fn id_remap(&self) -> &IdRemap {
        &self.id_remap
    }

    pub fn used_nodes(&self) -> &UsedNodeSet {
        &self.used_nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// contracts a single way into directed edges, returning the number of
    /// edges emitted. ways rejected by the way filter leave no trace.
    pub fn process_way(&mut self, way: &OsmWayData) -> Result<usize, OsmError> {
        if !self.conf.way_filter.accept(way) {
            return Ok(0);
        }
        if way.nodes.len() < 2 {
            if self.conf.ignore_degenerate_ways {
                log::warn!(
                    "way {} has {} distinct node(s), skipping",
                    way.osmid,
                    way.nodes.len()
                );
                return Ok(0);
            }
            return Err(OsmError::DegenerateWay(way.osmid));
        }

        // resolve all geometry up front so that a missing node fails the run
        // before anything is emitted for this way
        let points = way
            .nodes
            .iter()
            .map(|node_id| {
                self.scan
                    .get_node(node_id)
                    .map(|n| n.get_point())
                    .ok_or(OsmError::MissingGeometry {
                        way: way.osmid,
                        node: *node_id,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let attributes = WayAttributes::new(way, self.conf);
        let od_list = OdList::new(&way.nodes, &self.scan.appearances);
        log::debug!(
            "way {} split into {} segment(s) at nodes {:?}",
            way.osmid,
            od_list.n_segments(),
            od_list.node_ids(&way.nodes)
        );
        let edges_before = self.edges.len();

        for (segment_idx, (src_pos, dst_pos)) in od_list.segments().enumerate() {
            let path = LineString::from(points[src_pos..=dst_pos].to_vec());
            let length_km = segment_length::round_km(segment_length::path_length_km(&path));

            let src_osmid = way.nodes[src_pos];
            let dst_osmid = way.nodes[dst_pos];
            let origin = self.id_remap.get_or_assign(src_osmid);
            if segment_idx == 0 {
                self.used_nodes.insert(src_osmid);
            }
            let destination = self.id_remap.get_or_assign(dst_osmid);
            self.used_nodes.insert(dst_osmid);

            let reversed = if attributes.oneway {
                None
            } else {
                let mut reversed = path.clone();
                reversed.0.reverse();
                Some(reversed)
            };
            self.emit(
                &attributes,
                attributes.lanes,
                attributes.speed,
                length_km,
                origin,
                destination,
                path,
            );
            if let Some(reversed) = reversed {
                self.emit(
                    &attributes,
                    attributes.reverse_lanes,
                    attributes.reverse_speed,
                    length_km,
                    destination,
                    origin,
                    reversed,
                );
            }
        }

        self.ways_contracted += 1;
        Ok(self.edges.len() - edges_before)
    }

    #[allow(clippy::too_many_arguments)]
    fn emit(
        &mut self,
        attributes: &WayAttributes,
        lanes: u32,
        speed: f64,
        length_km: f64,
        origin: CompactId,
        destination: CompactId,
        path: LineString<f64>,
    ) {
        let edge = EdgeRecord {
            edge_id: self.next_edge_id,
            name: attributes.name.clone(),
            lanes,
            length_km,
            speed,
            capacity: attributes.capacity,
            road_class: attributes.road_class,
            origin,
            destination,
        };
        self.next_edge_id += 1;
        self.edges.push(edge);
        if let Some(geometries) = self.geometries.as_mut() {
            geometries.push(path);
        }
    }

    /// ends the pass, building the node table from the used nodes in compact
    /// id order. fails if the id registry and the used node set disagree.
    pub fn finish(self) -> Result<ContractedGraph, OsmError> {
        if self.used_nodes.len() != self.id_remap.len() {
            return Err(OsmError::InvariantViolation(format!(
                "{} nodes have a compact id but {} nodes are used by edges",
                self.id_remap.len(),
                self.used_nodes.len()
            )));
        }

        let mut intersections = Vec::with_capacity(self.id_remap.len());
        for (expected_idx, (osmid, compact_id)) in
            self.id_remap.sorted_by_compact_id().into_iter().enumerate()
        {
            if compact_id != CompactId(expected_idx) {
                return Err(OsmError::InvariantViolation(format!(
                    "compact ids are not dense: expected {expected_idx}, found {compact_id}"
                )));
            }
            if !self.used_nodes.contains(&osmid) {
                return Err(OsmError::InvariantViolation(format!(
                    "node {osmid} has compact id {compact_id} but is not used by any edge"
                )));
            }
            let node = self
                .scan
                .get_node(&osmid)
                .ok_or_else(|| OsmError::InvariantViolation(format!(
                    "node {osmid} has compact id {compact_id} but was not registered by the topology scan"
                )))?;
            intersections.push(IntersectionRecord::new(compact_id, node));
        }

        log::info!(
            "contracted {} ways into {} edges between {} intersections",
            self.ways_contracted,
            self.edges.len(),
            intersections.len()
        );
        Ok(ContractedGraph {
            edges: self.edges,
            intersections,
            geometries: self.geometries,
        })
    }
}
