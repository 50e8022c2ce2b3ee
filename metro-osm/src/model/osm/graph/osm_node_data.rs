use geo::Point;
use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::OsmNodeId;

/// a node registered during the topology scan. coordinates are kept as read
/// from the source; the name is ASCII-only, falling back to the node id when
/// the node has no `name` tag.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNodeData {
    pub osmid: OsmNodeId,
    /// longitude
    pub x: f64,
    /// latitude
    pub y: f64,
    pub name: String,
}

impl OsmNodeData {
    pub fn new(osmid: OsmNodeId, x: f64, y: f64, name_tag: Option<&str>) -> OsmNodeData {
        let name = match name_tag {
            Some(n) => normalize_name(n),
            None => osmid.to_string(),
        };
        OsmNodeData { osmid, x, y, name }
    }

    /// builds a node from its raw parts and an iterator over its tags.
    pub fn from_tags<'a>(
        osmid: i64,
        lon: f64,
        lat: f64,
        tags: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> OsmNodeData {
        let name_tag = tags.into_iter().find(|(k, _)| *k == "name").map(|(_, v)| v);
        OsmNodeData::new(OsmNodeId(osmid), lon, lat, name_tag)
    }

    pub fn get_point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl From<&osmpbf::elements::Node<'_>> for OsmNodeData {
    fn from(node: &osmpbf::elements::Node) -> Self {
        OsmNodeData::from_tags(node.id(), node.lon(), node.lat(), node.tags())
    }
}

impl From<&osmpbf::dense::DenseNode<'_>> for OsmNodeData {
    fn from(node: &osmpbf::dense::DenseNode<'_>) -> Self {
        OsmNodeData::from_tags(node.id(), node.lon(), node.lat(), node.tags())
    }
}

/// strips diacritics by decomposing to NFD and dropping combining marks.
/// anything still outside of ASCII afterwards is dropped as well.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii())
        .collect()
}
