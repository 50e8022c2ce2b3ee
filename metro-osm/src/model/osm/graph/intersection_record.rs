use serde::{Deserialize, Serialize};

use super::{CompactId, OsmNodeData};

/// a vertex of the contracted graph. serialized columns, in order: `id name x y`,
/// where x is the longitude and y the latitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionRecord {
    pub id: CompactId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl IntersectionRecord {
    pub fn new(id: CompactId, node: &OsmNodeData) -> IntersectionRecord {
        IntersectionRecord {
            id,
            name: node.name.clone(),
            x: node.x,
            y: node.y,
        }
    }
}
