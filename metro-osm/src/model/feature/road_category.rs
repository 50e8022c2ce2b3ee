use serde::{Deserialize, Serialize};

/// road category encoded by the leading letter of a way's `ref` tag, as used
/// for the French national numbering scheme (A 6, N 7, D 906).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadCategory {
    /// autoroute
    #[serde(rename = "A")]
    Motorway,
    /// route nationale
    #[serde(rename = "N")]
    National,
    /// route départementale
    #[serde(rename = "D")]
    Departmental,
}

impl RoadCategory {
    /// reads the category from the first character of a `ref` value.
    pub fn from_ref(ref_tag: &str) -> Option<RoadCategory> {
        match ref_tag.trim().chars().next() {
            Some('A') => Some(RoadCategory::Motorway),
            Some('N') => Some(RoadCategory::National),
            Some('D') => Some(RoadCategory::Departmental),
            _ => None,
        }
    }

    /// default free-flow speed in kilometers per hour, fastest to slowest tier.
    pub fn default_speed_kph(&self) -> f64 {
        match self {
            RoadCategory::Motorway => 130.0,
            RoadCategory::National => 110.0,
            RoadCategory::Departmental => 80.0,
        }
    }
}
