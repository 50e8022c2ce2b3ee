use crate::model::feature::highway::Highway;
use serde::{Deserialize, Serialize};

/// how the congestion function code (road class) of an edge is chosen.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClassPolicy {
    /// every road shares the configured code
    #[default]
    Uniform,
    /// the code follows [`Highway::hierarchy_code`], using the configured code
    /// for highway values without one
    HighwayHierarchy,
}

impl RoadClassPolicy {
    pub fn road_class(&self, highway: Option<&Highway>, uniform_code: u32) -> u32 {
        match self {
            RoadClassPolicy::Uniform => uniform_code,
            RoadClassPolicy::HighwayHierarchy => highway
                .and_then(Highway::hierarchy_code)
                .unwrap_or(uniform_code),
        }
    }
}
