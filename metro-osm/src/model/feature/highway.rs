use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt::Display, str::FromStr};

/// the value of an OSM `highway` tag. values outside of this enumeration are
/// kept verbatim in [`Highway::Other`].
///
/// see <https://wiki.openstreetmap.org/wiki/Key:highway>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Highway {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Unclassified,
    Residential,
    MotorwayLink,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    TertiaryLink,
    LivingStreet,
    Road,
    Service,
    Track,
    Path,
    Footway,
    Sidewalk,
    Cycleway,
    Pedestrian,
    Steps,
    Bridleway,
    Escape,
    Raceway,
    BusGuideway,
    Other(String),
}

impl Highway {
    /// highway values that never carry general motor traffic and are skipped
    /// during contraction.
    pub const EXCLUDED: [Highway; 12] = [
        Highway::Footway,
        Highway::Service,
        Highway::Track,
        Highway::BusGuideway,
        Highway::Escape,
        Highway::Raceway,
        Highway::Bridleway,
        Highway::Steps,
        Highway::Path,
        Highway::Sidewalk,
        Highway::Cycleway,
        Highway::Pedestrian,
    ];

    /// true if this highway value qualifies as a road for contraction.
    pub fn is_road(&self) -> bool {
        !Self::EXCLUDED.contains(self)
    }

    /// congestion function code for this highway class, used when road classes
    /// follow the highway hierarchy. classes without a dedicated code return None.
    pub fn hierarchy_code(&self) -> Option<u32> {
        use Highway as H;
        match self {
            H::Motorway => Some(1),
            H::Trunk => Some(2),
            H::Primary => Some(3),
            H::Secondary => Some(4),
            H::Tertiary => Some(5),
            H::Unclassified => Some(6),
            H::Residential => Some(7),
            H::MotorwayLink => Some(8),
            H::TrunkLink => Some(9),
            H::PrimaryLink => Some(10),
            H::SecondaryLink => Some(11),
            H::LivingStreet => Some(12),
            H::Road => Some(13),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        use Highway as H;
        match self {
            H::Motorway => "motorway",
            H::Trunk => "trunk",
            H::Primary => "primary",
            H::Secondary => "secondary",
            H::Tertiary => "tertiary",
            H::Unclassified => "unclassified",
            H::Residential => "residential",
            H::MotorwayLink => "motorway_link",
            H::TrunkLink => "trunk_link",
            H::PrimaryLink => "primary_link",
            H::SecondaryLink => "secondary_link",
            H::TertiaryLink => "tertiary_link",
            H::LivingStreet => "living_street",
            H::Road => "road",
            H::Service => "service",
            H::Track => "track",
            H::Path => "path",
            H::Footway => "footway",
            H::Sidewalk => "sidewalk",
            H::Cycleway => "cycleway",
            H::Pedestrian => "pedestrian",
            H::Steps => "steps",
            H::Bridleway => "bridleway",
            H::Escape => "escape",
            H::Raceway => "raceway",
            H::BusGuideway => "bus_guideway",
            H::Other(s) => s.as_str(),
        }
    }
}

impl FromStr for Highway {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Highway as H;
        let highway = match s.trim() {
            "motorway" => H::Motorway,
            "trunk" => H::Trunk,
            "primary" => H::Primary,
            "secondary" => H::Secondary,
            "tertiary" => H::Tertiary,
            "unclassified" => H::Unclassified,
            "residential" => H::Residential,
            "motorway_link" => H::MotorwayLink,
            "trunk_link" => H::TrunkLink,
            "primary_link" => H::PrimaryLink,
            "secondary_link" => H::SecondaryLink,
            "tertiary_link" => H::TertiaryLink,
            "living_street" => H::LivingStreet,
            "road" => H::Road,
            "service" => H::Service,
            "track" => H::Track,
            "path" => H::Path,
            "footway" => H::Footway,
            "sidewalk" => H::Sidewalk,
            "cycleway" => H::Cycleway,
            "pedestrian" => H::Pedestrian,
            "steps" => H::Steps,
            "bridleway" => H::Bridleway,
            "escape" => H::Escape,
            "raceway" => H::Raceway,
            "bus_guideway" => H::BusGuideway,
            other => H::Other(String::from(other)),
        };
        Ok(highway)
    }
}

impl From<String> for Highway {
    fn from(value: String) -> Self {
        match Highway::from_str(&value) {
            Ok(highway) => highway,
            Err(never) => match never {},
        }
    }
}

impl From<Highway> for String {
    fn from(value: Highway) -> Self {
        value.to_string()
    }
}

impl Display for Highway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
