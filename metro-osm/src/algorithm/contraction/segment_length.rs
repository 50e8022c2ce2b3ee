use geo::{
    line_measures::{HaversineMeasure, LengthMeasurable},
    LineString,
};

/// Earth radius used for great-circle distances, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// haversine metric on a sphere of [`EARTH_RADIUS_KM`], measuring in kilometers.
pub fn earth_km() -> HaversineMeasure {
    HaversineMeasure::new(EARTH_RADIUS_KM)
}

/// length of a polyline as the sum of the haversine distances between its
/// consecutive points.
pub fn path_length_km(path: &LineString<f64>) -> f64 {
    path.length(&earth_km())
}

/// rounds a length to the meter (3 decimals of a kilometer).
pub fn round_km(length_km: f64) -> f64 {
    (length_km * 1000.0).round() / 1000.0
}
