use serde::{Deserialize, Serialize};

/// A geocoded stop, in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    lat: f64,
    lon: f64,
}

impl Waypoint {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<&Waypoint> for geo_types::Point<f64> {
    fn from(waypoint: &Waypoint) -> Self {
        geo_types::Point::new(waypoint.lon, waypoint.lat)
    }
}

impl From<Waypoint> for geo_types::Point<f64> {
    fn from(waypoint: Waypoint) -> Self {
        (&waypoint).into()
    }
}
