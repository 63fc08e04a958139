use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use serde::Serialize;

use crate::dashboard::Dashboard;

pub const ROUTE_STROKE: &str = "#00FFCC";

/// Initial camera for the route map: centred over the southern cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

pub const DEFAULT_MAP_VIEW: MapView = MapView {
    center_lat: -28.0,
    center_lon: -55.0,
    zoom: 4,
};

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Route polyline followed by one marker per visited stop. Marker names
/// come from the stop they were geocoded from.
pub fn map_layers(dashboard: &Dashboard) -> FeatureCollection {
    let mut features = Vec::new();

    if let Some(geometry) = &dashboard.geometry {
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), JsonValue::from("route"));
        properties.insert(String::from("stroke"), JsonValue::from(ROUTE_STROKE));
        properties.insert(
            String::from("distance_km"),
            JsonValue::from(dashboard.estimate.distance_km),
        );

        features.push(feature(Geometry::new(geometry.into()), properties));
    }

    for (index, (name, waypoint)) in dashboard.resolved_stops().enumerate() {
        let point: geo_types::Point = waypoint.into();

        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), JsonValue::from("stop"));
        properties.insert(String::from("index"), JsonValue::from(index));
        properties.insert(String::from("name"), JsonValue::from(name));

        features.push(feature(Geometry::new((&point).into()), properties));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
