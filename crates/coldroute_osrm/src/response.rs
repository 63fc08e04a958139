use geo_types::LineString;
use serde::Deserialize;

use crate::provider::{RouteError, RoutedPath};

pub const OSRM_OK_CODE: &str = "Ok";

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,

    /// Meters
    distance: f64,

    /// Seconds
    #[serde(default)]
    duration: f64,
}

/// GeoJSON LineString, only requested with `geometries=geojson`
#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Reads the first route of a `/route/v1` response body.
pub fn parse_route_response(body: &str) -> Result<RoutedPath, RouteError> {
    let response: OsrmRouteResponse = serde_json::from_str(body)?;

    if response.code != OSRM_OK_CODE {
        return Err(RouteError::Rejected {
            code: response.code,
            message: response.message,
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RouteError::IncompleteResponse)?;

    if route.geometry.coordinates.is_empty() {
        return Err(RouteError::IncompleteResponse);
    }

    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(RouteError::IncompleteResponse);
    }

    Ok(RoutedPath {
        geometry: LineString::from(route.geometry.coordinates),
        distance: route.distance,
        duration: route.duration,
    })
}
