use coldroute_geocoding::{GeocodeError, GeocodingProvider, Waypoint};
use coldroute_osrm::{RouteError, RouteProvider, RoutedPath};
use geo_types::{LineString, Point};
use parking_lot::Mutex;

/// Answers from a fixed table. `offline` and `garbage` simulate an
/// unreachable service and an unreadable payload.
pub struct MockGeocoder;

impl MockGeocoder {
    pub fn south_america() -> Self {
        MockGeocoder
    }
}

impl GeocodingProvider for MockGeocoder {
    async fn geocode(&self, query: &str) -> Result<Waypoint, GeocodeError> {
        match query {
            "Lorena, SP, Brazil" => Ok(Waypoint::from_lat_lon(-22.7326, -45.1246)),
            "Buenos Aires, Argentina" => Ok(Waypoint::from_lat_lon(-34.6037, -58.3816)),
            "Santiago, Chile" => Ok(Waypoint::from_lat_lon(-33.4489, -70.6693)),
            "offline" => Err(GeocodeError::Api {
                status: 503,
                message: String::from("Service Unavailable"),
            }),
            "garbage" => Err(GeocodeError::Malformed(String::from("expected array"))),
            _ => Err(GeocodeError::NotFound(query.to_string())),
        }
    }
}

pub fn ok_path(distance: f64) -> RoutedPath {
    RoutedPath {
        geometry: LineString::from(vec![[-45.1246, -22.7326], [-70.6693, -33.4489]]),
        distance,
        duration: distance / 20.0,
    }
}

enum MockAnswer {
    Ok(RoutedPath),
    Rejected(String),
}

/// Records every waypoint list it is asked to route.
pub struct MockRouter {
    answer: MockAnswer,
    calls: Mutex<Vec<Vec<Point<f64>>>>,
}

impl MockRouter {
    pub fn ok(path: RoutedPath) -> Self {
        Self {
            answer: MockAnswer::Ok(path),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejected(code: &str) -> Self {
        Self {
            answer: MockAnswer::Rejected(code.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Point<f64>>> {
        self.calls.lock().clone()
    }
}

impl RouteProvider for MockRouter {
    async fn route(&self, waypoints: &[Point<f64>]) -> Result<RoutedPath, RouteError> {
        self.calls.lock().push(waypoints.to_vec());

        match &self.answer {
            MockAnswer::Ok(path) => Ok(path.clone()),
            MockAnswer::Rejected(code) => Err(RouteError::Rejected {
                code: code.clone(),
                message: None,
            }),
        }
    }
}
