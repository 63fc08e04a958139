use std::time::Duration;

use geo_types::Point;
use reqwest::StatusCode;
use tracing::debug;

use crate::{
    provider::{RouteError, RouteProvider, RoutedPath},
    response::parse_route_response,
};

pub const OSRM_DEFAULT_URL: &str = "http://router.project-osrm.org";
pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub timeout: Duration,
}

impl Default for OsrmRouteClientParams {
    fn default() -> Self {
        Self {
            osrm_url: String::from(OSRM_DEFAULT_URL),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn route_url<P>(&self, points: &[P]) -> String
    where
        P: Copy + Into<Point>,
    {
        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);

        for (i, point) in points.iter().enumerate() {
            let point: Point = (*point).into();
            url.push_str(&format!("{},{}", point.x(), point.y()));

            if i < points.len() - 1 {
                url.push(';');
            }
        }

        url
    }

    pub async fn fetch_route<P>(&self, points: &[P]) -> Result<RoutedPath, RouteError>
    where
        P: Copy + Into<Point>,
    {
        if points.len() < 2 {
            return Err(RouteError::NotEnoughWaypoints(points.len()));
        }

        let url = self.route_url(points);
        debug!("OSRM: requesting {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .timeout(self.params.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        classify_response(status, body)
    }
}

/// Error statuses still carry a JSON `code` when OSRM itself answered.
/// Anything else in front of it (proxy pages, rate limits) is an API error.
pub fn classify_response(status: StatusCode, body: String) -> Result<RoutedPath, RouteError> {
    match parse_route_response(&body) {
        Err(RouteError::Deserialize(_)) if !status.is_success() => Err(RouteError::Api {
            status: status.as_u16(),
            message: body,
        }),
        result => result,
    }
}

impl Default for OsrmRouteClient {
    fn default() -> Self {
        Self::new(OsrmRouteClientParams::default())
    }
}

impl RouteProvider for OsrmRouteClient {
    async fn route(&self, waypoints: &[Point<f64>]) -> Result<RoutedPath, RouteError> {
        self.fetch_route(waypoints).await
    }
}
