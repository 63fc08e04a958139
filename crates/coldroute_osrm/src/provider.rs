use std::future::Future;

use geo_types::{LineString, Point};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("At least two waypoints are required, got {0}")]
    NotEnoughWaypoints(usize),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Routing rejected with code {code}")]
    Rejected {
        code: String,
        message: Option<String>,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Incomplete response")]
    IncompleteResponse,
}

impl RouteError {
    pub fn is_transient(&self) -> bool {
        matches!(self, RouteError::Request(_) | RouteError::Api { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            RouteError::Deserialize(_) | RouteError::IncompleteResponse
        )
    }

    /// The service understood the request but found no route (`NoRoute`,
    /// `NoSegment`, ...).
    pub fn is_rejected(&self) -> bool {
        matches!(self, RouteError::Rejected { .. })
    }
}

/// Best route through the requested waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    /// Polyline in (lon, lat) order, as returned by the service
    pub geometry: LineString<f64>,

    /// Distance in meters
    pub distance: f64,

    /// Travel time in seconds
    pub duration: f64,
}

pub trait RouteProvider {
    fn route(
        &self,
        waypoints: &[Point<f64>],
    ) -> impl Future<Output = Result<RoutedPath, RouteError>> + Send;
}
