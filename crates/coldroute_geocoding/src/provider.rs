use std::future::Future;

use thiserror::Error;

use crate::waypoint::Waypoint;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("No match for {0:?}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl GeocodeError {
    /// Failures that could succeed on another attempt: network errors and
    /// non-success HTTP statuses.
    pub fn is_transient(&self) -> bool {
        matches!(self, GeocodeError::Request(_) | GeocodeError::Api { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GeocodeError::NotFound(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, GeocodeError::Malformed(_))
    }
}

/// Resolves a free-text place name to a coordinate pair.
pub trait GeocodingProvider {
    fn geocode(&self, query: &str) -> impl Future<Output = Result<Waypoint, GeocodeError>> + Send;
}
