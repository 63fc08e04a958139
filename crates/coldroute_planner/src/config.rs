use std::time::Duration;

use coldroute_geocoding::{
    CachedGeocoder, NominatimClient, NominatimClientParams, nominatim::NOMINATIM_DEFAULT_URL,
};
use coldroute_osrm::{OsrmRouteClient, OsrmRouteClientParams, client::OSRM_DEFAULT_URL};
use jiff::{SignedDuration, SpanRelativeTo};
use thiserror::Error;

use crate::dashboard::DashboardPlanner;

pub const OSRM_URL_ENV_VAR: &str = "COLDROUTE_OSRM_URL";
pub const NOMINATIM_URL_ENV_VAR: &str = "COLDROUTE_NOMINATIM_URL";
pub const USER_AGENT_ENV_VAR: &str = "COLDROUTE_USER_AGENT";
pub const ROUTE_TIMEOUT_ENV_VAR: &str = "COLDROUTE_ROUTE_TIMEOUT";

/// Planner backed by the public Nominatim and OSRM services.
pub type LivePlanner = DashboardPlanner<CachedGeocoder<NominatimClient>, OsrmRouteClient>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub osrm_url: String,
    pub nominatim_url: String,
    pub user_agent: String,
    pub route_timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            osrm_url: String::from(OSRM_DEFAULT_URL),
            nominatim_url: String::from(NOMINATIM_DEFAULT_URL),
            user_agent: format!("coldroute/{}", env!("CARGO_PKG_VERSION")),
            route_timeout: Duration::from_secs(10),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(OSRM_URL_ENV_VAR) {
            config.osrm_url = url;
        }
        if let Some(url) = lookup(NOMINATIM_URL_ENV_VAR) {
            config.nominatim_url = url;
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV_VAR) {
            config.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(ROUTE_TIMEOUT_ENV_VAR) {
            config.route_timeout = parse_timeout(&timeout).map_err(|reason| {
                ConfigError::InvalidValue {
                    var: ROUTE_TIMEOUT_ENV_VAR,
                    reason,
                }
            })?;
        }

        Ok(config)
    }

    pub fn build_planner(&self) -> LivePlanner {
        let geocoder = CachedGeocoder::new(NominatimClient::new(NominatimClientParams {
            nominatim_url: self.nominatim_url.clone(),
            user_agent: self.user_agent.clone(),
        }));

        let router = OsrmRouteClient::new(OsrmRouteClientParams {
            osrm_url: self.osrm_url.clone(),
            timeout: self.route_timeout,
        });

        DashboardPlanner::new(geocoder, router)
    }
}

/// Accepts "10s", "PT1M", "1m 30s" or plain seconds. Negative durations
/// are refused.
pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let input = input.trim();

    let duration = input
        .parse::<SignedDuration>()
        .or_else(|_| {
            input
                .parse::<jiff::Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
        })
        .or_else(|_| input.parse::<i64>().map(SignedDuration::from_secs))
        .map_err(|_| format!("{input:?} is not a duration"))?;

    if duration.is_negative() {
        return Err(format!("{input:?} is negative"));
    }

    Ok(duration)
}

fn parse_timeout(input: &str) -> Result<Duration, String> {
    let duration = parse_duration(input)?;
    if duration.is_zero() {
        return Err(String::from("timeout must be positive"));
    }

    Duration::try_from(duration).map_err(|err| err.to_string())
}
