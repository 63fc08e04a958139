use reqwest::{StatusCode, header::USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::{
    provider::{GeocodeError, GeocodingProvider},
    waypoint::Waypoint,
};

pub const NOMINATIM_DEFAULT_URL: &str = "https://nominatim.openstreetmap.org";
pub const NOMINATIM_SEARCH_API_PATH: &str = "/search";

pub struct NominatimClientParams {
    pub nominatim_url: String,

    /// Nominatim's usage policy rejects requests without an identifying agent
    pub user_agent: String,
}

impl Default for NominatimClientParams {
    fn default() -> Self {
        Self {
            nominatim_url: String::from(NOMINATIM_DEFAULT_URL),
            user_agent: format!("coldroute/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// One entry of the search endpoint's `format=json` output. Coordinates
/// come back as decimal strings.
#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

pub struct NominatimClient {
    params: NominatimClientParams,
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(params: NominatimClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self) -> String {
        let mut url = self.params.nominatim_url.trim_end_matches('/').to_string();
        url.push_str(NOMINATIM_SEARCH_API_PATH);
        url
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(NominatimClientParams::default())
    }
}

/// Takes the best match out of a search response body.
pub fn parse_search_response(query: &str, body: &str) -> Result<Waypoint, GeocodeError> {
    let results: Vec<SearchResult> =
        serde_json::from_str(body).map_err(|err| GeocodeError::Malformed(err.to_string()))?;

    let best = results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

    let parse = |value: &str, field: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::Malformed(format!("{field} is not a number: {value:?}")))
    };

    let waypoint = Waypoint::from_lat_lon(parse(&best.lat, "lat")?, parse(&best.lon, "lon")?);

    if !waypoint.is_valid() {
        return Err(GeocodeError::Malformed(format!(
            "coordinates out of range: {}, {}",
            waypoint.lat(),
            waypoint.lon()
        )));
    }

    Ok(waypoint)
}

/// Any non-success status is reported as an API error, whatever the body.
pub fn classify_response(
    query: &str,
    status: StatusCode,
    body: &str,
) -> Result<Waypoint, GeocodeError> {
    if !status.is_success() {
        return Err(GeocodeError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    parse_search_response(query, body)
}

impl GeocodingProvider for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Waypoint, GeocodeError> {
        if query.trim().is_empty() {
            return Err(GeocodeError::NotFound(query.to_string()));
        }

        debug!("Nominatim: searching {:?}", query);

        let response = self
            .client
            .get(self.search_url())
            .header(USER_AGENT, &self.params.user_agent)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        classify_response(query, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_match() {
        let body = r#"[
            {"place_id": 1, "lat": "-22.7326", "lon": "-45.1246", "display_name": "Lorena, SP, Brazil"},
            {"place_id": 2, "lat": "10.0", "lon": "10.0", "display_name": "elsewhere"}
        ]"#;

        let waypoint = parse_search_response("Lorena, SP, Brazil", body).unwrap();

        assert_eq!(waypoint, Waypoint::from_lat_lon(-22.7326, -45.1246));
    }

    #[test]
    fn test_parse_empty_is_not_found() {
        let result = parse_search_response("Atlantis", "[]");

        assert!(matches!(result, Err(GeocodeError::NotFound(query)) if query == "Atlantis"));
    }

    #[test]
    fn test_parse_not_an_array_is_malformed() {
        let result = parse_search_response("Lorena", r#"{"error": "Bad request"}"#);

        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_parse_bad_coordinate_is_malformed() {
        let result = parse_search_response("Lorena", r#"[{"lat": "north", "lon": "-45.1"}]"#);

        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_parse_out_of_range_is_malformed() {
        let result = parse_search_response("Lorena", r#"[{"lat": "123.0", "lon": "-45.1"}]"#);

        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn test_classify_unavailable_is_transient() {
        let error =
            classify_response("Lorena", StatusCode::SERVICE_UNAVAILABLE, "[]").unwrap_err();

        assert!(matches!(error, GeocodeError::Api { status: 503, .. }));
        assert!(error.is_transient());
    }

    #[test]
    fn test_classify_rate_limited_is_transient() {
        let error = classify_response(
            "Lorena",
            StatusCode::TOO_MANY_REQUESTS,
            "<html>Too Many Requests</html>",
        )
        .unwrap_err();

        assert!(matches!(error, GeocodeError::Api { status: 429, .. }));
    }

    #[test]
    fn test_classify_success_is_parsed() {
        let body = r#"[{"lat": "-33.4489", "lon": "-70.6693"}]"#;

        let waypoint = classify_response("Santiago, Chile", StatusCode::OK, body).unwrap();

        assert_eq!(waypoint, Waypoint::from_lat_lon(-33.4489, -70.6693));
    }

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let client = NominatimClient::new(NominatimClientParams {
            nominatim_url: String::from("http://localhost:8088/"),
            user_agent: String::from("test"),
        });

        assert_eq!(client.search_url(), "http://localhost:8088/search");
    }

    #[tokio::test]
    async fn test_blank_query_is_not_found_without_request() {
        let client = NominatimClient::new(NominatimClientParams {
            nominatim_url: String::from("http://127.0.0.1:9"),
            user_agent: String::from("test"),
        });

        let result = client.geocode("   ").await;

        assert!(result.unwrap_err().is_not_found());
    }
}
