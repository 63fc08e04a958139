use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coldroute_planner::itinerary::{Itinerary, ItineraryAction, reduce};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ItineraryRequestBody {
    #[serde(default)]
    itinerary: Itinerary,
    action: ItineraryAction,
}

#[derive(Serialize)]
pub struct ItineraryResponse {
    itinerary: Itinerary,
}

impl IntoResponse for ItineraryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Applies one edit and hands back the new itinerary. The server keeps no
/// itinerary of its own.
pub async fn itinerary_handler(
    body: Result<Json<ItineraryRequestBody>, JsonRejection>,
) -> Result<ItineraryResponse, ApiError> {
    let Json(body) = body?;

    Ok(ItineraryResponse {
        itinerary: reduce(&body.itinerary, &body.action),
    })
}
