use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coldroute_planner::{
    dashboard::{Dashboard, DashboardRequest},
    map::{DEFAULT_MAP_VIEW, MapView, map_layers},
};
use geojson::FeatureCollection;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct DashboardResponse {
    dashboard: Dashboard,
    map: FeatureCollection,
    view: MapView,
}

impl IntoResponse for DashboardResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DashboardRequest>, JsonRejection>,
) -> Result<DashboardResponse, ApiError> {
    let Json(body) = body?;
    let dashboard = state.planner.plan(body).await?;
    let map = map_layers(&dashboard);

    Ok(DashboardResponse {
        dashboard,
        map,
        view: DEFAULT_MAP_VIEW,
    })
}
