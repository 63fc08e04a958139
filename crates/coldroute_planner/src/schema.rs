use schemars::schema_for;

use crate::{dashboard::DashboardRequest, itinerary::ItineraryAction};

pub fn generate_request_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(DashboardRequest))
}

pub fn generate_itinerary_action_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(ItineraryAction))
}
