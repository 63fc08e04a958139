use coldroute_geocoding::{GeocodeError, GeocodingProvider, Waypoint};
use coldroute_osrm::{RouteError, RouteProvider};
use geo_types::{LineString, Point};
use jiff::civil::DateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cold_chain::{CargoTemperature, ColdChainStatus},
    emissions::{ScenarioEmission, compare_scenarios},
    estimate::{AVERAGE_SPEED, Estimate},
    eta::{StopEta, arrival_schedule, default_departure},
    itinerary::Itinerary,
    units::Meters,
    vehicle::VehicleClass,
};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Arrival time out of range: {0}")]
    Schedule(#[from] jiff::Error),
}

/// Everything the user controls for one render pass. Missing fields take
/// the dashboard defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct DashboardRequest {
    pub itinerary: Itinerary,
    pub vehicle: VehicleClass,
    pub departure: DateTime,
    #[schemars(with = "f64")]
    pub cargo_temperature: CargoTemperature,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            itinerary: Itinerary::default(),
            vehicle: VehicleClass::default(),
            departure: default_departure(),
            cargo_temperature: CargoTemperature::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StopResolution {
    Resolved { waypoint: Waypoint },
    NotFound,
    Unavailable { reason: String },
    Malformed { reason: String },
}

impl From<Result<Waypoint, GeocodeError>> for StopResolution {
    fn from(result: Result<Waypoint, GeocodeError>) -> Self {
        match result {
            Ok(waypoint) => StopResolution::Resolved { waypoint },
            Err(GeocodeError::NotFound(_)) => StopResolution::NotFound,
            Err(GeocodeError::Malformed(reason)) => StopResolution::Malformed { reason },
            Err(err) => StopResolution::Unavailable {
                reason: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStop {
    pub name: String,
    #[serde(flatten)]
    pub resolution: StopResolution,
}

impl ResolvedStop {
    pub fn waypoint(&self) -> Option<Waypoint> {
        match self.resolution {
            StopResolution::Resolved { waypoint } => Some(waypoint),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteStatus {
    Routed,
    /// Fewer than two stops resolved, the router was not called
    Skipped { resolved_stops: usize },
    Failed { reason: String, transient: bool },
}

impl RouteStatus {
    fn from_error(error: &RouteError) -> Self {
        match error {
            RouteError::NotEnoughWaypoints(resolved_stops) => RouteStatus::Skipped {
                resolved_stops: *resolved_stops,
            },
            err => RouteStatus::Failed {
                reason: err.to_string(),
                transient: err.is_transient(),
            },
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self, RouteStatus::Routed)
    }
}

/// Snapshot of one render pass.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub request: DashboardRequest,
    pub stops: Vec<ResolvedStop>,
    pub route_status: RouteStatus,
    #[serde(skip)]
    pub geometry: Option<LineString<f64>>,
    pub estimate: Estimate,
    pub emissions: [ScenarioEmission; 3],
    pub arrivals: Vec<StopEta>,
    pub cold_chain: ColdChainStatus,
}

impl Dashboard {
    /// Stops the route actually visits, in itinerary order.
    pub fn resolved_stops(&self) -> impl Iterator<Item = (&str, Waypoint)> {
        self.stops
            .iter()
            .filter_map(|stop| stop.waypoint().map(|waypoint| (stop.name.as_str(), waypoint)))
    }

    pub fn unresolved_stops(&self) -> impl Iterator<Item = &ResolvedStop> {
        self.stops.iter().filter(|stop| stop.waypoint().is_none())
    }
}

/// Runs the geocode → route → estimate pipeline.
pub struct DashboardPlanner<G, R> {
    geocoder: G,
    router: R,
}

impl<G, R> DashboardPlanner<G, R>
where
    G: GeocodingProvider + Sync,
    R: RouteProvider + Sync,
{
    pub fn new(geocoder: G, router: R) -> Self {
        Self { geocoder, router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Geocodes every stop one after another. Failures are kept, labelled,
    /// in their itinerary position.
    pub async fn resolve_stops(&self, itinerary: &Itinerary) -> Vec<ResolvedStop> {
        let mut stops = Vec::with_capacity(itinerary.len());

        for name in itinerary.stops() {
            let result = self.geocoder.geocode(name).await;
            if let Err(err) = &result {
                warn!("Dropping stop {:?}: {}", name, err);
            }

            stops.push(ResolvedStop {
                name: name.clone(),
                resolution: result.into(),
            });
        }

        stops
    }

    pub async fn plan(&self, request: DashboardRequest) -> Result<Dashboard, PlannerError> {
        let stops = self.resolve_stops(&request.itinerary).await;

        let points: Vec<Point<f64>> = stops
            .iter()
            .filter_map(|stop| stop.waypoint().map(Point::from))
            .collect();

        debug!("Resolved {}/{} stops", points.len(), request.itinerary.len());

        let (route_status, geometry, distance) = if points.len() < 2 {
            (
                RouteStatus::Skipped {
                    resolved_stops: points.len(),
                },
                None,
                Meters::ZERO,
            )
        } else {
            match self.router.route(&points).await {
                Ok(path) => (
                    RouteStatus::Routed,
                    Some(path.geometry),
                    Meters::new(path.distance),
                ),
                Err(err) => {
                    warn!("Routing failed, reporting zero distance: {}", err);
                    (RouteStatus::from_error(&err), None, Meters::ZERO)
                }
            }
        };

        let estimate = Estimate::new(distance, request.vehicle.axles());

        let visited: Vec<&str> = stops
            .iter()
            .filter(|stop| stop.waypoint().is_some())
            .map(|stop| stop.name.as_str())
            .collect();
        let arrivals = arrival_schedule(&visited, distance, request.departure, AVERAGE_SPEED)?;

        info!(
            "Planned {} stops over {:.1} km, total cost {:.2}",
            visited.len(),
            estimate.distance_km,
            estimate.total_cost
        );

        Ok(Dashboard {
            cold_chain: request.cargo_temperature.status(),
            emissions: compare_scenarios(distance),
            request,
            stops,
            route_status,
            geometry,
            estimate,
            arrivals,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use jiff::civil::date;

    use super::*;
    use crate::test_utils::{MockGeocoder, MockRouter, ok_path};

    fn request(stops: &[&str]) -> DashboardRequest {
        DashboardRequest {
            itinerary: Itinerary::from_stops(stops.iter().copied()),
            vehicle: VehicleClass::SemiTrailer,
            departure: date(2025, 6, 10).at(8, 0, 0, 0),
            cargo_temperature: CargoTemperature::new(4.0).unwrap(),
        }
    }

    fn planner(router: MockRouter) -> DashboardPlanner<MockGeocoder, MockRouter> {
        DashboardPlanner::new(MockGeocoder::south_america(), router)
    }

    #[tokio::test]
    async fn test_plan_routes_resolved_stops() {
        let planner = planner(MockRouter::ok(ok_path(1_000_000.0)));

        let dashboard = planner
            .plan(request(&["Lorena, SP, Brazil", "Buenos Aires, Argentina", "Santiago, Chile"]))
            .await
            .unwrap();

        assert!(dashboard.route_status.is_routed());
        assert!(dashboard.geometry.is_some());
        assert_abs_diff_eq!(dashboard.estimate.distance_km, 1000.0);
        assert_abs_diff_eq!(dashboard.estimate.total_cost, 5030.0, epsilon = 1e-6);
        assert_eq!(dashboard.arrivals.len(), 3);
        assert_eq!(dashboard.cold_chain, ColdChainStatus::Stable);

        let routed = planner.router().calls();
        assert_eq!(routed.len(), 1);
        assert_eq!(routed[0][0], Point::new(-45.1246, -22.7326));
    }

    #[tokio::test]
    async fn test_failed_geocode_is_kept_but_not_routed() {
        let planner = planner(MockRouter::ok(ok_path(300_000.0)));

        let dashboard = planner
            .plan(request(&["Lorena, SP, Brazil", "Atlantis", "Santiago, Chile"]))
            .await
            .unwrap();

        assert_eq!(dashboard.stops.len(), 3);
        assert_eq!(dashboard.stops[1].resolution, StopResolution::NotFound);
        assert_eq!(planner.router().calls()[0].len(), 2);

        // Arrival rows follow the stops the route visits
        let names: Vec<&str> = dashboard.arrivals.iter().map(|eta| eta.stop.as_str()).collect();
        assert_eq!(names, ["Lorena, SP, Brazil", "Santiago, Chile"]);
        assert_eq!(dashboard.arrivals[1].offset, Meters::from_km(150.0));

        let unresolved: Vec<&str> = dashboard
            .unresolved_stops()
            .map(|stop| stop.name.as_str())
            .collect();
        assert_eq!(unresolved, ["Atlantis"]);
    }

    #[tokio::test]
    async fn test_single_resolved_stop_skips_router() {
        let planner = planner(MockRouter::ok(ok_path(1.0)));

        let dashboard = planner
            .plan(request(&["Lorena, SP, Brazil", "Atlantis"]))
            .await
            .unwrap();

        assert_eq!(
            dashboard.route_status,
            RouteStatus::Skipped { resolved_stops: 1 }
        );
        assert!(planner.router().calls().is_empty());
        assert_eq!(dashboard.estimate.distance_km, 0.0);
        assert_eq!(dashboard.arrivals.len(), 1);
    }

    #[tokio::test]
    async fn test_router_failure_degrades_to_zero_distance() {
        let planner = planner(MockRouter::rejected("NoRoute"));

        let dashboard = planner
            .plan(request(&["Lorena, SP, Brazil", "Santiago, Chile"]))
            .await
            .unwrap();

        assert!(matches!(
            dashboard.route_status,
            RouteStatus::Failed { transient: false, .. }
        ));
        assert!(dashboard.geometry.is_none());
        assert_eq!(dashboard.estimate.total_cost, 0.0);
        assert!(dashboard.emissions.iter().all(|e| e.co2_kg == 0.0));
    }

    #[tokio::test]
    async fn test_unrepresentable_distance_is_an_error() {
        let planner = planner(MockRouter::ok(ok_path(1e25)));

        let result = planner
            .plan(request(&["Lorena, SP, Brazil", "Santiago, Chile"]))
            .await;

        assert!(matches!(result, Err(PlannerError::Schedule(_))));
        assert_eq!(planner.router().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_geocoder_is_labelled() {
        let planner = planner(MockRouter::ok(ok_path(1.0)));

        let stops = planner
            .resolve_stops(&Itinerary::from_stops(["offline", "garbage"]))
            .await;

        assert!(matches!(stops[0].resolution, StopResolution::Unavailable { .. }));
        assert!(matches!(stops[1].resolution, StopResolution::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_critical_temperature() {
        let planner = planner(MockRouter::ok(ok_path(1.0)));
        let mut request = request(&["Lorena, SP, Brazil"]);
        request.cargo_temperature = CargoTemperature::new(9.0).unwrap();

        let dashboard = planner.plan(request).await.unwrap();

        assert!(dashboard.cold_chain.is_critical());
    }

    #[test]
    fn test_request_defaults_from_partial_json() {
        let request: DashboardRequest =
            serde_json::from_str(r#"{"vehicle": "truck", "cargo_temperature": 9}"#).unwrap();

        assert_eq!(request.vehicle, VehicleClass::Truck);
        assert_eq!(request.itinerary, Itinerary::default());
        assert_eq!(request.departure.time(), crate::eta::DEFAULT_DEPARTURE);
        assert!(request.cargo_temperature.status().is_critical());
    }

    #[test]
    fn test_request_rejects_out_of_range_temperature() {
        let result = serde_json::from_str::<DashboardRequest>(r#"{"cargo_temperature": 30}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_stop_json() {
        let stop = ResolvedStop {
            name: String::from("Santiago, Chile"),
            resolution: StopResolution::Resolved {
                waypoint: Waypoint::from_lat_lon(-33.4489, -70.6693),
            },
        };

        assert_eq!(
            serde_json::to_value(&stop).unwrap(),
            serde_json::json!({
                "name": "Santiago, Chile",
                "status": "resolved",
                "waypoint": {"lat": -33.4489, "lon": -70.6693}
            })
        );
    }
}
