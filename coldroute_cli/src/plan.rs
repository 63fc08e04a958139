use std::{path::PathBuf, time::Duration};

use clap::Args;
use coldroute_planner::{
    cold_chain::CargoTemperature,
    config::LivePlanner,
    dashboard::{Dashboard, DashboardRequest},
    eta::default_departure,
    itinerary::Itinerary,
    map::{DEFAULT_MAP_VIEW, map_layers},
    vehicle::VehicleClass,
};
use indicatif::ProgressBar;
use jiff::civil::DateTime;
use tracing::info;

use crate::{parsers, render};

#[derive(Args)]
pub struct PlanArgs {
    /// Cities in visiting order (defaults to Lorena → Buenos Aires → Santiago)
    stops: Vec<String>,

    /// semi-trailer, truck or vuc
    #[arg(short, long, default_value_t = VehicleClass::SemiTrailer)]
    vehicle: VehicleClass,

    /// Departure time, HH:MM today or a full date-time (default 08:00 today)
    #[arg(long, value_parser = parsers::parse_departure)]
    departure: Option<DateTime>,

    /// Cargo box temperature in °C, between -2 and 15
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        value_parser = parsers::parse_temperature,
        default_value = "4"
    )]
    temperature: CargoTemperature,

    /// Write the route and stop markers as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Print the dashboard as JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// Runs one render pass behind a spinner.
pub async fn plan_dashboard(
    planner: &LivePlanner,
    request: DashboardRequest,
) -> Result<Dashboard, anyhow::Error> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Geocoding {} stops and routing",
        request.itinerary.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let dashboard = planner.plan(request).await;
    spinner.finish_and_clear();

    Ok(dashboard?)
}

pub async fn run(args: PlanArgs, planner: &LivePlanner) -> Result<(), anyhow::Error> {
    let itinerary = if args.stops.is_empty() {
        Itinerary::default()
    } else {
        Itinerary::new(args.stops)
    };

    let request = DashboardRequest {
        itinerary,
        vehicle: args.vehicle,
        departure: args.departure.unwrap_or_else(default_departure),
        cargo_temperature: args.temperature,
    };

    let dashboard = plan_dashboard(planner, request).await?;
    let layers = map_layers(&dashboard);

    if let Some(path) = &args.geojson {
        std::fs::write(path, serde_json::to_string_pretty(&layers)?)?;
        info!("Wrote map layers to {:?}", path);
    }

    if args.json {
        let output = serde_json::json!({
            "dashboard": dashboard,
            "map": layers,
            "view": DEFAULT_MAP_VIEW,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render::dashboard(&dashboard));
    }

    Ok(())
}
