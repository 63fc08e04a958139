use std::fmt::Write;

use comfy_table::{Table, presets::UTF8_FULL};
use coldroute_planner::{
    dashboard::{Dashboard, RouteStatus, StopResolution},
    estimate::round_cents,
};

pub fn metric_cards(dashboard: &Dashboard) -> Table {
    let estimate = &dashboard.estimate;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Total distance",
        "Operating cost",
        "Est. driving time",
        "CO2 footprint",
    ]);
    table.add_row(vec![
        format!("{:.1} km", estimate.distance_km),
        format!(
            "R$ {:.2} ({} axles)",
            round_cents(estimate.total_cost),
            estimate.axles
        ),
        format!("{}h", estimate.whole_driving_hours()),
        format!("{:.1} kg", estimate.co2_kg),
    ]);

    table
}

pub fn cost_breakdown(dashboard: &Dashboard) -> Table {
    let estimate = &dashboard.estimate;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Fuel", "Tolls", "Total"]);
    table.add_row(vec![
        format!("R$ {:.2}", round_cents(estimate.fuel_cost)),
        format!("R$ {:.2}", round_cents(estimate.toll_cost)),
        format!("R$ {:.2}", round_cents(estimate.total_cost)),
    ]);

    table
}

pub fn arrivals(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["City", "ETA", "Status"]);

    for eta in &dashboard.arrivals {
        table.add_row(vec![
            eta.stop.clone(),
            eta.arrival_hhmm(),
            String::from("On schedule"),
        ]);
    }

    table
}

pub fn emissions(dashboard: &Dashboard) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Scenario", "CO2 (kg)"]);

    for emission in &dashboard.emissions {
        table.add_row(vec![
            emission.scenario.label().to_string(),
            format!("{:.1}", emission.co2_kg),
        ]);
    }

    table
}

/// Lines explaining anything that kept the dashboard from being complete.
pub fn notices(dashboard: &Dashboard) -> Vec<String> {
    let mut notices: Vec<String> = dashboard
        .stops
        .iter()
        .filter_map(|stop| match &stop.resolution {
            StopResolution::Resolved { .. } => None,
            StopResolution::NotFound => Some(format!("Stop {:?} not found, skipped", stop.name)),
            StopResolution::Unavailable { reason } => Some(format!(
                "Stop {:?} skipped, geocoder unavailable: {}",
                stop.name, reason
            )),
            StopResolution::Malformed { reason } => Some(format!(
                "Stop {:?} skipped, unreadable geocoder answer: {}",
                stop.name, reason
            )),
        })
        .collect();

    match &dashboard.route_status {
        RouteStatus::Routed => {}
        RouteStatus::Skipped { resolved_stops } => notices.push(format!(
            "No route: {resolved_stops} stop(s) resolved, at least 2 are needed"
        )),
        RouteStatus::Failed { reason, transient } => notices.push(format!(
            "No route: {reason}{}",
            if *transient { " (try again later)" } else { "" }
        )),
    }

    notices
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", metric_cards(dashboard));
    let _ = writeln!(out, "{}", cost_breakdown(dashboard));
    let _ = writeln!(out, "Arrival planning ({})", dashboard.request.vehicle.label());
    let _ = writeln!(out, "{}", arrivals(dashboard));
    let _ = writeln!(out, "Sustainability");
    let _ = writeln!(out, "{}", emissions(dashboard));

    for notice in notices(dashboard) {
        let _ = writeln!(out, "! {notice}");
    }

    let _ = writeln!(
        out,
        "{}",
        dashboard
            .cold_chain
            .banner(dashboard.request.cargo_temperature)
    );

    out
}
