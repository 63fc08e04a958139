use std::io::Write;

use clap::Args;
use coldroute_planner::{
    cold_chain::CargoTemperature,
    config::LivePlanner,
    dashboard::DashboardRequest,
    eta::default_departure,
    itinerary::ItineraryAction,
    vehicle::VehicleClass,
};
use jiff::civil::DateTime;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{parsers, plan::plan_dashboard, render};

const HELP: &str = "\
Commands:
  add <city>        append a stop
  reset             back to the home depot only
  vehicle <class>   semi-trailer, truck or vuc
  depart <HH:MM>    departure time
  temp <°C>         cargo temperature, -2 to 15
  show              plan and print the dashboard
  stops             list the itinerary
  help              this text
  quit";

#[derive(Args)]
pub struct SessionArgs {
    /// semi-trailer, truck or vuc
    #[arg(short, long, default_value_t = VehicleClass::SemiTrailer)]
    vehicle: VehicleClass,

    /// Departure time, HH:MM today or a full date-time (default 08:00 today)
    #[arg(long, value_parser = parsers::parse_departure)]
    departure: Option<DateTime>,
}

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Edit(ItineraryAction),
    Vehicle(VehicleClass),
    Depart(DateTime),
    Temperature(CargoTemperature),
    Show,
    Stops,
    Help,
    Quit,
}

impl SessionCommand {
    /// Whether the dashboard must be planned again after this command.
    fn replans(&self) -> bool {
        matches!(
            self,
            SessionCommand::Edit(_)
                | SessionCommand::Vehicle(_)
                | SessionCommand::Depart(_)
                | SessionCommand::Temperature(_)
                | SessionCommand::Show
        )
    }
}

fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match keyword.to_ascii_lowercase().as_str() {
        "add" if rest.is_empty() => Err(String::from("Usage: add <city>")),
        "add" => Ok(SessionCommand::Edit(ItineraryAction::AddStop {
            name: rest.to_string(),
        })),
        "reset" => Ok(SessionCommand::Edit(ItineraryAction::Reset)),
        "vehicle" => rest
            .parse()
            .map(SessionCommand::Vehicle)
            .map_err(|err: coldroute_planner::vehicle::UnknownVehicleClass| err.to_string()),
        "depart" => parsers::parse_departure(rest).map(SessionCommand::Depart),
        "temp" => parsers::parse_temperature(rest).map(SessionCommand::Temperature),
        "show" | "" => Ok(SessionCommand::Show),
        "stops" => Ok(SessionCommand::Stops),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => Err(format!("Unknown command {other:?}, type help")),
    }
}

fn apply(request: &mut DashboardRequest, command: SessionCommand) {
    match command {
        SessionCommand::Edit(action) => request.itinerary = request.itinerary.apply(&action),
        SessionCommand::Vehicle(vehicle) => request.vehicle = vehicle,
        SessionCommand::Depart(departure) => request.departure = departure,
        SessionCommand::Temperature(temperature) => request.cargo_temperature = temperature,
        SessionCommand::Show
        | SessionCommand::Stops
        | SessionCommand::Help
        | SessionCommand::Quit => {}
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

pub async fn run(args: SessionArgs, planner: &LivePlanner) -> Result<(), anyhow::Error> {
    let mut request = DashboardRequest {
        vehicle: args.vehicle,
        departure: args.departure.unwrap_or_else(default_departure),
        ..DashboardRequest::default()
    };

    println!("{HELP}");
    print!("{}", render::dashboard(&plan_dashboard(planner, request.clone()).await?));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        debug!("Session command {:?}", command);

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Stops => {
                for (i, stop) in request.itinerary.stops().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, stop);
                }
            }
            command => {
                let replans = command.replans();
                apply(&mut request, command);

                if replans {
                    let dashboard = plan_dashboard(planner, request.clone()).await?;
                    print!("{}", render::dashboard(&dashboard));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use coldroute_planner::itinerary::{HOME_DEPOT, Itinerary};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_command("add   Mendoza, Argentina ").unwrap(),
            SessionCommand::Edit(ItineraryAction::AddStop {
                name: String::from("Mendoza, Argentina")
            })
        );
        assert!(parse_command("add").is_err());
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(
            parse_command("vehicle vuc").unwrap(),
            SessionCommand::Vehicle(VehicleClass::Vuc)
        );
        assert_eq!(
            parse_command("temp -1").unwrap(),
            SessionCommand::Temperature(CargoTemperature::new(-1.0).unwrap())
        );
        assert!(parse_command("temp 20").is_err());
        assert!(parse_command("vehicle bike").is_err());
        assert_eq!(
            parse_command("depart 2025-06-10T06:45").unwrap(),
            SessionCommand::Depart(date(2025, 6, 10).at(6, 45, 0, 0))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            parse_command("RESET").unwrap(),
            SessionCommand::Edit(ItineraryAction::Reset)
        );
        assert_eq!(parse_command("").unwrap(), SessionCommand::Show);
        assert_eq!(parse_command("q").unwrap(), SessionCommand::Quit);
        assert!(parse_command("fly").is_err());
    }

    #[test]
    fn test_apply_edits_request() {
        let mut request = DashboardRequest::default();

        apply(&mut request, parse_command("add Mendoza").unwrap());
        assert_eq!(request.itinerary.len(), 4);

        apply(&mut request, parse_command("reset").unwrap());
        assert_eq!(request.itinerary, Itinerary::from_stops([HOME_DEPOT]));

        apply(&mut request, parse_command("vehicle truck").unwrap());
        assert_eq!(request.vehicle, VehicleClass::Truck);
    }

    #[test]
    fn test_replans() {
        assert!(SessionCommand::Show.replans());
        assert!(SessionCommand::Edit(ItineraryAction::Reset).replans());
        assert!(!SessionCommand::Stops.replans());
        assert!(!SessionCommand::Quit.replans());
    }
}
