use coldroute_planner::cold_chain::CargoTemperature;
use jiff::civil::{DateTime, Time};

/// "08:30" or a full civil date-time ("2025-06-10T08:30"). Times
/// without a date depart today.
pub fn parse_departure(input: &str) -> Result<DateTime, String> {
    let input = input.trim();

    if let Ok(datetime) = input.parse::<DateTime>() {
        return Ok(datetime);
    }

    let time = Time::strptime("%H:%M", input)
        .or_else(|_| input.parse::<Time>())
        .map_err(|_| format!("Invalid departure time {input:?}, expected HH:MM"))?;

    Ok(jiff::Zoned::now().date().to_datetime(time))
}

pub fn parse_temperature(input: &str) -> Result<CargoTemperature, String> {
    let celsius = input
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid temperature {input:?}"))?;

    CargoTemperature::new(celsius).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_departure_time() {
        let departure = parse_departure("08:30").unwrap();

        assert_eq!(departure.time(), Time::constant(8, 30, 0, 0));
    }

    #[test]
    fn test_parse_departure_datetime() {
        assert_eq!(
            parse_departure("2025-06-10T22:15").unwrap(),
            date(2025, 6, 10).at(22, 15, 0, 0)
        );
    }

    #[test]
    fn test_parse_departure_rejects_garbage() {
        assert!(parse_departure("noon").is_err());
        assert!(parse_departure("25:00").is_err());
    }

    #[test]
    fn test_parse_temperature() {
        assert_eq!(parse_temperature(" 9 ").unwrap().celsius(), 9.0);
        assert!(parse_temperature("16").is_err());
        assert!(parse_temperature("cold").is_err());
    }
}
