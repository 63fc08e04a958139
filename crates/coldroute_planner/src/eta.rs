use jiff::civil::{DateTime, Time};
use serde::Serialize;

use crate::units::{Kmh, Meters};

pub const DEFAULT_DEPARTURE: Time = Time::constant(8, 0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    OnSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopEta {
    pub stop: String,

    /// Share of the total distance attributed to this stop
    pub offset: Meters,
    pub arrival: DateTime,
    pub status: ArrivalStatus,
}

impl StopEta {
    pub fn arrival_hhmm(&self) -> String {
        self.arrival.strftime("%H:%M").to_string()
    }
}

/// Today at [`DEFAULT_DEPARTURE`], in the system time zone.
pub fn default_departure() -> DateTime {
    jiff::Zoned::now().date().to_datetime(DEFAULT_DEPARTURE)
}

/// Estimates an arrival per stop. Stop `i` of `n` is placed at `i / n` of
/// the total distance rather than at its real position along the route,
/// and reached at `speed` from `departure`.
pub fn arrival_schedule<S>(
    stops: &[S],
    total: Meters,
    departure: DateTime,
    speed: Kmh,
) -> Result<Vec<StopEta>, jiff::Error>
where
    S: AsRef<str>,
{
    let count = stops.len();

    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let offset = (total / count) * i;
            let arrival = departure.checked_add(offset.travel_time(speed)?)?;

            Ok(StopEta {
                stop: stop.as_ref().to_string(),
                offset,
                arrival,
                status: ArrivalStatus::OnSchedule,
            })
        })
        .collect()
}
