use serde::Serialize;

use crate::units::{Kmh, Meters};

/// Diesel cost per kilometer, BRL
pub const FUEL_COST_PER_KM: f64 = 2.15;

/// Toll cost per axle per kilometer, BRL
pub const TOLL_COST_PER_AXLE_KM: f64 = 0.48;

pub const AVERAGE_SPEED: Kmh = Kmh::new(72.0);

/// Kilometers per liter of diesel
pub const FUEL_EFFICIENCY: f64 = 3.2;

/// kg of CO2 per liter of diesel burned
pub const CO2_KG_PER_LITER: f64 = 2.61;

/// Costs and footprint of driving a route once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub distance_km: f64,
    pub axles: u8,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub total_cost: f64,
    pub co2_kg: f64,
    pub driving_hours: f64,
}

impl Estimate {
    pub fn new(distance: Meters, axles: u8) -> Self {
        let distance_km = distance.km();
        let fuel_cost = distance_km * FUEL_COST_PER_KM;
        let toll_cost = distance_km * (f64::from(axles) * TOLL_COST_PER_AXLE_KM);

        Self {
            distance_km,
            axles,
            fuel_cost,
            toll_cost,
            total_cost: fuel_cost + toll_cost,
            co2_kg: (distance_km / FUEL_EFFICIENCY) * CO2_KG_PER_LITER,
            driving_hours: distance_km / AVERAGE_SPEED.value(),
        }
    }

    /// Driving time truncated to whole hours, as shown on the dashboard.
    pub fn whole_driving_hours(&self) -> u64 {
        self.driving_hours.floor() as u64
    }
}

/// Rounds a monetary amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
