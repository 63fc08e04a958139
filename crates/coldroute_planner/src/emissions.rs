use serde::Serialize;

use crate::units::Meters;

/// The scenario comparison uses a rounder efficiency than the headline CO2
/// figure in [`crate::estimate`], kilometers per liter.
pub const SCENARIO_FUEL_EFFICIENCY: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionScenario {
    Diesel,
    Hybrid,
    Electric,
}

impl EmissionScenario {
    pub const ALL: [EmissionScenario; 3] = [
        EmissionScenario::Diesel,
        EmissionScenario::Hybrid,
        EmissionScenario::Electric,
    ];

    /// kg of CO2 per liter-equivalent
    pub fn co2_factor(&self) -> f64 {
        match self {
            EmissionScenario::Diesel => 2.6,
            EmissionScenario::Hybrid => 1.4,
            EmissionScenario::Electric => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmissionScenario::Diesel => "Diesel",
            EmissionScenario::Hybrid => "Hybrid",
            EmissionScenario::Electric => "Electric",
        }
    }

    pub fn co2_kg(&self, distance: Meters) -> f64 {
        (distance.km() / SCENARIO_FUEL_EFFICIENCY) * self.co2_factor()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioEmission {
    pub scenario: EmissionScenario,
    pub co2_kg: f64,
}

pub fn compare_scenarios(distance: Meters) -> [ScenarioEmission; 3] {
    EmissionScenario::ALL.map(|scenario| ScenarioEmission {
        scenario,
        co2_kg: scenario.co2_kg(distance),
    })
}
