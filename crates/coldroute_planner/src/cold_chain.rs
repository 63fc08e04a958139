use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Readings strictly above this are a critical alert.
pub const CRITICAL_ABOVE_CELSIUS: f64 = 8.0;

pub const SENSOR_MIN_CELSIUS: f64 = -2.0;
pub const SENSOR_MAX_CELSIUS: f64 = 15.0;

#[derive(Debug, Error, PartialEq)]
#[error("Cargo temperature {0} °C is outside the sensor range -2 °C to 15 °C")]
pub struct TemperatureOutOfRange(pub f64);

/// Cargo box reading in °C.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CargoTemperature(f64);

impl CargoTemperature {
    pub fn new(celsius: f64) -> Result<Self, TemperatureOutOfRange> {
        if (SENSOR_MIN_CELSIUS..=SENSOR_MAX_CELSIUS).contains(&celsius) {
            Ok(Self(celsius))
        } else {
            Err(TemperatureOutOfRange(celsius))
        }
    }

    pub fn celsius(&self) -> f64 {
        self.0
    }

    pub fn status(&self) -> ColdChainStatus {
        ColdChainStatus::from_temperature(*self)
    }
}

impl Default for CargoTemperature {
    fn default() -> Self {
        Self(4.0)
    }
}

impl TryFrom<f64> for CargoTemperature {
    type Error = TemperatureOutOfRange;

    fn try_from(celsius: f64) -> Result<Self, Self::Error> {
        Self::new(celsius)
    }
}

impl From<CargoTemperature> for f64 {
    fn from(temperature: CargoTemperature) -> Self {
        temperature.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColdChainStatus {
    Stable,
    Critical,
}

impl ColdChainStatus {
    pub fn from_temperature(temperature: CargoTemperature) -> Self {
        if temperature.celsius() > CRITICAL_ABOVE_CELSIUS {
            ColdChainStatus::Critical
        } else {
            ColdChainStatus::Stable
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, ColdChainStatus::Critical)
    }

    pub fn banner(&self, temperature: CargoTemperature) -> String {
        match self {
            ColdChainStatus::Critical => format!(
                "CRITICAL ALERT: cargo at {} °C. Risk of losing the load!",
                temperature.celsius()
            ),
            ColdChainStatus::Stable => {
                format!("Temperature stable: {} °C", temperature.celsius())
            }
        }
    }
}
