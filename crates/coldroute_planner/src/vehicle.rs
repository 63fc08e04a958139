use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fleet presets. Only the axle count feeds the toll estimate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    #[default]
    SemiTrailer,
    Truck,
    /// Light urban cargo vehicle
    Vuc,
}

#[derive(Debug, Error)]
#[error("Unknown vehicle class {0:?}, expected one of semi-trailer, truck, vuc")]
pub struct UnknownVehicleClass(String);

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::SemiTrailer,
        VehicleClass::Truck,
        VehicleClass::Vuc,
    ];

    pub fn axles(&self) -> u8 {
        match self {
            VehicleClass::SemiTrailer => 6,
            VehicleClass::Truck => 3,
            VehicleClass::Vuc => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::SemiTrailer => "Semi-trailer (6 axles)",
            VehicleClass::Truck => "Truck (3 axles)",
            VehicleClass::Vuc => "VUC (2 axles)",
        }
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleClass::SemiTrailer => "semi-trailer",
                VehicleClass::Truck => "truck",
                VehicleClass::Vuc => "vuc",
            }
        )
    }
}

impl FromStr for VehicleClass {
    type Err = UnknownVehicleClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "semi-trailer" | "semi_trailer" | "carreta" | "6" => Ok(VehicleClass::SemiTrailer),
            "truck" | "3" => Ok(VehicleClass::Truck),
            "vuc" | "2" => Ok(VehicleClass::Vuc),
            _ => Err(UnknownVehicleClass(s.to_string())),
        }
    }
}
