use std::ops::{Div, Mul};

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::units::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn from_km(km: f64) -> Self {
        Meters(km * 1000.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn km(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Time to cover this distance at `speed`. Fails when the result does
    /// not fit a [`SignedDuration`].
    pub fn travel_time(self, speed: Kmh) -> Result<SignedDuration, jiff::Error> {
        SignedDuration::try_from_secs_f64(self.0 * 3.6 / speed.value())
    }
}

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Meters::new(value)
    }
}

impl Div<usize> for Meters {
    type Output = Meters;

    fn div(self, rhs: usize) -> Meters {
        Meters(self.0 / rhs as f64)
    }
}

impl Mul<usize> for Meters {
    type Output = Meters;

    fn mul(self, rhs: usize) -> Meters {
        Meters(self.0 * rhs as f64)
    }
}
