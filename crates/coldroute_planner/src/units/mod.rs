pub mod kmh;
pub mod meters;

pub use kmh::Kmh;
pub use meters::Meters;
