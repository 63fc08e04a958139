pub mod cold_chain;
pub mod config;
pub mod dashboard;
pub mod emissions;
pub mod estimate;
pub mod eta;
pub mod itinerary;
pub mod map;
pub mod schema;
pub mod units;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod test_utils;
