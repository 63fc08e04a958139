pub mod cache;
pub mod nominatim;
pub mod provider;
pub mod waypoint;

pub use cache::CachedGeocoder;
pub use nominatim::{NominatimClient, NominatimClientParams};
pub use provider::{GeocodeError, GeocodingProvider};
pub use waypoint::Waypoint;
