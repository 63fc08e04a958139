use fxhash::FxHashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    provider::{GeocodeError, GeocodingProvider},
    waypoint::Waypoint,
};

/// Memoizes successful lookups by exact query string for as long as the
/// value lives. Failures are never stored, so the next call asks again.
pub struct CachedGeocoder<P> {
    provider: P,
    cache: Mutex<FxHashMap<String, Waypoint>>,
}

impl<P> CachedGeocoder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> GeocodingProvider for CachedGeocoder<P>
where
    P: GeocodingProvider + Sync,
{
    async fn geocode(&self, query: &str) -> Result<Waypoint, GeocodeError> {
        let cached = self.cache.lock().get(query).copied();
        if let Some(waypoint) = cached {
            debug!("Geocode cache hit for {:?}", query);
            return Ok(waypoint);
        }

        let waypoint = self.provider.geocode(query).await?;
        self.cache.lock().insert(query.to_string(), waypoint);

        Ok(waypoint)
    }
}
