use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Origin depot, and the only stop left after a reset.
pub const HOME_DEPOT: &str = "Lorena, SP, Brazil";

/// Ordered city names. Order decides waypoint order and arrival
/// interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Itinerary {
    stops: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItineraryAction {
    AddStop { name: String },
    Reset,
}

impl Itinerary {
    pub fn new(stops: Vec<String>) -> Self {
        Self { stops }
    }

    pub fn from_stops<I, S>(stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(stops.into_iter().map(Into::into).collect())
    }

    pub fn home() -> Self {
        Self::from_stops([HOME_DEPOT])
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn apply(&self, action: &ItineraryAction) -> Self {
        reduce(self, action)
    }
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::from_stops([HOME_DEPOT, "Buenos Aires, Argentina", "Santiago, Chile"])
    }
}

/// Returns the itinerary produced by `action`, leaving `itinerary` untouched.
/// Blank stop names are ignored.
pub fn reduce(itinerary: &Itinerary, action: &ItineraryAction) -> Itinerary {
    match action {
        ItineraryAction::AddStop { name } => {
            let name = name.trim();
            if name.is_empty() {
                return itinerary.clone();
            }

            let mut stops = itinerary.stops.clone();
            stops.push(name.to_string());
            Itinerary::new(stops)
        }
        ItineraryAction::Reset => Itinerary::home(),
    }
}
