use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::icon_for;

/// A position reported by the geolocation capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// One fetch attempt against the weather API.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    ByCoordinates(Coordinates),
    ByName(String),
}

impl WeatherQuery {
    /// Build a name query from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming; such input must
    /// never reach the network.
    pub fn by_name(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::ByName(trimmed.to_string()))
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            WeatherQuery::ByCoordinates(_) => QueryKind::Coordinates,
            WeatherQuery::ByName(_) => QueryKind::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Coordinates,
    Name,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Coordinates => "coordinates",
            QueryKind::Name => "name",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions for one location, in metric units as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition_main: String,
    pub condition_description: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherObservation {
    pub fn condition_icon(&self) -> &'static str {
        icon_for(&self.condition_main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_trims_input() {
        let query = WeatherQuery::by_name("  London \n").expect("non-empty input");
        assert_eq!(query, WeatherQuery::ByName("London".to_string()));
        assert_eq!(query.kind(), QueryKind::Name);
    }

    #[test]
    fn by_name_rejects_blank_input() {
        assert!(WeatherQuery::by_name("").is_none());
        assert!(WeatherQuery::by_name(" \t ").is_none());
    }

    #[test]
    fn coordinates_query_kind() {
        let query = WeatherQuery::ByCoordinates(Coordinates::new(1.23, 4.56));
        assert_eq!(query.kind(), QueryKind::Coordinates);
        assert_eq!(query.kind().to_string(), "coordinates");
    }
}
