use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request for the weather in a city.
///
/// The city is only validated for non-emptiness; the mock provider ignores
/// its content when generating a reading.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Per favore inserisci una città")]
    EmptyCity,
}

impl WeatherRequest {
    /// Build a request from raw user input, trimming surrounding whitespace.
    /// Blank or whitespace-only input is rejected.
    pub fn new(city: &str) -> Result<Self, RequestError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(RequestError::EmptyCity);
        }
        Ok(Self { city: city.to_string() })
    }
}

/// One generated weather reading. Held in memory only and replaced on the
/// next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub condition: Condition,
    pub observed_at: DateTime<Utc>,
}

/// The closed set of condition labels, used both as display text and for
/// icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Soleggiato,
    Piovoso,
    Nuvoloso,
    Nevoso,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Soleggiato => "Soleggiato",
            Condition::Piovoso => "Piovoso",
            Condition::Nuvoloso => "Nuvoloso",
            Condition::Nevoso => "Nevoso",
        }
    }

    /// Glyph shown next to the label, replacing the original app's icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Soleggiato => "☀",
            Condition::Piovoso => "🌧",
            Condition::Nuvoloso => "☁",
            Condition::Nevoso => "❄",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Soleggiato,
            Condition::Piovoso,
            Condition::Nuvoloso,
            Condition::Nevoso,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Condition {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Soleggiato" => Ok(Condition::Soleggiato),
            "Piovoso" => Ok(Condition::Piovoso),
            "Nuvoloso" => Ok(Condition::Nuvoloso),
            "Nevoso" => Ok(Condition::Nevoso),
            _ => Err(anyhow::anyhow!(
                "Unknown condition '{value}'. Known conditions: Soleggiato, Piovoso, Nuvoloso, Nevoso."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_as_str_roundtrip() {
        for condition in Condition::all() {
            let s = condition.as_str();
            let parsed = Condition::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*condition, parsed);
        }
    }

    #[test]
    fn unknown_condition_error() {
        let err = Condition::try_from("Ventoso").unwrap_err();
        assert!(err.to_string().contains("Unknown condition"));
    }

    #[test]
    fn every_condition_has_an_icon() {
        for condition in Condition::all() {
            assert!(!condition.icon().is_empty());
        }
    }

    #[test]
    fn request_trims_city() {
        let req = WeatherRequest::new("  Roma  ").expect("non-empty city must be accepted");
        assert_eq!(req.city, "Roma");
    }

    #[test]
    fn request_rejects_blank_city() {
        assert_eq!(WeatherRequest::new("").unwrap_err(), RequestError::EmptyCity);
        assert_eq!(WeatherRequest::new("   \t ").unwrap_err(), RequestError::EmptyCity);
    }
}
