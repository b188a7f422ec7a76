//! Core library for the `meteo` demo app.
//!
//! This crate defines:
//! - Configuration handling (simulated delay, default city)
//! - Abstraction over weather providers, plus the mock provider
//! - Shared domain models (requests, readings, condition labels)
//!
//! It is used by `meteo-tui`, but can also be reused by other binaries.

pub mod config;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::{Condition, RequestError, WeatherReading, WeatherRequest};
pub use provider::{WeatherProvider, mock::MockProvider};
