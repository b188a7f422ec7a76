use crate::{Config, WeatherReading, WeatherRequest, provider::mock::MockProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod mock;

/// Source of weather readings.
///
/// The demo only ships the mock provider, but the seam keeps the frontend
/// independent of where readings come from and lets tests drive the failure
/// path with an implementation that errors.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherReading>;
}

/// Construct the provider described by the config.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(MockProvider::new(config.delay()))
}
