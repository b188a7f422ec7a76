use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

use crate::model::{Condition, WeatherReading, WeatherRequest};

use super::WeatherProvider;

/// Default simulated network delay, matching the original demo's 2 s timer.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Bounds for the generated values (half-open ranges).
const TEMPERATURE_C: std::ops::Range<i32> = 10..30;
const HUMIDITY_PCT: std::ops::Range<u8> = 40..100;
const WIND_SPEED_KMH: std::ops::Range<u32> = 0..50;

/// Provider that waits a fixed delay and then returns a random reading.
/// It never fails; the city only gated the call, its content is ignored.
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl MockProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReading> {
        tokio::time::sleep(self.delay).await;

        let reading = sample_reading(&mut rand::thread_rng());
        debug!(
            city = %request.city,
            condition = %reading.condition,
            temperature_c = reading.temperature_c,
            "generated mock reading"
        );

        Ok(reading)
    }
}

/// Draw one reading uniformly from the documented bounds.
pub fn sample_reading(rng: &mut impl Rng) -> WeatherReading {
    let conditions = Condition::all();
    let condition = conditions[rng.gen_range(0..conditions.len())];

    WeatherReading {
        temperature_c: rng.gen_range(TEMPERATURE_C),
        humidity_pct: rng.gen_range(HUMIDITY_PCT),
        wind_speed_kmh: rng.gen_range(WIND_SPEED_KMH),
        condition,
        observed_at: Utc::now(),
    }
}
