use std::sync::Arc;

use clap::{Parser, Subcommand};

use meteo_core::{Config, WeatherProvider, WeatherReading, WeatherRequest, provider};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Previsione meteo (demo)")]
pub struct Cli {
    /// Override the simulated fetch delay in milliseconds.
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the simulated delay and the default city.
    Configure,

    /// Fetch once and print the reading, without the interactive screen.
    Show {
        /// City name.
        city: String,

        /// Print the reading as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        match self.command {
            None => {
                let provider: Arc<dyn WeatherProvider> =
                    Arc::from(provider::provider_from_config(&config));
                crate::tui::run(provider, &config).await
            }
            Some(Command::Configure) => configure(config),
            Some(Command::Show { city, json }) => show(&config, &city, json).await,
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let delay_ms = inquire::CustomType::<u64>::new("Ritardo simulato (ms):")
        .with_default(config.delay_ms)
        .with_error_message("Inserisci un numero di millisecondi")
        .prompt()?;

    let default_city = inquire::Text::new("Città predefinita:")
        .with_initial_value(config.default_city.as_deref().unwrap_or(""))
        .prompt()?;

    config.delay_ms = delay_ms;
    let default_city = default_city.trim();
    config.default_city =
        if default_city.is_empty() { None } else { Some(default_city.to_string()) };
    config.save()?;

    println!("Configurazione salvata in {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<()> {
    let request = WeatherRequest::new(city)?;
    let provider = provider::provider_from_config(config);
    let reading = provider.get_weather(&request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", format_reading(&request.city, &reading));
    }

    Ok(())
}

/// Plain-text rendition of the result card, shared by `show`.
pub fn format_reading(city: &str, reading: &WeatherReading) -> String {
    format!(
        "{city}\n{}  {}\n{} °C\nUmidità: {} %\nVento: {} km/h\n",
        reading.condition.icon(),
        reading.condition,
        reading.temperature_c,
        reading.humidity_pct,
        reading.wind_speed_kmh,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use meteo_core::Condition;

    #[test]
    fn format_reading_matches_the_card() {
        let reading = WeatherReading {
            temperature_c: 23,
            humidity_pct: 62,
            wind_speed_kmh: 14,
            condition: Condition::Soleggiato,
            observed_at: Utc::now(),
        };

        let text = format_reading("Roma", &reading);

        assert_eq!(text, "Roma\n☀  Soleggiato\n23 °C\nUmidità: 62 %\nVento: 14 km/h\n");
    }

    #[test]
    fn reading_serializes_to_json() {
        let reading = WeatherReading {
            temperature_c: 11,
            humidity_pct: 40,
            wind_speed_kmh: 0,
            condition: Condition::Nevoso,
            observed_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&reading).expect("serialize");
        assert!(json.contains("\"condition\": \"Nevoso\""));
        assert!(json.contains("\"temperature_c\": 11"));
    }
}
