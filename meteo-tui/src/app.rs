//! View/controller state for the single screen.
//!
//! Key handling returns an [`Effect`] instead of performing I/O, so the
//! transitions are testable without a terminal or a runtime.

use crossterm::event::KeyCode;
use tracing::warn;

use meteo_core::{RequestError, WeatherReading, WeatherRequest};

pub const ALERT_TITLE: &str = "Errore";
pub const FETCH_FAILED_ALERT: &str = "Impossibile recuperare i dati meteo";
pub const FETCH_FAILED_INLINE: &str = "Errore nel recupero dei dati";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Lifecycle of the simulated fetch.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Loading { city: String },
    Success { city: String, reading: WeatherReading },
    Failure { city: String, message: String },
}

/// Blocking modal dialog. While one is open only the dismiss keys are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    fn error(body: impl Into<String>) -> Self {
        Self { title: ALERT_TITLE.to_string(), body: body.into() }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug)]
pub enum Effect {
    None,
    Quit,
    Fetch(WeatherRequest),
}

pub struct App {
    pub input: String,
    pub phase: Phase,
    pub alert: Option<Alert>,
    spinner_frame: usize,
}

impl App {
    pub fn new(default_city: Option<String>) -> Self {
        Self {
            input: default_city.unwrap_or_default(),
            phase: Phase::Idle,
            alert: None,
            spinner_frame: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Effect {
        if self.alert.is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return Effect::None;
        }

        match key {
            KeyCode::Esc => Effect::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                Effect::None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Submit the current input. Blank input raises the prompt without a
    /// fetch; a fetch already in flight swallows the press (the original
    /// app disables its button while loading).
    fn submit(&mut self) -> Effect {
        if matches!(self.phase, Phase::Loading { .. }) {
            return Effect::None;
        }

        match WeatherRequest::new(&self.input) {
            Ok(request) => {
                self.phase = Phase::Loading { city: request.city.clone() };
                Effect::Fetch(request)
            }
            Err(err @ RequestError::EmptyCity) => {
                self.alert = Some(Alert::error(err.to_string()));
                Effect::None
            }
        }
    }

    pub fn on_fetch_done(&mut self, outcome: anyhow::Result<WeatherReading>) {
        let city = match &self.phase {
            Phase::Loading { city } => city.clone(),
            _ => return,
        };

        match outcome {
            Ok(reading) => {
                self.phase = Phase::Success { city, reading };
            }
            Err(err) => {
                warn!(error = %err, city = %city, "fetch failed");
                self.phase = Phase::Failure { city, message: FETCH_FAILED_INLINE.to_string() };
                self.alert = Some(Alert::error(FETCH_FAILED_ALERT));
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use meteo_core::Condition;

    fn reading(condition: Condition) -> WeatherReading {
        WeatherReading {
            temperature_c: 23,
            humidity_pct: 62,
            wind_speed_kmh: 14,
            condition,
            observed_at: Utc::now(),
        }
    }

    fn type_city(app: &mut App, city: &str) {
        for c in city.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn blank_submit_never_fetches_and_raises_the_prompt() {
        for input in ["", "   \t "] {
            let mut app = App::new(None);
            type_city(&mut app, input);

            let effect = app.handle_key(KeyCode::Enter);

            assert!(matches!(effect, Effect::None));
            assert!(matches!(app.phase, Phase::Idle));
            let alert = app.alert.as_ref().expect("empty input must raise the prompt");
            assert_eq!(alert.body, "Per favore inserisci una città");
        }
    }

    #[test]
    fn nonempty_submit_starts_loading() {
        let mut app = App::new(None);
        type_city(&mut app, "Roma");

        let effect = app.handle_key(KeyCode::Enter);

        let Effect::Fetch(request) = effect else {
            panic!("submit with a city must request a fetch");
        };
        assert_eq!(request.city, "Roma");
        assert!(matches!(&app.phase, Phase::Loading { city } if city == "Roma"));
        assert!(app.alert.is_none());
    }

    #[test]
    fn resolved_fetch_shows_the_reading_without_error() {
        let mut app = App::new(Some("Roma".to_string()));
        app.handle_key(KeyCode::Enter);

        app.on_fetch_done(Ok(reading(Condition::Soleggiato)));

        match &app.phase {
            Phase::Success { city, reading } => {
                assert_eq!(city, "Roma");
                assert_eq!(reading.condition, Condition::Soleggiato);
            }
            other => panic!("expected Success, got {other:?}"),
        }
        assert!(app.alert.is_none());
    }

    #[test]
    fn failed_fetch_shows_the_error_and_no_reading() {
        let mut app = App::new(Some("Roma".to_string()));
        app.handle_key(KeyCode::Enter);

        app.on_fetch_done(Err(anyhow::anyhow!("boom")));

        match &app.phase {
            Phase::Failure { message, .. } => assert_eq!(message, FETCH_FAILED_INLINE),
            other => panic!("expected Failure, got {other:?}"),
        }
        let alert = app.alert.as_ref().expect("failure must raise the modal");
        assert_eq!(alert.body, FETCH_FAILED_ALERT);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut app = App::new(Some("Roma".to_string()));
        app.handle_key(KeyCode::Enter);

        let effect = app.handle_key(KeyCode::Enter);

        assert!(matches!(effect, Effect::None));
        assert!(matches!(app.phase, Phase::Loading { .. }));
    }

    #[test]
    fn success_then_resubmit_loads_again() {
        let mut app = App::new(Some("Roma".to_string()));
        app.handle_key(KeyCode::Enter);
        app.on_fetch_done(Ok(reading(Condition::Nevoso)));

        let effect = app.handle_key(KeyCode::Enter);

        assert!(matches!(effect, Effect::Fetch(_)));
        assert!(matches!(app.phase, Phase::Loading { .. }));
    }

    #[test]
    fn open_alert_blocks_input_until_dismissed() {
        let mut app = App::new(None);
        app.handle_key(KeyCode::Enter);
        assert!(app.alert.is_some());

        // Typing while the modal is open does nothing.
        app.handle_key(KeyCode::Char('R'));
        assert!(app.input.is_empty());

        // Esc dismisses the modal instead of quitting.
        let effect = app.handle_key(KeyCode::Esc);
        assert!(matches!(effect, Effect::None));
        assert!(app.alert.is_none());

        app.handle_key(KeyCode::Char('R'));
        assert_eq!(app.input, "R");
    }

    #[test]
    fn backspace_edits_the_input() {
        let mut app = App::new(None);
        type_city(&mut app, "Rom");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.input, "Ro");
    }

    #[test]
    fn stray_fetch_result_outside_loading_is_dropped() {
        let mut app = App::new(None);
        app.on_fetch_done(Ok(reading(Condition::Piovoso)));
        assert!(matches!(app.phase, Phase::Idle));
    }

    #[test]
    fn esc_quits_from_the_base_screen() {
        let mut app = App::new(None);
        assert!(matches!(app.handle_key(KeyCode::Esc), Effect::Quit));
    }
}
