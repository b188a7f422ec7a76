//! Rendering for the single screen: title, input box, result area, modal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use meteo_core::Condition;

use crate::app::{Alert, App, Phase};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // titolo
            Constraint::Length(3), // input
            Constraint::Min(9),    // risultato
            Constraint::Length(3), // aiuto
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(frame, app, chunks[1]);
    render_result(frame, app, chunks[2]);
    render_help(frame, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(frame, alert);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Previsione Meteo (DEMO)")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.input.is_empty() {
        ("Inserisci una città", Style::default().fg(Color::DarkGray))
    } else {
        (app.input.as_str(), Style::default().fg(Color::Yellow))
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title("Città").borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    match &app.phase {
        Phase::Idle => {
            let prompt = Paragraph::new("Inserisci una città e premi Invio")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(prompt, area);
        }
        Phase::Loading { city } => {
            let spinner = Paragraph::new(format!("{} Caricamento meteo per {city}...", app.spinner_glyph()))
                .style(Style::default().fg(Color::Blue))
                .alignment(Alignment::Center);
            frame.render_widget(spinner, area);
        }
        Phase::Success { city, reading } => {
            let lines = vec![
                Line::from(Span::styled(
                    city.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{}  {}", reading.condition.icon(), reading.condition),
                    Style::default().fg(condition_color(reading.condition)),
                )),
                Line::from(Span::styled(
                    format!("{} °C", reading.temperature_c),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!(
                    "Umidità: {} %    Vento: {} km/h",
                    reading.humidity_pct, reading.wind_speed_kmh
                )),
                Line::from(Span::styled(
                    format!("Aggiornato alle {}", reading.observed_at.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                )),
            ];

            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, area);
        }
        Phase::Failure { message, .. } => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(error, area);
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[Invio] Cerca  [Esc] Esci")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_alert(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(format!("{}\n\n[Invio] Chiudi", alert.body))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().title(alert.title.as_str()).borders(Borders::ALL));
    frame.render_widget(dialog, area);
}

fn condition_color(condition: Condition) -> Color {
    match condition {
        Condition::Soleggiato => Color::Yellow,
        Condition::Piovoso => Color::Blue,
        Condition::Nuvoloso => Color::DarkGray,
        Condition::Nevoso => Color::LightBlue,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
