//! Colors and text styles for the terminal UI.
use client_frontend_core::message::MessageLevel;
use game_core::{Choice, Outcome};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn prompt(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn player(&self) -> Style {
        Style::default().fg(Color::LightCyan)
    }

    pub fn computer(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    /// Discarded hands are shown dimmed and struck through.
    pub fn removed(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn choice(&self, choice: Choice) -> Color {
        match choice {
            Choice::Rock => Color::Gray,
            Choice::Paper => Color::White,
            Choice::Scissors => Color::LightMagenta,
        }
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn outcome(&self, outcome: Outcome) -> Style {
        let color = match outcome {
            Outcome::Player => Color::LightGreen,
            Outcome::Computer => Color::LightRed,
            Outcome::Tie => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }
}
