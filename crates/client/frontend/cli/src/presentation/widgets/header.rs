//! Header widget displaying the phase title and score.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel: title on the left, "Best of N" score on the right.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let mut spans = vec![Span::styled(view_model.title.clone(), theme.title())];
    if let Some(score) = view_model.score {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(score.text(), Style::default()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Minus One "));

    frame.render_widget(paragraph, area);
}
