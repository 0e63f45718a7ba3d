//! Clickable button bar.

use client_frontend_core::view_model::ButtonSpec;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render each button into the matching rect from the screen layout.
pub fn render(frame: &mut Frame, areas: &[Rect], buttons: &[ButtonSpec], theme: &RatatuiTheme) {
    for (area, button) in areas.iter().zip(buttons) {
        let label = format!("{} [{}]", button.label, button.hotkey.label());
        let paragraph = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(theme.button(button.enabled))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, *area);
    }
}
