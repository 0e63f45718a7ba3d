//! Footer widget displaying key bindings.

use client_frontend_core::view_model::ViewModel;
use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::presentation::theme::RatatuiTheme;

/// Render the one-line help: the phase prompt followed by the quit hint.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let text = match &view_model.prompt {
        Some(prompt) => format!(" {prompt} | [q/Esc] Quit"),
        None => " [q/Esc] Quit".to_string(),
    };

    frame.render_widget(Paragraph::new(text).style(theme.prompt()), area);
}
