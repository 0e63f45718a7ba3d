//! Messages widget displaying recent game events.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` are oldest first; the newest is drawn at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its set number, if any.
fn format_message(entry: &MessageEntry) -> String {
    match entry.set {
        Some(set) => format!("[set {set}] {}", entry.text),
        None => entry.text.clone(),
    }
}
