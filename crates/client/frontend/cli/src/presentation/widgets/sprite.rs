//! ASCII-art sprite drawing.

use client_bootstrap::Sprite;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::presentation::layout::centered;

/// Draws `sprite` centered in `area` with a caption on the line below.
pub fn render_captioned(
    frame: &mut Frame,
    area: Rect,
    sprite: &Sprite,
    caption: Line<'_>,
    style: Style,
) {
    let width = u16::try_from(sprite.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(sprite.height()).unwrap_or(u16::MAX);
    let block = centered(area, width.max(caption.width() as u16), height.saturating_add(1));

    let mut lines: Vec<Line> = sprite
        .lines()
        .iter()
        .map(|line| Line::styled(line.as_str(), style))
        .collect();
    lines.push(caption.alignment(Alignment::Center));

    frame.render_widget(Paragraph::new(lines), block);
}

/// Draws `sprite` with its left edge at `x`, vertically centered in `area`.
///
/// Columns past the right edge of `area` are clipped.
pub fn render_at(frame: &mut Frame, area: Rect, x: u16, sprite: &Sprite, style: Style) {
    if x >= area.right() {
        return;
    }
    let width = u16::try_from(sprite.width())
        .unwrap_or(u16::MAX)
        .min(area.right() - x);
    let height = u16::try_from(sprite.height())
        .unwrap_or(u16::MAX)
        .min(area.height);
    let y = area.y + (area.height - height) / 2;

    let lines: Vec<Line> = sprite
        .lines()
        .iter()
        .map(|line| Line::styled(line.as_str(), style))
        .collect();
    frame.render_widget(Paragraph::new(lines), Rect::new(x, y, width, height));
}
