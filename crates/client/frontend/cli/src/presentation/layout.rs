//! Screen regions, shared by rendering and mouse hit-testing.
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one button, including its border.
pub const BUTTON_WIDTH: u16 = 22;

/// Regions of one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub stage: Rect,
    pub button_bar: Rect,
    /// One rect per button, in view-model order.
    pub buttons: Vec<Rect>,
    pub messages: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, message_panel_height: u16, button_count: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                    // Header
                Constraint::Min(0),                       // Stage
                Constraint::Length(3),                    // Buttons
                Constraint::Length(message_panel_height), // Messages
                Constraint::Length(1),                    // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            stage: chunks[1],
            button_bar: chunks[2],
            buttons: button_rects(chunks[2], button_count),
            messages: chunks[3],
            footer: chunks[4],
        }
    }

    /// Index of the button under a terminal cell.
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        self.buttons
            .iter()
            .position(|rect| contains(*rect, column, row))
    }
}

/// Lays buttons out left to right, centered in `bar`.
fn button_rects(bar: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || bar.width == 0 {
        return Vec::new();
    }

    let count_u16 = u16::try_from(count).unwrap_or(u16::MAX);
    let width = BUTTON_WIDTH.min(bar.width / count_u16);
    let total = width.saturating_mul(count_u16);
    let start = bar.x + (bar.width - total) / 2;

    (0..count_u16)
        .map(|i| Rect::new(start + i * width, bar.y, width, bar.height))
        .collect()
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Centered sub-rect at most `width` x `height`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_regions() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), 6, 3);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer, Rect::new(0, 29, 80, 1));
        assert_eq!(layout.messages, Rect::new(0, 23, 80, 6));
        assert_eq!(layout.button_bar, Rect::new(0, 20, 80, 3));
        assert_eq!(layout.stage.height, 17);
    }

    #[test]
    fn buttons_are_centered_and_hit_tested() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), 6, 3);
        assert_eq!(
            layout.buttons,
            vec![
                Rect::new(7, 20, 22, 3),
                Rect::new(29, 20, 22, 3),
                Rect::new(51, 20, 22, 3),
            ]
        );

        assert_eq!(layout.button_at(7, 20), Some(0));
        assert_eq!(layout.button_at(50, 22), Some(1));
        assert_eq!(layout.button_at(72, 21), Some(2));
        assert_eq!(layout.button_at(73, 21), None);
        assert_eq!(layout.button_at(6, 21), None);
        assert_eq!(layout.button_at(20, 23), None);
    }

    #[test]
    fn narrow_terminals_shrink_buttons() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 40, 30), 6, 4);
        assert!(layout.buttons.iter().all(|rect| rect.width == 10));
        assert_eq!(layout.buttons[3].right(), 40);
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(2, 2, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(5, 3, 4, 2));
        assert_eq!(centered(area, 40, 20), area);
    }
}
