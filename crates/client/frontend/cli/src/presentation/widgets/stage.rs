//! Central play area: hands, reveals and the battle canvas.

use client_bootstrap::SpriteSet;
use client_frontend_core::view_model::{BattleView, ViewModel};
use game_core::{Choice, GameConfig, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::sprite;
use crate::presentation::theme::RatatuiTheme;

/// Render the stage for the current phase.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    sprites: &SpriteSet,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view_model.phase {
        Phase::Menu => render_menu(frame, inner, theme),
        Phase::Selecting => {
            let row = HandRow {
                label: "You",
                hands: &view_model.player_hands,
                removed: None,
                placeholders: GameConfig::MAX_HANDS,
                style: theme.player(),
            };
            row.render(frame, inner, sprites, theme);
        }
        Phase::ShowChoices | Phase::MinusOne | Phase::Result => {
            let [top, bottom] = halves(inner);
            HandRow {
                label: "CPU",
                hands: &view_model.computer_hands,
                removed: view_model.computer_removed,
                placeholders: 0,
                style: theme.computer(),
            }
            .render(frame, top, sprites, theme);
            HandRow {
                label: "You",
                hands: &view_model.player_hands,
                removed: view_model.player_removed,
                placeholders: 0,
                style: theme.player(),
            }
            .render(frame, bottom, sprites, theme);
        }
        Phase::Battle => {
            if let Some(battle) = &view_model.battle {
                render_battle(frame, inner, battle, sprites, theme);
            }
        }
    }
}

fn render_menu(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let lines = vec![
        Line::styled("ROCK  PAPER  SCISSORS", theme.title()),
        Line::styled("- minus one -", theme.title()),
        Line::raw(""),
        Line::raw("Throw two hands, see the CPU's two, then keep one."),
        Line::raw("Rock beats Scissors, Scissors beats Paper, Paper beats Rock."),
    ];
    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    let area = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(paragraph, area);
}

/// One side's hands, laid out left to right.
struct HandRow<'a> {
    label: &'static str,
    hands: &'a [Choice],
    removed: Option<Choice>,
    /// Minimum slot count; empty slots show a placeholder.
    placeholders: usize,
    style: Style,
}

impl HandRow<'_> {
    fn render(&self, frame: &mut Frame, area: Rect, sprites: &SpriteSet, theme: &RatatuiTheme) {
        if area.height == 0 {
            return;
        }
        let label = Rect { height: 1, ..area };
        frame.render_widget(Paragraph::new(self.label).style(self.style), label);
        let body = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };

        let filled = self.hands.len() + usize::from(self.removed.is_some());
        let slots = filled.max(self.placeholders).max(1);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, slots as u32); slots])
            .split(body);

        let mut columns = columns.iter();
        for choice in self.hands {
            if let Some(column) = columns.next() {
                let caption = Line::from(Span::styled(choice.to_string(), self.style));
                let style = self.style.fg(theme.choice(*choice));
                sprite::render_captioned(frame, *column, sprites.get(*choice), caption, style);
            }
        }
        if let (Some(choice), Some(column)) = (self.removed, columns.next()) {
            let caption = Line::from(Span::styled(format!("{choice} (removed)"), theme.removed()));
            sprite::render_captioned(frame, *column, sprites.get(choice), caption, theme.removed());
        }
        for column in columns {
            let placeholder = Paragraph::new("?")
                .alignment(Alignment::Center)
                .style(theme.prompt());
            let center = Rect {
                y: column.y + column.height / 2,
                height: column.height.min(1),
                ..*column
            };
            frame.render_widget(placeholder, center);
        }
    }
}

fn render_battle(
    frame: &mut Frame,
    area: Rect,
    battle: &BattleView,
    sprites: &SpriteSet,
    theme: &RatatuiTheme,
) {
    if area.height < 3 {
        return;
    }
    let banner = Rect { height: 1, ..area };
    let labels = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };
    let canvas = Rect {
        y: area.y + 1,
        height: area.height - 2,
        ..area
    };

    if let Some(text) = battle.banner() {
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(theme.outcome(battle.outcome));
        frame.render_widget(paragraph, banner);
    }

    let label = Line::from(vec![
        Span::styled(format!("You: {}", battle.player), theme.player()),
        Span::raw("   vs   "),
        Span::styled(format!("CPU: {}", battle.computer), theme.computer()),
    ]);
    frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), labels);

    if battle.player_visible {
        let x = canvas_column(canvas, battle.player_x);
        let style = theme.player().fg(theme.choice(battle.player));
        sprite::render_at(frame, canvas, x, sprites.get(battle.player), style);
    }
    if battle.computer_visible {
        let x = canvas_column(canvas, battle.computer_x);
        let style = theme.computer().fg(theme.choice(battle.computer));
        sprite::render_at(frame, canvas, x, sprites.get(battle.computer), style);
    }
}

/// Maps a canvas fraction in `[0, 1]` to a terminal column inside `area`.
pub fn canvas_column(area: Rect, fraction: f32) -> u16 {
    let offset = (fraction.clamp(0.0, 1.0) * f32::from(area.width)).round() as u16;
    area.x + offset.min(area.width.saturating_sub(1))
}

fn halves(area: Rect) -> [Rect; 2] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [rows[0], rows[1]]
}
