//! Input processing for the CLI client.
//!
//! This module owns the keyboard- and mouse-to-command mapping so the rest
//! of the application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::view_model::{HotKey, ViewModel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use game_core::Command;

use crate::presentation::layout::ScreenLayout;

/// High-level outcome of processing an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch the decoded command to the session.
    Submit(Command),
    /// No meaningful command was produced.
    None,
}

/// Translates terminal events into game commands.
///
/// Space and Enter always map to [`Command::Confirm`] and [`Command::Advance`];
/// the session ignores them outside the phases that accept them. Letter and
/// digit keys only act through a currently enabled button.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, view_model: &ViewModel) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch, view_model),
            KeyCode::Enter => KeyAction::Submit(Command::Advance),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char, view_model: &ViewModel) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            ' ' => KeyAction::Submit(Command::Confirm),
            ch => view_model
                .button_for(HotKey::Char(ch))
                .map_or(KeyAction::None, |button| KeyAction::Submit(button.command)),
        }
    }

    /// Left clicks on an enabled button issue its command.
    pub fn handle_mouse(
        &self,
        mouse: MouseEvent,
        layout: &ScreenLayout,
        view_model: &ViewModel,
    ) -> KeyAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }

        layout
            .button_at(mouse.column, mouse.row)
            .and_then(|index| view_model.buttons.get(index))
            .filter(|button| button.enabled)
            .map_or(KeyAction::None, |button| KeyAction::Submit(button.command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::message::MessageLog;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use game_core::{Choice, GameEngine, GameModel, MatchFormat, PcgRng};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn view(model: &GameModel) -> ViewModel {
        ViewModel::from_model(model, &MessageLog::new(1), 0)
    }

    fn selecting() -> GameModel {
        let mut model = GameModel::default();
        GameEngine::new(&mut model).execute(&PcgRng, Command::StartMatch(MatchFormat::BEST_OF_ONE));
        model
    }

    #[test]
    fn menu_digits_start_matches() {
        let handler = InputHandler::new();
        let view = view(&GameModel::default());
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('5')), &view),
            KeyAction::Submit(Command::StartMatch(MatchFormat::BEST_OF_FIVE))
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('2')), &view), KeyAction::None);
    }

    #[test]
    fn letters_pick_hands() {
        let handler = InputHandler::new();
        let view = view(&selecting());
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('S')), &view),
            KeyAction::Submit(Command::Pick(Choice::Scissors))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('r')), &view),
            KeyAction::Submit(Command::Pick(Choice::Rock))
        );
    }

    #[test]
    fn space_and_enter_are_global() {
        let handler = InputHandler::new();
        let view = view(&GameModel::default());
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), &view),
            KeyAction::Submit(Command::Confirm)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &view),
            KeyAction::Submit(Command::Advance)
        );
    }

    #[test]
    fn quit_keys() {
        let handler = InputHandler::new();
        let view = view(&GameModel::default());
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &view), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &view), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, &view), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('c')), &view), KeyAction::None);
    }

    #[test]
    fn clicks_hit_enabled_buttons_only() {
        let handler = InputHandler::new();
        let mut model = selecting();
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 6, 4);

        let first = layout.buttons[0];
        let confirm = layout.buttons[3];
        let view_before = view(&model);
        assert_eq!(
            handler.handle_mouse(click(first.x + 1, first.y + 1), &layout, &view_before),
            KeyAction::Submit(Command::Pick(Choice::Rock))
        );
        assert_eq!(
            handler.handle_mouse(click(confirm.x, confirm.y), &layout, &view_before),
            KeyAction::None
        );

        let mut engine = GameEngine::new(&mut model);
        engine.execute(&PcgRng, Command::Pick(Choice::Rock));
        engine.execute(&PcgRng, Command::Pick(Choice::Paper));
        let ready = view(&model);
        assert_eq!(
            handler.handle_mouse(click(confirm.x, confirm.y), &layout, &ready),
            KeyAction::Submit(Command::Confirm)
        );
        assert_eq!(
            handler.handle_mouse(click(first.x, first.y), &layout, &ready),
            KeyAction::None
        );
        assert_eq!(handler.handle_mouse(click(0, 0), &layout, &ready), KeyAction::None);
    }

    #[test]
    fn ignores_non_left_clicks() {
        let handler = InputHandler::new();
        let view = view(&GameModel::default());
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 6, 3);
        let button = layout.buttons[0];
        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(button.x, button.y)
        };
        assert_eq!(handler.handle_mouse(right_click, &layout, &view), KeyAction::None);
    }
}
