//! Input handling (keyboard and mouse).

use anyhow::Result;
use client_bootstrap::GameSession;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::Command;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

/// Upper bound on terminal events drained in a single frame.
const MAX_EVENTS_PER_FRAME: usize = 32;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Drains pending terminal events. Returns `true` when the loop should stop.
    pub(in crate::event) fn handle_input_tick(
        &mut self,
        session: &mut GameSession,
    ) -> Result<bool> {
        for _ in 0..MAX_EVENTS_PER_FRAME {
            if !term_event::poll(Duration::ZERO)? {
                break;
            }

            let event = term_event::read()?;
            if self.handle_terminal_event(event, session) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Applies one terminal event. Returns `true` when the loop should stop.
    pub(in crate::event) fn handle_terminal_event(
        &mut self,
        event: TermEvent,
        session: &mut GameSession,
    ) -> bool {
        let action = match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.input.handle_key(key, &self.view_model)
            }
            // Button rects belong to the last drawn frame.
            TermEvent::Mouse(mouse) if self.cli_config.ui.enable_mouse && !self.layout_stale => {
                self.input.handle_mouse(mouse, &self.layout, &self.view_model)
            }
            TermEvent::Resize(_, _) => {
                self.dirty = true;
                KeyAction::None
            }
            _ => KeyAction::None,
        };

        match action {
            KeyAction::Quit => {
                tracing::info!(phase = %session.model().phase, "Player quit");
                true
            }
            KeyAction::Submit(command) => {
                self.submit(command, session);
                session.is_over()
            }
            KeyAction::None => false,
        }
    }

    fn submit(&mut self, command: Command, session: &mut GameSession) {
        let phase = session.model().phase;
        if let Some(event) = session.dispatch(command) {
            self.apply(&event, session);
            // Later keys in the same frame must see the new buttons.
            self.refresh(session);
            if session.model().phase != phase {
                self.layout_stale = true;
            }
        }
    }
}
