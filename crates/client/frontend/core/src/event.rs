//! Utilities for reacting to game events inside UI layers.
use client_bootstrap::GameEvent;
use game_core::GameModel;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

/// Receives session events after they were applied to `model`.
pub trait EventConsumer {
    fn on_event(&mut self, event: &GameEvent, model: &GameModel) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
}
