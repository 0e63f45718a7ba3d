//! Maintains the CLI message log in response to session events.
use client_bootstrap::GameEvent;
use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::describe_event,
    message::MessageLog,
};
use game_core::GameModel;

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent, model: &GameModel) -> EventImpact {
        if let Some(entry) = describe_event(event, model) {
            self.log.push(entry);
        }
        // Every applied event changes what is on screen.
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }
}
