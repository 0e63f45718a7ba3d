//! Event loop driving input, session ticks and rendering.
//!
//! One frame is one iteration of poll-input, update-state, render. Frames are
//! paced by a tokio interval; the battle animator advances once per frame.

use anyhow::Result;
use client_bootstrap::{GameEvent, GameSession};
use client_frontend_core::{EventConsumer, FrontendConfig, view_model::ViewModel};
use game_core::Phase;
use tokio::time::{self, MissedTickBehavior};

use crate::{
    config::CliConfig, input::InputHandler, presentation::layout::ScreenLayout,
    presentation::terminal::Tui,
};

/// Owns per-run presentation state and the event consumer.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    /// Snapshot rebuilt after every applied event.
    pub(crate) view_model: ViewModel,
    /// Layout of the last drawn frame, used for mouse hit-testing.
    pub(crate) layout: ScreenLayout,
    /// Set once the phase changed after `layout` was drawn.
    pub(crate) layout_stale: bool,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
    /// Set when the next frame must be drawn.
    pub(crate) dirty: bool,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        consumer: C,
        session: &GameSession,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let view_model = ViewModel::from_model(
            session.model(),
            consumer.message_log(),
            usize::from(cli_config.ui.message_panel_height),
        );

        Self {
            input: InputHandler::new(),
            consumer,
            view_model,
            layout: ScreenLayout::default(),
            layout_stale: false,
            frontend_config,
            cli_config,
            dirty: true,
        }
    }

    /// Runs until the player quits, handing the consumer back for inspection.
    pub async fn run(mut self, terminal: &mut Tui, session: &mut GameSession) -> Result<C> {
        let mut frames = time::interval(self.frontend_config.frames.interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            if self.handle_input_tick(session)? {
                break;
            }

            if let Some(event) = session.tick() {
                self.apply(&event, session);
            }
            if is_animating(session) {
                self.dirty = true;
            }

            if self.dirty {
                self.refresh(session);
                self.render(terminal, session)?;
                self.dirty = false;
            }
        }

        Ok(self.consumer)
    }

    /// Feeds an event to the consumer and schedules a redraw if needed.
    pub(in crate::event) fn apply(&mut self, event: &GameEvent, session: &GameSession) {
        let impact = self.consumer.on_event(event, session.model());
        if impact.requires_redraw {
            self.dirty = true;
        }
    }

    pub(in crate::event) fn refresh(&mut self, session: &GameSession) {
        self.view_model = ViewModel::from_model(
            session.model(),
            self.consumer.message_log(),
            usize::from(self.cli_config.ui.message_panel_height),
        );
    }

    pub(in crate::event) fn remember_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
        self.layout_stale = false;
    }
}

fn is_animating(session: &GameSession) -> bool {
    let model = session.model();
    model.phase == Phase::Battle && !model.battle.complete()
}
