//! Rendering handlers.

use anyhow::Result;
use client_bootstrap::GameSession;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render the current view model and remember the layout it produced.
    pub(in crate::event) fn render(
        &mut self,
        terminal: &mut Tui,
        session: &GameSession,
    ) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            sprites: session.sprites(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        let layout = ui::render_with_view_model(terminal, &ctx)?;
        self.remember_layout(layout);
        Ok(())
    }
}
