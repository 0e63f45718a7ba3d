//! Glue code tying the session and the terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_bootstrap::GameSession;
use client_frontend_core::{
    EventConsumer, FrontendConfig, frontend::Frontend, message::MessageLog,
};

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: &mut GameSession) -> Result<()> {
        tracing::info!(session = session.session_id(), "CLI frontend starting...");

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome to Rock Paper Scissors Minus One.");
        let consumer = CliEventConsumer::new(messages);

        let event_loop = EventLoop::new(
            consumer,
            session,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let (mut terminal, guard) = terminal::init(self.cli_config.ui.enable_mouse)
            .context("failed to initialise terminal")?;

        let consumer = event_loop.run(&mut terminal, session).await?;

        drop(guard);
        tracing::info!(
            messages = consumer.message_log().len(),
            phase = %session.model().phase,
            "CLI frontend exiting"
        );

        Ok(())
    }
}
