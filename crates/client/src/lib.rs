//! Top-level client orchestrating the game session and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameSession (rules, random source, sprites)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management
//! - **GameSession**: Deterministic state transitions driven by commands
//! - **Frontend**: User interaction and rendering, borrowing the session
//!
//! Both layers are injected through [`ClientBuilder`], so tests can drive a
//! session with a scripted frontend instead of a terminal.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_bootstrap::GameSession;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an assembled session and a frontend
/// 2. `Client::run()` transfers control to the frontend until it returns
/// 3. The session is handed back so the caller can report the result
pub struct Client {
    session: GameSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion and return the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<GameSession> {
        let Client {
            mut session,
            mut frontend,
        } = self;

        tracing::info!(session = session.session_id(), "Client starting");
        frontend.run(&mut session).await?;

        match session.result() {
            Some(result) => tracing::info!(
                winner = %result.winner,
                player = result.player_sets_won,
                computer = result.computer_sets_won,
                sets = result.sets_played,
                "Match finished"
            ),
            None => tracing::info!(phase = %session.model().phase, "Match abandoned"),
        }

        Ok(session)
    }
}
