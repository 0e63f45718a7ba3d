//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use client_bootstrap::GameSession;

/// Frontend abstraction for UI layers.
///
/// Frontends drive a [`GameSession`]:
/// - Decode player input into [`game_core::Command`]s and dispatch them
/// - Tick the battle animation once per frame
/// - Render a [`crate::ViewModel`] snapshot of the model
///
/// Frontends do NOT own the session; the caller keeps it to report the final
/// result once the frontend returns.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_bootstrap::GameSession;
/// use client_frontend_core::Frontend;
/// use anyhow::Result;
///
/// struct Headless;
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, session: &mut GameSession) -> Result<()> {
///         while !session.is_over() {
///             session.tick();
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should return once the user quits or the match is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: &mut GameSession) -> Result<()>;
}
