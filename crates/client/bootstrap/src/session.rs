//! A single program run: the model, its random source and the sprites.
//!
//! Frontends own a [`GameSession`] and drive it once per frame. Commands go
//! through [`GameSession::dispatch`]; the animation clock through
//! [`GameSession::tick`]. Both report what changed as [`GameEvent`]s.

use game_core::{
    Command, GameEngine, GameModel, MatchResult, Outcome, Phase, RngOracle, Side, Transition,
};

use crate::assets::SpriteSet;

/// Something the presentation layer may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A command changed the model.
    Transition {
        /// Phase the command was issued in.
        phase: Phase,
        transition: Transition,
    },
    /// The battle animation reached its final frame.
    BattleSettled { outcome: Outcome },
}

pub struct GameSession {
    model: GameModel,
    rng: Box<dyn RngOracle>,
    sprites: SpriteSet,
    session_id: String,
}

impl GameSession {
    pub fn new(
        model: GameModel,
        rng: Box<dyn RngOracle>,
        sprites: SpriteSet,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            model,
            rng,
            sprites,
            session_id: session_id.into(),
        }
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_over(&self) -> bool {
        self.model.is_over()
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.model.result
    }

    /// Applies a command. Ignored commands are logged and yield no event.
    pub fn dispatch(&mut self, command: Command) -> Option<GameEvent> {
        let phase = self.model.phase;
        let transition = GameEngine::new(&mut self.model).execute(self.rng.as_ref(), command);

        match transition {
            Transition::Ignored(reason) => {
                tracing::debug!(%phase, command = command.name(), %reason, "Command ignored");
                None
            }
            Transition::SetResolved {
                set,
                outcome,
                player_sets_won,
                computer_sets_won,
            } => {
                tracing::info!(
                    set,
                    %outcome,
                    player_sets_won,
                    computer_sets_won,
                    "Set resolved"
                );
                Some(GameEvent::Transition { phase, transition })
            }
            Transition::MatchOver { result, .. } => {
                tracing::info!(
                    winner = %result.winner,
                    player_sets_won = result.player_sets_won,
                    computer_sets_won = result.computer_sets_won,
                    sets_played = result.sets_played,
                    "Match over"
                );
                Some(GameEvent::Transition { phase, transition })
            }
            _ => {
                tracing::debug!(%phase, ?transition, "Command applied");
                Some(GameEvent::Transition { phase, transition })
            }
        }
    }

    /// Advances the battle animation by one frame.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if !GameEngine::new(&mut self.model).tick() {
            return None;
        }

        let outcome = self.model.battle.outcome();
        tracing::debug!(%outcome, "Battle settled");
        Some(GameEvent::BattleSettled { outcome })
    }

    /// One-line description of how the run ended.
    pub fn summary(&self) -> String {
        if let Some(result) = self.model.result {
            let winner = match result.winner {
                Side::Player => "You win",
                Side::Computer => "Computer wins",
            };
            return format!(
                "{winner} the match {}-{} after {} set(s) (seed {}).",
                result.player_sets_won,
                result.computer_sets_won,
                result.sets_played,
                self.model.seed
            );
        }

        match self.model.match_state {
            Some(state) => format!(
                "Match abandoned during set {} at {}-{} (seed {}).",
                state.current_set, state.player_sets_won, state.computer_sets_won, self.model.seed
            ),
            None => "No match played.".to_string(),
        }
    }
}
