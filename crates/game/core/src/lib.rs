//! Rules of rock-paper-scissors minus one.
//!
//! `game-core` defines the canonical rules (choices, resolution, the phase
//! state machine and the battle animation clock) behind pure APIs with no I/O.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod battle;
pub mod choice;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod outcome;
pub mod state;

pub use battle::{BattleAnimator, BattleStage};
pub use choice::Choice;
pub use config::GameConfig;
pub use engine::{Command, GameEngine, IgnoreReason, Transition};
pub use env::{PcgRng, RngContext, RngOracle, compute_seed};
pub use error::GameError;
pub use outcome::{Outcome, Side, resolve};
pub use state::{GameModel, Hand, MatchFormat, MatchResult, MatchState, Phase, RoundState};
