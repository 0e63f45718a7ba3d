//! Authoritative game model.
//!
//! [`GameModel`] is the single owned value the engine mutates. Frontends read
//! it to render; only [`crate::engine::GameEngine`] writes to it.
mod match_state;
mod round;

pub use match_state::{MatchFormat, MatchResult, MatchState};
pub use round::{Hand, RoundState};

use crate::battle::BattleAnimator;
use crate::config::GameConfig;

/// The six screens of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Choosing the best-of-N format.
    Menu,
    /// Picking two hands.
    Selecting,
    /// Both pairs of hands revealed.
    ShowChoices,
    /// Choosing which of the two hands to keep.
    MinusOne,
    /// One hand left on each side.
    Result,
    /// Animated resolution of the set.
    Battle,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Selecting => "selecting",
            Phase::ShowChoices => "show_choices",
            Phase::MinusOne => "minus_one",
            Phase::Result => "result",
            Phase::Battle => "battle",
        }
    }
}

/// Complete state of one program run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameModel {
    pub phase: Phase,
    /// Present once a format was chosen on the menu.
    pub match_state: Option<MatchState>,
    pub round: RoundState,
    pub battle: BattleAnimator,
    /// Base seed for every random draw.
    pub seed: u64,
    /// Number of random draws taken so far.
    pub nonce: u64,
    /// Set once a side reached the required number of sets.
    pub result: Option<MatchResult>,
}

impl GameModel {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Menu,
            match_state: None,
            round: RoundState::new(),
            battle: BattleAnimator::default(),
            seed: config.seed,
            nonce: 0,
            result: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// 1-based set number, or 0 before a match started.
    pub fn current_set(&self) -> u32 {
        self.match_state.map_or(0, |state| state.current_set)
    }

    /// Keep buttons are live only in the minus-one phase before a hand was kept.
    pub fn keep_controls_active(&self) -> bool {
        self.phase == Phase::MinusOne && self.round.awaiting_discard()
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
