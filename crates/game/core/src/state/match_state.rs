//! Best-of-N bookkeeping.

use crate::error::GameError;
use crate::outcome::{Outcome, Side};

/// Validated best-of-N format. Only 1, 3 and 5 are offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchFormat(u8);

impl MatchFormat {
    pub const BEST_OF_ONE: Self = Self(1);
    pub const BEST_OF_THREE: Self = Self(3);
    pub const BEST_OF_FIVE: Self = Self(5);

    /// Formats offered on the menu, in display order.
    pub const ALL: [Self; 3] = [Self::BEST_OF_ONE, Self::BEST_OF_THREE, Self::BEST_OF_FIVE];

    pub fn new(max_sets: u8) -> Result<Self, GameError> {
        match max_sets {
            1 | 3 | 5 => Ok(Self(max_sets)),
            _ => Err(GameError::InvalidMatchFormat { max_sets }),
        }
    }

    pub const fn max_sets(self) -> u8 {
        self.0
    }

    /// Sets a side must win to take the match.
    pub const fn wins_needed(self) -> u8 {
        self.0.div_ceil(2)
    }
}

impl TryFrom<u8> for MatchFormat {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Final tally once a side reached the required number of sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: Side,
    pub player_sets_won: u8,
    pub computer_sets_won: u8,
    /// Sets played including ties.
    pub sets_played: u32,
}

/// Running score of an ongoing match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub format: MatchFormat,
    /// 1-based index of the set being played.
    pub current_set: u32,
    pub player_sets_won: u8,
    pub computer_sets_won: u8,
}

impl MatchState {
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            current_set: 1,
            player_sets_won: 0,
            computer_sets_won: 0,
        }
    }

    pub const fn max_sets(&self) -> u8 {
        self.format.max_sets()
    }

    pub const fn wins_needed(&self) -> u8 {
        self.format.wins_needed()
    }

    /// Credits the set to its winner. Ties leave both counters unchanged.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Side::Player) => self.player_sets_won += 1,
            Some(Side::Computer) => self.computer_sets_won += 1,
            None => {}
        }
    }

    /// Returns the final result once either counter reached `wins_needed`.
    pub fn result(&self) -> Option<MatchResult> {
        let needed = self.wins_needed();
        let winner = if self.player_sets_won >= needed {
            Side::Player
        } else if self.computer_sets_won >= needed {
            Side::Computer
        } else {
            return None;
        };

        Some(MatchResult {
            winner,
            player_sets_won: self.player_sets_won,
            computer_sets_won: self.computer_sets_won,
            sets_played: self.current_set,
        })
    }

    /// Moves on to the next set.
    pub fn next_set(&mut self) {
        self.current_set += 1;
    }
}
