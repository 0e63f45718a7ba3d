use core::fmt;

use crate::choice::Choice;
use crate::outcome::Outcome;
use crate::state::{MatchResult, Phase};

/// Why a command left the model untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The match already has a winner.
    MatchFinished,
    /// The command has no meaning in the current phase.
    WrongPhase {
        phase: Phase,
        command: &'static str,
    },
    /// Two hands are already picked.
    HandFull,
    /// Confirm pressed with fewer than two hands picked.
    HandIncomplete,
    /// Keep index outside the two offered hands.
    InvalidKeepIndex(usize),
    /// Advance pressed before the battle animation settled.
    BattleInProgress,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::MatchFinished => write!(f, "match already finished"),
            IgnoreReason::WrongPhase { phase, command } => {
                write!(f, "{command} has no effect during {}", phase.as_str())
            }
            IgnoreReason::HandFull => write!(f, "two hands already picked"),
            IgnoreReason::HandIncomplete => write!(f, "pick two hands first"),
            IgnoreReason::InvalidKeepIndex(index) => write!(f, "no hand at index {index}"),
            IgnoreReason::BattleInProgress => write!(f, "battle still in progress"),
        }
    }
}

/// What a single command did to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// A hand was added without leaving the selection phase.
    Picked { choice: Choice, count: usize },
    /// The machine moved between phases with no further side effects to report.
    Entered { from: Phase, to: Phase },
    /// Both sides discarded a hand; the machine is now in the result phase.
    Kept {
        kept: Choice,
        player_removed: Choice,
        computer_removed: Choice,
    },
    /// The set was scored and the next set begins.
    SetResolved {
        set: u32,
        outcome: Outcome,
        player_sets_won: u8,
        computer_sets_won: u8,
    },
    /// The set was scored and decided the match.
    MatchOver { outcome: Outcome, result: MatchResult },
}

impl Transition {
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }

    /// Phase entered by this transition, if any.
    pub const fn entered(&self) -> Option<Phase> {
        match self {
            Transition::Entered { to, .. } => Some(*to),
            Transition::Kept { .. } => Some(Phase::Result),
            Transition::SetResolved { .. } => Some(Phase::Selecting),
            _ => None,
        }
    }
}
