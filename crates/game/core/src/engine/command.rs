use crate::choice::Choice;
use crate::state::MatchFormat;

/// Player input understood by the state machine.
///
/// Frontends translate clicks and key presses into commands; which commands
/// take effect depends solely on the current [`crate::state::Phase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Menu: begin a best-of-N match.
    StartMatch(MatchFormat),
    /// Selecting: add a hand.
    Pick(Choice),
    /// Selecting / ShowChoices / Result: move on to the next screen.
    Confirm,
    /// MinusOne: keep the player hand at this index, discarding the other.
    Keep(usize),
    /// Battle: dismiss a finished battle and score the set.
    Advance,
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Command::StartMatch(_) => "start_match",
            Command::Pick(_) => "pick",
            Command::Confirm => "confirm",
            Command::Keep(_) => "keep",
            Command::Advance => "advance",
        }
    }
}
