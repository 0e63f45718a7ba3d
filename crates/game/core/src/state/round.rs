//! Hands committed during a single set.

use arrayvec::ArrayVec;

use crate::choice::Choice;
use crate::config::GameConfig;

/// Up to two hands held by one side.
pub type Hand = ArrayVec<Choice, { GameConfig::MAX_HANDS }>;

/// Per-set hand bookkeeping for both sides.
///
/// Hands fill up during selection, shrink to one each in the minus-one phase
/// and are cleared when the next set begins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    pub player_hands: Hand,
    pub computer_hands: Hand,
    pub player_removed: Option<Choice>,
    pub computer_removed: Option<Choice>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player hand. Returns false (and changes nothing) once two are held.
    pub fn pick(&mut self, choice: Choice) -> bool {
        self.player_hands.try_push(choice).is_ok()
    }

    pub fn player_ready(&self) -> bool {
        self.player_hands.is_full()
    }

    pub fn set_computer_hands(&mut self, hands: [Choice; GameConfig::MAX_HANDS]) {
        self.computer_hands = ArrayVec::from(hands);
    }

    /// True while both sides still hold their two hands.
    pub fn awaiting_discard(&self) -> bool {
        self.player_hands.is_full() && self.computer_hands.is_full()
    }

    /// Keeps the player hand at `index` and records the other as removed.
    pub fn keep_player(&mut self, index: usize) -> Option<Choice> {
        if !self.player_hands.is_full() || index >= GameConfig::MAX_HANDS {
            return None;
        }
        let removed = self.player_hands.remove(GameConfig::MAX_HANDS - 1 - index);
        self.player_removed = Some(removed);
        Some(removed)
    }

    /// Discards the computer hand at `index`.
    pub fn discard_computer(&mut self, index: usize) -> Option<Choice> {
        if !self.computer_hands.is_full() || index >= GameConfig::MAX_HANDS {
            return None;
        }
        let removed = self.computer_hands.remove(index);
        self.computer_removed = Some(removed);
        Some(removed)
    }

    /// The two hands that will meet in battle, once each side holds exactly one.
    pub fn final_hands(&self) -> Option<(Choice, Choice)> {
        match (self.player_hands.as_slice(), self.computer_hands.as_slice()) {
            ([player], [computer]) => Some((*player, *computer)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.player_hands.clear();
        self.computer_hands.clear();
        self.player_removed = None;
        self.computer_removed = None;
    }
}
