//! Phase transitions for a best-of-N match.
//!
//! The [`GameEngine`] is the only writer of [`GameModel`]. Each
//! [`Command`] is routed by the current [`Phase`]; commands that do not apply
//! are reported as [`Transition::Ignored`] and leave the model unchanged.
//!
//! ```text
//! Menu ─StartMatch→ Selecting ─Confirm→ ShowChoices ─Confirm→ MinusOne
//!                      ↑                                         │ Keep
//!                      └──────Advance── Battle ←─Confirm── Result ┘
//! ```
mod command;
mod transition;

pub use command::Command;
pub use transition::{IgnoreReason, Transition};

use arrayvec::ArrayVec;

use crate::choice::Choice;
use crate::config::GameConfig;
use crate::env::{RngContext, RngOracle, compute_seed};
use crate::outcome::resolve;
use crate::state::{GameModel, MatchFormat, MatchState, Phase};

/// Applies commands and frame ticks to a borrowed [`GameModel`].
pub struct GameEngine<'a> {
    model: &'a mut GameModel,
}

impl<'a> GameEngine<'a> {
    pub fn new(model: &'a mut GameModel) -> Self {
        Self { model }
    }

    /// Executes a command against the current phase.
    ///
    /// `rng` is consulted only by the two transitions where the computer
    /// decides something: revealing its hands and discarding one of them.
    pub fn execute(&mut self, rng: &dyn RngOracle, command: Command) -> Transition {
        if self.model.is_over() {
            return Transition::Ignored(IgnoreReason::MatchFinished);
        }

        match (self.model.phase, command) {
            (Phase::Menu, Command::StartMatch(format)) => self.start_match(format),
            (Phase::Selecting, Command::Pick(choice)) => self.pick(choice),
            (Phase::Selecting, Command::Confirm) => self.reveal(rng),
            (Phase::ShowChoices, Command::Confirm) => self.enter(Phase::MinusOne),
            (Phase::MinusOne, Command::Keep(index)) => self.keep(rng, index),
            (Phase::Result, Command::Confirm) => self.start_battle(),
            (Phase::Battle, Command::Advance) => self.finish_set(),
            (phase, command) => Transition::Ignored(IgnoreReason::WrongPhase {
                phase,
                command: command.name(),
            }),
        }
    }

    /// Advances the battle animation by one frame.
    ///
    /// Has no effect outside the battle phase. Returns true on the frame the
    /// battle settles and [`Command::Advance`] becomes acceptable.
    pub fn tick(&mut self) -> bool {
        if self.model.phase != Phase::Battle || self.model.is_over() {
            return false;
        }
        self.model.battle.tick()
    }

    fn enter(&mut self, to: Phase) -> Transition {
        let from = self.model.phase;
        self.model.phase = to;
        Transition::Entered { from, to }
    }

    fn start_match(&mut self, format: MatchFormat) -> Transition {
        self.model.match_state = Some(MatchState::new(format));
        self.model.round.clear();
        self.enter(Phase::Selecting)
    }

    fn pick(&mut self, choice: Choice) -> Transition {
        if !self.model.round.pick(choice) {
            return Transition::Ignored(IgnoreReason::HandFull);
        }
        Transition::Picked {
            choice,
            count: self.model.round.player_hands.len(),
        }
    }

    /// Samples two distinct computer hands uniformly without replacement.
    fn reveal(&mut self, rng: &dyn RngOracle) -> Transition {
        if !self.model.round.player_ready() {
            return Transition::Ignored(IgnoreReason::HandIncomplete);
        }

        let mut pool: ArrayVec<Choice, { GameConfig::CHOICE_COUNT }> =
            Choice::ALL.into_iter().collect();
        let first_index = rng.pick_index(self.draw_seed(RngContext::FirstHand), pool.len());
        let first = pool.remove(first_index);
        let second_index = rng.pick_index(self.draw_seed(RngContext::SecondHand), pool.len());
        let second = pool[second_index];
        self.model.nonce += 1;

        self.model.round.set_computer_hands([first, second]);
        self.enter(Phase::ShowChoices)
    }

    /// Keeps one player hand and lets the computer discard one of its own.
    ///
    /// The computer's discard is drawn independently of the player's choice.
    fn keep(&mut self, rng: &dyn RngOracle, index: usize) -> Transition {
        if index >= GameConfig::MAX_HANDS {
            return Transition::Ignored(IgnoreReason::InvalidKeepIndex(index));
        }
        if !self.model.round.awaiting_discard() {
            return Transition::Ignored(IgnoreReason::HandIncomplete);
        }

        let discard = rng.pick_index(self.draw_seed(RngContext::Discard), GameConfig::MAX_HANDS);
        let round = &mut self.model.round;
        let (Some(player_removed), Some(computer_removed)) =
            (round.keep_player(index), round.discard_computer(discard))
        else {
            return Transition::Ignored(IgnoreReason::HandIncomplete);
        };
        let kept = round.player_hands[0];
        self.model.nonce += 1;
        self.model.phase = Phase::Result;

        Transition::Kept {
            kept,
            player_removed,
            computer_removed,
        }
    }

    fn start_battle(&mut self) -> Transition {
        let Some((player, computer)) = self.model.round.final_hands() else {
            return Transition::Ignored(IgnoreReason::HandIncomplete);
        };
        self.model.battle.reset(resolve(player, computer));
        self.enter(Phase::Battle)
    }

    fn finish_set(&mut self) -> Transition {
        if !self.model.battle.complete() {
            return Transition::Ignored(IgnoreReason::BattleInProgress);
        }
        let Some(match_state) = self.model.match_state.as_mut() else {
            return Transition::Ignored(IgnoreReason::WrongPhase {
                phase: Phase::Battle,
                command: Command::Advance.name(),
            });
        };

        let outcome = self.model.battle.outcome();
        let set = match_state.current_set;
        match_state.record(outcome);

        if let Some(result) = match_state.result() {
            self.model.result = Some(result);
            return Transition::MatchOver { outcome, result };
        }

        match_state.next_set();
        let (player_sets_won, computer_sets_won) =
            (match_state.player_sets_won, match_state.computer_sets_won);
        self.model.round.clear();
        self.model.phase = Phase::Selecting;

        Transition::SetResolved {
            set,
            outcome,
            player_sets_won,
            computer_sets_won,
        }
    }

    fn draw_seed(&self, context: RngContext) -> u64 {
        compute_seed(self.model.seed, self.model.nonce, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::outcome::Outcome;

    fn started(format: MatchFormat) -> GameModel {
        let mut model = GameModel::default();
        GameEngine::new(&mut model).execute(&PcgRng, Command::StartMatch(format));
        model
    }

    #[test]
    fn start_match_sets_up_first_set() {
        let model = started(MatchFormat::BEST_OF_FIVE);
        let match_state = model.match_state.expect("match started");

        assert_eq!(model.phase, Phase::Selecting);
        assert_eq!(match_state.max_sets(), 5);
        assert_eq!(match_state.wins_needed(), 3);
        assert_eq!(match_state.current_set, 1);
    }

    #[test]
    fn commands_outside_their_phase_are_ignored() {
        let mut model = GameModel::default();
        let before = model.clone();
        let mut engine = GameEngine::new(&mut model);

        for command in [
            Command::Pick(Choice::Rock),
            Command::Confirm,
            Command::Keep(0),
            Command::Advance,
        ] {
            let transition = engine.execute(&PcgRng, command);
            assert!(
                matches!(
                    transition,
                    Transition::Ignored(IgnoreReason::WrongPhase {
                        phase: Phase::Menu,
                        ..
                    })
                ),
                "{command:?} should be ignored on the menu"
            );
        }
        assert_eq!(model, before);
    }

    #[test]
    fn confirm_requires_two_hands() {
        let mut model = started(MatchFormat::BEST_OF_ONE);
        let mut engine = GameEngine::new(&mut model);

        assert_eq!(
            engine.execute(&PcgRng, Command::Confirm),
            Transition::Ignored(IgnoreReason::HandIncomplete)
        );
        engine.execute(&PcgRng, Command::Pick(Choice::Paper));
        assert_eq!(
            engine.execute(&PcgRng, Command::Confirm),
            Transition::Ignored(IgnoreReason::HandIncomplete)
        );
        assert_eq!(model.phase, Phase::Selecting);
    }

    #[test]
    fn tick_only_runs_during_battle() {
        let mut model = started(MatchFormat::BEST_OF_ONE);
        assert!(!GameEngine::new(&mut model).tick());
        assert_eq!(model.battle.timer(), 0);
    }

    #[test]
    fn invalid_keep_index_is_ignored() {
        let mut model = started(MatchFormat::BEST_OF_ONE);
        let mut engine = GameEngine::new(&mut model);
        engine.execute(&PcgRng, Command::Pick(Choice::Rock));
        engine.execute(&PcgRng, Command::Pick(Choice::Paper));
        engine.execute(&PcgRng, Command::Confirm);
        engine.execute(&PcgRng, Command::Confirm);

        let before = model.clone();
        let transition = GameEngine::new(&mut model).execute(&PcgRng, Command::Keep(2));
        assert_eq!(transition, Transition::Ignored(IgnoreReason::InvalidKeepIndex(2)));
        assert_eq!(model, before);
        assert!(model.keep_controls_active());
    }

    #[test]
    fn battle_outcome_is_resolved_on_entry() {
        let mut model = started(MatchFormat::BEST_OF_ONE);
        model.phase = Phase::Result;
        model.round.player_hands.push(Choice::Paper);
        model.round.computer_hands.push(Choice::Rock);

        let transition = GameEngine::new(&mut model).execute(&PcgRng, Command::Confirm);
        assert_eq!(transition.entered(), Some(Phase::Battle));
        assert_eq!(model.battle.outcome(), Outcome::Player);
        assert!(!model.battle.complete());
    }
}
