//! Frame-driven battle animation.
//!
//! The animator is presentation state: positions are derived purely from the
//! frame counter and the already-resolved outcome, and nothing in the rules
//! reads them back. The only value the state machine consumes is
//! [`BattleAnimator::complete`], which gates leaving the battle.
//!
//! Stages, counted in frames since the battle started:
//!
//! ```text
//!   1..60   Approach  both sprites ease toward center stage
//!  60..90   Clash     the winner pushes into the loser (skipped on a tie)
//!  90..     Settle    complete; a decisive loser is no longer drawn
//! ```

use crate::config::GameConfig;
use crate::outcome::{Outcome, Side};

/// Coarse animation stage derived from the frame counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStage {
    Approach,
    Clash,
    Settle,
}

/// Animates the two remaining hands meeting on the battle canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAnimator {
    timer: u32,
    player_x: f32,
    computer_x: f32,
    outcome: Outcome,
    complete: bool,
}

impl BattleAnimator {
    /// Starts a fresh battle for an already-resolved outcome.
    pub fn new(outcome: Outcome) -> Self {
        Self {
            timer: 0,
            player_x: GameConfig::PLAYER_START_X,
            computer_x: GameConfig::COMPUTER_START_X,
            outcome,
            complete: false,
        }
    }

    /// Rewinds to frame zero for a new outcome.
    pub fn reset(&mut self, outcome: Outcome) {
        *self = Self::new(outcome);
    }

    /// Advances one frame. Returns true on the frame the battle settles.
    pub fn tick(&mut self) -> bool {
        self.timer = self.timer.saturating_add(1);

        if self.timer < GameConfig::APPROACH_TICKS {
            self.player_x += ease(self.player_x, GameConfig::PLAYER_TARGET_X);
            self.computer_x += ease(self.computer_x, GameConfig::COMPUTER_TARGET_X);
        } else if self.timer < GameConfig::SETTLE_TICKS {
            match self.outcome.winner() {
                Some(Side::Player) => self.player_x += GameConfig::CLASH_STEP,
                Some(Side::Computer) => self.computer_x -= GameConfig::CLASH_STEP,
                None => {}
            }
        } else if !self.complete {
            self.complete = true;
            return true;
        }

        false
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn computer_x(&self) -> f32 {
        self.computer_x
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn stage(&self) -> BattleStage {
        if self.timer < GameConfig::APPROACH_TICKS {
            BattleStage::Approach
        } else if self.timer < GameConfig::SETTLE_TICKS {
            BattleStage::Clash
        } else {
            BattleStage::Settle
        }
    }

    /// Whether a side's sprite should still be drawn.
    ///
    /// Both sprites stay visible until the settle frame; after that only the
    /// winner remains (or both, on a tie).
    pub fn is_visible(&self, side: Side) -> bool {
        if self.timer < GameConfig::SETTLE_TICKS {
            return true;
        }
        match self.outcome.winner() {
            Some(winner) => winner == side,
            None => true,
        }
    }
}

fn ease(from: f32, target: f32) -> f32 {
    (target - from) * GameConfig::APPROACH_EASING
}

impl Default for BattleAnimator {
    fn default() -> Self {
        Self::new(Outcome::Tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animator: &mut BattleAnimator, frames: u32) {
        for _ in 0..frames {
            animator.tick();
        }
    }

    #[test]
    fn reset_restores_initial_positions() {
        let mut animator = BattleAnimator::new(Outcome::Player);
        run(&mut animator, 120);
        animator.reset(Outcome::Computer);

        assert_eq!(animator.timer(), 0);
        assert_eq!(animator.player_x(), GameConfig::PLAYER_START_X);
        assert_eq!(animator.computer_x(), GameConfig::COMPUTER_START_X);
        assert!(!animator.complete());
        assert_eq!(animator.outcome(), Outcome::Computer);
    }

    #[test]
    fn approach_eases_toward_center() {
        let mut animator = BattleAnimator::new(Outcome::Tie);
        animator.tick();
        assert!(animator.player_x() > GameConfig::PLAYER_START_X);
        assert!(animator.computer_x() < GameConfig::COMPUTER_START_X);

        run(&mut animator, 57);
        assert_eq!(animator.stage(), BattleStage::Approach);
        assert!((animator.player_x() - GameConfig::PLAYER_TARGET_X).abs() < 1.0);
        assert!((animator.computer_x() - GameConfig::COMPUTER_TARGET_X).abs() < 1.0);
    }

    #[test]
    fn completes_on_frame_ninety() {
        let mut animator = BattleAnimator::new(Outcome::Player);
        let mut settled_on = Vec::new();
        for _ in 0..100 {
            if animator.tick() {
                settled_on.push(animator.timer());
            }
        }

        assert_eq!(settled_on, vec![GameConfig::SETTLE_TICKS]);
        assert!(animator.complete());
        assert_eq!(animator.stage(), BattleStage::Settle);
    }

    #[test]
    fn not_complete_before_settle() {
        let mut animator = BattleAnimator::new(Outcome::Computer);
        run(&mut animator, GameConfig::SETTLE_TICKS - 1);
        assert!(!animator.complete());
        assert_eq!(animator.stage(), BattleStage::Clash);
    }

    #[test]
    fn winner_advances_during_clash() {
        let mut animator = BattleAnimator::new(Outcome::Player);
        run(&mut animator, GameConfig::APPROACH_TICKS - 1);
        let player_before = animator.player_x();
        let computer_before = animator.computer_x();

        run(&mut animator, 30);
        assert_eq!(animator.stage(), BattleStage::Clash);
        let expected = player_before + 30.0 * GameConfig::CLASH_STEP;
        assert!((animator.player_x() - expected).abs() < 1e-3);
        assert_eq!(animator.computer_x(), computer_before);
    }

    #[test]
    fn tie_holds_position_during_clash() {
        let mut animator = BattleAnimator::new(Outcome::Tie);
        run(&mut animator, GameConfig::APPROACH_TICKS - 1);
        let positions = (animator.player_x(), animator.computer_x());

        run(&mut animator, 40);
        assert_eq!((animator.player_x(), animator.computer_x()), positions);
        assert!(animator.complete());
    }

    #[test]
    fn loser_hidden_only_after_decisive_settle() {
        let mut decisive = BattleAnimator::new(Outcome::Computer);
        run(&mut decisive, GameConfig::SETTLE_TICKS - 1);
        assert!(decisive.is_visible(Side::Player));

        decisive.tick();
        assert!(!decisive.is_visible(Side::Player));
        assert!(decisive.is_visible(Side::Computer));

        let mut tie = BattleAnimator::new(Outcome::Tie);
        run(&mut tie, 120);
        assert!(tie.is_visible(Side::Player));
        assert!(tie.is_visible(Side::Computer));
    }
}
