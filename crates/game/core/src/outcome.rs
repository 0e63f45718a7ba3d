//! Round resolution.

use crate::choice::Choice;

/// Which side of the table a hand or a set belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

/// Result of two hands meeting in battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

impl Outcome {
    /// Winning side, or `None` for a tie.
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Player => Some(Side::Player),
            Outcome::Computer => Some(Side::Computer),
            Outcome::Tie => None,
        }
    }
}

/// Resolves two simultaneously revealed hands.
///
/// Equal hands tie; otherwise the player wins exactly when their hand beats
/// the computer's.
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Player
    } else {
        Outcome::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn equal_hands_tie() {
        for choice in Choice::ALL {
            assert_eq!(resolve(choice, choice), Outcome::Tie);
        }
    }

    #[test]
    fn resolves_every_decisive_pairing() {
        assert_eq!(resolve(Rock, Scissors), Outcome::Player);
        assert_eq!(resolve(Scissors, Rock), Outcome::Computer);
        assert_eq!(resolve(Paper, Rock), Outcome::Player);
        assert_eq!(resolve(Rock, Paper), Outcome::Computer);
        assert_eq!(resolve(Scissors, Paper), Outcome::Player);
        assert_eq!(resolve(Paper, Scissors), Outcome::Computer);
    }

    #[test]
    fn swapping_sides_swaps_the_winner() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                let forward = resolve(a, b);
                let backward = resolve(b, a);
                match forward {
                    Outcome::Tie => assert_eq!(backward, Outcome::Tie),
                    Outcome::Player => assert_eq!(backward, Outcome::Computer),
                    Outcome::Computer => assert_eq!(backward, Outcome::Player),
                }
            }
        }
    }

    #[test]
    fn winner_maps_to_side() {
        assert_eq!(Outcome::Player.winner(), Some(Side::Player));
        assert_eq!(Outcome::Computer.winner(), Some(Side::Computer));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
