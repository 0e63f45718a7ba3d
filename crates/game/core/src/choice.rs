//! The three hands a side can throw.

/// A single hand: rock, paper or scissors.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every choice, in menu order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Returns true if `self` defeats `other` under the fixed beats-relation.
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// Single-letter shortcut used by keyboard frontends.
    pub const fn hotkey(self) -> char {
        match self {
            Choice::Rock => 'r',
            Choice::Paper => 'p',
            Choice::Scissors => 's',
        }
    }

    /// Position of this choice inside [`Choice::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_choice_beats_exactly_one_other() {
        for choice in Choice::ALL {
            let beaten = Choice::ALL.iter().filter(|other| choice.beats(**other)).count();
            assert_eq!(beaten, 1, "{choice} should beat exactly one hand");
            assert!(!choice.beats(choice));
        }
    }

    #[test]
    fn index_follows_menu_order() {
        for (idx, choice) in Choice::ALL.iter().enumerate() {
            assert_eq!(choice.index(), idx);
        }
    }

    #[test]
    fn names_match_display() {
        assert_eq!(Choice::Paper.to_string(), "Paper");
        assert_eq!(Choice::Scissors.as_ref(), "Scissors");
    }
}
