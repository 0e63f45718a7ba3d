/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Seed feeding every computer decision of the match.
    pub seed: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hands each side commits to before the minus-one phase.
    pub const MAX_HANDS: usize = 2;
    /// Number of distinct choices.
    pub const CHOICE_COUNT: usize = 3;

    // ===== battle canvas (logical units, independent of the host surface) =====
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const COMPUTER_START_X: f32 = Self::CANVAS_WIDTH - 250.0;
    pub const PLAYER_TARGET_X: f32 = Self::CANVAS_WIDTH / 2.0 - 250.0;
    pub const COMPUTER_TARGET_X: f32 = Self::CANVAS_WIDTH / 2.0 + 100.0;

    // ===== battle timing (frames) =====
    /// Frames spent easing both sprites toward center stage.
    pub const APPROACH_TICKS: u32 = 60;
    /// Frame at which the battle settles and may be dismissed.
    pub const SETTLE_TICKS: u32 = 90;
    /// Fraction of the remaining distance covered per approach frame.
    pub const APPROACH_EASING: f32 = 0.1;
    /// Distance the winner advances per clash frame.
    pub const CLASH_STEP: f32 = 10.0;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5eed;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
