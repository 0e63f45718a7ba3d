//! View-model snapshots derived from [`game_core::GameModel`].
//!
//! A [`ViewModel`] holds everything a frontend needs to draw one frame:
//! headline text, the score, both sides' hands, battle positions and the
//! buttons that are live in the current phase. Buttons carry the
//! [`Command`] they issue, so a frontend only has to map clicks and keys to
//! buttons.
use arrayvec::ArrayVec;
use game_core::{
    BattleStage, Choice, Command, GameConfig, GameModel, Hand, MatchFormat, MatchResult, Outcome,
    Phase, Side,
};

use crate::format::battle_banner;
use crate::message::{MessageEntry, MessageLog};

/// Most buttons shown at once (three picks plus confirm).
pub const MAX_BUTTONS: usize = 4;

/// Key bound to a button, independent of the terminal library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotKey {
    Char(char),
    Space,
    Enter,
}

impl HotKey {
    pub fn label(&self) -> String {
        match self {
            HotKey::Char(c) => c.to_ascii_uppercase().to_string(),
            HotKey::Space => "Space".to_string(),
            HotKey::Enter => "Enter".to_string(),
        }
    }
}

/// A clickable control together with its shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: String,
    pub hotkey: HotKey,
    pub command: Command,
    /// Disabled buttons are drawn but ignore clicks and keys.
    pub enabled: bool,
}

impl ButtonSpec {
    fn new(label: impl Into<String>, hotkey: HotKey, command: Command) -> Self {
        Self {
            label: label.into(),
            hotkey,
            command,
            enabled: true,
        }
    }

    fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// "Best of N: You a - b CPU" line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub set: u32,
    pub max_sets: u8,
    pub player: u8,
    pub computer: u8,
}

impl ScoreLine {
    pub fn text(&self) -> String {
        format!(
            "Best of {}: You {} - {} CPU",
            self.max_sets, self.player, self.computer
        )
    }
}

/// Battle canvas snapshot.
///
/// Positions are the left edge of each sprite as a fraction of the canvas
/// width, so frontends can scale them to any surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BattleView {
    pub player: Choice,
    pub computer: Choice,
    pub player_x: f32,
    pub computer_x: f32,
    pub player_visible: bool,
    pub computer_visible: bool,
    pub stage: BattleStage,
    pub outcome: Outcome,
    pub complete: bool,
}

impl BattleView {
    fn from_model(model: &GameModel) -> Option<Self> {
        let (player, computer) = model.round.final_hands()?;
        let battle = &model.battle;
        Some(Self {
            player,
            computer,
            player_x: battle.player_x() / GameConfig::CANVAS_WIDTH,
            computer_x: battle.computer_x() / GameConfig::CANVAS_WIDTH,
            player_visible: battle.is_visible(Side::Player),
            computer_visible: battle.is_visible(Side::Computer),
            stage: battle.stage(),
            outcome: battle.outcome(),
            complete: battle.complete(),
        })
    }

    /// Headline once settled.
    pub fn banner(&self) -> Option<&'static str> {
        self.complete.then(|| battle_banner(self.outcome))
    }
}

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub phase: Phase,
    pub title: String,
    /// Instruction line, if the phase waits for a key.
    pub prompt: Option<String>,
    pub score: Option<ScoreLine>,
    pub player_hands: Hand,
    pub computer_hands: Hand,
    pub player_removed: Option<Choice>,
    pub computer_removed: Option<Choice>,
    pub battle: Option<BattleView>,
    pub buttons: ArrayVec<ButtonSpec, MAX_BUTTONS>,
    pub result: Option<MatchResult>,
    pub messages: Vec<MessageEntry>,
}

impl ViewModel {
    pub fn from_model(model: &GameModel, messages: &MessageLog, message_limit: usize) -> Self {
        let round = &model.round;
        let score = model.match_state.map(|state| ScoreLine {
            set: state.current_set,
            max_sets: state.max_sets(),
            player: state.player_sets_won,
            computer: state.computer_sets_won,
        });
        let battle = match model.phase {
            Phase::Battle => BattleView::from_model(model),
            _ => None,
        };

        Self {
            phase: model.phase,
            title: title(model),
            prompt: prompt(model),
            score,
            player_hands: round.player_hands.clone(),
            computer_hands: round.computer_hands.clone(),
            player_removed: round.player_removed,
            computer_removed: round.computer_removed,
            battle,
            buttons: buttons(model),
            result: model.result,
            messages: collect_messages(messages, message_limit),
        }
    }

    /// First enabled button bound to `hotkey`.
    pub fn button_for(&self, hotkey: HotKey) -> Option<&ButtonSpec> {
        self.buttons
            .iter()
            .find(|button| button.enabled && button.hotkey == hotkey)
    }
}

fn title(model: &GameModel) -> String {
    let set = model.current_set();
    match model.phase {
        Phase::Menu => "Choose Best of:".to_string(),
        Phase::Selecting => format!("Set {set}: Choose Two Hands"),
        Phase::ShowChoices => "Both Players Chose!".to_string(),
        Phase::MinusOne => "Choose Hand to Keep!".to_string(),
        Phase::Result => format!("Set {set} Result"),
        Phase::Battle if model.is_over() => "Match Over".to_string(),
        Phase::Battle => format!("Set {set} Battle"),
    }
}

fn prompt(model: &GameModel) -> Option<String> {
    let text = match model.phase {
        Phase::Menu => "Click a format or press 1, 3 or 5",
        Phase::Selecting if model.round.player_ready() => "Hands Selected! Press SPACE",
        Phase::Selecting => "Pick hands with R, P and S",
        Phase::ShowChoices => "Press SPACE to remove one hand",
        Phase::MinusOne if model.keep_controls_active() => "Keep a hand with 1 or 2",
        Phase::MinusOne => return None,
        Phase::Result => "Press SPACE for Battle!",
        Phase::Battle if model.is_over() => "Thanks for playing!",
        Phase::Battle if model.battle.complete() => "Press ENTER for next set",
        Phase::Battle => return None,
    };
    Some(text.to_string())
}

fn buttons(model: &GameModel) -> ArrayVec<ButtonSpec, MAX_BUTTONS> {
    let mut buttons = ArrayVec::new();
    let round = &model.round;

    match model.phase {
        Phase::Menu => {
            for format in MatchFormat::ALL {
                let sets = format.max_sets();
                let hotkey = char::from_digit(u32::from(sets), 10).unwrap_or('?');
                buttons.push(ButtonSpec::new(
                    format!("Best of {sets}"),
                    HotKey::Char(hotkey),
                    Command::StartMatch(format),
                ));
            }
        }
        Phase::Selecting => {
            let ready = round.player_ready();
            for choice in Choice::ALL {
                buttons.push(
                    ButtonSpec::new(
                        choice.to_string(),
                        HotKey::Char(choice.hotkey()),
                        Command::Pick(choice),
                    )
                    .enabled(!ready),
                );
            }
            buttons.push(
                ButtonSpec::new("Confirm", HotKey::Space, Command::Confirm).enabled(ready),
            );
        }
        Phase::ShowChoices => {
            buttons.push(ButtonSpec::new("Continue", HotKey::Space, Command::Confirm));
        }
        Phase::MinusOne => {
            let active = model.keep_controls_active();
            for (index, choice) in round.player_hands.iter().enumerate() {
                let hotkey = char::from_digit(index as u32 + 1, 10).unwrap_or('?');
                buttons.push(
                    ButtonSpec::new(
                        format!("Keep {choice}"),
                        HotKey::Char(hotkey),
                        Command::Keep(index),
                    )
                    .enabled(active),
                );
            }
        }
        Phase::Result => {
            buttons.push(ButtonSpec::new("Battle!", HotKey::Space, Command::Confirm));
        }
        Phase::Battle if model.is_over() => {}
        Phase::Battle => {
            buttons.push(
                ButtonSpec::new("Next Set", HotKey::Enter, Command::Advance)
                    .enabled(model.battle.complete()),
            );
        }
    }

    buttons
}

fn collect_messages(log: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    if limit == 0 {
        return Vec::new();
    }
    let mut entries: Vec<_> = log.recent(limit).cloned().collect();
    entries.reverse();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameEngine, PcgRng};

    fn view(model: &GameModel) -> ViewModel {
        ViewModel::from_model(model, &MessageLog::new(4), 4)
    }

    fn commands(button_list: &[ButtonSpec]) -> Vec<Command> {
        button_list.iter().map(|button| button.command).collect()
    }

    #[test]
    fn menu_offers_three_formats() {
        let view = view(&GameModel::default());

        assert_eq!(view.title, "Choose Best of:");
        assert_eq!(view.score, None);
        assert_eq!(
            commands(&view.buttons),
            MatchFormat::ALL.map(Command::StartMatch).to_vec()
        );
        assert_eq!(
            view.button_for(HotKey::Char('3')).map(|button| button.command),
            Some(Command::StartMatch(MatchFormat::BEST_OF_THREE))
        );
    }

    #[test]
    fn selection_locks_picks_once_ready() {
        let mut model = GameModel::default();
        let mut engine = GameEngine::new(&mut model);
        engine.execute(&PcgRng, Command::StartMatch(MatchFormat::BEST_OF_ONE));
        engine.execute(&PcgRng, Command::Pick(Choice::Rock));

        let partial = view(&model);
        assert_eq!(partial.title, "Set 1: Choose Two Hands");
        assert!(partial.button_for(HotKey::Char('p')).is_some());
        assert!(partial.button_for(HotKey::Space).is_none());

        GameEngine::new(&mut model).execute(&PcgRng, Command::Pick(Choice::Paper));
        let ready = view(&model);
        assert_eq!(ready.prompt.as_deref(), Some("Hands Selected! Press SPACE"));
        assert!(ready.button_for(HotKey::Char('p')).is_none());
        assert_eq!(
            ready.button_for(HotKey::Space).map(|button| button.command),
            Some(Command::Confirm)
        );
        assert_eq!(
            ready.score.map(|score| score.text()),
            Some("Best of 1: You 0 - 0 CPU".to_string())
        );
    }

    #[test]
    fn keep_buttons_follow_player_hands() {
        let mut model = GameModel::default();
        let mut engine = GameEngine::new(&mut model);
        engine.execute(&PcgRng, Command::StartMatch(MatchFormat::BEST_OF_ONE));
        engine.execute(&PcgRng, Command::Pick(Choice::Scissors));
        engine.execute(&PcgRng, Command::Pick(Choice::Rock));
        engine.execute(&PcgRng, Command::Confirm);
        engine.execute(&PcgRng, Command::Confirm);

        let view = view(&model);
        let labels: Vec<_> = view.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Keep Scissors", "Keep Rock"]);
        assert_eq!(
            view.button_for(HotKey::Char('2')).map(|button| button.command),
            Some(Command::Keep(1))
        );
    }

    #[test]
    fn battle_positions_are_canvas_fractions() {
        let mut model = GameModel::default();
        model.match_state = Some(game_core::MatchState::new(MatchFormat::BEST_OF_ONE));
        model.phase = Phase::Battle;
        model.round.player_hands.push(Choice::Paper);
        model.round.computer_hands.push(Choice::Rock);
        model.battle.reset(Outcome::Player);

        let battle = view(&model).battle.unwrap();
        assert_eq!(battle.player_x, 0.125);
        assert_eq!(battle.banner(), None);
        assert!(view(&model).button_for(HotKey::Enter).is_none());

        for _ in 0..GameConfig::SETTLE_TICKS {
            model.battle.tick();
        }
        let settled = view(&model);
        let battle = settled.battle.unwrap();
        assert_eq!(battle.banner(), Some("You Win!"));
        assert!(!battle.computer_visible);
        assert_eq!(settled.prompt.as_deref(), Some("Press ENTER for next set"));
        assert!(settled.button_for(HotKey::Enter).is_some());
    }

    #[test]
    fn messages_are_oldest_first() {
        let mut log = MessageLog::new(8);
        for text in ["a", "b", "c"] {
            log.push_text(text);
        }
        let view = ViewModel::from_model(&GameModel::default(), &log, 2);
        let texts: Vec<_> = view.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
    }
}
