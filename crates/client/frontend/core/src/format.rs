//! Message text for game events.
use client_bootstrap::GameEvent;
use game_core::{GameModel, Outcome, Phase, Side, Transition};

use crate::message::{MessageEntry, MessageLevel};

/// Describes an event for the message log.
///
/// `model` is the state after the event was applied. Returns `None` for
/// events that are obvious from the screen alone.
pub fn describe_event(event: &GameEvent, model: &GameModel) -> Option<MessageEntry> {
    let set = model.match_state.map(|state| state.current_set);

    match *event {
        GameEvent::BattleSettled { outcome } => Some(MessageEntry::new(
            battle_banner(outcome),
            set,
            outcome_level(outcome),
        )),
        GameEvent::Transition { transition, .. } => describe_transition(&transition, model, set),
    }
}

fn describe_transition(
    transition: &Transition,
    model: &GameModel,
    set: Option<u32>,
) -> Option<MessageEntry> {
    let info = |text: String| Some(MessageEntry::new(text, set, MessageLevel::Info));

    match *transition {
        Transition::Ignored(_) => None,
        Transition::Picked { choice, count } => info(format!("You picked {choice} ({count}/2).")),
        Transition::Entered { to, .. } => match to {
            Phase::Selecting => {
                let best_of = model.match_state.map_or(0, |state| state.max_sets());
                info(format!("Best of {best_of} started. Choose two hands."))
            }
            Phase::ShowChoices => {
                let hands = &model.round.computer_hands;
                match hands.as_slice() {
                    [first, second] => info(format!("CPU shows {first} and {second}.")),
                    _ => None,
                }
            }
            Phase::MinusOne => info("Minus one: choose the hand to keep.".to_string()),
            Phase::Battle => info("Battle!".to_string()),
            Phase::Menu | Phase::Result => None,
        },
        Transition::Kept {
            kept,
            player_removed,
            computer_removed,
        } => {
            let computer_kept = model
                .round
                .computer_hands
                .first()
                .map_or_else(String::new, |choice| format!(" Final: {kept} vs {choice}."));
            info(format!(
                "You removed {player_removed}, CPU removed {computer_removed}.{computer_kept}"
            ))
        }
        Transition::SetResolved {
            set: resolved,
            outcome,
            player_sets_won,
            computer_sets_won,
        } => Some(MessageEntry::new(
            format!(
                "Set {resolved}: {}. You {player_sets_won} - {computer_sets_won} CPU",
                set_verdict(outcome)
            ),
            Some(resolved),
            outcome_level(outcome),
        )),
        Transition::MatchOver { result, .. } => {
            let (text, level) = match result.winner {
                Side::Player => ("You win the match", MessageLevel::Success),
                Side::Computer => ("CPU wins the match", MessageLevel::Warning),
            };
            Some(MessageEntry::new(
                format!(
                    "{text} {}-{}!",
                    result.player_sets_won, result.computer_sets_won
                ),
                set,
                level,
            ))
        }
    }
}

/// Headline shown once a battle settles.
pub fn battle_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "You Win!",
        Outcome::Computer => "CPU Wins!",
        Outcome::Tie => "Tie Game!",
    }
}

fn set_verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "you won",
        Outcome::Computer => "CPU won",
        Outcome::Tie => "tie",
    }
}

fn outcome_level(outcome: Outcome) -> MessageLevel {
    match outcome {
        Outcome::Player => MessageLevel::Success,
        Outcome::Computer => MessageLevel::Warning,
        Outcome::Tie => MessageLevel::Info,
    }
}
