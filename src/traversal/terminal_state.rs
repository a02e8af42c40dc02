use crate::models::{Deal, Player};

use super::action::Action;
use super::history::History;

/// Describes the ways in which a hand can terminate, or None if play continues
#[derive(Debug, PartialEq, Eq)]
pub enum TerminalState {
    /// Both players passed throughout: showdown for the minimum pot.
    Showdown,
    /// A bet went unanswered.
    Fold,
    /// A bet was called: showdown for the doubled pot.
    BetCall,
    None,
}

/// The game can only end once both players have acted.
pub fn check_terminal(history: &History) -> TerminalState {
    if history.len() < 2 {
        return TerminalState::None;
    }
    let actions = history.actions();
    let last = actions[actions.len() - 1];
    let second_last = actions[actions.len() - 2];

    if last.is_pass() {
        if actions.iter().all(Action::is_pass) {
            TerminalState::Showdown
        } else {
            TerminalState::Fold
        }
    } else if second_last.is_bet() {
        TerminalState::BetCall
    } else {
        TerminalState::None
    }
}

/// Payoff of the terminal `history` from `player`'s seat. Zero-sum: the
/// opposite seat sees the negated value.
pub fn evaluate_terminal(state: &TerminalState, history: &History, deal: &Deal, player: Player) -> f64 {
    let opponent = player.get_opposite();
    match state {
        TerminalState::Showdown => {
            if deal.card_of(player).outranks(deal.card_of(opponent)) {
                1.0
            } else {
                -1.0
            }
        }
        TerminalState::Fold => {
            // The folder passed last, so the winner is whoever would act next
            if player == history.player_to_act() {
                1.0
            } else {
                -1.0
            }
        }
        TerminalState::BetCall => {
            if deal.card_of(player).outranks(deal.card_of(opponent)) {
                2.0
            } else {
                -2.0
            }
        }
        TerminalState::None => panic!("Evaluated a non-terminal history"),
    }
}
