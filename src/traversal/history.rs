use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::models::Player;

use super::action::Action;

/// Longest line in the game tree: pass, bet, then the reply to the bet.
pub const MAX_PLIES: usize = 3;

/// The public action sequence of a hand. Fixed capacity, so cloning a
/// history per tree node costs nothing and no string key is ever built.
/// Slots beyond `len` always hold the default action, which keeps the
/// derived equality and hashing honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct History {
    actions: [Action; MAX_PLIES],
    len: u8,
}

impl Display for History {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for action in self.actions() {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

impl History {
    pub fn new() -> History {
        History {
            actions: [Action::Pass; MAX_PLIES],
            len: 0,
        }
    }

    pub fn from_actions(actions: &[Action]) -> History {
        actions
            .iter()
            .fold(History::new(), |history, &action| history.with(action))
    }

    /// Copy of this history extended by one action.
    pub fn with(&self, action: Action) -> History {
        if self.len() >= MAX_PLIES {
            panic!("History is already terminal and cannot grow");
        }
        let mut next = *self;
        next.actions[self.len()] = action;
        next.len += 1;
        next
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions[..self.len()]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<Action> {
        self.actions().last().copied()
    }

    pub fn player_to_act(&self) -> Player {
        Player::from_ply(self.len())
    }
}

/// Lexicographic over the actions actually played, so reports sort the
/// empty history before its extensions.
impl Ord for History {
    fn cmp(&self, other: &Self) -> Ordering {
        self.actions().cmp(other.actions())
    }
}

impl PartialOrd for History {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
