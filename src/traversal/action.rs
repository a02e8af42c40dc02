use std::fmt::Display;

/// Number of actions available at every decision node
pub const ACTION_COUNT: usize = 2;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[derive(Default)]
pub enum Action {
    #[default]
    Pass,
    Bet,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pass => write!(f, "p"),
            Action::Bet => write!(f, "b"),
        }
    }
}

impl Action {
    pub fn from_index(index: usize) -> Action {
        match index {
            0 => Action::Pass,
            1 => Action::Bet,
            _ => panic!("Invalid action"),
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Action::Pass => 0,
            Action::Bet => 1,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }

    pub fn is_bet(&self) -> bool {
        matches!(self, Action::Bet)
    }
}
