use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Player {
    #[default]
    First,
    Second,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "P0"),
            Player::Second => write!(f, "P1"),
        }
    }
}

impl Player {
    /// Whose turn it is after `plays` actions: the players strictly alternate.
    pub fn from_ply(plays: usize) -> Player {
        if plays % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    pub fn get_opposite(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}
