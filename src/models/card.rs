use std::fmt::{Display, Formatter};

pub const DECK_SIZE: usize = 3;

/// The three-rank deck used by Kuhn poker. Showdowns compare ranks only,
/// so the derived order is the entire hand evaluation.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[derive(Default)]
pub enum Card {
    #[default]
    Queen,
    King,
    Ace,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Card::Queen => "Q",
            Card::King => "K",
            Card::Ace => "A",
        })
    }
}

impl Card {
    pub fn from_int(card: u8) -> Card {
        match card {
            0 => Card::Queen,
            1 => Card::King,
            2 => Card::Ace,
            _ => panic!("Invalid card"),
        }
    }

    pub fn to_int(&self) -> u8 {
        match self {
            Card::Queen => 0,
            Card::King => 1,
            Card::Ace => 2,
        }
    }

    pub fn outranks(&self, other: Card) -> bool {
        *self > other
    }
}
