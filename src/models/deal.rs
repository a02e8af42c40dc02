use super::card::Card;
use super::player::Player;

/// The private cards for one hand, indexed by player. The third card of
/// the deck stays unseen for the whole hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal {
    cards: [Card; 2],
}

impl Deal {
    pub fn new(first: Card, second: Card) -> Deal {
        if first == second {
            panic!("Players cannot hold the same card");
        }
        Deal {
            cards: [first, second],
        }
    }

    pub fn card_of(&self, player: Player) -> Card {
        self.cards[player.to_index()]
    }
}
