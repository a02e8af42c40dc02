use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{Card, DECK_SIZE};
use super::deal::Deal;

/// The full Kuhn deck. One fair shuffle per training iteration is the
/// only chance event in the game.
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    pub fn new() -> Deck {
        Deck {
            cards: [Card::Queen, Card::King, Card::Ace],
        }
    }

    /// Shuffle and give one private card to each player.
    pub fn deal_with(&mut self, rng: &mut impl Rng) -> Deal {
        self.cards.shuffle(rng);
        Deal::new(self.cards[0], self.cards[1])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_deal_gives_distinct_cards() {
        let mut deck = Deck::new();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let deal = deck.deal_with(&mut rng);
            assert_ne!(
                deal.card_of(crate::models::Player::First),
                deal.card_of(crate::models::Player::Second)
            );
        }
    }

    #[test]
    fn test_deal_reaches_every_permutation() {
        let mut deck = Deck::new();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            seen.insert(deck.deal_with(&mut rng));
        }
        // 3 * 2 ordered pairs of distinct cards
        assert_eq!(seen.len(), 6);
    }
}
