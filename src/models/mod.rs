pub mod card;
pub mod deal;
pub mod deck;
pub mod player;

pub use card::Card;
pub use deal::Deal;
pub use deck::Deck;
pub use player::Player;
