//! Deck state: which card is on top and what the user decided so far.

mod card_deck;
mod swipe_deck;

pub use card_deck::{CardDeck, DeckMode, SwipeOutcome, SwipeRecord};
pub use swipe_deck::SwipeDeck;
