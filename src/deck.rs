//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the 52 cards, face down, ordered suit by suit and Ace to King within a suit.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Shuffles `deck` in place.
///
/// Every position is swapped with a position drawn uniformly from the whole
/// slice, not only from the unshuffled suffix.
pub fn shuffle<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    let len = deck.len();
    if len == 0 {
        return;
    }

    for i in 0..len {
        let j = rng.random_range(0..len);
        deck.swap(i, j);
    }
}
