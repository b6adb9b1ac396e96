//! Pile identifiers and the pile store.

use core::fmt;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, CardId, DECK_SIZE};

/// Number of piles on the table.
pub const PILE_COUNT: usize = 13;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// Index of one of the 13 piles.
///
/// Stock is 0, waste is 1, tableau columns are 2..=8 and foundations are 9..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PileId(u8);

/// What role a pile plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard pile fed from the stock.
    Waste,
    /// Tableau column, 0-based.
    Tableau(u8),
    /// Foundation, 0-based.
    Foundation(u8),
}

impl PileId {
    /// The stock pile.
    pub const STOCK: Self = Self(0);
    /// The waste pile.
    pub const WASTE: Self = Self(1);
    /// The seven tableau columns, left to right.
    pub const TABLEAU: [Self; TABLEAU_COUNT] = [
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];
    /// The four foundations, left to right.
    pub const FOUNDATIONS: [Self; FOUNDATION_COUNT] = [Self(9), Self(10), Self(11), Self(12)];

    const FIRST_TABLEAU: u8 = 2;
    const FIRST_FOUNDATION: u8 = 9;

    /// Returns the pile with the given index, if it exists.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PILE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the pile index (0..13).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the role of the pile.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self.0 {
            0 => PileKind::Stock,
            1 => PileKind::Waste,
            n if n < Self::FIRST_FOUNDATION => PileKind::Tableau(n - Self::FIRST_TABLEAU),
            n => PileKind::Foundation(n - Self::FIRST_FOUNDATION),
        }
    }

    /// Returns whether this is a tableau column.
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self.kind(), PileKind::Tableau(_))
    }

    /// Returns whether this is a foundation.
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self.kind(), PileKind::Foundation(_))
    }

    /// Iterates over all 13 piles in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PILE_COUNT as u8).map(Self)
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PileKind::Stock => f.write_str("stock"),
            PileKind::Waste => f.write_str("waste"),
            PileKind::Tableau(n) => write!(f, "tableau {}", n + 1),
            PileKind::Foundation(n) => write!(f, "foundation {}", n + 1),
        }
    }
}

/// Authoritative record of which card lies in which pile.
///
/// Every card is in exactly one pile at all times. The store keeps a card → pile
/// back-reference map next to the ordered piles and updates both in
/// [`PileStore::move_to_pile`].
#[derive(Debug, Clone)]
pub struct PileStore {
    /// Cards indexed by [`CardId`].
    cards: Vec<Card>,
    /// Ordered piles; the last element is the top.
    piles: [Vec<CardId>; PILE_COUNT],
    /// Owning pile of each card.
    locations: HashMap<CardId, PileId>,
}

impl PileStore {
    /// Places the whole deck face down in the stock, keeping its order (last card on top).
    ///
    /// # Panics
    ///
    /// Panics if `deck` is not exactly one of each of the 52 cards.
    #[must_use]
    pub fn stocked(deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "a deck holds {DECK_SIZE} cards");

        let stock: Vec<CardId> = deck.iter().map(Card::id).collect();

        let mut cards = deck;
        cards.sort_unstable_by_key(Card::id);
        for (index, card) in cards.iter_mut().enumerate() {
            assert_eq!(card.id().index(), index, "duplicate card {card} in deck");
            card.turn_face_down();
        }

        let locations = stock.iter().map(|&id| (id, PileId::STOCK)).collect();
        let mut piles: [Vec<CardId>; PILE_COUNT] = Default::default();
        piles[PileId::STOCK.index()] = stock;

        Self {
            cards,
            piles,
            locations,
        }
    }

    /// Stocks `deck` and deals the Klondike tableau from it.
    ///
    /// Column k (1-based) receives k cards from the top of the stock; only the
    /// last card dealt to each column is face up. The remaining 24 cards stay in
    /// the stock in their original order.
    ///
    /// # Panics
    ///
    /// Panics if `deck` is not exactly one of each of the 52 cards.
    #[must_use]
    pub fn deal_initial(deck: Vec<Card>) -> Self {
        let mut store = Self::stocked(deck);

        for (column, pile) in PileId::TABLEAU.into_iter().enumerate() {
            for dealt in 0..=column {
                let Some(id) = store.top(PileId::STOCK) else {
                    unreachable!("a full deck covers the tableau");
                };
                store.move_to_pile(id, pile);
                if dealt == column {
                    store.turn_face_up(id);
                } else {
                    store.turn_face_down(id);
                }
            }
        }

        log::debug!(
            "dealt tableau, {} cards left in stock",
            store.len(PileId::STOCK)
        );
        store
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Turns a card face up.
    pub fn turn_face_up(&mut self, id: CardId) {
        self.cards[id.index()].turn_face_up();
    }

    /// Turns a card face down.
    pub fn turn_face_down(&mut self, id: CardId) {
        self.cards[id.index()].turn_face_down();
    }

    /// Returns all cards, indexed by id.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards of a pile, bottom first.
    #[must_use]
    pub fn pile(&self, pile: PileId) -> &[CardId] {
        &self.piles[pile.index()]
    }

    /// Returns the top card of a pile.
    #[must_use]
    pub fn top(&self, pile: PileId) -> Option<CardId> {
        self.piles[pile.index()].last().copied()
    }

    /// Returns the top card of a pile as a card value.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.top(pile).map(|id| self.card(id))
    }

    /// Returns the number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: PileId) -> usize {
        self.piles[pile.index()].len()
    }

    /// Returns whether a pile is empty.
    #[must_use]
    pub fn is_empty(&self, pile: PileId) -> bool {
        self.piles[pile.index()].is_empty()
    }

    /// Returns the pile holding `card`.
    #[must_use]
    pub fn pile_index_of(&self, card: CardId) -> Option<PileId> {
        self.locations.get(&card).copied()
    }

    /// Returns the pile holding `card` and the card's ordinal within it (0 = bottom).
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<(PileId, usize)> {
        let pile = self.pile_index_of(card)?;
        let ordinal = self.pile(pile).iter().position(|&id| id == card)?;
        Some((pile, ordinal))
    }

    /// Removes `card` from whichever pile holds it and returns that pile.
    ///
    /// The card belongs to no pile until the caller inserts it again.
    ///
    /// # Panics
    ///
    /// Panics if the card is not in any pile; that means the bookkeeping is corrupt.
    pub(crate) fn remove_from_current_pile(&mut self, card: CardId) -> PileId {
        let Some((pile, ordinal)) = self.locate(card) else {
            panic!("card {card} is not in any pile");
        };
        self.piles[pile.index()].remove(ordinal);
        self.locations.remove(&card);
        pile
    }

    /// Moves `card` to the top of `pile`.
    ///
    /// # Panics
    ///
    /// Panics if the card is not in any pile.
    pub fn move_to_pile(&mut self, card: CardId, pile: PileId) {
        self.remove_from_current_pile(card);
        self.piles[pile.index()].push(card);
        self.locations.insert(card, pile);
    }

    /// Returns the total number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }
}
