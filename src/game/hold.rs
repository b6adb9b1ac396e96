use alloc::vec::Vec;

use crate::card::CardId;
use crate::error::PickupError;
use crate::pile::PileKind;

use super::{Game, HeldSelection};

impl Game {
    /// Picks up `card` and starts a drag.
    ///
    /// In a tableau column the card takes every card stacked above it along. In
    /// the waste or a foundation only the top card can be taken, on its own.
    /// Held cards are raised to the top of the render order and their current
    /// positions are kept for a revert. Returns the number of cards held.
    ///
    /// # Errors
    ///
    /// Returns an error if a selection is already held, the card is in the stock,
    /// face down, covered in the waste or a foundation, or in a foundation while
    /// foundation pickup is disabled.
    ///
    /// # Panics
    ///
    /// Panics if the card is not in any pile.
    pub fn pick_up(&mut self, card: CardId) -> Result<usize, PickupError> {
        if self.held.is_some() {
            return Err(PickupError::AlreadyHolding);
        }

        let Some((pile, ordinal)) = self.piles.locate(card) else {
            panic!("card {card} is not in any pile");
        };

        let cards: Vec<CardId> = match pile.kind() {
            PileKind::Stock => return Err(PickupError::StockCard),
            PileKind::Foundation(_) if !self.options.foundation_pickup => {
                return Err(PickupError::FoundationLocked);
            }
            PileKind::Tableau(_) => self.piles.pile(pile)[ordinal..].to_vec(),
            PileKind::Waste | PileKind::Foundation(_) => {
                if self.piles.top(pile) != Some(card) {
                    return Err(PickupError::Covered);
                }
                alloc::vec![card]
            }
        };

        if !self.card(card).is_face_up() {
            return Err(PickupError::FaceDown);
        }

        let original_positions = cards.iter().map(|&id| self.position(id)).collect();
        for &id in &cards {
            self.raise(id);
        }

        let count = cards.len();
        log::debug!("picked up {count} card(s) from {pile}");
        self.held = Some(HeldSelection::new(cards, original_positions, pile));
        Ok(count)
    }

    /// Moves every held card by `(dx, dy)`.
    ///
    /// Nothing is checked or committed while dragging. Returns whether any
    /// cards were moved.
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> bool {
        let Some(held) = &self.held else {
            return false;
        };

        for &id in held.cards() {
            let position = &mut self.positions[id.index()];
            *position = position.offset(dx, dy);
        }
        true
    }

    /// Puts the held cards back where they were picked up.
    ///
    /// Returns whether a selection was held.
    pub fn cancel_hold(&mut self) -> bool {
        let Some(held) = self.held.take() else {
            return false;
        };
        self.revert(&held);
        true
    }

    /// Turns the face-down top card of a tableau column face up.
    ///
    /// Returns whether the card was turned.
    pub fn turn_over(&mut self, card: CardId) -> bool {
        let Some((pile, _)) = self.piles.locate(card) else {
            return false;
        };
        if self.held.is_some()
            || !pile.is_tableau()
            || self.piles.top(pile) != Some(card)
            || self.card(card).is_face_up()
        {
            return false;
        }

        self.piles.turn_face_up(card);
        log::debug!("turned over {} on {pile}", self.card(card));
        true
    }

    pub(super) fn revert(&mut self, held: &HeldSelection) {
        for (&id, &position) in held.cards().iter().zip(held.original_positions()) {
            self.positions[id.index()] = position;
        }
    }
}
