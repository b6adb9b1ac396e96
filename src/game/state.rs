//! Interaction state types.

use alloc::vec::Vec;

use crate::card::CardId;
use crate::error::MoveError;
use crate::layout::Point;
use crate::pile::PileId;

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// No cards are held.
    Idle,
    /// A selection follows the pointer.
    Holding,
}

/// Cards currently detached from their pile anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct HeldSelection {
    /// Held cards, primary (bottom-most) first.
    cards: Vec<CardId>,
    /// Where each card rested before pickup.
    original_positions: Vec<Point>,
    /// Pile the cards were picked up from.
    origin: PileId,
}

impl HeldSelection {
    pub(crate) const fn new(
        cards: Vec<CardId>,
        original_positions: Vec<Point>,
        origin: PileId,
    ) -> Self {
        Self {
            cards,
            original_positions,
            origin,
        }
    }

    /// Returns the held cards, primary first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the card that decides the drop target and legality.
    #[must_use]
    pub fn primary(&self) -> CardId {
        self.cards[0]
    }

    /// Returns the pre-pickup position of each held card.
    #[must_use]
    pub fn original_positions(&self) -> &[Point] {
        &self.original_positions
    }

    /// Returns the pile the selection came from.
    #[must_use]
    pub const fn origin(&self) -> PileId {
        self.origin
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the selection is empty. A live selection never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is part of the selection.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }
}

/// Result of a drop that broke no rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The held cards now sit on `to`.
    Moved {
        /// Pile the cards left.
        from: PileId,
        /// Pile the cards joined.
        to: PileId,
        /// Number of cards moved.
        cards: usize,
    },
    /// Nothing was attempted: the cards went back where they came from.
    Cancelled,
}

/// What the engine did with one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event changed nothing.
    Ignored,
    /// Cards were drawn from stock to waste.
    Drew(usize),
    /// The waste was turned back into the stock.
    Recycled(usize),
    /// A face-down tableau top card was turned face up.
    Flipped(CardId),
    /// Cards were picked up.
    PickedUp(usize),
    /// Held cards moved with the pointer.
    Dragged,
    /// Held cards were dropped without breaking a rule.
    Dropped(DropOutcome),
    /// The drop broke a rule; held cards snapped back.
    Rejected(MoveError),
    /// A fresh game was dealt.
    Restarted,
}
