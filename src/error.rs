//! Error types for game operations.

use thiserror::Error;

/// Errors from the stock: drawing and recycling the waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The stock has no cards to draw.
    #[error("the stock is empty")]
    StockEmpty,
    /// The stock still has cards, so the waste cannot be recycled.
    #[error("the stock is not empty")]
    StockNotEmpty,
    /// Both stock and waste are empty.
    #[error("no cards left to recycle")]
    NothingToRecycle,
    /// Cards are being held.
    #[error("cards are being held")]
    Holding,
}

/// Errors that can occur when picking up cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickupError {
    /// A selection is already held.
    #[error("a selection is already held")]
    AlreadyHolding,
    /// The card is face down.
    #[error("the card is face down")]
    FaceDown,
    /// Foundation cards cannot be picked up with the current options.
    #[error("foundation cards cannot be picked up")]
    FoundationLocked,
    /// Only the top card of the waste or a foundation can be taken.
    #[error("the card is covered by other cards")]
    Covered,
    /// Stock cards are drawn, not picked up.
    #[error("stock cards cannot be picked up")]
    StockCard,
}

/// Errors that can occur when dropping held cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No selection is held.
    #[error("no cards are held")]
    NotHolding,
    /// Cards cannot be played onto the stock or waste.
    #[error("cards cannot be played onto the stock or waste")]
    NotPlayable,
    /// Only a King may start an empty tableau column.
    #[error("only a king can start an empty column")]
    KingRequired,
    /// Tableau cards must alternate colors.
    #[error("card must be the opposite color of the top card")]
    SameColor,
    /// The rank is not adjacent to the top card.
    #[error("card rank is not adjacent to the top card")]
    RankGap,
    /// A foundation accepts a single card at a time.
    #[error("only a single card can be played to a foundation")]
    MultipleToFoundation,
    /// Only an Ace may start an empty foundation.
    #[error("only an ace can start a foundation")]
    AceRequired,
    /// Foundations build in one suit.
    #[error("card suit does not match the foundation")]
    SuitMismatch,
}
