//! Move legality.
//!
//! These checks only look at card values; they never touch the pile store, so a
//! drop can be judged completely before anything is mutated.

use crate::card::{Card, Rank};
use crate::error::MoveError;
use crate::pile::{PileId, PileKind};

/// Checks whether `held` may be played onto a tableau column whose top card is `top`.
///
/// Only the primary (first, bottom-most) held card is compared. An empty column
/// accepts a King; otherwise the primary card must be the opposite color and
/// exactly one rank below the top card.
///
/// # Errors
///
/// Returns the rule the move breaks.
pub fn check_tableau(top: Option<&Card>, held: &[Card]) -> Result<(), MoveError> {
    let primary = held.first().ok_or(MoveError::NotHolding)?;

    let Some(top) = top else {
        return if primary.rank() == Rank::King {
            Ok(())
        } else {
            Err(MoveError::KingRequired)
        };
    };

    if primary.color() == top.color() {
        return Err(MoveError::SameColor);
    }
    if !primary.rank().is_one_below(top.rank()) {
        return Err(MoveError::RankGap);
    }
    Ok(())
}

/// Checks whether `held` may be played onto a foundation whose top card is `top`.
///
/// Foundations take one card at a time: an Ace on an empty foundation, otherwise
/// the next rank of the same suit.
///
/// # Errors
///
/// Returns the rule the move breaks.
pub fn check_foundation(top: Option<&Card>, held: &[Card]) -> Result<(), MoveError> {
    let card = match held {
        [] => return Err(MoveError::NotHolding),
        [card] => card,
        _ => return Err(MoveError::MultipleToFoundation),
    };

    let Some(top) = top else {
        return if card.rank() == Rank::Ace {
            Ok(())
        } else {
            Err(MoveError::AceRequired)
        };
    };

    if card.suit() != top.suit() {
        return Err(MoveError::SuitMismatch);
    }
    if !top.rank().is_one_below(card.rank()) {
        return Err(MoveError::RankGap);
    }
    Ok(())
}

/// Checks a play of `held` onto `target`, given the target's current top card.
///
/// # Errors
///
/// Returns [`MoveError::NotPlayable`] for the stock and waste, otherwise the
/// tableau or foundation rule the move breaks.
pub fn check_play(target: PileId, top: Option<&Card>, held: &[Card]) -> Result<(), MoveError> {
    match target.kind() {
        PileKind::Tableau(_) => check_tableau(top, held),
        PileKind::Foundation(_) => check_foundation(top, held),
        PileKind::Stock | PileKind::Waste => Err(MoveError::NotPlayable),
    }
}

/// Returns whether `held` may be played onto a tableau column topped by `top`.
#[must_use]
pub fn can_play_to_tableau(top: Option<&Card>, held: &[Card]) -> bool {
    check_tableau(top, held).is_ok()
}

/// Returns whether `held` may be played onto a foundation topped by `top`.
#[must_use]
pub fn can_play_to_foundation(top: Option<&Card>, held: &[Card]) -> bool {
    check_foundation(top, held).is_ok()
}
