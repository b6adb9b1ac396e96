use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::error::MoveError;
use crate::pile::PileId;
use crate::rules::check_play;

use super::{DropOutcome, Game};

impl Game {
    /// Drops the held cards onto `target`.
    ///
    /// Dropping onto the pile the cards came from is a cancel. Otherwise the
    /// move is judged in full first; a legal move sends every held card to
    /// `target` in order, an illegal one snaps them back to where they were
    /// picked up. The game is idle afterwards either way.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotHolding`] if nothing is held, otherwise the rule
    /// the move breaks.
    pub fn drop_on(&mut self, target: PileId) -> Result<DropOutcome, MoveError> {
        let held = self.held.take().ok_or(MoveError::NotHolding)?;
        let from = held.origin();

        if target == from {
            self.revert(&held);
            log::trace!("dropped back onto {from}");
            return Ok(DropOutcome::Cancelled);
        }

        let cards: Vec<Card> = held.cards().iter().map(|&id| *self.card(id)).collect();
        if let Err(err) = check_play(target, self.piles.top_card(target), &cards) {
            self.revert(&held);
            log::trace!("rejected {} onto {target}: {err}", cards[0]);
            return Err(err);
        }

        for &id in held.cards() {
            self.piles.move_to_pile(id, target);
            self.snap(id);
        }

        log::debug!("moved {} card(s) from {from} to {target}", held.len());
        Ok(DropOutcome::Moved {
            from,
            to: target,
            cards: held.len(),
        })
    }

    /// Drops the held cards wherever the primary card is.
    ///
    /// The target is the nearest tableau or foundation mat if the primary card
    /// overlaps it, else the pile of the nearest other card it overlaps. With
    /// neither the drop is cancelled.
    ///
    /// # Errors
    ///
    /// Same as [`Game::drop_on`].
    pub fn release(&mut self) -> Result<DropOutcome, MoveError> {
        let held = self.held.as_ref().ok_or(MoveError::NotHolding)?;

        if let Some(target) = self.drop_target(held.primary()) {
            return self.drop_on(target);
        }

        self.cancel_hold();
        log::trace!("released away from any pile");
        Ok(DropOutcome::Cancelled)
    }

    /// Resolves the pile under `primary`.
    fn drop_target(&self, primary: CardId) -> Option<PileId> {
        let center = self.position(primary);
        let rect = self.layout.card_rect(center);

        // Stock and waste mats take no drops.
        let nearest_mat = PileId::all()
            .filter(|&pile| pile.is_tableau() || pile.is_foundation())
            .min_by(|&a, &b| {
                let da = self.layout.mat_center(a).distance(center);
                let db = self.layout.mat_center(b).distance(center);
                da.total_cmp(&db)
            })?;
        if self.layout.mat_rect(nearest_mat).overlaps(&rect) {
            return Some(nearest_mat);
        }

        let held = self.held.as_ref()?;
        let nearest_card = self
            .render_order
            .iter()
            .copied()
            .filter(|&id| !held.contains(id))
            .min_by(|&a, &b| {
                let da = self.position(a).distance(center);
                let db = self.position(b).distance(center);
                da.total_cmp(&db)
            })?;
        if self
            .layout
            .card_rect(self.position(nearest_card))
            .overlaps(&rect)
        {
            return self.piles.pile_index_of(nearest_card);
        }

        None
    }
}
