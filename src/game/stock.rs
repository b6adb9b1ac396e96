use alloc::vec::Vec;

use crate::error::DrawError;
use crate::pile::PileId;

use super::Game;

impl Game {
    /// Draws up to [`GameOptions::cards_to_draw`](crate::GameOptions::cards_to_draw)
    /// cards from stock to waste, turning each face up.
    ///
    /// The first card drawn ends up buried, the last one on top of the waste.
    /// Returns the number of cards moved.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are held or the stock is empty.
    pub fn draw_from_stock(&mut self) -> Result<usize, DrawError> {
        if self.held.is_some() {
            return Err(DrawError::Holding);
        }
        if self.piles.is_empty(PileId::STOCK) {
            return Err(DrawError::StockEmpty);
        }

        let mut drawn = 0;
        for _ in 0..self.options.cards_to_draw.max(1) {
            let Some(id) = self.piles.top(PileId::STOCK) else {
                break;
            };
            self.piles.turn_face_up(id);
            self.piles.move_to_pile(id, PileId::WASTE);
            self.snap(id);
            self.raise(id);
            drawn += 1;
        }

        log::debug!(
            "drew {drawn} card(s), stock {} waste {}",
            self.piles.len(PileId::STOCK),
            self.piles.len(PileId::WASTE)
        );
        Ok(drawn)
    }

    /// Turns the waste back into the stock once the stock is empty.
    ///
    /// The waste is walked from its top down, each card turned face down and
    /// placed on the stock, so the card drawn first is on top again and the
    /// original stock order is restored. Returns the number of cards moved.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are held, the stock still has cards, or the
    /// waste is empty.
    pub fn recycle_waste(&mut self) -> Result<usize, DrawError> {
        if self.held.is_some() {
            return Err(DrawError::Holding);
        }
        if !self.piles.is_empty(PileId::STOCK) {
            return Err(DrawError::StockNotEmpty);
        }
        if self.piles.is_empty(PileId::WASTE) {
            return Err(DrawError::NothingToRecycle);
        }

        let waste: Vec<_> = self.piles.pile(PileId::WASTE).to_vec();
        for &id in waste.iter().rev() {
            self.piles.turn_face_down(id);
            self.piles.move_to_pile(id, PileId::STOCK);
            self.snap(id);
            self.raise(id);
        }

        log::debug!("recycled {} card(s) into the stock", waste.len());
        Ok(waste.len())
    }
}
