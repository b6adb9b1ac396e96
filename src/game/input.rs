use crate::card::CardId;
use crate::error::MoveError;
use crate::layout::Point;
use crate::pile::PileId;
use crate::surface::{InputEvent, Key};

use super::{EventOutcome, Game};

impl Game {
    /// Handles one input event to completion.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { dx, dy } => self.pointer_move(dx, dy),
            InputEvent::PointerUp { x, y } => self.pointer_up(x, y),
            InputEvent::Key(key) => self.key(key),
        }
    }

    /// Handles a pointer press at table coordinates.
    ///
    /// A stock card draws, a face-down tableau top card is turned over, any
    /// other face-up card is picked up. Pressing the mat of an empty stock
    /// recycles the waste.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> EventOutcome {
        if self.held.is_some() {
            log::trace!("pointer down while holding, ignored");
            return EventOutcome::Ignored;
        }

        let point = Point::new(x, y);
        let Some(card) = self.card_at(point) else {
            return self.press_mat(point);
        };

        if self.piles.pile_index_of(card) == Some(PileId::STOCK) {
            return self
                .draw_from_stock()
                .map_or(EventOutcome::Ignored, EventOutcome::Drew);
        }

        if !self.card(card).is_face_up() {
            return if self.turn_over(card) {
                EventOutcome::Flipped(card)
            } else {
                EventOutcome::Ignored
            };
        }

        match self.pick_up(card) {
            Ok(count) => EventOutcome::PickedUp(count),
            Err(err) => {
                log::trace!("cannot pick up {}: {err}", self.card(card));
                EventOutcome::Ignored
            }
        }
    }

    /// Handles pointer movement by a delta.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) -> EventOutcome {
        if self.drag_by(dx, dy) {
            EventOutcome::Dragged
        } else {
            EventOutcome::Ignored
        }
    }

    /// Handles a pointer release.
    ///
    /// The drop target follows the held cards, not the release coordinates.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> EventOutcome {
        match self.release() {
            Ok(outcome) => EventOutcome::Dropped(outcome),
            Err(MoveError::NotHolding) => {
                log::trace!("pointer up at ({x}, {y}) with nothing held");
                EventOutcome::Ignored
            }
            Err(err) => EventOutcome::Rejected(err),
        }
    }

    /// Handles a key press.
    pub fn key(&mut self, key: Key) -> EventOutcome {
        match key {
            Key::Restart => {
                self.restart();
                EventOutcome::Restarted
            }
        }
    }

    /// Returns the topmost card under `point`.
    #[must_use]
    pub fn card_at(&self, point: Point) -> Option<CardId> {
        self.render_order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.layout.card_rect(self.position(id)).contains(point))
    }

    /// Returns the pile whose mat lies under `point`.
    #[must_use]
    pub fn mat_at(&self, point: Point) -> Option<PileId> {
        PileId::all().find(|&pile| self.layout.mat_rect(pile).contains(point))
    }

    fn press_mat(&mut self, point: Point) -> EventOutcome {
        if self.mat_at(point) != Some(PileId::STOCK) {
            return EventOutcome::Ignored;
        }

        match self.recycle_waste() {
            Ok(count) => EventOutcome::Recycled(count),
            Err(err) => {
                log::trace!("stock mat pressed: {err}");
                EventOutcome::Ignored
            }
        }
    }
}
