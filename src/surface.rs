//! The boundary towards the rendering and input collaborator.

use crate::card::{CardId, TextureKey};
use crate::layout::{Point, Rect};
use crate::pile::PileId;

/// Draw target supplied by the collaborator.
///
/// [`Game::render`](crate::Game::render) calls it once per mat and once per card,
/// cards in render order (bottom first).
pub trait Renderer {
    /// Draws the empty-pile mat of `pile`.
    fn draw_mat(&mut self, pile: PileId, rect: Rect);

    /// Draws card `id` with `texture`, centered on `center`.
    ///
    /// `held` is set for cards that currently follow the pointer.
    fn draw_card(&mut self, id: CardId, texture: TextureKey, center: Point, held: bool);
}

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Key {
    /// Deal a fresh game.
    Restart,
}

/// An input event delivered by the collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at table coordinates.
    PointerDown {
        /// Horizontal coordinate.
        x: f32,
        /// Vertical coordinate.
        y: f32,
    },
    /// Pointer moved by a delta.
    PointerMove {
        /// Horizontal movement.
        dx: f32,
        /// Vertical movement.
        dy: f32,
    },
    /// Pointer released at table coordinates.
    PointerUp {
        /// Horizontal coordinate.
        x: f32,
        /// Vertical coordinate.
        y: f32,
    },
    /// A key was pressed.
    Key(Key),
}
