//! A Klondike solitaire engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the piles, tracks which cards are
//! held during a drag, validates drops and keeps each card's displayed position in
//! step with the pile it belongs to. Drawing and input delivery are left to a
//! collaborator, which feeds [`InputEvent`]s in and renders through a
//! [`Renderer`].
//!
//! # Example
//!
//! ```
//! use klondrs::{Game, GameOptions, PileId};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let drawn = game.draw_from_stock().unwrap();
//! assert_eq!(drawn, 3);
//! assert_eq!(game.piles().len(PileId::WASTE), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod layout;
pub mod options;
pub mod pile;
pub mod rules;
pub mod surface;

// Re-export main types
pub use card::{Card, CardId, Color, DECK_SIZE, Rank, Suit, TextureKey};
pub use deck::{build_deck, shuffle};
pub use error::{DrawError, MoveError, PickupError};
pub use game::{DropOutcome, EventOutcome, Game, HeldSelection, InteractionState};
pub use layout::{Layout, Point, Rect};
pub use options::GameOptions;
pub use pile::{PILE_COUNT, PileId, PileKind, PileStore};
pub use surface::{InputEvent, Key, Renderer};
