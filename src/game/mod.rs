//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId, DECK_SIZE};
use crate::deck::{build_deck, shuffle};
use crate::layout::{Layout, Point};
use crate::options::GameOptions;
use crate::pile::{PileId, PileStore};
use crate::surface::Renderer;

mod drop;
mod hold;
mod input;
pub mod state;
mod stock;

pub use state::{DropOutcome, EventOutcome, HeldSelection, InteractionState};

/// A Klondike game: piles, card positions, render order and the held selection.
///
/// All state lives here and every handler takes `&mut self`, so events are
/// processed one at a time, each to completion.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Table geometry derived from the options.
    layout: Layout,
    /// Pile membership and orientation of every card.
    piles: PileStore,
    /// Displayed center of each card, indexed by [`CardId`].
    positions: Vec<Point>,
    /// Draw order, bottom first.
    render_order: Vec<CardId>,
    /// Cards following the pointer.
    held: Option<HeldSelection>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals it.
    ///
    /// # Example
    ///
    /// ```
    /// use klondrs::{Game, GameOptions, PileId};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.piles().len(PileId::STOCK), 24);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let piles = Self::shuffled_table(&mut rng);
        Self::assemble(options, piles, rng)
    }

    /// Creates a game dealt from `deck` as given, without shuffling.
    ///
    /// The last card of `deck` is the top of the stock. `seed` feeds later restarts.
    ///
    /// # Panics
    ///
    /// Panics if `deck` is not exactly one of each of the 52 cards.
    #[must_use]
    pub fn from_deck(options: GameOptions, deck: Vec<Card>, seed: u64) -> Self {
        Self::from_piles(options, PileStore::deal_initial(deck), seed)
    }

    /// Creates a game around an arranged pile store.
    ///
    /// Cards are placed on their layout anchors and rendered in pile order.
    #[must_use]
    pub fn from_piles(options: GameOptions, piles: PileStore, seed: u64) -> Self {
        Self::assemble(options, piles, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(options: GameOptions, piles: PileStore, rng: ChaCha8Rng) -> Self {
        let layout = Layout::new(&options);
        let mut game = Self {
            options,
            layout,
            piles,
            positions: alloc::vec![Point::default(); DECK_SIZE],
            render_order: Vec::with_capacity(DECK_SIZE),
            held: None,
            rng,
        };
        game.rebuild_view();
        game
    }

    fn shuffled_table(rng: &mut ChaCha8Rng) -> PileStore {
        let mut deck = build_deck();
        shuffle(&mut deck, rng);
        PileStore::deal_initial(deck)
    }

    /// Places every card on its anchor and resets render order to pile order.
    fn rebuild_view(&mut self) {
        self.render_order.clear();
        for pile in PileId::all() {
            let cards = self.piles.pile(pile).to_vec();
            for id in cards {
                self.snap(id);
                self.render_order.push(id);
            }
        }
    }

    /// Deals a fresh game from the game's random stream.
    ///
    /// Any held selection is dropped.
    pub fn restart(&mut self) {
        self.held = None;
        self.piles = Self::shuffled_table(&mut self.rng);
        self.rebuild_view();
        log::debug!("restarted");
    }

    /// Reseeds the random stream and deals a fresh game.
    pub fn restart_with_seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.restart();
    }

    /// Returns the options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the table geometry.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the pile store.
    #[must_use]
    pub const fn piles(&self) -> &PileStore {
        &self.piles
    }

    /// Returns a card.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.piles.card(id)
    }

    /// Returns where a card is displayed.
    #[must_use]
    pub fn position(&self, id: CardId) -> Point {
        self.positions[id.index()]
    }

    /// Returns the draw order, bottom first.
    #[must_use]
    pub fn render_order(&self) -> &[CardId] {
        &self.render_order
    }

    /// Returns the held selection, if any.
    #[must_use]
    pub const fn held(&self) -> Option<&HeldSelection> {
        self.held.as_ref()
    }

    /// Returns the interaction state.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        if self.held.is_some() {
            InteractionState::Holding
        } else {
            InteractionState::Idle
        }
    }

    /// Returns whether every foundation holds a full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        PileId::FOUNDATIONS
            .iter()
            .all(|&pile| self.piles.len(pile) == 13)
    }

    /// Draws the mats and then every card in render order.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for pile in PileId::all() {
            renderer.draw_mat(pile, self.layout.mat_rect(pile));
        }

        for &id in &self.render_order {
            let held = self.held.as_ref().is_some_and(|held| held.contains(id));
            renderer.draw_card(id, self.card(id).texture(), self.position(id), held);
        }
    }

    /// Moves a card's displayed position onto its pile anchor.
    fn snap(&mut self, id: CardId) {
        let Some((pile, ordinal)) = self.piles.locate(id) else {
            panic!("card {id} is not in any pile");
        };
        self.positions[id.index()] = self.layout.card_position(pile, ordinal);
    }

    /// Moves a card to the end of the render order.
    fn raise(&mut self, id: CardId) {
        if let Some(index) = self.render_order.iter().position(|&other| other == id) {
            self.render_order.remove(index);
        }
        self.render_order.push(id);
    }
}
