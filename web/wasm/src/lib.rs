use klondrs::{
    CardId, DropOutcome, EventOutcome, Game, GameOptions, InputEvent, InteractionState, Key,
    PileId, PileKind, Point, Rect, Renderer, Suit, TextureKey,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game.restart_with_seed(seed as u64);
    }

    pub fn restart(&mut self) -> String {
        self.dispatch(InputEvent::Key(Key::Restart))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        self.dispatch(InputEvent::PointerDown { x, y })
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) -> String {
        self.dispatch(InputEvent::PointerMove { dx, dy })
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        self.dispatch(InputEvent::PointerUp { x, y })
    }

    pub fn width(&self) -> f32 {
        self.game.options().screen_width
    }

    pub fn height(&self) -> f32 {
        self.game.options().screen_height
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let mut frame = Frame::default();
        self.game.render(&mut frame);

        let piles = PileId::all()
            .map(|pile| JsPile {
                index: pile.index() as u32,
                kind: pile_kind_to_str(pile.kind()),
                cards: self
                    .game
                    .piles()
                    .pile(pile)
                    .iter()
                    .map(|id| id.index() as u32)
                    .collect(),
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            won: self.game.is_won(),
            mats: frame.mats,
            cards: frame.cards,
            piles,
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn dispatch(&mut self, event: InputEvent) -> String {
        outcome_to_string(self.game.handle_event(event))
    }
}

/// Collects one frame of draw calls for the page to paint.
#[derive(Default)]
struct Frame {
    mats: Vec<JsMat>,
    cards: Vec<JsCard>,
}

impl Renderer for Frame {
    fn draw_mat(&mut self, pile: PileId, rect: Rect) {
        self.mats.push(JsMat {
            pile: pile.index() as u32,
            x: rect.center.x,
            y: rect.center.y,
            width: rect.width,
            height: rect.height,
        });
    }

    fn draw_card(&mut self, id: CardId, texture: TextureKey, center: Point, held: bool) {
        let (suit, rank) = match texture {
            TextureKey::Face(suit, rank) => (Some(suit_to_str(suit)), Some(rank.label())),
            TextureKey::Back => (None, None),
        };
        self.cards.push(JsCard {
            id: id.index() as u32,
            texture: texture.to_string(),
            suit,
            rank,
            x: center.x,
            y: center.y,
            held,
        });
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    won: bool,
    mats: Vec<JsMat>,
    cards: Vec<JsCard>,
    piles: Vec<JsPile>,
}

#[derive(Serialize)]
struct JsMat {
    pile: u32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Serialize)]
struct JsCard {
    id: u32,
    texture: String,
    suit: Option<&'static str>,
    rank: Option<&'static str>,
    x: f32,
    y: f32,
    held: bool,
}

#[derive(Serialize)]
struct JsPile {
    index: u32,
    kind: &'static str,
    cards: Vec<u32>,
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn pile_kind_to_str(kind: PileKind) -> &'static str {
    match kind {
        PileKind::Stock => "Stock",
        PileKind::Waste => "Waste",
        PileKind::Tableau(_) => "Tableau",
        PileKind::Foundation(_) => "Foundation",
    }
}

fn state_to_str(state: InteractionState) -> &'static str {
    match state {
        InteractionState::Idle => "Idle",
        InteractionState::Holding => "Holding",
    }
}

fn outcome_to_string(outcome: EventOutcome) -> String {
    match outcome {
        EventOutcome::Ignored => "Ignored".to_string(),
        EventOutcome::Drew(count) => format!("Drew {count}"),
        EventOutcome::Recycled(count) => format!("Recycled {count}"),
        EventOutcome::Flipped(id) => format!("Flipped {}", id.index()),
        EventOutcome::PickedUp(count) => format!("PickedUp {count}"),
        EventOutcome::Dragged => "Dragged".to_string(),
        EventOutcome::Dropped(DropOutcome::Moved { to, cards, .. }) => {
            format!("Moved {cards} to {to}")
        }
        EventOutcome::Dropped(DropOutcome::Cancelled) => "Cancelled".to_string(),
        EventOutcome::Rejected(err) => format!("Rejected: {err}"),
        EventOutcome::Restarted => "Restarted".to_string(),
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
