//! Card types and texture selection.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order, red suits first.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }

    /// Returns the suit name used in asset file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Spades => 2,
            Self::Clubs => 3,
        }
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card rank, ordered Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of the rank in the A..K sequence (Ace = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank label used in asset file names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns whether `self` comes immediately before `other`.
    #[must_use]
    pub const fn is_one_below(self, other: Self) -> bool {
        self.index() + 1 == other.index()
    }
}

/// Stable identity of one of the 52 cards.
///
/// Ids are assigned from (suit, rank), so two distinct cards never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u8);

impl CardId {
    /// Returns the id of the card with the given suit and rank.
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * 13 + rank.index())
    }

    /// Returns the id as an index into per-card tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playing card.
///
/// Only `face_up` changes after the deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::of(self.suit, self.rank)
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the color derived from the suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face up.
    pub const fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn turn_face_down(&mut self) {
        self.face_up = false;
    }

    /// Returns the texture the renderer should show for this card.
    #[must_use]
    pub const fn texture(&self) -> TextureKey {
        if self.face_up {
            TextureKey::Face(self.suit, self.rank)
        } else {
            TextureKey::Back
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        };
        write!(f, "{}{suit}", self.rank.label())
    }
}

/// Asset selector for a card sprite.
///
/// Formats as the asset file name, e.g. `cardHearts10.png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    /// The face of the given card.
    Face(Suit, Rank),
    /// The shared card back.
    Back,
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face(suit, rank) => write!(f, "card{}{}.png", suit.name(), rank.label()),
            Self::Back => f.write_str("cardBack_blue5.png"),
        }
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;
