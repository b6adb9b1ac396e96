//! Game configuration options.

/// Configuration options for a Klondike game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use klondrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_cards_to_draw(1)
///     .with_foundation_pickup(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Cards moved from stock to waste per stock click. Zero draws one.
    pub cards_to_draw: u8,
    /// Whether the top card of a foundation may be picked up again.
    pub foundation_pickup: bool,
    /// Table width in layout units.
    pub screen_width: f32,
    /// Table height in layout units.
    pub screen_height: f32,
    /// Scale applied to the 140×190 card image.
    pub card_scale: f32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            cards_to_draw: 3,
            foundation_pickup: true,
            screen_width: 1024.0,
            screen_height: 768.0,
            card_scale: 0.6,
        }
    }
}

impl GameOptions {
    /// Sets how many cards a stock click draws, at least one.
    ///
    /// # Example
    ///
    /// ```
    /// use klondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_to_draw(1);
    /// assert_eq!(options.cards_to_draw, 1);
    ///
    /// let options = GameOptions::default().with_cards_to_draw(0);
    /// assert_eq!(options.cards_to_draw, 1);
    /// ```
    #[must_use]
    pub const fn with_cards_to_draw(mut self, cards: u8) -> Self {
        self.cards_to_draw = if cards == 0 { 1 } else { cards };
        self
    }

    /// Sets whether foundation cards can be picked up again.
    ///
    /// # Example
    ///
    /// ```
    /// use klondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_foundation_pickup(false);
    /// assert_eq!(options.foundation_pickup, false);
    /// ```
    #[must_use]
    pub const fn with_foundation_pickup(mut self, allowed: bool) -> Self {
        self.foundation_pickup = allowed;
        self
    }

    /// Sets the table size.
    ///
    /// # Example
    ///
    /// ```
    /// use klondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_screen_size(1280.0, 800.0);
    /// assert_eq!(options.screen_width, 1280.0);
    /// assert_eq!(options.screen_height, 800.0);
    /// ```
    #[must_use]
    pub const fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Sets the card scale.
    ///
    /// # Example
    ///
    /// ```
    /// use klondrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_card_scale(0.5);
    /// assert_eq!(options.card_scale, 0.5);
    /// ```
    #[must_use]
    pub const fn with_card_scale(mut self, scale: f32) -> Self {
        self.card_scale = scale;
        self
    }
}
