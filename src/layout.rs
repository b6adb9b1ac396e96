//! Table geometry.
//!
//! Coordinates are y-up with the origin at the bottom-left corner. Everything
//! here is a pure function of [`GameOptions`] and pile/ordinal; nothing is stored
//! per card.

use crate::options::GameOptions;
use crate::pile::{PileId, PileKind};

/// Unscaled card image size.
const CARD_IMAGE_WIDTH: f32 = 140.0;
const CARD_IMAGE_HEIGHT: f32 = 190.0;
const MAT_OVERSIZE: f32 = 1.25;
const MARGIN_PERCENT: f32 = 0.1;
const FAN_PERCENT: f32 = 0.3;

#[cfg(feature = "std")]
fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}

/// A point on the table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing upwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        sqrt(dx * dx + dy * dy)
    }
}

/// Axis-aligned rectangle described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center of the rectangle.
    pub center: Point,
    /// Full width.
    pub width: f32,
    /// Full height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle around `center`.
    #[must_use]
    pub const fn new(center: Point, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    fn bottom(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    fn top(&self) -> f32 {
        self.center.y + self.height / 2.0
    }

    /// Returns whether `point` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Returns whether the two rectangles share any area.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}

/// Anchor positions and sizes for every pile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    card_width: f32,
    card_height: f32,
    mat_width: f32,
    mat_height: f32,
    start_x: f32,
    x_spacing: f32,
    bottom_y: f32,
    middle_y: f32,
    top_y: f32,
    fan: f32,
}

impl Layout {
    /// Computes the layout for the given options.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let scale = options.card_scale;
        let card_width = CARD_IMAGE_WIDTH * scale;
        let card_height = CARD_IMAGE_HEIGHT * scale;
        let mat_width = card_width * MAT_OVERSIZE;
        let mat_height = card_height * MAT_OVERSIZE;
        let h_margin = mat_width * MARGIN_PERCENT;
        let v_margin = mat_height * MARGIN_PERCENT;
        let top_y = options.screen_height - mat_height / 2.0 - v_margin;

        Self {
            card_width,
            card_height,
            mat_width,
            mat_height,
            start_x: mat_width / 2.0 + h_margin,
            x_spacing: mat_width + h_margin,
            bottom_y: mat_height / 2.0 + v_margin,
            middle_y: top_y - mat_height - v_margin,
            top_y,
            fan: card_height * scale * FAN_PERCENT,
        }
    }

    /// Vertical distance between consecutive cards in a tableau column.
    #[must_use]
    pub const fn fan(&self) -> f32 {
        self.fan
    }

    /// Returns the center of a pile's mat.
    #[must_use]
    pub fn mat_center(&self, pile: PileId) -> Point {
        let column = |n: u8| self.start_x + f32::from(n) * self.x_spacing;
        match pile.kind() {
            PileKind::Stock => Point::new(self.start_x, self.bottom_y),
            PileKind::Waste => Point::new(column(1), self.bottom_y),
            PileKind::Tableau(n) => Point::new(column(n), self.middle_y),
            PileKind::Foundation(n) => Point::new(column(n), self.top_y),
        }
    }

    /// Returns the region covered by a pile's mat.
    #[must_use]
    pub fn mat_rect(&self, pile: PileId) -> Rect {
        Rect::new(self.mat_center(pile), self.mat_width, self.mat_height)
    }

    /// Returns where the card at `ordinal` (0 = bottom) of `pile` rests.
    ///
    /// Tableau columns fan downwards; every other pile stacks on its anchor.
    #[must_use]
    pub fn card_position(&self, pile: PileId, ordinal: usize) -> Point {
        let anchor = self.mat_center(pile);
        if pile.is_tableau() {
            #[expect(
                clippy::cast_precision_loss,
                reason = "pile ordinals are below 52"
            )]
            let ordinal = ordinal as f32;
            anchor.offset(0.0, -self.fan * ordinal)
        } else {
            anchor
        }
    }

    /// Returns the region covered by a card centered on `center`.
    #[must_use]
    pub const fn card_rect(&self, center: Point) -> Rect {
        Rect::new(center, self.card_width, self.card_height)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&GameOptions::default())
    }
}
