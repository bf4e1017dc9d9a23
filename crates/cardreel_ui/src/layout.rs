//! Panel geometry and strip placement.

use crate::config::CarouselConfig;
use crate::error::{CarouselError, CarouselResult};

/// A rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of the given size centered on `(cx, cy)`.
    #[must_use]
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width * 0.5, cy - height * 0.5, width, height)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Sizes of the panels the host lays the carousel out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Width of the scrollable content panel.
    pub content_width: f32,
    /// Full width of the deck layout panel when folded out.
    pub layout_width: f32,
}

impl PanelGeometry {
    /// Creates panel geometry.
    #[must_use]
    pub const fn new(content_width: f32, layout_width: f32) -> Self {
        Self { content_width, layout_width }
    }

    /// Checks both widths are finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidGeometry`] otherwise.
    pub fn validate(&self) -> CarouselResult<()> {
        for (name, value) in [("content_width", self.content_width), ("layout_width", self.layout_width)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CarouselError::InvalidGeometry(format!("{name} = {value}")));
            }
        }
        Ok(())
    }
}

/// Left-to-right placement of equally sized cards.
///
/// The strip is centered on the content panel's left half-width with a
/// margin of `leading_margin` cards (plus half a gap) on the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    /// Width of one card.
    pub card_width: f32,
    /// Gap between cards.
    pub gap: f32,
    /// Leading margin in card widths.
    pub leading_margin: f32,
}

impl StripLayout {
    /// Takes the strip settings from a carousel config.
    #[must_use]
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            card_width: config.card_width,
            gap: config.card_spacing,
            leading_margin: config.leading_margin_cards,
        }
    }

    /// Distance between adjacent cards.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Local x of the first card.
    #[must_use]
    pub fn start_x(&self, content_width: f32) -> f32 {
        let origin_x = -content_width * 0.5;
        origin_x - (self.gap * 0.5 + self.card_width * self.leading_margin)
    }

    /// Local x of every card, in order.
    #[must_use]
    pub fn arrange(&self, content_width: f32, count: usize) -> Vec<f32> {
        let start = self.start_x(content_width);
        let step = self.step();
        (0..count).map(|i| start + i as f32 * step).collect()
    }
}
