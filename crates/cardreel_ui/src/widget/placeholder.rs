//! A single visual slot.

use cardreel_cards::{AppearanceId, Card, TransformId};

/// One card's visual slot in the strip.
///
/// Positions are local to the content panel; add the content offset for
/// the position in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    id: TransformId,
    label: String,
    appearance: AppearanceId,
    local_x: f32,
}

impl Placeholder {
    /// Creates a placeholder showing `card` at `local_x`.
    #[must_use]
    pub fn for_card(id: TransformId, card: &Card, local_x: f32) -> Self {
        Self {
            id,
            label: card.to_string(),
            appearance: card.appearance(),
            local_x,
        }
    }

    /// Transform handle; matches the card's back-reference.
    #[must_use]
    pub const fn id(&self) -> TransformId {
        self.id
    }

    /// Debug label of the card shown.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appearance of the card shown.
    #[must_use]
    pub const fn appearance(&self) -> AppearanceId {
        self.appearance
    }

    /// Horizontal position in the content panel.
    #[must_use]
    pub const fn local_x(&self) -> f32 {
        self.local_x
    }

    /// Horizontal position in viewport space for a given content offset.
    #[inline]
    #[must_use]
    pub fn world_x(&self, content_offset: f32) -> f32 {
        content_offset + self.local_x
    }

    pub(crate) fn set_local_x(&mut self, x: f32) {
        self.local_x = x;
    }
}
