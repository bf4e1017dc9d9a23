//! The placeholder pool and its sibling order.

use cardreel_cards::{Hand, TransformId};

use crate::error::CarouselResult;
use crate::layout::StripLayout;

use super::Placeholder;

/// Fixed set of placeholders in sibling (draw and wrap) order.
///
/// Built once from the hand. After that, placeholders are only moved and
/// rotated between the two ends; the count never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderPool {
    slots: Vec<Placeholder>,
}

impl PlaceholderPool {
    /// Lays out one placeholder per card, left to right in hand order, and
    /// points each card's transform at its placeholder.
    ///
    /// # Errors
    ///
    /// Fails if any card already has a transform.
    pub fn layout(hand: &Hand, strip: &StripLayout, content_width: f32) -> CarouselResult<Self> {
        let positions = strip.arrange(content_width, hand.cards().len());
        let mut slots = Vec::with_capacity(positions.len());

        for (index, (card, x)) in hand.iter().zip(positions).enumerate() {
            let id = TransformId(u32::try_from(index).unwrap_or(u32::MAX));
            card.set_transform(id)?;
            slots.push(Placeholder::for_card(id, card, x));
        }

        Ok(Self { slots })
    }

    /// Number of placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Placeholder at sibling `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placeholder> {
        self.slots.get(index)
    }

    /// Placeholder by transform handle.
    #[must_use]
    pub fn by_id(&self, id: TransformId) -> Option<&Placeholder> {
        self.slots.iter().find(|p| p.id() == id)
    }

    /// Sibling index of a transform handle.
    #[must_use]
    pub fn index_of(&self, id: TransformId) -> Option<usize> {
        self.slots.iter().position(|p| p.id() == id)
    }

    /// First placeholder in sibling order.
    #[must_use]
    pub fn first(&self) -> Option<&Placeholder> {
        self.slots.first()
    }

    /// Last placeholder in sibling order.
    #[must_use]
    pub fn last(&self) -> Option<&Placeholder> {
        self.slots.last()
    }

    /// Iterates placeholders in sibling order.
    pub fn iter(&self) -> std::slice::Iter<'_, Placeholder> {
        self.slots.iter()
    }

    /// Labels in sibling order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.slots.iter().map(Placeholder::label).collect()
    }

    /// Moves the last placeholder to `local_x` and makes it the first sibling.
    pub(crate) fn wrap_last_to_front(&mut self, local_x: f32) -> Option<TransformId> {
        let last = self.slots.last_mut()?;
        last.set_local_x(local_x);
        let id = last.id();
        self.slots.rotate_right(1);
        Some(id)
    }

    /// Moves the first placeholder to `local_x` and makes it the last sibling.
    pub(crate) fn wrap_first_to_back(&mut self, local_x: f32) -> Option<TransformId> {
        let first = self.slots.first_mut()?;
        first.set_local_x(local_x);
        let id = first.id();
        self.slots.rotate_left(1);
        Some(id)
    }
}

impl<'a> IntoIterator for &'a PlaceholderPool {
    type Item = &'a Placeholder;
    type IntoIter = std::slice::Iter<'a, Placeholder>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
