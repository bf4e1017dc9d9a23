//! The player's hand.

use std::ops::Index;

use crate::card::{Card, Suit, ACE_HIGH};
use crate::error::CardResult;
use crate::registry::AppearanceRegistry;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 8;

/// The hand dealt at session start, unsorted.
pub const STARTING_HAND: [(Suit, u8); HAND_SIZE] = [
    (Suit::Heart, 13),
    (Suit::Heart, 2),
    (Suit::Spade, 11),
    (Suit::Spade, ACE_HIGH),
    (Suit::Diamond, 9),
    (Suit::Diamond, 12),
    (Suit::Club, 12),
    (Suit::Club, 4),
];

/// A fixed, sorted hand of [`HAND_SIZE`] cards.
///
/// Sorted once on construction and never reordered. The carousel reorders
/// its own placeholders, not the hand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand, sorting it suit-major, rank descending.
    #[must_use]
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        let mut cards = Vec::from(cards);
        cards.sort();
        Self { cards }
    }

    /// Builds a hand from `(suit, rank)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first card whose appearance is not registered.
    pub fn from_pairs(pairs: [(Suit, u8); HAND_SIZE], registry: &AppearanceRegistry) -> CardResult<Self> {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        for (suit, rank) in pairs {
            cards.push(Card::new(suit, rank, registry)?);
        }
        cards.sort();
        Ok(Self { cards })
    }

    /// Builds the session's starting hand.
    ///
    /// # Errors
    ///
    /// Fails if the registry is missing any starting card.
    pub fn starting(registry: &AppearanceRegistry) -> CardResult<Self> {
        let hand = Self::from_pairs(STARTING_HAND, registry)?;
        tracing::info!("Starting hand sorted: {}", hand.labels().join(" "));
        Ok(hand)
    }

    /// Returns the cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates cards in hand order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Debug labels in hand order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
