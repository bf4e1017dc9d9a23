//! Card identity and ordering.

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::registry::{AppearanceId, AppearanceRegistry};

/// Rank of the ace in the low asset slot.
pub const ACE_LOW: u8 = 1;

/// Rank of the ace as held in a hand.
pub const ACE_HIGH: u8 = 14;

/// Card suit.
///
/// Declaration order is the hand order: `Heart < Diamond < Club < Spade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in hand order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Diamond, Self::Club, Self::Spade];

    /// Returns the suit's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Spade => "Spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque handle to the on-screen transform a card is drawn with.
///
/// The layout step hands these out; the card only remembers which one is its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformId(pub u32);

impl TransformId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A playing card.
///
/// Suit, rank and appearance are fixed at construction. The transform
/// back-reference is assigned once by layout and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Card {
    suit: Suit,
    rank: u8,
    appearance: AppearanceId,
    transform: OnceCell<TransformId>,
}

impl Card {
    /// Creates a card, resolving its appearance from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingAppearance`] if the registry has no entry
    /// for `(suit, rank)`.
    pub fn new(suit: Suit, rank: u8, registry: &AppearanceRegistry) -> CardResult<Self> {
        let appearance = registry.lookup(suit, rank)?;
        Ok(Self {
            suit,
            rank,
            appearance,
            transform: OnceCell::new(),
        })
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank (2..=14, ace high).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the appearance handle resolved at construction.
    #[must_use]
    pub const fn appearance(&self) -> AppearanceId {
        self.appearance
    }

    /// Records the transform this card is drawn with.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::TransformAlreadyAssigned`] on a second call.
    pub fn set_transform(&self, transform: TransformId) -> CardResult<()> {
        self.transform
            .set(transform)
            .map_err(|_| CardError::TransformAlreadyAssigned {
                card: self.to_string(),
            })
    }

    /// Returns the transform assigned by layout.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::TransformUnassigned`] if layout has not run yet.
    pub fn transform(&self) -> CardResult<TransformId> {
        self.transform
            .get()
            .copied()
            .ok_or_else(|| CardError::TransformUnassigned {
                card: self.to_string(),
            })
    }
}

// Equality and ordering look at identity only; appearance follows from it
// and the transform is layout state.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    /// Suit ascending, then rank descending.
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}
