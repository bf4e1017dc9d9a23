//! # Card Error Types
//!
//! All errors that can occur while building the hand model.

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur in the card model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// No appearance was registered for this card.
    #[error("no appearance registered for {suit}{rank}")]
    MissingAppearance {
        /// Suit that was looked up.
        suit: Suit,
        /// Rank that was looked up.
        rank: u8,
    },

    /// The registry was populated twice for the same key.
    #[error("appearance for {suit}{rank} registered twice")]
    DuplicateAppearance {
        /// Suit of the duplicate key.
        suit: Suit,
        /// Rank of the duplicate key.
        rank: u8,
    },

    /// The registry does not cover every (suit, rank) a card can ask for.
    #[error("appearance registry incomplete: {missing} entries missing")]
    IncompleteRegistry {
        /// Number of (suit, rank) keys with no appearance.
        missing: usize,
    },

    /// A card's transform back-reference was assigned a second time.
    #[error("transform for {card} already assigned")]
    TransformAlreadyAssigned {
        /// Label of the card.
        card: String,
    },

    /// A card's transform was read before layout assigned it.
    #[error("transform for {card} read before layout")]
    TransformUnassigned {
        /// Label of the card.
        card: String,
    },

    /// The appearance manifest could not be read or parsed.
    #[error("invalid appearance manifest: {0}")]
    InvalidManifest(String),
}

/// Result type for card model operations.
pub type CardResult<T> = Result<T, CardError>;
