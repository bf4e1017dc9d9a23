//! # Cardreel Card Model
//!
//! The leaf of the carousel: card identity, the hand ordering, and the
//! appearance registry the host populates before any card exists.
//!
//! ## Startup Order
//!
//! ```text
//! AppearanceManifest ──> AppearanceRegistry ──> Hand::starting
//!   (TOML asset keys)     (suit, rank) → id      sorted, frozen
//! ```
//!
//! A registry miss while building a card is a configuration error. Nothing
//! in this crate retries it.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod card;
pub mod error;
pub mod hand;
pub mod registry;

pub use card::{Card, Suit, TransformId, ACE_HIGH, ACE_LOW};
pub use error::{CardError, CardResult};
pub use hand::{Hand, HAND_SIZE, STARTING_HAND};
pub use registry::{AppearanceId, AppearanceManifest, AppearanceRegistry, SLOTS_PER_SUIT};
