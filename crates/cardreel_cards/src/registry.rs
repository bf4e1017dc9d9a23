//! # Appearance Registry
//!
//! Maps `(suit, rank)` to the asset a card is drawn with.
//!
//! Assets are supplied per suit as an ordered list of slots. Slot `i` is
//! rank `i + 1`, so slot 0 holds the ace. Hands hold the ace as rank 14,
//! so slot 0 is registered under both rank 1 and rank 14.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::{Suit, ACE_HIGH, ACE_LOW};
use crate::error::{CardError, CardResult};

/// Number of asset slots per suit (ace through king).
pub const SLOTS_PER_SUIT: usize = 13;

/// Handle to a registered asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppearanceId(pub u32);

impl AppearanceId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Per-suit asset keys, slot 0 first.
///
/// ```toml
/// heart = ["CardSprites/Heart/0", "CardSprites/Heart/1", ...]
/// diamond = [...]
/// club = [...]
/// spade = [...]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceManifest {
    /// Heart asset keys.
    #[serde(default)]
    pub heart: Vec<String>,
    /// Diamond asset keys.
    #[serde(default)]
    pub diamond: Vec<String>,
    /// Club asset keys.
    #[serde(default)]
    pub club: Vec<String>,
    /// Spade asset keys.
    #[serde(default)]
    pub spade: Vec<String>,
}

impl AppearanceManifest {
    /// Builds a manifest with keys `{root}/{Suit}/{slot}` for every slot.
    #[must_use]
    pub fn conventional(root: &str) -> Self {
        let keys = |suit: Suit| -> Vec<String> {
            (0..SLOTS_PER_SUIT)
                .map(|slot| format!("{root}/{suit}/{slot}"))
                .collect()
        };
        Self {
            heart: keys(Suit::Heart),
            diamond: keys(Suit::Diamond),
            club: keys(Suit::Club),
            spade: keys(Suit::Spade),
        }
    }

    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidManifest`] if the text is not a valid manifest.
    pub fn from_toml_str(text: &str) -> CardResult<Self> {
        toml::from_str(text).map_err(|e| CardError::InvalidManifest(e.to_string()))
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidManifest`] if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CardError::InvalidManifest(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the asset keys for a suit.
    #[must_use]
    pub fn slots(&self, suit: Suit) -> &[String] {
        match suit {
            Suit::Heart => &self.heart,
            Suit::Diamond => &self.diamond,
            Suit::Club => &self.club,
            Suit::Spade => &self.spade,
        }
    }
}

/// Lookup table from `(suit, rank)` to appearance.
#[derive(Debug, Clone, Default)]
pub struct AppearanceRegistry {
    entries: HashMap<(Suit, u8), AppearanceId>,
    assets: Vec<String>,
}

impl AppearanceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_capacity(Suit::ALL.len() * (SLOTS_PER_SUIT + 1)),
            assets: Vec::with_capacity(Suit::ALL.len() * SLOTS_PER_SUIT),
        }
    }

    /// Builds a registry from every suit in a manifest.
    ///
    /// # Errors
    ///
    /// Propagates [`AppearanceRegistry::load_suit`] failures.
    pub fn from_manifest(manifest: &AppearanceManifest) -> CardResult<Self> {
        let mut registry = Self::new();
        for suit in Suit::ALL {
            registry.load_suit(suit, manifest.slots(suit))?;
        }
        tracing::debug!(
            "Appearance registry loaded: {} assets, {} keys",
            registry.assets.len(),
            registry.entries.len()
        );
        Ok(registry)
    }

    /// Registers a suit's asset slots.
    ///
    /// Slot `i` becomes rank `i + 1`; slot 0 is also registered as rank 14.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::DuplicateAppearance`] if any key is already taken.
    /// Nothing is registered in that case.
    pub fn load_suit<S: AsRef<str>>(&mut self, suit: Suit, slots: &[S]) -> CardResult<()> {
        let mut ranks: Vec<(u8, usize)> = Vec::with_capacity(slots.len() + 1);
        for slot in 0..slots.len() {
            // Slots past 255 cannot name a rank.
            let Ok(rank) = u8::try_from(slot + 1) else {
                break;
            };
            if slot == 0 {
                ranks.push((ACE_HIGH, slot));
            }
            ranks.push((rank, slot));
        }

        // A fourteenth slot would collide with the ace alias.
        let mut seen = HashSet::with_capacity(ranks.len());
        for &(rank, _) in &ranks {
            if !seen.insert(rank) || self.entries.contains_key(&(suit, rank)) {
                return Err(CardError::DuplicateAppearance { suit, rank });
            }
        }

        let first = self.assets.len();
        self.assets.extend(slots.iter().map(|s| s.as_ref().to_owned()));
        for (rank, slot) in ranks {
            let index = u32::try_from(first + slot).unwrap_or(u32::MAX);
            self.entries.insert((suit, rank), AppearanceId(index));
        }
        Ok(())
    }

    /// Looks up the appearance for a card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingAppearance`] on a miss.
    pub fn lookup(&self, suit: Suit, rank: u8) -> CardResult<AppearanceId> {
        self.entries
            .get(&(suit, rank))
            .copied()
            .ok_or(CardError::MissingAppearance { suit, rank })
    }

    /// Returns the asset key behind a handle.
    #[must_use]
    pub fn asset_key(&self, id: AppearanceId) -> Option<&str> {
        self.assets.get(id.0 as usize).map(String::as_str)
    }

    /// Number of registered `(suit, rank)` keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts the `(suit, rank)` keys, ranks 1..=14, with no appearance.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        Suit::ALL
            .iter()
            .flat_map(|&suit| (ACE_LOW..=ACE_HIGH).map(move |rank| (suit, rank)))
            .filter(|key| !self.entries.contains_key(key))
            .count()
    }

    /// Returns true if every suit covers ranks 1..=14.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Fails unless the registry is complete.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::IncompleteRegistry`] with the number of missing keys.
    pub fn ensure_complete(&self) -> CardResult<()> {
        match self.missing_count() {
            0 => Ok(()),
            missing => Err(CardError::IncompleteRegistry { missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ace_alias_shares_low_slot() {
        let registry = AppearanceRegistry::from_manifest(&AppearanceManifest::conventional("sprites")).unwrap();

        for suit in Suit::ALL {
            let high_first = registry.lookup(suit, ACE_HIGH).unwrap();
            let low_after = registry.lookup(suit, ACE_LOW).unwrap();
            assert_eq!(high_first, low_after);

            let key = registry.asset_key(high_first).unwrap();
            assert_eq!(key, format!("sprites/{suit}/0"));
        }
    }

    #[test]
    fn test_conventional_manifest_is_complete() {
        let registry = AppearanceRegistry::from_manifest(&AppearanceManifest::conventional("sprites")).unwrap();
        assert!(registry.is_complete());
        assert_eq!(registry.len(), 4 * 14);
        assert!(registry.ensure_complete().is_ok());
    }

    #[test]
    fn test_partial_suit_reports_missing() {
        let mut registry = AppearanceRegistry::new();
        registry.load_suit(Suit::Heart, &["a", "b", "c"]).unwrap();

        assert!(registry.lookup(Suit::Heart, 3).is_ok());
        assert!(registry.lookup(Suit::Heart, 4).is_err());
        // Heart covers 1, 2, 3 and 14.
        assert_eq!(registry.missing_count(), 4 * 14 - 4);
        assert_eq!(
            registry.ensure_complete(),
            Err(CardError::IncompleteRegistry { missing: 52 })
        );
    }

    #[test]
    fn test_duplicate_suit_load_rejected() {
        let mut registry = AppearanceRegistry::new();
        registry.load_suit(Suit::Spade, &["a", "b"]).unwrap();
        let before = registry.len();

        let err = registry.load_suit(Suit::Spade, &["c"]).unwrap_err();
        assert_eq!(err, CardError::DuplicateAppearance { suit: Suit::Spade, rank: ACE_HIGH });
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_fourteenth_slot_collides_with_ace() {
        let slots: Vec<String> = (0..=SLOTS_PER_SUIT).map(|i| i.to_string()).collect();
        let mut registry = AppearanceRegistry::new();

        let err = registry.load_suit(Suit::Club, &slots).unwrap_err();
        assert_eq!(err, CardError::DuplicateAppearance { suit: Suit::Club, rank: ACE_HIGH });
        assert!(registry.is_empty());
    }

    #[test]
    fn test_manifest_from_toml() {
        let text = r#"
            heart = ["h0", "h1"]
            spade = ["s0"]
        "#;
        let manifest = AppearanceManifest::from_toml_str(text).unwrap();
        assert_eq!(manifest.slots(Suit::Heart), ["h0", "h1"]);
        assert!(manifest.slots(Suit::Club).is_empty());

        let registry = AppearanceRegistry::from_manifest(&manifest).unwrap();
        let id = registry.lookup(Suit::Spade, ACE_HIGH).unwrap();
        assert_eq!(registry.asset_key(id), Some("s0"));
    }

    #[test]
    fn test_bad_manifest_is_config_error() {
        let err = AppearanceManifest::from_toml_str("heart = 7").unwrap_err();
        assert!(matches!(err, CardError::InvalidManifest(_)));
    }
}
