//! Card catalog: the immutable set of card identities a battle draws from.
//!
//! The catalog also carries an opaque asset reference per card so a
//! presentation layer can find the sprite. The engine never looks inside it.
//!
//! ## Example
//!
//! ```
//! use grid_synergy::cards::{Card, CardCatalog, Rank, Suit};
//!
//! let catalog = CardCatalog::standard();
//! assert_eq!(catalog.len(), 52);
//!
//! let ace = Card::new(Suit::Spades, Rank::ACE);
//! assert_eq!(catalog.asset(ace).map(|a| a.as_str()), Some("Spades_a"));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::error::CatalogError;

/// Opaque reference to a card's visual asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub card: Card,
    pub asset: AssetRef,
}

/// Finite, duplicate-free set of cards.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    entries: Vec<CatalogEntry>,
    index: FxHashMap<Card, usize>,
}

impl CardCatalog {
    /// The 52-card catalog, suits in `Suit::ALL` order, ranks ascending.
    ///
    /// Asset references follow the `Suit_rank` naming (`Clubs_2`, `Hearts_j`).
    #[must_use]
    pub fn standard() -> Self {
        let entries = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .map(|card| CatalogEntry {
                card,
                asset: AssetRef::new(asset_name(card)),
            });

        // Every identity is distinct by construction.
        Self::from_entries(entries).unwrap_or_default()
    }

    /// Build a catalog from explicit entries.
    ///
    /// Fails on an empty input or a repeated card.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.card, i).is_some() {
                return Err(CatalogError::DuplicateCard(entry.card));
            }
        }

        Ok(Self { entries, index })
    }

    /// Build a catalog from bare cards, deriving asset names.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        Self::from_entries(cards.into_iter().map(|card| CatalogEntry {
            card,
            asset: AssetRef::new(asset_name(card)),
        }))
    }

    /// Build a catalog from asset names such as `Clubs_2` or `Hearts_j`.
    ///
    /// The name itself becomes the asset reference.
    pub fn from_asset_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::new();
        for name in names {
            let card: Card = name.parse()?;
            if !seen.insert(card) {
                return Err(CatalogError::DuplicateCard(card));
            }
            entries.push(CatalogEntry {
                card,
                asset: AssetRef::new(name),
            });
        }
        Self::from_entries(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.index.contains_key(&card)
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().map(|e| e.card)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Asset reference for a card, if it is in the catalog.
    #[must_use]
    pub fn asset(&self, card: Card) -> Option<&AssetRef> {
        self.index.get(&card).map(|&i| &self.entries[i].asset)
    }
}

fn asset_name(card: Card) -> String {
    let rank = match card.rank.value() {
        11 => "j".to_string(),
        12 => "q".to_string(),
        13 => "k".to_string(),
        14 => "a".to_string(),
        v => v.to_string(),
    };
    format!("{}_{}", card.suit, rank)
}
