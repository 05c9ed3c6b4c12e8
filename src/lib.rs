//! # grid-synergy
//!
//! A deterministic card battle engine. The player places drawn cards on a
//! small grid; relationships between placed cards produce damage and
//! shield, which are applied against a flat-damage enemy each turn until one
//! side falls.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness (shuffle, attrition) flows from one
//!    seed in `BattleConfig`. Same seed and same commands, same battle.
//!
//! 2. **Validate, then mutate**: Every command either applies fully or is
//!    rejected with a typed error before anything changes.
//!
//! 3. **Pluggable scoring**: Synergy rule-sets sit behind the
//!    `SynergyRules` trait and are chosen by configuration.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Card values and the catalog
//! - `zones`: Deck, hand and grid
//! - `synergy`: Rule-sets that score the grid
//! - `battle`: Turn state machine and combat resolution
//! - `error`: Error types

pub mod battle;
pub mod cards;
pub mod core;
pub mod error;
pub mod synergy;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{AttritionPolicy, BattleConfig, GameRng};

pub use crate::cards::{AssetRef, Card, CardCatalog, CatalogEntry, Rank, Suit};

pub use crate::zones::{Coord, Deck, Grid, Hand, PlacedCard};

pub use crate::synergy::{
    AdjacencyRules, PairContribution, RowRules, SynergyResult, SynergyRuleSet, SynergyRules,
};

pub use crate::battle::{Battle, BattleEvent, BattleState, Phase, TurnReport, TurnStart};

pub use crate::error::{BattleError, CatalogError, ConfigError};
