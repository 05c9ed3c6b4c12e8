//! Error types.
//!
//! Every error here is recoverable: commands validate before they mutate,
//! so an `Err` always means the battle is exactly as it was before the call.

use thiserror::Error;

use crate::battle::Phase;
use crate::cards::Card;

/// Rejections from grid and battle commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("coordinate ({row}, {col}) is outside the grid")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("slot ({row}, {col}) is already occupied")]
    SlotOccupied { row: usize, col: usize },

    #[error("slot ({row}, {col}) is empty")]
    SlotEmpty { row: usize, col: usize },

    #[error("{0} was placed on an earlier turn and can only be discarded")]
    CardLocked(Card),

    #[error("{0} was placed this turn; return it to hand instead of discarding")]
    CardNotLocked(Card),

    #[error("{0} is neither in hand nor on the grid")]
    CardNotHeld(Card),

    #[error("{0} is not on the grid")]
    NotOnGrid(Card),

    #[error("{0} is already on the grid")]
    CardOnGrid(Card),

    #[error("deck exhausted: drew {drawn} of {requested} cards")]
    DeckExhausted { requested: usize, drawn: usize },

    #[error("cannot {command} during {phase:?}")]
    IllegalPhase { command: &'static str, phase: Phase },
}

/// Problems with a [`BattleConfig`](crate::core::BattleConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} exceeds {max} cells", max = crate::core::MAX_GRID_CELLS)]
    GridTooLarge { rows: usize, cols: usize },

    #[error("attrition must remove at least one card")]
    ZeroAttritionCount,

    #[error("starting player HP must be positive")]
    ZeroPlayerHp,

    #[error("starting enemy HP must be positive")]
    ZeroEnemyHp,
}

/// Problems building a card catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog contains no cards")]
    Empty,

    #[error("{0} appears more than once in the catalog")]
    DuplicateCard(Card),

    #[error("card name {0:?} is not in Suit_Rank form")]
    MalformedName(String),

    #[error("unknown suit {0:?}")]
    UnknownSuit(String),

    #[error("unknown rank {0:?}")]
    UnknownRank(String),

    #[error("rank {0} is outside 2..=14")]
    RankOutOfRange(u8),
}
