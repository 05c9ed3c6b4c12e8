//! Core engine types: RNG and configuration.

pub mod config;
pub mod rng;

pub use config::{AttritionPolicy, BattleConfig, MAX_GRID_CELLS};
pub use rng::GameRng;
