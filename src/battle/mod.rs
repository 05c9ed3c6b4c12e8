//! The battle engine.
//!
//! - `Battle`: owns deck, hand, grid, discard pile and `BattleState`, and
//!   drives them through the turn state machine
//! - `Phase`: where the state machine is
//! - `TurnStart` / `TurnReport`: what each turn boundary produced
//! - `BattleEvent`: append-only battle log

mod engine;
mod state;

pub use engine::Battle;
pub use state::{BattleEvent, BattleState, Phase, TurnReport, TurnStart};
