//! Card locations during a battle.
//!
//! ## Key Types
//!
//! - `Deck`: shuffled draw pile, drawn from the front
//! - `Hand`: drawn cards waiting to be placed
//! - `Grid`: fixed placement matrix with the placement lock
//!
//! The discard pile is a plain `Vec<Card>` owned by the battle.

pub mod deck;
pub mod grid;
pub mod hand;

pub use deck::Deck;
pub use grid::{Coord, Grid, PlacedCard};
pub use hand::Hand;
