//! Synergy evaluation: scoring the cards on the grid.
//!
//! A rule-set is a pure function of a grid snapshot producing a
//! [`SynergyResult`]. Two rule-sets ship with the engine:
//!
//! - [`AdjacencyRules`]: combos between neighbouring cards (same suit, runs,
//!   pairs, face-card bonuses)
//! - [`RowRules`]: fixed attack and defense rows, red cards attack and black
//!   cards defend
//!
//! A battle uses exactly one rule-set, picked with [`SynergyRuleSet`] in the
//! config or injected as any [`SynergyRules`] implementation.
//!
//! ## Example
//!
//! ```
//! use grid_synergy::cards::{Card, Suit};
//! use grid_synergy::synergy::{AdjacencyRules, SynergyRules};
//! use grid_synergy::zones::Grid;
//!
//! let mut grid = Grid::new(2, 3);
//! grid.place(Card::from_parts(Suit::Clubs, 5).unwrap(), 0, 0, true).unwrap();
//! grid.place(Card::from_parts(Suit::Clubs, 6).unwrap(), 0, 1, true).unwrap();
//!
//! let result = AdjacencyRules.evaluate(&grid);
//! assert_eq!(result.damage, 12);
//! ```

mod adjacency;
mod rows;

pub use adjacency::{pair_synergy, AdjacencyRules, PairContribution, FORWARD_OFFSETS};
pub use rows::RowRules;

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::zones::Grid;

/// Aggregate effect of the cards on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynergyResult {
    pub damage: u32,
    pub shield: u32,
    /// Reserved for rule extensions; the shipped rule-sets leave it at 0.
    pub healing: u32,
}

impl SynergyResult {
    #[must_use]
    pub const fn new(damage: u32, shield: u32, healing: u32) -> Self {
        Self {
            damage,
            shield,
            healing,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for SynergyResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            damage: self.damage.saturating_add(rhs.damage),
            shield: self.shield.saturating_add(rhs.shield),
            healing: self.healing.saturating_add(rhs.healing),
        }
    }
}

impl AddAssign for SynergyResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for SynergyResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A synergy rule-set.
///
/// Implementations must be pure: the same grid always yields the same
/// result, and evaluation never mutates anything.
pub trait SynergyRules: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Score the grid.
    fn evaluate(&self, grid: &Grid) -> SynergyResult;
}

/// Built-in rule-set selector for configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyRuleSet {
    /// Neighbouring-card combos.
    #[default]
    Adjacency,
    /// Attack row and defense row.
    RowBased,
}

impl SynergyRuleSet {
    /// Instantiate the selected rule-set.
    #[must_use]
    pub fn rules(self) -> Box<dyn SynergyRules> {
        match self {
            SynergyRuleSet::Adjacency => Box::new(AdjacencyRules),
            SynergyRuleSet::RowBased => Box::new(RowRules),
        }
    }
}
