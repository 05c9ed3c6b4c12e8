//! Adjacency rule-set.
//!
//! Every occupied cell looks at its forward neighbours only (right, down,
//! down-right, down-left), so each unordered adjacent pair is scored exactly
//! once. Per pair, in order:
//!
//! 1. Same suit: damage += higher rank
//! 2. Same suit and ranks one apart: that damage doubles
//! 3. Same rank: shield += rank
//! 4. Face card, equal ranks, at least one red: that shield doubles
//! 5. Face card, equal ranks, both black: that damage doubles

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{SynergyResult, SynergyRules};
use crate::cards::Card;
use crate::zones::{Coord, Grid, PlacedCard};

/// Right, down, down-right, down-left.
pub const FORWARD_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Score for one adjacent pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairContribution {
    pub first: Coord,
    pub second: Coord,
    pub result: SynergyResult,
}

/// Score a single pair of cards.
#[must_use]
pub fn pair_synergy(a: Card, b: Card) -> SynergyResult {
    let (rank_a, rank_b) = (a.value(), b.value());
    let mut damage = 0;
    let mut shield = 0;

    if a.suit == b.suit {
        damage += rank_a.max(rank_b);
        tracing::trace!(%a, %b, damage, "same suit");

        if rank_a.abs_diff(rank_b) == 1 {
            damage *= 2;
            tracing::trace!(%a, %b, "consecutive ranks, damage doubled");
        }
    }

    if rank_a == rank_b {
        shield += rank_a;
        tracing::trace!(%a, %b, shield, "same rank");
    }

    if (a.is_face() || b.is_face()) && rank_a == rank_b {
        if a.is_red() || b.is_red() {
            shield *= 2;
            tracing::trace!(%a, %b, "red face pair, shield doubled");
        } else {
            damage *= 2;
            tracing::trace!(%a, %b, "black face pair, damage doubled");
        }
    }

    SynergyResult::new(damage, shield, 0)
}

/// Occupied forward neighbours of a cell.
fn forward_neighbors(grid: &Grid, coord: Coord) -> SmallVec<[&PlacedCard; 4]> {
    FORWARD_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| coord.offset(dr, dc))
        .filter_map(|c| grid.at_coord(c))
        .collect()
}

/// Neighbouring-card combo rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdjacencyRules;

impl AdjacencyRules {
    /// Every scored pair in row-major order of its first cell.
    ///
    /// Pairs that score nothing are still listed.
    #[must_use]
    pub fn pair_contributions(&self, grid: &Grid) -> Vec<PairContribution> {
        grid.occupied()
            .flat_map(|placed| {
                forward_neighbors(grid, placed.coord)
                    .into_iter()
                    .map(move |neighbor| PairContribution {
                        first: placed.coord,
                        second: neighbor.coord,
                        result: pair_synergy(placed.card, neighbor.card),
                    })
            })
            .collect()
    }
}

impl SynergyRules for AdjacencyRules {
    fn name(&self) -> &'static str {
        "adjacency"
    }

    fn evaluate(&self, grid: &Grid) -> SynergyResult {
        let total: SynergyResult = self
            .pair_contributions(grid)
            .into_iter()
            .map(|pair| pair.result)
            .sum();
        tracing::debug!(
            damage = total.damage,
            shield = total.shield,
            healing = total.healing,
            "adjacency synergy"
        );
        total
    }
}
