//! Row-based rule-set.
//!
//! Red cards are attack cards, black cards are shield cards. Row 0 is the
//! attack row and row 1 the defense row. A card in its own row contributes
//! its full rank; in the other row it contributes half (rounded down).
//! Rows past the defense row contribute nothing.

use super::{SynergyResult, SynergyRules};
use crate::zones::{Grid, PlacedCard};

const ATTACK_ROW: usize = 0;
const DEFENSE_ROW: usize = 1;

/// Fixed-role row rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowRules;

fn card_contribution(placed: &PlacedCard) -> SynergyResult {
    let rank = placed.card.value();
    let attack = placed.card.is_red();

    match (placed.coord.row, attack) {
        (ATTACK_ROW, true) => SynergyResult::new(rank, 0, 0),
        (ATTACK_ROW, false) => SynergyResult::new(0, rank / 2, 0),
        (DEFENSE_ROW, false) => SynergyResult::new(0, rank, 0),
        (DEFENSE_ROW, true) => SynergyResult::new(rank / 2, 0, 0),
        _ => SynergyResult::default(),
    }
}

impl SynergyRules for RowRules {
    fn name(&self) -> &'static str {
        "row_based"
    }

    fn evaluate(&self, grid: &Grid) -> SynergyResult {
        let total: SynergyResult = grid.occupied().map(card_contribution).sum();
        tracing::debug!(damage = total.damage, shield = total.shield, "row synergy");
        total
    }
}
