//! Battle state, phases, per-turn results and the event log.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::BattleError;
use crate::synergy::SynergyResult;
use crate::zones::{Coord, PlacedCard};

/// Turn state machine phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between turns; `begin_turn` runs attrition and draws.
    TurnStart,
    /// The player may place, move, return and discard cards.
    AwaitingActions,
    /// The end-of-turn resolution is running.
    Resolving,
    /// Enemy defeated. Terminal.
    Won,
    /// Player defeated. Terminal.
    Lost,
}

impl Phase {
    /// `Won` and `Lost` accept no further commands.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Health, shield and turn counter.
///
/// All values are clamped at zero; nothing here is ever observed negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleState {
    pub player_hp: u32,
    pub player_shield: u32,
    pub enemy_hp: u32,
    pub enemy_flat_damage: u32,
    /// Starts at 0, incremented at each turn start.
    pub turn_number: u32,
}

impl BattleState {
    /// Apply the enemy's counter-attack: shield absorbs first, then HP.
    pub(crate) fn absorb_hit(&mut self, incoming: u32) {
        if self.player_shield >= incoming {
            self.player_shield -= incoming;
        } else {
            let remaining = incoming - self.player_shield;
            self.player_shield = 0;
            self.player_hp = self.player_hp.saturating_sub(remaining);
        }
    }
}

/// Outcome of `begin_turn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStart {
    pub turn_number: u32,
    /// Cards destroyed by attrition before the draw.
    pub destroyed: Vec<PlacedCard>,
    /// Cards drawn into hand, in draw order.
    pub drawn: Vec<Card>,
    /// How many cards the turn asked for.
    pub requested: usize,
}

impl TurnStart {
    /// `DeckExhausted` when fewer cards were drawn than requested.
    ///
    /// This is informational; the turn proceeds either way.
    #[must_use]
    pub fn deck_exhausted(&self) -> Option<BattleError> {
        (self.drawn.len() < self.requested).then(|| BattleError::DeckExhausted {
            requested: self.requested,
            drawn: self.drawn.len(),
        })
    }
}

/// Outcome of `end_turn`, enough to drive a HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// `TurnStart` if the battle continues, otherwise `Won` or `Lost`.
    pub phase: Phase,
    pub player_hp: u32,
    pub player_shield: u32,
    pub enemy_hp: u32,
    pub synergy: SynergyResult,
}

/// Something that happened during the battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStarted {
        deck_size: usize,
        rule_set: String,
    },
    TurnStarted {
        turn: u32,
        destroyed: Vec<Card>,
        drawn: Vec<Card>,
    },
    CardPlaced {
        card: Card,
        at: Coord,
    },
    CardMoved {
        card: Card,
        from: Coord,
        to: Coord,
    },
    CardReturned {
        card: Card,
        from: Coord,
    },
    CardDiscarded {
        card: Card,
        from: Coord,
    },
    TurnResolved {
        turn: u32,
        synergy: SynergyResult,
        enemy_hp: u32,
        player_hp: u32,
        player_shield: u32,
    },
    BattleWon {
        turn: u32,
    },
    BattleLost {
        turn: u32,
    },
}
