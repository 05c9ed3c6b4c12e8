//! Battle configuration.
//!
//! A host configures a battle at startup with a `BattleConfig`:
//! - Starting health and shield for both sides
//! - Grid dimensions and cards drawn per turn
//! - `AttritionPolicy`: when and how hard the grid is culled
//! - Which synergy rule-set scores the grid
//! - The seed for every random decision
//!
//! Configs serialize with serde so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::synergy::SynergyRuleSet;

/// Upper bound on `grid_rows * grid_cols`.
pub const MAX_GRID_CELLS: usize = 64;

/// Start-of-turn attrition: above `threshold` cards, destroy `count` of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttritionPolicy {
    /// Attrition fires only when strictly more cards than this are placed.
    pub threshold: usize,
    /// Cards destroyed when it fires.
    pub count: usize,
}

impl AttritionPolicy {
    #[must_use]
    pub const fn new(threshold: usize, count: usize) -> Self {
        Self { threshold, count }
    }
}

impl Default for AttritionPolicy {
    fn default() -> Self {
        Self::new(3, 2)
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub starting_player_hp: u32,
    pub starting_player_shield: u32,
    pub starting_enemy_hp: u32,
    /// Damage the enemy deals every turn it survives.
    pub enemy_flat_damage: u32,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub cards_drawn_per_turn: usize,
    pub attrition: AttritionPolicy,
    pub synergy_rule_set: SynergyRuleSet,
    pub random_seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_player_hp: 30,
            starting_player_shield: 0,
            starting_enemy_hp: 40,
            enemy_flat_damage: 15,
            grid_rows: 2,
            grid_cols: 3,
            cards_drawn_per_turn: 3,
            attrition: AttritionPolicy::default(),
            synergy_rule_set: SynergyRuleSet::Adjacency,
            random_seed: 0,
        }
    }
}

impl BattleConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player(mut self, hp: u32, shield: u32) -> Self {
        self.starting_player_hp = hp;
        self.starting_player_shield = shield;
        self
    }

    #[must_use]
    pub fn with_enemy(mut self, hp: u32, flat_damage: u32) -> Self {
        self.starting_enemy_hp = hp;
        self.enemy_flat_damage = flat_damage;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    #[must_use]
    pub fn with_cards_per_turn(mut self, count: usize) -> Self {
        self.cards_drawn_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_attrition(mut self, threshold: usize, count: usize) -> Self {
        self.attrition = AttritionPolicy::new(threshold, count);
        self
    }

    #[must_use]
    pub fn with_rule_set(mut self, rule_set: SynergyRuleSet) -> Self {
        self.synergy_rule_set = rule_set;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Reject configurations that cannot produce a playable battle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        let cells = self.grid_rows.checked_mul(self.grid_cols);
        if cells.map_or(true, |n| n > MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge {
                rows: self.grid_rows,
                cols: self.grid_cols,
            });
        }
        if self.attrition.count == 0 {
            return Err(ConfigError::ZeroAttritionCount);
        }
        if self.starting_player_hp == 0 {
            return Err(ConfigError::ZeroPlayerHp);
        }
        if self.starting_enemy_hp == 0 {
            return Err(ConfigError::ZeroEnemyHp);
        }
        Ok(())
    }
}
