//! The placement grid.
//!
//! A fixed `rows × cols` matrix of optional cards. The grid enforces the
//! placement invariants:
//!
//! - a coordinate holds at most one card
//! - a card occupies at most one coordinate
//! - only an empty slot may receive a placement
//!
//! It also tracks whether each card was placed this turn. Cards placed this
//! turn may still be moved; everything else is locked in place until it is
//! discarded or destroyed by attrition.
//!
//! ## Usage
//!
//! ```
//! use grid_synergy::cards::{Card, Suit};
//! use grid_synergy::zones::Grid;
//!
//! let mut grid = Grid::new(2, 3);
//! let card = Card::from_parts(Suit::Clubs, 5).unwrap();
//!
//! grid.place(card, 0, 0, true).unwrap();
//! assert!(!grid.is_empty(0, 0));
//! assert_eq!(grid.occupied_count(), 1);
//!
//! grid.mark_all_not_placed_this_turn();
//! assert!(!grid.at(0, 0).unwrap().placed_this_turn);
//! ```

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{AttritionPolicy, GameRng};
use crate::error::BattleError;

/// A grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset. `None` if either axis would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A card sitting on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Card,
    pub coord: Coord,
    /// Set when placed; cleared at the next turn boundary.
    pub placed_this_turn: bool,
}

impl PlacedCard {
    /// Locked cards can only be discarded, never moved.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        !self.placed_this_turn
    }
}

/// Fixed-size placement grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major slots.
    slots: Vec<Option<PlacedCard>>,
    /// card -> coordinate, kept in sync with `slots`.
    positions: FxHashMap<Card, Coord>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
            positions: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BattleError> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(BattleError::InvalidCoordinate { row, col })
        }
    }

    /// `true` only for an in-range, unoccupied slot.
    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .map(|i| self.slots[i].is_none())
            .unwrap_or(false)
    }

    /// Card at a coordinate. `None` for empty or out-of-range slots.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<&PlacedCard> {
        let i = self.index(row, col).ok()?;
        self.slots[i].as_ref()
    }

    /// Card at a coordinate value.
    #[must_use]
    pub fn at_coord(&self, coord: Coord) -> Option<&PlacedCard> {
        self.at(coord.row, coord.col)
    }

    /// Where a card currently sits, if it is on the grid.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<Coord> {
        self.positions.get(&card).copied()
    }

    /// Place a card into an empty slot.
    pub fn place(
        &mut self,
        card: Card,
        row: usize,
        col: usize,
        placed_this_turn: bool,
    ) -> Result<(), BattleError> {
        let i = self.index(row, col)?;
        if self.slots[i].is_some() {
            return Err(BattleError::SlotOccupied { row, col });
        }
        if self.positions.contains_key(&card) {
            return Err(BattleError::CardOnGrid(card));
        }

        let coord = Coord::new(row, col);
        self.slots[i] = Some(PlacedCard {
            card,
            coord,
            placed_this_turn,
        });
        self.positions.insert(card, coord);
        Ok(())
    }

    /// Clear a slot, returning what was there.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<PlacedCard> {
        let i = self.index(row, col).ok()?;
        let removed = self.slots[i].take()?;
        self.positions.remove(&removed.card);
        Some(removed)
    }

    /// Move a card placed this turn to another empty slot.
    ///
    /// Moving a card onto its own slot is a no-op.
    pub fn relocate(&mut self, card: Card, row: usize, col: usize) -> Result<(), BattleError> {
        let target = self.index(row, col)?;
        let from = self
            .positions
            .get(&card)
            .copied()
            .ok_or(BattleError::NotOnGrid(card))?;
        let source = from.row * self.cols + from.col;

        if self.slots[source].is_some_and(|p| p.is_locked()) {
            return Err(BattleError::CardLocked(card));
        }
        if source == target {
            return Ok(());
        }
        if self.slots[target].is_some() {
            return Err(BattleError::SlotOccupied { row, col });
        }

        let mut placed = self.slots[source].take().ok_or(BattleError::NotOnGrid(card))?;
        placed.coord = Coord::new(row, col);
        self.slots[target] = Some(placed);
        self.positions.insert(card, placed.coord);
        Ok(())
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.positions.len()
    }

    /// Occupied slots in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &PlacedCard> + '_ {
        self.slots.iter().flatten()
    }

    /// Random attrition.
    ///
    /// Only fires when more than `policy.threshold` cards are on the grid;
    /// then removes `policy.count` distinct occupied cells chosen uniformly
    /// without replacement. Returns the destroyed cards in row-major order.
    pub fn remove_random(&mut self, policy: AttritionPolicy, rng: &mut GameRng) -> Vec<PlacedCard> {
        let occupied: Vec<Coord> = self.occupied().map(|p| p.coord).collect();
        if occupied.len() <= policy.threshold {
            return Vec::new();
        }

        let mut picked: Vec<Coord> = rng
            .sample_indices(occupied.len(), policy.count)
            .into_iter()
            .map(|i| occupied[i])
            .collect();
        picked.sort_unstable();

        picked
            .into_iter()
            .filter_map(|c| self.remove(c.row, c.col))
            .collect()
    }

    /// Lock every card currently on the grid.
    pub fn mark_all_not_placed_this_turn(&mut self) {
        for placed in self.slots.iter_mut().flatten() {
            placed.placed_this_turn = false;
        }
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.positions.clear();
    }
}
