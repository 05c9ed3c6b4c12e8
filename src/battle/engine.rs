//! The battle: turn state machine and combat resolution.
//!
//! ```text
//!   start ──► TurnStart ──begin_turn──► AwaitingActions ──end_turn──► Resolving
//!                 ▲                                                      │
//!                 └──────────────── continue ◄───────────────────────────┤
//!                                                                        ├──► Won
//!                                                                        └──► Lost
//! ```
//!
//! Commands validate before they mutate, so a rejected command leaves the
//! battle exactly as it was.
//!
//! ## Example
//!
//! ```
//! use grid_synergy::battle::{Battle, Phase};
//! use grid_synergy::cards::CardCatalog;
//! use grid_synergy::core::BattleConfig;
//!
//! let config = BattleConfig::new().with_seed(7);
//! let mut battle = Battle::start(CardCatalog::standard(), config).unwrap();
//! let turn = battle.begin_turn().unwrap();
//! assert_eq!(turn.drawn.len(), 3);
//!
//! let card = turn.drawn[0];
//! battle.place_card(card, 0, 0).unwrap();
//!
//! let report = battle.end_turn().unwrap();
//! assert_eq!(report.phase, Phase::TurnStart);
//! assert_eq!(battle.state().player_hp, 15);
//! ```

use crate::cards::{Card, CardCatalog};
use crate::core::{BattleConfig, GameRng};
use crate::error::{BattleError, ConfigError};
use crate::synergy::{SynergyResult, SynergyRules};
use crate::zones::{Coord, Deck, Grid, Hand, PlacedCard};

use super::state::{BattleEvent, BattleState, Phase, TurnReport, TurnStart};

/// A single battle against a flat-damage enemy.
pub struct Battle {
    catalog: CardCatalog,
    config: BattleConfig,
    rules: Box<dyn SynergyRules>,
    shuffle_rng: GameRng,
    attrition_rng: GameRng,
    deck: Deck,
    hand: Hand,
    grid: Grid,
    discard: Vec<Card>,
    state: BattleState,
    phase: Phase,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Start a battle with the rule-set named in the config.
    pub fn start(catalog: CardCatalog, config: BattleConfig) -> Result<Self, ConfigError> {
        let rules = config.synergy_rule_set.rules();
        Self::with_rules(catalog, config, rules)
    }

    /// Start a battle with a caller-supplied rule-set.
    ///
    /// `config.synergy_rule_set` is ignored.
    pub fn with_rules(
        catalog: CardCatalog,
        config: BattleConfig,
        rules: Box<dyn SynergyRules>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let root = GameRng::new(config.random_seed);
        let mut shuffle_rng = root.for_context("shuffle");
        let attrition_rng = root.for_context("attrition");
        let deck = Deck::build(&catalog, &mut shuffle_rng);

        let mut battle = Self {
            grid: Grid::new(config.grid_rows, config.grid_cols),
            state: Self::initial_state(&config),
            catalog,
            config,
            rules,
            shuffle_rng,
            attrition_rng,
            deck,
            hand: Hand::new(),
            discard: Vec::new(),
            phase: Phase::TurnStart,
            events: Vec::new(),
        };
        battle.record_start();
        Ok(battle)
    }

    fn initial_state(config: &BattleConfig) -> BattleState {
        BattleState {
            player_hp: config.starting_player_hp,
            player_shield: config.starting_player_shield,
            enemy_hp: config.starting_enemy_hp,
            enemy_flat_damage: config.enemy_flat_damage,
            turn_number: 0,
        }
    }

    fn record_start(&mut self) {
        tracing::info!(
            deck = self.deck.len(),
            rules = self.rules.name(),
            player_hp = self.state.player_hp,
            enemy_hp = self.state.enemy_hp,
            "battle started"
        );
        self.events.push(BattleEvent::BattleStarted {
            deck_size: self.deck.len(),
            rule_set: self.rules.name().to_string(),
        });
    }

    fn require_phase(&self, expected: Phase, command: &'static str) -> Result<(), BattleError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::IllegalPhase {
                command,
                phase: self.phase,
            })
        }
    }

    // === Turn boundaries ===

    /// `TurnStart` → `AwaitingActions`: attrition, advance the turn counter,
    /// draw.
    ///
    /// Running out of cards is not an error; see [`TurnStart::deck_exhausted`].
    pub fn begin_turn(&mut self) -> Result<TurnStart, BattleError> {
        self.require_phase(Phase::TurnStart, "begin a turn")?;

        let destroyed = self
            .grid
            .remove_random(self.config.attrition, &mut self.attrition_rng);
        if !destroyed.is_empty() {
            tracing::debug!(count = destroyed.len(), "attrition destroyed cards");
        }
        self.discard.extend(destroyed.iter().map(|p| p.card));

        self.state.turn_number += 1;

        let requested = self.config.cards_drawn_per_turn;
        let drawn: Vec<Card> = std::iter::from_fn(|| self.deck.draw())
            .take(requested)
            .collect();
        for &card in &drawn {
            self.hand.add(card);
        }
        if drawn.len() < requested {
            tracing::warn!(requested, drawn = drawn.len(), "deck exhausted");
        }

        self.phase = Phase::AwaitingActions;
        tracing::debug!(
            turn = self.state.turn_number,
            drawn = drawn.len(),
            hand = self.hand.len(),
            "turn started"
        );

        self.events.push(BattleEvent::TurnStarted {
            turn: self.state.turn_number,
            destroyed: destroyed.iter().map(|p| p.card).collect(),
            drawn: drawn.clone(),
        });

        Ok(TurnStart {
            turn_number: self.state.turn_number,
            destroyed,
            drawn,
            requested,
        })
    }

    /// `AwaitingActions` → `Resolving` → `Won` | `Lost` | `TurnStart`.
    ///
    /// Synergy damage lands first; a lethal result wins immediately and the
    /// enemy never counter-attacks.
    pub fn end_turn(&mut self) -> Result<TurnReport, BattleError> {
        self.require_phase(Phase::AwaitingActions, "end the turn")?;
        self.phase = Phase::Resolving;

        let synergy = self.rules.evaluate(&self.grid);
        self.state.enemy_hp = self.state.enemy_hp.saturating_sub(synergy.damage);

        if self.state.enemy_hp > 0 {
            self.state.player_shield = self.state.player_shield.saturating_add(synergy.shield);
            self.state.player_hp = self.state.player_hp.saturating_add(synergy.healing);
            let incoming = self.state.enemy_flat_damage;
            self.state.absorb_hit(incoming);
        }

        self.phase = if self.state.enemy_hp == 0 {
            Phase::Won
        } else if self.state.player_hp == 0 {
            Phase::Lost
        } else {
            self.grid.mark_all_not_placed_this_turn();
            Phase::TurnStart
        };

        let turn = self.state.turn_number;
        tracing::debug!(
            turn,
            damage = synergy.damage,
            shield = synergy.shield,
            enemy_hp = self.state.enemy_hp,
            player_hp = self.state.player_hp,
            player_shield = self.state.player_shield,
            "turn resolved"
        );
        self.events.push(BattleEvent::TurnResolved {
            turn,
            synergy,
            enemy_hp: self.state.enemy_hp,
            player_hp: self.state.player_hp,
            player_shield: self.state.player_shield,
        });

        match self.phase {
            Phase::Won => {
                tracing::info!(turn, "battle won");
                self.events.push(BattleEvent::BattleWon { turn });
            }
            Phase::Lost => {
                tracing::info!(turn, "battle lost");
                self.events.push(BattleEvent::BattleLost { turn });
            }
            _ => {}
        }

        Ok(TurnReport {
            phase: self.phase,
            player_hp: self.state.player_hp,
            player_shield: self.state.player_shield,
            enemy_hp: self.state.enemy_hp,
            synergy,
        })
    }

    // === Placement commands ===

    /// Place a card from hand, or move a card placed this turn.
    pub fn place_card(&mut self, card: Card, row: usize, col: usize) -> Result<(), BattleError> {
        self.require_phase(Phase::AwaitingActions, "place a card")?;

        if self.hand.contains(card) {
            self.grid.place(card, row, col, true)?;
            self.hand.remove(card);
            tracing::debug!(%card, row, col, "card placed");
            self.events.push(BattleEvent::CardPlaced {
                card,
                at: Coord::new(row, col),
            });
            return Ok(());
        }

        let from = self
            .grid
            .position_of(card)
            .ok_or(BattleError::CardNotHeld(card))?;
        self.grid.relocate(card, row, col)?;
        let to = Coord::new(row, col);
        if from != to {
            tracing::debug!(%card, %from, %to, "card moved");
            self.events.push(BattleEvent::CardMoved { card, from, to });
        }
        Ok(())
    }

    /// Take a card placed this turn back into hand.
    pub fn return_to_hand(&mut self, card: Card) -> Result<(), BattleError> {
        self.require_phase(Phase::AwaitingActions, "return a card")?;
        let placed = self.placed(card)?;
        if placed.is_locked() {
            return Err(BattleError::CardLocked(card));
        }
        self.take_back(placed);
        Ok(())
    }

    /// Destroy a locked card on the grid.
    ///
    /// Cards placed this turn must go back to hand instead.
    pub fn discard_from_grid(&mut self, card: Card) -> Result<(), BattleError> {
        self.require_phase(Phase::AwaitingActions, "discard a card")?;
        let placed = self.placed(card)?;
        if !placed.is_locked() {
            return Err(BattleError::CardNotLocked(card));
        }
        self.destroy(placed);
        Ok(())
    }

    /// Withdraw whatever sits at a slot, routed by its lock: cards placed
    /// this turn return to hand, locked cards are discarded.
    ///
    /// Returns the card that left the grid.
    pub fn withdraw_at(&mut self, row: usize, col: usize) -> Result<PlacedCard, BattleError> {
        self.require_phase(Phase::AwaitingActions, "withdraw a card")?;
        if !self.grid.in_bounds(row, col) {
            return Err(BattleError::InvalidCoordinate { row, col });
        }
        let placed = *self
            .grid
            .at(row, col)
            .ok_or(BattleError::SlotEmpty { row, col })?;

        if placed.is_locked() {
            self.destroy(placed);
        } else {
            self.take_back(placed);
        }
        Ok(placed)
    }

    fn placed(&self, card: Card) -> Result<PlacedCard, BattleError> {
        self.grid
            .position_of(card)
            .and_then(|c| self.grid.at_coord(c))
            .copied()
            .ok_or(BattleError::NotOnGrid(card))
    }

    fn take_back(&mut self, placed: PlacedCard) {
        self.grid.remove(placed.coord.row, placed.coord.col);
        self.hand.add(placed.card);
        tracing::debug!(card = %placed.card, from = %placed.coord, "card returned to hand");
        self.events.push(BattleEvent::CardReturned {
            card: placed.card,
            from: placed.coord,
        });
    }

    fn destroy(&mut self, placed: PlacedCard) {
        self.grid.remove(placed.coord.row, placed.coord.col);
        self.discard.push(placed.card);
        tracing::debug!(card = %placed.card, from = %placed.coord, "card discarded");
        self.events.push(BattleEvent::CardDiscarded {
            card: placed.card,
            from: placed.coord,
        });
    }

    // === Reset ===

    /// Start over with the same catalog and config.
    ///
    /// The deck is reshuffled from the continuing seeded stream, so a reset
    /// battle does not replay the previous order.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.hand.clear();
        self.discard.clear();
        self.deck = Deck::build(&self.catalog, &mut self.shuffle_rng);
        self.state = Self::initial_state(&self.config);
        self.phase = Phase::TurnStart;
        self.events.clear();
        self.record_start();
    }

    // === Read accessors ===

    /// Snapshot of health, shield and turn counter.
    #[must_use]
    pub fn state(&self) -> BattleState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The config the battle started with.
    ///
    /// For a battle built with [`Battle::with_rules`], `synergy_rule_set` is
    /// whatever the config held and does not describe the injected rules;
    /// use [`Battle::rule_set_name`] instead.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.hand.cards()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Destroyed cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Name of the active rule-set.
    #[must_use]
    pub fn rule_set_name(&self) -> &'static str {
        self.rules.name()
    }

    /// What the grid would score if the turn ended now.
    #[must_use]
    pub fn preview_synergy(&self) -> SynergyResult {
        self.rules.evaluate(&self.grid)
    }
}

impl std::fmt::Debug for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battle")
            .field("rules", &self.rules.name())
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("deck", &self.deck.len())
            .field("hand", &self.hand)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::synergy::SynergyRuleSet;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::from_parts(suit, rank).unwrap()
    }

    /// Rules returning a fixed result, for combat arithmetic tests.
    struct Fixed(SynergyResult);

    impl SynergyRules for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn evaluate(&self, _grid: &Grid) -> SynergyResult {
            self.0
        }
    }

    fn fixed_battle(config: BattleConfig, result: SynergyResult) -> Battle {
        Battle::with_rules(CardCatalog::standard(), config, Box::new(Fixed(result))).unwrap()
    }

    /// A battle whose whole (small) catalog lands in hand on turn 1.
    fn battle_holding(cards: &[Card], config: BattleConfig) -> Battle {
        let catalog = CardCatalog::from_cards(cards.iter().copied()).unwrap();
        let mut battle =
            Battle::start(catalog, config.with_cards_per_turn(cards.len())).unwrap();
        battle.begin_turn().unwrap();
        battle
    }

    #[test]
    fn test_initial_state() {
        let battle = Battle::start(CardCatalog::standard(), BattleConfig::default()).unwrap();
        assert_eq!(battle.phase(), Phase::TurnStart);
        assert_eq!(
            battle.state(),
            BattleState {
                player_hp: 30,
                player_shield: 0,
                enemy_hp: 40,
                enemy_flat_damage: 15,
                turn_number: 0,
            }
        );
        assert_eq!(battle.deck_len(), 52);
        assert!(battle.hand().is_empty());
        assert_eq!(battle.rule_set_name(), "adjacency");
    }

    #[test]
    fn test_injected_rules_name() {
        let battle = fixed_battle(BattleConfig::default(), SynergyResult::default());
        assert_eq!(battle.rule_set_name(), "fixed");
        assert_eq!(battle.config().synergy_rule_set, SynergyRuleSet::Adjacency);
        assert!(matches!(
            battle.events(),
            [BattleEvent::BattleStarted { rule_set, .. }] if rule_set == "fixed"
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Battle::start(CardCatalog::standard(), BattleConfig::new().with_grid(0, 0));
        assert_eq!(result.err(), Some(ConfigError::EmptyGrid { rows: 0, cols: 0 }));

        let huge = BattleConfig::new().with_grid(usize::MAX, usize::MAX);
        let result = Battle::start(CardCatalog::standard(), huge);
        assert_eq!(
            result.err(),
            Some(ConfigError::GridTooLarge {
                rows: usize::MAX,
                cols: usize::MAX
            })
        );
    }

    #[test]
    fn test_begin_turn_draws() {
        let mut battle = Battle::start(CardCatalog::standard(), BattleConfig::default()).unwrap();
        let turn = battle.begin_turn().unwrap();

        assert_eq!(turn.turn_number, 1);
        assert_eq!(turn.drawn.len(), 3);
        assert!(turn.destroyed.is_empty());
        assert_eq!(turn.deck_exhausted(), None);
        assert_eq!(battle.hand(), turn.drawn.as_slice());
        assert_eq!(battle.deck_len(), 49);
        assert_eq!(battle.phase(), Phase::AwaitingActions);
    }

    #[test]
    fn test_end_to_end_turn() {
        let config = BattleConfig::new().with_player(30, 0).with_enemy(40, 15);
        let mut battle = fixed_battle(config, SynergyResult::new(20, 5, 0));
        battle.begin_turn().unwrap();

        let report = battle.end_turn().unwrap();
        assert_eq!(report.enemy_hp, 20);
        // 5 shield soaks the first 5 of 15.
        assert_eq!(report.player_shield, 0);
        assert_eq!(report.player_hp, 20);
        assert_eq!(report.phase, Phase::TurnStart);
        assert_eq!(battle.phase(), Phase::TurnStart);
    }

    #[test]
    fn test_shield_fully_absorbs_counter_attack() {
        let config = BattleConfig::new().with_player(30, 0).with_enemy(40, 15);
        let mut battle = fixed_battle(config, SynergyResult::new(20, 15, 0));
        battle.begin_turn().unwrap();

        let report = battle.end_turn().unwrap();
        assert_eq!((report.player_hp, report.player_shield), (30, 0));
    }

    #[test]
    fn test_lethal_synergy_skips_counter_attack() {
        let config = BattleConfig::new().with_player(1, 0).with_enemy(40, 1000);
        let mut battle = fixed_battle(config, SynergyResult::new(40, 0, 0));
        battle.begin_turn().unwrap();

        let report = battle.end_turn().unwrap();
        assert_eq!(report.phase, Phase::Won);
        assert_eq!(report.enemy_hp, 0);
        assert_eq!(report.player_hp, 1);
        assert!(battle.is_over());
        assert!(matches!(battle.events().last(), Some(BattleEvent::BattleWon { turn: 1 })));
    }

    #[test]
    fn test_overkill_clamps_enemy_hp() {
        let mut battle = fixed_battle(BattleConfig::default(), SynergyResult::new(500, 0, 0));
        battle.begin_turn().unwrap();
        assert_eq!(battle.end_turn().unwrap().enemy_hp, 0);
        assert_eq!(battle.state().enemy_hp, 0);
    }

    #[test]
    fn test_player_loses() {
        let config = BattleConfig::new().with_player(10, 0).with_enemy(40, 15);
        let mut battle = fixed_battle(config, SynergyResult::new(1, 2, 0));
        battle.begin_turn().unwrap();

        let report = battle.end_turn().unwrap();
        assert_eq!(report.phase, Phase::Lost);
        assert_eq!(report.player_hp, 0);
        assert_eq!(report.player_shield, 0);
        assert_eq!(report.enemy_hp, 39);
    }

    #[test]
    fn test_healing_is_uncapped() {
        let config = BattleConfig::new().with_player(30, 0).with_enemy(40, 5);
        let mut battle = fixed_battle(config, SynergyResult::new(0, 0, 20));
        battle.begin_turn().unwrap();
        let report = battle.end_turn().unwrap();
        assert_eq!(report.player_hp, 45);
    }

    #[test]
    fn test_terminal_rejects_commands() {
        let mut battle = fixed_battle(BattleConfig::default(), SynergyResult::new(100, 0, 0));
        battle.begin_turn().unwrap();
        battle.end_turn().unwrap();

        let err = battle.end_turn().unwrap_err();
        assert_eq!(
            err,
            BattleError::IllegalPhase {
                command: "end the turn",
                phase: Phase::Won
            }
        );
        assert!(matches!(battle.begin_turn(), Err(BattleError::IllegalPhase { .. })));
        let any = card(Suit::Clubs, 2);
        assert!(matches!(
            battle.place_card(any, 0, 0),
            Err(BattleError::IllegalPhase { .. })
        ));
    }

    #[test]
    fn test_phase_guards() {
        let mut battle = Battle::start(CardCatalog::standard(), BattleConfig::default()).unwrap();
        assert!(matches!(
            battle.end_turn(),
            Err(BattleError::IllegalPhase { phase: Phase::TurnStart, .. })
        ));

        battle.begin_turn().unwrap();
        assert!(matches!(
            battle.begin_turn(),
            Err(BattleError::IllegalPhase { phase: Phase::AwaitingActions, .. })
        ));
    }

    #[test]
    fn test_place_and_move_same_turn() {
        let five = card(Suit::Clubs, 5);
        let six = card(Suit::Clubs, 6);
        let mut battle = battle_holding(&[five, six], BattleConfig::default());

        battle.place_card(five, 0, 0).unwrap();
        battle.place_card(six, 1, 2).unwrap();
        assert!(battle.preview_synergy().is_zero());

        battle.place_card(six, 0, 1).unwrap();
        assert!(battle.grid().is_empty(1, 2));
        assert_eq!(battle.preview_synergy(), SynergyResult::new(12, 0, 0));
        assert!(battle.hand().is_empty());
    }

    #[test]
    fn test_place_rejections_leave_state_untouched() {
        let a = card(Suit::Hearts, 3);
        let b = card(Suit::Hearts, 4);
        let mut battle = battle_holding(&[a, b], BattleConfig::default());
        battle.place_card(a, 0, 0).unwrap();

        assert_eq!(
            battle.place_card(b, 0, 0),
            Err(BattleError::SlotOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            battle.place_card(b, 7, 0),
            Err(BattleError::InvalidCoordinate { row: 7, col: 0 })
        );
        assert_eq!(battle.hand(), &[b]);

        let stranger = card(Suit::Spades, 14);
        assert_eq!(battle.place_card(stranger, 1, 1), Err(BattleError::CardNotHeld(stranger)));
    }

    #[test]
    fn test_placement_lock() {
        let a = card(Suit::Diamonds, 8);
        let mut battle = battle_holding(&[a], BattleConfig::default().with_enemy(500, 1));
        battle.place_card(a, 0, 0).unwrap();
        battle.end_turn().unwrap();
        battle.begin_turn().unwrap();

        assert!(battle.grid().at(0, 0).unwrap().is_locked());
        assert_eq!(battle.place_card(a, 1, 1), Err(BattleError::CardLocked(a)));
        assert_eq!(battle.place_card(a, 0, 0), Err(BattleError::CardLocked(a)));
        assert_eq!(battle.return_to_hand(a), Err(BattleError::CardLocked(a)));

        battle.discard_from_grid(a).unwrap();
        assert!(battle.grid().is_empty(0, 0));
        assert_eq!(battle.discard_pile(), &[a]);
        assert!(battle.hand().is_empty());
    }

    #[test]
    fn test_return_to_hand_same_turn() {
        let a = card(Suit::Spades, 10);
        let mut battle = battle_holding(&[a], BattleConfig::default());
        battle.place_card(a, 1, 1).unwrap();

        assert_eq!(battle.discard_from_grid(a), Err(BattleError::CardNotLocked(a)));
        battle.return_to_hand(a).unwrap();
        assert_eq!(battle.hand(), &[a]);
        assert_eq!(battle.grid().occupied_count(), 0);
        assert_eq!(battle.return_to_hand(a), Err(BattleError::NotOnGrid(a)));
    }

    #[test]
    fn test_withdraw_routes_by_lock() {
        let a = card(Suit::Hearts, 12);
        let b = card(Suit::Clubs, 3);
        let mut battle = battle_holding(&[a, b], BattleConfig::default().with_enemy(500, 1));
        battle.place_card(a, 0, 0).unwrap();
        battle.end_turn().unwrap();
        battle.begin_turn().unwrap();
        battle.place_card(b, 0, 1).unwrap();

        assert_eq!(battle.withdraw_at(0, 1).unwrap().card, b);
        assert_eq!(battle.hand(), &[b]);

        assert_eq!(battle.withdraw_at(0, 0).unwrap().card, a);
        assert_eq!(battle.discard_pile(), &[a]);

        assert_eq!(
            battle.withdraw_at(0, 0),
            Err(BattleError::SlotEmpty { row: 0, col: 0 })
        );
        assert_eq!(
            battle.withdraw_at(4, 0),
            Err(BattleError::InvalidCoordinate { row: 4, col: 0 })
        );
    }

    #[test]
    fn test_deck_exhaustion_is_not_fatal() {
        let only = card(Suit::Hearts, 2);
        let catalog = CardCatalog::from_cards([only]).unwrap();
        let config = BattleConfig::default().with_enemy(500, 1);
        let mut battle = Battle::start(catalog, config).unwrap();

        let first = battle.begin_turn().unwrap();
        assert_eq!(first.drawn, vec![only]);
        assert_eq!(
            first.deck_exhausted(),
            Some(BattleError::DeckExhausted { requested: 3, drawn: 1 })
        );

        battle.end_turn().unwrap();
        let second = battle.begin_turn().unwrap();
        assert!(second.drawn.is_empty());
        assert_eq!(second.turn_number, 2);
        assert_eq!(battle.phase(), Phase::AwaitingActions);
    }

    #[test]
    fn test_cards_lock_after_resolution() {
        let a = card(Suit::Clubs, 9);
        let mut battle = battle_holding(&[a], BattleConfig::default().with_enemy(500, 1));
        battle.place_card(a, 0, 0).unwrap();
        assert!(!battle.grid().at(0, 0).unwrap().is_locked());

        battle.end_turn().unwrap();
        assert!(battle.grid().at(0, 0).unwrap().is_locked());
    }

    #[test]
    fn test_row_based_battle() {
        let heart = card(Suit::Hearts, 10);
        let spade = card(Suit::Spades, 8);
        let config = BattleConfig::default().with_rule_set(SynergyRuleSet::RowBased);
        let mut battle = battle_holding(&[heart, spade], config);
        assert_eq!(battle.rule_set_name(), "row_based");

        battle.place_card(heart, 0, 0).unwrap();
        battle.place_card(spade, 1, 0).unwrap();
        let report = battle.end_turn().unwrap();

        assert_eq!(report.synergy, SynergyResult::new(10, 8, 0));
        assert_eq!(report.enemy_hp, 30);
        // 8 shield absorbs 8 of 15.
        assert_eq!(report.player_hp, 23);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut battle = fixed_battle(BattleConfig::default(), SynergyResult::new(10, 0, 0));
        let drawn = battle.begin_turn().unwrap().drawn;
        battle.place_card(drawn[0], 0, 0).unwrap();
        battle.end_turn().unwrap();

        battle.reset();
        assert_eq!(battle.phase(), Phase::TurnStart);
        assert_eq!(battle.state().turn_number, 0);
        assert_eq!(battle.state().enemy_hp, 40);
        assert_eq!(battle.grid().occupied_count(), 0);
        assert!(battle.hand().is_empty());
        assert!(battle.discard_pile().is_empty());
        assert_eq!(battle.deck_len(), 52);
        assert!(matches!(battle.events(), [BattleEvent::BattleStarted { .. }]));
    }

    #[test]
    fn test_seeded_battles_repeat() {
        let config = BattleConfig::default().with_seed(1234);
        let mut a = Battle::start(CardCatalog::standard(), config.clone()).unwrap();
        let mut b = Battle::start(CardCatalog::standard(), config).unwrap();
        assert_eq!(a.begin_turn().unwrap(), b.begin_turn().unwrap());
    }
}
