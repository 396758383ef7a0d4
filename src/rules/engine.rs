//! The turn engine.
//!
//! Owns the board, both armies, the turn state and the current candidates.
//! Callers drive it with `submit_action(target)` and read it back through
//! the query methods after every transition.
//!
//! ## Action resolution
//!
//! 1. Reject if the game is over or `target` is not a candidate
//! 2. Move: spend 1 point, place a unit
//! 3. Clash: spend the content's cost (reject if unaffordable), capture a
//!    castle to win, replace the content with a unit
//! 4. Prune Red then Blue
//! 5. Switch player on an empty budget and recompute candidates
//!
//! Every rejection happens before the first mutation.

use im::Vector;
use rustc_hash::FxHashSet;

use super::movegen::{Candidates, TileView};
use super::pruner::prune_disconnected;
use crate::board::{ArmySet, Board, ContentFactory, ContentKind, Coord, StandardContentFactory};
use crate::core::{
    ActionError, ActionKind, ActionRecord, AppliedEffect, ConfigError, GameConfig, GameRng, Phase,
    Player, PlayerMap, RandomSource, TurnState,
};

/// Rules engine for one game.
///
/// Generic over the content factory and the random source so tests can pin
/// both; [`TurnEngine::new`] picks the standard factory and a seeded
/// [`GameRng`].
///
/// ## Example
///
/// ```
/// use castle_clash::board::Coord;
/// use castle_clash::core::{GameConfig, Phase, Player, ScriptedSource};
/// use castle_clash::board::StandardContentFactory;
/// use castle_clash::rules::TurnEngine;
///
/// let config = GameConfig::new(5);
/// let factory = StandardContentFactory::new(config.clash_costs);
/// let mut engine = TurnEngine::initialize(config, factory, ScriptedSource::new([2], 0)).unwrap();
///
/// engine.submit_action(Coord::new(0, 1)).unwrap();
/// assert_eq!(
///     engine.current_phase(),
///     Phase::InProgress { player: Player::Red, action_points: 1 }
/// );
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<F = StandardContentFactory, R = GameRng> {
    config: GameConfig,
    board: Board,
    factory: F,
    random: R,
    armies: PlayerMap<ArmySet>,
    turn: TurnState,
    candidates: Candidates,
    history: Vector<ActionRecord>,
}

impl TurnEngine {
    /// Start a game with the standard content factory and a seeded RNG.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let factory = StandardContentFactory::new(config.clash_costs);
        Self::initialize(config, factory, GameRng::new(seed))
    }
}

impl<F: ContentFactory, R: RandomSource> TurnEngine<F, R> {
    /// Validate `config` and set up the opening position.
    ///
    /// Places both castles, scatters obstacles, draws the first budget and
    /// computes the first player's candidates.
    pub fn initialize(config: GameConfig, factory: F, random: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            board: Board::new(config.board_size),
            turn: TurnState::new(config.initial_player, 0),
            config,
            factory,
            random,
            armies: PlayerMap::default(),
            candidates: Candidates::default(),
            history: Vector::new(),
        };
        engine.set_up();

        Ok(engine)
    }

    /// Throw the current game away and start over from `config`.
    ///
    /// On a configuration error the running game is left untouched. The
    /// factory is kept and the random source continues its sequence.
    pub fn reset(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if self.board.size() == config.board_size {
            self.board.clear();
        } else {
            self.board = Board::new(config.board_size);
        }
        self.config = config;
        self.set_up();

        tracing::info!(size = self.config.board_size, "game reset");
        Ok(())
    }

    fn set_up(&mut self) {
        for (_, army) in self.armies.iter_mut() {
            army.clear();
        }
        self.history = Vector::new();

        self.place_castles();
        self.place_obstacles();

        let action_points = self.random.action_points();
        self.turn = TurnState::new(self.config.initial_player, action_points);
        self.candidates = Candidates::generate(&self.board, self.turn.active_player);

        tracing::info!(
            player = %self.turn.active_player,
            action_points,
            obstacles = self.config.obstacle_count,
            "game started"
        );
    }

    fn place_castles(&mut self) {
        for player in Player::all() {
            let castle = self.factory.create_castle(player);
            self.board.place_content(self.config.castles[player], castle);
        }
    }

    /// Rejection-sample empty cells until every obstacle is placed.
    ///
    /// Terminates because validation keeps at least three cells free.
    fn place_obstacles(&mut self) {
        let mut placed = 0;
        while placed < self.config.obstacle_count {
            let coord = self.random.coordinate(self.board.size());
            if self.board.is_empty_at(coord) {
                let obstacle = self.factory.create_obstacle();
                self.board.place_content(coord, obstacle);
                placed += 1;
            }
        }
    }

    /// Apply the active player's action on `target`.
    pub fn submit_action(&mut self, target: Coord) -> Result<AppliedEffect, ActionError> {
        if let Some(winner) = self.turn.winner() {
            tracing::debug!(%target, %winner, "action rejected, game over");
            return Err(ActionError::GameAlreadyOver { winner });
        }

        let Some(kind) = self.candidates.kind_of(target) else {
            tracing::debug!(%target, player = %self.turn.active_player, "action rejected, not a candidate");
            return Err(ActionError::InvalidTarget(target));
        };

        let player = self.turn.active_player;
        let cost = match kind {
            ActionKind::Move => {
                self.apply_move(target);
                1
            }
            ActionKind::Clash => self.apply_clash(target)?,
        };

        let sequence = self.turn.next_sequence();
        self.history.push_back(ActionRecord {
            player,
            target,
            kind,
            cost,
            turn: self.turn.turn_number,
            sequence,
        });

        tracing::debug!(%player, %target, %kind, cost, remaining = self.turn.action_points, "action applied");

        let pruned = self.prune_all();
        self.prepare_next_round();

        Ok(AppliedEffect {
            target,
            kind,
            cost,
            pruned,
            phase: self.turn.phase(),
        })
    }

    fn apply_move(&mut self, target: Coord) {
        let player = self.turn.active_player;
        self.turn.spend(1);
        self.place_unit(player, target);
    }

    /// Returns the points spent. Fails before any mutation if unaffordable.
    fn apply_clash(&mut self, target: Coord) -> Result<u32, ActionError> {
        let player = self.turn.active_player;

        // Candidates never hold obstacles or empty cells
        let Some(content) = self.board.content_at(target) else {
            return Err(ActionError::InvalidTarget(target));
        };
        let Some(cost) = content.clash_cost() else {
            return Err(ActionError::InvalidTarget(target));
        };
        let is_castle = content.kind() == ContentKind::Castle;

        if cost > self.turn.action_points {
            tracing::debug!(%target, cost, available = self.turn.action_points, "clash rejected, not enough points");
            return Err(ActionError::InsufficientActionPoints {
                required: cost,
                available: self.turn.action_points,
            });
        }

        self.turn.spend(cost);
        if is_castle {
            self.turn.declare_winner(player);
            tracing::info!(%player, castle = %target, "castle captured");
        }

        self.destroy_content(target);
        self.place_unit(player, target);

        Ok(cost)
    }

    fn place_unit(&mut self, player: Player, target: Coord) {
        let unit = self.factory.create_unit(player);
        self.board.place_content(target, unit);
        self.armies[player].insert(target);
    }

    /// Remove whatever sits on `target` along with its army bookkeeping.
    fn destroy_content(&mut self, target: Coord) {
        if let Some(content) = self.board.remove_content(target) {
            if let Some(owner) = content.owner() {
                self.armies[owner].remove(target);
            }
        }
    }

    fn prune_all(&mut self) -> Vec<Coord> {
        let mut pruned = Vec::new();
        for player in Player::all() {
            let castle = self.config.castles[player];
            pruned.extend(prune_disconnected(
                &mut self.board,
                &mut self.armies[player],
                player,
                castle,
            ));
        }
        pruned.sort_unstable();
        pruned
    }

    fn prepare_next_round(&mut self) {
        if self.turn.is_over() {
            self.candidates.clear();
            return;
        }

        if self.turn.action_points == 0 {
            let action_points = self.random.action_points();
            self.turn.switch_player(action_points);
            tracing::info!(
                player = %self.turn.active_player,
                action_points,
                turn = self.turn.turn_number,
                "turn passed"
            );
        }

        self.candidates = Candidates::generate(&self.board, self.turn.active_player);
    }

    // === Queries ===

    /// Empty cells the active player can move into this round.
    #[must_use]
    pub fn current_move_targets(&self) -> &FxHashSet<Coord> {
        self.candidates.moves()
    }

    /// Enemy cells the active player can clash this round.
    #[must_use]
    pub fn current_clash_targets(&self) -> &FxHashSet<Coord> {
        self.candidates.clashes()
    }

    /// Current phase.
    #[must_use]
    pub fn current_phase(&self) -> Phase {
        self.turn.phase()
    }

    /// Check if the active player can still do anything this round.
    ///
    /// False when every candidate is a clash the budget cannot cover, or
    /// there are no candidates at all.
    #[must_use]
    pub fn has_affordable_action(&self) -> bool {
        if self.is_over() {
            return false;
        }
        !self.candidates.moves().is_empty()
            || self.candidates.clashes().iter().any(|&coord| {
                self.board
                    .content_at(coord)
                    .and_then(|content| content.clash_cost())
                    .is_some_and(|cost| cost <= self.turn.action_points)
            })
    }

    /// Highlight state of `coord` for this round.
    #[must_use]
    pub fn tile_view(&self, coord: Coord) -> TileView {
        self.candidates.view_of(coord)
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Configuration the current game was started from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Turn bookkeeping.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Cells holding `player`'s units.
    #[must_use]
    pub fn army(&self, player: Player) -> &ArmySet {
        &self.armies[player]
    }

    /// Configured castle cell of `player`.
    #[must_use]
    pub fn castle(&self, player: Player) -> Coord {
        self.config.castles[player]
    }

    /// Winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.turn.winner()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Committed actions since the game started.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Content;
    use crate::core::{ClashCosts, ScriptedSource};

    fn scripted(config: GameConfig, points: &[u32]) -> TurnEngine<StandardContentFactory, ScriptedSource> {
        let factory = StandardContentFactory::new(config.clash_costs);
        TurnEngine::initialize(config, factory, ScriptedSource::new(points.iter().copied(), 1))
            .unwrap()
    }

    #[test]
    fn test_initial_position() {
        let engine = scripted(GameConfig::new(5), &[4]);

        assert_eq!(
            engine.current_phase(),
            Phase::InProgress { player: Player::Red, action_points: 4 }
        );
        assert!(engine.board().content_at(Coord::new(0, 0)).is_some_and(|c| c.is_castle_of(Player::Red)));
        assert!(engine.board().content_at(Coord::new(4, 4)).is_some_and(|c| c.is_castle_of(Player::Blue)));
        assert_eq!(engine.current_move_targets().len(), 3);
        assert!(engine.current_clash_targets().is_empty());
        assert!(engine.army(Player::Red).is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_obstacles_placed_on_empty_cells() {
        let config = GameConfig::new(4).with_obstacles(10);
        let engine = scripted(config, &[3]);

        let obstacles = engine
            .board()
            .cells()
            .filter(|c| c.content() == Some(&Content::Obstacle))
            .count();
        assert_eq!(obstacles, 10);
        assert!(engine.board().content_at(Coord::new(0, 0)).is_some_and(|c| c.is_castle_of(Player::Red)));
        assert!(engine.board().content_at(Coord::new(3, 3)).is_some_and(|c| c.is_castle_of(Player::Blue)));
    }

    #[test]
    fn test_full_obstacle_capacity_terminates() {
        // 3x3: 9 cells, 2 castles, 6 obstacles is the maximum
        let config = GameConfig::new(3).with_obstacles(6);
        let engine = scripted(config, &[1]);

        let empty = engine.board().cells().filter(|c| c.is_empty()).count();
        assert_eq!(empty, 1);
    }

    #[test]
    fn test_move_spends_one_point() {
        let mut engine = scripted(GameConfig::new(5), &[2]);

        let effect = engine.submit_action(Coord::new(1, 1)).unwrap();

        assert_eq!(effect.kind, ActionKind::Move);
        assert_eq!(effect.cost, 1);
        assert!(effect.pruned.is_empty());
        assert_eq!(effect.phase, Phase::InProgress { player: Player::Red, action_points: 1 });
        assert!(engine.army(Player::Red).contains(Coord::new(1, 1)));
        assert!(engine.current_move_targets().contains(&Coord::new(2, 2)));
        assert!(!engine.current_move_targets().contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_turn_passes_on_empty_budget() {
        let mut engine = scripted(GameConfig::new(5), &[1, 5]);

        let effect = engine.submit_action(Coord::new(0, 1)).unwrap();

        assert_eq!(effect.phase, Phase::InProgress { player: Player::Blue, action_points: 5 });
        assert_eq!(engine.turn().turn_number, 2);
        assert!(engine.current_move_targets().contains(&Coord::new(3, 3)));
        assert!(!engine.current_move_targets().contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_invalid_target_leaves_state() {
        let mut engine = scripted(GameConfig::new(5), &[3]);
        let moves = engine.current_move_targets().clone();

        assert_eq!(
            engine.submit_action(Coord::new(3, 3)),
            Err(ActionError::InvalidTarget(Coord::new(3, 3)))
        );
        assert_eq!(
            engine.submit_action(Coord::new(0, 0)),
            Err(ActionError::InvalidTarget(Coord::new(0, 0)))
        );
        assert_eq!(
            engine.submit_action(Coord::new(7, 7)),
            Err(ActionError::InvalidTarget(Coord::new(7, 7)))
        );

        assert_eq!(engine.current_move_targets(), &moves);
        assert_eq!(engine.current_phase(), Phase::InProgress { player: Player::Red, action_points: 3 });
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_castle_capture_wins() {
        // 2x2 board: castles touch diagonally, cheap castle
        let config = GameConfig::new(2).with_clash_costs(ClashCosts { unit: 1, castle: 1 });
        let mut engine = scripted(config, &[1]);

        assert!(engine.current_clash_targets().contains(&Coord::new(1, 1)));

        let effect = engine.submit_action(Coord::new(1, 1)).unwrap();

        assert_eq!(effect.kind, ActionKind::Clash);
        assert!(effect.ended_game());
        assert_eq!(engine.winner(), Some(Player::Red));
        assert!(engine.board().content_at(Coord::new(1, 1)).is_some_and(|c| c.is_unit_of(Player::Red)));
        assert!(engine.army(Player::Red).contains(Coord::new(1, 1)));
        assert!(engine.current_move_targets().is_empty());
        assert!(engine.current_clash_targets().is_empty());

        assert_eq!(
            engine.submit_action(Coord::new(0, 1)),
            Err(ActionError::GameAlreadyOver { winner: Player::Red })
        );
    }

    #[test]
    fn test_reset_restores_opening() {
        let mut engine = scripted(GameConfig::new(5), &[3, 2]);
        engine.submit_action(Coord::new(0, 1)).unwrap();

        engine.reset(GameConfig::new(6).starting_with(Player::Blue)).unwrap();

        assert_eq!(engine.board().size(), 6);
        assert!(engine.army(Player::Red).is_empty());
        assert!(engine.history().is_empty());
        assert_eq!(engine.current_phase(), Phase::InProgress { player: Player::Blue, action_points: 2 });
        assert!(engine.current_move_targets().contains(&Coord::new(4, 4)));
    }

    #[test]
    fn test_failed_reset_keeps_game() {
        let mut engine = scripted(GameConfig::new(5), &[3]);
        engine.submit_action(Coord::new(0, 1)).unwrap();

        let bad = GameConfig::new(5).with_castle(Player::Blue, Coord::new(0, 0));
        assert_eq!(engine.reset(bad), Err(ConfigError::DuplicateCastle(Coord::new(0, 0))));

        assert_eq!(engine.board().size(), 5);
        assert!(engine.army(Player::Red).contains(Coord::new(0, 1)));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new(3).with_obstacles(7);
        assert_eq!(
            TurnEngine::new(config, 0).unwrap_err(),
            ConfigError::TooManyObstacles { requested: 7, max: 6 }
        );
    }

    #[test]
    fn test_tile_view_tracks_candidates() {
        let engine = scripted(GameConfig::new(5), &[3]);

        assert_eq!(engine.tile_view(Coord::new(1, 1)), TileView::Move);
        assert_eq!(engine.tile_view(Coord::new(0, 0)), TileView::Default);
        assert_eq!(engine.tile_view(Coord::new(2, 2)), TileView::Default);
    }

    #[test]
    fn test_has_affordable_action() {
        // 2x2 with one obstacle leaves a single empty cell
        let config = GameConfig::new(2).with_obstacles(1);
        let mut engine = scripted(config, &[1, 1]);
        assert!(engine.has_affordable_action());

        let empty = engine
            .board()
            .cells()
            .find(|c| c.is_empty())
            .map(|c| c.coord())
            .unwrap();
        engine.submit_action(empty).unwrap();

        // Blue has 1 point, only clashes costing 2 and 5 are left
        assert_eq!(engine.current_phase(), Phase::InProgress { player: Player::Blue, action_points: 1 });
        assert!(engine.current_move_targets().is_empty());
        assert_eq!(engine.current_clash_targets().len(), 2);
        assert!(!engine.has_affordable_action());
    }
}
