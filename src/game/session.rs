//! Game session.
//!
//! `Game` is the handle a front end drives. It owns the configuration, the
//! turn coordinator and the dice, so several games can run side by side
//! without sharing anything.
//!
//! ```
//! use rust_backgammon::core::{Color, GameConfig};
//! use rust_backgammon::game::Game;
//!
//! let mut game = Game::seeded(GameConfig::new(42)).unwrap();
//! assert_eq!(game.coordinator().current_color(), Color::White);
//!
//! game.roll().unwrap();
//! let action = game.legal_actions()[0];
//! game.play(action).unwrap();
//! assert_eq!(game.history().len(), 1);
//! ```

use im::Vector;

use crate::board::{Board, LayoutError};
use crate::core::{Action, ActionRecord, GameConfig, GameRng};
use crate::dice::{DiceSource, RandomDice, Roll};
use crate::rules::GameResult;
use crate::turn::{MoveError, MoveOutcome, TurnCoordinator, TurnPhase};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game<D: DiceSource> {
    config: GameConfig,
    start: Board,
    coordinator: TurnCoordinator,
    dice: D,
}

impl Game<RandomDice> {
    /// Create a game whose dice are seeded from `config.seed`.
    pub fn seeded(config: GameConfig) -> Result<Self, LayoutError> {
        let dice = RandomDice::new(config.seed);
        Self::new(config, dice)
    }
}

impl<D: DiceSource> Game<D> {
    /// Create a game from a configuration and a dice source.
    ///
    /// Fails if the configured layout does not build.
    pub fn new(config: GameConfig, dice: D) -> Result<Self, LayoutError> {
        let start = config.layout.build()?;
        let coordinator = TurnCoordinator::new(start.clone(), config.first_to_move);
        Ok(Self {
            config,
            start,
            coordinator,
            dice,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn coordinator(&self) -> &TurnCoordinator {
        &self.coordinator
    }

    /// Mutable access for requests `play` does not cover, such as
    /// `switch_turn`.
    pub fn coordinator_mut(&mut self) -> &mut TurnCoordinator {
        &mut self.coordinator
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.coordinator.board()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        self.coordinator.history()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.coordinator.result()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.coordinator.legal_actions()
    }

    // === Play ===

    /// Roll the dice for the current color.
    pub fn roll(&mut self) -> Result<Roll, MoveError> {
        self.coordinator.roll_with(&mut self.dice)
    }

    /// Apply one action for the current color.
    pub fn play(&mut self, action: Action) -> Result<MoveOutcome, MoveError> {
        self.coordinator.apply(action)
    }

    /// Start over from the configured layout. The dice keep their state.
    pub fn new_game(&mut self) {
        self.coordinator = TurnCoordinator::new(self.start.clone(), self.config.first_to_move);
    }

    /// Play one whole turn with actions picked uniformly by `rng`.
    ///
    /// Rolls first if needed. Returns the result when the turn ended the game.
    pub fn play_random_turn(&mut self, rng: &mut GameRng) -> Result<Option<GameResult>, MoveError> {
        if self.coordinator.phase() == TurnPhase::AwaitingRoll {
            self.roll()?;
        }

        while self.coordinator.phase() == TurnPhase::Moving {
            let actions = self.legal_actions();
            let Some(index) = rng.pick_index(actions.len()) else {
                break;
            };
            let outcome = self.play(actions[index])?;
            if outcome.turn_ended {
                break;
            }
        }

        Ok(self.result())
    }

    /// Play random turns until the game ends or `max_turns` have passed.
    pub fn play_out(&mut self, rng: &mut GameRng, max_turns: u32) -> Result<Option<GameResult>, MoveError> {
        for _ in 0..max_turns {
            if let Some(result) = self.play_random_turn(rng)? {
                return Ok(Some(result));
            }
        }
        Ok(self.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;
    use crate::core::{Color, CHECKERS_PER_COLOR};
    use crate::dice::ScriptedDice;

    fn scripted(rolls: &[(u8, u8)]) -> ScriptedDice {
        ScriptedDice::new(rolls.iter().map(|&(a, b)| Roll::new(a, b).unwrap())).unwrap()
    }

    #[test]
    fn test_new_game_uses_config() {
        let config = GameConfig::new(3).with_first_to_move(Color::Black);
        let game = Game::seeded(config).unwrap();
        assert_eq!(game.coordinator().current_color(), Color::Black);
        assert_eq!(game.board(), &Board::new());
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_bad_layout_rejected() {
        let layout = Layout::empty().with_checkers(30, Color::White, 1);
        let config = GameConfig::new(0).with_layout(layout);
        assert_eq!(
            Game::seeded(config).err(),
            Some(LayoutError::PointOutOfRange(30))
        );
    }

    #[test]
    fn test_roll_and_play() {
        let mut game = Game::new(GameConfig::default(), scripted(&[(3, 1)])).unwrap();
        assert_eq!(game.play(Action::Move { from: 5, to: 8 }), Err(MoveError::NotRolled));

        assert_eq!(game.roll().unwrap().values(), (3, 1));
        assert_eq!(game.roll(), Err(MoveError::AlreadyRolled));

        game.play(Action::Move { from: 5, to: 8 }).unwrap();
        let outcome = game.play(Action::Move { from: 7, to: 8 }).unwrap();
        assert!(outcome.turn_ended);
        assert_eq!(game.coordinator().current_color(), Color::Black);
        assert_eq!(game.board().point(8).unwrap().count(), 2);
    }

    #[test]
    fn test_new_game_resets_position() {
        let layout = Layout::empty()
            .with_checkers(22, Color::White, 2)
            .with_checkers(3, Color::Black, 2);
        let config = GameConfig::new(0).with_layout(layout);
        let mut game = Game::new(config, scripted(&[(1, 1)])).unwrap();
        let start = game.board().clone();

        game.roll().unwrap();
        game.play(Action::Move { from: 22, to: 23 }).unwrap();
        assert_ne!(game.board(), &start);

        game.new_game();
        assert_eq!(game.board(), &start);
        assert!(game.history().is_empty());
        assert_eq!(game.coordinator().phase(), TurnPhase::AwaitingRoll);
    }

    #[test]
    fn test_random_turn_uses_all_dice_or_ends() {
        let mut game = Game::seeded(GameConfig::new(9)).unwrap();
        let mut rng = GameRng::new(9);

        game.play_random_turn(&mut rng).unwrap();
        assert_eq!(game.coordinator().current_color(), Color::Black);
        assert_eq!(game.coordinator().phase(), TurnPhase::AwaitingRoll);
        assert!(!game.history().is_empty());
        assert!(game.history().iter().all(|r| r.color == Color::White));
    }

    #[test]
    fn test_play_out_finishes() {
        let mut game = Game::seeded(GameConfig::new(17)).unwrap();
        let mut rng = GameRng::new(17);

        let result = game.play_out(&mut rng, 2_000).unwrap().expect("random game should finish");
        let board = game.board();
        assert_eq!(board.borne_off(result.winner), CHECKERS_PER_COLOR);
        assert!(board.is_valid());
        assert!(game.is_over());
        assert_eq!(game.roll(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_same_seeds_same_game() {
        let play = || {
            let mut game = Game::seeded(GameConfig::new(5)).unwrap();
            let mut rng = GameRng::new(6);
            game.play_out(&mut rng, 30).unwrap();
            game.history().clone()
        };
        assert_eq!(play(), play());
    }
}
