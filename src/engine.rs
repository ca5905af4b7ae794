//! Move selection and win detection.
//!
//! The engine owns the board and a pattern catalog and picks moves with a
//! fixed tier of heuristics, strongest first:
//!
//! 1. First move of a player: play next to the opponent's last move (or at
//!    [`CENTER`] on an empty board).
//! 2. Local windows: for run lengths from the difficulty's start down to 1,
//!    extend the player's own run around its last move, otherwise block the
//!    opponent's run around the opponent's last move.
//! 3. Full board sweep (Hard only): the same offense-then-defense loop over
//!    every line of the board.
//! 4. Fallback: the first open neighbor of any recorded move.
//!
//! When even the fallback finds nothing the board is full and the game is a
//! tie. There is no search: every decision is a deterministic function of
//! the board.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Move, MoveError, Owner, Player, Point};
use crate::constants::{ADJACENCY, CENTER, WIN_LENGTH};
use crate::patterns::PatternCatalog;
use crate::sweep;
use crate::window::{self, MoveOutcome};

/// Difficulty level, fixed for the whole game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Longest run length the local window search starts from.
    pub fn start_run_length(self) -> usize {
        match self {
            Difficulty::Easy => WIN_LENGTH - 3,
            Difficulty::Medium => WIN_LENGTH - 2,
            Difficulty::Hard => WIN_LENGTH - 1,
        }
    }

    /// Whether the full board sweep backs up the local search.
    pub fn sweeps(self) -> bool {
        self == Difficulty::Hard
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Where pattern matching looks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Reach {
    /// Windows around the owner's last move.
    Local,
    /// Every line of the board.
    Board,
}

/// Board, pattern cache and difficulty of one game.
#[derive(Clone)]
pub struct Engine {
    board: Board,
    catalog: PatternCatalog,
    difficulty: Difficulty,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            catalog: PatternCatalog::new(),
            difficulty,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Record a move on the board. See [`Board::record`].
    pub fn record(&mut self, owner: Owner, mv: Move) -> Result<bool, MoveError> {
        self.board.record(owner, mv)
    }

    /// Whether `player` has a winning run through its last move.
    ///
    /// Does not touch the board or the catalog.
    pub fn is_winner(&self, player: Player) -> bool {
        if self.board.move_count(player) < WIN_LENGTH {
            return false;
        }
        let Some(last) = self.board.last_move(player) else {
            return false;
        };
        let run = [PatternCatalog::winning_run(player)];
        window::scan(&self.board, last.point(), &run) == MoveOutcome::WinDetected
    }

    /// Choose the next move for `player`, or `None` if no cell is left.
    ///
    /// The returned move is not recorded.
    pub fn select_move(&mut self, player: Player) -> Option<Move> {
        let picked = if self.board.move_count(player) == 0 {
            self.opening_move(player)
        } else {
            self.move_by_patterns(player)
        };
        let picked = picked.or_else(|| self.default_move(player));
        match picked {
            Some(mv) => debug!(%player, row = mv.row, col = mv.col, "selected move"),
            None => debug!(%player, "no move left"),
        }
        picked
    }

    /// First move of `player`: next to the opponent's last move, or the
    /// center of an empty board.
    fn opening_move(&self, player: Player) -> Option<Move> {
        match self.board.last_move(player.opponent()) {
            Some(last) => self.move_near(player, last.point()),
            None => {
                let (row, col) = CENTER;
                self.board.is_open(row, col).then(|| Move::new(row, col, player))
            }
        }
    }

    /// First open neighbor of `reference` in [`ADJACENCY`] order.
    pub fn move_near(&self, player: Player, reference: Point) -> Option<Move> {
        ADJACENCY
            .iter()
            .filter_map(|&delta| Board::offset(reference, delta))
            .find(|&(row, col)| self.board.is_open(row, col))
            .map(|(row, col)| Move::new(row, col, player))
    }

    /// Pattern tiers: local windows, then (Hard only) the full board.
    fn move_by_patterns(&mut self, player: Player) -> Option<Move> {
        let start = self.difficulty.start_run_length();
        if let Some(mv) = self.offense_then_defense(player, start, Reach::Local) {
            return Some(mv);
        }
        if self.difficulty.sweeps() {
            return self.offense_then_defense(player, WIN_LENGTH - 1, Reach::Board);
        }
        None
    }

    /// For `k` from `start` down to 1, extend the player's own run if any
    /// pattern of length `k` completes, else block the opponent's.
    fn offense_then_defense(&mut self, player: Player, start: usize, reach: Reach) -> Option<Move> {
        let opponent = player.opponent();
        for k in (1..=start).rev() {
            if let Some((row, col)) = self.completion(player, k, reach) {
                debug!(%player, k, ?reach, row, col, "extending own run");
                return Some(Move::new(row, col, player));
            }
            if let Some((row, col)) = self.completion(opponent, k, reach) {
                debug!(%player, k, ?reach, row, col, "blocking opponent run");
                return Some(Move::new(row, col, player));
            }
        }
        None
    }

    /// Point completing one of `owner`'s length-`k` patterns, if any.
    fn completion(&mut self, owner: Player, k: usize, reach: Reach) -> Option<Point> {
        let outcome = match reach {
            Reach::Local => {
                let last = self.board.last_move(owner)?;
                window::scan(&self.board, last.point(), self.catalog.patterns(owner, k))
            }
            Reach::Board => sweep::scan(&self.board, self.catalog.patterns(owner, k)),
        };
        match outcome {
            MoveOutcome::Found(pt) => Some(pt),
            MoveOutcome::WinDetected | MoveOutcome::NotFound => None,
        }
    }

    /// First open neighbor of the player's own moves, then of the
    /// opponent's moves, each in row-major order.
    fn default_move(&self, player: Player) -> Option<Move> {
        let own = self.board.moves_of(player);
        let theirs = self.board.moves_of(player.opponent());
        own.iter()
            .chain(theirs.iter())
            .find_map(|mv| self.move_near(player, mv.point()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLS, ROWS};

    fn place(engine: &mut Engine, player: Player, points: &[Point]) {
        for &(row, col) in points {
            assert_eq!(
                engine.record(Owner::from(player), Move::new(row, col, player)),
                Ok(true)
            );
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_start_run_lengths() {
        assert_eq!(Difficulty::Easy.start_run_length(), 2);
        assert_eq!(Difficulty::Medium.start_run_length(), 3);
        assert_eq!(Difficulty::Hard.start_run_length(), 4);
        assert!(Difficulty::Hard.sweeps());
        assert!(!Difficulty::Medium.sweeps());
    }

    #[test]
    fn test_empty_board_opens_at_center() {
        let mut engine = Engine::new(Difficulty::Hard);
        assert_eq!(
            engine.select_move(Player::Computer),
            Some(Move::new(CENTER.0, CENTER.1, Player::Computer))
        );
    }

    #[test]
    fn test_first_move_goes_right_of_opponent() {
        let mut engine = Engine::new(Difficulty::Hard);
        place(&mut engine, Player::Human, &[(10, 10)]);
        assert_eq!(
            engine.select_move(Player::Computer),
            Some(Move::new(10, 11, Player::Computer))
        );
    }

    #[test]
    fn test_first_move_follows_adjacency_order() {
        let mut engine = Engine::new(Difficulty::Medium);
        // Right, left and down are taken; the reference move is recorded last.
        place(&mut engine, Player::Computer, &[(6, 7), (6, 5), (7, 6), (6, 6)]);
        assert_eq!(
            engine.select_move(Player::Human),
            Some(Move::new(5, 6, Player::Human))
        );
    }

    #[test]
    fn test_first_move_only_right_open() {
        let mut engine = Engine::new(Difficulty::Easy);
        let closed = [(6, 5), (7, 6), (5, 6), (7, 7), (5, 5), (5, 7), (7, 5)];
        place(&mut engine, Player::Computer, &closed);
        place(&mut engine, Player::Computer, &[(6, 6)]);
        assert_eq!(
            engine.select_move(Player::Human),
            Some(Move::new(6, 7, Player::Human))
        );
    }

    #[test]
    fn test_move_near_uses_column_zero() {
        let mut engine = Engine::new(Difficulty::Hard);
        place(&mut engine, Player::Human, &[(5, 2)]);
        assert_eq!(
            engine.move_near(Player::Computer, (5, 1)),
            Some(Move::new(5, 0, Player::Computer))
        );
        assert_eq!(
            engine.move_near(Player::Computer, (0, 0)),
            Some(Move::new(0, 1, Player::Computer))
        );
    }

    #[test]
    fn test_move_near_surrounded() {
        let mut engine = Engine::new(Difficulty::Hard);
        let ring: Vec<Point> = ADJACENCY
            .iter()
            .filter_map(|&d| Board::offset((3, 3), d))
            .collect();
        place(&mut engine, Player::Human, &ring);
        assert_eq!(engine.move_near(Player::Computer, (3, 3)), None);
    }

    #[test]
    fn test_winner_needs_full_run() {
        let mut engine = Engine::new(Difficulty::Hard);
        place(&mut engine, Player::Human, &[(3, 3), (4, 4), (5, 5), (6, 6)]);
        assert!(!engine.is_winner(Player::Human));
        place(&mut engine, Player::Human, &[(7, 7)]);
        assert!(engine.is_winner(Player::Human));
        assert!(!engine.is_winner(Player::Computer));
    }

    #[test]
    fn test_winner_requires_last_move_on_run() {
        let mut engine = Engine::new(Difficulty::Hard);
        place(&mut engine, Player::Computer, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        place(&mut engine, Player::Computer, &[(12, 12)]);
        // The run exists, but the check looks only around the latest move.
        assert!(!engine.is_winner(Player::Computer));
    }

    #[test]
    fn test_offense_before_defense() {
        let mut engine = Engine::new(Difficulty::Hard);
        place(&mut engine, Player::Human, &[(2, 2), (2, 3), (2, 4)]);
        place(&mut engine, Player::Computer, &[(8, 2), (8, 3), (8, 4)]);
        // Both have an open three; the computer extends its own.
        assert_eq!(
            engine.select_move(Player::Computer),
            Some(Move::new(8, 1, Player::Computer))
        );
    }

    #[test]
    fn test_easy_misses_four_threat() {
        let human = [(5, 5), (5, 6), (5, 7), (5, 8)];
        let computer = [(10, 10), (10, 11)];

        let mut easy = Engine::new(Difficulty::Easy);
        place(&mut easy, Player::Computer, &computer);
        place(&mut easy, Player::Human, &human);
        assert_eq!(
            easy.select_move(Player::Computer),
            Some(Move::new(10, 9, Player::Computer))
        );

        let mut medium = Engine::new(Difficulty::Medium);
        place(&mut medium, Player::Computer, &computer);
        place(&mut medium, Player::Human, &human);
        assert_eq!(
            medium.select_move(Player::Computer),
            Some(Move::new(5, 4, Player::Computer))
        );
    }

    /// Both last moves boxed into corners so no window matches anything.
    fn boxed_corners(difficulty: Difficulty) -> Engine {
        let mut engine = Engine::new(difficulty);
        place(
            &mut engine,
            Player::Human,
            &[(ROWS - 1, COLS - 2), (ROWS - 2, COLS - 1), (ROWS - 2, COLS - 2), (0, 0)],
        );
        place(
            &mut engine,
            Player::Computer,
            &[(0, 1), (1, 0), (1, 1), (ROWS - 1, COLS - 1)],
        );
        engine
    }

    #[test]
    fn test_hard_falls_back_to_sweep() {
        let mut engine = boxed_corners(Difficulty::Hard);
        // The sweep finds the horizontal "OOZ" on row 1.
        assert_eq!(
            engine.select_move(Player::Computer),
            Some(Move::new(1, 2, Player::Computer))
        );
    }

    #[test]
    fn test_medium_skips_sweep() {
        let mut engine = boxed_corners(Difficulty::Medium);
        // Straight to the fallback: right of the first computer move.
        assert_eq!(
            engine.select_move(Player::Computer),
            Some(Move::new(0, 2, Player::Computer))
        );
    }

    #[test]
    fn test_default_move_uses_own_moves() {
        let mut engine = boxed_corners(Difficulty::Medium);
        // Human's own first move in row-major order is (0, 0), whose
        // neighbors are all taken; the next one is (ROWS - 2, COLS - 2).
        assert_eq!(
            engine.default_move(Player::Human),
            Some(Move::new(ROWS - 2, COLS - 3, Player::Human))
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut engine = Engine::new(Difficulty::Hard);
        for row in 0..ROWS {
            for col in 0..COLS {
                let player = if (col / 2 + row) % 2 == 0 {
                    Player::Human
                } else {
                    Player::Computer
                };
                place(&mut engine, player, &[(row, col)]);
            }
        }
        assert!(engine.board().is_full());
        assert!(!engine.is_winner(Player::Human));
        assert!(!engine.is_winner(Player::Computer));
        assert_eq!(engine.select_move(Player::Computer), None);
        assert_eq!(engine.select_move(Player::Human), None);
    }
}
