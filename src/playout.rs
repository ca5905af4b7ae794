//! Random playouts against the engine.
//!
//! A [`RandomPlayer`] stands in for the human: it picks a random open cell
//! close to the stones already on the board. [`playout`] then alternates
//! random human moves with engine replies until the game ends. This backs
//! the `demo` command and gives the tests a cheap way to drive whole games.
//!
//! The generator is seeded, so a playout is reproducible from its seed.

use crate::board::{Board, Point};
use crate::constants::{BOARD_CELLS, CENTER, COLS, ROWS};
use crate::game::{Game, TurnOutcome};

/// How far from an occupied cell the random player looks for candidates.
const REACH: usize = 2;

/// Seeded random stand-in for the human player.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick an open cell within [`REACH`] of some stone, the center on an
    /// empty board, or `None` if the board is full.
    pub fn choose(&mut self, board: &Board) -> Option<Point> {
        if board.is_empty() {
            return Some(CENTER);
        }
        let candidates = near_stones(board);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.usize(..candidates.len())])
    }
}

/// Open cells within [`REACH`] of an occupied cell, in row-major order.
fn near_stones(board: &Board) -> Vec<Point> {
    let mut candidates = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            if !board.is_open(row, col) {
                continue;
            }
            let mut rows = row.saturating_sub(REACH)..=(row + REACH).min(ROWS - 1);
            let near = rows.any(|r| {
                let mut cols = col.saturating_sub(REACH)..=(col + REACH).min(COLS - 1);
                cols.any(|c| board.get(r, c).is_some())
            });
            if near {
                candidates.push((row, col));
            }
        }
    }
    candidates
}

/// Summary of a finished playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    /// The turn that ended the game.
    pub outcome: TurnOutcome,
    /// Number of human moves played.
    pub turns: usize,
}

/// Play random human moves against the engine until the game is over.
pub fn playout(game: &mut Game, player: &mut RandomPlayer) -> Playout {
    let mut turns = 0;
    while turns < BOARD_CELLS {
        let Some((row, col)) = player.choose(game.board()) else {
            break;
        };
        let outcome = game.play_turn(row, col);
        turns += 1;
        if outcome.is_game_over() {
            return Playout { outcome, turns };
        }
    }
    Playout {
        outcome: TurnOutcome::Tie,
        turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::engine::Difficulty;

    #[test]
    fn test_choose_on_empty_board() {
        let mut player = RandomPlayer::with_seed(7);
        assert_eq!(player.choose(&Board::new()), Some(CENTER));
    }

    #[test]
    fn test_choose_stays_near_stones() {
        let mut game = Game::new(Difficulty::Hard);
        game.play_turn(10, 10);
        let mut player = RandomPlayer::with_seed(42);
        for _ in 0..50 {
            let (row, col) = player.choose(game.board()).unwrap();
            assert!(game.board().is_open(row, col));
            assert!(row.abs_diff(10) <= REACH + 1 && col.abs_diff(10) <= REACH + 1);
        }
    }

    #[test]
    fn test_playout_is_reproducible() {
        let run = |seed| {
            let mut game = Game::new(Difficulty::Medium);
            let result = playout(&mut game, &mut RandomPlayer::with_seed(seed));
            (result, game.board().to_string())
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn test_playout_ends_the_game() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut game = Game::new(difficulty);
            let result = playout(&mut game, &mut RandomPlayer::with_seed(11));
            assert!(result.outcome.is_game_over());
            match result.outcome {
                TurnOutcome::HumanWins => assert!(game.check_winner(Player::Human)),
                TurnOutcome::ComputerWins(_) => assert!(game.check_winner(Player::Computer)),
                _ => {}
            }
        }
    }
}
