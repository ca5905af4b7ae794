//! Full board scanning.
//!
//! Where [`crate::window`] only looks at the cells around one move, the
//! sweep renders every complete line of the board: each row, each column
//! and every diagonal of both orientations, down to the one-cell diagonals
//! in the corners. It is the fallback for the hardest difficulty when the
//! local windows find nothing.
//!
//! Every window is a slice of some full line (with off-board cells masked
//! as edge characters that never match), so whatever a window scan finds
//! the sweep can find too.

use crate::board::{Board, Point};
use crate::constants::{COLS, ROWS};
use crate::window::{Direction, Line, MoveOutcome};

/// Start cells of all full lines running in `dir`.
fn starts(dir: Direction) -> Vec<Point> {
    match dir {
        Direction::Horizontal => (0..ROWS).map(|row| (row, 0)).collect(),
        Direction::Vertical => (0..COLS).map(|col| (0, col)).collect(),
        // "\" lines start on the top row or the left column.
        Direction::Falling => (0..COLS)
            .map(|col| (0, col))
            .chain((1..ROWS).map(|row| (row, 0)))
            .collect(),
        // "/" lines start on the left column or the bottom row.
        Direction::Rising => (0..ROWS)
            .map(|row| (row, 0))
            .chain((1..COLS).map(|col| (ROWS - 1, col)))
            .collect(),
    }
}

/// Walk from `start` in direction `dir` until the board edge.
fn walk(start: Point, dir: Direction) -> impl Iterator<Item = Option<Point>> {
    let step = dir.step();
    std::iter::successors(Some(start), move |&pt| Board::offset(pt, step)).map(Some)
}

/// Render every full line of the board running in `dir`.
pub fn lines(board: &Board, dir: Direction) -> Vec<Line> {
    starts(dir)
        .into_iter()
        .map(|start| Line::new(board, walk(start, dir)))
        .collect()
}

/// Match `patterns` against every line of the board.
///
/// Patterns are tried in order; for each pattern the directions are tried
/// in [`Direction::ALL`] order and lines within a direction from the top
/// left. The first match decides.
pub fn scan(board: &Board, patterns: &[String]) -> MoveOutcome {
    let all = Direction::ALL.map(|dir| lines(board, dir));
    for pattern in patterns {
        for line in all.iter().flatten() {
            let outcome = line.locate(pattern);
            if outcome != MoveOutcome::NotFound {
                return outcome;
            }
        }
    }
    MoveOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, Owner, Player};
    use crate::constants::{BOARD_CELLS, WIN_LENGTH};
    use crate::patterns::PatternCatalog;
    use crate::window;

    fn place(board: &mut Board, player: Player, points: &[Point]) {
        for &(row, col) in points {
            assert_eq!(board.record(Owner::from(player), Move::new(row, col, player)), Ok(true));
        }
    }

    #[test]
    fn test_lines_cover_every_cell_once_per_direction() {
        let board = Board::new();
        for dir in Direction::ALL {
            let lines = lines(&board, dir);
            let cells: usize = lines.iter().map(|l| l.text().len()).sum();
            assert_eq!(cells, BOARD_CELLS, "direction {dir:?}");
        }
    }

    #[test]
    fn test_line_counts() {
        let board = Board::new();
        assert_eq!(lines(&board, Direction::Horizontal).len(), ROWS);
        assert_eq!(lines(&board, Direction::Vertical).len(), COLS);
        assert_eq!(lines(&board, Direction::Rising).len(), ROWS + COLS - 1);
        assert_eq!(lines(&board, Direction::Falling).len(), ROWS + COLS - 1);
    }

    #[test]
    fn test_scan_finds_off_main_diagonal() {
        let mut board = Board::new();
        // "/" run near the bottom-right corner, far from the main diagonals.
        let run: Vec<Point> = (0..3).map(|i| (ROWS - 2 - i, COLS - 6 + i)).collect();
        place(&mut board, Player::Computer, &run);

        let mut catalog = PatternCatalog::new();
        let outcome = scan(&board, catalog.patterns(Player::Computer, 3));
        // "ZOOO": the placeholder sits one step before the run along the "/" line.
        assert_eq!(outcome, MoveOutcome::Found((ROWS - 1, COLS - 7)));
    }

    #[test]
    fn test_scan_translates_falling_diagonal() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[(4, 9), (5, 10), (6, 11), (7, 12)]);
        let mut catalog = PatternCatalog::new();
        let outcome = scan(&board, catalog.patterns(Player::Human, 4));
        assert_eq!(outcome, MoveOutcome::Found((3, 8)));
    }

    #[test]
    fn test_scan_detects_win_anywhere() {
        let mut board = Board::new();
        let run: Vec<Point> = (0..WIN_LENGTH).map(|i| (i + 2, 1)).collect();
        place(&mut board, Player::Human, &run);
        let winning = [PatternCatalog::winning_run(Player::Human)];
        assert_eq!(scan(&board, &winning), MoveOutcome::WinDetected);
    }

    #[test]
    fn test_scan_agrees_with_window() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[(0, 0), (1, 1), (2, 2), (6, 3), (7, 3)]);
        place(&mut board, Player::Computer, &[(3, 3), (5, 3), (1, 2), (2, 1)]);

        let mut catalog = PatternCatalog::new();
        for player in [Player::Human, Player::Computer] {
            for k in 1..WIN_LENGTH {
                let patterns = catalog.patterns(player, k).to_vec();
                for center in board.moves_of(player).iter().map(Move::point) {
                    if let MoveOutcome::Found(_) = window::scan(&board, center, &patterns) {
                        assert!(
                            matches!(scan(&board, &patterns), MoveOutcome::Found(_)),
                            "window match around {center:?} for {player} k={k} missed by sweep"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_scan_empty_board() {
        let board = Board::new();
        let mut catalog = PatternCatalog::new();
        assert_eq!(
            scan(&board, catalog.patterns(Player::Human, 1)),
            MoveOutcome::NotFound
        );
    }
}
