//! Local window scanning around a single move.
//!
//! Given a reference point, four windows of [`WINDOW_LEN`] cells are cut
//! through it, one per [`Direction`], with the reference cell at
//! [`CENTER_OFFSET`]. Each window is rendered as a [`Line`]: player marks
//! for occupied cells, [`PLACEHOLDER`] for empty cells and [`EDGE`] for
//! cells beyond the board. Patterns are then matched with plain substring
//! search.
//!
//! Because a window only reaches `WIN_LENGTH - 1` cells away from the
//! reference point, any run through that point is fully visible in it.

use crate::board::{Board, Point};
use crate::constants::{CENTER_OFFSET, EDGE, PLACEHOLDER, WINDOW_LEN};

/// Result of matching patterns against board lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A pattern matched; playing at this point completes it.
    Found(Point),
    /// A pattern without placeholder matched: the run is already on the board.
    WinDetected,
    /// No pattern matched.
    NotFound,
}

/// The four line directions, each given by its forward step `(row, col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// "/" diagonal, bottom-left to top-right.
    Rising,
    /// "\" diagonal, top-left to bottom-right.
    Falling,
}

impl Direction {
    /// Scan order used by both the window and the full board scanner.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Rising,
        Direction::Falling,
    ];

    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Rising => (-1, 1),
            Direction::Falling => (1, 1),
        }
    }
}

/// A run of cells rendered as text, with the board point behind each
/// character (`None` for cells beyond the edge).
#[derive(Clone, Debug)]
pub struct Line {
    text: String,
    points: Vec<Option<Point>>,
}

impl Line {
    pub fn new(board: &Board, points: impl IntoIterator<Item = Option<Point>>) -> Self {
        let points: Vec<Option<Point>> = points.into_iter().collect();
        let text = points
            .iter()
            .map(|pt| match pt {
                Some((row, col)) => board.at(*row, *col).map_or(PLACEHOLDER, |mv| mv.sign()),
                None => EDGE,
            })
            .collect();
        Self { text, points }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Match a single pattern against this line.
    ///
    /// Only the first occurrence counts. For a pattern containing the
    /// placeholder, the board point under the placeholder is returned.
    pub fn locate(&self, pattern: &str) -> MoveOutcome {
        // Marks are ASCII, so byte offsets and cell offsets coincide.
        let Some(start) = self.text.find(pattern) else {
            return MoveOutcome::NotFound;
        };
        match pattern.find(PLACEHOLDER) {
            Some(slot) => match self.points[start + slot] {
                Some(pt) => MoveOutcome::Found(pt),
                None => MoveOutcome::NotFound,
            },
            None => MoveOutcome::WinDetected,
        }
    }
}

/// Cut the four windows centered on `center`, in [`Direction::ALL`] order.
pub fn segments(board: &Board, center: Point) -> [Line; 4] {
    Direction::ALL.map(|dir| {
        let (dr, dc) = dir.step();
        let points = (0..WINDOW_LEN).map(|i| {
            let t = i as isize - CENTER_OFFSET as isize;
            Board::offset(center, (dr * t, dc * t))
        });
        Line::new(board, points)
    })
}

/// Match `patterns` against the windows around `center`.
///
/// Windows are tried in direction order and, within a window, patterns in
/// the given order; the first match decides.
pub fn scan(board: &Board, center: Point, patterns: &[String]) -> MoveOutcome {
    for line in segments(board, center) {
        for pattern in patterns {
            let outcome = line.locate(pattern);
            if outcome != MoveOutcome::NotFound {
                return outcome;
            }
        }
    }
    MoveOutcome::NotFound
}
