//! Board and move store.
//!
//! The board is a fixed `ROWS x COLS` grid holding at most one move per
//! cell. A cell, once occupied, is never reassigned; the only way to change
//! the board is [`Board::record`]. Alongside the grid the board keeps, for
//! each player, the number of moves made and the most recent move.
//!
//! Coordinates are 0-based `(row, column)` with an exclusive upper bound:
//! `row < ROWS` and `col < COLS`. Anything else is off the board and is
//! reported as "no move" by the query methods.

use std::fmt;

use thiserror::Error;

use crate::constants::{BOARD_CELLS, COLS, COMPUTER_MARK, EMPTY, HUMAN_MARK, PLACEHOLDER, ROWS};

/// A point on the board as `(row, column)`.
pub type Point = (usize, usize);

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The character this player's moves are rendered with.
    #[inline]
    pub fn mark(self) -> char {
        match self {
            Player::Human => HUMAN_MARK,
            Player::Computer => COMPUTER_MARK,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Computer => write!(f, "computer"),
        }
    }
}

/// Owner tag carried by a [`Move`].
///
/// `NoPlayer` marks synthetic placeholder moves. Such moves are never
/// stored on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Human,
    Computer,
    NoPlayer,
}

impl Owner {
    /// The player behind this tag, or `None` for `NoPlayer`.
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Human => Some(Player::Human),
            Owner::Computer => Some(Player::Computer),
            Owner::NoPlayer => None,
        }
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Owner::Human,
            Player::Computer => Owner::Computer,
        }
    }
}

/// A move: a board point plus the owner tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub owner: Owner,
}

impl Move {
    pub fn new(row: usize, col: usize, owner: impl Into<Owner>) -> Self {
        Self {
            row,
            col,
            owner: owner.into(),
        }
    }

    /// A placeholder move at the given point.
    pub fn placeholder(row: usize, col: usize) -> Self {
        Self::new(row, col, Owner::NoPlayer)
    }

    #[inline]
    pub fn point(&self) -> Point {
        (self.row, self.col)
    }

    /// The character this move renders as when building scan texts.
    pub fn sign(&self) -> char {
        match self.owner.player() {
            Some(player) => player.mark(),
            None => PLACEHOLDER,
        }
    }
}

/// Precondition violations when recording a move.
///
/// Ordinary rejections (occupied cell, off-board point, placeholder move)
/// are not errors: [`Board::record`] reports them as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// `NoPlayer` was given where a real player is required.
    #[error("player must be either human or computer")]
    InvalidPlayer,
    /// The declared owner and the owner carried by the move differ.
    #[error("owner mismatch: declared {declared:?}, move carries {actual:?}")]
    OwnerMismatch { declared: Owner, actual: Owner },
}

/// Per-player bookkeeping: number of moves and the most recent one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub count: usize,
    pub last: Option<Move>,
}

/// The move store.
#[derive(Clone)]
pub struct Board {
    cells: Vec<Option<Player>>,
    human: PlayerState,
    computer: PlayerState,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: vec![None; BOARD_CELLS],
            human: PlayerState::default(),
            computer: PlayerState::default(),
        }
    }

    fn idx(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    /// Whether `(row, col)` lies on the board.
    #[inline]
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < ROWS && col < COLS
    }

    /// Step from `pt` by a signed offset, returning `None` when the result
    /// leaves the board.
    pub fn offset(pt: Point, (dr, dc): (isize, isize)) -> Option<Point> {
        let row = pt.0.checked_add_signed(dr)?;
        let col = pt.1.checked_add_signed(dc)?;
        Self::in_bounds(row, col).then_some((row, col))
    }

    /// Owner of the cell at `(row, col)`, or `None` if empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.cells[Self::idx(row, col)]
    }

    /// The move stored at `(row, col)`, or `None` if empty or off the board.
    pub fn at(&self, row: usize, col: usize) -> Option<Move> {
        self.get(row, col).map(|player| Move::new(row, col, player))
    }

    /// Whether `(row, col)` is on the board and unoccupied.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        Self::in_bounds(row, col) && self.cells[Self::idx(row, col)].is_none()
    }

    /// Record a move for `owner`.
    ///
    /// Returns `Ok(true)` when the move was stored, `Ok(false)` when it was
    /// rejected (off the board, cell already occupied, or a placeholder move)
    /// and the board is left unchanged.
    ///
    /// # Errors
    /// - [`MoveError::InvalidPlayer`] if `owner` is `NoPlayer`
    /// - [`MoveError::OwnerMismatch`] if `mv.owner` differs from `owner`
    pub fn record(&mut self, owner: Owner, mv: Move) -> Result<bool, MoveError> {
        let Some(player) = owner.player() else {
            return Err(MoveError::InvalidPlayer);
        };
        if !self.is_open(mv.row, mv.col) || mv.owner == Owner::NoPlayer {
            return Ok(false);
        }
        if mv.owner != owner {
            return Err(MoveError::OwnerMismatch {
                declared: owner,
                actual: mv.owner,
            });
        }

        self.cells[Self::idx(mv.row, mv.col)] = Some(player);
        let state = self.state_mut(player);
        state.count += 1;
        state.last = Some(mv);
        Ok(true)
    }

    /// All moves recorded for `player`, in row-major board order.
    pub fn moves_of(&self, player: Player) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(player))
            .map(|(i, _)| Move::new(i / COLS, i % COLS, player))
            .collect()
    }

    pub fn state(&self, player: Player) -> &PlayerState {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }

    fn state_mut(&mut self, player: Player) -> &mut PlayerState {
        match player {
            Player::Human => &mut self.human,
            Player::Computer => &mut self.computer,
        }
    }

    #[inline]
    pub fn move_count(&self, player: Player) -> usize {
        self.state(player).count
    }

    #[inline]
    pub fn last_move(&self, player: Player) -> Option<Move> {
        self.state(player).last
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.human.count + self.computer.count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == BOARD_CELLS
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = match self.get(row, col) {
                    Some(player) => player.mark(),
                    None => EMPTY,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
