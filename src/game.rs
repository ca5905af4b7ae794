//! Game session: the boundary a user interface talks to.
//!
//! A [`Game`] owns one [`Engine`] (and through it the board and pattern
//! cache). The UI submits human moves, checks for a winner, and asks for
//! the computer's reply. [`Game::play_turn`] bundles those steps into the
//! usual click-handler sequence:
//!
//! ```text
//! human move -> human won? -> computer move -> computer won? / tie
//! ```
//!
//! Once a win or a tie has been reached the session refuses further moves
//! until [`Game::new_game`] is called.
//!
//! ## Example
//!
//! ```
//! use five_row::engine::Difficulty;
//! use five_row::game::{Game, TurnOutcome};
//!
//! let mut game = Game::new(Difficulty::Hard);
//! match game.play_turn(10, 10) {
//!     TurnOutcome::ComputerMoved(mv) => println!("computer at {} {}", mv.row, mv.col),
//!     other => println!("{other:?}"),
//! }
//! ```

use tracing::{debug, info, warn};

use crate::board::{Board, Move, Owner, Player};
use crate::engine::{Difficulty, Engine};

/// Shown when the human completes a run.
pub const WIN_MESSAGE: &str = "Congratulations. You won!!";

/// Shown when the computer completes a run.
pub const GAME_OVER_MESSAGE: &str = "Game over! Try again.";

/// Shown when no move is left.
pub const TIE_MESSAGE: &str = "Tie game: no winner.";

/// What happened during one [`Game::play_turn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The human move was not accepted; nothing changed.
    Rejected,
    /// The human move completed a run.
    HumanWins,
    /// The computer replied and the game goes on.
    ComputerMoved(Move),
    /// The computer's reply completed a run.
    ComputerWins(Move),
    /// No cell was left for the computer.
    Tie,
}

impl TurnOutcome {
    /// End-of-game notification, if the turn ended the game.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TurnOutcome::HumanWins => Some(WIN_MESSAGE),
            TurnOutcome::ComputerWins(_) => Some(GAME_OVER_MESSAGE),
            TurnOutcome::Tie => Some(TIE_MESSAGE),
            TurnOutcome::Rejected | TurnOutcome::ComputerMoved(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.message().is_some()
    }
}

/// One game between the human and the computer.
#[derive(Clone, Default)]
pub struct Game {
    engine: Engine,
    over: bool,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "new game");
        Self {
            engine: Engine::new(difficulty),
            over: false,
        }
    }

    /// Continue from a prepared engine, e.g. a position set up move by move.
    pub fn with_engine(engine: Engine) -> Self {
        let over = engine.is_winner(Player::Human)
            || engine.is_winner(Player::Computer)
            || engine.board().is_full();
        Self { engine, over }
    }

    /// Throw away the current board and start over.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        *self = Self::new(difficulty);
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    /// Whether the game has ended in a win or a tie.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Record a human move. Returns `false` if the cell is taken or off the
    /// board, or the game is already over.
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> bool {
        if self.over {
            debug!(row, col, "game is over, human move rejected");
            return false;
        }
        match self.engine.record(Owner::Human, Move::new(row, col, Player::Human)) {
            Ok(true) => {
                self.over = self.engine.is_winner(Player::Human);
                true
            }
            Ok(false) => {
                debug!(row, col, "human move rejected");
                false
            }
            Err(err) => {
                warn!(row, col, %err, "human move rejected");
                false
            }
        }
    }

    /// Select and record the computer's move. `None` means the board is
    /// full (the game is a tie) or the game was already over.
    pub fn request_computer_move(&mut self) -> Option<Move> {
        if self.over {
            return None;
        }
        let Some(mv) = self.engine.select_move(Player::Computer) else {
            self.over = true;
            return None;
        };
        match self.engine.record(Owner::Computer, mv) {
            Ok(true) => {
                self.over = self.engine.is_winner(Player::Computer);
                Some(mv)
            }
            Ok(false) => {
                warn!(row = mv.row, col = mv.col, "selected computer move was not open");
                None
            }
            Err(err) => {
                warn!(row = mv.row, col = mv.col, %err, "selected computer move was refused");
                None
            }
        }
    }

    pub fn check_winner(&self, player: Player) -> bool {
        self.engine.is_winner(player)
    }

    /// Play a full turn starting with the human move at `(row, col)`.
    ///
    /// Returns [`TurnOutcome::Rejected`] once the game is over.
    pub fn play_turn(&mut self, row: usize, col: usize) -> TurnOutcome {
        if !self.submit_human_move(row, col) {
            return TurnOutcome::Rejected;
        }
        if self.check_winner(Player::Human) {
            info!(row, col, "human wins");
            return TurnOutcome::HumanWins;
        }
        match self.request_computer_move() {
            None => {
                info!("tie");
                TurnOutcome::Tie
            }
            Some(mv) if self.check_winner(Player::Computer) => {
                info!(row = mv.row, col = mv.col, "computer wins");
                TurnOutcome::ComputerWins(mv)
            }
            Some(mv) => TurnOutcome::ComputerMoved(mv),
        }
    }
}
