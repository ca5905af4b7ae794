//! Line-based text protocol for driving a game from another process.
//!
//! The protocol follows the shape of GTP (Go Text Protocol): one command
//! per line, an optional numeric id in front, and a reply of `=id message`
//! on success or `?id message` on failure, followed by a blank line. A UI
//! written in any language can play against the engine over stdin/stdout.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize [rows cols]` - Report the board size, or check a requested one
//! - `clear_board` - Start a new game at the current level
//! - `level <easy|medium|hard>` - Start a new game at the given level
//! - `play <row> <col>` - Record a human move
//! - `genmove` - Select and record a computer move (`row col`, or `tie`)
//! - `turn <row> <col>` - Human move plus computer reply (`win`, `loss row col`, `row col`, or `tie`)
//! - `winner <human|computer>` - Whether that player has won
//! - `showboard` - Print the board
//!
//! After a win or a tie, `play`, `genmove` and `turn` fail with
//! `game is over` until `clear_board` or `level` starts a new game.
//!
//! ## Example
//!
//! ```ignore
//! use five_row::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::board::Player;
use crate::constants::{COLS, ROWS};
use crate::engine::Difficulty;
use crate::game::{Game, TurnOutcome};

const GAME_OVER: &str = "game is over";

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "level",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
    "winner",
];

/// Protocol front end around one game session.
pub struct ProtocolEngine {
    game: Game,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    /// Create a protocol engine playing at the default level.
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            game: Game::new(difficulty),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    /// Parse `<row> <col>` arguments.
    fn parse_point(args: &[&str]) -> Result<(usize, usize), String> {
        let [row, col, ..] = args else {
            return Err("missing arguments".to_string());
        };
        match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Ok((row, col)),
            _ => Err("invalid coordinates".to_string()),
        }
    }

    fn parse_player(arg: &str) -> Option<Player> {
        match arg.to_lowercase().as_str() {
            "human" | "x" => Some(Player::Human),
            "computer" | "o" => Some(Player::Computer),
            _ => None,
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "execute");
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (true, format!("{ROWS} {COLS}"));
                }
                match Self::parse_point(args) {
                    Ok((ROWS, COLS)) => (true, String::new()),
                    Ok((rows, cols)) => (
                        false,
                        format!("unacceptable size, only {ROWS} {COLS} is supported (got {rows} {cols})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game.new_game(self.game.difficulty());
                (true, String::new())
            }

            "level" => {
                if args.is_empty() {
                    return (true, self.game.difficulty().to_string());
                }
                match args[0].parse::<Difficulty>() {
                    Ok(difficulty) => {
                        self.game.new_game(difficulty);
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "play" | "genmove" | "turn" if self.game.is_over() => {
                (false, GAME_OVER.to_string())
            }

            "play" => match Self::parse_point(args) {
                Ok((row, col)) => {
                    if self.game.submit_human_move(row, col) {
                        (true, String::new())
                    } else {
                        (false, "illegal move".to_string())
                    }
                }
                Err(message) => (false, message),
            },

            "genmove" => match self.game.request_computer_move() {
                Some(mv) => (true, format!("{} {}", mv.row, mv.col)),
                None => (true, "tie".to_string()),
            },

            "turn" => match Self::parse_point(args) {
                Ok((row, col)) => match self.game.play_turn(row, col) {
                    TurnOutcome::Rejected => (false, "illegal move".to_string()),
                    TurnOutcome::HumanWins => (true, "win".to_string()),
                    TurnOutcome::ComputerMoved(mv) => (true, format!("{} {}", mv.row, mv.col)),
                    TurnOutcome::ComputerWins(mv) => (true, format!("loss {} {}", mv.row, mv.col)),
                    TurnOutcome::Tie => (true, "tie".to_string()),
                },
                Err(message) => (false, message),
            },

            "winner" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match Self::parse_player(args[0]) {
                    Some(player) => (true, self.game.check_winner(player).to_string()),
                    None => (false, "player must be either human or computer".to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
