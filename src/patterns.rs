//! Pattern catalog for near-complete runs.
//!
//! A pattern for player `P` and run length `k` is a string of `k` copies of
//! `P`'s mark with a single [`PLACEHOLDER`] inserted somewhere. For `k = 3`
//! and mark `X` the catalog holds:
//!
//! ```text
//! ZXXX  XZXX  XXZX  XXXZ
//! ```
//!
//! Finding one of these in a line of the board means that playing at the
//! placeholder extends `P`'s run to `k + 1`. The engine uses the same
//! strings for offense (its own patterns) and defense (the opponent's).
//!
//! Patterns are built on first request and cached per `(player, k)` for the
//! lifetime of the catalog. Each game session owns its own catalog.

use std::collections::HashMap;

use crate::board::Player;
use crate::constants::{PLACEHOLDER, WIN_LENGTH};

/// Lazily-filled cache of patterns keyed by player and run length.
#[derive(Clone, Debug, Default)]
pub struct PatternCatalog {
    cache: HashMap<(Player, usize), Vec<String>>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patterns with `k` marks of `player` and one placeholder.
    ///
    /// Valid run lengths are `1..WIN_LENGTH`; anything else yields no
    /// patterns.
    pub fn patterns(&mut self, player: Player, k: usize) -> &[String] {
        if k == 0 || k >= WIN_LENGTH {
            return &[];
        }
        self.cache
            .entry((player, k))
            .or_insert_with(|| create_patterns(player.mark(), k))
    }

    /// The winning run for `player`: `WIN_LENGTH` marks, no placeholder.
    pub fn winning_run(player: Player) -> String {
        std::iter::repeat_n(player.mark(), WIN_LENGTH).collect()
    }

    /// Number of `(player, k)` entries built so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Insert the placeholder at every position `0..=k` of a run of `k` marks.
fn create_patterns(mark: char, k: usize) -> Vec<String> {
    let run: String = std::iter::repeat_n(mark, k).collect();
    (0..=k)
        .map(|i| {
            let mut pattern = run.clone();
            pattern.insert(i, PLACEHOLDER);
            pattern
        })
        .collect()
}
