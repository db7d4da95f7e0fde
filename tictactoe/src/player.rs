use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Board, Mark};

/// Who decides the moves of a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are supplied from outside, e.g. typed in by a person.
    Human,
    /// Moves are picked by [`random_move()`].
    Bot,
}

/// One of the two participants of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    pub fn new(name: &str, mark: Mark, kind: PlayerKind) -> Self {
        Self {
            name: String::from(name),
            mark,
            kind,
        }
    }

    pub fn human(name: &str, mark: Mark) -> Self {
        Self::new(name, mark, PlayerKind::Human)
    }

    pub fn bot(name: &str, mark: Mark) -> Self {
        Self::new(name, mark, PlayerKind::Bot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    /// The move of a bot player. See [`random_move()`].
    pub fn bot_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<(usize, usize)> {
        debug_assert!(self.is_bot(), "{} is not a bot", self.name);
        random_move(board, rng)
    }
}

/// Picks one of the empty cells uniformly at random.
///
/// Returns `None` if the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    board.empty_cells().choose(rng).copied()
}
