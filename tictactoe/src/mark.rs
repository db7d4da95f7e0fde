use serde::{Deserialize, Serialize};

/// The mark a player puts on the board.
///
/// An empty cell is represented as `Option::<Mark>::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Moves first in every game, shown as `X`.
    First,
    /// Shown as `O`.
    Second,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The state of a game, derived from the board contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    FirstWon,
    SecondWon,
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// The mark that completed a line, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameState::FirstWon => Some(Mark::First),
            GameState::SecondWon => Some(Mark::Second),
            GameState::InProgress | GameState::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> GameState {
        match mark {
            Mark::First => GameState::FirstWon,
            Mark::Second => GameState::SecondWon,
        }
    }
}
