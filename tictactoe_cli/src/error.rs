use tictactoe::IllegalPlacement;

/// Why a line of human input could not be used as a move.
#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    /// The line was not two non-negative integers.
    Malformed { line: String },
    IllegalPlacement(IllegalPlacement),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::IllegalPlacement(err) => Some(err),
            InputError::Malformed { .. } => None,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Malformed { line } => {
                write!(f, "Expected two numbers separated by whitespace, got '{}'", line)
            }
            InputError::IllegalPlacement(err) => write!(f, "The move cannot be played: {}", err),
        }
    }
}

/// A move that the game refused to apply.
///
/// Unlike [`InputError`], this is not something to re-prompt for: it means
/// that a bot or the caller broke the rules of the controller.
#[derive(Debug)]
pub enum IllegalMove {
    GameOver,
    NoEmptyCell,
    IllegalPlacement { player: String, err: IllegalPlacement },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::IllegalPlacement { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "Tried to move after the game has ended"),
            IllegalMove::NoEmptyCell => write!(f, "Asked for a bot move on a full board"),
            IllegalMove::IllegalPlacement { player, err: _ } => {
                write!(f, "{} tried to place a mark illegally", player)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tictactoe::Mark;

    use super::*;

    #[test]
    fn illegal_placement_message_names_the_reason() {
        let err = InputError::IllegalPlacement(IllegalPlacement::Occupied {
            row: 0,
            col: 1,
            existing: Mark::First,
        });
        assert_eq!(
            err.to_string(),
            "The move cannot be played: Cell (0, 1) is already occupied by X"
        );

        let err = InputError::IllegalPlacement(IllegalPlacement::OutOfBounds {
            row: 4,
            col: 0,
            dim: 3,
        });
        assert!(err.to_string().ends_with("Cell (4, 0) is outside of the 3x3 board"));
    }
}
