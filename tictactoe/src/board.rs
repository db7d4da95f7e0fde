mod error;

pub use error::*;

use serde::{Deserialize, Serialize};

use crate::{GameState, Mark};

/// A single cell on the board, including coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub mark: Option<Mark>,
}

/// A square tic-tac-toe board with an odd dimension of at least 3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    /// Row-major. A cell is only ever written once, from `None` to `Some`.
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// The dimension must be odd so that the board has a center cell and
    /// both diagonals cross it.
    pub fn new(dim: usize) -> Result<Self, InvalidDimension> {
        if dim < 3 || dim % 2 == 0 {
            return Err(InvalidDimension { dim });
        }
        Ok(Self {
            dim,
            cells: vec![None; dim * dim],
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.dim && col < self.dim
    }

    /// The mark at the given cell.
    ///
    /// Panics if the cell is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        assert!(
            self.is_in_bounds(row, col),
            "({}, {}) is out of bounds",
            row,
            col
        );
        self.cells[row * self.dim + col]
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(idx, &mark)| Cell {
            row: idx / self.dim,
            col: idx % self.dim,
            mark,
        })
    }

    /// The coordinates of all cells without a mark, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|cell| cell.mark.is_none())
            .map(|cell| (cell.row, cell.col))
            .collect()
    }

    /// How many cells carry a mark.
    pub fn num_marks(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Puts a mark into an empty cell.
    ///
    /// On error, the board is left unchanged.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalPlacement> {
        if !self.is_in_bounds(row, col) {
            return Err(IllegalPlacement::OutOfBounds {
                row,
                col,
                dim: self.dim,
            });
        }
        let cell = &mut self.cells[row * self.dim + col];
        if let Some(existing) = *cell {
            return Err(IllegalPlacement::Occupied { row, col, existing });
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Whether `mark` owns a complete row, column or diagonal.
    ///
    /// Only full-length lines count, regardless of the dimension.
    pub fn has_line(&self, mark: Mark) -> bool {
        let n = self.dim;
        let owns = |row: usize, col: usize| self.cells[row * n + col] == Some(mark);

        let any_row = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
        let any_col = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
        let main_diagonal = (0..n).all(|i| owns(i, i));
        let anti_diagonal = (0..n).all(|i| owns(i, n - 1 - i));

        any_row || any_col || main_diagonal || anti_diagonal
    }

    /// Derives the game state from the current contents.
    ///
    /// A line for [`Mark::First`] is checked before one for [`Mark::Second`].
    pub fn state(&self) -> GameState {
        for mark in [Mark::First, Mark::Second] {
            if self.has_line(mark) {
                return GameState::won_by(mark);
            }
        }
        if self.is_full() {
            GameState::Draw
        } else {
            GameState::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachableBoard;

    fn board_with(dim: usize, first: &[(usize, usize)], second: &[(usize, usize)]) -> Board {
        let mut board = Board::new(dim).unwrap();
        for &(row, col) in first {
            board.place(row, col, Mark::First).unwrap();
        }
        for &(row, col) in second {
            board.place(row, col, Mark::Second).unwrap();
        }
        board
    }

    quickcheck! {
        fn at_most_one_winner(input: ReachableBoard) -> bool {
            !(input.board.has_line(Mark::First) && input.board.has_line(Mark::Second))
        }

        fn draw_only_on_full_board_without_lines(input: ReachableBoard) -> bool {
            let board = &input.board;
            let is_draw = board.state() == GameState::Draw;
            let expected = board.is_full()
                && !board.has_line(Mark::First)
                && !board.has_line(Mark::Second);
            is_draw == expected
        }

        fn rejected_placement_leaves_board_unchanged(input: ReachableBoard, row: usize, col: usize) -> bool {
            let mut board = input.board.clone();
            let dim = board.dim();
            // Also reaches cells just outside the board
            let (row, col) = (row % (dim + 2), col % (dim + 2));
            match board.place(row, col, Mark::Second) {
                Ok(()) => board.num_marks() == input.board.num_marks() + 1,
                Err(_) => board == input.board,
            }
        }

        fn marks_and_empty_cells_add_up(input: ReachableBoard) -> bool {
            let board = &input.board;
            board.num_marks() + board.empty_cells().len() == board.dim() * board.dim()
                && board.num_marks() == input.moves.len()
        }
    }

    #[test]
    fn rejects_invalid_dimensions() {
        for dim in [0, 1, 2, 4, 6, 10] {
            assert_eq!(Board::new(dim), Err(InvalidDimension { dim }));
        }
        for dim in [3, 5, 7, 9] {
            let board = Board::new(dim).unwrap();
            assert_eq!(board.empty_cells().len(), dim * dim);
            assert_eq!(board.state(), GameState::InProgress);
        }
    }

    #[test]
    fn place_distinguishes_errors() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::First).unwrap();
        assert_eq!(
            board.place(1, 1, Mark::Second),
            Err(IllegalPlacement::Occupied {
                row: 1,
                col: 1,
                existing: Mark::First
            })
        );
        assert_eq!(
            board.place(3, 0, Mark::Second),
            Err(IllegalPlacement::OutOfBounds {
                row: 3,
                col: 0,
                dim: 3
            })
        );
        assert_eq!(board.get(1, 1), Some(Mark::First));
        assert_eq!(board.num_marks(), 1);
    }

    #[test]
    fn top_row_wins_for_first() {
        let board = board_with(3, &[(0, 0), (0, 1), (0, 2)], &[]);
        assert_eq!(board.state(), GameState::FirstWon);
        assert!(!board.has_line(Mark::Second));
    }

    #[test]
    fn column_and_diagonals_win() {
        let board = board_with(3, &[], &[(0, 2), (1, 2), (2, 2)]);
        assert_eq!(board.state(), GameState::SecondWon);

        let board = board_with(5, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], &[]);
        assert_eq!(board.state(), GameState::FirstWon);

        let board = board_with(3, &[], &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(board.state(), GameState::SecondWon);
    }

    #[test]
    fn partial_lines_do_not_win_on_larger_boards() {
        let board = board_with(5, &[(0, 0), (0, 1), (0, 2)], &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(board.state(), GameState::InProgress);
    }

    #[test]
    fn full_board_without_lines_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_with(
            3,
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        assert_eq!(board.state(), GameState::Draw);
    }

    #[test]
    fn full_board_with_a_line_is_a_win() {
        // The main diagonal belongs to X here.
        let board = board_with(
            3,
            &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)],
            &[(0, 1), (1, 0), (1, 2), (2, 1)],
        );
        assert_eq!(board.state(), GameState::FirstWon);
    }

    #[test]
    fn cells_are_row_major() {
        let board = board_with(3, &[(1, 2)], &[]);
        let cell = board.cells().nth(5).unwrap();
        assert_eq!(
            cell,
            Cell {
                row: 1,
                col: 2,
                mark: Some(Mark::First)
            }
        );
    }
}
