use quickcheck::Arbitrary;

use crate::{Board, Mark};

/// A board reached through legal play from an empty board, stopping at the
/// first terminal state.
#[derive(Clone, Debug)]
pub struct ReachableBoard {
    pub board: Board,
    pub moves: Vec<(usize, usize, Mark)>,
}

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly 3x3, where games actually end in wins
        let dim = *g.choose(&[3, 3, 3, 5, 7]).unwrap();
        let mut board = Board::new(dim).unwrap();
        let num_moves = usize::arbitrary(g) % (dim * dim + 1);

        let mut moves = Vec::with_capacity(num_moves);
        let mut mark = Mark::First;
        for _ in 0..num_moves {
            if board.state().is_terminal() {
                break;
            }
            let empty = board.empty_cells();
            let &(row, col) = g.choose(&empty).unwrap();
            board.place(row, col, mark).unwrap();
            moves.push((row, col, mark));
            mark = mark.opponent();
        }

        ReachableBoard { board, moves }
    }
}
