use crate::Board;

/// Draws the board as a grid with row and column numbers.
///
/// ```text
///    0   1   2
/// 0  X │ O │
///   ───┼───┼───
/// 1    │ X │
///   ───┼───┼───
/// 2  O │   │ X
/// ```
pub fn visualize_board(board: &Board) -> String {
    let dim = board.dim();
    let width = format!("{}", dim - 1).len();

    let mut result = " ".repeat(width + 1);
    let header: Vec<String> = (0..dim).map(|col| format!("{:^3}", col)).collect();
    result += &header.join(" ");

    let separator = vec!["───"; dim].join("┼");
    for row in 0..dim {
        if row > 0 {
            result += &format!("\n{}{}", " ".repeat(width + 1), separator);
        }
        let cells: Vec<String> = (0..dim)
            .map(|col| match board.get(row, col) {
                Some(mark) => format!(" {} ", mark),
                None => String::from("   "),
            })
            .collect();
        result += &format!("\n{:>width$} {}", row, cells.join("│"), width = width);
    }
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
