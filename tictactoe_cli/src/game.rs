use std::io::{BufRead, Write};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tictactoe::{Board, GameState, IllegalPlacement, InvalidDimension, Mark, Player};
use tracing::{debug, info, trace};

use crate::error::{IllegalMove, InputError};

/// How long a bot pretends to think before its move is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotDelay {
    pub max: Duration,
    pub step: Duration,
}

impl BotDelay {
    pub const NONE: BotDelay = BotDelay {
        max: Duration::ZERO,
        step: Duration::ZERO,
    };

    /// A multiple of `step` between zero and `max`, uniformly distributed.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.step.is_zero() || self.max.is_zero() {
            return Duration::ZERO;
        }
        let num_steps = self.max.as_millis() / self.step.as_millis().max(1);
        let num_steps = u32::try_from(num_steps).unwrap_or(u32::MAX);
        self.step * rng.gen_range(0..=num_steps)
    }
}

impl Default for BotDelay {
    fn default() -> Self {
        Self {
            max: Duration::from_millis(900),
            step: Duration::from_millis(100),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished(GameResult),
}

/// A move that has been applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub player_idx: usize,
    pub mark: Mark,
    pub row: usize,
    pub col: usize,
}

/// One game between two players, from the empty board until a terminal state.
pub struct Game {
    board: Board,
    players: [Player; 2],
    active_idx: usize,
    moves: Vec<Move>,
    phase: Phase,
}

/// Flips a coin to decide which of the two players moves first.
fn assign_marks<R: Rng + ?Sized>(rng: &mut R) -> [Mark; 2] {
    let mut arr = [Mark::First, Mark::Second];
    arr.shuffle(rng);
    let first_player_idx = if arr[0] == Mark::First { 0 } else { 1 };
    debug!(first_player_idx, "Coin flip");
    arr
}

impl Game {
    /// A human called `human_name` against a bot called "bot".
    pub fn new<R: Rng + ?Sized>(
        dim: usize,
        human_name: &str,
        rng: &mut R,
    ) -> Result<Self, InvalidDimension> {
        let board = Board::new(dim)?;
        let [human_mark, bot_mark] = assign_marks(rng);
        Ok(Self::with_players(
            board,
            [Player::human(human_name, human_mark), Player::bot("bot", bot_mark)],
        ))
    }

    /// Two bots, for unattended games.
    pub fn bots_only<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Result<Self, InvalidDimension> {
        let board = Board::new(dim)?;
        let [mark_1, mark_2] = assign_marks(rng);
        Ok(Self::with_players(
            board,
            [Player::bot("bot 1", mark_1), Player::bot("bot 2", mark_2)],
        ))
    }

    /// Panics if both players have the same mark.
    pub fn with_players(board: Board, players: [Player; 2]) -> Self {
        assert_ne!(players[0].mark(), players[1].mark());
        let active_idx = if players[0].mark() == Mark::First { 0 } else { 1 };
        Self {
            board,
            players,
            active_idx,
            moves: Vec::new(),
            phase: Phase::NotStarted,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active_idx]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Places the active player's mark and hands the turn to the other player,
    /// unless the move ended the game.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameState, IllegalMove> {
        if let Phase::Finished(_) = self.phase {
            return Err(IllegalMove::GameOver);
        }
        let player = &self.players[self.active_idx];
        self.board
            .place(row, col, player.mark())
            .map_err(|err| IllegalMove::IllegalPlacement {
                player: String::from(player.name()),
                err,
            })?;
        debug!(player = player.name(), mark = %player.mark(), row, col, "Move");
        self.moves.push(Move {
            player_idx: self.active_idx,
            mark: player.mark(),
            row,
            col,
        });

        let state = self.board.state();
        match state {
            GameState::InProgress => {
                self.phase = Phase::InProgress;
                self.active_idx = 1 - self.active_idx;
            }
            GameState::Draw => self.phase = Phase::Finished(GameResult::Draw),
            GameState::FirstWon | GameState::SecondWon => {
                self.phase = Phase::Finished(GameResult::WonByPlayer {
                    player_idx: self.active_idx,
                })
            }
        }
        Ok(state)
    }

    /// Plays the game to the end.
    ///
    /// Human moves are read line by line from `input` and re-prompted until
    /// they are legal. Returns an error only when the input ends early, on
    /// I/O failure, or when a bot breaks the rules.
    pub fn run<R, I, W>(
        &mut self,
        rng: &mut R,
        bot_delay: &BotDelay,
        input: &mut I,
        output: &mut W,
    ) -> anyhow::Result<GameResult>
    where
        R: Rng + ?Sized,
        I: BufRead,
        W: Write,
    {
        if self.phase != Phase::NotStarted {
            anyhow::bail!("The game has already been played");
        }
        self.phase = Phase::InProgress;
        writeln!(output, "\n{}", self.board)?;

        // A re-usable buffer for reading input lines
        let mut buf = Vec::new();
        loop {
            self.announce(output)?;
            let player = self.active_player();
            let (row, col) = if player.is_bot() {
                let (row, col) = player
                    .bot_move(&self.board, rng)
                    .ok_or(IllegalMove::NoEmptyCell)?;
                std::thread::sleep(bot_delay.sample(rng));
                writeln!(output, "{} {}", row, col)?;
                (row, col)
            } else {
                self.read_human_move(input, output, &mut buf)?
            };

            self.apply_move(row, col)?;
            writeln!(output, "\n{}", self.board)?;

            if let Phase::Finished(result) = &self.phase {
                match result {
                    GameResult::WonByPlayer { player_idx } => {
                        let winner = self.players[*player_idx].name();
                        info!(winner, num_moves = self.moves.len(), "Game over");
                        writeln!(output, "{} WON!!!", winner)?;
                    }
                    GameResult::Draw => {
                        info!(num_moves = self.moves.len(), "Draw");
                        writeln!(output, "DRAW!!!")?;
                    }
                }
                output.flush()?;
                return Ok(result.clone());
            }
        }
    }

    fn announce<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let player = self.active_player();
        write!(output, "{}({}) -> ", player.name(), player.mark())?;
        output.flush()
    }

    fn read_human_move<I: BufRead, W: Write>(
        &self,
        input: &mut I,
        output: &mut W,
        buf: &mut Vec<u8>,
    ) -> anyhow::Result<(usize, usize)> {
        loop {
            buf.clear(); // because read_until() appends to the buffer
            if input.read_until(b'\n', buf)? == 0 {
                anyhow::bail!(
                    "Input closed before {} made a move",
                    self.active_player().name()
                );
            }
            // Invalid UTF-8 ends up as a malformed line
            let line = String::from_utf8_lossy(buf);
            let line = line.trim_end();
            trace!(player = self.active_player().name(), line, "Read input");
            match parse_move(line, &self.board) {
                Ok(coords) => return Ok(coords),
                Err(err) => {
                    debug!(%err, "Rejected input");
                    let dim = self.board.dim();
                    writeln!(
                        output,
                        "Error: 0<=row<{} and 0<=col<{} and cell should be empty.",
                        dim, dim
                    )?;
                    self.announce(output)?;
                }
            }
        }
    }
}

/// Parses a line such as `"1 2"` into a row and column of an empty cell.
pub fn parse_move(line: &str, board: &Board) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::Malformed {
        line: String::from(line),
    };
    let numbers = line
        .split_whitespace()
        .map(|token| token.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| malformed())?;
    let [row, col] = numbers[..] else {
        return Err(malformed());
    };

    if !board.is_in_bounds(row, col) {
        return Err(InputError::IllegalPlacement(IllegalPlacement::OutOfBounds {
            row,
            col,
            dim: board.dim(),
        }));
    }
    if let Some(existing) = board.get(row, col) {
        return Err(InputError::IllegalPlacement(IllegalPlacement::Occupied {
            row,
            col,
            existing,
        }));
    }
    Ok((row, col))
}
