use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tictactoe::{GameState, Player};

use crate::game::{Game, GameResult, Move};

/// Writes a JSON transcript of every finished game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

#[derive(Serialize)]
struct GameRecording<'a> {
    dim: usize,
    players: &'a [Player; 2],
    moves: &'a [Move],
    state: GameState,
    result: &'a GameResult,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the path of the file that was written.
    pub fn write_game_recording(
        &mut self,
        game: &Game,
        result: &GameResult,
    ) -> anyhow::Result<PathBuf> {
        let recording = GameRecording {
            dim: game.board().dim(),
            players: game.players(),
            moves: game.moves(),
            state: game.board().state(),
            result,
        };
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}
