mod error;
mod game;
mod recording;
pub use error::*;
pub use game::*;
pub use recording::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub bot_delay: BotDelay,
    pub recorder: Option<recording::Recorder>,
}
