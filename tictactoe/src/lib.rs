pub use board::*;
pub use mark::*;
pub use player::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod mark;
mod player;
mod visualization;
