mod board;
mod color;
mod direction;
mod game;
mod marble;
mod outcome;
mod player;
mod push;
mod rules;
mod square;
mod tally;

pub use board::*;
pub use color::*;
pub use direction::*;
pub use game::*;
pub use marble::*;
pub use outcome::*;
pub use player::*;
pub use push::*;
pub use rules::*;
pub use square::*;
pub use tally::*;
