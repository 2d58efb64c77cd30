pub mod board_text;
pub mod config;
pub mod error;
pub mod goban;
pub mod negotiate;
pub mod notation;
pub mod stone;
pub mod turn;

/// A board intersection as `(col, row)`, 0-indexed.
pub type Point = (u8, u8);

pub use config::{Config, Fallback};
pub use error::{BoardTextError, ConfigError, PlayError};
pub use goban::{Captures, Goban};
pub use negotiate::{Negotiator, Outcome, Proposer};
pub use notation::{Notation, Vertex};
pub use stone::Stone;
pub use turn::Turn;
