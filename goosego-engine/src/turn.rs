use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// A single committed move. History is an append-only sequence of these and
/// is never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Turn {
    Play { stone: Stone, pos: Point },
    Pass { stone: Stone },
}

impl Turn {
    pub fn play(stone: Stone, pos: Point) -> Self {
        Turn::Play { stone, pos }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn::Pass { stone }
    }

    pub fn stone(&self) -> Stone {
        match *self {
            Turn::Play { stone, .. } | Turn::Pass { stone } => stone,
        }
    }

    pub fn pos(&self) -> Option<Point> {
        match *self {
            Turn::Play { pos, .. } => Some(pos),
            Turn::Pass { .. } => None,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Turn::Play { .. })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Turn::Pass { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_turn() {
        let t = Turn::play(Stone::Black, (3, 3));
        assert_eq!(t.stone(), Stone::Black);
        assert_eq!(t.pos(), Some((3, 3)));
        assert!(t.is_play());
        assert!(!t.is_pass());
    }

    #[test]
    fn pass_turn() {
        let t = Turn::pass(Stone::White);
        assert_eq!(t.stone(), Stone::White);
        assert_eq!(t.pos(), None);
        assert!(t.is_pass());
    }

    #[test]
    fn equality() {
        assert_eq!(Turn::play(Stone::Black, (1, 1)), Turn::play(Stone::Black, (1, 1)));
        assert_ne!(Turn::play(Stone::Black, (1, 1)), Turn::play(Stone::White, (1, 1)));
        assert_ne!(Turn::play(Stone::Black, (1, 1)), Turn::pass(Stone::Black));
    }
}
