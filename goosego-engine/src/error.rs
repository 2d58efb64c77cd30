use std::fmt;

/// Why a placement was rejected. These are routine outcomes while an
/// untrusted proposer is playing, not faults; the board is untouched when
/// one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    NotOnBoard,
    Occupied,
    KoViolation,
    Suicide,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::NotOnBoard => write!(f, "not on board"),
            PlayError::Occupied => write!(f, "point occupied"),
            PlayError::KoViolation => write!(f, "ko violation"),
            PlayError::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for PlayError {}

/// Construction-time configuration problems. The only error class that
/// aborts instead of degrading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    AlphabetTooShort {
        which: &'static str,
        len: usize,
        size: u8,
    },
    DuplicateLetter {
        which: &'static str,
        letter: char,
    },
    PassCollision {
        letter: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "board size must be at least 1"),
            ConfigError::AlphabetTooShort { which, len, size } => {
                write!(f, "{which} alphabet has {len} letters, board size is {size}")
            }
            ConfigError::DuplicateLetter { which, letter } => {
                write!(f, "{which} alphabet repeats '{letter}'")
            }
            ConfigError::PassCollision { letter } => {
                write!(f, "pass literal '{letter}' collides with a coordinate letter")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Board text that does not parse back into a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardTextError {
    MissingToMove,
    UnknownColor(String),
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    UnknownSymbol {
        symbol: char,
        row: usize,
    },
}

impl fmt::Display for BoardTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardTextError::MissingToMove => write!(f, "missing color-to-move line"),
            BoardTextError::UnknownColor(s) => write!(f, "unknown color to move: {s}"),
            BoardTextError::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            BoardTextError::UnknownSymbol { symbol, row } => {
                write!(f, "unknown cell symbol '{symbol}' in row {row}")
            }
        }
    }
}

impl std::error::Error for BoardTextError {}
