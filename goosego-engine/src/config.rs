use crate::error::ConfigError;

/// Column letters, uppercase, skipping `I`.
pub const COL_ALPHABET: &str = "ABCDEFGHJKLMNOPQRST";
/// Row letters, lowercase, skipping `i`.
pub const ROW_ALPHABET: &str = "abcdefghjklmnopqrst";
/// The reserved pass marker.
pub const PASS_LITERAL: char = 'X';

/// Recovery applied when a proposed coordinate turns out to be illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Reflect the column about the board's vertical midline and retest once.
    /// Compensates for a systematic left/right bias in model proposals.
    #[default]
    MirrorColumns,
    /// No recovery; an illegal candidate just consumes the attempt.
    Off,
}

/// Engine configuration. `validate` runs at construction of anything built
/// from a config; after that, illegal input degrades instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: u8,
    pub col_alphabet: String,
    pub row_alphabet: String,
    pub pass_literal: char,
    pub fallback: Fallback,
}

impl Config {
    /// The 19x19 configuration the original training data was produced with.
    pub fn standard() -> Self {
        Config {
            size: 19,
            col_alphabet: COL_ALPHABET.to_string(),
            row_alphabet: ROW_ALPHABET.to_string(),
            pass_literal: PASS_LITERAL,
            fallback: Fallback::MirrorColumns,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        for (which, alphabet) in [("column", &self.col_alphabet), ("row", &self.row_alphabet)] {
            let letters: Vec<char> = alphabet.chars().collect();
            if letters.len() < self.size as usize {
                return Err(ConfigError::AlphabetTooShort {
                    which,
                    len: letters.len(),
                    size: self.size,
                });
            }
            for (i, &letter) in letters.iter().enumerate() {
                if letters[..i].contains(&letter) {
                    return Err(ConfigError::DuplicateLetter { which, letter });
                }
                if letter.eq_ignore_ascii_case(&self.pass_literal) {
                    return Err(ConfigError::PassCollision { letter });
                }
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_valid() {
        assert_eq!(Config::standard().validate(), Ok(()));
    }

    #[test]
    fn smaller_board_reuses_alphabets() {
        let config = Config {
            size: 9,
            ..Config::standard()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_size() {
        let config = Config {
            size: 0,
            ..Config::standard()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));
    }

    #[test]
    fn rejects_short_alphabet() {
        let config = Config {
            col_alphabet: "ABC".to_string(),
            ..Config::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AlphabetTooShort {
                which: "column",
                len: 3,
                size: 19,
            })
        );
    }

    #[test]
    fn rejects_duplicate_letter() {
        let config = Config {
            row_alphabet: "aabcdefghjklmnopqrs".to_string(),
            ..Config::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLetter {
                which: "row",
                letter: 'a',
            })
        );
    }

    #[test]
    fn rejects_pass_collision() {
        // Case-insensitive: a lowercase 'x' row letter collides with pass 'X'.
        let config = Config {
            row_alphabet: "xbcdefghjklmnopqrst".to_string(),
            ..Config::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PassCollision { letter: 'x' })
        );
    }
}
