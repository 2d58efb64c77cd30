use crate::Point;
use crate::config::Config;
use crate::error::ConfigError;
use crate::turn::Turn;

/// A decoded candidate: a board point, or the reserved pass marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Play(Point),
    Pass,
}

/// Two-letter coordinate codec: column letter then row letter, with a single
/// reserved letter standing in for a pass. Decoding is case-insensitive;
/// decoding over the full alphabets may yield points beyond a smaller
/// board's edge, which the board then rejects as off-board.
#[derive(Debug, Clone)]
pub struct Notation {
    cols: Vec<char>,
    rows: Vec<char>,
    pass: char,
    repairs: Vec<(char, char)>,
}

impl Notation {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let cols: Vec<char> = config.col_alphabet.chars().collect();
        let rows: Vec<char> = config.row_alphabet.chars().collect();
        let mut repairs = Vec::new();
        repairs.extend(skipped_letters(&cols));
        repairs.extend(skipped_letters(&rows));
        Ok(Notation {
            cols,
            rows,
            pass: config.pass_literal,
            repairs,
        })
    }

    pub fn pass_literal(&self) -> char {
        self.pass
    }

    /// Encode a point. Off-alphabet points encode to the empty string.
    pub fn encode(&self, (col, row): Point) -> String {
        match (self.cols.get(col as usize), self.rows.get(row as usize)) {
            (Some(&c), Some(&r)) => [c, r].iter().collect(),
            _ => String::new(),
        }
    }

    pub fn encode_turn(&self, turn: &Turn) -> String {
        match turn {
            Turn::Play { pos, .. } => self.encode(*pos),
            Turn::Pass { .. } => self.pass.to_string(),
        }
    }

    /// Decode notation text. `None` on wrong length or letters outside the
    /// alphabets; this is a recoverable condition, not an error.
    pub fn decode(&self, text: &str) -> Option<Vertex> {
        let mut chars = text.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, None) if c.eq_ignore_ascii_case(&self.pass) => Some(Vertex::Pass),
            (Some(c), Some(r), None) => {
                let col = letter_index(&self.cols, c)?;
                let row = letter_index(&self.rows, r)?;
                Some(Vertex::Play((col, row)))
            }
            _ => None,
        }
    }

    /// Substitute letters the alphabets skip with their successors (`I` is
    /// not a column letter, but upstream models emit it for the ninth
    /// column). Applied to raw candidates before decoding.
    pub fn repair(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                self.repairs
                    .iter()
                    .find(|&&(from, _)| from == c)
                    .map_or(c, |&(_, to)| to)
            })
            .collect()
    }

    /// The notation history handed to the proposer: every move encoded and
    /// followed by a single space, so a non-empty history ends with one.
    pub fn history_string(&self, history: &[Turn]) -> String {
        let mut out = String::new();
        for turn in history {
            out.push_str(&self.encode_turn(turn));
            out.push(' ');
        }
        out
    }
}

fn letter_index(alphabet: &[char], letter: char) -> Option<u8> {
    alphabet
        .iter()
        .position(|a| a.eq_ignore_ascii_case(&letter))
        .map(|i| i as u8)
}

/// Letters an alphabet steps over (ascii successor gaps of exactly one),
/// paired with the letter that takes their place.
fn skipped_letters(alphabet: &[char]) -> Vec<(char, char)> {
    alphabet
        .windows(2)
        .filter_map(|w| {
            let (a, b) = (w[0] as u32, w[1] as u32);
            (b == a + 2).then(|| (char::from_u32(a + 1).unwrap(), w[1]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Stone;

    fn notation() -> Notation {
        Notation::new(&Config::standard()).unwrap()
    }

    #[test]
    fn encodes_points() {
        let n = notation();
        assert_eq!(n.encode((0, 0)), "Aa");
        assert_eq!(n.encode((3, 3)), "Dd");
        assert_eq!(n.encode((18, 18)), "Tt");
        // Column nine is J; I is skipped.
        assert_eq!(n.encode((8, 8)), "Jj");
    }

    #[test]
    fn decodes_points() {
        let n = notation();
        assert_eq!(n.decode("Dd"), Some(Vertex::Play((3, 3))));
        assert_eq!(n.decode("Aa"), Some(Vertex::Play((0, 0))));
        assert_eq!(n.decode("Tt"), Some(Vertex::Play((18, 18))));
    }

    #[test]
    fn decode_is_case_insensitive() {
        let n = notation();
        assert_eq!(n.decode("dD"), Some(Vertex::Play((3, 3))));
        assert_eq!(n.decode("dd"), Some(Vertex::Play((3, 3))));
        assert_eq!(n.decode("x"), Some(Vertex::Pass));
    }

    #[test]
    fn decodes_pass() {
        assert_eq!(notation().decode("X"), Some(Vertex::Pass));
    }

    #[test]
    fn rejects_malformed_text() {
        let n = notation();
        assert_eq!(n.decode(""), None);
        assert_eq!(n.decode("D"), None);
        assert_eq!(n.decode("Ddd"), None);
        assert_eq!(n.decode("Iz"), None);
        assert_eq!(n.decode("4d"), None);
    }

    #[test]
    fn round_trips_valid_points() {
        let n = notation();
        for &p in &[(0u8, 0u8), (3, 15), (9, 0), (18, 18)] {
            assert_eq!(n.decode(&n.encode(p)), Some(Vertex::Play(p)));
        }
    }

    #[test]
    fn repairs_skipped_letters() {
        let n = notation();
        assert_eq!(n.repair("Ii"), "Jj");
        assert_eq!(n.repair("Dd"), "Dd");
        assert_eq!(n.decode(&n.repair("Ii")), Some(Vertex::Play((8, 8))));
    }

    #[test]
    fn history_string_matches_contract() {
        let n = notation();
        assert_eq!(n.history_string(&[]), "");
        let history = [
            Turn::play(Stone::Black, (3, 3)),
            Turn::pass(Stone::White),
            Turn::play(Stone::Black, (15, 2)),
        ];
        assert_eq!(n.history_string(&history), "Dd X Qc ");
    }
}
