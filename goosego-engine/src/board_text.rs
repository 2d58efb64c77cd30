//! The textual board form handed to the external proposer: one line per row
//! ('#' empty, 'B' black, 'W' white, row 0 first), then a line naming the
//! color to move. Models were trained against this exact byte layout, so the
//! symbols and row order must not change. History, ko, and capture counts
//! travel out-of-band through the notation history.

use crate::error::BoardTextError;
use crate::goban::Goban;
use crate::stone::Stone;

pub const EMPTY_SYMBOL: char = '#';

pub fn render(goban: &Goban, to_move: Stone) -> String {
    let size = goban.size() as usize;
    let mut out = String::with_capacity((size + 1) * size + 6);
    for row in 0..size {
        for col in 0..size {
            out.push(match goban.stone_at((col as u8, row as u8)) {
                Some(stone) => stone.symbol(),
                None => EMPTY_SYMBOL,
            });
        }
        out.push('\n');
    }
    out.push_str(to_move.name());
    out.push('\n');
    out
}

/// Exact inverse of `render` for the grid and color to move. The returned
/// position starts with an empty history and no ko point.
pub fn parse(text: &str) -> Result<(Goban, Stone), BoardTextError> {
    let mut lines: Vec<&str> = text.lines().collect();
    let color_line = lines.pop().ok_or(BoardTextError::MissingToMove)?;
    let to_move = match color_line {
        "Black" => Stone::Black,
        "White" => Stone::White,
        other => return Err(BoardTextError::UnknownColor(other.to_string())),
    };

    let size = lines.len();
    let mut grid = Vec::with_capacity(size);
    for (row, line) in lines.iter().enumerate() {
        let mut cells = Vec::with_capacity(size);
        for symbol in line.chars() {
            if symbol == EMPTY_SYMBOL {
                cells.push(0i8);
            } else {
                let stone = Stone::from_symbol(symbol)
                    .ok_or(BoardTextError::UnknownSymbol { symbol, row })?;
                cells.push(stone.to_int());
            }
        }
        if cells.len() != size {
            return Err(BoardTextError::RaggedRow {
                row,
                len: cells.len(),
                expected: size,
            });
        }
        grid.push(cells);
    }

    Ok((Goban::from_grid(grid), to_move))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_board() {
        let goban = Goban::new(3);
        assert_eq!(render(&goban, Stone::Black), "###\n###\n###\nBlack\n");
    }

    #[test]
    fn renders_stones_in_row_order() {
        let mut goban = Goban::new(3);
        goban.play((1, 0), Stone::Black).unwrap();
        goban.play((2, 2), Stone::White).unwrap();
        assert_eq!(render(&goban, Stone::Black), "#B#\n###\n##W\nBlack\n");
    }

    #[test]
    fn round_trips_reachable_boards() {
        let mut goban = Goban::new(5);
        goban.play((2, 2), Stone::Black).unwrap();
        goban.play((1, 2), Stone::White).unwrap();
        goban.play((0, 0), Stone::Black).unwrap();
        goban.pass(Stone::White);

        let text = render(&goban, Stone::Black);
        let (parsed, to_move) = parse(&text).unwrap();
        assert_eq!(parsed.board(), goban.board());
        assert_eq!(to_move, Stone::Black);
        assert_eq!(render(&parsed, to_move), text);
    }

    #[test]
    fn parses_color_to_move() {
        let (_, to_move) = parse("##\n##\nWhite\n").unwrap();
        assert_eq!(to_move, Stone::White);
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(parse(""), Err(BoardTextError::MissingToMove));
    }

    #[test]
    fn rejects_unknown_color() {
        assert_eq!(
            parse("##\n##\nGreen\n"),
            Err(BoardTextError::UnknownColor("Green".to_string()))
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            parse("###\n##\n###\nBlack\n"),
            Err(BoardTextError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn rejects_unknown_symbol() {
        assert_eq!(
            parse("##\n#?\nBlack\n"),
            Err(BoardTextError::UnknownSymbol {
                symbol: '?',
                row: 1,
            })
        );
    }
}
