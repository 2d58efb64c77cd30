//! Bounded-retry negotiation between the board and an external move source.
//!
//! Each attempt shows the proposer the rendered board and the notation
//! history, decodes whatever text comes back, and commits the first legal
//! placement. Undecodable output and the pass literal commit a pass at once;
//! illegal coordinates go through the configured fallback, then the attempt
//! is discarded and the proposer rolled back. When every attempt fails, a
//! pass is forced so the game always moves forward.

use tracing::{debug, warn};

use crate::Point;
use crate::board_text;
use crate::config::Fallback;
use crate::goban::Goban;
use crate::notation::{Notation, Vertex};
use crate::stone::Stone;

/// The external move source. `checkpoint`/`restore` bracket every attempt:
/// a restore must leave the proposer exactly as if the failed attempt never
/// ran (for a recurrent model, that is its hidden state). Stateless
/// proposers use `Token = ()`.
pub trait Proposer {
    type Token;

    /// Produce candidate notation text for the given position. The board
    /// text and history follow the formats in `board_text` and `Notation`.
    fn propose(&mut self, board_text: &str, to_move: Stone, history: &str) -> String;

    fn checkpoint(&mut self) -> Self::Token;

    fn restore(&mut self, token: Self::Token);
}

/// How a negotiation round ended. Every variant corresponds to exactly one
/// committed move on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Placed(Point),
    Passed,
    /// All attempts failed; a pass was forced. The game continues.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Negotiator {
    notation: Notation,
    fallback: Fallback,
}

impl Negotiator {
    pub fn new(notation: Notation, fallback: Fallback) -> Self {
        Negotiator { notation, fallback }
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    /// Run one negotiation round for `to_move`, with at most `max_attempts`
    /// proposal rounds. Always terminates with one committed move.
    pub fn negotiate<P: Proposer>(
        &self,
        goban: &mut Goban,
        proposer: &mut P,
        to_move: Stone,
        max_attempts: u32,
    ) -> Outcome {
        for attempt in 1..=max_attempts {
            let token = proposer.checkpoint();
            let board = board_text::render(goban, to_move);
            let history = self.notation.history_string(goban.history());
            let raw = proposer.propose(&board, to_move, &history);
            let candidate = self.notation.repair(raw.trim());
            if candidate != raw.trim() {
                debug!(attempt, %raw, %candidate, "repaired skipped letter");
            }

            match self.notation.decode(&candidate) {
                Some(Vertex::Play(point)) => {
                    match goban.play(point, to_move) {
                        Ok(captured) => {
                            debug!(attempt, ?point, captured = captured.len(), "committed");
                            return Outcome::Placed(point);
                        }
                        Err(err) => debug!(attempt, ?point, %err, "illegal candidate"),
                    }
                    if let Some(mirrored) = self.mirror(goban, point) {
                        if goban.play(mirrored, to_move).is_ok() {
                            debug!(attempt, ?point, ?mirrored, "committed mirrored candidate");
                            return Outcome::Placed(mirrored);
                        }
                    }
                }
                Some(Vertex::Pass) | None => {
                    // Undecodable text counts as an explicit pass; passes
                    // are never retried.
                    debug!(attempt, %candidate, "pass candidate, committing");
                    goban.pass(to_move);
                    return Outcome::Passed;
                }
            }

            proposer.restore(token);
        }

        warn!(max_attempts, %to_move, "negotiation exhausted, forcing a pass");
        goban.pass(to_move);
        Outcome::Failed
    }

    /// The fallback coordinate: column reflected about the vertical midline,
    /// row unchanged. `None` when the fallback is off or the candidate's
    /// column lies beyond the edge.
    fn mirror(&self, goban: &Goban, (col, row): Point) -> Option<Point> {
        match self.fallback {
            Fallback::MirrorColumns if col < goban.size() => {
                Some((goban.size() - 1 - col, row))
            }
            _ => None,
        }
    }
}
