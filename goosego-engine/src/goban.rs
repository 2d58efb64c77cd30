use arrayvec::ArrayVec;

use crate::Point;
use crate::error::PlayError;
use crate::stone::Stone;
use crate::turn::Turn;

/// Running capture totals, indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Board state: the grid as a flat array, the append-only move history, and
/// the active ko point. The grid is always derivable by replaying the
/// history onto an empty board.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    history: Vec<Turn>,
    ko: Option<Point>,
    captures: Captures,
}

impl Goban {
    pub fn new(size: u8) -> Self {
        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            history: Vec::new(),
            ko: None,
            captures: Captures::new(),
        }
    }

    /// Build a position from a square cell matrix (rows of i8 values).
    /// History starts empty; the grid is taken as given.
    pub fn from_grid(grid: Vec<Vec<i8>>) -> Self {
        let size = grid.len() as u8;
        assert!(
            grid.iter().all(|row| row.len() == size as usize),
            "malformed board matrix"
        );

        Goban {
            board: grid.into_iter().flatten().collect(),
            size,
            history: Vec::new(),
            ko: None,
            captures: Captures::new(),
        }
    }

    /// Replay a committed history onto an empty board. Reproduces the exact
    /// grid, ko, and capture state the history was recorded from.
    pub fn replay(size: u8, history: &[Turn]) -> Result<Self, PlayError> {
        let mut goban = Goban::new(size);
        for turn in history {
            match *turn {
                Turn::Play { stone, pos } => {
                    goban.play(pos, stone)?;
                }
                Turn::Pass { stone } => goban.pass(stone),
            }
        }
        Ok(goban)
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    // -- Game actions --

    /// Non-mutating legality check: off-board, occupied, and ko points are
    /// illegal; otherwise the placement is simulated on a scratch copy and
    /// rejected only if it captures nothing and ends with no liberties.
    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.resolve(point, stone).is_ok()
    }

    /// Place a stone: remove captured opposing chains, reject suicide,
    /// append the move to history, and recompute the ko point. Returns the
    /// captured points, sorted. On error the board is untouched; rejected
    /// placements are the expected path while a proposer is retried.
    pub fn play(&mut self, point: Point, stone: Stone) -> Result<Vec<Point>, PlayError> {
        let (board, mut dead) = self.resolve(point, stone)?;

        self.board = board;
        dead.sort_unstable();
        dead.dedup();
        self.captures.add(stone, dead.len() as u32);
        self.ko = self.detect_ko(point, &dead);
        self.history.push(Turn::play(stone, point));
        Ok(dead)
    }

    /// Record a pass. The grid and any active ko point are left as they are;
    /// only a placement clears or reassigns ko.
    pub fn pass(&mut self, stone: Stone) {
        self.history.push(Turn::pass(stone));
    }

    /// Clear grid, history, ko, and capture totals back to an empty game.
    pub fn reset(&mut self) {
        self.board.fill(0);
        self.history.clear();
        self.ko = None;
        self.captures = Captures::new();
    }

    /// Validate and simulate a placement without touching `self`. Returns
    /// the post-capture board and the captured points.
    fn resolve(&self, point: Point, stone: Stone) -> Result<(Vec<i8>, Vec<Point>), PlayError> {
        if !self.on_board(point) {
            return Err(PlayError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(PlayError::Occupied);
        }
        if self.ko == Some(point) {
            return Err(PlayError::KoViolation);
        }

        let mut scratch = self.scratch();
        scratch.set(point, stone);

        let mut dead = Vec::new();
        for chain in scratch.opposing_chains(point) {
            if scratch.chain_liberties(&chain).is_empty() {
                dead.extend(&chain);
            }
        }
        for &p in &dead {
            scratch.clear(p);
        }

        // A capturing move opened its own liberties above.
        let (_, liberties) = scratch.group(point);
        if liberties.is_empty() {
            return Err(PlayError::Suicide);
        }

        Ok((scratch.board, dead))
    }

    // -- Group and liberty analysis --

    /// The in-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        result
    }

    /// The connected same-color group through `point` and its liberties,
    /// collected in one traversal. Empty on an empty origin. Same-color
    /// neighbors extend the walk, empty neighbors are liberties, opposing
    /// stones are boundaries. Each point is visited at most once.
    pub fn group(&self, point: Point) -> (Vec<Point>, Vec<Point>) {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return (Vec::new(), Vec::new()),
        };

        let mut visited = vec![false; self.board.len()];
        let mut lib_seen = vec![false; self.board.len()];
        let mut stones = Vec::new();
        let mut liberties = Vec::new();
        let mut stack = vec![point];
        visited[self.idx(point)] = true;

        while let Some(p) = stack.pop() {
            stones.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                match self.stone_at(n) {
                    None => {
                        if !lib_seen[ni] {
                            lib_seen[ni] = true;
                            liberties.push(n);
                        }
                    }
                    Some(s) if s == stone && !visited[ni] => {
                        visited[ni] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }

        (stones, liberties)
    }

    /// Liberties of the group through `point`.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        self.group(point).1
    }

    /// Liberties of a pre-computed chain, deduplicated.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.board.len()];
        let mut libs = Vec::new();
        for &p in chain {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// The distinct opposing chains adjacent to `point`. A shared visited
    /// bitset keeps each chain from being walked more than once.
    fn opposing_chains(&self, point: Point) -> Vec<Vec<Point>> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let opponent = stone.opp();

        let mut chains = Vec::new();
        let mut visited = vec![false; self.board.len()];

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            chains.push(self.chain_from(n, &mut visited));
        }

        chains
    }

    /// Flood-fill one chain, marking the shared visited bitset.
    fn chain_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return Vec::new(),
        };

        let mut result = Vec::new();
        let mut stack = vec![point];
        visited[self.idx(point)] = true;

        while let Some(p) = stack.pop() {
            result.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if self.stone_at(n) == Some(stone) && !visited[ni] {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Ko --

    /// Ko arises only from the single-stone-retakes-single-stone pattern:
    /// exactly one stone captured, and the placed stone is alone with that
    /// captured point as its only liberty. Multi-stone super-ko shapes are
    /// deliberately not tracked.
    fn detect_ko(&self, point: Point, dead: &[Point]) -> Option<Point> {
        if dead.len() != 1 {
            return None;
        }
        let (stones, liberties) = self.group(point);
        (stones.len() == 1 && liberties == [dead[0]]).then_some(dead[0])
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (col, row): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    /// A board-only copy for move simulation; history stays behind.
    fn scratch(&self) -> Goban {
        Goban {
            board: self.board.clone(),
            size: self.size,
            history: Vec::new(),
            ko: None,
            captures: Captures::new(),
        }
    }

    fn set(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = stone.to_int();
        }
    }

    fn clear(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = 0;
        }
    }
}
