//! Self-play driver for the goosego rules engine.
//!
//! Two random text-emitting proposers are negotiated against one board. The
//! proposers draw letters from the full notation alphabets, so off-board,
//! occupied, and ko candidates all exercise the retry and fallback paths
//! the way raw model output does.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use goosego_engine::{
    Config, Fallback, Goban, Negotiator, Notation, Outcome, Proposer, Stone, board_text,
};

#[derive(Parser)]
#[command(name = "goosego", about = "Self-play driver for the goosego rules engine")]
struct Cli {
    /// Board size.
    #[arg(long, default_value_t = 19)]
    size: u8,

    /// Maximum number of negotiated turns before the game is cut off.
    #[arg(long, default_value_t = 120)]
    moves: u32,

    /// Proposal attempts per turn before a pass is forced.
    #[arg(long, default_value_t = 8)]
    max_attempts: u32,

    /// Seed for the proposers. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the mirror-column fallback for illegal candidates.
    #[arg(long)]
    no_mirror: bool,
}

/// Emits two random letters per proposal, occasionally the pass literal.
struct RandomProposer {
    rng: StdRng,
    cols: Vec<char>,
    rows: Vec<char>,
    pass: char,
}

impl RandomProposer {
    fn new(config: &Config, rng: StdRng) -> Self {
        RandomProposer {
            rng,
            cols: config.col_alphabet.chars().collect(),
            rows: config.row_alphabet.chars().collect(),
            pass: config.pass_literal,
        }
    }
}

impl Proposer for RandomProposer {
    type Token = ();

    fn propose(&mut self, _board: &str, _to_move: Stone, _history: &str) -> String {
        if self.rng.random_ratio(1, 200) {
            return self.pass.to_string();
        }
        let col = self.cols[self.rng.random_range(0..self.cols.len())];
        let row = self.rows[self.rng.random_range(0..self.rows.len())];
        format!("{col}{row}")
    }

    fn checkpoint(&mut self) {}

    fn restore(&mut self, _token: ()) {}
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let fallback = if cli.no_mirror {
        Fallback::Off
    } else {
        Fallback::MirrorColumns
    };
    let config = Config {
        size: cli.size,
        fallback,
        ..Config::standard()
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut proposer = RandomProposer::new(&config, rng);
    let negotiator = Negotiator::new(Notation::new(&config)?, fallback);
    let mut goban = Goban::new(cli.size);

    let mut to_move = Stone::Black;
    let mut consecutive_passes = 0u32;
    for turn in 1..=cli.moves {
        let outcome = negotiator.negotiate(&mut goban, &mut proposer, to_move, cli.max_attempts);
        match outcome {
            Outcome::Placed(point) => {
                consecutive_passes = 0;
                println!(
                    "move {turn}: {to_move} {}",
                    negotiator.notation().encode(point)
                );
            }
            Outcome::Passed => {
                consecutive_passes += 1;
                println!("move {turn}: {to_move} passes");
            }
            Outcome::Failed => {
                consecutive_passes += 1;
                println!("move {turn}: {to_move} out of proposals, forced pass");
            }
        }
        to_move = to_move.opp();
        if consecutive_passes >= 2 {
            println!("two consecutive passes, game over");
            break;
        }
    }

    print!("{}", board_text::render(&goban, to_move));
    println!(
        "captures: black {}, white {}",
        goban.captures().black,
        goban.captures().white
    );
    Ok(())
}
