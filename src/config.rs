use crate::game::{Seat, TiePolicy, DEFAULT_MAX_DEALS};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Three-player Teen Patti, one round per run.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "teen-patti", author, version, about, long_about = None)]
pub struct Config {
    /// Seed for a reproducible shuffle; drawn at random when omitted.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Give up after this many tied deals.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEALS)]
    pub max_deals: usize,

    /// Print the winner without colour.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Deal one round and let the cards decide.
    Play {
        /// Deal again on a tie instead of reporting it.
        #[arg(long)]
        redeal_ties: bool,
    },
    /// Pick the winner, then deal.
    Rig {
        /// A, B or C; asked for interactively when omitted.
        #[arg(long)]
        winner: Option<Seat>,
    },
}

impl Mode {
    pub fn tie_policy(&self) -> TiePolicy {
        match self {
            Mode::Play { redeal_ties: true } => TiePolicy::Redeal,
            _ => TiePolicy::Report,
        }
    }
}

impl Config {
    /// Shuffle source for this run. Random seeds are logged so a round can be replayed.
    pub fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("shuffle seed {seed}");
        ChaCha8Rng::seed_from_u64(seed)
    }
}
