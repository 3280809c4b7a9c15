use crate::config::{Config, Mode};
use crate::console::{Console, ConsoleError};
use crate::game::{play_controlled, play_free, GameError, Round};
use crate::showdown::Outcome;
use rand::Rng;
use std::io::{BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Console(ConsoleError::Io(e))
    }
}

/// Prompt, play and print one round in the configured mode.
pub fn run<R, W, G>(
    config: &Config,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<(Round, Outcome), SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let (round, outcome) = match &config.mode {
        Mode::Play { .. } => {
            console.wait_for_start()?;
            play_free(rng, config.mode.tie_policy(), config.max_deals)?
        }
        Mode::Rig { winner } => {
            let seat = match winner {
                Some(seat) => *seat,
                None => console.ask_for_winner()?,
            };
            log::info!("controlled round for {seat}");
            play_controlled(rng, seat, config.max_deals)?
        }
    };
    console.show_round(&round, &outcome)?;
    Ok((round, outcome))
}
