use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use teen_patti::config::Config;
use teen_patti::console::Console;
use teen_patti::session;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();
    log::debug!("teen-patti {} with {config:?}", teen_patti::VERSION);

    let stdout = io::stdout();
    let color = !config.no_color && stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock()).with_color(color);
    let mut rng = config.rng();

    match session::run(&config, &mut console, &mut rng) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("teen-patti: {e}");
            ExitCode::FAILURE
        }
    }
}
