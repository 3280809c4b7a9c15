use crate::game::{Player, Round, Seat};
use crate::showdown::Outcome;
use crossterm::style::{style, Stylize};
use std::io::{self, BufRead, Write};

pub const START_PROMPT: &str = "Press Enter to start the game...";
pub const WINNER_PROMPT: &str = "Please select the winner: A, B, or C... ";
const SEPARATOR: &str = "---------------------------";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before an answer was given")]
    InputClosed,
}

/// Line-oriented prompt and report over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, color: true }
    }

    /// Toggle ANSI highlighting of the winner line.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }

    /// Block until the operator presses Enter.
    pub fn wait_for_start(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "{START_PROMPT}")?;
        self.output.flush()?;
        self.read_line().map(|_| ())
    }

    /// Ask for A, B or C until one is given.
    pub fn ask_for_winner(&mut self) -> Result<Seat, ConsoleError> {
        loop {
            write!(self.output, "{WINNER_PROMPT}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.parse::<Seat>() {
                Ok(seat) => return Ok(seat),
                Err(_) => {
                    log::debug!("rejected winner selection {:?}", line.trim());
                    writeln!(
                        self.output,
                        "Invalid input: {}. Please select one of A, B, or C.",
                        line.trim()
                    )?;
                }
            }
        }
    }

    pub fn show_players(&mut self, players: &[Player]) -> io::Result<()> {
        for p in players {
            writeln!(self.output, "Player: {}", p.name())?;
            writeln!(self.output, "Cards: {}", p.hand())?;
            writeln!(self.output, "{SEPARATOR}")?;
        }
        Ok(())
    }

    pub fn show_outcome(&mut self, players: &[Player], outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Winner(i) => match players.get(*i) {
                Some(winner) => self.show_winner(winner),
                None => self.show_tie(players, &[]),
            },
            Outcome::Tie(tied) => self.show_tie(players, tied),
        }
    }

    fn show_winner(&mut self, winner: &Player) -> io::Result<()> {
        let line = format!("Winner: {}", winner.name());
        if self.color {
            writeln!(self.output, "{}", style(&line).green())?;
        } else {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "Reason: {}", winner.evaluation().label())?;
        writeln!(self.output, "Cards: {}", winner.hand())
    }

    fn show_tie(&mut self, players: &[Player], tied: &[usize]) -> io::Result<()> {
        let names: Vec<&str> = tied.iter().filter_map(|&i| players.get(i)).map(|p| p.name()).collect();
        let line = match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("No winner: tie between {} and {last}", rest.join(", "))
            }
            _ => "No winner: tie".to_string(),
        };
        if self.color {
            writeln!(self.output, "{}", style(&line).yellow())?;
        } else {
            writeln!(self.output, "{line}")?;
        }
        match tied.first().and_then(|&i| players.get(i)) {
            Some(p) => writeln!(self.output, "Reason: {}", p.evaluation().label()),
            None => Ok(()),
        }
    }

    /// Players, then the result.
    pub fn show_round(&mut self, round: &Round, outcome: &Outcome) -> io::Result<()> {
        self.show_players(round.players())?;
        self.show_outcome(round.players(), outcome)?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_color(false)
    }

    fn output(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).expect("utf8 output")
    }

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn start_prompt_waits_for_a_line() {
        let mut c = console("\n");
        c.wait_for_start().unwrap();
        assert_eq!(output(c), START_PROMPT);
    }

    #[test]
    fn invalid_selection_is_reported_and_asked_again() {
        let mut c = console("x\nb\nB\n");
        assert_eq!(c.ask_for_winner().unwrap(), Seat::B);
        let out = output(c);
        assert_eq!(out.matches(WINNER_PROMPT).count(), 3);
        assert!(out.contains("Invalid input: x. Please select one of A, B, or C."));
        assert!(out.contains("Invalid input: b. Please select one of A, B, or C."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut c = console("Z\n");
        assert!(matches!(c.ask_for_winner(), Err(ConsoleError::InputClosed)));
        let mut c = console("");
        assert!(matches!(c.wait_for_start(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn round_layout() {
        let round = Round::from_hands([hand("As Ks Qs"), hand("9s 9h 2d"), hand("2h 5h 9d")]);
        let mut c = console("");
        c.show_round(&round, &round.resolve()).unwrap();
        let expected = "\
Player: Player A
Cards: A of Spades, K of Spades, Q of Spades
---------------------------
Player: Player B
Cards: 9 of Spades, 9 of Hearts, 2 of Diamonds
---------------------------
Player: Player C
Cards: 2 of Hearts, 5 of Hearts, 9 of Diamonds
---------------------------
Winner: Player A
Reason: Pure Sequence
Cards: A of Spades, K of Spades, Q of Spades
";
        assert_eq!(output(c), expected);
    }

    #[test]
    fn tie_is_spelled_out() {
        let round = Round::from_hands([hand("9s 9h 2d"), hand("Ks Kh 3d"), hand("2h 5h 9d")]);
        let outcome = round.resolve();
        let mut c = console("");
        c.show_outcome(round.players(), &outcome).unwrap();
        assert_eq!(output(c), "No winner: tie between Player A and Player B\nReason: Pair\n");
    }

    #[test]
    fn winner_line_is_highlighted_when_color_is_on() {
        let round = Round::from_hands([hand("As Ks Qs"), hand("9s 9h 2d"), hand("2h 5h 9d")]);
        let mut c = console("").with_color(true);
        c.show_outcome(round.players(), &Outcome::Winner(0)).unwrap();
        let out = output(c);
        assert!(out.contains("Winner: Player A"));
        // crossterm honours NO_COLOR even when asked to style
        if std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty()) {
            assert!(out.contains("\x1b["));
        }
    }
}
