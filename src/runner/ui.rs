//! Text rendering and human input

use std::{
    io::{self, BufRead, StdinLock, Stdout, Write},
    thread,
    time::Duration,
};

use crate::{AdversarialSearchProblem, Error, Result};

/// A game that can be drawn as text and read moves from text
pub trait TextGame: AdversarialSearchProblem {
    /// Multi-line picture of `state`
    fn render_state(&self, state: &Self::State) -> String;

    /// Parse a typed move; legality is checked by the caller
    fn parse_action(&self, input: &str) -> Option<Self::Action>;

    /// Prompt shown before reading a move
    fn action_prompt(&self) -> &'static str;
}

/// Something that shows the game and can ask a human for a move
pub trait GameUi<P: AdversarialSearchProblem> {
    /// Show `state`
    fn render(&mut self, problem: &P, state: &P::State) -> Result<()>;

    /// Obtain an available action for the player to move in `state`
    fn read_action(&mut self, problem: &P, state: &P::State) -> Result<P::Action>;
}

/// Line-oriented UI over any reader and writer
pub struct TerminalUi<R, W> {
    input: R,
    output: W,
    delay: Duration,
}

impl TerminalUi<StdinLock<'static>, Stdout> {
    /// UI on the process's stdin and stdout
    pub fn stdio(delay: Duration) -> Self {
        TerminalUi::new(io::stdin().lock(), io::stdout(), delay)
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// `delay` is slept after every render so bot-only games stay watchable
    pub fn new(input: R, output: W, delay: Duration) -> Self {
        TerminalUi {
            input,
            output,
            delay,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<P, R, W> GameUi<P> for TerminalUi<R, W>
where
    P: TextGame,
    R: BufRead,
    W: Write,
{
    fn render(&mut self, problem: &P, state: &P::State) -> Result<()> {
        writeln!(self.output, "{}\n", problem.render_state(state))?;
        self.output.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Re-prompts until the input names an available action
    fn read_action(&mut self, problem: &P, state: &P::State) -> Result<P::Action> {
        let available = problem.available_actions(state);
        loop {
            write!(self.output, "{}", problem.action_prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match problem.parse_action(&line) {
                Some(action) if available.contains(&action) => return Ok(action),
                _ => writeln!(self.output, "Invalid move '{}', try again.", line.trim())?,
            }
        }
    }
}
