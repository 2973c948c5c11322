//! Human play over a line-oriented terminal.
//!
//! A human seat reads moves as `row,col` (1-indexed) and reprompts until it
//! gets a legal one. The five-entry menu picks who sits in each seat.
//!
//! ## Example
//!
//! ```ignore
//! use kinrow_rust::manual::ManualPlayer;
//! let mut human = ManualPlayer::new(std::io::stdin(), std::io::stdout());
//! ```

use std::io::{self, Write};

use tracing::debug;

use crate::board::Cell;
use crate::error::{GameError, Result};
use crate::game::Game;
use crate::kinrow::{GameState, KInARow, parse_cell, str_cell};
use crate::player::Player;

/// Prompt shown before each move.
const MOVE_PROMPT: &str = "Enter your move (e.g., 2,3): ";

/// Reply to an unparsable or illegal move.
const INVALID_MOVE: &str = "invalid action!!";

/// The game-mode menu.
const MENU: &str = "Select Game Mode\n\
                    1.PvP\n\
                    2.PvC (minmax) \n\
                    3.PvC (randomized)\n\
                    4.CvC (minmax v randomized):\n\
                    5.CvC (randomized v minmax):";

/// Reply to an unknown menu entry.
const INVALID_MODE: &str = "Invalid input!!Try again.";

/// A source of input lines.
///
/// Implemented for [`io::Stdin`], which locks only for the duration of each
/// read so that two human seats can share the terminal, and for byte
/// slices, which serve as scripted input.
pub trait LineSource {
    /// The next line, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match self.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}

impl LineSource for &[u8] {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match io::BufRead::read_line(self, &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}

/// A human seat.
pub struct ManualPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> ManualPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Player<KInARow> for ManualPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    /// Show the board and read moves until a legal one arrives.
    ///
    /// # Errors
    /// `GameError::InputClosed` if input ends first, or `GameError::Io`.
    fn choose_move(&mut self, game: &KInARow, state: &GameState) -> Result<Cell> {
        write!(self.output, "{}", game.display(state))?;
        let actions = game.actions(state);
        loop {
            write!(self.output, "{MOVE_PROMPT}")?;
            self.output.flush()?;
            let line = self.input.next_line()?.ok_or(GameError::InputClosed)?;
            match parse_cell(&line) {
                Some(cell) if actions.contains(&cell) => {
                    debug!(cell = %str_cell(cell), "move entered");
                    return Ok(cell);
                }
                _ => {
                    debug!(line = line.trim(), "rejected input");
                    writeln!(self.output, "{INVALID_MOVE}")?
                }
            }
        }
    }
}

/// Who plays whom, in menu order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs human
    HumanVsHuman,
    /// Human vs alpha-beta search
    HumanVsMinimax,
    /// Human vs random
    HumanVsRandom,
    /// Alpha-beta search (X) vs random (O)
    MinimaxVsRandom,
    /// Random (X) vs alpha-beta search (O)
    RandomVsMinimax,
}

impl GameMode {
    /// Map a menu entry (`"1"` to `"5"`) to its mode.
    pub fn from_choice(choice: &str) -> Option<GameMode> {
        match choice.trim() {
            "1" => Some(GameMode::HumanVsHuman),
            "2" => Some(GameMode::HumanVsMinimax),
            "3" => Some(GameMode::HumanVsRandom),
            "4" => Some(GameMode::MinimaxVsRandom),
            "5" => Some(GameMode::RandomVsMinimax),
            _ => None,
        }
    }
}

/// Show the menu until a valid entry is read.
///
/// # Errors
/// `GameError::InputClosed` if input ends before a choice is made.
pub fn select_mode<R: LineSource, W: Write>(input: &mut R, output: &mut W) -> Result<GameMode> {
    loop {
        writeln!(output, "{MENU}")?;
        output.flush()?;
        let line = input.next_line()?.ok_or(GameError::InputClosed)?;
        if let Some(mode) = GameMode::from_choice(&line) {
            return Ok(mode);
        }
        writeln!(output, "{INVALID_MODE}")?;
    }
}
