//! Line-oriented text protocol.
//!
//! One command per line, one response line per command (`board` prints the
//! grid). Errors are reported as `error <message>` and never end the loop.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{GameError, GameState, LayoutError, Move, MoveParseError, Square, SquareError};
use crate::session::Session;

pub mod command;
pub mod options;
pub mod print;

use command::{parse_command, Command};
use options::{parse_setoption, EngineOptions};

/// Error type for a rejected protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidSquare(SquareError),
    InvalidMove(MoveParseError),
    InvalidLayout(LayoutError),
    Game(GameError),
    /// A command was given without its required argument
    MissingArgument { command: &'static str },
    UnknownCommand { line: String },
    UnknownOption { name: String },
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidSquare(e) => write!(f, "invalid square: {e}"),
            ProtocolError::InvalidMove(e) => write!(f, "invalid move: {e}"),
            ProtocolError::InvalidLayout(e) => write!(f, "invalid layout: {e}"),
            ProtocolError::Game(e) => write!(f, "{e}"),
            ProtocolError::MissingArgument { command } => {
                write!(f, "missing argument for '{command}'")
            }
            ProtocolError::UnknownCommand { line } => write!(f, "unknown command '{line}'"),
            ProtocolError::UnknownOption { name } => write!(f, "unknown option '{name}'"),
            ProtocolError::InvalidOptionValue { name, value } => {
                write!(f, "invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<SquareError> for ProtocolError {
    fn from(e: SquareError) -> Self {
        ProtocolError::InvalidSquare(e)
    }
}

impl From<MoveParseError> for ProtocolError {
    fn from(e: MoveParseError) -> Self {
        ProtocolError::InvalidMove(e)
    }
}

impl From<LayoutError> for ProtocolError {
    fn from(e: LayoutError) -> Self {
        ProtocolError::InvalidLayout(e)
    }
}

impl From<GameError> for ProtocolError {
    fn from(e: GameError) -> Self {
        ProtocolError::Game(e)
    }
}

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Protocol state: the session being played and the configured options.
#[derive(Debug, Default)]
pub struct Driver {
    session: Session,
    options: EngineOptions,
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Execute one command line, writing its response to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let Some(cmd) = parse_command(line) else {
            return Ok(Flow::Continue);
        };
        if cmd == Command::Quit {
            return Ok(Flow::Quit);
        }

        match self.respond(cmd) {
            Ok(response) => writeln!(out, "{response}")?,
            Err(e) => {
                engine_debug!("rejected '{}': {e}", line.trim());
                writeln!(out, "{}", print::format_error(&e))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn respond(&mut self, cmd: Command) -> Result<String, ProtocolError> {
        let response = match cmd {
            Command::New => {
                self.session = Session::new(self.options.rules);
                "ok".to_string()
            }
            Command::Position(layout) => {
                let state = GameState::from_layout(&layout, self.options.rules)?;
                self.session.set_state(state);
                "ok".to_string()
            }
            Command::Board => {
                let state = self.session.state();
                format!("{}\nturn {}", state.board(), state.side_to_move())
            }
            Command::Layout => format!("layout {}", self.session.state().to_layout()),
            Command::Status => print::format_status(self.session.state()),
            Command::Moves(None) => print::format_move_list(&self.session.state().all_legal_moves()),
            Command::Moves(Some(square)) => {
                let from: Square = square.parse()?;
                let moves = self.session.state().legal_moves(from)?;
                print::format_destinations(from, &moves.destinations())
            }
            Command::Move(args) => {
                if args.is_empty() {
                    return Err(ProtocolError::MissingArgument { command: "move" });
                }
                let mv: Move = args.concat().parse()?;
                let outcome = self.session.play(mv)?;
                print::format_outcome(&outcome)
            }
            Command::Click(square) => {
                let square = square.ok_or(ProtocolError::MissingArgument { command: "click" })?;
                let outcome = self.session.click(square.parse()?)?;
                print::format_click(&outcome)
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) = parse_setoption(&parts)
                    .ok_or(ProtocolError::MissingArgument { command: "setoption" })?;
                self.options.apply_setoption(&name, value.as_deref())?;
                self.session.set_rules(self.options.rules);
                "ok".to_string()
            }
            Command::Options => self.options.describe(),
            Command::Unknown(line) => return Err(ProtocolError::UnknownCommand { line }),
            Command::Quit => String::new(),
        };
        Ok(response)
    }
}

/// Read commands from `reader` until `quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    let mut driver = Driver::new();
    for line in reader.lines() {
        let line = line?;
        let flow = driver.handle_line(&line, &mut writer)?;
        writer.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
