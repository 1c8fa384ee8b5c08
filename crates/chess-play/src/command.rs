//! Terminal command parsing.

use chess_core::{Move, Piece, Square};
use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid square: {0}")]
    InvalidSquare(String),
    #[error("Invalid move: {0}")]
    InvalidMove(String),
    #[error("Invalid promotion piece: {0} (use q, r, b or n)")]
    InvalidPiece(String),
}

/// Commands typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select a piece and show where it can go.
    Select(Square),
    /// Move to a square from the current selection.
    To(Square),
    /// Play a move given in UCI form, e.g. `e2e4` or `e7e8q`.
    Move(Move),
    /// Answer a pending promotion.
    Promote(Piece),
    /// Print the board.
    Board,
    /// List the legal moves of the side to move.
    Moves,
    /// Let the engine play the side to move.
    Ai,
    /// Start a new game.
    New,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

/// Text shown for `help`.
pub const HELP: &str = "\
commands:
  e2e4 | move e2e4     play a move (append q/r/b/n to promote)
  select e2            select a piece and show its destinations
  to e4                move the selected piece
  promote q            choose the piece for a pending promotion
  moves                list legal moves
  ai                   let the engine move for the side to play
  board                print the board
  new                  start over
  quit                 exit";

impl Command {
    /// Parse a command line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        let cmd = cmd.to_ascii_lowercase();
        match cmd.as_str() {
            "" => Ok(Command::Empty),
            "select" | "s" => Ok(Command::Select(parse_square(arg, "square")?)),
            "to" | "t" => Ok(Command::To(parse_square(arg, "square")?)),
            "move" | "m" => Ok(Command::Move(parse_move(arg)?)),
            "promote" | "p" => Ok(Command::Promote(parse_piece(arg)?)),
            "board" | "b" => Ok(Command::Board),
            "moves" => Ok(Command::Moves),
            "ai" | "go" => Ok(Command::Ai),
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => match Move::from_uci(&cmd) {
                Some(mv) => Ok(Command::Move(mv)),
                None => Err(CommandError::Unknown(input.to_string())),
            },
        }
    }
}

fn parse_square(arg: Option<&str>, name: &'static str) -> Result<Square, CommandError> {
    let text = arg.ok_or(CommandError::MissingArgument(name))?;
    Square::from_algebraic(&text.to_ascii_lowercase())
        .ok_or_else(|| CommandError::InvalidSquare(text.to_string()))
}

fn parse_move(arg: Option<&str>) -> Result<Move, CommandError> {
    let text = arg.ok_or(CommandError::MissingArgument("move"))?;
    Move::from_uci(&text.to_ascii_lowercase())
        .ok_or_else(|| CommandError::InvalidMove(text.to_string()))
}

fn parse_piece(arg: Option<&str>) -> Result<Piece, CommandError> {
    let text = arg.ok_or(CommandError::MissingArgument("piece"))?;
    let piece = match text.to_ascii_lowercase().as_str() {
        "q" | "queen" => Piece::Queen,
        "r" | "rook" => Piece::Rook,
        "b" | "bishop" => Piece::Bishop,
        "n" | "knight" => Piece::Knight,
        _ => return Err(CommandError::InvalidPiece(text.to_string())),
    };
    Ok(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn parse_bare_uci_move() {
        assert_eq!(
            Command::parse("e2e4"),
            Ok(Command::Move(Move::normal(sq("e2"), sq("e4"))))
        );
        assert_eq!(
            Command::parse("  e7e8q \n"),
            Ok(Command::Move(Move::new(sq("e7"), sq("e8"), Some(Piece::Queen))))
        );
    }

    #[test]
    fn parse_move_keyword() {
        assert_eq!(
            Command::parse("move G1F3"),
            Ok(Command::Move(Move::normal(sq("g1"), sq("f3"))))
        );
        assert_eq!(
            Command::parse("move"),
            Err(CommandError::MissingArgument("move"))
        );
        assert_eq!(
            Command::parse("move e2e9"),
            Err(CommandError::InvalidMove("e2e9".to_string()))
        );
    }

    #[test]
    fn parse_selection() {
        assert_eq!(Command::parse("select e2"), Ok(Command::Select(sq("e2"))));
        assert_eq!(Command::parse("s b1"), Ok(Command::Select(sq("b1"))));
        assert_eq!(Command::parse("to e4"), Ok(Command::To(sq("e4"))));
        assert_eq!(
            Command::parse("select z9"),
            Err(CommandError::InvalidSquare("z9".to_string()))
        );
    }

    #[test]
    fn parse_promotion() {
        assert_eq!(Command::parse("promote q"), Ok(Command::Promote(Piece::Queen)));
        assert_eq!(
            Command::parse("promote knight"),
            Ok(Command::Promote(Piece::Knight))
        );
        assert_eq!(
            Command::parse("promote k"),
            Err(CommandError::InvalidPiece("k".to_string()))
        );
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("board"), Ok(Command::Board));
        assert_eq!(Command::parse("moves"), Ok(Command::Moves));
        assert_eq!(Command::parse("ai"), Ok(Command::Ai));
        assert_eq!(Command::parse("new"), Ok(Command::New));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("QUIT"), Ok(Command::Quit));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Command::parse("castle kingside"),
            Err(CommandError::Unknown("castle kingside".to_string()))
        );
    }
}
