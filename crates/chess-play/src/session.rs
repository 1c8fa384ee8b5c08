//! The interactive read-eval loop.

use std::io::{self, BufRead, Write};

use chess_core::Move;
use chess_engine::{is_in_check, Game, GameStatus, MoveOutcome};

use crate::command::{Command, HELP};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A terminal game session.
pub struct Session {
    game: Game,
    depth: u32,
}

impl Session {
    pub fn new(game: Game, depth: u32) -> Self {
        Session { game, depth }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.print_board(out)?;
        self.play_ai_turns(out)?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let flow = match Command::parse(&line) {
                Ok(cmd) => self.handle(cmd, out)?,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.prompt(out)?;
        }
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::Empty => {}
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Board => self.print_board(out)?,
            Command::Select(sq) => {
                let targets = self.game.select_square(sq).to_vec();
                if self.game.selected_square().is_none() {
                    writeln!(out, "No {} piece on {}", self.game.side_to_move(), sq)?;
                } else if targets.is_empty() {
                    writeln!(out, "{}: no moves", sq)?;
                } else {
                    writeln!(out, "{}: {}", sq, join(targets.iter()))?;
                }
            }
            Command::To(to) => match self.game.selected_square() {
                Some(from) => self.try_move(Move::normal(from, to), out)?,
                None => writeln!(out, "Select a piece first")?,
            },
            Command::Move(mv) => self.try_move(mv, out)?,
            Command::Promote(piece) => match self.game.complete_promotion(piece) {
                Ok(()) => self.after_move(out)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Moves => {
                let moves = self.game.legal_moves();
                writeln!(out, "{} moves: {}", moves.len(), join(moves.as_slice().iter()))?;
            }
            Command::Ai => match self.game.play_ai_move(self.depth) {
                Ok((mv, _)) => {
                    writeln!(out, "{} plays {}", self.game.side_to_move().opposite(), mv)?;
                    self.after_move(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::New => {
                self.game.reset();
                self.print_board(out)?;
                self.play_ai_turns(out)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn try_move<W: Write>(&mut self, mv: Move, out: &mut W) -> io::Result<()> {
        match self.game.play(mv) {
            Ok(MoveOutcome::Moved { captured, .. }) => {
                if let Some(piece) = captured {
                    writeln!(out, "Captured {}", piece)?;
                }
                self.after_move(out)
            }
            Ok(MoveOutcome::PromotionPending { square, .. }) => {
                writeln!(out, "Pawn on {} promotes: promote q|r|b|n", square)
            }
            Err(e) => {
                self.game.deselect();
                writeln!(out, "{}", e)
            }
        }
    }

    /// Prints the new position, then lets the engine answer.
    fn after_move<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.print_board(out)?;
        self.report_status(out)?;
        self.play_ai_turns(out)
    }

    fn play_ai_turns<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while self.game.is_ai_turn() {
            let color = self.game.side_to_move();
            match self.game.play_ai_move(self.depth) {
                Ok((mv, _)) => {
                    writeln!(out, "{} plays {}", color, mv)?;
                    self.print_board(out)?;
                    self.report_status(out)?;
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn report_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let side = self.game.side_to_move();
        match self.game.status() {
            GameStatus::Checkmate => writeln!(out, "Checkmate. {} wins.", side.opposite()),
            GameStatus::Stalemate => writeln!(out, "Stalemate."),
            GameStatus::Playing if is_in_check(self.game.board(), side) => {
                writeln!(out, "{} is in check.", side)
            }
            GameStatus::Playing => Ok(()),
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        if let Some(sq) = self.game.last_moved_square() {
            writeln!(out, "Last move to {}", sq)?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.game.is_over() {
            write!(out, "game over> ")?;
        } else {
            write!(out, "{}> ", self.game.side_to_move())?;
        }
        out.flush()
    }
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
}
