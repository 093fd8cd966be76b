//! Move records and the move-level error taxonomy

use duelchess_base::types::{Color, NotationParseError, PieceKind, Position};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// A move request: origin and destination squares
///
/// The record carries no piece information; the board resolves everything else
/// at execution time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Move {
        Move { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Error applying a move through [`Game`](crate::game::Game) or
/// [`Board`](crate::board::Board)
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at {0}")]
    NoPieceAtOrigin(Position),
    #[error("it is {0}'s turn to move")]
    WrongTurn(Color),
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

/// Error promoting a pawn
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no pawn at {0}")]
    NoPawn(Position),
    #[error("pawn at {0} is not on its promotion rank")]
    NotEligible(Position),
    #[error("cannot promote a pawn to {0:?}")]
    BadKind(PieceKind),
}

/// Error parsing [`Move`] from text
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected two squares")]
    BadFormat,
    #[error("bad source square: {0}")]
    BadFrom(NotationParseError),
    #[error("bad destination square: {0}")]
    BadTo(NotationParseError),
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts the two delimiter conventions of the interactive shell: two
    /// squares separated by whitespace (`"e2 e4"`, `"5,2 5,4"`), or two
    /// algebraic squares joined by a comma (`"e2,e4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (from, to) = match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => (from, to),
            (Some(pair), None, None) => pair.split_once(',').ok_or(MoveParseError::BadFormat)?,
            _ => return Err(MoveParseError::BadFormat),
        };
        Ok(Move {
            from: Position::from_str(from).map_err(MoveParseError::BadFrom)?,
            to: Position::from_str(to).map_err(MoveParseError::BadTo)?,
        })
    }
}
