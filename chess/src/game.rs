//! Turn sequencing and game-over classification

use crate::board::Board;
use crate::moves::{Move, MoveError, PromotionError};

use duelchess_base::types::{Color, PieceKind, Position};

/// A named participant bound to one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    name: String,
}

impl Player {
    pub fn new(color: Color, name: impl Into<String>) -> Player {
        Player {
            color,
            name: name.into(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Overall match state; terminal once it leaves [`GameStatus::Playing`]
///
/// `Draw` is part of the state machine for future draw rules, but no current
/// rule produces it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    pub const fn win(color: Color) -> GameStatus {
        match color {
            Color::White => GameStatus::WhiteWins,
            Color::Black => GameStatus::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }
}

/// Classification of an accepted move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// Ordinary move; the turn has passed to the opponent
    Success,
    /// The moved pawn reached its far rank; the turn does not pass until
    /// [`Game::promote_pawn()`] is called
    Promotion,
    /// A king was captured; the mover wins and the game is over
    KingCaptured,
    /// The opponent is checkmated; the mover wins and the game is over
    Checkmate,
}

/// A complete match: board, players, side to move, status and move history
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    side: Color,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Starts a match from the initial position with default player names
    pub fn new() -> Game {
        Game::with_board(Board::initial())
    }

    /// Starts a match from an arbitrary board, White to move
    pub fn with_board(board: Board) -> Game {
        Game {
            board,
            white: Player::new(Color::White, Color::White.as_str()),
            black: Player::new(Color::Black, Color::Black.as_str()),
            side: Color::White,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Validates, executes and classifies one move of the side to move
    ///
    /// On [`MoveStatus::Promotion`] the turn stays with the mover until the
    /// promotion choice arrives via [`Game::promote_pawn()`]. On
    /// [`MoveStatus::KingCaptured`] and [`MoveStatus::Checkmate`] the status
    /// becomes terminal in the mover's favor.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveStatus, MoveError> {
        let piece = self
            .board
            .get(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin(mv.from))?;
        if piece.color != self.side {
            return Err(MoveError::WrongTurn(self.side));
        }

        self.board.make_move(mv)?;
        self.history.push(mv);

        if self.board.can_be_promoted(mv.to) {
            return Ok(MoveStatus::Promotion);
        }

        if self.board.captured_king().is_some() {
            self.status = GameStatus::win(self.side);
            return Ok(MoveStatus::KingCaptured);
        }

        self.side = self.side.inv();
        if self.board.is_checkmate(self.side) {
            self.status = GameStatus::win(self.side.inv());
            return Ok(MoveStatus::Checkmate);
        }

        Ok(MoveStatus::Success)
    }

    /// Completes a pending promotion and performs the deferred turn switch
    pub fn promote_pawn(&mut self, pos: Position, kind: PieceKind) -> Result<(), PromotionError> {
        self.board.promote_pawn(pos, kind)?;
        self.side = self.side.inv();
        Ok(())
    }

    pub fn set_white_player_name(&mut self, name: impl Into<String>) {
        self.white = Player::new(Color::White, name);
    }

    pub fn set_black_player_name(&mut self, name: impl Into<String>) {
        self.black = Player::new(Color::Black, name);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn current_player(&self) -> &Player {
        match self.side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Accepted moves, oldest first
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().copied()
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
