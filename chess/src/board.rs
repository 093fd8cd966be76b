//! Board and related things

use crate::moves::{Move, MoveError, PromotionError};
use crate::piece::Piece;

use duelchess_base::geometry;
use duelchess_base::types::{Color, PieceKind, Position};

use std::fmt::{self, Display};

/// Kinds of the pieces each side has lost, in capture order
///
/// Keyed by the captured piece's own color: `white` lists the pieces White
/// lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl CapturedPieces {
    pub fn of(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn record(&mut self, victim: Piece) {
        match victim.color {
            Color::White => self.white.push(victim.kind),
            Color::Black => self.black.push(victim.kind),
        }
    }
}

/// The 8×8 board together with all per-match bookkeeping
///
/// Each cell owns at most one [`Piece`]; the cell itself is the piece's
/// position. Besides the grid, the board tracks the en-passant target square,
/// the pieces captured so far, and whether a king has been captured (the
/// terminal signal of this rules dialect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
    en_passant_target: Option<Position>,
    captured: CapturedPieces,
    captured_king: Option<Piece>,
}

impl Board {
    /// Returns a board without any pieces
    ///
    /// Combine with [`Board::put()`] to build positions programmatically.
    pub fn empty() -> Board {
        Board {
            cells: [None; 64],
            en_passant_target: None,
            captured: CapturedPieces::default(),
            captured_king: None,
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut res = Board::empty();
        for color in [Color::White, Color::Black] {
            for file in 0..8 {
                res.put(
                    Position::new(geometry::pawn_rank(color), file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                res.put(
                    Position::new(geometry::home_rank(color), file as u8),
                    Some(Piece::new(color, kind)),
                );
            }
        }
        res
    }

    /// Returns the contents of the square `pos`
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()]
    }

    /// Puts `piece` onto the square `pos`, replacing the previous occupant
    ///
    /// This is the raw setup primitive: no legality checks, no capture
    /// bookkeeping. Pass `None` to clear the square.
    #[inline]
    pub fn put(&mut self, pos: Position, piece: Option<Piece>) {
        self.cells[pos.index()] = piece;
    }

    /// The square a pawn could capture into via en passant, if the last move
    /// was a pawn double-step
    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Set once a king has been captured; the game is over at that point
    #[inline]
    pub fn captured_king(&self) -> Option<Piece> {
        self.captured_king
    }

    /// Returns `true` if the piece at the origin lists the destination among
    /// its legal moves; `false` when the origin is empty
    pub fn is_valid_move(&self, mv: Move) -> bool {
        match self.get(mv.from) {
            Some(piece) => piece.is_legal_move(mv.from, mv.to, self),
            None => false,
        }
    }

    /// Validates and executes a move
    ///
    /// On success the board has applied, in order: en-passant capture
    /// resolution, en-passant target bookkeeping, ordinary-capture recording,
    /// castling completion (the rook is relocated when a king displaces two
    /// files), and finally the relocation of the mover itself with its
    /// `has_moved` flag set.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.is_valid_move(mv) {
            return Err(MoveError::IllegalMove(mv));
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Executes a move whose legality has already been established
    ///
    /// Also the simulation step of [`Board::is_checkmate()`], which is why it
    /// is split from the validating entry point.
    fn apply_move(&mut self, mv: Move) {
        let mut piece = self
            .get(mv.from)
            .expect("a validated move has a piece at its origin");

        // En-passant capture: the passed pawn sits beside the mover, not on
        // the destination square.
        if piece.kind == PieceKind::Pawn
            && self.en_passant_target == Some(mv.to)
            && self.get(mv.to).is_none()
        {
            let passed = Position::new(mv.from.rank(), mv.to.file());
            if let Some(victim) = self.get(passed) {
                self.record_capture(victim);
                self.put(passed, None);
            }
        }

        // The target is only live for the immediately following move.
        self.en_passant_target = None;
        if piece.kind == PieceKind::Pawn
            && (mv.to.rank() as i8 - mv.from.rank() as i8).abs() == 2
        {
            let midpoint = (mv.from.rank() + mv.to.rank()) / 2;
            self.en_passant_target = Some(Position::new(midpoint, mv.from.file()));
        }

        if let Some(victim) = self.get(mv.to) {
            self.record_capture(victim);
        }

        // Castling completion: the king only reports its destination; the
        // matching rook crosses here.
        if piece.kind == PieceKind::King
            && (mv.to.file() as i8 - mv.from.file() as i8).abs() == 2
        {
            let rank = mv.from.rank();
            let (rook_from, rook_to) = if mv.to.file() > mv.from.file() {
                (Position::new(rank, 7), Position::new(rank, 5))
            } else {
                (Position::new(rank, 0), Position::new(rank, 3))
            };
            if let Some(mut rook) = self.get(rook_from) {
                rook.has_moved = true;
                self.put(rook_from, None);
                self.put(rook_to, Some(rook));
            }
        }

        piece.has_moved = true;
        self.put(mv.from, None);
        self.put(mv.to, Some(piece));
    }

    fn record_capture(&mut self, victim: Piece) {
        self.captured.record(victim);
        if victim.kind == PieceKind::King {
            self.captured_king = Some(victim);
        }
    }

    /// Returns `true` if any piece of `by` has `pos` among its attack moves
    ///
    /// O(64 × per-piece move generation); no incremental attack maps are kept
    /// at this scale.
    pub fn is_square_attacked(&self, pos: Position, by: Color) -> bool {
        Position::iter().any(|from| match self.get(from) {
            Some(piece) if piece.color == by => piece.attack_moves(from, self).contains(&pos),
            _ => false,
        })
    }

    /// Returns the position of the king of color `c`, scanning the board
    ///
    /// `None` once that king has been captured.
    pub fn king_position(&self, c: Color) -> Option<Position> {
        Position::iter().find(|&pos| {
            matches!(self.get(pos), Some(p) if p.color == c && p.kind == PieceKind::King)
        })
    }

    /// Returns `true` if the king of color `c` is attacked
    ///
    /// A missing (captured) king is reported as not in check.
    pub fn is_king_in_check(&self, c: Color) -> bool {
        match self.king_position(c) {
            Some(pos) => self.is_square_attacked(pos, c.inv()),
            None => false,
        }
    }

    /// Returns `true` if the side `c` is in check and no move over all its
    /// pieces leaves its own king unattacked
    ///
    /// Every candidate is simulated on a clone through the regular
    /// move-application path, so en-passant and castling side effects are
    /// accounted for.
    pub fn is_checkmate(&self, c: Color) -> bool {
        if !self.is_king_in_check(c) {
            return false;
        }
        for from in Position::iter() {
            let piece = match self.get(from) {
                Some(p) if p.color == c => p,
                _ => continue,
            };
            for to in piece.legal_moves(from, self) {
                let mut next = self.clone();
                next.apply_move(Move::new(from, to));
                if !next.is_king_in_check(c) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if the square holds a pawn standing on its far rank
    pub fn can_be_promoted(&self, pos: Position) -> bool {
        matches!(
            self.get(pos),
            Some(p) if p.kind == PieceKind::Pawn && pos.rank() == geometry::promotion_rank(p.color)
        )
    }

    /// Replaces an eligible pawn with a freshly constructed piece of `kind`
    ///
    /// The pawn's identity is discarded; the replacement starts unmoved.
    pub fn promote_pawn(&mut self, pos: Position, kind: PieceKind) -> Result<(), PromotionError> {
        let pawn = match self.get(pos) {
            Some(p) if p.kind == PieceKind::Pawn => p,
            _ => return Err(PromotionError::NoPawn(pos)),
        };
        if !self.can_be_promoted(pos) {
            return Err(PromotionError::NotEligible(pos));
        }
        if matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return Err(PromotionError::BadKind(kind));
        }
        self.put(pos, Some(Piece::new(pawn.color, kind)));
        Ok(())
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`. All rendering stays
    /// on the caller's side; the board itself never writes to the console.
    ///
    /// # Example
    ///
    /// ```
    /// # use duelchess::board::{Board, PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim_end(), res.trim_start_matches('\n').trim_end());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(p: Option<Piece>) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in (0..8_u8).rev() {
            write!(f, "{}{}", (b'1' + rank) as char, Self::VERT_FRAME)?;
            for file in 0..8_u8 {
                write!(f, "{}", Self::cell(b.get(Position::new(rank, file))))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in 0..8 {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in 0..8_u8 {
            write!(f, "{}", (b'a' + file) as char)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(p: Option<Piece>) -> char {
        p.map_or('.', |p| p.as_char())
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(p: Option<Piece>) -> char {
        p.map_or('.', |p| p.as_utf8_char())
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
