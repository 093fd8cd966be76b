//! Pieces and per-kind move generation
//!
//! A piece is a plain value; the board cell holding it is its position. Move
//! generation takes the origin square and a board snapshot and produces two
//! separate destination sets:
//!
//! - *movement moves* — non-capturing relocations onto empty squares (plus the
//!   castling destinations for an eligible king);
//! - *attack moves* — squares holding a capturable enemy piece (plus the
//!   en-passant target square for pawns).

use crate::board::Board;
use duelchess_base::geometry;
use duelchess_base::types::{Color, PieceKind, Position};

use arrayvec::ArrayVec;

/// Destinations reachable by one piece from one square
///
/// A queen in the open tops out at 27 squares, so the list never spills.
pub type TargetList = ArrayVec<Position, 28>;

const LINE_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A piece as stored in a board cell
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Cleared on creation, set on the first executed move. Gates pawn
    /// double-steps and castling eligibility.
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// ASCII letter, uppercase for White and lowercase for Black
    pub fn as_char(&self) -> char {
        match self.color {
            Color::White => self.kind.as_char(),
            Color::Black => self.kind.as_char().to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }

    /// Non-capturing destinations from `from`
    pub fn movement_moves(&self, from: Position, board: &Board) -> TargetList {
        let mut moves = TargetList::new();
        match self.kind {
            PieceKind::Pawn => self.pawn_movement(from, board, &mut moves),
            PieceKind::Knight => push_step_movement(board, from, &KNIGHT_JUMPS, &mut moves),
            PieceKind::Bishop => push_ray_movement(board, from, &DIAG_DIRS, &mut moves),
            PieceKind::Rook => push_ray_movement(board, from, &LINE_DIRS, &mut moves),
            PieceKind::Queen => {
                push_ray_movement(board, from, &LINE_DIRS, &mut moves);
                push_ray_movement(board, from, &DIAG_DIRS, &mut moves);
            }
            PieceKind::King => {
                push_step_movement(board, from, &KING_STEPS, &mut moves);
                self.castling_moves(from, board, &mut moves);
            }
        }
        moves
    }

    /// Capturing destinations from `from`
    pub fn attack_moves(&self, from: Position, board: &Board) -> TargetList {
        let mut moves = TargetList::new();
        match self.kind {
            PieceKind::Pawn => self.pawn_attacks(from, board, &mut moves),
            PieceKind::Knight => {
                push_step_attacks(board, from, self.color, &KNIGHT_JUMPS, &mut moves)
            }
            PieceKind::Bishop => push_ray_attacks(board, from, self.color, &DIAG_DIRS, &mut moves),
            PieceKind::Rook => push_ray_attacks(board, from, self.color, &LINE_DIRS, &mut moves),
            PieceKind::Queen => {
                push_ray_attacks(board, from, self.color, &LINE_DIRS, &mut moves);
                push_ray_attacks(board, from, self.color, &DIAG_DIRS, &mut moves);
            }
            PieceKind::King => push_step_attacks(board, from, self.color, &KING_STEPS, &mut moves),
        }
        moves
    }

    /// Union of movement and attack moves, movement first
    pub fn legal_moves(&self, from: Position, board: &Board) -> TargetList {
        let mut moves = self.movement_moves(from, board);
        moves.extend(self.attack_moves(from, board));
        moves
    }

    pub fn is_legal_move(&self, from: Position, to: Position, board: &Board) -> bool {
        self.legal_moves(from, board).contains(&to)
    }

    fn pawn_movement(&self, from: Position, board: &Board, moves: &mut TargetList) {
        let dir = geometry::pawn_forward_dir(self.color);
        let one_step = match from.try_shift(dir, 0) {
            Some(pos) => pos,
            None => return,
        };
        if board.get(one_step).is_some() {
            return;
        }
        moves.push(one_step);

        if self.has_moved {
            return;
        }
        // Both the intermediate and the destination square must be empty.
        if let Some(two_steps) = one_step.try_shift(dir, 0) {
            if board.get(two_steps).is_none() {
                moves.push(two_steps);
            }
        }
    }

    fn pawn_attacks(&self, from: Position, board: &Board, moves: &mut TargetList) {
        let dir = geometry::pawn_forward_dir(self.color);
        for delta_file in [-1, 1] {
            let to = match from.try_shift(dir, delta_file) {
                Some(pos) => pos,
                None => continue,
            };
            match board.get(to) {
                Some(other) if other.color != self.color => moves.push(to),
                None if board.en_passant_target() == Some(to) => moves.push(to),
                _ => {}
            }
        }
    }

    /// Appends the castling destinations an unmoved, unchecked king may take.
    ///
    /// Only the destination square is reported; relocating the rook is part of
    /// move execution on the board.
    fn castling_moves(&self, from: Position, board: &Board, moves: &mut TargetList) {
        if self.has_moved || board.is_king_in_check(self.color) {
            return;
        }
        let rank = from.rank();
        let enemy = self.color.inv();

        let unmoved_rook = |file: u8| {
            matches!(
                board.get(Position::new(rank, file)),
                Some(p) if p.color == self.color && p.kind == PieceKind::Rook && !p.has_moved
            )
        };
        let all_empty = |files: &[u8]| {
            files
                .iter()
                .all(|&file| board.get(Position::new(rank, file)).is_none())
        };
        let all_safe = |files: &[u8]| {
            files
                .iter()
                .all(|&file| !board.is_square_attacked(Position::new(rank, file), enemy))
        };

        if unmoved_rook(7) && all_empty(&[5, 6]) && all_safe(&[5, 6]) {
            moves.push(Position::new(rank, 6));
        }
        if unmoved_rook(0) && all_empty(&[1, 2, 3]) && all_safe(&[2, 3]) {
            moves.push(Position::new(rank, 2));
        }
    }
}

fn push_step_movement(
    board: &Board,
    from: Position,
    steps: &[(i8, i8)],
    moves: &mut TargetList,
) {
    for &(delta_rank, delta_file) in steps {
        if let Some(to) = from.try_shift(delta_rank, delta_file) {
            if board.get(to).is_none() {
                moves.push(to);
            }
        }
    }
}

fn push_step_attacks(
    board: &Board,
    from: Position,
    color: Color,
    steps: &[(i8, i8)],
    moves: &mut TargetList,
) {
    for &(delta_rank, delta_file) in steps {
        if let Some(to) = from.try_shift(delta_rank, delta_file) {
            if matches!(board.get(to), Some(p) if p.color != color) {
                moves.push(to);
            }
        }
    }
}

fn push_ray_movement(board: &Board, from: Position, dirs: &[(i8, i8)], moves: &mut TargetList) {
    for &(delta_rank, delta_file) in dirs {
        let mut cur = from;
        while let Some(to) = cur.try_shift(delta_rank, delta_file) {
            if board.get(to).is_some() {
                break;
            }
            moves.push(to);
            cur = to;
        }
    }
}

fn push_ray_attacks(
    board: &Board,
    from: Position,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut TargetList,
) {
    for &(delta_rank, delta_file) in dirs {
        let mut cur = from;
        while let Some(to) = cur.try_shift(delta_rank, delta_file) {
            if let Some(other) = board.get(to) {
                if other.color != color {
                    moves.push(to);
                }
                break;
            }
            cur = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone(kind: PieceKind, at: Position) -> (Board, Piece) {
        let mut board = Board::empty();
        let piece = Piece::new(Color::White, kind);
        board.put(at, Some(piece));
        (board, piece)
    }

    #[test]
    fn test_knight_counts() {
        let center = Position::new(4, 4);
        let (board, knight) = lone(PieceKind::Knight, center);
        assert_eq!(knight.legal_moves(center, &board).len(), 8);

        let corner = Position::new(0, 0);
        let (board, knight) = lone(PieceKind::Knight, corner);
        assert_eq!(knight.legal_moves(corner, &board).len(), 2);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut board = Board::initial();
        let from = Position::new(0, 1);
        let knight = board.get(from).unwrap();
        let moves = knight.legal_moves(from, &board);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Position::new(2, 0)));
        assert!(moves.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_ray_stops_at_blocker() {
        let from = Position::new(0, 0);
        let (mut board, rook) = lone(PieceKind::Rook, from);

        // Enemy blocker: the blocking square is an attack move, nothing beyond.
        board.put(Position::new(0, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let movement = rook.movement_moves(from, &board);
        assert!(movement.contains(&Position::new(0, 1)));
        assert!(movement.contains(&Position::new(0, 2)));
        assert!(!movement.contains(&Position::new(0, 3)));
        assert!(!movement.contains(&Position::new(0, 4)));
        let attacks = rook.attack_moves(from, &board);
        assert_eq!(attacks.as_slice(), [Position::new(0, 3)]);

        // Friendly blocker: no attack move, ray still stops.
        board.put(Position::new(0, 3), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(rook.attack_moves(from, &board).is_empty());
        assert!(!rook.movement_moves(from, &board).contains(&Position::new(0, 3)));
    }

    #[test]
    fn test_bishop_and_queen_rays() {
        let from = Position::new(4, 4);
        let (board, bishop) = lone(PieceKind::Bishop, from);
        assert_eq!(bishop.legal_moves(from, &board).len(), 13);

        let (board, queen) = lone(PieceKind::Queen, from);
        assert_eq!(queen.legal_moves(from, &board).len(), 27);
    }

    #[test]
    fn test_pawn_movement_degrades_after_first_move() {
        let from = Position::new(1, 4);
        let (board, mut pawn) = lone(PieceKind::Pawn, from);
        assert_eq!(pawn.movement_moves(from, &board).len(), 2);

        pawn.has_moved = true;
        let moves = pawn.movement_moves(from, &board);
        assert_eq!(moves.as_slice(), [Position::new(2, 4)]);
    }

    #[test]
    fn test_pawn_double_step_needs_clear_path() {
        let from = Position::new(1, 4);
        let (mut board, pawn) = lone(PieceKind::Pawn, from);
        board.put(Position::new(2, 4), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(pawn.movement_moves(from, &board).is_empty());

        board.put(Position::new(2, 4), None);
        board.put(Position::new(3, 4), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert_eq!(pawn.movement_moves(from, &board).len(), 1);
    }

    #[test]
    fn test_pawn_attacks_only_enemies() {
        let from = Position::new(3, 4);
        let (mut board, pawn) = lone(PieceKind::Pawn, from);
        assert!(pawn.attack_moves(from, &board).is_empty());

        board.put(Position::new(4, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.put(Position::new(4, 5), Some(Piece::new(Color::White, PieceKind::Pawn)));
        let attacks = pawn.attack_moves(from, &board);
        assert_eq!(attacks.as_slice(), [Position::new(4, 3)]);
    }

    #[test]
    fn test_king_steps() {
        let center = Position::new(4, 4);
        let (board, king) = lone(PieceKind::King, center);
        assert_eq!(king.movement_moves(center, &board).len(), 8);
        assert!(king.attack_moves(center, &board).is_empty());
    }

    #[test]
    fn test_castling_destinations() {
        let e1 = Position::new(0, 4);
        let mut board = Board::empty();
        let king = Piece::new(Color::White, PieceKind::King);
        board.put(e1, Some(king));
        board.put(Position::new(0, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.put(Position::new(0, 7), Some(Piece::new(Color::White, PieceKind::Rook)));

        let moves = king.movement_moves(e1, &board);
        assert!(moves.contains(&Position::new(0, 6)));
        assert!(moves.contains(&Position::new(0, 2)));

        // A blocked queenside corridor kills only the queenside option.
        board.put(Position::new(0, 1), Some(Piece::new(Color::White, PieceKind::Knight)));
        let moves = king.movement_moves(e1, &board);
        assert!(moves.contains(&Position::new(0, 6)));
        assert!(!moves.contains(&Position::new(0, 2)));

        // A moved rook offers no castling.
        let mut stale_rook = Piece::new(Color::White, PieceKind::Rook);
        stale_rook.has_moved = true;
        board.put(Position::new(0, 7), Some(stale_rook));
        let moves = king.movement_moves(e1, &board);
        assert!(!moves.contains(&Position::new(0, 6)));
    }

    #[test]
    fn test_castling_denied_in_check() {
        let e1 = Position::new(0, 4);
        let mut board = Board::empty();
        let king = Piece::new(Color::White, PieceKind::King);
        board.put(e1, Some(king));
        board.put(Position::new(0, 7), Some(Piece::new(Color::White, PieceKind::Rook)));
        // Black rook gives check along the e-file.
        board.put(Position::new(7, 4), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(board.is_king_in_check(Color::White));
        assert!(!king.movement_moves(e1, &board).contains(&Position::new(0, 6)));

        // A moved king never castles.
        let mut wandered = king;
        wandered.has_moved = true;
        board.put(Position::new(7, 4), None);
        board.put(e1, Some(wandered));
        assert!(!wandered.movement_moves(e1, &board).contains(&Position::new(0, 6)));
    }
}
