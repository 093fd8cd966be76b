use crate::types::Color;

pub const fn home_rank(c: Color) -> u8 {
    match c {
        Color::White => 0,
        Color::Black => 7,
    }
}

pub const fn pawn_rank(c: Color) -> u8 {
    match c {
        Color::White => 1,
        Color::Black => 6,
    }
}

pub const fn promotion_rank(c: Color) -> u8 {
    match c {
        Color::White => 7,
        Color::Black => 0,
    }
}

pub const fn pawn_forward_dir(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}
