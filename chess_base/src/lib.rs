//! # Base types for duelchess
//!
//! This is an auxiliary crate for `duelchess`, which contains the foundational value
//! types of the rules engine: colors, piece kinds, board coordinates and their two
//! text notations.
//!
//! Normally you don't want to use this crate directly. Use `duelchess` instead.

pub mod geometry;
pub mod types;
