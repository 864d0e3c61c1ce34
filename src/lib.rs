//! Rules core of a two-player chess game.
//!
//! [`GameState`] owns the board and the side to move.
//! [`GameState::is_legal`] answers whether a single move may be played and
//! [`GameState::apply_move`] plays it. Move generation, notation and game
//! outcome detection are left to the embedding program.
//!
//! ```
//! use chess_rules::{GameState, PromotionChoice, coord};
//!
//! let mut game = GameState::new();
//! let pawn = game[coord!(e2)].unwrap();
//! assert!(game.is_legal(pawn, coord!(e2), coord!(e4)));
//! game.apply_move(coord!(e2), coord!(e4), &mut PromotionChoice::Queen)
//!     .unwrap();
//! assert_eq!(game.double_step(), Some(coord!(e4)));
//! ```
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod color;
pub mod coord;
pub mod error;
mod execute;
#[cfg(test)]
mod fuzz;
pub mod game;
mod legality;
pub mod piece;
pub mod rules;

pub use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    error::{ApplyMoveError, OutOfBoard},
    execute::{Applied, Promote},
    game::GameState,
    piece::{Piece, PieceKind, PromotionChoice},
    rules::{CheckSafety, Rules},
};

/// A [`Coord`] from its algebraic name, checked at compile time.
///
/// ```
/// use chess_rules::coord;
///
/// assert_eq!(coord!(e4).to_string(), "e4");
/// assert_eq!((coord!(a1).col(), coord!(a1).row()), (0, 0));
/// ```
#[macro_export]
macro_rules! coord {
    ($square:ident) => {
        const { $crate::coord::Coord::from_literal(stringify!($square)) }
    };
}
