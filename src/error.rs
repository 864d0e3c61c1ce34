use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBoard {
    pub col: i8,
    pub row: i8,
}
impl Display for OutOfBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {} and row {} is out of the board's range",
            self.col, self.row
        )?;
        Ok(())
    }
}
impl Error for OutOfBoard {}

/// Precondition violations of [`GameState::apply_move`](crate::game::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyMoveError {
    EmptySource(Coord),
    OutOfBoard(OutOfBoard),
}
impl From<OutOfBoard> for ApplyMoveError {
    fn from(value: OutOfBoard) -> Self {
        ApplyMoveError::OutOfBoard(value)
    }
}
impl Display for ApplyMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ApplyMoveError::EmptySource(position) => write!(f, "no piece found on {position}")?,
            ApplyMoveError::OutOfBoard(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ApplyMoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApplyMoveError::OutOfBoard(err) => Some(err),
            ApplyMoveError::EmptySource(_) => None,
        }
    }
}
