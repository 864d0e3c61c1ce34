use std::{
    fmt::{self, Display, Formatter},
    iter::{Peekable, once, repeat},
    ops::{Index, IndexMut},
};

use crate::{
    color::Color,
    coord::Coord,
    error::OutOfBoard,
    piece::{Piece, PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([Option<Piece>; 64]);

impl Board {
    pub fn empty() -> Self {
        Board([None; 64])
    }
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for position in Coord::all() {
            let back = PieceKind::STARTING_CONFIGURATION[usize::from(position.col())];
            board[position] = [Color::White, Color::Black]
                .into_iter()
                .find_map(|color| {
                    if position.row() == color.home_row() {
                        Some(Piece::new(color, back))
                    } else if position.row() == color.pawn_home_row() {
                        Some(Piece::new(color, PieceKind::Pawn))
                    } else {
                        None
                    }
                });
        }
        board
    }
    /// Mutable access to a cell, failing when either axis is outside `0..8`.
    pub fn access_cell(&mut self, col: i8, row: i8) -> Result<&mut Option<Piece>, OutOfBoard> {
        let position = Coord::new_signed(col, row).ok_or(OutOfBoard { col, row })?;
        Ok(&mut self[position])
    }
    pub fn read_cell(&self, col: i8, row: i8) -> Option<Piece> {
        Coord::new_signed(col, row).and_then(|position| self[position])
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> {
        Coord::all().filter_map(|position| Some((position, self[position]?)))
    }
    pub fn king_of(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(position, _)| position)
    }
    /// Whether a piece occupies any cell strictly between `source` and
    /// `destination`.
    ///
    /// Squares that share no rank, file, or diagonal are reported as
    /// obstructed, so sliding moves of the wrong shape fail this check too.
    pub fn is_obstructed(&self, source: Coord, destination: Coord) -> bool {
        match source.between(destination) {
            Some(mut line) => line.any(|position| self[position].is_some()),
            None => true,
        }
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[index.index()]
    }
}
impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}
/// Writes the piece placement field of FEN.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row, first) in (0..8).rev().zip(once(true).chain(repeat(false))) {
            if !first {
                write!(f, "/")?;
            }
            let cells = (0..8).map(|col| {
                Coord::new(col, row).and_then(|position| self[position])
            });
            for cell in CellIter(cells.peekable()) {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Cell {
    Piece(Piece),
    Space(u8),
}
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Piece(piece) => write!(f, "{}", piece.fen())?,
            Cell::Space(space) => write!(f, "{space}")?,
        }
        Ok(())
    }
}
struct CellIter<T>(Peekable<T>)
where
    T: Iterator;

impl<T> Iterator for CellIter<T>
where
    T: Iterator<Item = Option<Piece>>,
{
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|piece| match piece {
            Some(piece) => Cell::Piece(piece),
            None => {
                let mut count = 1;
                while self.0.peek().is_some_and(Option::is_none) {
                    self.0.next();
                    count += 1;
                }
                Cell::Space(count)
            }
        })
    }
}
