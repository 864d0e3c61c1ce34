use log::debug;

use crate::{
    coord::Coord,
    error::ApplyMoveError,
    game::GameState,
    piece::{Piece, PieceKind, PromotionChoice},
};

/// Supplies the kind a pawn turns into when it reaches its promotion row.
///
/// The presentation layer implements this, typically by asking the player.
/// It is called synchronously while the move is being applied.
pub trait Promote {
    fn promotion(&mut self, pawn: Piece, destination: Coord) -> PromotionChoice;
}
impl<F> Promote for F
where
    F: FnMut(Piece, Coord) -> PromotionChoice,
{
    fn promotion(&mut self, pawn: Piece, destination: Coord) -> PromotionChoice {
        self(pawn, destination)
    }
}
impl Promote for PromotionChoice {
    fn promotion(&mut self, _: Piece, _: Coord) -> PromotionChoice {
        *self
    }
}

/// What [`GameState::apply_move`] did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Applied {
    /// The moved piece as it stands on `destination`.
    pub piece: Piece,
    pub source: Coord,
    pub destination: Coord,
    /// The removed piece and where it stood; differs from `destination` for
    /// en passant.
    pub captured: Option<(Coord, Piece)>,
    pub castling_rook: Option<(Coord, Coord)>,
    pub promotion: Option<PieceKind>,
    /// Whether the move is a pawn double step that may be captured en passant.
    pub double_step: bool,
}
impl GameState {
    /// Plays a move already accepted by [`is_legal`](GameState::is_legal) and
    /// passes the turn.
    ///
    /// The move is not validated again. Errors only signal broken
    /// preconditions, such as an empty `source`.
    pub fn apply_move<P>(
        &mut self,
        source: Coord,
        destination: Coord,
        promote: &mut P,
    ) -> Result<Applied, ApplyMoveError>
    where
        P: Promote + ?Sized,
    {
        let mut applied = self.displace(source, destination)?;
        if applied.piece.kind == PieceKind::Pawn
            && destination.row() == applied.piece.color.promotion_row()
        {
            let kind = promote.promotion(applied.piece, destination).into();
            if let Some(piece) = &mut self.board[destination] {
                piece.kind = kind;
                applied.piece = *piece;
            }
            applied.promotion = Some(kind);
            debug!("pawn on {destination} promoted to {kind}");
        }
        if let Some((position, captured)) = applied.captured {
            debug!("{captured} on {position} captured");
        }
        if let Some((origin, destination)) = applied.castling_rook {
            debug!("castling rook moved from {origin} to {destination}");
        }
        debug!("{} moved from {source} to {destination}", applied.piece);
        self.toggle_turn();
        Ok(applied)
    }
    /// Relocates the piece on `source` with every side effect of the move
    /// except promotion and passing the turn.
    pub(crate) fn displace(
        &mut self,
        source: Coord,
        destination: Coord,
    ) -> Result<Applied, ApplyMoveError> {
        let mut piece = self.board[source].ok_or(ApplyMoveError::EmptySource(source))?;
        self.double_step = None;
        piece.moved = true;
        let movement = destination - source;

        #[allow(clippy::cast_possible_wrap, reason = "axes are below 8")]
        let (col, row) = (destination.col() as i8, destination.row() as i8);
        let mut captured = None;
        if piece.kind == PieceKind::Pawn && movement.x != 0 && self.board[destination].is_none() {
            let behind = row - piece.color.pawn_direction();
            if self.board.read_cell(col, behind).is_some() {
                captured = self
                    .board
                    .access_cell(col, behind)?
                    .take()
                    .zip(Coord::new_signed(col, behind))
                    .map(|(piece, position)| (position, piece));
            }
        }
        if let Some(occupant) = self.board[destination].take() {
            captured = Some((destination, occupant));
        }
        let mut castling_rook = None;
        if piece.kind == PieceKind::King
            && source.col() == 4
            && movement.y == 0
            && movement.x.unsigned_abs() == 2
        {
            let (rook_col, rook_destination_col) = if movement.x > 0 { (7, 5) } else { (0, 3) };
            if let Some(mut rook) = self.board.access_cell(rook_col, row)?.take() {
                rook.moved = true;
                *self.board.access_cell(rook_destination_col, row)? = Some(rook);
                castling_rook = Coord::new_signed(rook_col, row)
                    .zip(Coord::new_signed(rook_destination_col, row));
            }
        }
        let double_step = piece.kind == PieceKind::Pawn && movement.y.unsigned_abs() == 2;
        if double_step {
            self.double_step = Some(destination);
        }
        self.board[source] = None;
        self.board[destination] = Some(piece);
        Ok(Applied {
            piece,
            source,
            destination,
            captured,
            castling_rook,
            promotion: None,
            double_step,
        })
    }
}
