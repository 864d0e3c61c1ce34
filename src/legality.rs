use log::trace;

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    game::GameState,
    piece::{Piece, PieceKind},
    rules::CheckSafety,
};

impl Board {
    /// Whether a piece of `attacker` color attacks `target`.
    ///
    /// A piece standing on `excused` is ignored, and sliding rays stop there
    /// as if it were occupied by the mover.
    fn is_attacked_by_except(&self, target: Coord, attacker: Color, excused: Option<Coord>) -> bool {
        let knight = Vector::KNIGHT_MOVES
            .into_iter()
            .filter_map(|movement| target.move_by(movement))
            .filter(|position| Some(*position) != excused)
            .any(|position| {
                self[position].is_some_and(|piece| piece.is(attacker, PieceKind::Knight))
            });
        let slider = Vector::QUEEN_DIRECTIONS.into_iter().any(|direction| {
            let matching = if direction.is_diagonal() {
                PieceKind::Bishop
            } else {
                PieceKind::Rook
            };
            target
                .line_exclusive(direction)
                .find_map(|position| {
                    if Some(position) == excused {
                        Some(None)
                    } else {
                        self[position].map(Some)
                    }
                })
                .flatten()
                .is_some_and(|piece| {
                    piece.color == attacker
                        && (piece.kind == PieceKind::Queen || piece.kind == matching)
                })
        });
        let pawn = Vector::pawn_attacks(-attacker.pawn_direction())
            .into_iter()
            .filter_map(|movement| target.move_by(movement))
            .filter(|position| Some(*position) != excused)
            .any(|position| {
                self[position].is_some_and(|piece| piece.is(attacker, PieceKind::Pawn))
            });
        knight || slider || pawn
    }
    pub fn is_attacked_by(&self, target: Coord, attacker: Color) -> bool {
        self.is_attacked_by_except(target, attacker, None)
            || Vector::KING_MOVES
                .into_iter()
                .filter_map(|movement| target.move_by(movement))
                .any(|position| {
                    self[position].is_some_and(|piece| piece.is(attacker, PieceKind::King))
                })
    }
}
impl GameState {
    /// Decides whether `piece`, standing on `source`, may move to
    /// `destination` in the current state.
    ///
    /// Rule violations are reported as `false`; nothing is mutated.
    pub fn is_legal(&self, piece: Piece, source: Coord, destination: Coord) -> bool {
        if piece.color != self.turn {
            trace!("{piece} on {source} rejected: it is {}'s turn", self.turn);
            return false;
        }
        if self.board[source] != Some(piece) {
            trace!("{piece} rejected: it is not on {source}");
            return false;
        }
        if source == destination {
            trace!("{piece} on {source} rejected: null move");
            return false;
        }
        if self.board[destination].is_some_and(|occupant| occupant.color == piece.color) {
            trace!("{piece} on {source} rejected: {destination} holds a {} piece", piece.color);
            return false;
        }
        if self.exposes_king(piece, source, destination) {
            trace!("{piece} from {source} to {destination} rejected: king would be attacked");
            return false;
        }
        let movement = destination - source;
        let reachable = match piece.kind {
            PieceKind::King => {
                movement.is_king_move() || self.can_castle(piece, source, destination, movement)
            }
            PieceKind::Queen => !self.board.is_obstructed(source, destination),
            PieceKind::Bishop => {
                movement.is_diagonal() && !self.board.is_obstructed(source, destination)
            }
            PieceKind::Knight => movement.is_knight_move(),
            PieceKind::Rook => {
                movement.is_orthogonal() && !self.board.is_obstructed(source, destination)
            }
            PieceKind::Pawn => self.pawn_reaches(piece, source, destination, movement),
        };
        if !reachable {
            trace!("{piece} cannot reach {destination} from {source}");
        }
        reachable
    }
    fn exposes_king(&self, piece: Piece, source: Coord, destination: Coord) -> bool {
        match self.rules.check_safety {
            CheckSafety::Simulated => {
                let mut scratch = self.clone();
                if scratch.displace(source, destination).is_err() {
                    return true;
                }
                scratch
                    .board
                    .king_of(piece.color)
                    .is_some_and(|king| scratch.board.is_attacked_by(king, !piece.color))
            }
            CheckSafety::Approximate => self.board.king_of(piece.color).is_some_and(|king| {
                self.board
                    .is_attacked_by_except(king, !piece.color, Some(destination))
            }),
        }
    }
    fn can_castle(&self, king: Piece, source: Coord, destination: Coord, movement: Vector) -> bool {
        let row = king.color.home_row();
        let (rook_col, passed_col) = match destination.col() {
            6 => (7, 5),
            2 => (0, 3),
            _ => return false,
        };
        if king.moved || movement.y != 0 || source.col() != 4 || source.row() != row {
            return false;
        }
        let (Some(rook), Some(passed)) = (Coord::new(rook_col, row), Coord::new(passed_col, row))
        else {
            return false;
        };
        if !self.board[rook].is_some_and(|piece| piece.is(king.color, PieceKind::Rook) && !piece.moved)
        {
            trace!("{king} cannot castle: no unmoved rook on {rook}");
            return false;
        }
        if self.board.is_obstructed(source, rook) {
            trace!("{king} cannot castle: pieces stand between {source} and {rook}");
            return false;
        }
        // the approximate scans already ran on the king's current square
        if self.rules.check_safety.is_simulated()
            && self.board.is_attacked_by(source, !king.color)
        {
            trace!("{king} cannot castle out of check");
            return false;
        }
        self.is_legal(king, source, passed)
    }
    fn pawn_reaches(&self, pawn: Piece, source: Coord, destination: Coord, movement: Vector) -> bool {
        let direction = pawn.color.pawn_direction();
        let target = self.board[destination];
        match (movement.x.unsigned_abs(), movement.y * direction) {
            (0, 1) => target.is_none(),
            (0, 2) => {
                source.row() == pawn.color.pawn_home_row()
                    && target.is_none()
                    && !self.board.is_obstructed(source, destination)
            }
            (1, 1) => target.is_some() || self.is_en_passant(pawn, source, destination),
            _ => false,
        }
    }
    fn is_en_passant(&self, pawn: Piece, source: Coord, destination: Coord) -> bool {
        let Some(passed) = destination.move_by(Vector {
            x: 0,
            y: -pawn.color.pawn_direction(),
        }) else {
            return false;
        };
        source.row() == pawn.color.en_passant_row()
            && self.double_step == Some(passed)
            && self.board[passed].is_some_and(|piece| piece.is(!pawn.color, PieceKind::Pawn))
    }
}
