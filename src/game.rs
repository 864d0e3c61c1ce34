use std::ops::Index;

use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    error::OutOfBoard,
    piece::Piece,
    rules::Rules,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    /// The pawn that double-stepped on the previous move, if any.
    pub(crate) double_step: Option<Coord>,
    pub(crate) rules: Rules,
}
impl GameState {
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            turn: Color::White,
            double_step: None,
            rules: Rules::default(),
        }
    }
    /// An empty board, pieces can then be added with [`place`](GameState::place).
    pub fn empty(turn: Color) -> Self {
        GameState {
            board: Board::empty(),
            turn,
            double_step: None,
            rules: Rules::default(),
        }
    }
    pub fn with_rules(self, rules: Rules) -> Self {
        GameState { rules, ..self }
    }
    pub fn place(&mut self, position: Coord, piece: Piece) -> Option<Piece> {
        self.board[position].replace(piece)
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn double_step(&self) -> Option<Coord> {
        self.double_step
    }
    pub fn read_cell(&self, col: i8, row: i8) -> Option<Piece> {
        self.board.read_cell(col, row)
    }
    pub fn access_cell(&mut self, col: i8, row: i8) -> Result<&mut Option<Piece>, OutOfBoard> {
        self.board.access_cell(col, row)
    }
    pub(crate) fn toggle_turn(&mut self) {
        self.turn = !self.turn;
    }
}
impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
impl Index<Coord> for GameState {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.board[index]
    }
}
#[cfg(test)]
mod test {
    use crate::{
        color::Color,
        coord,
        game::GameState,
        piece::{Piece, PieceKind},
        rules::{CheckSafety, Rules},
    };

    #[test]
    fn new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.double_step(), None);
        assert_eq!(game.rules().check_safety, CheckSafety::Simulated);
        assert_eq!(
            game[coord!(d8)],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }
    #[test]
    fn place_replaces() {
        let mut game = GameState::empty(Color::Black).with_rules(Rules::approximate());
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(game.place(coord!(c3), rook), None);
        assert_eq!(game.place(coord!(c3), knight), Some(rook));
        assert_eq!(game.read_cell(2, 2), Some(knight));
        assert_eq!(game.turn(), Color::Black);
        assert!(game.rules().check_safety.is_approximate());
    }
    #[test]
    fn toggle_turn_alternates() {
        let mut game = GameState::new();
        game.toggle_turn();
        assert_eq!(game.turn(), Color::Black);
        game.toggle_turn();
        assert_eq!(game.turn(), Color::White);
    }
}
