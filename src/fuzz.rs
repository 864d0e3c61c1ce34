use std::fmt::Write;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    color::Color,
    coord::Coord,
    game::GameState,
    piece::{PieceKind, PromotionChoice},
};

impl From<chess::Square> for Coord {
    fn from(value: chess::Square) -> Self {
        Coord::new(
            value.get_file().to_index().try_into().unwrap(),
            value.get_rank().to_index().try_into().unwrap(),
        )
        .unwrap()
    }
}
fn legal_moves(game: &GameState) -> FxHashSet<(Coord, Coord)> {
    game.board()
        .pieces()
        .filter(|(_, piece)| piece.color == game.turn())
        .flat_map(|(source, piece)| {
            Coord::all()
                .filter(move |destination| game.is_legal(piece, source, *destination))
                .map(move |destination| (source, destination))
        })
        .collect()
}
fn fen(game: &GameState) -> String {
    let mut fen = format!("{} {} ", game.board(), game.turn().lowercase());
    let unmoved = |color: Color, col, kind| {
        Coord::new(col, color.home_row())
            .and_then(|position| game[position])
            .is_some_and(|piece| piece.is(color, kind) && !piece.moved)
    };
    let mut castling = String::new();
    for (color, col, symbol) in [
        (Color::White, 7, 'K'),
        (Color::White, 0, 'Q'),
        (Color::Black, 7, 'k'),
        (Color::Black, 0, 'q'),
    ] {
        if unmoved(color, 4, PieceKind::King) && unmoved(color, col, PieceKind::Rook) {
            castling.push(symbol);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push_str(&castling);
    match game.double_step() {
        Some(pawn) => {
            let behind = Coord::new(
                pawn.col(),
                pawn.row()
                    .checked_add_signed(game.turn().pawn_direction())
                    .unwrap(),
            )
            .unwrap();
            write!(fen, " {behind}").unwrap();
        }
        None => fen.push_str(" -"),
    }
    fen.push_str(" 0 1");
    fen
}
#[test]
fn matches_reference_move_generator() {
    let mut rng = SmallRng::seed_from_u64(0x_c4e5);
    for _ in 0..8 {
        let mut game = GameState::new();
        for _ in 0..120 {
            let moves = legal_moves(&game);
            let fen = fen(&game);
            let reference: chess::Board = fen.parse().unwrap();
            let reference: FxHashSet<(Coord, Coord)> = chess::MoveGen::new_legal(&reference)
                .map(|movement| (movement.get_source().into(), movement.get_dest().into()))
                .collect();
            if let Some((source, destination)) = moves.difference(&reference).next() {
                panic!("{source}{destination} is accepted but it's not a legal move\n{fen}");
            }
            if let Some((source, destination)) = reference.difference(&moves).next() {
                panic!("{source}{destination} is rejected but it's a legal move\n{fen}");
            }
            if moves.is_empty() {
                break;
            }
            let moves: Box<[_]> = moves.into_iter().collect();
            let (source, destination) = moves[rng.random_range(0..moves.len())];
            game.apply_move(source, destination, &mut PromotionChoice::Queen)
                .unwrap();
        }
    }
}
