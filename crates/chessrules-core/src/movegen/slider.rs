//! Bishop / rook / queen pseudo-move generation: walk each relevant
//! direction until off-board, a friendly piece, or an enemy piece (capture,
//! then stop).

use super::MoveList;
use crate::attacks::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &DIAGONAL_DIRS,
        PieceKind::Rook => &ORTHOGONAL_DIRS,
        PieceKind::Queen => {
            const ALL: [(i8, i8); 8] = [
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
            ];
            &ALL
        }
        _ => &[],
    }
}

pub(crate) fn generate(position: &Position, mover: Color, kind: PieceKind, list: &mut MoveList) {
    for square in Square::all() {
        let Some(piece) = position.piece_at(square) else {
            continue;
        };
        if piece.kind() != kind || piece.color() != mover {
            continue;
        }

        for dir in directions(kind) {
            let mut current = square;
            loop {
                let Some(next) = current.offset(dir.0, dir.1) else {
                    break;
                };
                current = next;

                match position.piece_at(current) {
                    None => {
                        list.push(Move::new_quiet(kind, mover, square, current));
                    }
                    Some(target) if target.color() != mover && target.kind() != PieceKind::King => {
                        list.push(Move::new_capture(kind, mover, square, current, target.kind()));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
