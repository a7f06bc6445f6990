//! Knight pseudo-move generation: the eight leaper offsets.

use super::MoveList;
use crate::attacks::KNIGHT_OFFSETS;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

pub(crate) fn generate(position: &Position, mover: Color, list: &mut MoveList) {
    for square in Square::all() {
        let Some(piece) = position.piece_at(square) else {
            continue;
        };
        if piece.kind() != PieceKind::Knight || piece.color() != mover {
            continue;
        }

        for offset in KNIGHT_OFFSETS {
            let Some(dest) = square.offset(offset.0, offset.1) else {
                continue;
            };
            match position.piece_at(dest) {
                None => list.push(Move::new_quiet(PieceKind::Knight, mover, square, dest)),
                Some(target) if target.color() != mover && target.kind() != PieceKind::King => {
                    list.push(Move::new_capture(
                        PieceKind::Knight,
                        mover,
                        square,
                        dest,
                        target.kind(),
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::fen::load_position;
    use crate::movegen::MoveList;
    use crate::square::Square;

    fn generated(fen: &str) -> Vec<crate::chess_move::Move> {
        let pos = load_position(fen).unwrap();
        let mut list = MoveList::new();
        generate(&pos, pos.side_to_move(), &mut list);
        list.as_slice().to_vec()
    }

    #[test]
    fn knight_in_center_has_eight_destinations() {
        let moves = generated("8/8/8/4N3/8/8/8/4K2k w - -");
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_destinations() {
        let moves = generated("8/8/8/8/8/8/8/N3K2k w - -");
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn knight_can_capture_enemy_piece() {
        let moves = generated("8/8/8/3p4/1N6/8/8/4K2k w - -");
        assert!(moves
            .iter()
            .any(|m| m.to == Square::D5 && m.capture.is_some()));
    }

    #[test]
    fn knight_cannot_capture_enemy_king() {
        let moves = generated("8/8/3k4/8/1N6/8/8/4K3 w - -");
        assert!(moves.iter().all(|m| m.to != Square::D6));
    }

    #[test]
    fn knight_blocked_by_friendly_piece() {
        let moves = generated("8/8/8/3P4/1N6/8/8/4K2k w - -");
        assert!(!moves.iter().any(|m| m.to == Square::D5));
    }
}
