//! King pseudo-move generation: the eight adjacent offsets, plus castling
//! driven by the castling side table.

use super::MoveList;
use crate::attacks::{is_attacked, ALL_DIRS};
use crate::castle_rights::CASTLING_RULES;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

pub(crate) fn generate(position: &Position, mover: Color, list: &mut MoveList) {
    let king_square = position.king_square(mover);

    for dir in ALL_DIRS {
        let Some(dest) = king_square.offset(dir.0, dir.1) else {
            continue;
        };
        match position.piece_at(dest) {
            None => list.push(Move::new_quiet(PieceKind::King, mover, king_square, dest)),
            Some(target) if target.color() != mover && target.kind() != PieceKind::King => {
                list.push(Move::new_capture(
                    PieceKind::King,
                    mover,
                    king_square,
                    dest,
                    target.kind(),
                ));
            }
            Some(_) => {}
        }
    }

    generate_castles(position, mover, king_square, list);
}

fn generate_castles(position: &Position, mover: Color, king_square: Square, list: &mut MoveList) {
    let enemy = mover.flip();

    for rule in CASTLING_RULES.iter().filter(|rule| rule.color == mover) {
        if !position.castle_rights().has(rule.color, rule.side) {
            continue;
        }
        if king_square != rule.king_from {
            continue;
        }
        if rule.empty_squares.iter().any(|&sq| position.piece_at(sq).is_some()) {
            continue;
        }
        if rule
            .safe_squares
            .iter()
            .any(|&sq| is_attacked(position, sq, enemy))
        {
            continue;
        }

        list.push(Move::new_castle(mover, rule.king_from, rule.king_to));
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
    fn king_in_center_has_eight_destinations() {
        let moves = generated("8/8/8/4K3/8/8/8/7k w - -");
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn king_in_corner_has_three_destinations() {
        let moves = generated("8/8/8/8/8/8/8/K6k w - -");
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn castling_requires_empty_path() {
        let moves = generated("4k3/8/8/8/8/8/8/R2PK2R w KQ -");
        assert!(!moves.iter().any(|m| m.castle && m.to == Square::C1));
        assert!(moves.iter().any(|m| m.castle && m.to == Square::G1));
    }

    #[test]
    fn castling_forbidden_while_in_check() {
        let moves = generated("4k3/8/8/8/8/8/4r3/4K2R w K -");
        assert!(!moves.iter().any(|m| m.castle));
    }

    #[test]
    fn castling_forbidden_through_attacked_square() {
        let moves = generated("4k3/8/8/8/8/5r2/8/4K2R w K -");
        assert!(!moves.iter().any(|m| m.castle));
    }

    #[test]
    fn castling_available_both_sides_when_clear_and_safe() {
        let moves = generated("4k3/8/8/8/8/8/8/R3K2R w KQ -");
        assert!(moves.iter().any(|m| m.castle && m.to == Square::G1));
        assert!(moves.iter().any(|m| m.castle && m.to == Square::C1));
    }

    #[test]
    fn castling_unavailable_without_rights() {
        let moves = generated("4k3/8/8/8/8/8/8/R3K2R w - -");
        assert!(!moves.iter().any(|m| m.castle));
    }
}
