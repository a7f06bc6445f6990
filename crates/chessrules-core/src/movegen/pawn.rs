//! Pawn pseudo-move generation: forward pushes, double pushes, diagonal
//! captures, en passant, and promotion on the last rank.

use super::MoveList;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

fn home_rank(mover: Color) -> Rank {
    match mover {
        Color::White => Rank::Rank2,
        Color::Black => Rank::Rank7,
    }
}

fn last_rank(mover: Color) -> Rank {
    match mover {
        Color::White => Rank::Rank8,
        Color::Black => Rank::Rank1,
    }
}

fn forward(mover: Color) -> i8 {
    match mover {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub(crate) fn generate(position: &Position, mover: Color, list: &mut MoveList) {
    let dir = forward(mover);

    for square in Square::all() {
        let Some(piece) = position.piece_at(square) else {
            continue;
        };
        if piece.kind() != PieceKind::Pawn || piece.color() != mover {
            continue;
        }

        if let Some(one) = square.offset(dir, 0) {
            if position.piece_at(one).is_none() {
                push_push_or_promotion(mover, square, one, list);

                if square.rank() == home_rank(mover) {
                    if let Some(two) = one.offset(dir, 0) {
                        if position.piece_at(two).is_none() {
                            list.push(Move::new_quiet(PieceKind::Pawn, mover, square, two));
                        }
                    }
                }
            }
        }

        for d_file in [-1i8, 1] {
            let Some(dest) = square.offset(dir, d_file) else {
                continue;
            };

            if let Some(target) = position.piece_at(dest) {
                if target.color() != mover && target.kind() != PieceKind::King {
                    push_capture_or_promotion(mover, square, dest, target.kind(), list);
                }
                continue;
            }

            if position.ep_file() == Some(dest.file()) {
                let captured_square = Square::new(square.rank(), dest.file());
                if let Some(captured) = position.piece_at(captured_square) {
                    if captured.kind() == PieceKind::Pawn && captured.color() != mover {
                        list.push(Move::new_en_passant(mover, square, dest));
                    }
                }
            }
        }
    }
}

fn push_push_or_promotion(mover: Color, from: Square, to: Square, list: &mut MoveList) {
    if to.rank() == last_rank(mover) {
        for promo in PieceKind::PROMOTION_KINDS {
            list.push(Move::new_promotion(mover, from, to, None, promo));
        }
    } else {
        list.push(Move::new_quiet(PieceKind::Pawn, mover, from, to));
    }
}

fn push_capture_or_promotion(
    mover: Color,
    from: Square,
    to: Square,
    captured: PieceKind,
    list: &mut MoveList,
) {
    if to.rank() == last_rank(mover) {
        for promo in PieceKind::PROMOTION_KINDS {
            list.push(Move::new_promotion(mover, from, to, Some(captured), promo));
        }
    } else {
        list.push(Move::new_capture(PieceKind::Pawn, mover, from, to, captured));
    }
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::color::Color;
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
    fn single_push_from_non_home_rank() {
        let moves = generated("8/8/8/4P3/8/8/8/4K2k w - -");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::E6);
    }

    #[test]
    fn double_push_available_from_home_rank() {
        let moves = generated("8/8/8/8/8/8/4P3/4K2k w - -");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == Square::E3));
        assert!(moves.iter().any(|m| m.to == Square::E4));
    }

    #[test]
    fn double_push_blocked_by_intervening_piece() {
        let moves = generated("8/8/8/8/4n3/8/4P3/4K2k w - -");
        assert_eq!(moves.len(), 0);
    }

    #[test]
    fn promotion_emits_four_records_per_destination() {
        let moves = generated("8/P7/8/8/8/8/8/4K2k w - -");
        assert_eq!(moves.len(), 4);
        for m in &moves {
            assert!(m.promotion.is_some());
        }
    }

    #[test]
    fn capture_with_promotion_emits_four_records() {
        let moves = generated("1n6/P7/8/8/8/8/8/4K2k w - -");
        let captures: Vec<_> = moves.iter().filter(|m| m.capture.is_some()).collect();
        assert_eq!(captures.len(), 4);
    }

    #[test]
    fn cannot_capture_enemy_king() {
        let moves = generated("1k6/P7/8/8/8/8/8/4K3 w - -");
        assert!(moves.iter().all(|m| m.capture.is_none()));
    }

    #[test]
    fn en_passant_available_when_ep_file_matches() {
        let moves = generated("8/8/8/3pP3/8/8/8/4K2k w - d6");
        assert!(moves
            .iter()
            .any(|m| m.en_passant && m.from == Square::E5 && m.to == Square::D6));
    }

    #[test]
    fn no_en_passant_without_adjacent_enemy_pawn() {
        let moves = generated("8/8/8/4P3/8/8/8/4K2k w - d6");
        assert!(!moves.iter().any(|m| m.en_passant));
    }

    #[test]
    fn black_pawn_pushes_toward_rank_one() {
        let pos = load_position("8/8/8/8/4p3/8/8/4K2k b - -").unwrap();
        let mut list = MoveList::new();
        generate(&pos, Color::Black, &mut list);
        assert!(list.as_slice().iter().any(|m| m.to == Square::E3));
    }
}
