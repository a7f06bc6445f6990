//! Make / unmake: mutates a position in place by a move, and restores it
//! exactly. Paired with the bounded undo stack carried on `Position`.

use crate::castle_rights::{castling_rule_for_king_move, CASTLING_RULES};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::IllegalMoveError;
use crate::movegen::legal_moves;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::{GameResult, Position};
use crate::square::Square;

/// Find the castling right that a rook standing at `square` guards, if
/// `square` is one of the four original rook corners for `color`.
fn rook_corner_right(color: Color, square: Square) -> Option<crate::castle_rights::CastleRights> {
    CASTLING_RULES
        .iter()
        .find(|rule| rule.color == color && rule.rook_from == square)
        .map(|rule| rule.right)
}

/// Apply `mv` to `position`, mutating it in place.
///
/// Steps follow the move's side effects in a fixed order: snapshot, rook
/// relocation for castling, castling-rights revocation, the captured pawn
/// removed for en passant, the mover's own square change, en-passant-target
/// bookkeeping, side-to-move flip, and result update on mate.
pub fn apply(position: &mut Position, mv: &Move) {
    position.push_undo();

    let mover = mv.mover;

    if mv.castle {
        let rule = castling_rule_for_king_move(mover, mv.from, mv.to)
            .expect("castle move must match one of the four castling rules");
        position.set_piece_at(rule.rook_from, None);
        position.set_piece_at(rule.rook_to, Some(Piece::new(PieceKind::Rook, mover)));
    }

    if mv.piece == PieceKind::King {
        position.set_castle_rights(position.castle_rights().remove_color(mover));
    } else if mv.piece == PieceKind::Rook {
        if let Some(right) = rook_corner_right(mover, mv.from) {
            position.set_castle_rights(position.castle_rights().remove(right));
        }
    }

    if mv.en_passant {
        let captured_square = Square::new(mv.from.rank(), mv.to.file());
        position.set_piece_at(captured_square, None);
    }

    position.set_piece_at(mv.from, None);
    let placed_kind = mv.promotion.unwrap_or(mv.piece);
    position.set_piece_at(mv.to, Some(Piece::new(placed_kind, mover)));

    position.set_ep_file(None);
    if mv.is_double_pawn_push() {
        position.set_ep_file(Some(mv.to.file()));
    }

    position.set_side_to_move(mover.flip());

    if mv.is_mate {
        position.set_result(match mover {
            Color::White => GameResult::WhiteWon,
            Color::Black => GameResult::BlackWon,
        });
    }
}

/// Undo `mv`, restoring `position` to exactly the state it had before the
/// matching `apply`. Must be called with the same move, in LIFO order.
pub fn undo(position: &mut Position, mv: &Move) {
    let mover = mv.mover;

    position.set_side_to_move(mover);

    position.set_piece_at(mv.from, Some(Piece::new(mv.piece, mover)));

    let restored_to = if mv.en_passant {
        None
    } else {
        mv.capture.map(|kind| Piece::new(kind, mover.flip()))
    };
    position.set_piece_at(mv.to, restored_to);

    if mv.en_passant {
        let captured_square = Square::new(mv.from.rank(), mv.to.file());
        position.set_piece_at(captured_square, Some(Piece::new(PieceKind::Pawn, mover.flip())));
    }

    if mv.castle {
        let rule = castling_rule_for_king_move(mover, mv.from, mv.to)
            .expect("castle move must match one of the four castling rules");
        position.set_piece_at(rule.rook_to, None);
        position.set_piece_at(rule.rook_from, Some(Piece::new(PieceKind::Rook, mover)));
    }

    position.pop_undo();
}

/// Apply `mv` only if it is a member of `legal_moves(position)`.
///
/// Re-derives the legal move list to check membership, so this is strictly
/// more expensive than `apply` — use it at trust boundaries (e.g. a move
/// received from outside the process), not in a search's inner loop.
pub fn apply_checked(position: &mut Position, mv: &Move) -> Result<(), IllegalMoveError> {
    let legal = legal_moves(position);
    let matched = legal
        .into_iter()
        .find(|candidate| candidate.from == mv.from && candidate.to == mv.to && candidate.promotion == mv.promotion)
        .ok_or(IllegalMoveError)?;

    apply(position, &matched);
    Ok(())
}
