//! The attack oracle: "is square `s` attacked by side `c` in position `P`?",
//! answered by radiating in eight directions and testing knight offsets.
//!
//! No bitboards, no precomputed tables: a single radial scan subsumes
//! checks by queen/rook/bishop/king/pawn and doubles as the walker that
//! backs slider move generation.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The four orthogonal unit directions (rook/queen rays).
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal unit directions (bishop/queen rays).
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight unit directions, also the king's and the attack oracle's
/// one-step offsets.
pub(crate) const ALL_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight knight leaps.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

#[inline]
fn is_diagonal(dir: (i8, i8)) -> bool {
    dir.0 != 0 && dir.1 != 0
}

#[inline]
fn is_orthogonal(dir: (i8, i8)) -> bool {
    (dir.0 == 0) != (dir.1 == 0)
}

/// Does a pawn of `by_side` standing at `steps` away in direction `dir`
/// (from the target square's point of view) actually attack the target?
///
/// A White pawn attacks diagonally one rank "ahead" of itself (toward rank
/// 7); from the target square looking back at the attacker, that attacker
/// lies one rank *behind* in the direction-of-travel sense, i.e. `dir.0 ==
/// -1`. A Black pawn attacks toward rank 0, so its attacker lies at `dir.0
/// == 1`.
#[inline]
fn pawn_attacks_along(by_side: Color, dir: (i8, i8)) -> bool {
    match by_side {
        Color::White => dir.0 == -1,
        Color::Black => dir.0 == 1,
    }
}

/// Walk one ray from `from` in direction `dir`, returning `true` if the
/// first piece encountered is a `by_side` piece that attacks back along
/// this ray.
fn ray_attacks(position: &Position, from: Square, dir: (i8, i8), by_side: Color) -> bool {
    let mut steps = 0u32;
    let mut current = from;
    loop {
        let Some(next) = current.offset(dir.0, dir.1) else {
            return false;
        };
        current = next;
        steps += 1;

        let Some(piece) = position.piece_at(current) else {
            continue;
        };

        if piece.color() != by_side {
            return false;
        }

        return match piece.kind() {
            PieceKind::Queen => true,
            PieceKind::Rook => is_orthogonal(dir),
            PieceKind::Bishop => is_diagonal(dir),
            PieceKind::King => steps == 1,
            PieceKind::Pawn => steps == 1 && is_diagonal(dir) && pawn_attacks_along(by_side, dir),
            PieceKind::Knight => false,
        };
    }
}

/// Is `square` attacked by `by_side` in `position`? Read-only, independent
/// of whose turn it is.
pub fn is_attacked(position: &Position, square: Square, by_side: Color) -> bool {
    for dir in ALL_DIRS {
        if ray_attacks(position, square, dir, by_side) {
            return true;
        }
    }

    for offset in KNIGHT_OFFSETS {
        if let Some(candidate) = square.offset(offset.0, offset.1) {
            if let Some(piece) = position.piece_at(candidate) {
                if piece.color() == by_side && piece.kind() == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    false
}
