//! Standard algebraic notation rendering.
//!
//! Two deliberate, documented simplifications relative to strict SAN: pawn
//! moves always carry the source square (never the disambiguation-free
//! dropped-file form), and non-king, non-pawn pieces always carry the source
//! square too, rather than only when disambiguation is needed. Every move
//! reads unambiguously either way.

use std::fmt::Write as _;

use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

fn write_target(mv: &Move, buf: &mut String) {
    if mv.piece != PieceKind::King {
        let _ = write!(buf, "{}{}", mv.from.file(), mv.from.rank());
    }
    if mv.capture.is_some() {
        buf.push('x');
    }
    let _ = write!(buf, "{}{}", mv.to.file(), mv.to.rank());
}

fn promotion_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'Q',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        _ => unreachable!("promotion target is always Q/N/B/R"),
    }
}

/// Render a move record to SAN.
pub fn render_san(mv: &Move) -> String {
    let mut buf = String::with_capacity(8);

    match mv.piece {
        PieceKind::Pawn => {
            let _ = write!(buf, "{}{}", mv.from.file(), mv.from.rank());
            if mv.capture.is_some() {
                buf.push('x');
            }
            let _ = write!(buf, "{}{}", mv.to.file(), mv.to.rank());
            if let Some(promo) = mv.promotion {
                buf.push('=');
                buf.push(promotion_letter(promo));
            }
            if mv.en_passant {
                buf.push_str("ep");
            }
        }
        PieceKind::Knight => {
            buf.push('N');
            write_target(mv, &mut buf);
        }
        PieceKind::Bishop => {
            buf.push('B');
            write_target(mv, &mut buf);
        }
        PieceKind::Rook => {
            buf.push('R');
            write_target(mv, &mut buf);
        }
        PieceKind::Queen => {
            buf.push('Q');
            write_target(mv, &mut buf);
        }
        PieceKind::King => {
            if mv.castle && mv.file_distance() == 2 {
                if mv.to.file().index() > mv.from.file().index() {
                    buf.push_str("O-O");
                } else {
                    buf.push_str("O-O-O");
                }
            } else {
                buf.push('K');
                write_target(mv, &mut buf);
            }
        }
    }

    if mv.is_mate {
        buf.push('#');
    } else if mv.is_check {
        buf.push('+');
    }

    buf
}
