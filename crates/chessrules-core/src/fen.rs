//! FEN loading: accepts the four required fields (piece placement, active
//! color, castling availability, en-passant target) and silently tolerates
//! — but does not require — the two trailing halfmove/fullmove counters
//! real-world FEN strings usually carry.

use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;
use tracing::debug;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Load a position from a FEN string.
///
/// At least four space-separated fields are required: piece placement,
/// active color, castling availability, en-passant target. A fifth and
/// sixth field (halfmove clock, fullmove number) are accepted and ignored
/// if present.
pub fn load_position(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(FenError::TooFewFields {
            found: fields.len(),
        });
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount {
            found: ranks.len(),
        });
    }

    let mut position = Position::empty();

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN ranks go from 8 to 1 (top to bottom).
        let rank = Rank::from_index(7 - rank_index as u8).unwrap();
        let mut file_index: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as u8;
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;

                if file_index >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file_index as usize + 1,
                    });
                }

                let file = File::from_index(file_index).unwrap();
                position.set_piece_at(Square::new(rank, file), Some(piece));
                file_index += 1;
            }
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index as usize,
            });
        }
    }

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            })
        }
    };
    position.set_side_to_move(side_to_move);

    let castling = CastleRights::from_fen(fields[2])?;
    position.set_castle_rights(castling);

    let ep_file = if fields[3] == "-" {
        None
    } else {
        let square = Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
            found: fields[3].to_string(),
        })?;
        Some(square.file())
    };
    position.set_ep_file(ep_file);

    position.validate()?;

    debug!(fen, "position loaded");
    Ok(position)
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        load_position(fen)
    }
}
