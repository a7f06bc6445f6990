//! Error types for FEN parsing, position validation, and checked apply.

use std::fmt;

/// Errors that occur when parsing a FEN string into a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four required space-separated fields were present.
    TooFewFields {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// The parsed position fails structural validation.
    InvalidPosition {
        /// The underlying validation error.
        source: PositionError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "expected at least 4 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(
                    f,
                    "rank {rank_index} describes {length} squares, expected 8"
                )
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidPosition { source } => {
                write!(f, "invalid position: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition { source } => Some(source),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(source: PositionError) -> Self {
        FenError::InvalidPosition { source }
    }
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
///
/// A `Position` that fails these checks is never returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// A move was requested through [`apply_checked`](crate::apply_checked) that is not
/// a member of `legal_moves(position)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("move is not legal in the current position")]
pub struct IllegalMoveError;

#[cfg(test)]
mod tests {
    use super::{FenError, PositionError};

    #[test]
    fn fen_error_display() {
        let err = FenError::TooFewFields { found: 2 };
        assert_eq!(format!("{err}"), "expected at least 4 FEN fields, found 2");
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::PawnsOnBackRank;
        assert_eq!(format!("{err}"), "pawns found on back rank");
    }

    #[test]
    fn fen_error_from_position_error() {
        let pos_err = PositionError::PawnsOnBackRank;
        let fen_err: FenError = pos_err.into();
        assert!(matches!(fen_err, FenError::InvalidPosition { .. }));
    }
}
