use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::types::castle_bit;
use super::{Bitboard, CastlingRights, Color, Piece, Position, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Nothing is returned unless every field
    /// parses, so a failed parse never yields a partial board.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = parse_castling(parts[2])?;

        position.en_passant_target = if parts[3] == "-" {
            Bitboard::EMPTY
        } else {
            let sq: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            Bitboard::from_square(sq)
        };

        position.halfmove_clock = parse_counter("halfmove clock", parts[4])?;
        position.fullmove_counter = parse_counter("fullmove number", parts[5])?;

        for color in Color::BOTH {
            let count = position.occupancy(color).popcount();
            if count > 16 {
                return Err(FenError::TooManyPieces {
                    color,
                    found: count,
                });
            }
            let kings = position.pieces(color, Piece::King).popcount();
            if kings != 1 {
                return Err(FenError::MissingKing {
                    color,
                    found: kings,
                });
            }
        }

        debug_assert!(position.is_consistent());
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new_unchecked(rank * 8 + file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_counter
        )
    }

    /// Grid view of the board followed by the state fields
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiece { char: c });
                }
                file += run as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            match Square::from_coords(file, rank) {
                Some(sq) => position.set_piece(sq, color, piece),
                None => {
                    return Err(FenError::BadRankLength {
                        rank: rank + 1,
                        squares: file + 1,
                    })
                }
            }
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut bits = 0u8;
    for c in field.chars() {
        match castle_bit(c) {
            Some(bit) => bits |= bit,
            None => {
                return Err(FenError::InvalidCastling {
                    found: field.to_string(),
                })
            }
        }
    }
    Ok(CastlingRights::from_u8(bits))
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let sq = Square::new_unchecked(rank * 8 + file);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;
        writeln!(f, "Castling: {}", self.castling_rights.to_fen_field())?;
        match self.en_passant_target() {
            Some(sq) => writeln!(f, "En passant: {sq}")?,
            None => writeln!(f, "En passant: -")?,
        }
        write!(
            f,
            "Halfmove clock: {} Fullmove: {}",
            self.halfmove_clock, self.fullmove_counter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_fen_matches_new() {
        let parsed = Position::from_fen(START_FEN).unwrap();
        assert_eq!(parsed, Position::new());
        assert_eq!(parsed.to_fen(), START_FEN);
    }

    #[test]
    fn all_fields_are_preserved() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 1 1";
        assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w Kq f6 7 33";
        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.to_fen(), fen);
        assert_eq!(position.en_passant_target(), Some("f6".parse().unwrap()));
        assert_eq!(position.halfmove_clock(), 7);
        assert_eq!(position.fullmove_counter(), 33);
    }

    #[test]
    fn field_count_must_be_six() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(FenError::WrongFieldCount { found: 4 })
        );
        assert_eq!(
            Position::from_fen(&format!("{START_FEN} extra")),
            Err(FenError::WrongFieldCount { found: 7 })
        );
    }

    #[test]
    fn rank_shape_is_checked() {
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
            Err(FenError::WrongRankCount { found: 7 })
        );
        assert!(matches!(
            Position::from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::BadRankLength { rank: 7, squares: 7 })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: '9' })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::BadRankLength { rank: 8, .. })
        ));
    }

    #[test]
    fn bad_characters_are_rejected() {
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
            Err(FenError::InvalidCastling { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::InvalidCounter { .. })
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1BNR w kq - 0 1"),
            Err(FenError::MissingKing {
                color: Color::White,
                found: 0
            })
        ));
    }

    #[test]
    fn more_than_sixteen_pieces_are_rejected() {
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/QQQQQQQQ/QQQQQQQQ/4K3 w - - 0 1"),
            Err(FenError::TooManyPieces {
                color: Color::White,
                found: 17
            })
        );
    }

    #[test]
    fn display_shows_grid_and_state() {
        let text = Position::new().to_display_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert!(text.contains("Side to move: White"));
        assert!(text.contains("En passant: -"));
        assert!(text.contains("Fullmove: 1"));
    }
}
