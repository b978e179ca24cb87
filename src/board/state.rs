use super::{Bitboard, CastlingRights, Color, Piece, Square};
use crate::zobrist::ZOBRIST;

/// Full game state. Plain data, `Copy`, so search can copy-and-make on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// `pieces[color][piece]`, colors Black = 0, White = 1
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupancy: [Bitboard; 2],
    pub(crate) occupancy_all: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    /// At most one bit set
    pub(crate) en_passant_target: Bitboard,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_counter: u32,
}

impl Position {
    /// Standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        position.reset_to_start();
        position
    }

    /// Board with no pieces; white to move, no rights, counters at the defaults
    pub(crate) fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancy: [Bitboard::EMPTY; 2],
            occupancy_all: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_counter: 1,
        }
    }

    /// Overwrites every field with the standard starting position
    pub fn reset_to_start(&mut self) {
        *self = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            self.set_piece(Square::new_unchecked(file), Color::White, *piece);
            self.set_piece(Square::new_unchecked(8 + file), Color::White, Piece::Pawn);
            self.set_piece(Square::new_unchecked(48 + file), Color::Black, Piece::Pawn);
            self.set_piece(Square::new_unchecked(56 + file), Color::Black, *piece);
        }
        self.castling_rights = CastlingRights::all();
    }

    /// Independent value copy
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Position {
        *self
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupancy[color.index()] |= bit;
        self.occupancy_all |= bit;
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = !Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] &= bit;
        self.occupancy[color.index()] &= bit;
        self.occupancy_all &= bit;
    }

    /// Piece and color on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.occupancy_all.contains(sq) {
            return None;
        }
        let color = if self.occupancy[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        self.piece_of(color, sq).map(|piece| (color, piece))
    }

    /// Piece of `color` on `sq`, if any
    #[inline]
    pub(crate) fn piece_of(&self, color: Color, sq: Square) -> Option<Piece> {
        let pieces = &self.pieces[color.index()];
        Piece::ALL
            .into_iter()
            .find(|piece| pieces[piece.index()].contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target.lowest_set_bit()
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_counter(&self) -> u32 {
        self.fullmove_counter
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupancy_all(&self) -> Bitboard {
        self.occupancy_all
    }

    /// King square of `color`
    #[inline]
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lowest_set_bit()
    }

    /// Signature over piece placement and side to move.
    ///
    /// Used as the transposition key and for repetition checks; castling
    /// rights and en passant do not contribute.
    #[must_use]
    pub fn signature(&self) -> u64 {
        let mut hash = 0u64;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece).iter() {
                    hash ^= ZOBRIST.piece_keys[color.index()][piece.index()][sq.index()];
                }
            }
        }
        if self.side_to_move == Color::White {
            hash ^= ZOBRIST.white_to_move_key;
        }
        hash
    }

    /// True when no two pieces share a square and the occupancy boards
    /// match the piece boards.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut count = 0;
        for color in Color::BOTH {
            let mut by_color = Bitboard::EMPTY;
            for bb in self.pieces[color.index()] {
                by_color |= bb;
                seen |= bb;
                count += bb.popcount();
            }
            if by_color != self.occupancy[color.index()] {
                return false;
            }
        }
        seen.popcount() == count
            && seen == self.occupancy_all
            && self.occupancy[0] | self.occupancy[1] == self.occupancy_all
            && self.en_passant_target.popcount() <= 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
