use super::error::IllegalMoveError;
use super::{Bitboard, Color, Move, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    /// Applies a move produced by the move generator.
    ///
    /// No validation is done; passing anything else is a logic error.
    /// Use [`Position::apply_validated_move`] for untrusted input.
    pub fn apply_pseudo_legal_move(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opponent();
        let from = mv.from();
        let to = mv.to();

        let Some(piece) = self.piece_of(us, from) else {
            debug_assert!(false, "no {us} piece on {from} for {mv}");
            return;
        };

        let captured = self.piece_of(them, to);
        if let Some(victim) = captured {
            self.remove_piece(to, them, victim);
        }
        self.remove_piece(from, us, piece);
        let placed = match (piece, mv.promotion()) {
            (Piece::Pawn, Some(promo)) => promo,
            _ => piece,
        };
        self.set_piece(to, us, placed);

        let mut reset_clock = captured.is_some() || piece == Piece::Pawn;

        if piece == Piece::Pawn && from.file() != to.file() && self.en_passant_target.contains(to) {
            let victim_sq = pawn_behind(us, to);
            if self.pieces(them, Piece::Pawn).contains(victim_sq) {
                self.remove_piece(victim_sq, them, Piece::Pawn);
                reset_clock = true;
            }
        }

        self.en_passant_target = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Bitboard::from_square(Square::new_unchecked((from.index() + to.index()) / 2))
        } else {
            Bitboard::EMPTY
        };

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let base = from.rank() * 8;
            let (rook_from, rook_to) = if to.file() > from.file() {
                (base + 7, base + 5)
            } else {
                (base, base + 3)
            };
            let rook_from = Square::new_unchecked(rook_from);
            if self.pieces(us, Piece::Rook).contains(rook_from) {
                self.remove_piece(rook_from, us, Piece::Rook);
                self.set_piece(Square::new_unchecked(rook_to), us, Piece::Rook);
            }
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(us);
        }
        self.castling_rights.remove_for_square(from);
        self.castling_rights.remove_for_square(to);

        if reset_clock {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_counter = self.fullmove_counter.saturating_add(1);
        }
        self.side_to_move = them;

        debug_assert!(self.is_consistent(), "inconsistent board after {mv}");
    }

    /// Applies `mv` only if it is legal for the side to move.
    ///
    /// On error the position is unchanged.
    pub fn apply_validated_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        let us = self.side_to_move;
        if !self.occupancy_all.contains(mv.from()) {
            return Err(IllegalMoveError::NoPieceOnSource { mv });
        }
        if !self.generate_pseudo_legal_moves().contains(mv) {
            return Err(IllegalMoveError::NotPseudoLegal { mv });
        }
        let mut next = *self;
        next.apply_pseudo_legal_move(mv);
        if next.is_king_attacked(us) {
            return Err(IllegalMoveError::LeavesKingInCheck { mv });
        }
        *self = next;
        Ok(())
    }

    /// Validated move from raw square indices.
    ///
    /// Indices outside 0..63 are reported as [`IllegalMoveError::SquareOutOfRange`]
    /// and a pawn or king promotion as [`IllegalMoveError::InvalidPromotion`].
    pub fn apply_validated_squares(
        &mut self,
        from: usize,
        to: usize,
        promotion: Option<Piece>,
    ) -> Result<Move, IllegalMoveError> {
        let from = Square::from_index(from)
            .map_err(|_| IllegalMoveError::SquareOutOfRange { index: from })?;
        let to =
            Square::from_index(to).map_err(|_| IllegalMoveError::SquareOutOfRange { index: to })?;
        if let Some(piece) = promotion {
            if !PROMOTION_PIECES.contains(&piece) {
                return Err(IllegalMoveError::InvalidPromotion { piece });
            }
        }
        let mv = Move::new(from, to, promotion);
        self.apply_validated_move(mv)?;
        Ok(mv)
    }

    /// Decodes coordinate notation and applies it through the validated path
    pub fn apply_notation(&mut self, text: &str) -> Result<Move, Box<dyn std::error::Error>> {
        let mv = Move::from_notation(text)?;
        self.apply_validated_move(mv)?;
        Ok(mv)
    }
}

/// Square one rank behind `sq` from the point of view of `mover`
#[inline]
fn pawn_behind(mover: Color, sq: Square) -> Square {
    match mover {
        Color::White => Square::new_unchecked(sq.index() - 8),
        Color::Black => Square::new_unchecked(sq.index() + 8),
    }
}
