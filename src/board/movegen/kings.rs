use super::super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_captures, rook_attacks,
};
use super::super::{Bitboard, Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(super) fn generate_king_moves(&self, targets: Bitboard, moves: &mut MoveList) {
        for from in self.pieces(self.side_to_move, Piece::King).iter() {
            Position::push_targets(from, king_attacks(from) & targets, moves);
        }
    }

    /// Castling: right held, rook on its corner, path empty, and the king
    /// not attacked on its start, transit or landing square.
    pub(super) fn generate_castling_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let them = us.opponent();
        let base = match us {
            Color::White => 0,
            Color::Black => 56,
        };
        let sq = |offset: usize| Square::new_unchecked(base + offset);
        let king_from = sq(4);
        if !self.pieces(us, Piece::King).contains(king_from) {
            return;
        }
        if !self.castling_rights.has(us, true) && !self.castling_rights.has(us, false) {
            return;
        }
        if self.is_square_attacked(king_from, them) {
            return;
        }

        let rooks = self.pieces(us, Piece::Rook);
        let empty = |offsets: &[usize]| offsets.iter().all(|&o| !self.occupancy_all.contains(sq(o)));

        if self.castling_rights.has(us, true)
            && rooks.contains(sq(7))
            && empty(&[5, 6])
            && !self.is_square_attacked(sq(5), them)
            && !self.is_square_attacked(sq(6), them)
        {
            moves.push(Move::quiet(king_from, sq(6)));
        }
        if self.castling_rights.has(us, false)
            && rooks.contains(sq(0))
            && empty(&[1, 2, 3])
            && !self.is_square_attacked(sq(3), them)
            && !self.is_square_attacked(sq(2), them)
        {
            moves.push(Move::quiet(king_from, sq(2)));
        }
    }

    /// True if any piece of `by` attacks `square` given the current occupancy
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let occupied = self.occupancy_all;
        let pawns = self.pieces(by, Piece::Pawn);
        // Pawns of `by` that hit `square` sit where a defender's pawn on `square` would capture.
        if !(pawn_captures(by.opponent(), square) & pawns).is_empty() {
            return true;
        }
        if !(knight_attacks(square) & self.pieces(by, Piece::Knight)).is_empty() {
            return true;
        }
        if !(king_attacks(square) & self.pieces(by, Piece::King)).is_empty() {
            return true;
        }
        let queens = self.pieces(by, Piece::Queen);
        let diagonal = self.pieces(by, Piece::Bishop) | queens;
        if !(bishop_attacks(square, occupied) & diagonal).is_empty() {
            return true;
        }
        let straight = self.pieces(by, Piece::Rook) | queens;
        !(rook_attacks(square, occupied) & straight).is_empty()
    }

    /// True if the king of `color` is attacked by the other side
    #[inline]
    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }
}
