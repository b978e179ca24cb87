use super::super::attack_tables::knight_attacks;
use super::super::{Bitboard, MoveList, Piece, Position};

impl Position {
    pub(super) fn generate_knight_moves(&self, targets: Bitboard, moves: &mut MoveList) {
        for from in self.pieces(self.side_to_move, Piece::Knight).iter() {
            Position::push_targets(from, knight_attacks(from) & targets, moves);
        }
    }
}
