use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, MoveList, Piece, Position};

impl Position {
    pub(super) fn generate_slider_moves(&self, targets: Bitboard, moves: &mut MoveList) {
        let us = self.side_to_move;
        let occupied = self.occupancy_all;
        for from in self.pieces(us, Piece::Bishop).iter() {
            Position::push_targets(from, bishop_attacks(from, occupied) & targets, moves);
        }
        for from in self.pieces(us, Piece::Rook).iter() {
            Position::push_targets(from, rook_attacks(from, occupied) & targets, moves);
        }
        for from in self.pieces(us, Piece::Queen).iter() {
            Position::push_targets(from, queen_attacks(from, occupied) & targets, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Position;

    #[test]
    fn sliders_stop_at_own_pieces_and_capture_enemies() {
        let position = Position::from_fen("4k3/8/8/8/1p6/8/8/R2BK3 w - - 0 1").unwrap();
        let mut rook: Vec<String> = position
            .generate_pseudo_legal_moves()
            .iter()
            .filter(|mv| mv.from().to_string() == "a1")
            .map(|mv| mv.to().to_string())
            .collect();
        rook.sort();
        assert_eq!(rook, vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1"]);
    }
}
