use super::super::attack_tables::{pawn_captures, pawn_pushes};
use super::super::{Bitboard, Color, Move, MoveList, Piece, Position, PROMOTION_PIECES};
use super::GenMode;

impl Position {
    pub(super) fn generate_pawn_moves(&self, mode: GenMode, moves: &mut MoveList) {
        let us = self.side_to_move;
        let empty = !self.occupancy_all;
        let enemies = self.occupancy(us.opponent());
        // Only a target on the rank our pawns can capture onto is usable.
        let en_passant = self.en_passant_target
            & match us {
                Color::White => Bitboard::RANK_6,
                Color::Black => Bitboard::RANK_3,
            };

        for from in self.pieces(us, Piece::Pawn).iter() {
            let promoting = from.rank() == us.seventh_rank();

            let pushes = pawn_pushes(us, from);
            let single = match us {
                Color::White => pushes.lowest_set_bit(),
                Color::Black => pushes.highest_set_bit(),
            };
            let mut targets = match single {
                Some(step) if empty.contains(step) => pushes & empty,
                _ => Bitboard::EMPTY,
            };
            if mode == GenMode::Noisy && !promoting {
                targets = Bitboard::EMPTY;
            }
            targets |= pawn_captures(us, from) & (enemies | en_passant);

            for to in targets.iter() {
                if promoting {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new(from, to, Some(promo)));
                    }
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Position;

    fn targets_from(fen: &str, from: &str) -> Vec<String> {
        let position = Position::from_fen(fen).unwrap();
        let mut names: Vec<String> = position
            .generate_pseudo_legal_moves()
            .iter()
            .filter(|mv| mv.from().to_string() == from)
            .map(|mv| mv.to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let open = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        assert_eq!(targets_from(open, "e2"), vec!["e2e3", "e2e4"]);

        let far_blocked = "4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1";
        assert_eq!(targets_from(far_blocked, "e2"), vec!["e2e3"]);

        let near_blocked = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1";
        assert!(targets_from(near_blocked, "e2").is_empty());
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let fen = "4k3/3p4/2P5/8/8/8/8/4K3 b - - 0 1";
        assert_eq!(targets_from(fen, "d7"), vec!["d7c6", "d7d5", "d7d6"]);
    }

    #[test]
    fn en_passant_only_for_adjacent_pawns() {
        let fen = "4k3/8/8/2PpP3/8/8/P7/4K3 w - d6 0 2";
        assert_eq!(targets_from(fen, "c5"), vec!["c5c6", "c5d6"]);
        assert_eq!(targets_from(fen, "e5"), vec!["e5d6", "e5e6"]);
        assert_eq!(targets_from(fen, "a2"), vec!["a2a3", "a2a4"]);
    }

    #[test]
    fn promotions_expand_to_four_pieces() {
        let fen = "1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        assert_eq!(
            targets_from(fen, "a7"),
            vec!["a7a8b", "a7a8n", "a7a8q", "a7a8r", "a7b8b", "a7b8n", "a7b8q", "a7b8r"]
        );
    }
}
