mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Move, MoveList, Position, Square};

/// Which destinations a generation pass emits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    /// Every pseudo-legal move, castling included
    All,
    /// Captures (en passant included) and promotions only
    Noisy,
}

impl Position {
    fn generate(&self, mode: GenMode) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move;
        let targets = match mode {
            GenMode::All => !self.occupancy(us),
            GenMode::Noisy => self.occupancy(us.opponent()),
        };
        self.generate_pawn_moves(mode, &mut moves);
        self.generate_knight_moves(targets, &mut moves);
        self.generate_slider_moves(targets, &mut moves);
        self.generate_king_moves(targets, &mut moves);
        if mode == GenMode::All {
            self.generate_castling_moves(&mut moves);
        }
        moves
    }

    /// Moves that follow piece movement rules for the side to move.
    ///
    /// They may leave the mover's king attacked. Castling is only emitted
    /// when the king is safe on its start, transit and landing squares.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self) -> MoveList {
        self.generate(GenMode::All)
    }

    /// Pseudo-legal moves that do not leave the mover's king attacked
    #[must_use]
    pub fn generate_legal_moves(&self) -> MoveList {
        let mut moves = self.generate(GenMode::All);
        moves.retain(|mv| self.is_legal_pseudo_move(mv));
        moves
    }

    /// Legal captures and promotions, for quiescence search
    #[must_use]
    pub fn generate_noisy_moves(&self) -> MoveList {
        let mut moves = self.generate(GenMode::Noisy);
        moves.retain(|mv| self.is_legal_pseudo_move(mv));
        moves
    }

    /// Copy-and-make test of a generator move
    #[inline]
    pub(crate) fn is_legal_pseudo_move(&self, mv: Move) -> bool {
        let us = self.side_to_move;
        let mut next = *self;
        next.apply_pseudo_legal_move(mv);
        !next.is_king_attacked(us)
    }

    /// True when the side to move has no legal move; stops at the first one found
    #[must_use]
    pub fn has_no_legal_moves(&self) -> bool {
        !self
            .generate(GenMode::All)
            .iter()
            .any(|&mv| self.is_legal_pseudo_move(mv))
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.has_no_legal_moves()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.has_no_legal_moves()
    }

    /// Number of leaf positions reachable in exactly `depth` legal moves
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| {
                let mut next = *self;
                next.apply_pseudo_legal_move(mv);
                next.perft(depth - 1)
            })
            .sum()
    }

    /// Per-root-move perft counts
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        self.generate_legal_moves()
            .iter()
            .map(|&mv| {
                let mut next = *self;
                next.apply_pseudo_legal_move(mv);
                (mv, next.perft(depth.saturating_sub(1)))
            })
            .collect()
    }

    /// Pushes a quiet move for every square in `targets`
    #[inline]
    fn push_targets(from: Square, targets: Bitboard, moves: &mut MoveList) {
        for to in targets.iter() {
            moves.push(Move::quiet(from, to));
        }
    }
}
