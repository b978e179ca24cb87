//! Precomputed attack tables for leaper pieces (knights, kings, pawns) and
//! unobstructed sliding rays.

use once_cell::sync::Lazy;

use super::Direction;
use crate::board::Bitboard;

/// Builds one table from a list of (rank, file) steps, dropping off-board targets.
fn leaper_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
            }
        }
        *slot = Bitboard(mask);
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

/// Diagonal capture targets, indexed `[color][square]` (Black = 0, White = 1)
pub(crate) static PAWN_CAPTURES: Lazy<[[Bitboard; 64]; 2]> =
    Lazy::new(|| [leaper_table(&[(-1, -1), (-1, 1)]), leaper_table(&[(1, -1), (1, 1)])]);

/// Push targets, indexed `[color][square]`. The double step from the start
/// rank is included; callers must check the intermediate square.
pub(crate) static PAWN_PUSHES: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut pushes = [[Bitboard::EMPTY; 64]; 2];
    for sq in 8..56 {
        let rank = sq / 8;
        let mut white = 1u64 << (sq + 8);
        if rank == 1 {
            white |= 1u64 << (sq + 16);
        }
        let mut black = 1u64 << (sq - 8);
        if rank == 6 {
            black |= 1u64 << (sq - 16);
        }
        pushes[1][sq] = Bitboard(white);
        pushes[0][sq] = Bitboard(black);
    }
    pushes
});

/// Full ray from each square to the board edge, origin excluded, indexed
/// `[direction][square]`
pub(crate) static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for dir in Direction::ALL {
        let (dr, df) = dir.step();
        for sq in 0..64 {
            let mut r = (sq / 8) as isize + dr;
            let mut f = (sq % 8) as isize + df;
            let mut mask = 0u64;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                mask |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            rays[dir.index()][sq] = Bitboard(mask);
        }
    }
    rays
});
