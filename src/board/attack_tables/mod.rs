//! Attack tables for move generation.
//!
//! Leaper attacks are plain lookups. Sliding attacks use the ray + blocker
//! technique: take the full ray in a direction, find the nearest blocker on
//! it and cut the ray off beyond that blocker with the ray rooted there.
//! The blocker square itself stays in the attack set.

mod tables;

use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_CAPTURES, PAWN_PUSHES, RAYS};

use super::{Bitboard, Color, Square};

/// The eight compass directions a slider can travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    NorthEast,
    NorthWest,
    South,
    West,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::South,
        Direction::West,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// (rank, file) step
    const fn step(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// True when the ray runs toward higher square indices
    #[inline]
    const fn is_increasing(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::NorthEast | Direction::NorthWest
        )
    }
}

/// Unobstructed ray from `sq` to the edge, origin excluded
#[inline]
#[must_use]
pub fn ray(dir: Direction, sq: Square) -> Bitboard {
    RAYS[dir.index()][sq.index()]
}

/// Attacks along one ray, stopping at (and including) the nearest blocker
#[inline]
#[must_use]
pub fn ray_attacks(dir: Direction, sq: Square, blockers: Bitboard) -> Bitboard {
    let full = ray(dir, sq);
    let hits = full & blockers;
    let nearest = if dir.is_increasing() {
        hits.lowest_set_bit()
    } else {
        hits.highest_set_bit()
    };
    match nearest {
        Some(blocker) => full & !ray(dir, blocker),
        None => full,
    }
}

#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    Direction::ORTHOGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(dir, sq, blockers))
}

#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    Direction::DIAGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(dir, sq, blockers))
}

#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    rook_attacks(sq, blockers) | bishop_attacks(sq, blockers)
}

#[inline]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks diagonally
#[inline]
#[must_use]
pub fn pawn_captures(color: Color, sq: Square) -> Bitboard {
    PAWN_CAPTURES[color.index()][sq.index()]
}

/// Squares a pawn of `color` on `sq` may push to on an empty board
#[inline]
#[must_use]
pub fn pawn_pushes(color: Color, sq: Square) -> Bitboard {
    PAWN_PUSHES[color.index()][sq.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(names: &[&str]) -> Bitboard {
        names.iter().fold(Bitboard::EMPTY, |bb, name| {
            bb.with(name.parse::<Square>().unwrap())
        })
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn knight_does_not_wrap_around_edges() {
        assert_eq!(knight_attacks(sq("a1")), squares(&["b3", "c2"]));
        assert_eq!(knight_attacks(sq("h8")), squares(&["g6", "f7"]));
        for rank in 0..8 {
            let a_file = Square::from_coords(0, rank).unwrap();
            let attacks = knight_attacks(a_file);
            assert!((attacks & (Bitboard::FILE_G | Bitboard::FILE_H)).is_empty());
        }
        assert_eq!(knight_attacks(sq("d4")).popcount(), 8);
    }

    #[test]
    fn king_steps() {
        assert_eq!(king_attacks(sq("a1")), squares(&["a2", "b1", "b2"]));
        assert_eq!(king_attacks(sq("e4")).popcount(), 8);
        assert_eq!(king_attacks(sq("h5")).popcount(), 5);
    }

    #[test]
    fn pawn_push_table() {
        assert_eq!(pawn_pushes(Color::White, sq("e2")), squares(&["e3", "e4"]));
        assert_eq!(pawn_pushes(Color::White, sq("e3")), squares(&["e4"]));
        assert_eq!(pawn_pushes(Color::White, sq("e7")), squares(&["e8"]));
        assert!(pawn_pushes(Color::White, sq("e1")).is_empty());
        assert!(pawn_pushes(Color::White, sq("e8")).is_empty());
        assert_eq!(pawn_pushes(Color::Black, sq("e7")), squares(&["e6", "e5"]));
        assert_eq!(pawn_pushes(Color::Black, sq("e2")), squares(&["e1"]));
        assert!(pawn_pushes(Color::Black, sq("e8")).is_empty());
    }

    #[test]
    fn pawn_capture_table() {
        assert_eq!(pawn_captures(Color::White, sq("a2")), squares(&["b3"]));
        assert_eq!(pawn_captures(Color::White, sq("e4")), squares(&["d5", "f5"]));
        assert_eq!(pawn_captures(Color::Black, sq("h7")), squares(&["g6"]));
        assert!(pawn_captures(Color::White, sq("c8")).is_empty());
        assert!(pawn_captures(Color::Black, sq("c1")).is_empty());
    }

    #[test]
    fn rays_exclude_origin_and_stop_at_edge() {
        assert_eq!(ray(Direction::North, sq("a6")), squares(&["a7", "a8"]));
        assert_eq!(ray(Direction::West, sq("c3")), squares(&["b3", "a3"]));
        assert_eq!(ray(Direction::SouthWest, sq("c3")), squares(&["b2", "a1"]));
        assert!(ray(Direction::East, sq("h4")).is_empty());
        assert_eq!(ray(Direction::NorthEast, sq("a1")).popcount(), 7);
    }

    #[test]
    fn sliding_attacks_stop_on_blockers() {
        // r3k2N/ppp1q1pp/5n2/3Pp3/Q1Bn2b1/2P5/PP1P1bPP/RNB2K1R
        let occupied = squares(&[
            "a8", "e8", "h8", "a7", "b7", "c7", "e7", "g7", "h7", "f6", "d5", "e5", "a4", "c4",
            "d4", "g4", "c3", "a2", "b2", "d2", "f2", "g2", "h2", "a1", "b1", "c1", "f1", "h1",
        ]);
        let cases: &[(&str, bool, &[&str])] = &[
            ("a8", true, &["b8", "c8", "d8", "e8", "a7"]),
            ("h1", true, &["g1", "f1", "h2"]),
            ("a1", true, &["b1", "a2"]),
            ("c4", false, &["b5", "a6", "b3", "a2", "d3", "e2", "f1", "d5"]),
            ("c1", false, &["d2", "b2"]),
            ("f2", false, &["e1", "g1", "g3", "e3", "d4", "h4"]),
            ("g4", false, &["f3", "e2", "d1", "h3", "h5", "f5", "e6", "d7", "c8"]),
        ];
        for &(from, rook, expected) in cases {
            let attacks = if rook {
                rook_attacks(sq(from), occupied)
            } else {
                bishop_attacks(sq(from), occupied)
            };
            assert_eq!(attacks, squares(expected), "slider on {from}");
        }
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let blockers = squares(&["d6", "f4", "b2"]);
        let from = sq("d4");
        assert_eq!(
            queen_attacks(from, blockers),
            rook_attacks(from, blockers) | bishop_attacks(from, blockers)
        );
        assert_eq!(queen_attacks(from, Bitboard::EMPTY).popcount(), 27);
    }
}
