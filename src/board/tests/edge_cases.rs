//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Move, Piece, Position, Square, START_FEN};

fn position(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv: Move = text.parse().unwrap();
        position.apply_validated_move(mv).unwrap();
    }
}

#[test]
fn test_stalemate_position() {
    let board = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.generate_legal_moves().is_empty());
}

#[test]
fn test_checkmate_boundary() {
    let mut board = position("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2");
    assert!(!board.is_checkmate());
    assert!(!board.is_in_check());

    play(&mut board, &["d8h4"]);
    assert!(board.is_in_check());
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(board.generate_legal_moves().is_empty());
}

#[test]
fn test_stalemate_boundary() {
    let mut board = position("8/8/8/8/3k4/q7/2K5/8 w - - 0 1");
    assert!(!board.is_stalemate());

    // Kb1 leaves only c2, which the black king then covers
    play(&mut board, &["c2b1"]);
    assert!(!board.is_stalemate());
    play(&mut board, &["d4d3"]);
    assert!(!board.is_in_check());
    assert!(board.is_stalemate());
    assert!(board.generate_legal_moves().is_empty());
}

#[test]
fn test_underpromotions_are_generated() {
    let board = position("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_legal_moves();
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        assert!(
            moves.iter().any(|m| m.promotion() == Some(piece)),
            "{piece:?} promotion should be available"
        );
    }

    let mut after = board;
    play(&mut after, &["a7a8n"]);
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    assert!(after.pieces(Color::White, Piece::Pawn).is_empty());
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board = position("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let ep: Move = "e5d6".parse().unwrap();
    assert!(board.generate_legal_moves().contains(ep));

    board.apply_validated_move(ep).unwrap();
    assert_eq!(board.piece_at(sq("d5")), None, "Captured pawn should be removed");
    assert_eq!(board.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("e5")), None);
    assert_eq!(board.halfmove_clock(), 0);
    assert!(board.is_consistent());
}

#[test]
fn test_en_passant_target_on_wrong_rank_is_ignored() {
    // A d3 target with white to move can never be captured onto
    let board = position("4k3/8/8/8/3p4/8/2P5/4K3 w - d3 0 1");
    let capture: Move = "c2d3".parse().unwrap();
    assert!(!board.generate_pseudo_legal_moves().contains(capture));
    assert!(board.generate_legal_moves().contains("c2c3".parse().unwrap()));
}

#[test]
fn test_en_passant_that_exposes_king_is_illegal() {
    // Capturing on c6 would open the fifth rank to the rook
    let board = position("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 2");
    let ep: Move = "b5c6".parse().unwrap();
    assert!(board.generate_pseudo_legal_moves().contains(ep));
    assert!(!board.generate_legal_moves().contains(ep));
}

#[test]
fn test_clocks_follow_moves() {
    let mut board = Position::new();
    play(&mut board, &["g1f3"]);
    assert_eq!((board.halfmove_clock(), board.fullmove_counter()), (1, 1));
    play(&mut board, &["g8f6"]);
    assert_eq!((board.halfmove_clock(), board.fullmove_counter()), (2, 2));
    play(&mut board, &["e2e4"]);
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.en_passant_target(), Some(sq("e3")));
    play(&mut board, &["f6e4"]);
    assert_eq!((board.halfmove_clock(), board.fullmove_counter()), (0, 3));
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_reset_to_start_discards_everything() {
    let mut board = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 7 30");
    board.reset_to_start();
    assert_eq!(board, Position::new());
    assert_eq!(board.to_fen(), START_FEN);
}

#[test]
fn test_fen_round_trip_of_special_positions() {
    let fens = [
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 1 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        "4k3/8/8/8/8/8/8/R3K3 w Q - 12 40",
    ];
    for fen in fens {
        let board = position(fen);
        assert_eq!(board.to_fen(), fen);
        assert_eq!(position(&board.to_fen()), board);
    }
}

#[test]
fn test_rook_check_along_open_file() {
    let open = position("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(open.is_in_check());
    let blocked = position("4k3/4p3/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(!blocked.is_in_check());
}

#[test]
fn test_fifteen_queens_keep_every_move() {
    use crate::board::attack_tables::{king_attacks, queen_attacks};

    let board = position("Q1Q1Q1Q1/8/1Q1Q1Q1Q/8/Q1Q1Q1Q1/8/1Q1Q1Q2/k6K w - - 0 1");
    let own = board.occupancy(Color::White);
    let all = board.occupancy_all();
    let queens: u32 = board
        .pieces(Color::White, Piece::Queen)
        .iter()
        .map(|sq| (queen_attacks(sq, all) & !own).popcount())
        .sum();
    let king = (king_attacks(sq("h1")) & !own).popcount();

    let moves = board.generate_pseudo_legal_moves();
    assert!(moves.len() > 200);
    assert_eq!(moves.len() as u32, queens + king);
}
