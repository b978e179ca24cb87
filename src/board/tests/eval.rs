//! Evaluation table loading and scoring tests.

use std::fs;
use std::path::PathBuf;

use crate::board::{EvalTableError, EvalTables, Evaluator, Position, DEFAULT_SQUARE_TABLES};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("chess_core_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn square_text(tables: &[[i32; 64]; 6]) -> String {
    tables
        .iter()
        .flatten()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn loaded_tables_replace_defaults() {
    let material = scratch_file("material_double.csv", "164\n674\n730\n954\n2050\n0\n");
    let squares = scratch_file("squares_double.csv", &square_text(&DEFAULT_SQUARE_TABLES));

    let mut evaluator = Evaluator::new();
    evaluator.load_tables(&material, &squares).unwrap();
    assert_eq!(evaluator.tables().material, [164, 674, 730, 954, 2050, 0]);
    assert_eq!(evaluator.tables().square, DEFAULT_SQUARE_TABLES);

    // A lone extra knight is now worth its doubled value
    let board = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    let default_score = Evaluator::new().static_score(&board);
    assert_eq!(evaluator.static_score(&board) - default_score, 337);

    fs::remove_file(material).ok();
    fs::remove_file(squares).ok();
}

#[test]
fn failed_load_keeps_current_tables() {
    let material = scratch_file("material_short.csv", "82\n337\n");
    let squares = scratch_file("squares_ok.csv", &square_text(&DEFAULT_SQUARE_TABLES));

    let mut evaluator = Evaluator::new();
    let err = evaluator.load_tables(&material, &squares).unwrap_err();
    assert!(matches!(err, EvalTableError::Shape { table: "material", .. }));
    assert_eq!(evaluator.tables(), &EvalTables::default());

    fs::remove_file(material).ok();
    fs::remove_file(squares).ok();
}

#[test]
fn flat_square_tables_leave_only_material() {
    let tables = EvalTables {
        material: [100, 300, 300, 500, 900, 0],
        square: [[0; 64]; 6],
    };
    let evaluator = Evaluator::with_tables(tables);
    let board = Position::from_fen("4k3/pp6/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert_eq!(evaluator.static_score(&board), 300);
    assert_eq!(Evaluator::material_balance(&board), 3);
}

#[test]
fn black_uses_mirrored_squares() {
    let mut square = [[0; 64]; 6];
    // Reward a knight on f3 for white, which black sees on f6
    square[1][21] = 50;
    let evaluator = Evaluator::with_tables(EvalTables {
        material: [0; 6],
        square,
    });
    let white = Position::from_fen("4k3/8/8/8/8/5N2/8/4K3 w - - 0 1").unwrap();
    let black = Position::from_fen("4k3/8/5n2/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(evaluator.static_score(&white), 50);
    assert_eq!(evaluator.static_score(&black), -50);
}
