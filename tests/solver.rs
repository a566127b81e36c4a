//! End-to-end checks of the sudoku solver against the grid validator.

#[macro_use]
extern crate lazy_static;

use sudoku_dlx::{AlgorithmXSolver, Grid, SudokuSolver};

const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const CLASSIC_SOLVED: &str =
    "534678912672195348198342567859761423426853791751423869963574281287419635345286179";
const FULL: &str =
    "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

lazy_static! {
    static ref SOLVER: AlgorithmXSolver = AlgorithmXSolver::new();
}

#[test]
fn classic_puzzle_has_the_known_unique_solution() {
    let puzzle: Grid = CLASSIC.parse().unwrap();
    let solved = SOLVER.solve(puzzle).unwrap();
    assert_eq!(solved.to_line(), CLASSIC_SOLVED);
    assert!(solved.is_solved());
}

#[test]
fn givens_are_preserved() {
    let puzzle: Grid = CLASSIC.parse().unwrap();
    let solved = SOLVER.solve(puzzle).unwrap();
    for (row, col, value) in puzzle.cells() {
        if value != 0 {
            assert_eq!(solved.get(row, col), value);
        }
    }
}

#[test]
fn already_solved_grid_comes_back_unchanged() {
    let full: Grid = FULL.parse().unwrap();
    assert!(full.is_solved());
    assert_eq!(SOLVER.solve(full), Some(full));
}

#[test]
fn contradictory_givens_have_no_solution() {
    // Two 5s in the top row.
    let puzzle: Grid = format!("5.5{}", ".".repeat(78)).parse().unwrap();
    assert_eq!(SOLVER.solve(puzzle), None);
}

#[test]
fn contradiction_in_a_box_has_no_solution() {
    // Two 7s in the top-left box, different row and column.
    let mut puzzle = Grid::default();
    puzzle.set(0, 0, 7);
    puzzle.set(1, 1, 7);
    assert_eq!(SOLVER.solve(puzzle), None);
}

#[test]
fn empty_grid_gets_some_valid_completion() {
    let solved = SOLVER.solve(Grid::default()).unwrap();
    assert!(solved.is_solved());
}

#[test]
fn solving_is_deterministic() {
    let puzzle: Grid = CLASSIC.parse().unwrap();
    assert_eq!(SOLVER.solve(puzzle), SOLVER.solve(puzzle));

    // Also for an underdetermined puzzle with many completions.
    let first = SOLVER.solve(Grid::default());
    let second = SOLVER.solve(Grid::default());
    assert_eq!(first, second);
}

#[test]
fn one_solver_instance_handles_many_puzzles() {
    for line in [CLASSIC, FULL] {
        let solved = SOLVER.solve(line.parse().unwrap()).unwrap();
        assert!(solved.is_solved());
    }
}
