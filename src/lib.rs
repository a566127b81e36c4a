//! Exact cover solving via Knuth's Dancing Links, applied to sudoku.
//!
//! The crate splits into a generic engine and one consumer of it:
//!
//! * [`dlx`] holds the toroidal link matrix and the Algorithm X
//!   search. [`dlx::solve`] takes any rectangular 0/1 grid and
//!   returns the rows of its first exact cover.
//! * [`AlgorithmXSolver`] encodes a 9x9 sudoku as a 729x324 exact
//!   cover problem, runs the engine, and decodes the selected rows
//!   back into a filled [`Grid`].
//! * [`BacktrackingSolver`] is a naive baseline for comparison.
//!
//! ```
//! use sudoku_dlx::{AlgorithmXSolver, Grid, SudokuSolver};
//!
//! let puzzle: Grid =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()
//!         .unwrap();
//! let solver = AlgorithmXSolver::new();
//! let solved = solver.solve(puzzle).expect("puzzle has a solution");
//! assert!(solved.is_solved());
//! ```
//!
//! "No solution exists" is reported as `None` (or `Ok(None)` from the
//! engine) and is a normal outcome; errors are reserved for malformed
//! input and are raised before any search begins.

use thiserror::Error;

pub mod dlx;

mod backtracking;
mod grid;
mod sudoku;

pub use backtracking::BacktrackingSolver;
pub use grid::Grid;
pub use sudoku::AlgorithmXSolver;

/// Invalid-input failures. Distinct from an unsolvable puzzle, which
/// is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("matrix is not rectangular: row {row} has {found} columns, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid must be 9x9, got {rows}x{cols}")]
    WrongShape { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0..=9")]
    CellOutOfRange { row: usize, col: usize, value: u8 },
    #[error("puzzle must have 81 characters, got {0}")]
    WrongLength(usize),
    #[error("unexpected character {0:?} in puzzle")]
    BadCharacter(char),
}

/// The seam between puzzle and engine: both solvers take a board and
/// either complete it or report that no completion exists.
pub trait SudokuSolver {
    fn solve(&self, grid: Grid) -> Option<Grid>;
}
