//! Sudoku as an exact cover problem.
//!
//! Every possible placement of a digit is one matrix row, every rule
//! the finished board must satisfy is one matrix column:
//!
//! * 81 columns for "cell (r, c) holds exactly one digit"
//! * 81 columns for "digit d appears once in row r"
//! * 81 columns for "digit d appears once in column c"
//! * 81 columns for "digit d appears once in box b"
//!
//! The 729x324 matrix is the same for every puzzle, so it is built
//! once per solver and a puzzle merely selects which of its rows are
//! still in play.

use ndarray::{Array2, Axis};

use crate::dlx::LinkMatrix;
use crate::grid::{Grid, BOX, SIZE};
use crate::SudokuSolver;

const N_CANDIDATES: usize = SIZE * SIZE * SIZE; // 729
const N_CONSTRAINTS: usize = 4 * SIZE * SIZE; // 324

/// One possible placement: digit `digit` at `(row, col)`, all 1-based.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    row: u8,
    col: u8,
    digit: u8,
}

// The four constraint columns covered by the candidate at (row, col,
// digit), all 0-based here. One column per 81-column block.
fn constraint_columns(row: usize, col: usize, digit: usize) -> [usize; 4] {
    let boxidx = (row / BOX) * BOX + col / BOX;
    [
        row * SIZE + col,
        SIZE * SIZE + row * SIZE + digit,
        2 * SIZE * SIZE + col * SIZE + digit,
        3 * SIZE * SIZE + boxidx * SIZE + digit,
    ]
}

/// A sudoku solver backed by dancing links.
///
/// Construction builds the full constraint matrix; [`solve`] runs
/// against any number of puzzles without rebuilding it.
///
/// [`solve`]: SudokuSolver::solve
pub struct AlgorithmXSolver {
    matrix: Array2<bool>,
    candidates: Vec<Candidate>,
}

impl AlgorithmXSolver {
    pub fn new() -> AlgorithmXSolver {
        // Candidates in (row, col, digit) order; the candidate for
        // (r, c, d) sits at matrix row (r-1)*81 + (c-1)*9 + (d-1),
        // which is the ordering everything below relies on.
        let candidates: Vec<Candidate> = (1..=9)
            .flat_map(|row| {
                (1..=9).flat_map(move |col| {
                    (1..=9).map(move |digit| Candidate {
                        row,
                        col,
                        digit,
                    })
                })
            })
            .collect();

        let mut matrix = Array2::default((N_CANDIDATES, N_CONSTRAINTS));
        for (i, candidate) in candidates.iter().enumerate() {
            let row = (candidate.row - 1) as usize;
            let col = (candidate.col - 1) as usize;
            let digit = (candidate.digit - 1) as usize;
            for constraint in constraint_columns(row, col, digit) {
                matrix[[i, constraint]] = true;
            }
        }

        AlgorithmXSolver { matrix, candidates }
    }

    // The indices of the candidate rows a puzzle leaves active: all
    // nine digits for an empty cell, just the given one otherwise.
    fn active_rows(grid: &Grid) -> Vec<usize> {
        let mut active = Vec::with_capacity(N_CANDIDATES);
        for (row, col, value) in grid.cells() {
            let base = row * SIZE * SIZE + col * SIZE;
            if value == 0 {
                active.extend(base..base + SIZE);
            } else {
                active.push(base + (value - 1) as usize);
            }
        }
        active
    }
}

impl Default for AlgorithmXSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuSolver for AlgorithmXSolver {
    fn solve(&self, mut grid: Grid) -> Option<Grid> {
        let active = Self::active_rows(&grid);

        // Restrict the fixed matrix to the active rows and hand that
        // to the link matrix. Search returns row ids relative to the
        // restricted matrix, so `active` doubles as the decoder map.
        let masked = self.matrix.select(Axis(0), &active);
        let mut links = LinkMatrix::new(N_CONSTRAINTS);
        for row in masked.outer_iter() {
            links.push_row(row.iter().copied());
        }

        let selected = links.search()?;
        for idx in selected {
            let candidate = self.candidates[active[idx]];
            grid.set(
                (candidate.row - 1) as usize,
                (candidate.col - 1) as usize,
                candidate.digit,
            );
        }
        Some(grid)
    }
}
