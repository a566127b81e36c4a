//! A plain backtracking solver, kept as a baseline to compare the
//! dancing-links engine against.

use crate::grid::{Grid, SIZE};
use crate::SudokuSolver;

pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> BacktrackingSolver {
        BacktrackingSolver
    }

    fn fill(grid: &mut Grid) -> bool {
        let empty = grid.cells().find(|&(_, _, value)| value == 0);
        let Some((row, col, _)) = empty else {
            return true;
        };

        for digit in 1..=SIZE as u8 {
            if !grid.candidate_fits(row, col, digit) {
                continue;
            }
            grid.set(row, col, digit);
            if Self::fill(grid) {
                return true;
            }
            grid.set(row, col, 0);
        }
        false
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuSolver for BacktrackingSolver {
    fn solve(&self, mut grid: Grid) -> Option<Grid> {
        Self::fill(&mut grid).then_some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_an_easy_puzzle() {
        let puzzle: Grid =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
                .parse()
                .unwrap();
        let solved = BacktrackingSolver::new().solve(puzzle).unwrap();
        assert!(solved.is_solved());
    }

    #[test]
    fn agrees_with_the_validator_on_a_full_grid() {
        let full: Grid =
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678"
                .parse()
                .unwrap();
        let solved = BacktrackingSolver::new().solve(full).unwrap();
        assert_eq!(solved, full);
    }
}
