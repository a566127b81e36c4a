use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressIterator;
use thiserror::Error;

use sudoku_dlx::{AlgorithmXSolver, BacktrackingSolver, Grid, SudokuSolver};

mod stats;

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/puzzles.txt");

/// Solve a file of sudoku puzzles (one 81-character line each) and
/// report timing statistics.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the file containing the puzzles to solve
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Solver to use
    #[arg(short, long, default_value_t = SolverKind::Dlx)]
    solver: SolverKind,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum SolverKind {
    /// Dancing-links exact cover search
    Dlx,
    /// Naive cell-by-cell backtracking
    Backtracking,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Dlx => write!(f, "dlx"),
            SolverKind::Backtracking => write!(f, "backtracking"),
        }
    }
}

#[derive(Debug, Error)]
enum SolveError {
    #[error("no solution found for puzzle:\n{0}")]
    NoSolution(Grid),
    #[error("solver produced an invalid solution for puzzle:\n{0}")]
    WrongSolution(Grid),
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let puzzles = content
        .lines()
        .map(|line| line.parse::<Grid>())
        .collect::<Result<Vec<_>, _>>()?;

    let solver: Box<dyn SudokuSolver> = match &args.solver {
        SolverKind::Dlx => Box::new(AlgorithmXSolver::new()),
        SolverKind::Backtracking => Box::new(BacktrackingSolver::new()),
    };
    println!("Solving {} puzzles with the {} solver.", puzzles.len(), args.solver);

    let durations = puzzles
        .into_iter()
        .progress()
        .map(|puzzle| solve_and_time(solver.as_ref(), puzzle))
        .collect::<Result<Vec<_>>>()?;

    let stats = stats::Statistics::from_durations(&durations)
        .context("input file contained no puzzles")?;
    println!("Statistics: {}", stats);

    Ok(())
}

fn solve_and_time(solver: &dyn SudokuSolver, puzzle: Grid) -> Result<Duration> {
    let start = Instant::now();
    let solution = solver.solve(puzzle);
    let duration = start.elapsed();

    let solution = solution.ok_or(SolveError::NoSolution(puzzle))?;
    if !solution.is_solved() {
        return Err(SolveError::WrongSolution(puzzle).into());
    }

    Ok(duration)
}
