//! The 9x9 sudoku grid: parsing, printing, and the solved-grid check.

use std::fmt;
use std::str::FromStr;

use crate::Error;

pub const SIZE: usize = 9;
pub const BOX: usize = 3;

/// A sudoku board. Cells hold 0 for "empty" or a digit 1-9.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// Builds a grid from row-major rows, rejecting anything that is
    /// not 9x9 or holds a value outside 0..=9.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Grid, Error> {
        if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
            return Err(Error::WrongShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |row| row.len()),
            });
        }
        let mut grid = Grid::default();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(Error::CellOutOfRange {
                        row: r,
                        col: c,
                        value,
                    });
                }
                grid.cells[r][c] = value;
            }
        }
        Ok(grid)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row][col] = value;
    }

    /// Iterates over all cells in row-major order as
    /// `(row, col, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &value)| (r, c, value))
        })
    }

    /// The 81-character row-major form, `.` for empty cells.
    pub fn to_line(&self) -> String {
        self.cells()
            .map(|(_, _, value)| match value {
                0 => '.',
                d => (d + b'0') as char,
            })
            .collect()
    }

    /// True when `digit` can be placed at `(row, col)` without
    /// clashing with the cell's row, column, or box.
    pub fn candidate_fits(&self, row: usize, col: usize, digit: u8) -> bool {
        if !(1..=9).contains(&digit) {
            return false;
        }
        for i in 0..SIZE {
            if self.cells[row][i] == digit || self.cells[i][col] == digit {
                return false;
            }
        }
        let (r0, c0) = (row / BOX * BOX, col / BOX * BOX);
        for r in r0..r0 + BOX {
            for c in c0..c0 + BOX {
                if self.cells[r][c] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// The validator: every row, column, and 3x3 box contains the
    /// digits 1-9 exactly once. Pure; never consulted by the search
    /// itself.
    pub fn is_solved(&self) -> bool {
        // Nine cells, none empty, no repeats: pigeonhole gives all of
        // 1-9, so a seen-array per unit is the whole check.
        for r in 0..SIZE {
            let mut seen = [false; SIZE + 1];
            for c in 0..SIZE {
                let value = self.cells[r][c] as usize;
                if value == 0 || seen[value] {
                    return false;
                }
                seen[value] = true;
            }
        }

        for c in 0..SIZE {
            let mut seen = [false; SIZE + 1];
            for r in 0..SIZE {
                let value = self.cells[r][c] as usize;
                if value == 0 || seen[value] {
                    return false;
                }
                seen[value] = true;
            }
        }

        for br in 0..BOX {
            for bc in 0..BOX {
                let mut seen = [false; SIZE + 1];
                for r in br * BOX..br * BOX + BOX {
                    for c in bc * BOX..bc * BOX + BOX {
                        let value = self.cells[r][c] as usize;
                        if value == 0 || seen[value] {
                            return false;
                        }
                        seen[value] = true;
                    }
                }
            }
        }

        true
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parses the usual 81-character row-major form; `.` and `0` both
    /// mean "empty".
    fn from_str(s: &str) -> Result<Grid, Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SIZE * SIZE {
            return Err(Error::WrongLength(chars.len()));
        }
        let mut grid = Grid::default();
        for (i, &ch) in chars.iter().enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(Error::BadCharacter(ch)),
            };
            grid.cells[i / SIZE][i % SIZE] = value;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => write!(f, ".")?,
                    d => write!(f, "{}", d)?,
                }
                if c == 2 || c == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if r == 2 || r == 5 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
