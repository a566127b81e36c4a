//! Dancing-links representation of a 0/1 matrix and the Algorithm X
//! search over it.
//!
//! The matrix is stored as a toroidal grid of doubly-linked nodes: one
//! header per column plus one data node per nonzero cell, every node
//! linked into a circular list both horizontally (its row) and
//! vertically (its column). Links are indices into a single arena
//! rather than pointers; index 0 is always the root header.

use crate::Error;

type Index = usize;

/// One arena slot: a column header or a data node.
///
/// For headers, `row` is unused and `col` is the header's own index.
/// For data nodes, `row` is the 0-based index of the matrix row the
/// node belongs to and `col` is the index of its column header.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Node {
    left: Index,
    right: Index,
    up: Index,
    down: Index,
    row: Index,
    col: Index,
}

/// A sparse exact-cover matrix with reversible cover/uncover.
pub struct LinkMatrix {
    nodes: Vec<Node>,
    // sizes[h] is the number of data nodes currently linked into the
    // vertical list of header h; kept in lock-step by cover/uncover.
    sizes: Vec<usize>,
    n_rows: usize,
}

impl LinkMatrix {
    const ROOT: Index = 0;

    /// Creates a matrix with `n_cols` columns and no rows.
    pub fn new(n_cols: usize) -> LinkMatrix {
        let mut nodes = Vec::with_capacity(n_cols + 1);
        nodes.push(Node {
            left: n_cols,
            right: if n_cols == 0 { 0 } else { 1 },
            up: 0,
            down: 0,
            row: 0,
            col: 0,
        });
        // Headers occupy indices 1..=n_cols, chained into a ring
        // through the root. Each vertical list starts out empty,
        // pointing back at the header itself.
        for h in 1..=n_cols {
            nodes.push(Node {
                left: h - 1,
                right: if h == n_cols { Self::ROOT } else { h + 1 },
                up: h,
                down: h,
                row: 0,
                col: h,
            });
        }
        LinkMatrix {
            nodes,
            sizes: vec![0; n_cols + 1],
            n_rows: 0,
        }
    }

    /// Builds a matrix from a dense boolean grid, one `push_row` per
    /// grid row. Fails if the grid is not rectangular.
    pub fn from_grid(grid: &[Vec<bool>]) -> Result<LinkMatrix, Error> {
        let n_cols = grid.first().map_or(0, |row| row.len());
        for (i, row) in grid.iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::NotRectangular {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
        }
        let mut matrix = LinkMatrix::new(n_cols);
        for row in grid {
            matrix.push_row(row.iter().copied());
        }
        Ok(matrix)
    }

    /// Appends one matrix row; the row's identifier is its 0-based
    /// insertion order. `cells` must yield exactly one boolean per
    /// column.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = bool>) {
        let row_id = self.n_rows;
        self.n_rows += 1;
        let mut first = None;
        for (col, cell) in cells.into_iter().enumerate() {
            if !cell {
                continue;
            }
            let node = self.append_in_column(col + 1, row_id);
            match first {
                None => first = Some(node),
                Some(first) => {
                    // Link to the left of the first node, i.e. at the
                    // end of the row's circular list.
                    let last = self.nodes[first].left;
                    self.nodes[node].left = last;
                    self.nodes[node].right = first;
                    self.nodes[last].right = node;
                    self.nodes[first].left = node;
                }
            }
        }
    }

    // Inserts a fresh data node just above `header`, so that a
    // column's vertical list stays in row-ascending order.
    fn append_in_column(&mut self, header: Index, row_id: usize) -> Index {
        let node = self.nodes.len();
        let up = self.nodes[header].up;
        self.nodes.push(Node {
            left: node,
            right: node,
            up,
            down: header,
            row: row_id,
            col: header,
        });
        self.nodes[up].down = node;
        self.nodes[header].up = node;
        self.sizes[header] += 1;
        node
    }

    /// True when every column has been covered.
    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].right == Self::ROOT
    }

    // The Algorithm X heuristic: branch on the column with the fewest
    // remaining candidate rows, ties going to the first one in ring
    // order. Must not be called on an empty matrix.
    fn choose_column(&self) -> Index {
        let mut min_size = usize::MAX;
        let mut min_header = Self::ROOT;
        let mut header = self.nodes[Self::ROOT].right;
        while header != Self::ROOT {
            if self.sizes[header] < min_size {
                min_size = self.sizes[header];
                min_header = header;
            }
            header = self.nodes[header].right;
        }
        min_header
    }

    // Removes `header` from the header ring, then splices every row
    // in its vertical list out of all the *other* columns it touches.
    // The unlinked nodes keep their own link fields, which is exactly
    // the information uncover needs to restore them.
    fn cover(&mut self, header: Index) {
        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let Node { up, down, col, .. } = self.nodes[node];
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[col] -= 1;
                node = self.nodes[node].right;
            }
            row = self.nodes[row].down;
        }
    }

    // Exact inverse of cover: the same nodes in the exact reverse
    // order (upward, then leftward). Restoring in forward order would
    // leave neighbor links pointing at the wrong nodes.
    fn uncover(&mut self, header: Index) {
        let mut row = self.nodes[header].up;
        while row != header {
            let mut node = self.nodes[row].left;
            while node != row {
                let Node { up, down, col, .. } = self.nodes[node];
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.sizes[col] += 1;
                node = self.nodes[node].left;
            }
            row = self.nodes[row].up;
        }

        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    /// Searches for an exact cover, returning the identifiers of the
    /// selected rows, or `None` when no cover exists. Stops at the
    /// first solution found.
    pub fn search(&mut self) -> Option<Vec<usize>> {
        if self.is_empty() {
            return Some(Vec::new());
        }

        let header = self.choose_column();
        self.cover(header);

        // A size-zero column makes this loop a no-op, which is the
        // immediate backtrack on an unsatisfiable constraint.
        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let col = self.nodes[node].col;
                self.cover(col);
                node = self.nodes[node].right;
            }

            if let Some(mut rows) = self.search() {
                rows.push(self.nodes[row].row);
                return Some(rows);
            }

            // Undo in the reverse of the cover order above.
            let mut node = self.nodes[row].left;
            while node != row {
                let col = self.nodes[node].col;
                self.uncover(col);
                node = self.nodes[node].left;
            }

            row = self.nodes[row].down;
        }

        self.uncover(header);
        None
    }
}

/// Solves the exact cover problem for a dense 0/1 grid.
///
/// Returns `Ok(Some(rows))` with the selected row indices (in the
/// grid's original row order), `Ok(None)` when no exact cover exists,
/// or an error when the grid is not rectangular. An absent cover is a
/// normal outcome, not an error.
pub fn solve(grid: &[Vec<bool>]) -> Result<Option<Vec<usize>>, Error> {
    let mut matrix = LinkMatrix::from_grid(grid)?;
    Ok(matrix.search().map(|mut rows| {
        rows.reverse();
        rows
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The example from Knuth's paper (also on the Wikipedia Algorithm
    // X page): rows 1, 3, 5 form the unique exact cover.
    fn knuth_grid() -> Vec<Vec<bool>> {
        let sparse: [&[usize]; 6] = [
            &[0, 3, 6],
            &[0, 3],
            &[3, 4, 6],
            &[2, 4, 5],
            &[1, 2, 5, 6],
            &[1, 6],
        ];
        sparse
            .iter()
            .map(|cols| {
                let mut row = vec![false; 7];
                for &c in cols.iter() {
                    row[c] = true;
                }
                row
            })
            .collect()
    }

    #[test]
    fn knuth_example() {
        let mut solution = solve(&knuth_grid()).unwrap().unwrap();
        solution.sort();
        assert_eq!(solution, vec![1, 3, 5]);
    }

    #[test]
    fn solution_covers_every_column_once() {
        let grid = knuth_grid();
        let solution = solve(&grid).unwrap().unwrap();
        for col in 0..7 {
            let hits = solution.iter().filter(|&&r| grid[r][col]).count();
            assert_eq!(hits, 1, "column {} covered {} times", col, hits);
        }
    }

    #[test]
    fn no_cover_is_not_an_error() {
        // Column 2 is never covered together with the others.
        let grid = vec![
            vec![true, true, false],
            vec![false, false, true],
            vec![true, true, true],
        ];
        // Rows 0+1 would work; make it unsatisfiable instead.
        let grid_unsat = vec![vec![true, false, false], vec![true, true, false]];
        assert!(solve(&grid).unwrap().is_some());
        assert_eq!(solve(&grid_unsat).unwrap(), None);
    }

    #[test]
    fn empty_column_backtracks() {
        // No row touches column 1, so there is no cover at all.
        let grid = vec![vec![true, false], vec![true, false]];
        assert_eq!(solve(&grid).unwrap(), None);
    }

    #[test]
    fn zero_column_matrix_is_trivially_covered() {
        let grid: Vec<Vec<bool>> = Vec::new();
        assert_eq!(solve(&grid).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn non_rectangular_grid_is_rejected() {
        let grid = vec![vec![true, false], vec![true]];
        match solve(&grid) {
            Err(Error::NotRectangular {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected NotRectangular, got {:?}", other),
        }
    }

    #[test]
    fn choose_column_prefers_smallest_then_first() {
        let grid = vec![
            vec![true, true, false],
            vec![false, true, true],
            vec![false, true, false],
        ];
        let matrix = LinkMatrix::from_grid(&grid).unwrap();
        // The first and third columns both have a single row; the
        // first of the minimal ones wins.
        assert_eq!(matrix.choose_column(), 1);
    }

    #[test]
    fn cover_then_uncover_restores_the_arena() {
        let mut matrix = LinkMatrix::from_grid(&knuth_grid()).unwrap();
        let nodes_before = matrix.nodes.clone();
        let sizes_before = matrix.sizes.clone();

        // LIFO pairing over several columns, mirroring how search
        // unwinds.
        matrix.cover(1);
        matrix.cover(4);
        matrix.cover(7);
        matrix.uncover(7);
        matrix.uncover(4);
        matrix.uncover(1);

        assert_eq!(matrix.nodes, nodes_before);
        assert_eq!(matrix.sizes, sizes_before);
    }

    #[test]
    fn toroidal_consistency_after_build() {
        let matrix = LinkMatrix::from_grid(&knuth_grid()).unwrap();
        for (i, node) in matrix.nodes.iter().enumerate() {
            assert_eq!(matrix.nodes[node.left].right, i);
            assert_eq!(matrix.nodes[node.right].left, i);
            assert_eq!(matrix.nodes[node.up].down, i);
            assert_eq!(matrix.nodes[node.down].up, i);
        }
    }

    #[test]
    fn sizes_match_vertical_lists() {
        let matrix = LinkMatrix::from_grid(&knuth_grid()).unwrap();
        for header in 1..=7 {
            let mut count = 0;
            let mut node = matrix.nodes[header].down;
            while node != header {
                count += 1;
                node = matrix.nodes[node].down;
            }
            assert_eq!(matrix.sizes[header], count);
        }
    }

    #[test]
    fn search_is_deterministic() {
        let grid = knuth_grid();
        assert_eq!(solve(&grid).unwrap(), solve(&grid).unwrap());
    }
}
