//! N-Queens placement search.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for placing `n` non-attacking queens on an `n x n` board.
///
/// Queens are placed one row at a time; the partial solution is the column
/// picked for each filled row. Occupancy markers cover the `n` columns and
/// the `2n - 1` diagonals in each direction, identified by `row + col` and
/// `row - col + n - 1`. A column is a legal choice when all three markers
/// are clear.
pub struct QueenSearch {
    n: usize,
    placements: Vec<usize>,
    columns: Vec<bool>,
    diag_down: Vec<bool>,
    diag_up: Vec<bool>,
}

impl QueenSearch {
    /// Create a space for an `n x n` board with no queens placed.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            placements: Vec::with_capacity(n),
            columns: vec![false; n],
            diag_down: vec![false; (2 * n).saturating_sub(1)],
            diag_up: vec![false; (2 * n).saturating_sub(1)],
        }
    }

    fn row(&self) -> usize {
        self.placements.len()
    }

    fn attacked(&self, row: usize, col: usize) -> bool {
        self.columns[col] || self.diag_down[row + col] || self.diag_up[row + self.n - 1 - col]
    }

    /// True once the search has returned and all markers are reset.
    pub fn is_pristine(&self) -> bool {
        self.placements.is_empty()
            && self.columns.iter().all(|&c| !c)
            && self.diag_down.iter().all(|&d| !d)
            && self.diag_up.iter().all(|&d| !d)
    }
}

impl SearchSpace for QueenSearch {
    type Choice = usize;
    type Solution = Vec<String>;

    fn verdict(&self) -> Verdict {
        if self.row() == self.n {
            Verdict::Solution
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<String> {
        self.placements
            .iter()
            .map(|&col| {
                (0..self.n)
                    .map(|c| if c == col { 'Q' } else { '.' })
                    .collect()
            })
            .collect()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        let row = self.row();
        out.extend((0..self.n).filter(|&col| !self.attacked(row, col)));
    }

    fn commit(&mut self, col: usize) {
        let row = self.row();
        self.columns[col] = true;
        self.diag_down[row + col] = true;
        self.diag_up[row + self.n - 1 - col] = true;
        self.placements.push(col);
    }

    fn rollback(&mut self, col: usize) {
        self.placements.pop();
        let row = self.row();
        self.columns[col] = false;
        self.diag_down[row + col] = false;
        self.diag_up[row + self.n - 1 - col] = false;
    }
}

/// Return all placements of `n` non-attacking queens.
///
/// Each solution is one board, top row first, rendered as strings of `.`
/// with a single `Q` per row.
pub fn solve_n_queens(n: usize) -> Vec<Vec<String>> {
    engine::solve_all(&mut QueenSearch::new(n))
}
