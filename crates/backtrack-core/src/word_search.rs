//! Word search over a 2D character grid.

use crate::engine::{self, SearchSpace, Verdict};
use crate::Error;

/// Search space for tracing a word through a rectangular grid.
///
/// The path may start at any cell matching the word's first character and
/// extends through 4-neighbors. The visited grid is the occupancy marker
/// keeping a path from revisiting its own cells; it mirrors the live path
/// exactly across every recursive boundary.
pub struct WordSearch<'a> {
    board: &'a [Vec<char>],
    word: Vec<char>,
    visited: Vec<Vec<bool>>,
    path: Vec<(usize, usize)>,
}

impl<'a> WordSearch<'a> {
    /// Create a space for `word` over `board`.
    ///
    /// Fails if the grid rows are not all the same length.
    pub fn new(board: &'a [Vec<char>], word: &str) -> Result<Self, Error> {
        let expected = board.first().map_or(0, Vec::len);
        for (row, cells) in board.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedGrid {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            board,
            word: word.chars().collect(),
            visited: board.iter().map(|row| vec![false; row.len()]).collect(),
            path: Vec::new(),
        })
    }

    fn matches(&self, row: usize, col: usize) -> bool {
        !self.visited[row][col] && self.board[row][col] == self.word[self.path.len()]
    }

    /// True once the search has returned and the visited grid is reset.
    pub fn is_pristine(&self) -> bool {
        self.path.is_empty() && self.visited.iter().flatten().all(|&v| !v)
    }
}

impl SearchSpace for WordSearch<'_> {
    type Choice = (usize, usize);
    type Solution = Vec<(usize, usize)>;

    fn verdict(&self) -> Verdict {
        if self.path.len() == self.word.len() {
            Verdict::Solution
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<(usize, usize)> {
        self.path.clone()
    }

    fn choices(&self, out: &mut Vec<(usize, usize)>) {
        match self.path.last() {
            // First letter: any matching cell, scanned row-major.
            None => {
                for row in 0..self.board.len() {
                    for col in 0..self.board[row].len() {
                        if self.matches(row, col) {
                            out.push((row, col));
                        }
                    }
                }
            }
            Some(&(row, col)) => {
                if row + 1 < self.board.len() && self.matches(row + 1, col) {
                    out.push((row + 1, col));
                }
                if row > 0 && self.matches(row - 1, col) {
                    out.push((row - 1, col));
                }
                if col + 1 < self.board[row].len() && self.matches(row, col + 1) {
                    out.push((row, col + 1));
                }
                if col > 0 && self.matches(row, col - 1) {
                    out.push((row, col - 1));
                }
            }
        }
    }

    fn commit(&mut self, cell: (usize, usize)) {
        self.visited[cell.0][cell.1] = true;
        self.path.push(cell);
    }

    fn rollback(&mut self, cell: (usize, usize)) {
        self.path.pop();
        self.visited[cell.0][cell.1] = false;
    }
}

/// Return whether `word` can be traced through the grid via adjacent cells,
/// visiting no cell twice.
///
/// The empty word is always found; a ragged grid is rejected.
pub fn exist(board: &[Vec<char>], word: &str) -> Result<bool, Error> {
    Ok(find_word(board, word)?.is_some())
}

/// Return the first path spelling `word`, as `(row, col)` cells in order,
/// or `None` when the word cannot be traced.
pub fn find_word(board: &[Vec<char>], word: &str) -> Result<Option<Vec<(usize, usize)>>, Error> {
    let mut space = WordSearch::new(board, word)?;
    Ok(engine::solve_first(&mut space))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    #[test]
    fn test_word_found_without_revisit() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        assert_eq!(exist(&board, "ABCCED"), Ok(true));
        assert_eq!(exist(&board, "SEE"), Ok(true));
    }

    #[test]
    fn test_word_requiring_revisit_is_rejected() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        assert_eq!(exist(&board, "ABCB"), Ok(false));
    }

    #[test]
    fn test_find_word_returns_the_path() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        let path = find_word(&board, "ASA").unwrap().unwrap();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_empty_word_is_always_found() {
        assert_eq!(exist(&grid(&["AB"]), ""), Ok(true));
        assert_eq!(exist(&[], ""), Ok(true));
    }

    #[test]
    fn test_empty_board_has_no_words() {
        assert_eq!(exist(&[], "A"), Ok(false));
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let board = vec![vec!['A', 'B'], vec!['C']];
        assert_eq!(
            exist(&board, "AB"),
            Err(Error::RaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_visited_restored_even_after_early_stop() {
        let board = grid(&["ABCE", "SFCS", "ADEE"]);
        let mut space = WordSearch::new(&board, "ABCCED").unwrap();
        assert!(engine::solve_first(&mut space).is_some());
        assert!(space.is_pristine());

        let mut missing = WordSearch::new(&board, "ABCB").unwrap();
        assert!(engine::solve_first(&mut missing).is_none());
        assert!(missing.is_pristine());
    }
}
