//! Palindrome partitioning of a string.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for splitting a string into palindromic pieces.
///
/// The state is the list of pieces cut so far plus a cursor into the source;
/// a choice is an end position (exclusive, in `char`s) whose prefix from the
/// cursor reads the same both ways. Non-palindromic prefixes are simply not
/// offered, which is the entire pruning rule.
pub struct PartitionSearch {
    chars: Vec<char>,
    cursor: usize,
    pieces: Vec<String>,
}

impl PartitionSearch {
    /// Create a space positioned at the start of `s`.
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            cursor: 0,
            pieces: Vec::new(),
        }
    }

    fn is_palindrome(&self, start: usize, end: usize) -> bool {
        let mut left = start;
        let mut right = end - 1;
        while left < right {
            if self.chars[left] != self.chars[right] {
                return false;
            }
            left += 1;
            right -= 1;
        }
        true
    }
}

impl SearchSpace for PartitionSearch {
    type Choice = usize;
    type Solution = Vec<String>;

    fn verdict(&self) -> Verdict {
        if self.cursor == self.chars.len() {
            Verdict::Solution
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<String> {
        self.pieces.clone()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        out.extend(
            (self.cursor + 1..=self.chars.len()).filter(|&end| self.is_palindrome(self.cursor, end)),
        );
    }

    fn commit(&mut self, end: usize) {
        self.pieces
            .push(self.chars[self.cursor..end].iter().collect());
        self.cursor = end;
    }

    fn rollback(&mut self, _end: usize) {
        let piece = self.pieces.pop().unwrap_or_default();
        self.cursor -= piece.chars().count();
    }
}

/// Return every way to split `s` into palindromic substrings.
///
/// Pieces appear in source order within each partition; partitions are
/// enumerated shortest-first-piece first. Works on `char` boundaries, so
/// multibyte input is well-defined.
pub fn partition(s: &str) -> Vec<Vec<String>> {
    engine::solve_all(&mut PartitionSearch::new(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_aab() {
        let result = partition("aab");
        assert_eq!(
            result,
            vec![vec!["a", "a", "b"], vec!["aa", "b"]]
        );
    }

    #[test]
    fn test_single_char() {
        assert_eq!(partition("x"), vec![vec!["x"]]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(partition(""), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_full_palindrome_appears_whole() {
        let result = partition("aba");
        assert_eq!(result, vec![vec!["a", "b", "a"], vec!["aba"]]);
    }

    #[test]
    fn test_pieces_rebuild_the_input() {
        for pieces in partition("abbab") {
            assert_eq!(pieces.concat(), "abbab");
        }
    }

    #[test]
    fn test_cursor_restored_after_search() {
        let mut space = PartitionSearch::new("aab");
        engine::solve_all(&mut space);
        assert_eq!(space.cursor, 0);
        assert!(space.pieces.is_empty());
    }
}
