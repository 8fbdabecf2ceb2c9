//! Balanced parenthesis string generation.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for balanced parenthesis strings of `n` pairs.
///
/// The open/close counters are the whole legality check: an opening bracket
/// is legal while fewer than `n` are placed, a closing bracket while it has
/// an unmatched opener to its left. Every string of length `2n` reached under
/// those guards is balanced.
pub struct ParenthesisSearch {
    pairs: usize,
    buf: String,
    open: usize,
    close: usize,
}

impl ParenthesisSearch {
    /// Create a space for `pairs` bracket pairs.
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            buf: String::new(),
            open: 0,
            close: 0,
        }
    }
}

impl SearchSpace for ParenthesisSearch {
    type Choice = char;
    type Solution = String;

    fn verdict(&self) -> Verdict {
        if self.buf.len() == 2 * self.pairs {
            Verdict::Solution
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> String {
        self.buf.clone()
    }

    fn choices(&self, out: &mut Vec<char>) {
        if self.open < self.pairs {
            out.push('(');
        }
        if self.close < self.open {
            out.push(')');
        }
    }

    fn commit(&mut self, bracket: char) {
        self.buf.push(bracket);
        if bracket == '(' {
            self.open += 1;
        } else {
            self.close += 1;
        }
    }

    fn rollback(&mut self, bracket: char) {
        self.buf.pop();
        if bracket == '(' {
            self.open -= 1;
        } else {
            self.close -= 1;
        }
    }
}

/// Return all balanced strings of `n` parenthesis pairs.
///
/// Results come in the order produced by always trying `'('` before `')'`;
/// the count for `n` is the `n`-th Catalan number.
pub fn generate_parenthesis(n: usize) -> Vec<String> {
    engine::solve_all(&mut ParenthesisSearch::new(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_pairs() {
        let result = generate_parenthesis(3);
        assert_eq!(result, vec!["((()))", "(()())", "(())()", "()(())", "()()()"]);
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(generate_parenthesis(1), vec!["()"]);
    }

    #[test]
    fn test_zero_pairs() {
        assert_eq!(generate_parenthesis(0), vec![String::new()]);
    }

    #[test]
    fn test_catalan_count() {
        assert_eq!(generate_parenthesis(4).len(), 14);
        assert_eq!(generate_parenthesis(5).len(), 42);
    }

    #[test]
    fn test_every_result_is_balanced() {
        for s in generate_parenthesis(4) {
            let mut depth: i32 = 0;
            for c in s.chars() {
                depth += if c == '(' { 1 } else { -1 };
                assert!(depth >= 0);
            }
            assert_eq!(depth, 0);
        }
    }

    #[test]
    fn test_counters_restored_after_search() {
        let mut space = ParenthesisSearch::new(3);
        engine::solve_all(&mut space);
        assert!(space.buf.is_empty());
        assert_eq!(space.open, 0);
        assert_eq!(space.close, 0);
    }
}
