//! Combination-sum search, in the reusable and single-use variants.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for combination sum with unlimited reuse of candidates.
///
/// The lower bound for the next pick stays *at* the most recent index, so the
/// same candidate can appear many times; overshooting the target is pruned in
/// the child via `remaining < 0`. Recording a solution stops the descent
/// immediately (extending a zero remainder can only overshoot).
pub struct CombinationSumSearch<'a> {
    candidates: &'a [i32],
    remaining: i32,
    current: Vec<i32>,
    picked: Vec<usize>,
}

impl<'a> CombinationSumSearch<'a> {
    /// Create a space for positive candidates and the given target.
    pub fn new(candidates: &'a [i32], target: i32) -> Self {
        Self {
            candidates,
            remaining: target,
            current: Vec::new(),
            picked: Vec::new(),
        }
    }

    fn lower_bound(&self) -> usize {
        // Reuse allowed: the bound stays at the chosen index.
        self.picked.last().copied().unwrap_or(0)
    }
}

impl SearchSpace for CombinationSumSearch<'_> {
    type Choice = usize;
    type Solution = Vec<i32>;

    fn verdict(&self) -> Verdict {
        if self.remaining == 0 {
            Verdict::Solution
        } else if self.remaining < 0 {
            Verdict::Prune
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<i32> {
        self.current.clone()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        out.extend(self.lower_bound()..self.candidates.len());
    }

    fn commit(&mut self, index: usize) {
        self.remaining -= self.candidates[index];
        self.current.push(self.candidates[index]);
        self.picked.push(index);
    }

    fn rollback(&mut self, index: usize) {
        self.picked.pop();
        self.current.pop();
        self.remaining += self.candidates[index];
    }
}

/// Search space for combination sum where each candidate is used at most
/// once and duplicate solutions are suppressed.
///
/// Candidates are sorted up front. At each depth, a candidate equal to its
/// immediately preceding sibling is skipped, and the candidate loop ends as
/// soon as a candidate exceeds the remainder (the tail can only be larger).
pub struct CombinationSum2Search {
    candidates: Vec<i32>,
    remaining: i32,
    current: Vec<i32>,
    picked: Vec<usize>,
}

impl CombinationSum2Search {
    /// Create a space; `candidates` may contain repeats.
    pub fn new(candidates: &[i32], target: i32) -> Self {
        let mut candidates = candidates.to_vec();
        candidates.sort_unstable();
        Self {
            candidates,
            remaining: target,
            current: Vec::new(),
            picked: Vec::new(),
        }
    }

    fn lower_bound(&self) -> usize {
        // No reuse: the bound moves past the chosen index.
        self.picked.last().map_or(0, |&i| i + 1)
    }
}

impl SearchSpace for CombinationSum2Search {
    type Choice = usize;
    type Solution = Vec<i32>;

    fn verdict(&self) -> Verdict {
        if self.remaining == 0 {
            Verdict::Solution
        } else if self.remaining < 0 {
            Verdict::Prune
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<i32> {
        self.current.clone()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        let start = self.lower_bound();
        for i in start..self.candidates.len() {
            if i > start && self.candidates[i] == self.candidates[i - 1] {
                continue;
            }
            if self.candidates[i] > self.remaining {
                break;
            }
            out.push(i);
        }
    }

    fn commit(&mut self, index: usize) {
        self.remaining -= self.candidates[index];
        self.current.push(self.candidates[index]);
        self.picked.push(index);
    }

    fn rollback(&mut self, index: usize) {
        self.picked.pop();
        self.current.pop();
        self.remaining += self.candidates[index];
    }
}

/// Return all multisets of `candidates` summing to `target`, with unlimited
/// reuse of each candidate.
///
/// Candidates are taken in input order; each solution lists its picks in
/// nondecreasing candidate-index order.
pub fn combination_sum(candidates: &[i32], target: i32) -> Vec<Vec<i32>> {
    engine::solve_all(&mut CombinationSumSearch::new(candidates, target))
}

/// Return all combinations of `candidates` summing to `target`, using each
/// array position at most once and suppressing duplicate solutions.
pub fn combination_sum2(candidates: &[i32], target: i32) -> Vec<Vec<i32>> {
    engine::solve_all(&mut CombinationSum2Search::new(candidates, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_sum_classic() {
        let result = combination_sum(&[2, 3, 6, 7], 7);
        assert_eq!(result, vec![vec![2, 2, 3], vec![7]]);
    }

    #[test]
    fn test_combination_sum_no_solution() {
        assert!(combination_sum(&[4, 6], 5).is_empty());
    }

    #[test]
    fn test_combination_sum_zero_target() {
        // A zero target is met by the empty combination before any pick.
        assert_eq!(combination_sum(&[2, 3], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_combination_sum2_classic() {
        let result = combination_sum2(&[10, 1, 2, 7, 6, 1, 5], 8);
        assert_eq!(
            result,
            vec![vec![1, 1, 6], vec![1, 2, 5], vec![1, 7], vec![2, 6]]
        );
    }

    #[test]
    fn test_combination_sum2_no_duplicate_lists() {
        let result = combination_sum2(&[2, 5, 2, 1, 2], 5);
        assert_eq!(result, vec![vec![1, 2, 2], vec![5]]);
    }

    #[test]
    fn test_combination_sum2_single_use() {
        // 3 cannot be reused, so target 6 has no answer here.
        assert!(combination_sum2(&[3, 2], 6).is_empty());
    }

    #[test]
    fn test_state_restored_after_search() {
        let mut space = CombinationSumSearch::new(&[2, 3, 6, 7], 7);
        engine::solve_all(&mut space);
        assert_eq!(space.remaining, 7);
        assert!(space.current.is_empty());
        assert!(space.picked.is_empty());

        let mut space2 = CombinationSum2Search::new(&[10, 1, 2, 7, 6, 1, 5], 8);
        engine::solve_all(&mut space2);
        assert_eq!(space2.remaining, 8);
        assert!(space2.current.is_empty());
        assert!(space2.picked.is_empty());
    }
}
