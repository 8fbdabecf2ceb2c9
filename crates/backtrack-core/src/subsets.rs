//! Subset (power set) enumeration.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for subset enumeration over a slice of distinct integers.
///
/// Every node of the choice tree is itself a valid subset, so the verdict is
/// always [`Verdict::SolutionAndContinue`]; the index lower bound strictly
/// increases, which keeps elements in input order and prevents revisits.
pub struct SubsetSearch<'a> {
    nums: &'a [i32],
    current: Vec<i32>,
    /// Indices of the committed choices, innermost last. The next legal
    /// index is always one past the most recent pick.
    picked: Vec<usize>,
}

impl<'a> SubsetSearch<'a> {
    /// Create a space positioned at the empty subset.
    pub fn new(nums: &'a [i32]) -> Self {
        Self {
            nums,
            current: Vec::new(),
            picked: Vec::new(),
        }
    }

    fn lower_bound(&self) -> usize {
        self.picked.last().map_or(0, |&i| i + 1)
    }

    /// True once the search has returned and all markers are reset.
    pub fn is_pristine(&self) -> bool {
        self.current.is_empty() && self.picked.is_empty()
    }
}

impl SearchSpace for SubsetSearch<'_> {
    type Choice = usize;
    type Solution = Vec<i32>;

    fn verdict(&self) -> Verdict {
        Verdict::SolutionAndContinue
    }

    fn snapshot(&self) -> Vec<i32> {
        self.current.clone()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        out.extend(self.lower_bound()..self.nums.len());
    }

    fn commit(&mut self, index: usize) {
        self.current.push(self.nums[index]);
        self.picked.push(index);
    }

    fn rollback(&mut self, _index: usize) {
        self.current.pop();
        self.picked.pop();
    }
}

/// Return all subsets of a slice of distinct integers.
///
/// The empty subset comes first; within each subset, elements keep their
/// input order. A slice of length `k` yields `2^k` subsets.
pub fn subsets(nums: &[i32]) -> Vec<Vec<i32>> {
    engine::solve_all(&mut SubsetSearch::new(nums))
}
