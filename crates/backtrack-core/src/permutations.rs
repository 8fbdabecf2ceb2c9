//! Permutation enumeration with a used-flag occupancy marker.

use crate::engine::{self, SearchSpace, Verdict};

/// Search space for permutations of a slice of distinct integers.
///
/// The `used` flags are the occupancy marker: an index is a legal choice
/// exactly when its flag is clear, and the flag is set on commit and cleared
/// on rollback so it always mirrors the live partial permutation.
pub struct PermutationSearch<'a> {
    nums: &'a [i32],
    current: Vec<i32>,
    used: Vec<bool>,
}

impl<'a> PermutationSearch<'a> {
    /// Create a space positioned at the empty prefix.
    pub fn new(nums: &'a [i32]) -> Self {
        Self {
            nums,
            current: Vec::new(),
            used: vec![false; nums.len()],
        }
    }

    /// True once the search has returned and all markers are reset.
    pub fn is_pristine(&self) -> bool {
        self.current.is_empty() && self.used.iter().all(|&u| !u)
    }
}

impl SearchSpace for PermutationSearch<'_> {
    type Choice = usize;
    type Solution = Vec<i32>;

    fn verdict(&self) -> Verdict {
        if self.current.len() == self.nums.len() {
            Verdict::Solution
        } else {
            Verdict::Continue
        }
    }

    fn snapshot(&self) -> Vec<i32> {
        self.current.clone()
    }

    fn choices(&self, out: &mut Vec<usize>) {
        out.extend((0..self.nums.len()).filter(|&i| !self.used[i]));
    }

    fn commit(&mut self, index: usize) {
        self.used[index] = true;
        self.current.push(self.nums[index]);
    }

    fn rollback(&mut self, index: usize) {
        self.current.pop();
        self.used[index] = false;
    }
}

/// Return all permutations of a slice of distinct integers.
///
/// A slice of length `k` yields `k!` orderings, enumerated with the
/// smallest-index choice first at every depth.
pub fn permute(nums: &[i32]) -> Vec<Vec<i32>> {
    engine::solve_all(&mut PermutationSearch::new(nums))
}
