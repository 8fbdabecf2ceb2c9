//! Generic depth-first backtracking engine.
//!
//! A problem plugs into the engine by implementing [`SearchSpace`]: it owns
//! the mutable partial solution plus whatever occupancy markers it needs, and
//! describes one step of the search through `verdict`, `choices`, `commit`
//! and `rollback`. The engine supplies the recursion, the deep copy of every
//! accepted solution, and the guarantee that each `commit` is undone by a
//! `rollback` on the same frame before control returns to the caller.

use serde::{Deserialize, Serialize};

/// How the engine should treat the current partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not a solution yet; keep extending.
    Continue,
    /// A complete solution; record a snapshot and stop descending.
    Solution,
    /// A complete solution that longer states may still extend; record a
    /// snapshot and keep branching (subset enumeration records every node).
    SolutionAndContinue,
    /// No solution is reachable from here; abandon the branch.
    Prune,
}

/// One problem instantiation driven by the engine.
///
/// The implementor owns the partial solution and its auxiliary markers
/// (used flags, visited grid, column/diagonal occupancy). Two contracts must
/// hold:
///
/// - `rollback(c)` restores exactly the state that `commit(c)` started from,
///   so sibling branches never observe each other's mutations and the state
///   is back in its initial configuration when the search returns.
/// - `snapshot` returns an independent copy; it must not alias the live
///   mutable state, or later rollbacks would corrupt recorded solutions.
pub trait SearchSpace {
    /// A single extension of the partial state.
    type Choice: Copy;
    /// A completed solution, owned independently of the search state.
    type Solution;

    /// Classify the current partial state (goal test and prune test).
    fn verdict(&self) -> Verdict;

    /// Deep-copy the current state as a finished solution.
    fn snapshot(&self) -> Self::Solution;

    /// Append every legal extension of the current state to `out`.
    ///
    /// `out` arrives empty. The order chosen here fixes the enumeration
    /// order of solutions (leftmost choice first).
    fn choices(&self, out: &mut Vec<Self::Choice>);

    /// Apply a choice, updating the state and any occupancy markers.
    fn commit(&mut self, choice: Self::Choice);

    /// Undo `commit`, restoring state and markers exactly.
    fn rollback(&mut self, choice: Self::Choice);
}

/// Deterministic counters accumulated over one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes of the choice tree visited (including the root).
    pub nodes: u64,
    /// Solutions recorded.
    pub solutions: u64,
    /// Branches abandoned by the prune test.
    pub pruned: u64,
}

/// Enumerate every solution reachable from the space's current state.
///
/// Depth-first, leftmost choice first; the result order is the discovery
/// order and is fully deterministic.
pub fn solve_all<S: SearchSpace>(space: &mut S) -> Vec<S::Solution> {
    solve_all_with_stats(space).0
}

/// Like [`solve_all`], also returning the engine counters.
pub fn solve_all_with_stats<S: SearchSpace>(space: &mut S) -> (Vec<S::Solution>, SearchStats) {
    let mut solutions = Vec::new();
    let mut stats = SearchStats::default();
    explore(space, &mut solutions, &mut stats, false);
    (solutions, stats)
}

/// Stop at the first solution found, or `None` if the space has none.
///
/// Rollbacks still run on the way out, so markers are restored even when the
/// search terminates early.
pub fn solve_first<S: SearchSpace>(space: &mut S) -> Option<S::Solution> {
    solve_first_with_stats(space).0
}

/// Like [`solve_first`], also returning the engine counters.
pub fn solve_first_with_stats<S: SearchSpace>(space: &mut S) -> (Option<S::Solution>, SearchStats) {
    let mut solutions = Vec::new();
    let mut stats = SearchStats::default();
    explore(space, &mut solutions, &mut stats, true);
    (solutions.pop(), stats)
}

/// Returns true when the search should unwind (first solution found in
/// stop-at-first mode).
fn explore<S: SearchSpace>(
    space: &mut S,
    solutions: &mut Vec<S::Solution>,
    stats: &mut SearchStats,
    stop_at_first: bool,
) -> bool {
    stats.nodes += 1;

    match space.verdict() {
        Verdict::Prune => {
            stats.pruned += 1;
            return false;
        }
        Verdict::Solution => {
            solutions.push(space.snapshot());
            stats.solutions += 1;
            return stop_at_first;
        }
        Verdict::SolutionAndContinue => {
            solutions.push(space.snapshot());
            stats.solutions += 1;
            if stop_at_first {
                return true;
            }
        }
        Verdict::Continue => {}
    }

    let mut branches = Vec::new();
    space.choices(&mut branches);
    for choice in branches {
        space.commit(choice);
        let done = explore(space, solutions, stats, stop_at_first);
        space.rollback(choice);
        if done {
            return true;
        }
    }
    false
}
