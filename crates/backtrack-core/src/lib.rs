//! Classic exhaustive-search exercises on a shared backtracking engine.
//!
//! The [`engine`] module holds the generic depth-first search: a problem
//! implements [`SearchSpace`] by describing its partial state, its legal
//! choices, its goal and prune tests, and the commit/rollback pair that
//! keeps every occupancy marker in step with the live state. Each remaining
//! module instantiates the engine for one textbook problem and exposes it as
//! a plain function.
//!
//! ```
//! use backtrack_core::{generate_parenthesis, solve_n_queens, subsets};
//!
//! assert_eq!(subsets(&[1, 2]).len(), 4);
//! assert_eq!(generate_parenthesis(3).len(), 5);
//! assert_eq!(solve_n_queens(4).len(), 2);
//! ```
//!
//! Everything is synchronous, deterministic and allocation-only: no I/O, no
//! randomness, no shared state between calls.

pub mod arithmetic;
pub mod combination_sum;
pub mod engine;
pub mod linked_list;
pub mod nqueens;
pub mod parentheses;
pub mod partition;
pub mod permutations;
pub mod strings;
pub mod subsets;
pub mod word_search;

pub use arithmetic::reverse;
pub use combination_sum::{
    combination_sum, combination_sum2, CombinationSum2Search, CombinationSumSearch,
};
pub use engine::{
    solve_all, solve_all_with_stats, solve_first, solve_first_with_stats, SearchSpace, SearchStats,
    Verdict,
};
pub use linked_list::{add_two_numbers, ListNode};
pub use nqueens::{solve_n_queens, QueenSearch};
pub use parentheses::{generate_parenthesis, ParenthesisSearch};
pub use partition::{partition, PartitionSearch};
pub use permutations::{permute, PermutationSearch};
pub use strings::length_of_longest_substring;
pub use subsets::{subsets, SubsetSearch};
pub use word_search::{exist, find_word, WordSearch};

use thiserror::Error;

/// Invalid-argument signal for operations whose input shape can be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A 2D grid whose rows differ in length.
    #[error("grid row {row} has length {len}, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
}
