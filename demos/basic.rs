//! Basic example of using the backtracking engine

use backtrack_core::engine;
use backtrack_core::{
    combination_sum, exist, generate_parenthesis, partition, permute, solve_n_queens, subsets,
    QueenSearch,
};

fn main() {
    // Enumerate the power set
    println!("Subsets of [1, 2, 3]:");
    for subset in subsets(&[1, 2, 3]) {
        println!("{subset:?}");
    }

    // Permutations
    let perms = permute(&[1, 2, 3]);
    println!("\n[1, 2, 3] has {} permutations", perms.len());

    // Combination sum with reuse
    println!("\nWays to pay 7 with coins [2, 3, 6, 7]:");
    for combo in combination_sum(&[2, 3, 6, 7], 7) {
        println!("{combo:?}");
    }

    // Balanced brackets
    println!("\nBalanced strings of 3 bracket pairs:");
    for s in generate_parenthesis(3) {
        println!("{s}");
    }

    // N-Queens, driving the engine directly to get the counters
    println!("\nSolving 6 queens...");
    let (boards, stats) = engine::solve_all_with_stats(&mut QueenSearch::new(6));
    println!(
        "{} solutions ({} nodes visited)",
        boards.len(),
        stats.nodes
    );
    if let Some(board) = boards.first() {
        println!("First solution:");
        for row in board {
            println!("{row}");
        }
    }

    // Word search
    let board: Vec<Vec<char>> = ["ABCE", "SFCS", "ADEE"]
        .iter()
        .map(|row| row.chars().collect())
        .collect();
    println!("\n\"ABCCED\" in the grid: {:?}", exist(&board, "ABCCED"));
    println!("\"ABCB\" in the grid: {:?}", exist(&board, "ABCB"));

    // Palindrome partitioning
    println!("\nPalindromic partitions of \"aab\":");
    for pieces in partition("aab") {
        println!("{pieces:?}");
    }

    // The classic count check
    println!("\n8 queens has {} solutions", solve_n_queens(8).len());
}
