//! Command line front end for the backtracking exercises.
//!
//! One subcommand per library operation; `--json` switches the output to
//! pretty-printed JSON and `--stats` appends the engine counters for the
//! search-based subcommands.

use anyhow::Result;
use backtrack_core::engine::{self, SearchStats};
use backtrack_core::{
    add_two_numbers, length_of_longest_substring, reverse, CombinationSum2Search,
    CombinationSumSearch, ListNode, ParenthesisSearch, PartitionSearch, PermutationSearch,
    QueenSearch, SubsetSearch, WordSearch,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt::Debug;

#[derive(Parser)]
#[command(name = "backtrack", about = "Classic backtracking exercises", version)]
struct Cli {
    /// Print results as pretty JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Print engine counters after search subcommands.
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All subsets of the given distinct integers.
    Subsets {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// All permutations of the given distinct integers.
    Permute {
        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },
    /// All combinations summing to the target, candidates reusable.
    CombinationSum {
        #[arg(long)]
        target: i32,
        candidates: Vec<i32>,
    },
    /// All combinations summing to the target, each position used once,
    /// duplicate solutions suppressed.
    CombinationSum2 {
        #[arg(long)]
        target: i32,
        candidates: Vec<i32>,
    },
    /// All balanced parenthesis strings of n pairs.
    Parentheses { n: usize },
    /// All non-attacking placements of n queens.
    NQueens { n: usize },
    /// Trace a word through a character grid; pass one argument per row.
    WordSearch {
        #[arg(long)]
        word: String,
        rows: Vec<String>,
    },
    /// All palindromic partitions of a string.
    Partition { s: String },
    /// Length of the longest substring without repeating characters.
    LongestSubstring { s: String },
    /// Reverse the decimal digits of an integer (0 on overflow).
    Reverse {
        #[arg(allow_negative_numbers = true)]
        x: i32,
    },
    /// Add two numbers given as comma-separated digit lists, least
    /// significant digit first.
    Add {
        #[arg(long, value_delimiter = ',')]
        a: Vec<i32>,
        #[arg(long, value_delimiter = ',')]
        b: Vec<i32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Subsets { nums } => {
            let (solutions, stats) = engine::solve_all_with_stats(&mut SubsetSearch::new(nums));
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::Permute { nums } => {
            let (solutions, stats) =
                engine::solve_all_with_stats(&mut PermutationSearch::new(nums));
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::CombinationSum { target, candidates } => {
            let mut space = CombinationSumSearch::new(candidates, *target);
            let (solutions, stats) = engine::solve_all_with_stats(&mut space);
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::CombinationSum2 { target, candidates } => {
            let mut space = CombinationSum2Search::new(candidates, *target);
            let (solutions, stats) = engine::solve_all_with_stats(&mut space);
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::Parentheses { n } => {
            let (solutions, stats) = engine::solve_all_with_stats(&mut ParenthesisSearch::new(*n));
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::NQueens { n } => {
            let (solutions, stats) = engine::solve_all_with_stats(&mut QueenSearch::new(*n));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&solutions)?);
            } else {
                for board in &solutions {
                    for row in board {
                        println!("{row}");
                    }
                    println!();
                }
                println!("{} solutions", solutions.len());
            }
            emit_stats(&cli, stats);
        }
        Command::WordSearch { word, rows } => {
            let board = parse_grid(rows);
            let mut space = WordSearch::new(&board, word)?;
            let (path, stats) = engine::solve_first_with_stats(&mut space);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                match path {
                    Some(cells) => println!("found: {cells:?}"),
                    None => println!("not found"),
                }
            }
            emit_stats(&cli, stats);
        }
        Command::Partition { s } => {
            let (solutions, stats) = engine::solve_all_with_stats(&mut PartitionSearch::new(s));
            emit_solutions(&cli, &solutions)?;
            emit_stats(&cli, stats);
        }
        Command::LongestSubstring { s } => {
            emit_value(&cli, &length_of_longest_substring(s))?;
        }
        Command::Reverse { x } => {
            emit_value(&cli, &reverse(*x))?;
        }
        Command::Add { a, b } => {
            let sum = add_two_numbers(ListNode::from_digits(a), ListNode::from_digits(b));
            emit_value(&cli, &ListNode::to_digits(&sum))?;
        }
    }

    Ok(())
}

fn emit_solutions<T: Serialize + Debug>(cli: &Cli, solutions: &[T]) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(solutions)?);
    } else {
        for solution in solutions {
            println!("{solution:?}");
        }
        println!("{} solutions", solutions.len());
    }
    Ok(())
}

fn emit_value<T: Serialize + Debug>(cli: &Cli, value: &T) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value:?}");
    }
    Ok(())
}

fn emit_stats(cli: &Cli, stats: SearchStats) {
    if cli.stats {
        println!(
            "nodes={} solutions={} pruned={}",
            stats.nodes, stats.solutions, stats.pruned
        );
    }
}

fn parse_grid(rows: &[String]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.chars().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        let rows = vec!["AB".to_string(), "CD".to_string()];
        assert_eq!(parse_grid(&rows), vec![vec!['A', 'B'], vec!['C', 'D']]);
    }

    #[test]
    fn test_cli_parses_word_search() {
        let cli = Cli::parse_from(["backtrack", "word-search", "--word", "AB", "AB", "CD"]);
        match cli.command {
            Command::WordSearch { word, rows } => {
                assert_eq!(word, "AB");
                assert_eq!(rows, vec!["AB", "CD"]);
            }
            _ => panic!("expected word-search"),
        }
    }
}
