//! Sliding-window string scans.

use std::collections::HashMap;

/// Length (in `char`s) of the longest substring without repeating characters.
///
/// Single pass with a last-seen map: when the window's right end hits a
/// character already inside the window, the left end jumps past that
/// character's previous position.
pub fn length_of_longest_substring(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut best = 0;
    let mut start = 0;

    for (end, c) in s.chars().enumerate() {
        if let Some(&seen) = last_seen.get(&c) {
            if seen >= start {
                start = seen + 1;
            }
        }
        last_seen.insert(c, end);
        best = best.max(end - start + 1);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_cases() {
        assert_eq!(length_of_longest_substring("abcabcbb"), 3);
        assert_eq!(length_of_longest_substring("bbbbb"), 1);
        assert_eq!(length_of_longest_substring("pwwkew"), 3);
    }

    #[test]
    fn test_empty_and_distinct() {
        assert_eq!(length_of_longest_substring(""), 0);
        assert_eq!(length_of_longest_substring("abcdef"), 6);
    }

    #[test]
    fn test_window_restarts_inside_previous_window() {
        // "abba": after the second 'b' the window is "a", then "ba".
        assert_eq!(length_of_longest_substring("abba"), 2);
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(length_of_longest_substring("日本語日本"), 3);
    }
}
