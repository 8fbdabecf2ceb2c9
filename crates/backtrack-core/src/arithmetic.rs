//! Integer digit manipulation.

/// Reverse the decimal digits of `x`, keeping the sign.
///
/// Accumulates in `i64`; any result outside `i32` range yields `0`.
pub fn reverse(x: i32) -> i32 {
    let mut remaining = x as i64;
    let mut reversed: i64 = 0;
    while remaining != 0 {
        reversed = reversed * 10 + remaining % 10;
        remaining /= 10;
    }
    if reversed < i32::MIN as i64 || reversed > i32::MAX as i64 {
        0
    } else {
        reversed as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_and_negative() {
        assert_eq!(reverse(123), 321);
        assert_eq!(reverse(-123), -321);
    }

    #[test]
    fn test_trailing_zeros_drop() {
        assert_eq!(reverse(120), 21);
        assert_eq!(reverse(0), 0);
    }

    #[test]
    fn test_overflow_yields_zero() {
        assert_eq!(reverse(1_534_236_469), 0);
        assert_eq!(reverse(i32::MAX), 0);
        assert_eq!(reverse(i32::MIN), 0);
    }

    #[test]
    fn test_boundary_reversals_survive() {
        // 2_147_447_412 is a palindrome just under i32::MAX.
        assert_eq!(reverse(2_147_447_412), 2_147_447_412);
    }
}
