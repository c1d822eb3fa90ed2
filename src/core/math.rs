use crate::utils::error::{CheckError, Result};
use std::ops::Add;

/// Adds two numbers together.
/// Overflow behaves as the `Add` impl of `T` does.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// `add` for `i64` that reports overflow instead of panicking or wrapping.
pub fn checked_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or(CheckError::ArithmeticOverflow { a, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [i64; 9] = [0, 1, 2, -1, -5, 4, 42, -1_000_000, 1 << 40];

    #[test]
    fn test_add_basic() {
        assert_eq!(add(1, 2), 3);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-1, -5), -6);
    }

    #[test]
    fn test_add_zero() {
        assert_eq!(add(4, 0), 4);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_add_is_commutative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b), add(b, a), "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_zero_is_identity() {
        for &a in &SAMPLES {
            assert_eq!(add(a, 0), a);
        }
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(0.5_f64, 0.25), 0.75);
    }

    #[test]
    fn test_checked_add_matches_add() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(checked_add(a, b).unwrap(), add(a, b));
            }
        }
    }

    #[test]
    fn test_checked_add_overflow() {
        let err = checked_add(i64::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            CheckError::ArithmeticOverflow { a: i64::MAX, b: 1 }
        ));
        assert!(checked_add(i64::MIN, -1).is_err());
        assert_eq!(checked_add(i64::MAX, i64::MIN).unwrap(), -1);
    }
}
