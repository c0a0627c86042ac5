//! Integer square root.

/// Returns `floor(sqrt(n))` using Newton's method.
///
/// The iteration starts above the root and decreases monotonically, so it
/// terminates for every `u128` input without overflow.
///
/// # Examples
///
/// ```
/// use hydra_pairs::math::isqrt;
///
/// assert_eq!(isqrt(1_000_000_000_000_000_000), 1_000_000_000);
/// assert_eq!(isqrt(15), 3);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [0u128, 1, 1, 1, 2, 2, 2, 2, 2, 3];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u128), *want, "isqrt({n})");
        }
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(1_000_000_000_000_000_000), 1_000_000_000);
        assert_eq!(isqrt(u128::from(u64::MAX) * u128::from(u64::MAX)), u128::from(u64::MAX));
    }

    #[test]
    fn just_below_square() {
        assert_eq!(isqrt(1_000_000_000_000_000_000 - 1), 999_999_999);
    }

    #[test]
    fn max_input() {
        assert_eq!(isqrt(u128::MAX), u128::from(u64::MAX));
    }
}
