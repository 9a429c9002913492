//! # core.rs
//!
//! Numeric helper algorithms backing the `fact` and `gcd` built-ins.

use num_traits::float::Float;

/// Computes `n!` on 64-bit signed integers.
///
/// Follows the recursive definition `n! = 1` for `n <= 1`, otherwise
/// `n * (n - 1)!`. Negative inputs fall into the base case and yield `1`.
///
/// Multiplication wraps on overflow (two's complement), so `21!` and above
/// are not the mathematical factorial. From `66!` on the product contains at
/// least 64 factors of two and wraps to `0`, which lets the loop stop early.
///
/// # Examples
/// ```
/// use mathfn::factorial;
///
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(-3), 1);
/// ```
pub fn factorial(n: i64) -> i64 {
    let mut acc: i64 = 1;
    for k in 2..=n {
        acc = acc.wrapping_mul(k);
        if acc == 0 {
            break;
        }
    }
    acc
}

/// Euclidean greatest common divisor on floating-point operands.
///
/// Repeatedly replaces `(x, y)` with `(y, x % y)` until `y` is zero and
/// returns `x`. `%` is the truncated remainder (C `fmod`), so integral inputs
/// behave like the integer GCD while fractional inputs give a "GCD-like"
/// value. A NaN remainder ends the loop and is returned as-is.
///
/// # Examples
/// ```
/// use mathfn::gcd;
///
/// assert_eq!(gcd(12.0, 8.0), 4.0);
/// assert_eq!(gcd(0.0, 5.0), 5.0);
/// ```
pub fn gcd<T: Float>(mut x: T, mut y: T) -> T {
    while y != T::zero() {
        if y.is_nan() {
            return y;
        }
        let r = x % y;
        x = y;
        y = r;
    }
    x
}
