use anyhow::{Error, Result};
use std::fmt;
use tracing::trace;

use super::{inclusive_range, two, Number};

/// A common divisor together with the quotients of both inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorPair<T> {
    pub divisor: T,
    pub first: T,
    pub second: T,
}

impl<T: Number> FactorPair<T> {
    pub fn new(divisor: T, num1: T, num2: T) -> Self {
        Self {
            divisor,
            first: num1 / divisor,
            second: num2 / divisor,
        }
    }
}

impl<T: fmt::Display> fmt::Display for FactorPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.divisor, self.first, self.second)
    }
}

/// Iterative Euclid. The result keeps the sign truncating remainders leave behind,
/// and `gcd(0, 0)` is 0.
pub fn gcd<T: Number>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        // MIN % -1 is the only remainder that overflows; its value is 0
        let remainder = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = remainder;
    }
    a
}

/// `(a * b) / gcd` with a wrapping product. `gcd` is trusted as given.
pub fn lcm<T: Number>(a: T, b: T, gcd: T) -> Result<T> {
    if gcd.is_zero() {
        return Err(Error::msg(format!(
            "[Divisor]: LCM of {} and {} is undefined for a zero GCD",
            a, b
        )));
    }

    let product = a.wrapping_mul(&b);
    // MIN / -1 wraps back to MIN
    Ok(product.checked_div(&gcd).unwrap_or(product))
}

/// `(1, num1, num2)` followed by every `i` in `2..=gcd` dividing all three values.
pub fn factor_pairs<T: Number>(num1: T, num2: T, gcd: T) -> Vec<FactorPair<T>> {
    let mut pairs = vec![FactorPair {
        divisor: T::one(),
        first: num1,
        second: num2,
    }];

    for i in inclusive_range(two(), gcd) {
        if gcd.is_multiple_of(&i) && num1.is_multiple_of(&i) && num2.is_multiple_of(&i) {
            pairs.push(FactorPair::new(i, num1, num2));
        }
    }

    trace!("[Divisor]: {} factor pairs for gcd {}", pairs.len(), gcd);
    pairs
}
