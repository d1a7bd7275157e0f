/*
numbers holds the arithmetic core: primality, prime enumeration, gcd, lcm and factor pairs.
Every function is generic over `Number`, so the same code serves any signed primitive integer.
Arithmetic mirrors native fixed-width integers: products wrap instead of panicking,
and remainders follow truncating division (the sign follows the dividend).
*/

use num_integer::{Integer, Roots};
use num_traits::{CheckedRem, PrimInt, Signed, WrappingMul};
use std::fmt;

pub mod divisor;
pub mod prime;

pub trait Number: PrimInt + Signed + Integer + Roots + CheckedRem + WrappingMul + fmt::Display {}

impl<T> Number for T where T: PrimInt + Signed + Integer + Roots + CheckedRem + WrappingMul + fmt::Display {}

/// Counts upward from `start` to `end` inclusive, stopping cleanly at `T::max_value()`.
pub(crate) fn inclusive_range<T: Number>(start: T, end: T) -> impl Iterator<Item = T> {
    std::iter::successors(Some(start), |i| i.checked_add(&T::one())).take_while(move |i| *i <= end)
}

pub(crate) fn two<T: Number>() -> T {
    T::one() + T::one()
}
