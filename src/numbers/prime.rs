use tracing::trace;

use super::{inclusive_range, two, Number};

/// Trial division by odd candidates up to `sqrt(n)`.
pub fn is_prime<T: Number>(n: T) -> bool {
    if n <= T::one() {
        return false;
    }
    if n == two() {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let limit = n.sqrt();
    let mut i = two::<T>() + T::one();
    while i <= limit {
        if n.is_multiple_of(&i) {
            return false;
        }
        i = i + two();
    }
    true
}

/// Ascending primes in `[2, bound]`. Empty when `bound < 2`.
pub fn primes_up_to<T: Number>(bound: T) -> impl Iterator<Item = T> {
    inclusive_range(two(), bound).filter(|&i| is_prime(i))
}

pub fn primes_up_to_min<T: Number>(num1: T, num2: T) -> Vec<T> {
    let bound = num1.min(num2);
    let primes: Vec<T> = primes_up_to(bound).collect();
    trace!("[Prime]: {} primes up to {}", primes.len(), bound);
    primes
}
