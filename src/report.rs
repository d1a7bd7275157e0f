use anyhow::Result;
use std::fmt;
use tracing::debug;

use crate::numbers::{
    divisor::{self, FactorPair},
    prime, Number,
};

pub const PROMPT: &str = "두 정수 입력>> ";
pub const PRIME_LABEL: &str = "소수: ";

/// Everything printed for one input pair: primes up to the smaller input,
/// factor pairs, gcd and lcm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<T> {
    pub primes: Vec<T>,
    pub factor_pairs: Vec<FactorPair<T>>,
    pub gcd: T,
    pub lcm: T,
}

impl<T: Number> Report<T> {
    pub fn new(num1: T, num2: T) -> Result<Self> {
        let primes = prime::primes_up_to_min(num1, num2);
        let gcd = divisor::gcd(num1, num2);
        let lcm = divisor::lcm(num1, num2, gcd)?;
        let factor_pairs = divisor::factor_pairs(num1, num2, gcd);
        debug!("[Report]: gcd={} lcm={} for ({}, {})", gcd, lcm, num1, num2);

        Ok(Self {
            primes,
            factor_pairs,
            gcd,
            lcm,
        })
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(PRIME_LABEL)?;
        write_joined(f, &self.primes, " ")?;
        writeln!(f)?;

        write_joined(f, &self.factor_pairs, ": ")?;
        writeln!(f)?;

        writeln!(f, "GCD={}    LCM={}", self.gcd, self.lcm)
    }
}
