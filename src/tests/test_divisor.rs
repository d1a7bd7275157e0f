use crate::numbers::divisor::{factor_pairs, gcd, lcm, FactorPair};
use rand::Rng;

#[test]
pub fn test_gcd_known_values() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(7, 5), 1);
    assert_eq!(gcd(17, 17), 17);
    assert_eq!(gcd(0, 0), 0);
}

#[test]
pub fn test_gcd_single_zero() {
    assert_eq!(gcd(9, 0), 9);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(lcm(9, 0, 9).unwrap(), 0);
    assert_eq!(lcm(0, 9, 9).unwrap(), 0);
}

#[test]
pub fn test_gcd_truncating_sign() {
    assert_eq!(gcd(-12, 18), 6);
    assert_eq!(gcd(12, -18), -6);
    assert_eq!(gcd(-12, -18), -6);
}

#[test]
pub fn test_gcd_min_by_minus_one() {
    assert_eq!(gcd(i32::MIN, -1), -1);
}

#[test]
pub fn test_gcd_properties() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: i32 = rng.gen_range(-100_000..100_000);
        let b: i32 = rng.gen_range(1..100_000);
        assert_eq!(gcd(a, b), gcd(b, a % b));
        assert_eq!(gcd(a.abs(), b), gcd(b, a.abs()));
        let g = gcd(a, b);
        assert_eq!(a % g, 0);
        assert_eq!(b % g, 0);
    }
}

#[test]
pub fn test_lcm_known_values() {
    assert_eq!(lcm(12, 18, 6).unwrap(), 36);
    assert_eq!(lcm(7, 5, 1).unwrap(), 35);
    assert_eq!(lcm(4, 6, gcd(4, 6)).unwrap(), 12);
}

#[test]
pub fn test_lcm_zero_gcd() {
    assert!(lcm(0, 0, 0).is_err());
}

#[test]
pub fn test_lcm_wraps() {
    let g = gcd(i32::MAX, 2);
    assert_eq!(g, 1);
    assert_eq!(lcm(i32::MAX, 2, g).unwrap(), i32::MAX.wrapping_mul(2));
    assert_eq!(lcm(i32::MIN, 1, -1).unwrap(), i32::MIN);
}

#[test]
pub fn test_lcm_gcd_product() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: i32 = rng.gen_range(1..40_000);
        let b: i32 = rng.gen_range(1..40_000);
        let g = gcd(a, b);
        let l = lcm(a, b, g).unwrap();
        assert_eq!(i64::from(l) * i64::from(g), i64::from(a) * i64::from(b));
    }
}

#[test]
pub fn test_factor_pairs() {
    let pairs = factor_pairs(12, 18, 6);
    let expected = vec![
        FactorPair { divisor: 1, first: 12, second: 18 },
        FactorPair { divisor: 2, first: 6, second: 9 },
        FactorPair { divisor: 3, first: 4, second: 6 },
        FactorPair { divisor: 6, first: 2, second: 3 },
    ];
    assert_eq!(pairs, expected);
    assert_eq!(format!("{}", pairs[1]), "(2, 6, 9)");
}

#[test]
pub fn test_factor_pairs_small_gcd() {
    assert_eq!(
        factor_pairs(7, 5, 1),
        vec![FactorPair { divisor: 1, first: 7, second: 5 }]
    );
    // negative gcd leaves an empty divisor range
    assert_eq!(factor_pairs(12, -18, -6).len(), 1);
}

#[test]
pub fn test_factor_pairs_single_zero() {
    let divisors: Vec<i32> = factor_pairs(9, 0, 9).iter().map(|p| p.divisor).collect();
    assert_eq!(divisors, vec![1, 3, 9]);
}
