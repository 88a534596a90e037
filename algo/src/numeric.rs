//! Number theory and integer sequences
//!
//! Sequences that overflow `u64` return `None` instead of wrapping.

/// Greatest common divisor (Euclid).
///
/// # Test Cases
/// - gcd(48, 18) = 6
/// - gcd(17, 13) = 1
/// - gcd(0, 5) = 5
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple; `None` if it does not fit in `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Trial division over 6k +/- 1.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All primes `<= limit` (sieve of Eratosthenes).
///
/// # Test Cases
/// - sieve(30) = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
/// - sieve(1) = []
pub fn sieve(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }
    let mut composite = vec![false; limit + 1];
    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            let mut j = i * i;
            while j <= limit {
                composite[j] = true;
                j += i;
            }
        }
        i += 1;
    }
    (2..=limit).filter(|&n| !composite[n]).collect()
}

/// `base^exp mod modulus` by square-and-multiply. A modulus of 0 yields `None`.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    if modulus == 1 {
        return Some(0);
    }
    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut b = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    Some(result as u64)
}

/// The n-th Fibonacci number with F(0) = 0; `None` past F(93).
pub fn fibonacci(n: u32) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// n! ; `None` past 20!.
pub fn factorial(n: u32) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Whether the decimal digits read the same both ways. Negative numbers never do.
pub fn is_palindrome_number(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let original = n as u64;
    let mut reversed = 0u64;
    let mut rest = original;
    while rest > 0 {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    reversed == original
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(!is_prime(91));
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn test_sieve() {
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(sieve(1).is_empty());
        assert_eq!(sieve(2), vec![2]);
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000), Some(24));
        assert_eq!(mod_pow(3, 0, 7), Some(1));
        assert_eq!(mod_pow(5, 3, 1), Some(0));
        assert_eq!(mod_pow(5, 3, 0), None);
        assert_eq!(mod_pow(u64::MAX, 2, u64::MAX - 1), Some(1));
    }

    #[test]
    fn test_checked_sequences() {
        assert_eq!(fibonacci(0), Some(0));
        assert_eq!(fibonacci(10), Some(55));
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_sum(9875), 29);
        assert_eq!(digit_sum(0), 0);
        assert!(is_palindrome_number(121));
        assert!(!is_palindrome_number(-121));
        assert!(!is_palindrome_number(10));
        assert!(is_palindrome_number(0));
    }
}
