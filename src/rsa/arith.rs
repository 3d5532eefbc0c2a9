// RSA Integer Arithmetic
// Fixed-width helpers for 32-bit moduli: gcd, modular inverse, modular exponentiation

use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor
/// gcd(0, 0) is 0
pub fn gcd(a: u32, b: u32) -> u32 {
    a.gcd(&b)
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while !r.is_zero() {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    (old_r, old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m
/// The result is the smallest non-negative d with (d * a) mod m == 1.
/// Returns None if the inverse doesn't exist (including m <= 1)
pub fn mod_inverse(a: u32, m: u32) -> Option<u32> {
    if m <= 1 {
        return None;
    }

    let (g, x, _) = extended_gcd(i64::from(a), i64::from(m));
    if !g.is_one() {
        return None;
    }

    // x lies in (-m, m), so the reduced value fits back into u32
    u32::try_from(x.rem_euclid(i64::from(m))).ok()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply; every product stays below 2^64 since modulus < 2^32.
/// The modulus must be non-zero, which `RsaKey` guarantees.
pub fn mod_pow(base: u64, exp: u32, modulus: u32) -> u64 {
    let modulus = u64::from(modulus);
    if modulus.is_one() {
        return u64::zero();
    }

    let mut result = u64::one();
    let mut base = base % modulus;
    let mut exp = exp;

    while !exp.is_zero() {
        if exp.is_odd() {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }

    result
}

/// Deterministic primality test by trial division over odd candidates up to sqrt(n)
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n = u64::from(n);
    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}
