// RSA Parameter Checks
// Preconditions key generation relies on but does not enforce

use super::arith::is_prime;
use super::error::{Result, RsaError};

/// Smallest modulus for which byte-wise encryption is injective
///
/// The modulus must also be squarefree: p and q have to be distinct, since
/// φ(p²) = p(p - 1) and not (p - 1)², so keys derived from p == q do not
/// round-trip.
pub const MIN_MODULUS: u32 = 256;

/// Check that p and q are distinct primes, and that n = p * q fits in 32 bits and exceeds 255
///
/// Returns the modulus on success.
pub fn validate_primes(p: u32, q: u32) -> Result<u32> {
    for factor in [p, q] {
        if !is_prime(factor) {
            return Err(RsaError::NotPrime(factor));
        }
    }
    if p == q {
        return Err(RsaError::EqualPrimes(p));
    }

    let modulus = p.checked_mul(q).ok_or(RsaError::ModulusOverflow { p, q })?;
    if modulus < MIN_MODULUS {
        return Err(RsaError::ModulusTooSmall { modulus });
    }

    Ok(modulus)
}

/// All primes in [lower, upper)
pub fn primes_in_range(lower: u32, upper: u32) -> Vec<u32> {
    (lower..upper).filter(|n| is_prime(*n)).collect()
}
