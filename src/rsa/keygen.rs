// RSA Key Generation
// Derives the public/private key pair from two prime factors

use super::arith::{gcd, mod_inverse};
use super::decrypt::decrypt_sequence;
use super::encrypt::encrypt_sequence;
use super::error::{Result, RsaError};
use super::CipherUnit;

/// RSA key: a modulus and an exponent
///
/// The modulus is never zero, so every transform over a key is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RsaKey {
    modulus: u32,
    exponent: u32,
}

impl RsaKey {
    pub fn new(modulus: u32, exponent: u32) -> Result<Self> {
        if modulus == 0 {
            return Err(RsaError::InvalidModulus);
        }
        Ok(Self { modulus, exponent })
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Encrypt a message byte by byte with this key
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<CipherUnit> {
        encrypt_sequence(plaintext, self)
    }

    /// Decrypt cipher units back to bytes with this key
    pub fn decrypt(&self, ciphertext: &[CipherUnit]) -> Vec<u8> {
        decrypt_sequence(ciphertext, self)
    }
}

/// RSA Key Pair (both keys share the modulus)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaKey,
    pub private_key: RsaKey,
}

impl RsaKeyPair {
    #[inline]
    pub fn modulus(&self) -> u32 {
        self.public_key.modulus
    }
}

/// Generate an RSA key pair from two primes p and q
///
/// Primality of p and q is not checked here; see `params::validate_primes`.
///
/// - e is the smallest integer in [2, φ(n)) coprime with φ(n)
/// - d is the smallest non-negative integer with (d * e) mod φ(n) == 1
///
/// Fails with `KeyGenerationFailed` when no such e exists, which for
/// prime inputs only happens when φ(n) <= 2.
pub fn generate_keys(p: u32, q: u32) -> Result<RsaKeyPair> {
    // Step 1: Compute n = p * q
    let n = p.checked_mul(q).ok_or(RsaError::ModulusOverflow { p, q })?;

    // Step 2: Compute φ(n) = (p-1)(q-1); zero factors give an empty search
    let phi = match (p.checked_sub(1), q.checked_sub(1)) {
        (Some(p1), Some(q1)) => p1 * q1,
        _ => 0,
    };

    // Step 3: Smallest e >= 2 coprime with φ(n)
    let e = public_exponent(phi)?;

    // Step 4: d = e^(-1) mod φ(n), bounded by construction
    let d = mod_inverse(e, phi).ok_or(RsaError::PrivateExponentNotFound { e, phi })?;

    Ok(RsaKeyPair {
        public_key: RsaKey::new(n, e)?,
        private_key: RsaKey::new(n, d)?,
    })
}

fn public_exponent(phi: u32) -> Result<u32> {
    (2..phi)
        .find(|e| gcd(*e, phi) == 1)
        .ok_or(RsaError::KeyGenerationFailed { phi })
}
