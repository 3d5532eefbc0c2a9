// RSA Encryption Implementation
// Byte-wise textbook RSA: every plaintext byte becomes one cipher unit

use super::arith::mod_pow;
use super::keygen::RsaKey;
use super::CipherUnit;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encrypt a single byte: c = m^e mod n
pub fn encrypt_byte(m: u8, key: &RsaKey) -> CipherUnit {
    mod_pow(u64::from(m), key.exponent(), key.modulus())
}

/// Encrypt every byte independently; output is index-aligned with the input
#[cfg(not(feature = "parallel"))]
pub fn encrypt_sequence(plaintext: &[u8], key: &RsaKey) -> Vec<CipherUnit> {
    plaintext.iter().map(|&m| encrypt_byte(m, key)).collect()
}

/// Encrypt every byte independently; output is index-aligned with the input
#[cfg(feature = "parallel")]
pub fn encrypt_sequence(plaintext: &[u8], key: &RsaKey) -> Vec<CipherUnit> {
    plaintext.par_iter().map(|&m| encrypt_byte(m, key)).collect()
}

/// Encrypt a string using its UTF-8 bytes
pub fn encrypt_string(plaintext: &str, key: &RsaKey) -> Vec<CipherUnit> {
    encrypt_sequence(plaintext.as_bytes(), key)
}
