// RSA Errors

/// Errors raised by key generation, parameter checks and checked decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("Key generation failed: no public exponent in [2, {phi}) is coprime with phi(n)")]
    KeyGenerationFailed { phi: u32 },

    #[error("Key generation failed: e={e} has no inverse modulo phi(n)={phi}")]
    PrivateExponentNotFound { e: u32, phi: u32 },

    #[error("Modulus overflow: {p} * {q} does not fit in 32 bits")]
    ModulusOverflow { p: u32, q: u32 },

    #[error("Invalid key: modulus must be non-zero")]
    InvalidModulus,

    #[error("{0} is not a prime number")]
    NotPrime(u32),

    #[error("p and q must be distinct primes, both are {0}")]
    EqualPrimes(u32),

    #[error("Modulus {modulus} is too small: p * q must exceed 255")]
    ModulusTooSmall { modulus: u32 },

    #[error("Decrypted value {value} at index {index} is not a byte")]
    PlaintextOutOfRange { index: usize, value: u64 },

    #[error("Invalid UTF-8: {0}")]
    Utf8(String),
}

pub type Result<T> = std::result::Result<T, RsaError>;
