// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod arith;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod params;

pub use decrypt::{decrypt_sequence, decrypt_sequence_checked, decrypt_to_string, decrypt_unit};
pub use encrypt::{encrypt_byte, encrypt_sequence, encrypt_string};
pub use error::{Result, RsaError};
pub use keygen::{generate_keys, RsaKey, RsaKeyPair};
pub use params::validate_primes;

/// One encrypted byte; wide enough for every residue of a 32-bit modulus
pub type CipherUnit = u64;

/// Generate the key pair for primes p and q
///
/// Nothing is stored globally: the returned pair is passed to
/// [`encrypt`] and [`decrypt`] explicitly.
pub fn init(p: u32, q: u32) -> Result<RsaKeyPair> {
    generate_keys(p, q)
}

/// Encrypt a message byte by byte; same length as the input
pub fn encrypt(plaintext: &[u8], key: &RsaKey) -> Vec<CipherUnit> {
    encrypt_sequence(plaintext, key)
}

/// Decrypt cipher units to bytes; same length as the input
pub fn decrypt(ciphertext: &[CipherUnit], key: &RsaKey) -> Vec<u8> {
    decrypt_sequence(ciphertext, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_encrypt_decrypt() {
        let keypair = init(61, 53).unwrap();
        let message = b"The quick brown fox jumps over the lazy dog";

        let ciphertext = encrypt(message, &keypair.public_key);
        assert_eq!(ciphertext.len(), message.len());

        let decrypted = decrypt(&ciphertext, &keypair.private_key);
        assert_eq!(decrypted.as_slice(), message.as_slice());
    }

    #[test]
    fn test_init_deterministic() {
        assert_eq!(init(61, 53), init(61, 53));
        assert_eq!(init(65_521, 65_519), init(65_521, 65_519));
        assert_eq!(init(2, 3), init(2, 3));
    }

    #[test]
    fn test_init_failure() {
        assert!(init(2, 3).is_err());
    }

    #[test]
    fn test_keys_shared_across_threads() {
        let keypair = init(1009, 1013).unwrap();
        let handles: Vec<_> = (0..4u8)
            .map(|offset| {
                std::thread::spawn(move || {
                    let message: Vec<u8> = (0..64).map(|i| i * 4 + offset).collect();
                    let ciphertext = encrypt(&message, &keypair.public_key);
                    (message, decrypt(&ciphertext, &keypair.private_key))
                })
            })
            .collect();

        for handle in handles {
            let (message, decrypted) = handle.join().unwrap();
            assert_eq!(message, decrypted);
        }
    }
}
