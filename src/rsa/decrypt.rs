// RSA Decryption Implementation
// Recovers plaintext bytes from cipher units: m = c^d mod n

use super::arith::mod_pow;
use super::error::{Result, RsaError};
use super::keygen::RsaKey;
use super::CipherUnit;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Decrypt a single cipher unit to a byte
///
/// Only the low-order byte of c^d mod n is kept. With a matching key and
/// n > 255 the value already fits, so truncation changes nothing.
pub fn decrypt_unit(c: CipherUnit, key: &RsaKey) -> u8 {
    mod_pow(c, key.exponent(), key.modulus()) as u8
}

/// Decrypt every cipher unit independently; output is index-aligned with the input
#[cfg(not(feature = "parallel"))]
pub fn decrypt_sequence(ciphertext: &[CipherUnit], key: &RsaKey) -> Vec<u8> {
    ciphertext.iter().map(|&c| decrypt_unit(c, key)).collect()
}

/// Decrypt every cipher unit independently; output is index-aligned with the input
#[cfg(feature = "parallel")]
pub fn decrypt_sequence(ciphertext: &[CipherUnit], key: &RsaKey) -> Vec<u8> {
    ciphertext.par_iter().map(|&c| decrypt_unit(c, key)).collect()
}

/// Decrypt without truncation, failing on the first value that is not a byte
pub fn decrypt_sequence_checked(ciphertext: &[CipherUnit], key: &RsaKey) -> Result<Vec<u8>> {
    ciphertext
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            let value = mod_pow(c, key.exponent(), key.modulus());
            u8::try_from(value).map_err(|_| RsaError::PlaintextOutOfRange { index, value })
        })
        .collect()
}

/// Decrypt cipher units to a string
pub fn decrypt_to_string(ciphertext: &[CipherUnit], key: &RsaKey) -> Result<String> {
    let plaintext = decrypt_sequence(ciphertext, key);
    String::from_utf8(plaintext).map_err(|e| RsaError::Utf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::encrypt::{encrypt_sequence, encrypt_string};
    use crate::rsa::keygen::generate_keys;

    #[test]
    fn test_decrypt_unit() {
        // 2790^2753 mod 3233 = 65
        let key = RsaKey::new(3233, 2753).unwrap();
        assert_eq!(decrypt_unit(2790, &key), 65);
    }

    #[test]
    fn test_decrypt_sequence() {
        let keypair = generate_keys(61, 53).unwrap();
        let message = b"Hello, RSA!";

        let ciphertext = keypair.public_key.encrypt(message);
        let decrypted = decrypt_sequence(&ciphertext, &keypair.private_key);

        assert_eq!(message.as_slice(), decrypted.as_slice());
    }

    #[test]
    fn test_decrypt_string() {
        let keypair = generate_keys(1009, 1013).unwrap();
        let message = "Test message for RSA decryption ✓";

        let ciphertext = encrypt_string(message, &keypair.public_key);
        let decrypted = decrypt_to_string(&ciphertext, &keypair.private_key).unwrap();

        assert_eq!(message, decrypted);
    }

    #[test]
    fn test_decrypt_string_invalid_utf8() {
        let keypair = generate_keys(61, 53).unwrap();
        let ciphertext = encrypt_sequence(&[0xff, 0xfe], &keypair.public_key);

        let result = decrypt_to_string(&ciphertext, &keypair.private_key);
        assert!(matches!(result, Err(RsaError::Utf8(_))));
    }

    #[test]
    fn test_decrypt_truncates_to_low_byte() {
        // 300^1 mod 3233 = 300, low byte 44
        let key = RsaKey::new(3233, 1).unwrap();
        assert_eq!(decrypt_unit(300, &key), 44);
        assert_eq!(
            decrypt_sequence_checked(&[65, 300], &key),
            Err(RsaError::PlaintextOutOfRange { index: 1, value: 300 })
        );
    }

    #[test]
    fn test_decrypt_checked_round_trip() {
        let keypair = generate_keys(61, 53).unwrap();
        let message: Vec<u8> = (0..=u8::MAX).collect();

        let ciphertext = encrypt_sequence(&message, &keypair.public_key);
        assert_eq!(decrypt_sequence_checked(&ciphertext, &keypair.private_key).unwrap(), message);
    }

    #[test]
    fn test_decrypt_sequence_length() {
        let keypair = generate_keys(61, 53).unwrap();
        let ciphertext = vec![0u64; 17];
        assert_eq!(decrypt_sequence(&ciphertext, &keypair.private_key).len(), 17);
        assert!(keypair.private_key.decrypt(&[]).is_empty());
    }

    #[test]
    fn test_decrypt_wrong_key() {
        let keypair1 = generate_keys(61, 53).unwrap();
        let keypair2 = generate_keys(1009, 1013).unwrap();
        let message = b"Test message";

        let ciphertext = keypair1.public_key.encrypt(message);
        let decrypted = keypair2.private_key.decrypt(&ciphertext);
        assert_ne!(message.as_slice(), decrypted.as_slice());
    }
}
