//! Textbook RSA over 32-bit moduli.
//!
//! Keys are derived from two caller-supplied primes; messages are encrypted
//! one byte at a time with modular exponentiation. There is no padding and
//! no constant-time arithmetic, so this is for teaching only.
//!
//! ```
//! let keypair = simple_rsa::rsa::init(61, 53).unwrap();
//! let ciphertext = simple_rsa::rsa::encrypt(b"hi", &keypair.public_key);
//! let plaintext = simple_rsa::rsa::decrypt(&ciphertext, &keypair.private_key);
//! assert_eq!(plaintext, b"hi");
//! ```

pub mod demo;
pub mod rsa;
pub mod util;
