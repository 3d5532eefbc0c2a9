// Demonstration harness
// Encrypts a message with the public key, decrypts with the private key and compares

use rand::Rng;

use crate::rsa::params::primes_in_range;
use crate::rsa::{decrypt, encrypt, init, validate_primes, CipherUnit, Result, RsaKeyPair};

pub const DEFAULT_MESSAGE: &str = concat!(
    "This is a simple implementation of RSA algorithm which can ",
    "accept up to 4 digit prime numbers to generate public and ",
    "private keys, and then encrypt this message using the public ",
    "key and decrypts it using private key. It then compares the decrypted",
    "message against this message and checks for correctness."
);

/// Range the random prime pair is drawn from
const RANDOM_PRIME_RANGE: (u32, u32) = (17, 4096);

/// Configuration for a demonstration run
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub message: Vec<u8>,
    pub show_ciphertext: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.as_bytes().to_vec(),
            show_ciphertext: false,
        }
    }
}

impl DemoConfig {
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_show_ciphertext(mut self, show: bool) -> Self {
        self.show_ciphertext = show;
        self
    }
}

/// Outcome of one demonstration run
#[derive(Clone, Debug)]
pub struct DemoReport {
    pub keypair: RsaKeyPair,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<CipherUnit>,
    pub decrypted: Vec<u8>,
}

impl DemoReport {
    /// Whether the decrypted bytes match the original message
    pub fn passed(&self) -> bool {
        self.plaintext == self.decrypted
    }
}

/// Validate p and q, generate keys and round-trip the configured message
pub fn run_demo(p: u32, q: u32, config: &DemoConfig) -> Result<DemoReport> {
    validate_primes(p, q)?;
    let keypair = init(p, q)?;

    let ciphertext = encrypt(&config.message, &keypair.public_key);
    let decrypted = decrypt(&ciphertext, &keypair.private_key);

    Ok(DemoReport {
        keypair,
        plaintext: config.message.clone(),
        ciphertext,
        decrypted,
    })
}

/// Pick a prime pair accepted by `validate_primes`
///
/// Not a secure prime source: the candidates are small and public.
pub fn random_prime_pair<R: Rng + ?Sized>(rng: &mut R) -> (u32, u32) {
    let (lower, upper) = RANDOM_PRIME_RANGE;
    let primes = primes_in_range(lower, upper);
    loop {
        let p = primes[rng.gen_range(0..primes.len())];
        let q = primes[rng.gen_range(0..primes.len())];
        if validate_primes(p, q).is_ok() {
            return (p, q);
        }
    }
}

/// Hex rendering of cipher units, space separated
pub fn format_cipher_units(ciphertext: &[CipherUnit]) -> String {
    ciphertext
        .iter()
        .map(|c| hex::encode(c.to_be_bytes()))
        .collect::<Vec<_>>()
        .join(" ")
}
