//! Basic Cryptography Demos
//!
//! Classical ciphers next to the real primitives that replace them:
//!
//! - **Classical**: Caesar, Vigenere, repeating-key XOR
//! - **Hashing**: SHA-256 (ring), Merkle roots (sha2)
//! - **MACs**: HMAC-SHA256 with constant-time verification
//! - **Password storage**: Argon2id (PHC strings) and PBKDF2-HMAC-SHA256
//! - **Randomness**: hex tokens from the system CSPRNG
//!
//! The classical ciphers are teaching material only; none of them offers any
//! confidentiality.

use argon2::password_hash::{Error as PhcError, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier as _, Version};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ring::rand::{SecureRandom, SystemRandom};
use ring::{digest, hmac, pbkdf2};
use sha2::{Digest, Sha256};
use std::num::NonZeroU32;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Default PBKDF2 work factor
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length for generated password hashes
pub const SALT_LEN: usize = 16;

const PBKDF2_SCHEME: &str = "pbkdf2";
const PBKDF2_OUTPUT_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("System random generator failed")]
    Random,
}

pub type CryptoResult<T> = Result<T, CryptoError>;

// ============================================================================
// Classical ciphers
// ============================================================================

fn shift_letter(c: char, shift: i32) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base) as i32;
    (base + ((offset + shift.rem_euclid(26)) % 26) as u8) as char
}

/// Shift every ASCII letter by `shift` places, keeping case.
///
/// # Test Cases
/// - caesar_encrypt("Hello, World!", 3) = "Khoor, Zruog!"
/// - caesar_encrypt("abc", -1) = "zab"
pub fn caesar_encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

pub fn caesar_decrypt(text: &str, shift: i32) -> String {
    caesar_encrypt(text, -(shift.rem_euclid(26)))
}

fn vigenere_shifts(key: &str) -> CryptoResult<Vec<i32>> {
    if key.is_empty() {
        return Err(CryptoError::InvalidKey("key must not be empty".into()));
    }
    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok((c.to_ascii_lowercase() as u8 - b'a') as i32)
            } else {
                Err(CryptoError::InvalidKey(format!(
                    "key must be alphabetic, found '{}'",
                    c
                )))
            }
        })
        .collect()
}

fn vigenere(text: &str, key: &str, direction: i32) -> CryptoResult<String> {
    let shifts = vigenere_shifts(key)?;
    let mut next = 0;
    Ok(text
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            // only letters consume key positions
            let shift = shifts[next % shifts.len()];
            next += 1;
            shift_letter(c, direction * shift)
        })
        .collect())
}

/// Vigenere cipher over ASCII letters.
///
/// # Test Cases
/// - vigenere_encrypt("ATTACKATDAWN", "LEMON") = "LXFOPVEFRNHR"
/// - vigenere_encrypt("x", "") = InvalidKey
pub fn vigenere_encrypt(text: &str, key: &str) -> CryptoResult<String> {
    vigenere(text, key, 1)
}

pub fn vigenere_decrypt(text: &str, key: &str) -> CryptoResult<String> {
    vigenere(text, key, -1)
}

/// Repeating-key XOR. Applying it twice with the same key restores the
/// input; an empty key leaves the data unchanged.
pub fn xor_cipher(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

// ============================================================================
// Hashing and MACs
// ============================================================================

/// SHA-256 digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(digest::digest(&digest::SHA256, data))
}

pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hex::encode(hmac::sign(&key, message))
}

/// Check a hex HMAC-SHA256 tag in constant time. Tags that are not valid hex
/// never verify.
pub fn verify_hmac_sha256(key: &[u8], message: &[u8], tag_hex: &str) -> bool {
    let Ok(tag) = hex::decode(tag_hex) else {
        return false;
    };
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::verify(&key, message, &tag).is_ok()
}

/// Merkle root of `leaves` as hex. Leaves are hashed first; a level with an
/// odd number of nodes pairs its last node with itself.
pub fn merkle_root(leaves: &[&[u8]]) -> Option<String> {
    if leaves.is_empty() {
        return None;
    }
    let mut level: Vec<[u8; 32]> = leaves.iter().map(|l| Sha256::digest(l).into()).collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).unwrap_or(&pair[0]);
                let mut hasher = Sha256::new();
                hasher.update(pair[0]);
                hasher.update(right);
                hasher.finalize().into()
            })
            .collect();
    }
    Some(hex::encode(level[0]))
}

/// Constant-time equality; slices of different length are unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

// ============================================================================
// Randomness
// ============================================================================

fn random_bytes(len: usize) -> CryptoResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    SystemRandom::new()
        .fill(&mut buf)
        .map_err(|_| CryptoError::Random)?;
    Ok(buf)
}

/// `bytes` random bytes from the system CSPRNG, hex encoded.
pub fn random_token(bytes: usize) -> CryptoResult<String> {
    if bytes == 0 || bytes > 1024 {
        return Err(CryptoError::InvalidParameter(format!(
            "token length must be 1..=1024 bytes, got {}",
            bytes
        )));
    }
    Ok(hex::encode(random_bytes(bytes)?))
}

// ============================================================================
// Password storage
// ============================================================================

/// Salted, slow password hashing.
///
/// Argon2id hashes are self-describing PHC strings
/// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`). PBKDF2 hashes use
/// `pbkdf2$<iterations>$<salt b64>$<hash b64>`.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Params,
    pbkdf2_iterations: NonZeroU32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Argon2id with the crate's recommended parameters and
    /// [`DEFAULT_PBKDF2_ITERATIONS`] rounds of PBKDF2.
    pub fn new() -> Self {
        Self {
            argon2: Params::default(),
            pbkdf2_iterations: NonZeroU32::new(DEFAULT_PBKDF2_ITERATIONS).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Override the Argon2id cost: memory in KiB, passes, lanes.
    pub fn with_argon2_cost(mut self, memory_kib: u32, passes: u32, lanes: u32) -> CryptoResult<Self> {
        self.argon2 = Params::new(memory_kib, passes, lanes, None)
            .map_err(|e| CryptoError::InvalidParameter(e.to_string()))?;
        Ok(self)
    }

    pub fn with_pbkdf2_iterations(mut self, iterations: u32) -> CryptoResult<Self> {
        self.pbkdf2_iterations = NonZeroU32::new(iterations)
            .ok_or_else(|| CryptoError::InvalidParameter("iterations must be > 0".into()))?;
        Ok(self)
    }

    pub fn pbkdf2_iterations(&self) -> u32 {
        self.pbkdf2_iterations.get()
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.argon2.clone())
    }

    /// Argon2id hash with a fresh random salt.
    pub fn hash(&self, password: &str) -> CryptoResult<String> {
        let salt = SaltString::encode_b64(&random_bytes(SALT_LEN)?)
            .map_err(|e| CryptoError::Hashing(e.to_string()))?;
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CryptoError::Hashing(e.to_string()))
    }

    /// Verify `password` against an Argon2 PHC string. The cost parameters
    /// are read from the string.
    ///
    /// Only a wrong password yields `Ok(false)`; a string naming another
    /// algorithm or carrying invalid parameters is `MalformedHash`.
    pub fn verify(&self, password: &str, phc: &str) -> CryptoResult<bool> {
        let parsed = PasswordHash::new(phc).map_err(|e| CryptoError::MalformedHash(e.to_string()))?;
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(CryptoError::MalformedHash(e.to_string())),
        }
    }

    /// PBKDF2-HMAC-SHA256 hash with a fresh random salt.
    pub fn hash_pbkdf2(&self, password: &str) -> CryptoResult<String> {
        let salt = random_bytes(SALT_LEN)?;
        Ok(self.hash_pbkdf2_with_salt(password, &salt))
    }

    /// PBKDF2-HMAC-SHA256 hash with a caller-chosen salt.
    pub fn hash_pbkdf2_with_salt(&self, password: &str, salt: &[u8]) -> String {
        let mut out = [0u8; PBKDF2_OUTPUT_LEN];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            self.pbkdf2_iterations,
            salt,
            password.as_bytes(),
            &mut out,
        );
        format!(
            "{}${}${}${}",
            PBKDF2_SCHEME,
            self.pbkdf2_iterations,
            BASE64.encode(salt),
            BASE64.encode(out)
        )
    }

    /// Verify `password` against a stored PBKDF2 hash. The iteration count
    /// comes from the stored string, not from this hasher.
    pub fn verify_pbkdf2(&self, password: &str, stored: &str) -> CryptoResult<bool> {
        let malformed = |why: &str| CryptoError::MalformedHash(why.to_string());

        let parts: Vec<&str> = stored.split('$').collect();
        let [scheme, iterations, salt, hash] = parts.as_slice() else {
            return Err(malformed("expected 4 '$'-separated fields"));
        };
        if *scheme != PBKDF2_SCHEME {
            return Err(malformed("unknown scheme"));
        }
        let iterations = iterations
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| malformed("bad iteration count"))?;
        let salt = BASE64.decode(salt).map_err(|_| malformed("salt is not base64"))?;
        let hash = BASE64.decode(hash).map_err(|_| malformed("hash is not base64"))?;

        Ok(pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            password.as_bytes(),
            &hash,
        )
        .is_ok())
    }
}
