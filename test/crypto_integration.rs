//! Integration tests for the cryptography and secure-coding exercises
//!
//! Known-answer vectors come from FIPS 180-2 (SHA-256), RFC 4231 (HMAC) and
//! RFC 7914 section 11 (PBKDF2-HMAC-SHA256).

use katas::crypto::{
    caesar_decrypt, caesar_encrypt, constant_time_eq, hmac_sha256_hex, merkle_root, random_token,
    sha256_hex, verify_hmac_sha256, vigenere_decrypt, vigenere_encrypt, xor_cipher,
};
use katas::secure::{escape_html, is_safe_relative_path, mask_card_number, sanitize_filename};
use katas::{CryptoError, PasswordHasher};

// === SHA-256 ===

#[test]
fn test_sha256_known_vectors() {
    assert_eq!(
        sha256_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
    assert_eq!(
        sha256_hex(&vec![b'a'; 1_000_000]),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// === HMAC ===

#[test]
fn test_hmac_rfc4231_case_1() {
    let key = [0x0bu8; 20];
    let tag = hmac_sha256_hex(&key, b"Hi There");
    assert_eq!(
        tag,
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
    assert!(verify_hmac_sha256(&key, b"Hi There", &tag));
    assert!(!verify_hmac_sha256(&key[..19], b"Hi There", &tag));
}

#[test]
fn test_merkle_root_changes_with_any_leaf() {
    let base = merkle_root(&[b"tx1".as_slice(), b"tx2", b"tx3", b"tx4"]).unwrap();
    let tampered = merkle_root(&[b"tx1".as_slice(), b"tx2", b"tx3", b"tx5"]).unwrap();
    let reordered = merkle_root(&[b"tx2".as_slice(), b"tx1", b"tx3", b"tx4"]).unwrap();
    assert_ne!(base, tampered);
    assert_ne!(base, reordered);
}

// === Classical Ciphers ===

#[test]
fn test_classical_ciphers_invert() {
    let text = "The Quick Brown Fox, 1999!";
    for shift in -30..30 {
        assert_eq!(caesar_decrypt(&caesar_encrypt(text, shift), shift), text);
    }
    let secret = vigenere_encrypt(text, "Kryptos").unwrap();
    assert_ne!(secret, text);
    assert_eq!(vigenere_decrypt(&secret, "Kryptos").unwrap(), text);
    assert_eq!(xor_cipher(&xor_cipher(text.as_bytes(), b"k3y"), b"k3y"), text.as_bytes());
}

// === Password Storage ===

#[test]
fn test_pbkdf2_rfc7914_vector() {
    // RFC 7914 section 11: P="passwd", S="salt", c=1, dkLen=64; first 32 bytes
    let hasher = PasswordHasher::new().with_pbkdf2_iterations(1).unwrap();
    let stored = hasher.hash_pbkdf2_with_salt("passwd", b"salt");
    assert_eq!(
        stored,
        "pbkdf2$1$c2FsdA==$VawEblbjCJ/sFpHCJUS2BflBhSFt3gRl5oudV8INrLw="
    );
}

#[test]
fn test_password_hashes_are_salted() {
    let hasher = PasswordHasher::new()
        .with_argon2_cost(1024, 1, 1)
        .unwrap()
        .with_pbkdf2_iterations(1_000)
        .unwrap();

    let a = hasher.hash("same password").unwrap();
    let b = hasher.hash("same password").unwrap();
    assert_ne!(a, b);
    assert!(hasher.verify("same password", &a).unwrap());
    assert!(hasher.verify("same password", &b).unwrap());

    let p = hasher.hash_pbkdf2("same password").unwrap();
    let q = hasher.hash_pbkdf2("same password").unwrap();
    assert_ne!(p, q);
    assert!(hasher.verify_pbkdf2("same password", &p).unwrap());
    assert!(!hasher.verify_pbkdf2("other password", &q).unwrap());
}

#[test]
fn test_verify_uses_stored_iterations() {
    let slow = PasswordHasher::new().with_pbkdf2_iterations(50).unwrap();
    let fast = PasswordHasher::new().with_pbkdf2_iterations(1).unwrap();
    let stored = slow.hash_pbkdf2_with_salt("pw", b"pepper");
    assert!(fast.verify_pbkdf2("pw", &stored).unwrap());
}

#[test]
fn test_malformed_hashes_are_errors() {
    let hasher = PasswordHasher::new();
    assert!(matches!(
        hasher.verify_pbkdf2("pw", "pbkdf2$x$YQ==$YQ=="),
        Err(CryptoError::MalformedHash(_))
    ));
    assert!(matches!(
        hasher.verify_pbkdf2("pw", "pbkdf2$1$%%%$YQ=="),
        Err(CryptoError::MalformedHash(_))
    ));
    assert!(matches!(
        hasher.verify("pw", "not-a-phc-string"),
        Err(CryptoError::MalformedHash(_))
    ));
}

#[test]
fn test_random_tokens_are_hex_and_distinct() {
    let tokens: Vec<String> = (0..16).map(|_| random_token(24).unwrap()).collect();
    for t in &tokens {
        assert_eq!(t.len(), 48);
        assert!(t.chars().all(|c| c.is_ascii_hexdigit()));
    }
    let mut unique = tokens.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), tokens.len());
    assert!(constant_time_eq(tokens[0].as_bytes(), tokens[0].as_bytes()));
}

// === Secure Coding ===

#[test]
fn test_sanitized_filenames_are_safe_paths() {
    for name in ["../../etc/shadow", "/abs/path", "C:\\boot.ini", "..", "a\0b", "ok.txt"] {
        let clean = sanitize_filename(name);
        assert!(is_safe_relative_path(&clean), "{:?} -> {:?}", name, clean);
        assert!(!clean.contains('/'));
    }
}

#[test]
fn test_escaped_html_has_no_markup() {
    let escaped = escape_html("<img src=x onerror=\"alert('xss')\">");
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('"'));
    assert!(!escaped.contains('\''));
}

#[test]
fn test_mask_card_numbers() {
    for (number, masked) in [
        ("6011 1111 1111 1117", "************1117"),
        ("4012-8888-8888-1881", "************1881"),
        ("378282246310005", "***********0005"),
    ] {
        assert_eq!(mask_card_number(number).unwrap(), masked);
    }
}
