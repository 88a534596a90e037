//! Cryptography exercises
//!
//! Every case is deterministic: hashes use fixed inputs, password hashing is
//! checked through a hash/verify round trip, and random tokens are checked
//! by shape only.

use super::{case, fallible, typed, Category, ExerciseRegistry, RegistryResult};
use crate::crypto::{self, PasswordHasher};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct VigenereInput {
    text: String,
    key: String,
    #[serde(default)]
    decrypt: bool,
}

#[derive(Debug, Deserialize)]
struct PasswordCheck {
    password: String,
    attempt: String,
}

pub fn register_crypto(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    register_classical(registry)?;
    register_digests(registry)?;
    register_passwords(registry)?;
    Ok(())
}

fn register_classical(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "caesar_cipher",
        "Shift ASCII letters by a fixed amount, keeping case.",
        Category::Crypto,
        vec![
            case(json!(["Hello, World!", 3]), json!("Khoor, Zruog!")),
            case(json!(["abc", -1]), json!("zab")),
            case(json!(["xyz", 29]), json!("abc")),
            case(json!(["", 5]), json!("")),
            case(json!(["Rust 2021", 26]), json!("Rust 2021")),
        ],
        typed(|(text, shift): (String, i32)| crypto::caesar_encrypt(&text, shift)),
    )?;

    registry.register(
        "vigenere_cipher",
        "Polyalphabetic shift by a letter key; only letters consume the key.",
        Category::Crypto,
        vec![
            case(
                json!({"text": "ATTACKATDAWN", "key": "LEMON"}),
                json!({"Ok": "LXFOPVEFRNHR"}),
            ),
            case(
                json!({"text": "attack at dawn", "key": "lemon"}),
                json!({"Ok": "lxfopv ef rnhr"}),
            ),
            case(
                json!({"text": "LXFOPVEFRNHR", "key": "lemon", "decrypt": true}),
                json!({"Ok": "ATTACKATDAWN"}),
            ),
            case(
                json!({"text": "abc", "key": ""}),
                json!({"Err": "Invalid key: key must not be empty"}),
            ),
            case(
                json!({"text": "abc", "key": "k3y"}),
                json!({"Err": "Invalid key: key must be alphabetic, found '3'"}),
            ),
        ],
        typed(|input: VigenereInput| {
            let result = if input.decrypt {
                crypto::vigenere_decrypt(&input.text, &input.key)
            } else {
                crypto::vigenere_encrypt(&input.text, &input.key)
            };
            result.map_err(|e| e.to_string())
        }),
    )?;

    registry.register(
        "xor_cipher",
        "Repeating-key XOR, output as hex.",
        Category::Crypto,
        vec![
            case(json!(["abc", " "]), json!("414243")),
            case(json!(["hello", "k"]), json!("030e070704")),
            case(json!(["attack at dawn", "key"]), json!("0a110d0a06124b040d4b01181c0b")),
            case(json!(["", "key"]), json!("")),
            case(json!(["same", ""]), json!("73616d65")),
        ],
        typed(|(data, key): (String, String)| {
            hex::encode(crypto::xor_cipher(data.as_bytes(), key.as_bytes()))
        }),
    )?;

    Ok(())
}

fn register_digests(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "sha256",
        "SHA-256 digest of a UTF-8 string, as hex.",
        Category::Crypto,
        vec![
            case(
                json!(""),
                json!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
            ),
            case(
                json!("abc"),
                json!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
            ),
            case(
                json!("hello"),
                json!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"),
            ),
            case(
                json!("The quick brown fox jumps over the lazy dog"),
                json!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"),
            ),
            case(
                json!("katas"),
                json!("107b5a5cfea0d03cbed906124e0fb2523e946bcda51e910334ca4268515d1d37"),
            ),
        ],
        typed(|text: String| crypto::sha256_hex(text.as_bytes())),
    )?;

    registry.register(
        "hmac_sha256",
        "HMAC-SHA256 of [key, message], as hex.",
        Category::Crypto,
        vec![
            case(
                json!(["Jefe", "what do ya want for nothing?"]),
                json!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"),
            ),
            case(
                json!(["key", "The quick brown fox jumps over the lazy dog"]),
                json!("f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"),
            ),
            case(
                json!(["", ""]),
                json!("b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"),
            ),
            case(
                json!(["secret", "message"]),
                json!("8b5f48702995c1598c573db1e21866a9b825d4a794d169d7060a03605796360b"),
            ),
            case(
                json!(["k", ""]),
                json!("8bb990c40a7d61cb97597a942125025be50ac8beb74436e3735b98893a7f6620"),
            ),
        ],
        typed(|(key, message): (String, String)| {
            crypto::hmac_sha256_hex(key.as_bytes(), message.as_bytes())
        }),
    )?;

    registry.register(
        "hmac_verify",
        "Constant-time check of a hex HMAC-SHA256 tag: [key, message, tag].",
        Category::Crypto,
        vec![
            case(
                json!(["secret", "message", "8b5f48702995c1598c573db1e21866a9b825d4a794d169d7060a03605796360b"]),
                json!(true),
            ),
            case(
                json!(["secret", "messagf", "8b5f48702995c1598c573db1e21866a9b825d4a794d169d7060a03605796360b"]),
                json!(false),
            ),
            case(
                json!(["Secret", "message", "8b5f48702995c1598c573db1e21866a9b825d4a794d169d7060a03605796360b"]),
                json!(false),
            ),
            case(json!(["secret", "message", "8b5f4870"]), json!(false)),
            case(json!(["secret", "message", "not hex"]), json!(false)),
        ],
        typed(|(key, message, tag): (String, String, String)| {
            crypto::verify_hmac_sha256(key.as_bytes(), message.as_bytes(), &tag)
        }),
    )?;

    registry.register(
        "merkle_root",
        "Root of a SHA-256 Merkle tree over string leaves; null for no leaves.",
        Category::Crypto,
        vec![
            case(json!([]), json!(null)),
            case(
                json!(["a"]),
                json!("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"),
            ),
            case(
                json!(["a", "b"]),
                json!("e5a01fee14e0ed5c48714f22180f25ad8365b53f9779f79dc4a3d7e93963f94a"),
            ),
            case(
                json!(["a", "b", "c"]),
                json!("d31a37ef6ac14a2db1470c4316beb5592e6afd4465022339adafda76a18ffabe"),
            ),
            case(
                json!(["tx1", "tx2", "tx3", "tx4"]),
                json!("ea59a369466be42d1a4783f09ae0721a5a157d6dba9c4b053d407b5a4b9af145"),
            ),
        ],
        typed(|leaves: Vec<String>| {
            let leaves: Vec<&[u8]> = leaves.iter().map(|l| l.as_bytes()).collect();
            crypto::merkle_root(&leaves)
        }),
    )?;

    registry.register(
        "constant_time_compare",
        "Byte equality without early exit.",
        Category::Crypto,
        vec![
            case(json!(["token", "token"]), json!(true)),
            case(json!(["token", "tokem"]), json!(false)),
            case(json!(["token", "tokens"]), json!(false)),
            case(json!(["", ""]), json!(true)),
            case(json!(["a", ""]), json!(false)),
        ],
        typed(|(a, b): (String, String)| crypto::constant_time_eq(a.as_bytes(), b.as_bytes())),
    )?;

    Ok(())
}

fn register_passwords(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "argon2_password",
        "Hash a password with Argon2id, then verify an attempt against the PHC string.",
        Category::Crypto,
        vec![
            case(json!({"password": "hunter2", "attempt": "hunter2"}), json!(true)),
            case(json!({"password": "hunter2", "attempt": "hunter3"}), json!(false)),
            case(json!({"password": "hunter2", "attempt": "HUNTER2"}), json!(false)),
            case(json!({"password": "", "attempt": ""}), json!(true)),
            case(json!({"password": "pässwörd", "attempt": "pässwörd"}), json!(true)),
        ],
        fallible(|check: PasswordCheck| -> Result<bool, crypto::CryptoError> {
            // low cost keeps the catalog quick; production callers use new()
            let hasher = PasswordHasher::new().with_argon2_cost(1024, 1, 1)?;
            let phc = hasher.hash(&check.password)?;
            hasher.verify(&check.attempt, &phc)
        }),
    )?;

    registry.register(
        "pbkdf2_hash",
        "PBKDF2-HMAC-SHA256 storage string for [password, salt, iterations].",
        Category::Crypto,
        vec![
            case(
                json!(["password", "salt", 1]),
                json!({"Ok": "pbkdf2$1$c2FsdA==$Eg+2z/z4syxD5yJSVsT4N6hlSMkszDVICAWYfLcL4Xs="}),
            ),
            case(
                json!(["password", "salt", 2]),
                json!({"Ok": "pbkdf2$2$c2FsdA==$rk0Mla9rRtMtCt/5KPBt0CowP47zwlHf1uLYWpVHTEM="}),
            ),
            case(
                json!(["correct horse", "NaCl", 100]),
                json!({"Ok": "pbkdf2$100$TmFDbA==$NeoqbYq7133tGXeYtJ8BiS56Vy39IoV51nWmzhMhL40="}),
            ),
            case(
                json!(["", "pepper", 10]),
                json!({"Ok": "pbkdf2$10$cGVwcGVy$jgar3eTC4ttysiNlSqnDaMdkjtQvs5uu5oqDDq8jRdE="}),
            ),
            case(
                json!(["password", "salt", 0]),
                json!({"Err": "Invalid parameter: iterations must be > 0"}),
            ),
        ],
        typed(|(password, salt, iterations): (String, String, u32)| {
            PasswordHasher::new()
                .with_pbkdf2_iterations(iterations)
                .map(|h| h.hash_pbkdf2_with_salt(&password, salt.as_bytes()))
                .map_err(|e| e.to_string())
        }),
    )?;

    registry.register(
        "pbkdf2_verify",
        "Check [attempt, stored] against a PBKDF2 storage string.",
        Category::Crypto,
        vec![
            case(
                json!(["hunter2", "pbkdf2$1000$c2FsdHNhbHQ=$SGostCYuh4jIkZF3T30ZOll3DSwORihSR6ozq+eFeiA="]),
                json!({"Ok": true}),
            ),
            case(
                json!(["hunter3", "pbkdf2$1000$c2FsdHNhbHQ=$SGostCYuh4jIkZF3T30ZOll3DSwORihSR6ozq+eFeiA="]),
                json!({"Ok": false}),
            ),
            case(
                json!(["password", "pbkdf2$2$c2FsdA==$rk0Mla9rRtMtCt/5KPBt0CowP47zwlHf1uLYWpVHTEM="]),
                json!({"Ok": true}),
            ),
            case(
                json!(["password", "bcrypt$2$c2FsdA==$rk0M"]),
                json!({"Err": "Malformed password hash: unknown scheme"}),
            ),
            case(
                json!(["password", "pbkdf2$2$c2FsdA=="]),
                json!({"Err": "Malformed password hash: expected 4 '$'-separated fields"}),
            ),
        ],
        typed(|(attempt, stored): (String, String)| {
            PasswordHasher::new()
                .verify_pbkdf2(&attempt, &stored)
                .map_err(|e| e.to_string())
        }),
    )?;

    registry.register(
        "random_token",
        "Hex token of n random bytes; the output is its length.",
        Category::Crypto,
        vec![
            case(json!(1), json!({"Ok": 2})),
            case(json!(16), json!({"Ok": 32})),
            case(json!(32), json!({"Ok": 64})),
            case(
                json!(0),
                json!({"Err": "Invalid parameter: token length must be 1..=1024 bytes, got 0"}),
            ),
            case(
                json!(2048),
                json!({"Err": "Invalid parameter: token length must be 1..=1024 bytes, got 2048"}),
            ),
        ],
        typed(|bytes: usize| {
            crypto::random_token(bytes)
                .map(|token| token.len())
                .map_err(|e| e.to_string())
        }),
    )?;

    Ok(())
}
