//! Secure-coding exercises

use super::{case, typed, Category, ExerciseRegistry, RegistryResult};
use crate::secure;
use serde_json::json;

pub fn register_secure(registry: &mut ExerciseRegistry) -> RegistryResult<()> {
    registry.register(
        "safe_relative_path",
        "Reject absolute paths, drive prefixes, NUL bytes and '..' components.",
        Category::Secure,
        vec![
            case(json!("uploads/avatar.png"), json!(true)),
            case(json!("../etc/passwd"), json!(false)),
            case(json!("/etc/passwd"), json!(false)),
            case(json!("docs\\..\\..\\secret"), json!(false)),
            case(json!("C:\\Windows\\system32"), json!(false)),
        ],
        typed(|path: String| secure::is_safe_relative_path(&path)),
    )?;

    registry.register(
        "escape_html",
        "Encode &, <, >, \" and ' for HTML output.",
        Category::Secure,
        vec![
            case(
                json!("<script>alert(1)</script>"),
                json!("&lt;script&gt;alert(1)&lt;/script&gt;"),
            ),
            case(json!("Tom & Jerry"), json!("Tom &amp; Jerry")),
            case(json!("\"quoted\" 'single'"), json!("&quot;quoted&quot; &#x27;single&#x27;")),
            case(json!("plain text"), json!("plain text")),
            case(json!(""), json!("")),
        ],
        typed(|input: String| secure::escape_html(&input)),
    )?;

    registry.register(
        "valid_email",
        "Conservative email address syntax check.",
        Category::Secure,
        vec![
            case(json!("alice@example.com"), json!(true)),
            case(json!("first.last+tag@mail.example.org"), json!(true)),
            case(json!("alice@example"), json!(false)),
            case(json!("a..b@example.com"), json!(false)),
            case(json!("no-at-sign.com"), json!(false)),
        ],
        typed(|email: String| secure::is_valid_email(&email)),
    )?;

    registry.register(
        "strong_password",
        "At least 8 characters with upper, lower, digit and symbol.",
        Category::Secure,
        vec![
            case(json!("Tr0ub4dor&3"), json!(true)),
            case(json!("Sh0rt!"), json!(false)),
            case(json!("alllowercase1!"), json!(false)),
            case(json!("NoDigitsHere!"), json!(false)),
            case(json!("NoSymbols123"), json!(false)),
        ],
        typed(|password: String| secure::is_strong_password(&password)),
    )?;

    registry.register(
        "parse_bounded_int",
        "Parse [input, min, max] as an integer within an inclusive range.",
        Category::Secure,
        vec![
            case(json!([" 42 ", 0, 100]), json!({"Ok": 42})),
            case(json!(["-5", -10, 10]), json!({"Ok": -5})),
            case(json!(["101", 0, 100]), json!({"Err": "101 is outside 0..=100"})),
            case(json!(["4x", 0, 100]), json!({"Err": "'4x' is not an integer"})),
            case(json!(["", 0, 100]), json!({"Err": "Input is empty"})),
        ],
        typed(|(input, min, max): (String, i64, i64)| {
            secure::parse_bounded_int(&input, min, max).map_err(|e| e.to_string())
        }),
    )?;

    registry.register(
        "sanitize_filename",
        "Reduce an uploaded file name to [A-Za-z0-9._-].",
        Category::Secure,
        vec![
            case(json!("report 2024.pdf"), json!("report_2024.pdf")),
            case(json!("../../etc/passwd"), json!("etc_passwd")),
            case(json!(".bashrc"), json!("bashrc")),
            case(json!("..."), json!("unnamed")),
            case(json!("résumé.doc"), json!("r_sum_.doc")),
        ],
        typed(|name: String| secure::sanitize_filename(&name)),
    )?;

    registry.register(
        "mask_card_number",
        "Luhn-check a card number and mask all but the last four digits.",
        Category::Secure,
        vec![
            case(json!("4111 1111 1111 1111"), json!({"Ok": "************1111"})),
            case(json!("378282246310005"), json!({"Ok": "***********0005"})),
            case(json!("4111111111111112"), json!({"Err": "Checksum mismatch"})),
            case(json!("4111-abcd"), json!({"Err": "Unexpected character 'a'"})),
            case(json!("1234"), json!({"Err": "Invalid length 4"})),
        ],
        typed(|number: String| secure::mask_card_number(&number).map_err(|e| e.to_string())),
    )?;

    Ok(())
}
