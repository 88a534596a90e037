//! Toy secure-coding examples
//!
//! Input validation and output encoding helpers of the kind every web handler
//! needs. Each function is self-contained and rejects by default: anything
//! it does not positively recognise as safe is refused.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_%+-]+(\.[A-Za-z0-9_%+-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

/// Longest address accepted by [`is_valid_email`]
pub const MAX_EMAIL_LEN: usize = 254;

/// Longest name produced by [`sanitize_filename`]
pub const MAX_FILENAME_LEN: usize = 255;

/// Minimum length for [`is_strong_password`]
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input is empty")]
    Empty,

    #[error("'{0}' is not an integer")]
    NotANumber(String),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Invalid range {min}..={max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Unexpected character '{0}'")]
    InvalidCharacter(char),

    #[error("Invalid length {0}")]
    InvalidLength(usize),

    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Whether `path` stays inside the directory it is joined to.
///
/// Rejects empty and absolute paths, Windows drive prefixes, NUL bytes and
/// any `..` component. Both `/` and `\` count as separators.
pub fn is_safe_relative_path(path: &str) -> bool {
    if path.is_empty() || path.contains('\0') {
        return false;
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return false;
    }
    !path.split(['/', '\\']).any(|component| component == "..")
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && EMAIL_REGEX.is_match(email)
}

/// At least [`MIN_PASSWORD_LEN`] characters with an uppercase letter, a
/// lowercase letter, a digit and a symbol.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

/// Parse an integer and check it against an inclusive range.
///
/// # Test Cases
/// - parse_bounded_int(" 42 ", 0, 100) = Ok(42)
/// - parse_bounded_int("101", 0, 100) = OutOfRange
/// - parse_bounded_int("4x", 0, 100) = NotANumber
pub fn parse_bounded_int(input: &str, min: i64, max: i64) -> ValidationResult<i64> {
    if min > max {
        return Err(ValidationError::InvalidRange { min, max });
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// Reduce an uploaded file name to `[A-Za-z0-9._-]`.
///
/// Other characters (separators included) become `_`, leading dots and
/// underscores are dropped so the result is never hidden or relative, and an
/// empty result becomes `"unnamed"`.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = replaced.trim_start_matches(['.', '_']);
    if trimmed.is_empty() {
        return "unnamed".to_string();
    }
    trimmed.chars().take(MAX_FILENAME_LEN).collect()
}

fn luhn_valid(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Validate a card number (12 to 19 digits, Luhn checksum; spaces and dashes
/// allowed) and mask all but the last four digits.
pub fn mask_card_number(input: &str) -> ValidationResult<String> {
    let mut digits = Vec::with_capacity(19);
    for c in input.chars() {
        match c {
            ' ' | '-' => continue,
            _ => digits.push(c.to_digit(10).ok_or(ValidationError::InvalidCharacter(c))?),
        }
    }
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !(12..=19).contains(&digits.len()) {
        return Err(ValidationError::InvalidLength(digits.len()));
    }
    if !luhn_valid(&digits) {
        return Err(ValidationError::ChecksumMismatch);
    }

    let visible = digits.len() - 4;
    let mut masked = "*".repeat(visible);
    masked.extend(
        digits[visible..]
            .iter()
            .filter_map(|&d| char::from_digit(d, 10)),
    );
    Ok(masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_relative_path() {
        assert!(is_safe_relative_path("uploads/avatar.png"));
        assert!(is_safe_relative_path("a/./b"));
        assert!(is_safe_relative_path("..hidden"));
        assert!(!is_safe_relative_path("../etc/passwd"));
        assert!(!is_safe_relative_path("a/../../b"));
        assert!(!is_safe_relative_path("a\\..\\b"));
        assert!(!is_safe_relative_path("/etc/passwd"));
        assert!(!is_safe_relative_path("C:\\Windows"));
        assert!(!is_safe_relative_path("file\0.txt"));
        assert!(!is_safe_relative_path(""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("a..b@example.com"));
        assert!(!is_valid_email(".a@example.com"));
        assert!(!is_valid_email("alice@-example.com"));
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Tr0ub4dor&3"));
        assert!(!is_strong_password("Sh0rt!"));
        assert!(!is_strong_password("alllowercase1!"));
        assert!(!is_strong_password("NoDigitsHere!"));
        assert!(!is_strong_password("NoSymbols123"));
    }

    #[test]
    fn test_parse_bounded_int() {
        assert_eq!(parse_bounded_int(" 42 ", 0, 100), Ok(42));
        assert_eq!(parse_bounded_int("-5", -10, 10), Ok(-5));
        assert_eq!(
            parse_bounded_int("101", 0, 100),
            Err(ValidationError::OutOfRange { value: 101, min: 0, max: 100 })
        );
        assert_eq!(
            parse_bounded_int("4x", 0, 100),
            Err(ValidationError::NotANumber("4x".to_string()))
        );
        assert_eq!(parse_bounded_int("  ", 0, 1), Err(ValidationError::Empty));
        assert_eq!(
            parse_bounded_int("1", 5, 1),
            Err(ValidationError::InvalidRange { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("report 2024.pdf"), "report_2024.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename(".bashrc"), "bashrc");
        assert_eq!(sanitize_filename("..."), "unnamed");
        assert_eq!(sanitize_filename(&"a".repeat(300)).len(), MAX_FILENAME_LEN);
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(
            mask_card_number("4111 1111 1111 1111").unwrap(),
            "************1111"
        );
        assert_eq!(
            mask_card_number("5500-0000-0000-0004").unwrap(),
            "************0004"
        );
        assert_eq!(
            mask_card_number("4111111111111112"),
            Err(ValidationError::ChecksumMismatch)
        );
        assert_eq!(
            mask_card_number("4111a"),
            Err(ValidationError::InvalidCharacter('a'))
        );
        assert_eq!(mask_card_number("1234"), Err(ValidationError::InvalidLength(4)));
        assert_eq!(mask_card_number(""), Err(ValidationError::Empty));
    }
}
