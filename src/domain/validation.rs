//! Contact field validators.
//!
//! Both predicates are pure and take `Option<&str>` so that rows with a
//! missing, `null` or non-string field can be checked without a special case.

use once_cell::sync::Lazy;
use regex::Regex;

/// Brazilian mobile number in international format: `55`, two area-code
/// digits (1-9 each, not checked against the real DDD table), the mobile
/// prefix `9` and eight more digits.
static BR_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^55[1-9]{2}9[0-9]{8}$").expect("Failed to compile Brazilian mobile regex")
});

/// Returns `true` when the name has at least one non-whitespace character.
///
/// There is no length cap and no charset restriction.
pub fn is_valid_name(name: Option<&str>) -> bool {
    name.is_some_and(|n| !n.trim().is_empty())
}

/// Returns `true` when the phone is exactly `55` + `DD` + `9` + 8 digits.
///
/// Any surrounding character, including whitespace or a trailing newline,
/// makes the number invalid.
pub fn is_valid_phone(phone: Option<&str>) -> bool {
    match phone {
        Some(p) if !p.is_empty() => BR_MOBILE_REGEX.is_match(p),
        _ => false,
    }
}
