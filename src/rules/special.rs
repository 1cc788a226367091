//! Special character rule.

/// The accepted special characters. The set is fixed; membership is
/// byte-for-byte, so characters outside it (space, `~`, `?`, `/`, `\`)
/// do not count.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_-+={}[]|:;"'<,.>"#;

pub(crate) const SPECIAL_LABEL: &str = "Contains a special character";

/// At least one character from [`SPECIAL_CHARS`].
pub(crate) fn has_special_char(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARS.contains(c))
}
