//! Character class rules - uppercase, lowercase, digits.

pub(crate) const UPPERCASE_LABEL: &str = "Contains an uppercase letter";
pub(crate) const LOWERCASE_LABEL: &str = "Contains a lowercase letter";
pub(crate) const NUMBER_LABEL: &str = "Contains a number";

/// At least one `A`-`Z` character.
pub(crate) fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one `a`-`z` character.
pub(crate) fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

/// At least one `0`-`9` character.
pub(crate) fn has_number(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}
