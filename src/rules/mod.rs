//! Password rule predicates
//!
//! Each module covers one aspect of the fixed rule set.

mod length;
mod special;
mod variety;

pub use length::MIN_LENGTH;
pub use special::SPECIAL_CHARS;

pub(crate) use length::{LENGTH_LABEL, meets_min_length};
pub(crate) use special::{SPECIAL_LABEL, has_special_char};
pub(crate) use variety::{
    LOWERCASE_LABEL, NUMBER_LABEL, UPPERCASE_LABEL, has_lowercase, has_number, has_uppercase,
};
