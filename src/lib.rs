//! Password validation library
//!
//! This library provides the evaluation core of a password input widget:
//! rule checking against a fixed five-rule set, strength scoring on a [0, 4]
//! scale, human-readable strength labels, and form-level validation of a
//! password / confirmation payload.
//!
//! The evaluation core is pure and total: every function returns a value for
//! every input, including the empty password, and nothing reads or writes
//! shared state.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `serde`: Enables (de)serialization for payloads and reports
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_validator::{check_password_rules, evaluate_password_strength, strength_label};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = check_password_rules(&password);
//! assert!(report.all_passed());
//!
//! let score = evaluate_password_strength(&password);
//! println!("Score: {}", score.value());
//! println!("Strength: {}", strength_label(score.value()));
//! ```

// Internal modules
mod evaluator;
mod form;
mod rules;
mod types;

// Public API
pub use evaluator::{
    check_password_rules, evaluate_password, evaluate_password_strength, strength_label,
};
pub use form::{FormError, FormField, PasswordForm, validate_password_form};
pub use rules::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{PasswordEvaluation, RuleItem, RuleReport, Strength, StrengthScore};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
