//! Form-level validation for the password / confirmation payload.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::evaluator::check_password_rules;
use crate::rules::MIN_LENGTH;

/// A submitted form: the password and its confirmation.
///
/// `Debug` keeps both fields redacted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(rename_all = "camelCase"))]
pub struct PasswordForm {
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl PasswordForm {
    pub fn new(password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            password: SecretString::new(password.into().into()),
            confirm_password: SecretString::new(confirm_password.into().into()),
        }
    }
}

/// Field a rejection is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Payload key for the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// A rejected form constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingNumber,
    #[error("Password must contain at least one special character")]
    MissingSpecialChar,
    #[error("Passwords do not match")]
    Mismatch,
}

impl FormError {
    /// Field the error is attributed to. The mismatch belongs to the
    /// confirmation field; every rule violation belongs to the password
    /// itself.
    pub fn field(&self) -> FormField {
        match self {
            FormError::Mismatch => FormField::ConfirmPassword,
            _ => FormField::Password,
        }
    }
}

/// Validates a submitted form.
///
/// Every failed rule is reported. The confirmation is only compared once the
/// password itself is valid, so a mismatch is never mixed in with rule
/// violations. Acceptance is the `Ok` branch; a rejected payload cannot
/// reach the caller's success path.
///
/// # Example
///
/// ```rust
/// use pwd_validator::{validate_password_form, FormError, PasswordForm};
///
/// let form = PasswordForm::new("Test1@", "Test2@");
/// let errors = validate_password_form(&form).unwrap_err();
/// assert_eq!(errors, vec![FormError::Mismatch]);
/// ```
pub fn validate_password_form(form: &PasswordForm) -> Result<(), Vec<FormError>> {
    let report = check_password_rules(&form.password);

    let mut errors = Vec::new();
    if !report.min_length {
        errors.push(FormError::TooShort { min: MIN_LENGTH });
    }
    if !report.has_uppercase {
        errors.push(FormError::MissingUppercase);
    }
    if !report.has_lowercase {
        errors.push(FormError::MissingLowercase);
    }
    if !report.has_number {
        errors.push(FormError::MissingNumber);
    }
    if !report.has_special_char {
        errors.push(FormError::MissingSpecialChar);
    }

    if errors.is_empty()
        && form.password.expose_secret() != form.confirm_password.expose_secret()
    {
        errors.push(FormError::Mismatch);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!("password form rejected with {} error(s)", errors.len());
        Err(errors)
    }
}
