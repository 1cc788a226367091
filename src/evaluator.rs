//! Password evaluator - rule checking and strength scoring.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{
    has_lowercase, has_number, has_special_char, has_uppercase, meets_min_length,
};
use crate::types::{PasswordEvaluation, RuleReport, Strength, StrengthScore};

/// Debounce window before an async evaluation runs. A cancellation that
/// arrives within it (typically the next keystroke) drops the evaluation.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Checks a password against the fixed rule set.
///
/// Total over all inputs; the empty password fails every rule.
///
/// # Example
///
/// ```rust
/// use pwd_validator::check_password_rules;
/// use secrecy::SecretString;
///
/// let password = SecretString::new("Test1@".to_string().into());
/// let report = check_password_rules(&password);
/// assert!(report.all_passed());
/// ```
pub fn check_password_rules(password: &SecretString) -> RuleReport {
    let pwd = password.expose_secret();
    RuleReport {
        min_length: meets_min_length(pwd),
        has_uppercase: has_uppercase(pwd),
        has_lowercase: has_lowercase(pwd),
        has_number: has_number(pwd),
        has_special_char: has_special_char(pwd),
    }
}

/// Scores a password on the [0, 4] scale.
///
/// One point per passed rule, plus half a point for each length cutoff the
/// password clears (more than 10, more than 14 characters), clamped to the
/// scale. The empty password scores 0 outright, so the bonuses never apply
/// to it.
///
/// The clamp dominates the bonuses whenever four or more rules pass; length
/// only moves the needle for passwords that fail several rules.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthScore {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthScore::new(0.0);
    }

    let passed = check_password_rules(password).passed_count() as f64;

    let len = pwd.chars().count();
    let mut extra = 0.0;
    if len > 10 {
        extra += 0.5;
    }
    if len > 14 {
        extra += 0.5;
    }

    StrengthScore::new(passed + extra)
}

/// Label for a score, selected by its integer part.
///
/// Out-of-range input is clamped to the scale rather than trusted.
pub fn strength_label(score: f64) -> &'static str {
    Strength::from_score(score).label()
}

/// Runs rule checking and scoring in one pass over the same password.
///
/// This is what a widget re-renders its checklist and meter from on each
/// keystroke.
pub fn evaluate_password(password: &SecretString) -> PasswordEvaluation {
    PasswordEvaluation {
        report: check_password_rules(password),
        score: evaluate_password_strength(password),
    }
}

/// Debounced evaluation that sends its result via channel.
///
/// Waits out a short debounce window first; cancelling the token within it
/// (or before the call) drops the evaluation and nothing is sent. The
/// receiver therefore only ever sees results for the most recent input.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled during debounce");
        return;
    }

    let evaluation = evaluate_password(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_check_rules_all_passed() {
        let report = check_password_rules(&secret("Test1@"));
        assert!(report.min_length);
        assert!(report.has_uppercase);
        assert!(report.has_lowercase);
        assert!(report.has_number);
        assert!(report.has_special_char);
    }

    #[test]
    fn test_check_rules_failed_rules() {
        let report = check_password_rules(&secret("test"));
        assert!(!report.min_length);
        assert!(!report.has_uppercase);
        assert!(report.has_lowercase);
        assert!(!report.has_number);
        assert!(!report.has_special_char);
    }

    #[test]
    fn test_check_rules_empty_password() {
        let report = check_password_rules(&secret(""));
        assert_eq!(report, RuleReport::default());
        assert_eq!(report.passed_count(), 0);
    }

    #[test]
    fn test_strength_empty_password() {
        assert_eq!(evaluate_password_strength(&secret("")).value(), 0.0);
    }

    #[test]
    fn test_strength_stronger_password_scores_higher() {
        let weak = evaluate_password_strength(&secret("test"));
        let strong = evaluate_password_strength(&secret("Test1@"));
        assert!(strong.value() > weak.value());
    }

    #[test]
    fn test_strength_counts_passed_rules() {
        // Lowercase only, too short: one rule.
        assert_eq!(evaluate_password_strength(&secret("test")).value(), 1.0);
        // Length and lowercase: two rules.
        assert_eq!(evaluate_password_strength(&secret("testtest")).value(), 2.0);
        // All five rules at length six: full marks before any bonus.
        assert_eq!(evaluate_password_strength(&secret("Test1@")).value(), 4.0);
    }

    #[test]
    fn test_strength_length_bonus_below_clamp() {
        // Eleven lowercase characters: length + lowercase + half-point bonus.
        assert_eq!(
            evaluate_password_strength(&secret("abcdefghijk")).value(),
            2.5
        );
        // Fifteen characters: both bonuses.
        assert_eq!(
            evaluate_password_strength(&secret("abcdefghijklmno")).value(),
            3.0
        );
    }

    #[test]
    fn test_strength_monotone_in_length() {
        let base = evaluate_password_strength(&secret("Test1@"));
        let longer = evaluate_password_strength(&secret("TestTest1@"));
        assert!(longer.value() >= base.value());
    }

    #[test]
    fn test_strength_clamped_at_max() {
        // Five rules plus both bonuses would be 6; the scale caps at 4.
        let score = evaluate_password_strength(&secret("TestTestTest1@$%^&*"));
        assert_eq!(score.value(), StrengthScore::MAX);
    }

    #[test]
    fn test_strength_always_in_range() {
        for pwd in ["", "a", "test", "Test1@", "TestTestTest1@$%^&*", "        "] {
            let score = evaluate_password_strength(&secret(pwd));
            assert!(
                (0.0..=StrengthScore::MAX).contains(&score.value()),
                "score {} out of range for password {:?}",
                score.value(),
                pwd
            );
        }
    }

    #[test]
    fn test_label_endpoints() {
        assert_eq!(strength_label(0.0), "Very Weak");
        assert_eq!(strength_label(1.0), "Weak");
        assert_eq!(strength_label(2.0), "Medium");
        assert_eq!(strength_label(3.0), "Strong");
        assert_eq!(strength_label(4.0), "Very Strong");
    }

    #[test]
    fn test_label_truncates_half_points() {
        assert_eq!(strength_label(2.5), "Medium");
        assert_eq!(strength_label(3.5), "Strong");
    }

    #[test]
    fn test_label_out_of_range_input() {
        assert_eq!(strength_label(-1.0), "Very Weak");
        assert_eq!(strength_label(5.0), "Very Strong");
    }

    #[test]
    fn test_evaluate_password_combines_both() {
        let pwd = secret("TestTest1@");
        let evaluation = evaluate_password(&pwd);

        assert_eq!(evaluation.report, check_password_rules(&pwd));
        assert_eq!(evaluation.score, evaluate_password_strength(&pwd));
        assert_eq!(evaluation.strength(), Strength::VeryStrong);
        assert!(evaluation.all_rules_passed());
    }
}
