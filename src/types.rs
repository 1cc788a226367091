//! Evaluation result types: rule reports, strength scores and tiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rules::{
    LENGTH_LABEL, LOWERCASE_LABEL, NUMBER_LABEL, SPECIAL_LABEL, UPPERCASE_LABEL,
};

/// Outcome of checking a password against the fixed rule set.
///
/// Each field is derived independently from the same password; there is no
/// ordering significance among them. The empty password fails every rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RuleReport {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl RuleReport {
    /// Number of rules in the fixed set.
    pub const RULE_COUNT: usize = 5;

    /// Number of rules the password passed (0-5).
    pub fn passed_count(&self) -> usize {
        [
            self.min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special_char,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count()
    }

    /// Whether every rule passed.
    pub fn all_passed(&self) -> bool {
        self.passed_count() == Self::RULE_COUNT
    }

    /// Checklist items in display order, one per rule.
    pub fn checklist(&self) -> [RuleItem; Self::RULE_COUNT] {
        [
            RuleItem { label: LENGTH_LABEL, passed: self.min_length },
            RuleItem { label: UPPERCASE_LABEL, passed: self.has_uppercase },
            RuleItem { label: LOWERCASE_LABEL, passed: self.has_lowercase },
            RuleItem { label: NUMBER_LABEL, passed: self.has_number },
            RuleItem { label: SPECIAL_LABEL, passed: self.has_special_char },
        ]
    }
}

/// One checklist entry: the displayed rule text and whether the rule passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RuleItem {
    pub label: &'static str,
    pub passed: bool,
}

/// A strength score, always within the closed range [0, 4].
///
/// Scores are not necessarily integral; length bonuses contribute half points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct StrengthScore(f64);

impl StrengthScore {
    /// Upper end of the scale.
    pub const MAX: f64 = 4.0;

    /// Clamps a raw value into [0, 4]. NaN maps to 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(0.0);
        }
        Self(raw.clamp(0.0, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Tier for this score, selected by its integer part.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.0)
    }

    /// Fill percentage for a strength meter (0-100).
    pub fn percent(&self) -> f64 {
        self.0 / Self::MAX * 100.0
    }
}

/// Strength tier, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strength {
    #[cfg_attr(feature = "serde", serde(rename = "Very Weak"))]
    VeryWeak = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
    #[cfg_attr(feature = "serde", serde(rename = "Very Strong"))]
    VeryStrong = 4,
}

impl Strength {
    /// Tier for a score, selected by the floor of the value.
    ///
    /// Out-of-range input is clamped to the scale instead of indexing past
    /// the tier list; NaN lands on the lowest tier.
    pub fn from_score(score: f64) -> Self {
        match score.clamp(0.0, StrengthScore::MAX).floor() as u8 {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Medium,
            3 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    /// Human-readable tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Tier index (0-4).
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combined result of one evaluation pass over a password.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PasswordEvaluation {
    pub report: RuleReport,
    pub score: StrengthScore,
}

impl PasswordEvaluation {
    /// Tier for the contained score.
    pub fn strength(&self) -> Strength {
        self.score.strength()
    }

    pub fn all_rules_passed(&self) -> bool {
        self.report.all_passed()
    }
}
