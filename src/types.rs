//! Core evaluation types: character-class profile, strength tier, report.

use std::fmt;

/// Qualitative strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::Weak => "WEAK",
            StrengthTier::Medium => "MEDIUM",
            StrengthTier::Strong => "STRONG",
        };
        f.write_str(label)
    }
}

/// Which character classes a password covers.
///
/// Each character lands in exactly one bucket, tested in the fixed order
/// upper, lower, digit, else-special. Whitespace and non-ASCII characters
/// count as special.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClassProfile {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharClassProfile {
    /// Scans every character once and sets the class flags.
    pub fn scan(password: &str) -> Self {
        let mut profile = Self::default();
        for c in password.chars() {
            if c.is_ascii_uppercase() {
                profile.has_upper = true;
            } else if c.is_ascii_lowercase() {
                profile.has_lower = true;
            } else if c.is_ascii_digit() {
                profile.has_digit = true;
            } else {
                profile.has_special = true;
            }
        }
        profile
    }

    /// Number of character classes present (0 to 4).
    pub fn criteria_met(&self) -> u8 {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count() as u8
    }
}

/// A single remediation hint, rendered as a fixed English string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    UseMinimumLength(usize),
    UseRecommendedLength(usize),
    AddUppercase,
    AddLowercase,
    AddDigits,
    AddSpecial,
    AvoidCommonPasswords,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::UseMinimumLength(min) => {
                write!(f, "Use at least {} characters", min)
            }
            Suggestion::UseRecommendedLength(len) => {
                write!(f, "Consider using {}+ characters", len)
            }
            Suggestion::AddUppercase => f.write_str("Include uppercase letters"),
            Suggestion::AddLowercase => f.write_str("Include lowercase letters"),
            Suggestion::AddDigits => f.write_str("Include numbers"),
            Suggestion::AddSpecial => f.write_str("Include special symbols"),
            Suggestion::AvoidCommonPasswords => f.write_str("Avoid common passwords"),
        }
    }
}

/// Result of one password analysis.
///
/// A pure function of the password, the blacklist membership and the scoring
/// rules; recomputed on every call, never mutated. The score is additive and
/// tops out at 9 even though reports present it out of 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub length: usize,
    pub length_ok: bool,
    pub profile: CharClassProfile,
    pub blacklisted: bool,
    pub score: u8,
    pub tier: StrengthTier,
    pub suggestions: Vec<Suggestion>,
}
