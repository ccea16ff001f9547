//! Strength analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::sections::{
    blacklist_section, character_variety_section, length_section, SectionInput, SectionOutcome,
};
use crate::types::{CharClassProfile, ScoreReport, StrengthTier};

/// Named scoring thresholds, overridable per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRules {
    /// Minimum acceptable length; meeting it is worth two points.
    pub min_length: usize,
    /// Recommended length; meeting it is worth one extra point.
    pub recommended_length: usize,
    /// Scores at or above this are MEDIUM.
    pub medium_score: u8,
    /// Scores at or above this are STRONG, and suggestions are suppressed.
    pub strong_score: u8,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            recommended_length: 12,
            medium_score: 5,
            strong_score: 8,
        }
    }
}

/// Analyzes a password and returns a [`ScoreReport`].
///
/// The score is additive: +2 for meeting `min_length`, +1 more for
/// `recommended_length`, +1 per character class present, +2 when the
/// password is not blacklisted. The maximum attainable score is therefore 9
/// even though reports present it out of 10; the original scale is kept
/// as-is rather than renormalized.
///
/// Every string is a valid input, including the empty one; analysis never
/// fails.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `blacklist` - Known-weak passwords, matched byte-for-byte
/// * `rules` - Scoring thresholds, usually [`ScoringRules::default`]
pub fn analyze(
    password: &SecretString,
    blacklist: &Blacklist,
    rules: &ScoringRules,
) -> ScoreReport {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();
    let blacklisted = blacklist.contains(pwd);
    let profile = CharClassProfile::scan(pwd);

    let input = SectionInput {
        length,
        profile,
        blacklisted,
        rules,
    };

    // Orchestrator: execute sections in sequence. Their order fixes the
    // order of the collected suggestions.
    let sections: [(&str, fn(&SectionInput) -> SectionOutcome); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("blacklist", blacklist_section),
    ];

    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    for (_section_name, section_fn) in sections {
        let outcome = section_fn(&input);

        #[cfg(feature = "tracing")]
        tracing::debug!("section {}: +{} points", _section_name, outcome.points);

        score += outcome.points;
        suggestions.extend(outcome.suggestions);
    }

    let tier = if score >= rules.strong_score {
        StrengthTier::Strong
    } else if score >= rules.medium_score {
        StrengthTier::Medium
    } else {
        StrengthTier::Weak
    };

    // Suggestions are only reported below the strong threshold.
    if score >= rules.strong_score {
        suggestions.clear();
    }

    ScoreReport {
        length,
        length_ok: length >= rules.min_length,
        profile,
        blacklisted,
        score,
        tier,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Suggestion;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn blacklist_of(passwords: &[&str]) -> (NamedTempFile, Blacklist) {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        let blacklist = Blacklist::load(temp_file.path()).expect("load failed");
        (temp_file, blacklist)
    }

    #[test]
    fn test_analyze_short_lowercase_password() {
        let report = analyze(&secret("abc"), &Blacklist::empty(), &ScoringRules::default());

        assert_eq!(report.length, 3);
        assert!(!report.length_ok);
        assert!(!report.blacklisted);
        assert_eq!(report.profile.criteria_met(), 1);
        assert_eq!(report.score, 3);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(
            report.suggestions,
            vec![
                Suggestion::UseMinimumLength(8),
                Suggestion::UseRecommendedLength(12),
                Suggestion::AddUppercase,
                Suggestion::AddDigits,
                Suggestion::AddSpecial,
            ]
        );
    }

    #[test]
    fn test_analyze_strong_password_has_no_suggestions() {
        let report = analyze(
            &secret("Abcdefgh1!"),
            &Blacklist::empty(),
            &ScoringRules::default(),
        );

        assert_eq!(report.length, 10);
        assert!(report.length_ok);
        assert_eq!(report.profile.criteria_met(), 4);
        assert_eq!(report.score, 8);
        assert_eq!(report.tier, StrengthTier::Strong);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_analyze_blacklisted_password() {
        let (_file, blacklist) = blacklist_of(&["password", "123456", "qwerty", "admin"]);
        let report = analyze(&secret("password"), &blacklist, &ScoringRules::default());

        assert!(report.blacklisted);
        // +2 length, +1 lowercase, no blacklist bonus
        assert_eq!(report.score, 3);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert!(report
            .suggestions
            .contains(&Suggestion::AvoidCommonPasswords));
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze(&secret(""), &Blacklist::empty(), &ScoringRules::default());

        assert_eq!(report.length, 0);
        assert_eq!(report.profile.criteria_met(), 0);
        assert_eq!(report.score, 2);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(
            report.suggestions,
            vec![
                Suggestion::UseMinimumLength(8),
                Suggestion::UseRecommendedLength(12),
                Suggestion::AddUppercase,
                Suggestion::AddLowercase,
                Suggestion::AddDigits,
                Suggestion::AddSpecial,
            ]
        );
    }

    #[test]
    fn test_length_boundaries() {
        let rules = ScoringRules::default();
        let blacklist = Blacklist::empty();

        // All-lowercase passwords: 1 variety point, +2 blacklist bonus.
        assert_eq!(analyze(&secret("abcdefg"), &blacklist, &rules).score, 3);
        assert_eq!(analyze(&secret("abcdefgh"), &blacklist, &rules).score, 5);
        assert_eq!(analyze(&secret("abcdefghijkl"), &blacklist, &rules).score, 6);
    }

    #[test]
    fn test_max_score_is_nine() {
        let report = analyze(
            &secret("Abcdefghij1!"),
            &Blacklist::empty(),
            &ScoringRules::default(),
        );
        assert_eq!(report.score, 9);
        assert_eq!(report.tier, StrengthTier::Strong);
    }

    #[test]
    fn test_score_never_exceeds_nine() {
        let blacklist = Blacklist::empty();
        let rules = ScoringRules::default();
        let long = "Aa1!".repeat(64);
        let candidates = [
            "",
            "a",
            "password",
            "Abcdefgh1!",
            "Abcdefghij1!",
            "XyZ0!XyZ0!XyZ0!XyZ0!",
            long.as_str(),
        ];

        for pwd in candidates {
            let report = analyze(&secret(pwd), &blacklist, &rules);
            assert!(report.score <= 9, "score {} for {:?}", report.score, pwd);
        }
    }

    #[test]
    fn test_medium_tier() {
        // 8 lowercase chars: +2 length, +1 variety, +2 not blacklisted = 5
        let report = analyze(
            &secret("abcdefgh"),
            &Blacklist::empty(),
            &ScoringRules::default(),
        );
        assert_eq!(report.score, 5);
        assert_eq!(report.tier, StrengthTier::Medium);
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let (_file, blacklist) = blacklist_of(&["password"]);
        let rules = ScoringRules::default();

        let first = analyze(&secret("MyPass123!"), &blacklist, &rules);
        let second = analyze(&secret("MyPass123!"), &blacklist, &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_rules_move_boundaries() {
        let rules = ScoringRules {
            min_length: 4,
            recommended_length: 6,
            ..ScoringRules::default()
        };
        let report = analyze(&secret("abcd"), &Blacklist::empty(), &rules);

        // +2 min length, +1 lowercase, +2 not blacklisted
        assert_eq!(report.score, 5);
        assert_eq!(report.suggestions[0], Suggestion::UseRecommendedLength(6));
    }

    #[test]
    fn test_long_password_accepted_in_full() {
        // Far past the 256-byte buffer of fixed-size designs.
        let pwd = "Aa1!".repeat(200);
        let report = analyze(&secret(&pwd), &Blacklist::empty(), &ScoringRules::default());

        assert_eq!(report.length, 800);
        assert_eq!(report.score, 9);
        assert_eq!(report.tier, StrengthTier::Strong);
    }
}
