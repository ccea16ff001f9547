//! Character variety section - one point per character class present.

use super::{SectionInput, SectionOutcome};
use crate::types::Suggestion;

/// Scores the character classes covered by the password and suggests the
/// missing ones in upper, lower, digit, special order.
pub fn character_variety_section(input: &SectionInput) -> SectionOutcome {
    let profile = input.profile;

    let missing: Vec<_> = [
        (!profile.has_upper).then_some(Suggestion::AddUppercase),
        (!profile.has_lower).then_some(Suggestion::AddLowercase),
        (!profile.has_digit).then_some(Suggestion::AddDigits),
        (!profile.has_special).then_some(Suggestion::AddSpecial),
    ]
    .into_iter()
    .flatten()
    .collect();

    SectionOutcome {
        points: profile.criteria_met(),
        suggestions: missing,
    }
}
