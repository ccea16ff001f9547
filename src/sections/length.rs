//! Length section - scores password length against the configured bounds.

use super::{SectionInput, SectionOutcome};
use crate::types::Suggestion;

/// Two points for meeting the minimum length, one more for the recommended
/// length. A password below a bound gets the matching hint instead.
pub fn length_section(input: &SectionInput) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    if input.length >= input.rules.min_length {
        outcome.points += 2;
    } else {
        outcome
            .suggestions
            .push(Suggestion::UseMinimumLength(input.rules.min_length));
    }

    if input.length >= input.rules.recommended_length {
        outcome.points += 1;
    } else {
        outcome
            .suggestions
            .push(Suggestion::UseRecommendedLength(input.rules.recommended_length));
    }

    outcome
}
