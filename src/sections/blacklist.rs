//! Blacklist section - two points for staying off the common-password list.

use super::{SectionInput, SectionOutcome};
use crate::types::Suggestion;

/// Awards the blacklist bonus, or hints against common passwords.
pub fn blacklist_section(input: &SectionInput) -> SectionOutcome {
    if input.blacklisted {
        SectionOutcome {
            points: 0,
            suggestions: vec![Suggestion::AvoidCommonPasswords],
        }
    } else {
        SectionOutcome {
            points: 2,
            suggestions: Vec::new(),
        }
    }
}
