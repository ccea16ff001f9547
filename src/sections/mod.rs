//! Scoring sections
//!
//! Each section scores one aspect of the password and contributes its
//! remediation hints. Their order in the analyzer fixes the hint order.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::character_variety_section;

use crate::analyzer::ScoringRules;
use crate::types::{CharClassProfile, Suggestion};

/// Everything a section needs to score its aspect.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub length: usize,
    pub profile: CharClassProfile,
    pub blacklisted: bool,
    pub rules: &'a ScoringRules,
}

/// A section's score contribution and its conditional hints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u8,
    pub suggestions: Vec<Suggestion>,
}
