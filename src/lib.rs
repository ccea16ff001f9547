//! Password strength checking library
//!
//! Scores a candidate password against length, character variety and an
//! optional blacklist of known-weak passwords, and derives remediation
//! hints.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECK_BLACKLIST_PATH`: Blacklist file consulted when the caller
//!   supplies no path (default: none)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{analyze, Blacklist, ScoringRules};
//! use secrecy::SecretString;
//!
//! let blacklist = Blacklist::load_or_empty(None);
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = analyze(&password, &blacklist, &ScoringRules::default());
//!
//! println!("Score: {}/10", report.score);
//! println!("Level: {}", report.tier);
//! ```

// Internal modules
mod analyzer;
mod blacklist;
mod sections;
mod types;

// Public API
pub use analyzer::{analyze, ScoringRules};
pub use blacklist::{default_blacklist_path, Blacklist, BlacklistError};
pub use types::{CharClassProfile, ScoreReport, StrengthTier, Suggestion};
