use std::path::PathBuf;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use pwd_check::{
    analyze, default_blacklist_path, Blacklist, ScoreReport, ScoringRules,
};

/// Weak password detector
#[derive(Parser, Debug)]
#[command(name = "pwd-check", version, about = "Analyzes the strength of a password")]
struct Args {
    /// The password to check (quote it if it contains spaces)
    password: String,

    /// Optional file of common passwords to avoid, one per line
    blacklist: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let blacklist_path = args.blacklist.or_else(default_blacklist_path);
    let blacklist = Blacklist::load_or_empty(blacklist_path.as_deref());

    let password = SecretString::new(args.password.into_boxed_str());
    let rules = ScoringRules::default();
    let report = analyze(&password, &blacklist, &rules);

    print_report(password.expose_secret(), &report, &rules);
}

fn print_report(password: &str, report: &ScoreReport, rules: &ScoringRules) {
    println!("=== PASSWORD ANALYSIS ===");
    println!("Password: {}", password);
    println!("Length: {} characters", report.length);

    if report.length_ok {
        println!("Adequate length");
    } else {
        println!(
            "Insufficient length (minimum {} characters)",
            rules.min_length
        );
    }

    if report.blacklisted {
        println!("Password is blacklisted (very common)");
    } else {
        println!("Not in the common password list");
    }

    println!();
    println!("Character types:");
    println!("{} Uppercase (A-Z)", mark(report.profile.has_upper));
    println!("{} Lowercase (a-z)", mark(report.profile.has_lower));
    println!("{} Numbers (0-9)", mark(report.profile.has_digit));
    println!("{} Symbols (!@#$%...)", mark(report.profile.has_special));

    println!();
    println!("Score: {}/10", report.score);
    println!("LEVEL: {}", report.tier);

    if !report.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
    println!();
}

fn mark(present: bool) -> &'static str {
    if present { "[x]" } else { "[ ]" }
}
