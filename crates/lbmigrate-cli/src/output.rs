//! Status lines printed to the console.

use lbmigrate_core::{Error, LeaderboardEntry, ScoreMap};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

const SUCCESS_MARK: &str = "✅";
const FAILURE_MARK: &str = "❌";

pub fn print_success(message: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK,
        message.if_supports_color(Stdout, |text| text.green())
    );
}

/// Print the failure line for an error that ended the run
pub fn print_failure(error: &anyhow::Error) {
    let message = failure_message(error);
    println!(
        "{} {}",
        FAILURE_MARK,
        message.if_supports_color(Stdout, |text| text.red())
    );
}

fn failure_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<Error>() {
        Some(Error::VerificationFailed { .. }) => {
            "VERIFICATION FAILED. The write operation did not save the data to Redis".to_string()
        }
        _ => chain_message(error),
    }
}

// Context layers joined with ": ", ending at the first crate error since its
// message already includes the underlying cause.
fn chain_message(error: &anyhow::Error) -> String {
    let mut parts = Vec::new();
    for cause in error.chain() {
        parts.push(cause.to_string());
        if cause.is::<Error>() {
            break;
        }
    }
    parts.join(": ")
}

pub fn format_entry(member: &str, score: f64) -> String {
    format!(
        "  - Player: {}, Score: {}",
        member.if_supports_color(Stdout, |text| text.bold()),
        score.if_supports_color(Stdout, |value| value.cyan())
    )
}

pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("Leaderboard now contains:");
    for entry in entries {
        println!("{}", format_entry(&entry.member, entry.score));
    }
}

pub fn print_scores(scores: &ScoreMap) {
    for (member, score) in scores {
        println!("{}", format_entry(member, *score));
    }
}
