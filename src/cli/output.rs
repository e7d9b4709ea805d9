//! Output formatting and progress bars for CLI

use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Evaluation, Player, runner::MatchSummary};

/// Create a progress bar for a series of games
pub fn create_series_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map(|style| style.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Group the digits of a node or game count in threes
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    let (head, tail) = digits.split_at(lead);
    let mut grouped = head.to_string();
    for group in tail.as_bytes().chunks(3) {
        grouped.push(',');
        grouped.extend(group.iter().map(|&b| char::from(b)));
    }
    grouped
}

/// Print one labelled value of a report
pub fn print_kv(key: &str, value: impl fmt::Display) {
    println!("  {:20} {value}", format!("{key}:"));
}

/// Final score line of one game
pub fn score_line(outcome: &Evaluation) -> String {
    format!(
        "P1 score: {}, P2 score: {}",
        outcome.value(Player::One),
        outcome.value(Player::Two)
    )
}

/// Short tally used as the progress bar message
pub fn tally(summary: &MatchSummary) -> String {
    format!(
        "P1 {} / P2 {} / draws {}",
        summary.p1_wins, summary.p2_wins, summary.draws
    )
}

/// Print a series summary with win rates
pub fn print_summary(summary: &MatchSummary) {
    let rate = |count: u64| {
        if summary.games == 0 {
            0.0
        } else {
            100.0 * count as f64 / summary.games as f64
        }
    };
    print_kv("Games", &format_number(summary.games));
    for (label, count) in [
        ("P1 wins", summary.p1_wins),
        ("P2 wins", summary.p2_wins),
        ("Draws", summary.draws),
    ] {
        print_kv(
            label,
            &format!("{} ({:.1}%)", format_number(count), rate(count)),
        );
    }
}
