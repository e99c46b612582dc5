//! Headline metrics rendering

use crate::compare::{summarize, verticals_with_decrease, ExpenseTable};

use super::fmt_money_whole;

/// Render the four headline metrics for two (already filtered) tables
pub fn format_summary(travel: &ExpenseTable, team: &ExpenseTable) -> String {
    let travel_summary = summarize(travel);
    let team_summary = summarize(team);
    let total = travel_summary + team_summary;
    let saved_count = verticals_with_decrease([travel, team]).len();

    let mut output = String::new();
    output.push_str("Spending Summary (Sep vs Oct)\n");
    output.push_str(&"═".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Travel Savings",
        fmt_money_whole(travel_summary.net())
    ));
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Team Building Savings",
        fmt_money_whole(team_summary.net())
    ));
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Total Savings",
        fmt_money_whole(total.net())
    ));
    output.push_str(&format!(
        "{:<28}{:>12}\n",
        "Verticals Who Saved Money", saved_count
    ));

    output
}
