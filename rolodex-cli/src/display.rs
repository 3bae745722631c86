// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal Output

use console::style;
use rolodex_core::{Confidence, Contact, DuplicateGroup, MatchTier, SimilarityScore};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("•").cyan(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", style("!").yellow().bold(), msg);
}

fn styled_confidence(confidence: Confidence) -> String {
    match confidence {
        Confidence::High => style("high").red().bold().to_string(),
        Confidence::Medium => style("medium").yellow().to_string(),
        Confidence::Low => style("low").dim().to_string(),
    }
}

fn member_label(contact: &Contact) -> String {
    format!("{} ({})", contact.name, contact.id)
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Score")]
    score: u8,
    #[tabled(rename = "Contacts")]
    members: String,
    #[tabled(rename = "Reasons")]
    reasons: String,
}

/// Prints groups numbered from 1, the numbering `dismiss` and `merge` accept.
pub fn display_groups_table(groups: &[DuplicateGroup]) {
    let rows: Vec<GroupRow> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| GroupRow {
            index: i + 1,
            confidence: g.confidence.to_string(),
            score: g.score,
            members: g
                .contacts
                .iter()
                .map(member_label)
                .collect::<Vec<_>>()
                .join("\n"),
            reasons: g.match_reasons.join("\n"),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Score")]
    score: u8,
}

pub fn display_similarity(a: &Contact, b: &Contact, score: &SimilarityScore) {
    println!("{}  vs  {}", member_label(a), member_label(b));
    let rows = vec![
        ScoreRow { field: "email", score: score.email },
        ScoreRow { field: "phone", score: score.phone },
        ScoreRow { field: "name", score: score.name },
        ScoreRow { field: "company", score: score.company },
        ScoreRow { field: "overall", score: score.overall },
    ];
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_decision(tier: Option<MatchTier>) {
    match tier {
        Some(tier) => println!(
            "Duplicate: {} ({}, score {})",
            tier.reason(),
            styled_confidence(tier.confidence()),
            tier.score()
        ),
        None => info("Not a duplicate"),
    }
}
