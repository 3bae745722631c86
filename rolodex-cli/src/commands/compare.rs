// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compare Command
//!
//! Shows field scores and the pairwise decision for two contacts.

use std::path::Path;

use anyhow::Result;
use rolodex_core::calculate_similarity;
use rolodex_core::duplicates::classify;
use serde_json::json;

use super::{find_contact, load_contacts};
use crate::config::CliConfig;
use crate::display;

pub fn run(
    config: &CliConfig,
    contacts_path: &Path,
    id_a: &str,
    id_b: &str,
    json: bool,
) -> Result<()> {
    let contacts = load_contacts(contacts_path)?;
    let a = find_contact(&contacts, id_a)?;
    let b = find_contact(&contacts, id_b)?;

    let dismissed = config.load_dismissals()?.contains_pair(&a.id, &b.id);
    let similarity = calculate_similarity(a, b);
    let tier = classify(a, b, &similarity);

    if json {
        let report = json!({
            "similarity": similarity,
            "dismissed": dismissed,
            "tier": tier,
            "confidence": tier.map(|t| t.confidence()),
            "reason": tier.map(|t| t.reason()),
            "score": tier.map(|t| t.score()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display::display_similarity(a, b, &similarity);
    display::display_decision(tier);
    if dismissed {
        display::warning("This pair was dismissed and will not be grouped");
    }

    Ok(())
}
