// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge Command
//!
//! Prints the merge plan for a group. Applying it is left to whatever owns
//! the contact store.

use std::path::Path;

use anyhow::{Context, Result};
use rolodex_core::{plan_merge, MergeField, MergeSelection};

use super::{load_contacts, select_group};
use crate::config::CliConfig;

/// Parses `field=contact_id` picks.
fn parse_picks(picks: &[String]) -> Result<MergeSelection> {
    let mut selection = MergeSelection::new();
    for pick in picks {
        let (field, contact_id) = pick
            .split_once('=')
            .with_context(|| format!("Invalid pick '{}', expected FIELD=ID", pick))?;
        let field: MergeField = field.trim().parse()?;
        selection = selection.pick(field, contact_id.trim());
    }
    Ok(selection)
}

pub fn run(
    config: &CliConfig,
    contacts_path: &Path,
    index: usize,
    picks: &[String],
) -> Result<()> {
    let contacts = load_contacts(contacts_path)?;
    let dismissed = config.load_dismissals()?;
    let group = select_group(&contacts, &dismissed, index)?;

    let selection = parse_picks(picks)?;
    let plan = plan_merge(&group.contacts, &selection)?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
