// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan Command
//!
//! Lists duplicate groups, skipping pairs the user dismissed.

use std::path::Path;

use anyhow::Result;
use rolodex_core::find_duplicate_groups;

use super::load_contacts;
use crate::config::CliConfig;
use crate::display;

pub fn run(config: &CliConfig, contacts_path: &Path, json: bool) -> Result<()> {
    let contacts = load_contacts(contacts_path)?;
    let dismissed = config.load_dismissals()?;
    let groups = find_duplicate_groups(&contacts, &dismissed);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        display::success(&format!("No duplicates among {} contacts", contacts.len()));
        return Ok(());
    }

    println!();
    println!("Duplicate groups ({}):", groups.len());
    println!();
    display::display_groups_table(&groups);
    println!();
    println!("Resolve with 'rolodex merge <file> <#>' or 'rolodex dismiss <file> <#>'.");

    Ok(())
}
