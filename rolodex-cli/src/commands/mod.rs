// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Commands

pub mod compare;
pub mod dismiss;
pub mod merge;
pub mod scan;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rolodex_core::{find_duplicate_groups, Contact, DismissalSet, DuplicateGroup};

/// Loads a JSON array of contacts.
pub(crate) fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let contacts: Vec<Contact> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a JSON array of contacts", path.display()))?;

    let mut ids = HashSet::new();
    for contact in &contacts {
        if contact.id.is_empty() {
            bail!("Contact '{}' has no id", contact.name);
        }
        if !ids.insert(contact.id.as_str()) {
            bail!("Duplicate contact id '{}'", contact.id);
        }
    }

    tracing::debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
    Ok(contacts)
}

/// Runs detection and returns the group with the 1-based `index`.
pub(crate) fn select_group(
    contacts: &[Contact],
    dismissed: &DismissalSet,
    index: usize,
) -> Result<DuplicateGroup> {
    let mut groups = find_duplicate_groups(contacts, dismissed);
    if index == 0 || index > groups.len() {
        bail!(
            "No duplicate group #{} (found {} group(s), run 'rolodex scan' to list them)",
            index,
            groups.len()
        );
    }
    Ok(groups.swap_remove(index - 1))
}

pub(crate) fn find_contact<'a>(contacts: &'a [Contact], id: &str) -> Result<&'a Contact> {
    contacts
        .iter()
        .find(|c| c.id == id)
        .with_context(|| format!("Contact '{}' not found", id))
}
