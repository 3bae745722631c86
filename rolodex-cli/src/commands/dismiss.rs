// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dismiss Command
//!
//! Marks every pair in a group as "not a duplicate".

use std::path::Path;

use anyhow::Result;

use super::{load_contacts, select_group};
use crate::config::CliConfig;
use crate::display;

pub fn run(config: &CliConfig, contacts_path: &Path, index: usize) -> Result<()> {
    let contacts = load_contacts(contacts_path)?;
    let mut dismissed = config.load_dismissals()?;
    let group = select_group(&contacts, &dismissed, index)?;

    let added = dismissed.dismiss_group(&group);
    config.save_dismissals(&dismissed)?;

    display::success(&format!(
        "Dismissed {} pair(s) among {}",
        added,
        group.ids().join(", ")
    ));

    Ok(())
}
