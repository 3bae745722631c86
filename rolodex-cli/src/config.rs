// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rolodex_core::DismissalSet;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for dismissal files.
    pub data_dir: PathBuf,
    /// User whose dismissals are read and written.
    pub user: String,
}

impl CliConfig {
    /// Returns the dismissal file for the configured user.
    pub fn dismissed_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", DismissalSet::storage_key(&self.user)))
    }

    /// Loads the user's dismissal set. A missing file is an empty set.
    pub fn load_dismissals(&self) -> Result<DismissalSet> {
        let path = self.dismissed_path();
        match fs::read_to_string(&path) {
            Ok(json) => DismissalSet::from_json(&json)
                .with_context(|| format!("Failed to read {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DismissalSet::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to open {}", path.display())),
        }
    }

    /// Writes the user's dismissal set, creating the data directory if needed.
    pub fn save_dismissals(&self, dismissed: &DismissalSet) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create {}", self.data_dir.display()))?;
        let path = self.dismissed_path();
        fs::write(&path, dismissed.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), keys = dismissed.len(), "saved dismissals");
        Ok(())
    }
}
