// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dismissed Pairs
//!
//! Pairs the user marked "not a duplicate". Each pair is stored as two
//! directed keys, `"a-b"` and `"b-a"`, so lookups ignore argument order.
//! Keys are opaque: ids may contain `-` themselves, so keys are never split.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grouping::DuplicateGroup;

/// Prefix of the per-user key under which callers persist the set.
pub const STORAGE_KEY_PREFIX: &str = "dismissed-duplicates-";

/// Dismissal set errors.
#[derive(Error, Debug)]
pub enum DismissalError {
    #[error("Malformed dismissal set: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// An unordered pair of contact ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairKey {
    a: String,
    b: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        PairKey {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// Key in the order the pair was created, `"a-b"`.
    pub fn forward(&self) -> String {
        format!("{}-{}", self.a, self.b)
    }

    /// Key in reverse order, `"b-a"`.
    pub fn reverse(&self) -> String {
        format!("{}-{}", self.b, self.a)
    }
}

/// Set of dismissed pair keys.
///
/// Serializes as a flat, sorted array of key strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissalSet {
    keys: BTreeSet<String>,
}

impl DismissalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw keys as loaded by the caller.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DismissalSet {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Storage key for a user's dismissal set.
    pub fn storage_key(user_id: &str) -> String {
        format!("{}{}", STORAGE_KEY_PREFIX, user_id)
    }

    /// Returns true if the pair was dismissed, in either direction.
    pub fn contains_pair(&self, a: &str, b: &str) -> bool {
        let key = PairKey::new(a, b);
        self.keys.contains(&key.forward()) || self.keys.contains(&key.reverse())
    }

    /// Returns true if this exact raw key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Records a pair in both directions.
    ///
    /// Returns true if either key was new.
    pub fn dismiss_pair(&mut self, a: &str, b: &str) -> bool {
        let key = PairKey::new(a, b);
        let forward = self.keys.insert(key.forward());
        let reverse = self.keys.insert(key.reverse());
        forward || reverse
    }

    /// Records every pair among the group's members.
    ///
    /// Returns the number of pairs that were not already dismissed.
    pub fn dismiss_group(&mut self, group: &DuplicateGroup) -> usize {
        let ids = group.ids();
        let mut added = 0;
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                if self.dismiss_pair(a, b) {
                    added += 1;
                }
            }
        }
        tracing::debug!(members = ids.len(), added, "dismissed duplicate group");
        added
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, DismissalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DismissalError> {
        Ok(serde_json::from_str(json)?)
    }
}
