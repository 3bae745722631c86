// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Merge Planning
//!
//! Builds the record that replaces a group of duplicates. The first contact
//! survives and absorbs the chosen values; all others are to be deleted.
//! Applying the plan is up to the caller.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::Contact;

/// Separator placed between context notes of merged contacts.
pub const NOTES_SEPARATOR: &str = "\n\n---\n\n";

/// Merge error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("At least two contacts are needed to merge, got {0}")]
    NotEnoughContacts(usize),
    #[error("Contact {contact_id} selected for {field} is not part of the merge")]
    UnknownContact { field: MergeField, contact_id: String },
    #[error("Merged contact would have an empty name")]
    EmptyName,
    #[error("Unknown merge field: {0}")]
    UnknownField(String),
}

/// Fields whose value is picked from a single source contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeField {
    Name,
    Email,
    Phone,
    Company,
    Title,
    MeetingLocation,
    MeetingDate,
    AvatarUrl,
}

impl MergeField {
    pub const ALL: [MergeField; 8] = [
        MergeField::Name,
        MergeField::Email,
        MergeField::Phone,
        MergeField::Company,
        MergeField::Title,
        MergeField::MeetingLocation,
        MergeField::MeetingDate,
        MergeField::AvatarUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MergeField::Name => "name",
            MergeField::Email => "email",
            MergeField::Phone => "phone",
            MergeField::Company => "company",
            MergeField::Title => "title",
            MergeField::MeetingLocation => "meeting_location",
            MergeField::MeetingDate => "meeting_date",
            MergeField::AvatarUrl => "avatar_url",
        }
    }

    /// Reads this field from a contact; empty values read as absent.
    pub fn value<'a>(&self, contact: &'a Contact) -> Option<&'a str> {
        let value = match self {
            MergeField::Name => Some(contact.name.as_str()),
            MergeField::Email => contact.email.as_deref(),
            MergeField::Phone => contact.phone.as_deref(),
            MergeField::Company => contact.company.as_deref(),
            MergeField::Title => contact.title.as_deref(),
            MergeField::MeetingLocation => contact.meeting_location.as_deref(),
            MergeField::MeetingDate => contact.meeting_date.as_deref(),
            MergeField::AvatarUrl => contact.avatar_url.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    fn assign(&self, contact: &mut Contact, value: Option<String>) {
        match self {
            MergeField::Name => contact.name = value.unwrap_or_default(),
            MergeField::Email => contact.email = value,
            MergeField::Phone => contact.phone = value,
            MergeField::Company => contact.company = value,
            MergeField::Title => contact.title = value,
            MergeField::MeetingLocation => contact.meeting_location = value,
            MergeField::MeetingDate => contact.meeting_date = value,
            MergeField::AvatarUrl => contact.avatar_url = value,
        }
    }
}

impl std::fmt::Display for MergeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeField {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MergeField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| MergeError::UnknownField(s.to_string()))
    }
}

/// A candidate value for a field, as offered to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldOption<'a> {
    pub contact_id: &'a str,
    pub contact_name: &'a str,
    pub value: &'a str,
}

/// Lists the non-empty values each contact offers for `field`.
pub fn field_options(contacts: &[Contact], field: MergeField) -> Vec<FieldOption<'_>> {
    contacts
        .iter()
        .filter_map(|c| {
            field.value(c).map(|value| FieldOption {
                contact_id: &c.id,
                contact_name: &c.name,
                value,
            })
        })
        .collect()
}

/// The user's choice of source contact per field.
///
/// Fields without a choice take the first non-empty value in group order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSelection {
    picks: HashMap<MergeField, String>,
}

impl MergeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `field` from the contact with `contact_id`.
    pub fn pick(mut self, field: MergeField, contact_id: &str) -> Self {
        self.picks.insert(field, contact_id.to_string());
        self
    }

    pub fn get(&self, field: MergeField) -> Option<&str> {
        self.picks.get(&field).map(String::as_str)
    }
}

/// Result of merge planning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    /// Contact that is updated in place.
    pub survivor_id: String,
    /// New state of the survivor.
    pub merged: Contact,
    /// Contacts to delete once the survivor is saved.
    pub delete_ids: Vec<String>,
}

/// Plans the merge of `contacts` into the first of them.
pub fn plan_merge(contacts: &[Contact], selection: &MergeSelection) -> Result<MergePlan, MergeError> {
    let (first, rest) = match contacts {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => return Err(MergeError::NotEnoughContacts(contacts.len())),
    };

    let mut merged = first.clone();

    for field in MergeField::ALL {
        let value = match selection.get(field) {
            Some(contact_id) => {
                let source = contacts.iter().find(|c| c.id == contact_id).ok_or_else(|| {
                    MergeError::UnknownContact {
                        field,
                        contact_id: contact_id.to_string(),
                    }
                })?;
                field.value(source)
            }
            None => contacts.iter().find_map(|c| field.value(c)),
        };
        field.assign(&mut merged, value.map(str::to_string));
    }

    if merged.name.trim().is_empty() {
        return Err(MergeError::EmptyName);
    }

    let mut seen = HashSet::new();
    merged.tags = contacts
        .iter()
        .flat_map(|c| c.tags.iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect();

    let notes: Vec<&str> = contacts
        .iter()
        .filter_map(|c| c.context_notes.as_deref())
        .filter(|n| !n.is_empty())
        .collect();
    merged.context_notes = if notes.is_empty() {
        None
    } else {
        Some(notes.join(NOTES_SEPARATOR))
    };

    let delete_ids: Vec<String> = rest.iter().map(|c| c.id.clone()).collect();

    tracing::debug!(
        survivor = %first.id,
        deleted = delete_ids.len(),
        "planned contact merge"
    );

    Ok(MergePlan {
        survivor_id: first.id.clone(),
        merged,
        delete_ids,
    })
}
