// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Record
//!
//! Plain snapshot of a contact as handed over by the persistence layer.
//! Detection never mutates or stores contacts; it only reads them.

use serde::{Deserialize, Serialize};

/// A contact record.
///
/// Only `id` and `name` are required. Unknown fields in serialized input are
/// ignored so snapshots with extra bookkeeping columns deserialize cleanly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Contact {
    /// Creates a contact with only an id and a name.
    pub fn new(id: &str, name: &str) -> Self {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Sets the company.
    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    /// Sets the job title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Replaces the tag list.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the free-form context notes.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.context_notes = Some(notes.to_string());
        self
    }

    /// Returns the email if present and non-empty.
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    /// Returns the phone if present and non-empty.
    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    /// Returns the company if present and non-empty.
    pub fn company(&self) -> Option<&str> {
        non_empty(self.company.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
