// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Similarity
//!
//! Field-by-field comparison of two contacts. Email and phone are exact
//! match or nothing; name and company are compared with normalized
//! Levenshtein distance. All scores are integers in `0..=100`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::contact::Contact;

/// Honorifics and generational suffixes dropped from names before comparison.
const HONORIFIC_PATTERN: &str = r"\b(mr|mrs|ms|dr|prof|jr|sr|ii|iii|iv)\b\.?";

/// Number of trailing digits kept for phone numbers without a country code.
const LOCAL_PHONE_DIGITS: usize = 10;

fn honorifics() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HONORIFIC_PATTERN).expect("honorific pattern is valid"))
}

/// Per-field similarity of two contacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub email: u8,
    pub phone: u8,
    pub name: u8,
    pub company: u8,
    /// Weighted mean over the fields that scored above zero.
    pub overall: u8,
}

/// Weights used to combine field scores into [`SimilarityScore::overall`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub email: f64,
    pub phone: f64,
    pub name: f64,
    pub company: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            email: 2.0,
            phone: 2.0,
            name: 1.5,
            company: 1.0,
        }
    }
}

impl FieldWeights {
    /// Combines field scores, ignoring fields that scored zero.
    ///
    /// Returns 0 when no field carries any signal.
    pub fn combine(&self, email: u8, phone: u8, name: u8, company: u8) -> u8 {
        let mut total = 0.0;
        let mut weights = 0.0;

        for (score, weight) in [
            (email, self.email),
            (phone, self.phone),
            (name, self.name),
            (company, self.company),
        ] {
            if score > 0 {
                total += f64::from(score) * weight;
                weights += weight;
            }
        }

        if weights > 0.0 {
            (total / weights).round() as u8
        } else {
            0
        }
    }
}

/// Normalizes a phone number for comparison.
///
/// Keeps ASCII digits and a leading `+`. Numbers without a `+` that have at
/// least ten digits are cut down to their last ten, so regional numbers
/// match their national form.
pub fn normalize_phone(phone: &str) -> String {
    let mut normalized = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() || (c == '+' && normalized.is_empty()) {
            normalized.push(c);
        }
    }

    if !normalized.starts_with('+') && normalized.len() >= LOCAL_PHONE_DIGITS {
        normalized.split_off(normalized.len() - LOCAL_PHONE_DIGITS)
    } else {
        normalized
    }
}

/// Normalizes a name: lower-cased, honorifics removed, letters and single
/// spaces only.
pub fn normalize_name(name: &str) -> String {
    let letters: String = strip_honorifics(name)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cases a name and removes honorifics, leaving punctuation in place.
fn strip_honorifics(name: &str) -> String {
    honorifics()
        .replace_all(&name.to_lowercase(), "")
        .into_owned()
}

/// Returns the lower-cased part after the first `@`, if any.
///
/// An address with no `@`, or nothing after it, has no domain. Two such
/// addresses never count as sharing a domain.
pub fn email_domain(email: &str) -> Option<String> {
    email
        .to_lowercase()
        .split('@')
        .nth(1)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
}

/// Similarity of two strings as a percentage, based on Levenshtein distance.
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
/// An empty input never matches.
pub fn string_similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (a, b) = (a.trim(), b.trim());

    if a == b {
        return 100;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let distance = strsim::levenshtein(a, b);
    ((1.0 - distance as f64 / max_len as f64) * 100.0).round() as u8
}

/// Compares two contacts using the default [`FieldWeights`].
pub fn calculate_similarity(a: &Contact, b: &Contact) -> SimilarityScore {
    calculate_similarity_with(&FieldWeights::default(), a, b)
}

/// Compares two contacts, combining field scores with `weights`.
pub fn calculate_similarity_with(
    weights: &FieldWeights,
    a: &Contact,
    b: &Contact,
) -> SimilarityScore {
    let email = match (a.email(), b.email()) {
        (Some(x), Some(y)) if x.to_lowercase() == y.to_lowercase() => 100,
        _ => 0,
    };

    let phone_a = normalize_phone(a.phone().unwrap_or_default());
    let phone_b = normalize_phone(b.phone().unwrap_or_default());
    let phone = if !phone_a.is_empty() && phone_a == phone_b {
        100
    } else {
        0
    };

    let name = string_similarity(&normalize_name(&a.name), &normalize_name(&b.name));

    let company_a = a.company().unwrap_or_default().trim().to_lowercase();
    let company_b = b.company().unwrap_or_default().trim().to_lowercase();
    let company = string_similarity(&company_a, &company_b);

    SimilarityScore {
        email,
        phone,
        name,
        company,
        overall: weights.combine(email, phone, name, company),
    }
}
