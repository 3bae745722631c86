// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pairwise Duplicate Decision
//!
//! Tiers are checked in declaration order and the first satisfied one wins.
//! Each tier fixes its own confidence, reason and display score.

use serde::{Deserialize, Serialize};

use super::dismissal::DismissalSet;
use crate::contact::Contact;
use crate::similarity::{calculate_similarity, email_domain, normalize_name, SimilarityScore};

/// Names at most this long (after normalization) are treated as initials.
const INITIALS_MAX_LEN: usize = 3;

/// How certain the detector is that two contacts are the same person.
///
/// Ordered `Low < Medium < High`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule that classified a pair as duplicates, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    SameEmail,
    SamePhone,
    SameNameAndCompany,
    SamePhoneSimilarName,
    SimilarNameSameEmailDomain,
    SimilarNameAndCompany,
    VerySimilarNameWithCompany,
    InitialsWithMatchingDetails,
    SimilarNameOnly,
}

impl MatchTier {
    /// All tiers in the order they are evaluated.
    pub const ALL: [MatchTier; 9] = [
        MatchTier::SameEmail,
        MatchTier::SamePhone,
        MatchTier::SameNameAndCompany,
        MatchTier::SamePhoneSimilarName,
        MatchTier::SimilarNameSameEmailDomain,
        MatchTier::SimilarNameAndCompany,
        MatchTier::VerySimilarNameWithCompany,
        MatchTier::InitialsWithMatchingDetails,
        MatchTier::SimilarNameOnly,
    ];

    pub fn confidence(&self) -> Confidence {
        match self {
            MatchTier::SameEmail
            | MatchTier::SamePhone
            | MatchTier::SameNameAndCompany
            | MatchTier::SamePhoneSimilarName
            | MatchTier::SimilarNameSameEmailDomain => Confidence::High,
            MatchTier::SimilarNameAndCompany
            | MatchTier::VerySimilarNameWithCompany
            | MatchTier::InitialsWithMatchingDetails => Confidence::Medium,
            MatchTier::SimilarNameOnly => Confidence::Low,
        }
    }

    /// Human-readable explanation shown next to a group.
    pub fn reason(&self) -> &'static str {
        match self {
            MatchTier::SameEmail => "Same email address",
            MatchTier::SamePhone => "Same phone number",
            MatchTier::SameNameAndCompany => "Same name and company",
            MatchTier::SamePhoneSimilarName => "Same phone with similar name",
            MatchTier::SimilarNameSameEmailDomain => "Similar name with same email domain",
            MatchTier::SimilarNameAndCompany => "Similar name and company",
            MatchTier::VerySimilarNameWithCompany => "Very similar name with company match",
            MatchTier::InitialsWithMatchingDetails => {
                "Name variation (initials) with matching details"
            }
            MatchTier::SimilarNameOnly => "Very similar or same name",
        }
    }

    /// Display score, independent of [`SimilarityScore::overall`].
    pub fn score(&self) -> u8 {
        match self {
            MatchTier::SameEmail | MatchTier::SamePhone => 100,
            MatchTier::SameNameAndCompany => 95,
            MatchTier::SamePhoneSimilarName => 92,
            MatchTier::SimilarNameSameEmailDomain => 88,
            MatchTier::SimilarNameAndCompany => 75,
            MatchTier::VerySimilarNameWithCompany => 72,
            MatchTier::InitialsWithMatchingDetails => 68,
            MatchTier::SimilarNameOnly => 60,
        }
    }

    /// Checks whether this tier's condition holds for the pair.
    fn matches(&self, a: &Contact, b: &Contact, s: &SimilarityScore) -> bool {
        match self {
            MatchTier::SameEmail => s.email == 100,
            MatchTier::SamePhone => s.phone == 100,
            MatchTier::SameNameAndCompany => s.name >= 90 && s.company >= 90,
            MatchTier::SamePhoneSimilarName => s.name >= 85 && s.phone == 100,
            MatchTier::SimilarNameSameEmailDomain => s.name >= 85 && same_email_domain(a, b),
            MatchTier::SimilarNameAndCompany => s.name >= 75 && s.company >= 80,
            MatchTier::VerySimilarNameWithCompany => s.name >= 80 && s.company >= 60,
            MatchTier::InitialsWithMatchingDetails => {
                (looks_like_initials(&a.name) || looks_like_initials(&b.name))
                    && s.name >= 60
                    && (s.phone == 100 || s.company >= 85)
            }
            MatchTier::SimilarNameOnly => s.name >= 85,
        }
    }
}

/// Outcome of a positive pairwise decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch {
    pub tier: MatchTier,
    pub similarity: SimilarityScore,
}

impl PairMatch {
    pub fn confidence(&self) -> Confidence {
        self.tier.confidence()
    }

    pub fn reason(&self) -> &'static str {
        self.tier.reason()
    }

    pub fn score(&self) -> u8 {
        self.tier.score()
    }
}

/// Classifies a pair from an already computed similarity, ignoring dismissals.
pub fn classify(a: &Contact, b: &Contact, similarity: &SimilarityScore) -> Option<MatchTier> {
    MatchTier::ALL
        .into_iter()
        .find(|tier| tier.matches(a, b, similarity))
}

/// Decides whether two contacts are duplicates.
///
/// A dismissed pair is rejected before any scoring happens.
pub fn is_duplicate_pair(a: &Contact, b: &Contact, dismissed: &DismissalSet) -> Option<PairMatch> {
    if dismissed.contains_pair(&a.id, &b.id) {
        tracing::trace!(a = %a.id, b = %b.id, "pair dismissed, skipping");
        return None;
    }

    let similarity = calculate_similarity(a, b);
    classify(a, b, &similarity).map(|tier| PairMatch { tier, similarity })
}

fn same_email_domain(a: &Contact, b: &Contact) -> bool {
    match (a.email().and_then(email_domain), b.email().and_then(email_domain)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Very short names are likely initials of a longer name.
///
/// Normalization removes periods, so "J. Smith" counts as a full name.
fn looks_like_initials(name: &str) -> bool {
    normalize_name(name).chars().count() <= INITIALS_MAX_LEN
}
