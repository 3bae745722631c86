// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Duplicate Grouping
//!
//! Single left-to-right pass: each unclaimed contact anchors a group and
//! collects every later unclaimed contact that matches the anchor. Members
//! are only compared with the anchor, never with each other, so two members
//! of one group need not match directly. A dismissal still holds between
//! members: a candidate dismissed against anyone already in the group is
//! left for a later anchor.

use serde::{Deserialize, Serialize};

use super::decision::{is_duplicate_pair, Confidence};
use super::dismissal::DismissalSet;
use crate::contact::Contact;

/// Contacts believed to be the same person.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Anchor first, then matches in input order. Always two or more.
    pub contacts: Vec<Contact>,
    /// Highest confidence among the anchor's matches.
    pub confidence: Confidence,
    /// Distinct reasons in the order they were first seen.
    pub match_reasons: Vec<String>,
    /// Display score of the strongest match.
    pub score: u8,
}

impl DuplicateGroup {
    /// Ids of the group's members, in group order.
    pub fn ids(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, contact_id: &str) -> bool {
        self.contacts.iter().any(|c| c.id == contact_id)
    }
}

/// Partitions contacts into disjoint duplicate groups.
///
/// Result order: confidence descending, then score descending. Ties keep
/// discovery order. Deterministic for a given input order.
pub fn find_duplicate_groups(contacts: &[Contact], dismissed: &DismissalSet) -> Vec<DuplicateGroup> {
    let mut claimed = vec![false; contacts.len()];
    let mut groups = Vec::new();

    for (i, anchor) in contacts.iter().enumerate() {
        if claimed[i] {
            continue;
        }

        let mut members = vec![anchor.clone()];
        let mut reasons: Vec<String> = Vec::new();
        let mut best: Option<(Confidence, u8)> = None;

        for (j, candidate) in contacts.iter().enumerate().skip(i + 1) {
            if claimed[j] {
                continue;
            }

            if members[1..]
                .iter()
                .any(|member| dismissed.contains_pair(&member.id, &candidate.id))
            {
                tracing::trace!(
                    anchor = %anchor.id,
                    candidate = %candidate.id,
                    "candidate dismissed against a group member, skipping"
                );
                continue;
            }

            let Some(found) = is_duplicate_pair(anchor, candidate, dismissed) else {
                continue;
            };

            tracing::trace!(
                anchor = %anchor.id,
                candidate = %candidate.id,
                tier = ?found.tier,
                score = found.score(),
                "duplicate pair"
            );

            claimed[j] = true;
            members.push(candidate.clone());

            let reason = found.reason();
            if !reasons.iter().any(|r| r == reason) {
                reasons.push(reason.to_string());
            }

            let rank = (found.confidence(), found.score());
            if best.map_or(true, |current| rank > current) {
                best = Some(rank);
            }
        }

        if let Some((confidence, score)) = best {
            claimed[i] = true;
            groups.push(DuplicateGroup {
                contacts: members,
                confidence,
                match_reasons: reasons,
                score,
            });
        }
    }

    groups.sort_by(|a, b| {
        b.confidence
            .cmp(&a.confidence)
            .then_with(|| b.score.cmp(&a.score))
    });

    tracing::debug!(
        contacts = contacts.len(),
        dismissed = dismissed.len(),
        groups = groups.len(),
        "duplicate detection pass complete"
    );

    groups
}
