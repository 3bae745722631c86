// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Duplicate Detection
//!
//! Scores contact pairs, applies the tiered decision rules, and clusters
//! matches into disjoint groups. Pairs the user dismissed are never
//! reported again.

pub mod decision;
pub mod dismissal;
pub mod grouping;

pub use decision::{classify, is_duplicate_pair, Confidence, MatchTier, PairMatch};
pub use dismissal::{DismissalError, DismissalSet, PairKey, STORAGE_KEY_PREFIX};
pub use grouping::{find_duplicate_groups, DuplicateGroup};
