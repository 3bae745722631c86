// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rolodex Core Library
//!
//! Duplicate contact detection and merge planning.
//! Pure functions over in-memory snapshots: no I/O, no persistence.

pub mod contact;
pub mod duplicates;
pub mod merge;
pub mod similarity;

pub use contact::Contact;
pub use duplicates::{
    find_duplicate_groups, is_duplicate_pair, Confidence, DismissalError, DismissalSet,
    DuplicateGroup, MatchTier, PairKey, PairMatch,
};
pub use merge::{
    field_options, plan_merge, FieldOption, MergeError, MergeField, MergePlan, MergeSelection,
};
pub use similarity::{
    calculate_similarity, calculate_similarity_with, normalize_name, normalize_phone,
    string_similarity, FieldWeights, SimilarityScore,
};
