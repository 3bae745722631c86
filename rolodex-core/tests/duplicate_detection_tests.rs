// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for duplicates (scoring, tiers, grouping, dismissal)

mod common;

use rolodex_core::duplicates::MatchTier;
use rolodex_core::{
    calculate_similarity, find_duplicate_groups, is_duplicate_pair, Confidence, Contact,
    DismissalSet,
};

use common::address_book;

#[test]
fn test_address_book_groups() {
    let groups = find_duplicate_groups(&address_book(), &DismissalSet::new());

    let ids: Vec<Vec<&str>> = groups.iter().map(|g| g.ids()).collect();
    assert_eq!(
        ids,
        vec![
            vec!["a1", "a2"],
            vec!["b1", "b2"],
            vec!["c1", "c2"],
            vec!["d1", "d2"],
        ]
    );

    let confidences: Vec<Confidence> = groups.iter().map(|g| g.confidence).collect();
    assert_eq!(
        confidences,
        vec![
            Confidence::High,
            Confidence::High,
            Confidence::Medium,
            Confidence::Low
        ]
    );
    assert_eq!(groups[1].match_reasons, vec!["Same phone number"]);
    assert_eq!(groups[2].match_reasons, vec!["Similar name and company"]);
}

#[test]
fn test_same_email_different_spelling_is_high() {
    let contacts = vec![
        Contact::new("1", "John Smith").with_email("john@acme.com"),
        Contact::new("2", "Jon Smith").with_email("john@acme.com"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].confidence, Confidence::High);
    assert!(groups[0]
        .match_reasons
        .iter()
        .any(|r| r == "Same email address"));
}

#[test]
fn test_same_email_reason_even_when_name_and_company_match() {
    let a = Contact::new("1", "Jane Doe")
        .with_email("jane@acme.com")
        .with_company("Acme Corp");
    let b = a.clone();
    let b = Contact { id: "2".into(), ..b };

    let m = is_duplicate_pair(&a, &b, &DismissalSet::new()).unwrap();
    assert_eq!(m.reason(), "Same email address");
    assert_eq!(m.confidence(), Confidence::High);
}

#[test]
fn test_same_name_with_longer_company_name() {
    // "acme corp" vs "acme corporation" is only 56% similar, so the pair
    // falls through to the name-only rule.
    let contacts = vec![
        Contact::new("1", "Jane Doe").with_company("Acme Corp"),
        Contact::new("2", "Jane Doe").with_company("Acme Corporation"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].confidence, Confidence::Low);
    assert_eq!(groups[0].match_reasons, vec!["Very similar or same name"]);
}

#[test]
fn test_same_name_with_close_company_name_is_medium() {
    let contacts = vec![
        Contact::new("1", "Jane Doe").with_company("Acme Corp"),
        Contact::new("2", "Jane Doe").with_company("Acme Corp Inc"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].confidence, Confidence::Medium);
    assert_eq!(groups[0].score, 72);
}

#[test]
fn test_initials_with_same_company() {
    let a = Contact::new("1", "J.D.").with_company("Initech");
    let b = Contact::new("2", "J.Do").with_company("Initech");

    let m = is_duplicate_pair(&a, &b, &DismissalSet::new()).unwrap();
    assert_eq!(m.tier, MatchTier::InitialsWithMatchingDetails);
    assert_eq!(m.confidence(), Confidence::Medium);
    assert_eq!(m.score(), 68);
}

#[test]
fn test_initials_with_same_phone_hit_phone_rule_first() {
    let contacts = vec![
        Contact::new("1", "J.D.").with_phone("555-010-2030"),
        Contact::new("2", "J.D").with_phone("5550102030"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].match_reasons, vec!["Same phone number"]);
    assert_eq!(groups[0].confidence, Confidence::High);
}

#[test]
fn test_dismissing_group_suppresses_it_next_pass() {
    let contacts = vec![
        Contact::new("1", "John Smith").with_email("john@acme.com"),
        Contact::new("2", "Jon Smith").with_email("john@acme.com"),
    ];
    let mut dismissed = DismissalSet::new();

    let groups = find_duplicate_groups(&contacts, &dismissed);
    assert_eq!(groups.len(), 1);

    assert_eq!(dismissed.dismiss_group(&groups[0]), 1);
    assert!(dismissed.contains_key("1-2"));
    assert!(dismissed.contains_key("2-1"));

    assert!(find_duplicate_groups(&contacts, &dismissed).is_empty());
}

#[test]
fn test_dismissing_three_member_group_records_all_pairs() {
    let contacts = vec![
        Contact::new("a", "Ann").with_email("ann@x.io"),
        Contact::new("b", "Ann B").with_email("ann@x.io"),
        Contact::new("c", "Ann C").with_email("ann@x.io"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());
    assert_eq!(groups[0].len(), 3);

    let mut dismissed = DismissalSet::new();
    assert_eq!(dismissed.dismiss_group(&groups[0]), 3);
    assert_eq!(dismissed.len(), 6);
    assert!(dismissed.contains_pair("b", "c"));
    assert!(find_duplicate_groups(&contacts, &dismissed).is_empty());
}

#[test]
fn test_dismissed_members_never_share_a_group() {
    let contacts = vec![
        Contact::new("a", "Ann").with_email("ann@x.io"),
        Contact::new("b", "Ann B").with_email("ann@x.io"),
        Contact::new("c", "Ann C").with_email("ann@x.io"),
    ];
    let mut dismissed = DismissalSet::new();
    dismissed.dismiss_pair("b", "c");

    let groups = find_duplicate_groups(&contacts, &dismissed);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids(), vec!["a", "b"]);
    assert!(!groups[0].contains("c"));
}

#[test]
fn test_star_clustering_anchor_only() {
    // A-B share an email, A-C share a phone, B and C share nothing.
    let contacts = vec![
        Contact::new("A", "Alpha Person")
            .with_email("alpha@x.com")
            .with_phone("555 123 4567"),
        Contact::new("B", "Bravo Human").with_email("alpha@x.com"),
        Contact::new("C", "Charlie Being").with_phone("(555) 123-4567"),
    ];

    let bc = is_duplicate_pair(&contacts[1], &contacts[2], &DismissalSet::new());
    assert!(bc.is_none());

    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids(), vec!["A", "B", "C"]);
    assert_eq!(groups[0].confidence, Confidence::High);
    assert_eq!(
        groups[0].match_reasons,
        vec!["Same email address", "Same phone number"]
    );
}

#[test]
fn test_star_clustering_is_not_transitive() {
    // B matches both A and C, but A anchors first and does not match C,
    // so C is left on its own.
    let contacts = vec![
        Contact::new("A", "Alpha Person").with_email("shared@x.com"),
        Contact::new("B", "Bravo Human")
            .with_email("shared@x.com")
            .with_phone("5559990000"),
        Contact::new("C", "Charlie Being").with_phone("555-999-0000"),
    ];
    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids(), vec!["A", "B"]);
}

#[test]
fn test_result_depends_on_input_order() {
    let mut contacts = vec![
        Contact::new("A", "Alpha Person").with_email("shared@x.com"),
        Contact::new("B", "Bravo Human")
            .with_email("shared@x.com")
            .with_phone("5559990000"),
        Contact::new("C", "Charlie Being").with_phone("555-999-0000"),
    ];
    contacts.swap(0, 1);

    let groups = find_duplicate_groups(&contacts, &DismissalSet::new());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids(), vec!["B", "A", "C"]);
}

#[test]
fn test_identity_similarity() {
    let c = Contact::new("1", "Grace Hopper")
        .with_email("grace@navy.mil")
        .with_phone("+1 202 555 0100")
        .with_company("US Navy");
    let s = calculate_similarity(&c, &c);
    assert_eq!(s.overall, 100);
    assert_eq!((s.email, s.phone, s.name, s.company), (100, 100, 100, 100));
}

#[test]
fn test_no_signal_overall_zero() {
    let a = Contact::new("1", "Dr.");
    let b = Contact::new("2", "Mr.");
    assert_eq!(calculate_similarity(&a, &b).overall, 0);
    assert!(is_duplicate_pair(&a, &b, &DismissalSet::new()).is_none());
}
