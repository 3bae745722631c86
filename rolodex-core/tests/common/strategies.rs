// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Contacts are drawn from small value pools so that generated address
//! books actually contain duplicates.

use proptest::prelude::*;
use rolodex_core::Contact;

// ============================================================
// Field Strategies
// ============================================================

/// Names made of two capitalized words, never just an honorific.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("John Smith".to_string()),
        Just("Jon Smith".to_string()),
        Just("Jane Doe".to_string()),
        Just("J.D.".to_string()),
        "[A-Z][a-z]{3,8} [A-Z][a-z]{3,8}",
    ]
}

pub fn email_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("john@acme.com".to_string()),
        Just("JOHN@acme.com".to_string()),
        Just("jane@acme.com".to_string()),
        "[a-z]{3,6}@[a-z]{3,6}\\.com",
    ])
}

pub fn phone_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("555-010-2030".to_string()),
        Just("(555) 010 2030".to_string()),
        "[0-9]{10}",
    ])
}

pub fn company_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("Acme Corp".to_string()),
        Just("Acme Corporation".to_string()),
        Just("Initech".to_string()),
        "[A-Z][a-z]{3,10}",
    ])
}

// ============================================================
// Contact Strategies
// ============================================================

/// A contact without an id; ids are assigned by position.
pub fn contact_fields_strategy() -> impl Strategy<Value = Contact> {
    (
        name_strategy(),
        email_strategy(),
        phone_strategy(),
        company_strategy(),
    )
        .prop_map(|(name, email, phone, company)| Contact {
            name,
            email,
            phone,
            company,
            ..Default::default()
        })
}

/// An address book of up to `max` contacts with unique ids `c0`, `c1`, ...
pub fn address_book_strategy(max: usize) -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(contact_fields_strategy(), 0..max).prop_map(|contacts| {
        contacts
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.id = format!("c{}", i);
                c
            })
            .collect()
    })
}
