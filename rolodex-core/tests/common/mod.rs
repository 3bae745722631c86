// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures and proptest strategies for the integration tests.

#![allow(dead_code)]

pub mod strategies;

use rolodex_core::Contact;

/// A small address book with known duplicate structure:
/// - `a1`/`a2` share an email
/// - `b1`/`b2` share a phone in different formats
/// - `c1`/`c2` have similar names at nearly the same company
/// - `d1`/`d2` have the same name and nothing else
/// - `e1` matches nobody
pub fn address_book() -> Vec<Contact> {
    vec![
        Contact::new("a1", "John Smith").with_email("john@acme.com"),
        Contact::new("b1", "Maria Garcia").with_phone("+1 (415) 555-0199"),
        Contact::new("c1", "Catherine Jones").with_company("Umbrella"),
        Contact::new("d1", "Patricia Moreno"),
        Contact::new("a2", "Jon Smith").with_email("John@Acme.com"),
        Contact::new("b2", "M. Garcia").with_phone("+14155550199"),
        Contact::new("c2", "Katherine Jones").with_company("Umbrela"),
        Contact::new("d2", "Patricia Moreno"),
        Contact::new("e1", "Wilhelmina Oyelaran-Fitzgerald").with_email("wof@example.org"),
    ]
}
