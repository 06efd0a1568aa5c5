// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use common::{principal, student, tutor};
use tutor_match::contact::{contact_student_draft, contact_tutor_draft};

#[test]
fn test_student_draft_is_addressed_to_relay_with_encoded_subject() {
    let mut listing = student("Ada Lovelace", "ada@x.com", &["Algebra", "Geometry"]);
    listing.budget = 35.0;
    let sender = principal("tutor@x.com");

    let url = contact_student_draft("relay@example.com", &sender, &listing);

    assert!(url.starts_with("mailto:relay@example.com?subject="));
    assert!(url.contains("Tutoring%20Opportunity%20-%20Ada%20Lovelace"));
    // Body carries the listing details, percent-encoded
    assert!(url.contains("Algebra%2C%20Geometry"));
    assert!(url.contains("%2435.00%2Fhr")); // $35.00/hr
    assert!(url.contains("No%20description%20provided"));
    // Signed with the sender's display name
    assert!(url.contains("Test%20User"));
}

#[test]
fn test_sender_name_falls_back_to_email_local_part() {
    let listing = student("Ada", "ada@x.com", &["Math"]);
    let mut sender = principal("jo@x.com");
    sender.display_name = None;

    let url = contact_student_draft("relay@example.com", &sender, &listing);
    assert!(url.ends_with("Best%20regards%2C%0Ajo"));
}

#[test]
fn test_tutor_draft_mentions_rate_and_bio() {
    let mut listing = tutor("Grace Hopper", "grace@x.com", &["Compilers"]);
    listing.pay = 120.0;
    listing.bio = "Navy veteran".to_string();
    let sender = principal("student@x.com");

    let url = contact_tutor_draft("relay@example.com", &sender, &listing);

    assert!(url.contains("Tutoring%20Request%20-%20Grace%20Hopper"));
    assert!(url.contains("%24120.00%2Fhr"));
    assert!(url.contains("Navy%20veteran"));
}
