// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pre-filled email drafts for contacting a listing.
//!
//! Contact requests go through a configured relay address as a `mailto:` URL
//! with a percent-encoded subject and body, opened by the host UI.

use crate::models::{Client, Principal, Tutor};

/// Format a dollar amount the way the UI does (`$1,234.56`).
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

fn mailto(relay_email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        relay_email,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Draft a tutor's contact request for a student listing.
pub fn contact_student_draft(relay_email: &str, sender: &Principal, student: &Client) -> String {
    let subject = format!("Tutoring Opportunity - {}", student.name);
    let description = if student.description.is_empty() {
        "No description provided"
    } else {
        &student.description
    };
    let body = format!(
        "Hello,\n\n\
         I'm interested in connecting with {name} for tutoring services.\n\n\
         Student Details:\n\
         - Name: {name}\n\
         - Subjects of interest: {subjects}\n\
         - Budget: {budget}/hr\n\
         - Description: {description}\n\n\
         Please help me get in touch with this student to discuss:\n\
         - My availability for tutoring sessions\n\
         - My experience with their subjects of interest\n\
         - Preferred meeting format (in-person/online)\n\
         - Scheduling and session details\n\n\
         Thank you!\n\n\
         Best regards,\n\
         {sender}",
        name = student.name,
        subjects = student.subjects.join(", "),
        budget = format_usd(student.budget),
        description = description,
        sender = sender.friendly_name(),
    );
    mailto(relay_email, &subject, &body)
}

/// Draft a student's contact request for a tutor listing.
pub fn contact_tutor_draft(relay_email: &str, sender: &Principal, tutor: &Tutor) -> String {
    let subject = format!("Tutoring Request - {}", tutor.name);
    let bio = if tutor.bio.is_empty() {
        "No bio provided"
    } else {
        &tutor.bio
    };
    let body = format!(
        "Hello,\n\n\
         I'm interested in booking tutoring sessions with {name}.\n\n\
         Tutor Details:\n\
         - Name: {name}\n\
         - Subjects taught: {subjects}\n\
         - Rate: {rate}/hr\n\
         - Bio: {bio}\n\n\
         Please help me get in touch with this tutor to discuss:\n\
         - Their availability for tutoring sessions\n\
         - Their experience with my subjects of interest\n\
         - Preferred meeting format (in-person/online)\n\
         - Scheduling and session details\n\n\
         Thank you!\n\n\
         Best regards,\n\
         {sender}",
        name = tutor.name,
        subjects = tutor.subjects.join(", "),
        rate = format_usd(tutor.pay),
        bio = bio,
        sender = sender.friendly_name(),
    );
    mailto(relay_email, &subject, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(25.0), "$25.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(0.999), "$1.00");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }
}
