//! Inline validation rules of the lead form
//!
//! Every rule is evaluated on every pass; a failed rule owns exactly one
//! error slot in the page and one fixed message.

use std::iter::Peekable;
use std::str::Chars;

use crate::domain::a002_lead_submission::aggregate::LeadFields;

pub const MESSAGE_MAX_CHARS: usize = 799;

// ── Error slots ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSlot {
    Firstname,
    Lastname,
    Email,
    Phone,
    Message,
    Consent,
}

impl ErrorSlot {
    pub fn selector(&self) -> &'static str {
        match self {
            ErrorSlot::Firstname => ".firstnameError",
            ErrorSlot::Lastname => ".lastnameError",
            ErrorSlot::Email => ".emailError",
            ErrorSlot::Phone => ".phoneError",
            ErrorSlot::Message => ".messageError",
            ErrorSlot::Consent => ".consentError",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorSlot::Firstname => "First name is required.",
            ErrorSlot::Lastname => "Last name is required.",
            ErrorSlot::Email => "Enter a valid email.",
            ErrorSlot::Phone => "Enter a valid US phone number (e.g., 123-456-7890).",
            ErrorSlot::Message => "Message exceeds 799-character limit.",
            ErrorSlot::Consent => "Consent is required.",
        }
    }

    pub fn all() -> [ErrorSlot; 6] {
        [
            ErrorSlot::Firstname,
            ErrorSlot::Lastname,
            ErrorSlot::Email,
            ErrorSlot::Phone,
            ErrorSlot::Message,
            ErrorSlot::Consent,
        ]
    }
}

// ── Rules ────────────────────────────────────────────────────────────────────

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '.' || c.is_whitespace()
}

/// North-American number: `(123) 456-7890`, `123.456.7890`, `1234567890`.
///
/// Same language as `^\(?([1-9]\d{2})\)?[-.\s]?\d{3}[-.\s]?\d{4}$`. No part of
/// the pattern can be confused with its neighbour, so one greedy pass decides.
pub fn is_valid_us_phone(phone: &str) -> bool {
    fn digits(chars: &mut Peekable<Chars<'_>>, n: usize) -> bool {
        (0..n).all(|_| matches!(chars.next(), Some(c) if c.is_ascii_digit()))
    }

    let mut chars = phone.chars().peekable();
    chars.next_if_eq(&'(');
    if !matches!(chars.next(), Some('1'..='9')) || !digits(&mut chars, 2) {
        return false;
    }
    chars.next_if_eq(&')');
    chars.next_if(|c| is_separator(*c));
    if !digits(&mut chars, 3) {
        return false;
    }
    chars.next_if(|c| is_separator(*c));
    digits(&mut chars, 4) && chars.next().is_none()
}

/// Length in UTF-16 code units, the unit a textarea's `maxlength` counts
pub fn is_message_within_limit(message: &str) -> bool {
    message.encode_utf16().count() <= MESSAGE_MAX_CHARS
}

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub failed: Vec<ErrorSlot>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn has_failed(&self, slot: ErrorSlot) -> bool {
        self.failed.contains(&slot)
    }
}

/// Run all six rules, never stopping at the first failure
pub fn validate_lead(fields: &LeadFields) -> ValidationReport {
    let checks = [
        (ErrorSlot::Firstname, !fields.firstname.is_empty()),
        (ErrorSlot::Lastname, !fields.lastname.is_empty()),
        (ErrorSlot::Email, is_valid_email(&fields.email)),
        (ErrorSlot::Phone, is_valid_us_phone(&fields.phone)),
        (ErrorSlot::Message, is_message_within_limit(&fields.message)),
        (ErrorSlot::Consent, fields.consent),
    ];

    ValidationReport {
        failed: checks
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(slot, _)| slot)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> LeadFields {
        LeadFields {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "123-456-7890".into(),
            message: String::new(),
            consent: true,
        }
    }

    #[test]
    fn test_phone_pattern_boundaries() {
        assert!(is_valid_us_phone("123-456-7890"));
        assert!(is_valid_us_phone("(123) 456-7890"));
        assert!(is_valid_us_phone("123.456.7890"));
        assert!(is_valid_us_phone("123 456 7890"));
        // separators are optional in the pattern
        assert!(is_valid_us_phone("1234567890"));
        // each parenthesis is optional on its own
        assert!(is_valid_us_phone("(123456-7890"));

        assert!(!is_valid_us_phone("023-456-7890"));
        assert!(!is_valid_us_phone("123--456-7890"));
        assert!(!is_valid_us_phone("123-456-789"));
        assert!(!is_valid_us_phone("123-456-78901"));
        assert!(!is_valid_us_phone("+1 123-456-7890"));
        assert!(!is_valid_us_phone("abc-def-ghij"));
        assert!(!is_valid_us_phone(""));
    }

    #[test]
    fn test_email_needs_at_and_dot() {
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_message_limit_is_inclusive() {
        assert!(is_message_within_limit(&"a".repeat(799)));
        assert!(!is_message_within_limit(&"a".repeat(800)));
        assert!(is_message_within_limit(&"é".repeat(799)));
        // characters outside the BMP take two units each
        assert!(!is_message_within_limit(&"😀".repeat(400)));
        assert!(is_message_within_limit(&format!("{}a", "😀".repeat(399))));
    }

    #[test]
    fn test_empty_form_fails_every_required_slot() {
        let report = validate_lead(&LeadFields::default());
        assert!(!report.is_valid());
        for slot in [
            ErrorSlot::Firstname,
            ErrorSlot::Lastname,
            ErrorSlot::Email,
            ErrorSlot::Phone,
            ErrorSlot::Consent,
        ] {
            assert!(report.has_failed(slot), "{:?} should fail", slot);
        }
        assert!(!report.has_failed(ErrorSlot::Message));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_lead(&valid_fields()), ValidationReport::default());
    }

    #[test]
    fn test_all_rules_run_after_a_failure() {
        let fields = LeadFields {
            firstname: String::new(),
            message: "x".repeat(800),
            consent: false,
            ..valid_fields()
        };
        assert_eq!(
            validate_lead(&fields).failed,
            vec![ErrorSlot::Firstname, ErrorSlot::Message, ErrorSlot::Consent]
        );
    }
}
