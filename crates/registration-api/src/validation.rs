//! Field validation rules for submissions.
//!
//! Each rule is a named predicate returning a structured [`Violation`] code,
//! so the taxonomy is testable independently of the user-facing messages.
//! Validation accumulates every violation rather than stopping at the first;
//! the response surfaces all problems at once.

use std::fmt;

/// Required digit count for a phone number after normalization.
pub const PHONE_DIGITS: usize = 10;

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Name absent or shorter than 2 characters after trimming.
    NameTooShort,
    /// Name contains something other than letters and whitespace.
    NameInvalidCharacters,
    /// Phone empty after stripping separators.
    PhoneMissing,
    /// Phone contains a non-digit character after stripping separators.
    PhoneNonDigit,
    /// Phone digit count is not exactly 10; carries the actual count.
    PhoneWrongLength(usize),
    /// Email does not match the local@domain.tld shape.
    EmailInvalid,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NameTooShort => {
                write!(f, "Name must be at least 2 characters long")
            }
            Violation::NameInvalidCharacters => {
                write!(f, "Name must contain only letters and spaces")
            }
            Violation::PhoneMissing => write!(f, "Phone number is required"),
            Violation::PhoneNonDigit => {
                write!(f, "Phone number must contain only digits")
            }
            Violation::PhoneWrongLength(count) if *count < PHONE_DIGITS => {
                write!(f, "Phone number must be 10 digits (you entered {})", count)
            }
            Violation::PhoneWrongLength(count) => {
                write!(
                    f,
                    "Phone number must be exactly 10 digits (you entered {})",
                    count
                )
            }
            Violation::EmailInvalid => write!(f, "Invalid email format"),
        }
    }
}

/// Strip whitespace, hyphens, and plus signs from a phone number.
///
/// Everything else is kept, so stray characters like parentheses still
/// trip the digit check afterwards.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect()
}

/// Check that a trimmed name contains only letters and whitespace.
///
/// Vacuously true for the empty string; emptiness is the length rule's job.
pub fn is_valid_name_chars(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Check the "local@domain.tld" shape: non-whitespace, non-`@` characters
/// around exactly one `@`, with a `.` after the `@` that has at least one
/// character on each side.
pub fn is_valid_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Validate a submission, accumulating every violation in field order.
///
/// The two name checks are independent and can both fire; the three phone
/// checks are mutually exclusive, so at most one phone violation is reported.
pub fn validate(name: &str, phone: &str, email: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    let name = name.trim();
    if name.chars().count() < 2 {
        violations.push(Violation::NameTooShort);
    }
    if !is_valid_name_chars(name) {
        violations.push(Violation::NameInvalidCharacters);
    }

    let digits = normalize_phone(phone);
    if digits.is_empty() {
        violations.push(Violation::PhoneMissing);
    } else if digits.chars().any(|c| !c.is_ascii_digit()) {
        violations.push(Violation::PhoneNonDigit);
    } else if digits.len() != PHONE_DIGITS {
        violations.push(Violation::PhoneWrongLength(digits.len()));
    }

    if !is_valid_email_shape(email) {
        violations.push(Violation::EmailInvalid);
    }

    violations
}
