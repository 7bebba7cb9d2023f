//! Phone numbers and named contacts.
//!
//! Phone numbers are stored exactly as they were collected. Some include a
//! space, some a country code, some an STD prefix with a dash. None of this
//! is normalized: the literal string is what gets displayed and dialed.

use serde::Serialize;

/// A phone number kept as its literal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(&'static str);

impl PhoneNumber {
    /// Wrap a literal phone string.
    pub const fn new(literal: &'static str) -> Self {
        Self(literal)
    }

    /// The literal string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// `tel:` URI for the platform dialer.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.0)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// A named contact with an optional secondary label (e.g., the warden's name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: &'static str,
    pub phone: PhoneNumber,
    pub label: Option<&'static str>,
}

impl Contact {
    pub const fn new(name: &'static str, phone: &'static str) -> Self {
        Self {
            name,
            phone: PhoneNumber::new(phone),
            label: None,
        }
    }

    pub const fn labeled(name: &'static str, phone: &'static str, label: &'static str) -> Self {
        Self {
            name,
            phone: PhoneNumber::new(phone),
            label: Some(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_uri_keeps_literal() {
        assert_eq!(PhoneNumber::new("70133 34805").tel_uri(), "tel:70133 34805");
        assert_eq!(
            PhoneNumber::new("+91 90102 02882").tel_uri(),
            "tel:+91 90102 02882"
        );
        assert_eq!(PhoneNumber::new("040-66303629").tel_uri(), "tel:040-66303629");
    }

    #[test]
    fn test_display_is_literal() {
        assert_eq!(PhoneNumber::new("9951419388").to_string(), "9951419388");
    }
}
