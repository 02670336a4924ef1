//! Contact phone number normalization.

use std::fmt;

/// Error returned when a contact string does not normalize to a phone number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid phone number: {reason}")]
pub struct InvalidPhone {
    reason: &'static str,
}

/// A normalized phone number: 10 or 11 digits, nothing else.
///
/// Parsing strips every non-digit character first, so the usual separator
/// styles all normalize to the same value.
///
/// # Examples
///
/// ```
/// use charge_server::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("010-1234-5678").unwrap();
/// assert_eq!(phone.as_str(), "01012345678");
///
/// // Too few digits after stripping
/// assert!(PhoneNumber::parse("123").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a contact string, stripping separators and validating length.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhone> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() < 10 {
            return Err(InvalidPhone {
                reason: "fewer than 10 digits",
            });
        }
        if digits.len() > 11 {
            return Err(InvalidPhone {
                reason: "more than 11 digits",
            });
        }

        Ok(PhoneNumber(digits))
    }

    /// Returns the normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
