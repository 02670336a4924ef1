//! Submission validation.

use crate::domain::{HourRange, PhoneNumber};
use crate::selection::SelectionState;

/// Why a submission was refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing is selected.
    #[error("no time selected")]
    EmptySelection,

    /// The selection has a gap; the wire contract carries one range.
    #[error("hours must be consecutive")]
    NonContiguous,

    /// The contact field is blank.
    #[error("missing required field")]
    MissingContact,

    /// The contact field does not normalize to a phone number.
    #[error("invalid contact")]
    InvalidContact,
}

/// Check a submission and extract the values the request needs.
///
/// Checks run in a fixed order so the user is told about the most
/// fundamental problem first. Range selections are contiguous by
/// construction; the gap check exists for toggle-mode sessions.
pub(crate) fn validate_submission(
    selection: &SelectionState,
    contact: &str,
) -> Result<(PhoneNumber, HourRange), ValidationError> {
    let Some(range) = selection.bounding_range() else {
        return Err(ValidationError::EmptySelection);
    };

    if !selection.is_contiguous() {
        return Err(ValidationError::NonContiguous);
    }

    if contact.trim().is_empty() {
        return Err(ValidationError::MissingContact);
    }

    let phone = PhoneNumber::parse(contact).map_err(|_| ValidationError::InvalidContact)?;

    Ok((phone, range))
}
