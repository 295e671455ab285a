//! Pre-flight checks run against locally loaded lists before a submit.
//!
//! These are advisory: the list may be stale and the backend can still
//! reject the request. A failed check means no request is sent.

use thiserror::Error;

use crate::models::{Counsellor, LscCenter, LscCenterUpdate, NewCounsellor, NewLscCenter};
use crate::utils::eq_ignore_case;

/// Minimum length the backend accepts for a new password
const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("LSC Center with code '{0}' already exists.")]
    DuplicateCode(String),

    #[error("Email '{0}' is already in use.")]
    DuplicateEmail(String),

    #[error("Counsellor with Aadhaar number '{0}' already exists.")]
    DuplicateAadhaar(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("New password must be at least 8 characters long and include uppercase letters and numbers")]
    WeakPassword,
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Reject a new centre whose code or email matches a loaded one (case-insensitive)
pub fn check_new_center(
    existing: &[LscCenter],
    candidate: &NewLscCenter,
) -> Result<(), ValidationError> {
    require(&candidate.lsc_number, "lsc_number")?;
    require(&candidate.email, "email")?;
    check_center_conflicts(existing, None, &candidate.lsc_number, &candidate.email)
}

/// Same as `check_new_center`, skipping the centre being edited
pub fn check_center_update(
    existing: &[LscCenter],
    editing_id: i64,
    candidate: &LscCenterUpdate,
) -> Result<(), ValidationError> {
    require(&candidate.lsc_number, "lsc_number")?;
    require(&candidate.email, "email")?;
    check_center_conflicts(
        existing,
        Some(editing_id),
        &candidate.lsc_number,
        &candidate.email,
    )
}

fn check_center_conflicts(
    existing: &[LscCenter],
    skip_id: Option<i64>,
    code: &str,
    email: &str,
) -> Result<(), ValidationError> {
    let others = || existing.iter().filter(|c| Some(c.id) != skip_id);

    if others().any(|c| eq_ignore_case(&c.lsc_number, code)) {
        return Err(ValidationError::DuplicateCode(code.to_string()));
    }
    if others().any(|c| eq_ignore_case(&c.email, email)) {
        return Err(ValidationError::DuplicateEmail(email.to_string()));
    }
    Ok(())
}

/// Reject a counsellor whose email or Aadhaar number is already loaded
pub fn check_new_counsellor(
    existing: &[Counsellor],
    candidate: &NewCounsellor,
) -> Result<(), ValidationError> {
    require(&candidate.email_id, "email_id")?;
    require(&candidate.aadhaar_card, "aadhaar_card")?;

    if existing
        .iter()
        .any(|c| eq_ignore_case(&c.email_id, &candidate.email_id))
    {
        return Err(ValidationError::DuplicateEmail(candidate.email_id.clone()));
    }
    if existing
        .iter()
        .any(|c| c.aadhaar_card.trim() == candidate.aadhaar_card.trim())
    {
        return Err(ValidationError::DuplicateAadhaar(
            candidate.aadhaar_card.clone(),
        ));
    }
    Ok(())
}

/// Mirror of the backend's password rule
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_digit {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}
