//! Client-side form validation for the auth and listing forms.
//!
//! Checks run in the same order the forms display their fields, so the
//! first error returned is the one the user should fix first. Real
//! enforcement lives in the backend; this layer only catches mistakes
//! before a round-trip.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::ValidationError;
use crate::models::{Category, Condition, ListingType, PickupMethod};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Minimum password length for signup.
const MIN_PASSWORD_LEN: usize = 8;

/// Validate an email address shape (not deliverability).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Password strength: length plus at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= MIN_PASSWORD_LEN;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Login form: both fields present and the email well-formed.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    validate_email(email)
}

/// Signup form input, field-for-field.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_pledge: bool,
}

/// Validate the signup form in display order.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.full_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    validate_email(&form.email)?;
    validate_password(&form.password)?;
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !form.agreed_pledge {
        return Err(ValidationError::PledgeNotAccepted);
    }
    Ok(())
}

/// Draft of the "List an Item" form before submission.
///
/// `weight` stays a raw string until validation; the form input is free
/// text and the parse is part of the contract.
#[derive(Clone, Debug)]
pub struct ListingDraft {
    pub title: String,
    pub condition: Option<Condition>,
    pub category: Option<Category>,
    pub weight: String,
    pub description: String,
    pub listing_type: ListingType,
    pub pickup_method: Option<PickupMethod>,
    pub campus_location: String,
    pub image_count: usize,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            condition: None,
            category: None,
            weight: String::new(),
            description: String::new(),
            listing_type: ListingType::Donate,
            pickup_method: Some(PickupMethod::Pickup),
            campus_location: String::new(),
            image_count: 0,
        }
    }
}

/// Validate a listing draft in the form's field order.
///
/// Returns the parsed weight in kg on success; a negative or
/// non-numeric weight is rejected rather than coerced to zero.
pub fn validate_listing(draft: &ListingDraft) -> Result<f64, ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if draft.condition.is_none() {
        return Err(ValidationError::NoCondition);
    }
    if draft.category.is_none() {
        return Err(ValidationError::NoCategory);
    }
    if draft.weight.trim().is_empty() {
        return Err(ValidationError::EmptyWeight);
    }
    let weight_kg: f64 = draft
        .weight
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidWeight)?;
    if weight_kg < 0.0 || !weight_kg.is_finite() {
        return Err(ValidationError::InvalidWeight);
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if draft.pickup_method.is_none() {
        return Err(ValidationError::NoPickupMethod);
    }
    if draft.campus_location.trim().is_empty() {
        return Err(ValidationError::EmptyLocation);
    }
    if draft.image_count == 0 {
        return Err(ValidationError::NoImages);
    }
    Ok(weight_kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ListingDraft {
        ListingDraft {
            title: "IKEA Desk Lamp".into(),
            condition: Some(Condition::LikeNew),
            category: Some(Category::HomeGoods),
            weight: "1.5".into(),
            description: "Warm white, barely used.".into(),
            listing_type: ListingType::Swap,
            pickup_method: Some(PickupMethod::Pickup),
            campus_location: "KK12 lobby".into(),
            image_count: 2,
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("student@siswa.um.edu.my").is_ok());
        assert!(validate_email("  student@um.edu ").is_ok());
        assert_eq!(validate_email("student"), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate_email("a b@um.edu"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password("greenday1").is_ok());
        assert_eq!(
            validate_password("short1"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            validate_password("lettersonly"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            validate_password("123456789"),
            Err(ValidationError::WeakPassword)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_login("", "password123"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_login("test@ecoswap.com", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert!(validate_login("test@ecoswap.com", "password123").is_ok());
    }

    #[test]
    fn test_signup_happy_path_and_mismatch() {
        let mut form = SignupForm {
            full_name: "Alexander".into(),
            email: "student@siswa.um.edu.my".into(),
            password: "greenday1".into(),
            confirm_password: "greenday1".into(),
            agreed_pledge: true,
        };
        assert!(validate_signup(&form).is_ok());

        form.confirm_password = "greenday2".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::PasswordMismatch));

        form.confirm_password = form.password.clone();
        form.agreed_pledge = false;
        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::PledgeNotAccepted)
        );
    }

    #[test]
    fn test_listing_draft_valid() {
        assert_eq!(validate_listing(&complete_draft()), Ok(1.5));
    }

    #[test]
    fn test_listing_checks_follow_field_order() {
        let mut draft = complete_draft();
        draft.title = "  ".into();
        draft.weight = "".into();
        // Title is reported before weight.
        assert_eq!(validate_listing(&draft), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_listing_weight_is_not_coerced() {
        let mut draft = complete_draft();
        draft.weight = "heavy".into();
        assert_eq!(validate_listing(&draft), Err(ValidationError::InvalidWeight));

        draft.weight = "-2".into();
        assert_eq!(validate_listing(&draft), Err(ValidationError::InvalidWeight));

        draft.weight = "0".into();
        assert_eq!(validate_listing(&draft), Ok(0.0));
    }

    #[test]
    fn test_listing_requires_an_image() {
        let mut draft = complete_draft();
        draft.image_count = 0;
        assert_eq!(validate_listing(&draft), Err(ValidationError::NoImages));
    }
}
