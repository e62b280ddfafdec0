//! Field-level validation of booking drafts.
//!
//! The rules mirror the product's booking form contract. Every field is
//! checked independently and every failure is reported, one message per
//! offending field, so the caller can highlight each input.

use chrono::NaiveDate;

use super::BookingDraft;
use crate::catalog::ServiceCatalog;
use crate::error::FieldError;

/// Inclusive party size bounds.
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;

/// Minimum requester name length, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum phone length, in characters. Format beyond length is not
/// checked.
pub const MIN_PHONE_LEN: usize = 10;

/// Validate a draft against the service catalog and the submission date.
///
/// Returns every field failure at once; an empty error list means the
/// draft may become a record.
pub fn validate_draft(
    draft: &BookingDraft,
    catalog: &ServiceCatalog,
    today: NaiveDate,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.service.trim().is_empty() {
        errors.push(FieldError::new("service", "Please select a destination"));
    } else if !catalog.contains(&draft.service) {
        errors.push(FieldError::new(
            "service",
            format!("Unknown service: {}", draft.service),
        ));
    }

    if draft.travel_date < today {
        errors.push(FieldError::new(
            "travel_date",
            "Travel date must not be in the past",
        ));
    }

    if draft.party_size < MIN_PARTY_SIZE {
        errors.push(FieldError::new("party_size", "Must be at least 1 person"));
    } else if draft.party_size > MAX_PARTY_SIZE {
        errors.push(FieldError::new("party_size", "Maximum 20 people"));
    }

    if draft.name.trim().chars().count() < MIN_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            "Name must be at least 2 characters",
        ));
    }

    if !is_valid_email(&draft.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    if draft.phone.trim().chars().count() < MIN_PHONE_LEN {
        errors.push(FieldError::new(
            "phone",
            "Phone number must be at least 10 digits",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain
/// with non-empty labels, no whitespace. Deliverability is not checked.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            service: "Everest Base Camp Trek".into(),
            travel_date: NaiveDate::from_ymd_opt(2030, 4, 15).unwrap(),
            party_size: 2,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "9812345678".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn errors_for(draft: &BookingDraft) -> Vec<String> {
        match validate_draft(draft, &ServiceCatalog::seed(), today()) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().map(|e| e.field).collect(),
        }
    }

    #[test]
    fn accepts_a_valid_draft() {
        assert!(errors_for(&valid_draft()).is_empty());
    }

    #[test]
    fn party_size_bounds() {
        let mut draft = valid_draft();
        draft.party_size = 0;
        assert_eq!(errors_for(&draft), ["party_size"]);
        draft.party_size = 21;
        assert_eq!(errors_for(&draft), ["party_size"]);
        draft.party_size = 1;
        assert!(errors_for(&draft).is_empty());
        draft.party_size = 20;
        assert!(errors_for(&draft).is_empty());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut draft = valid_draft();
        for bad in ["not-an-email", "a@b", "@example.com", "a b@example.com", "a@ex..com", ""] {
            draft.email = bad.into();
            assert_eq!(errors_for(&draft), ["email"], "email {bad:?}");
        }
        draft.email = "jo.doe+travel@mail.example.org".into();
        assert!(errors_for(&draft).is_empty());
    }

    #[test]
    fn rejects_short_name_and_phone() {
        let mut draft = valid_draft();
        draft.name = "A".into();
        assert_eq!(errors_for(&draft), ["name"]);
        draft.name = "Al".into();
        assert!(errors_for(&draft).is_empty());

        draft.phone = "12345".into();
        assert_eq!(errors_for(&draft), ["phone"]);
        draft.phone = "1234567890".into();
        assert!(errors_for(&draft).is_empty());
    }

    #[test]
    fn rejects_past_and_accepts_today() {
        let mut draft = valid_draft();
        draft.travel_date = today().pred_opt().unwrap();
        assert_eq!(errors_for(&draft), ["travel_date"]);
        draft.travel_date = today();
        assert!(errors_for(&draft).is_empty());
    }

    #[test]
    fn rejects_empty_and_unknown_service() {
        let mut draft = valid_draft();
        draft.service = "".into();
        assert_eq!(errors_for(&draft), ["service"]);
        draft.service = "Moon Landing Package".into();
        assert_eq!(errors_for(&draft), ["service"]);
    }

    #[test]
    fn reports_every_invalid_field_at_once() {
        let draft = BookingDraft {
            service: "".into(),
            travel_date: today().pred_opt().unwrap(),
            party_size: 0,
            name: "A".into(),
            email: "not-an-email".into(),
            phone: "12345".into(),
        };
        let fields = errors_for(&draft);
        assert_eq!(
            fields,
            ["service", "travel_date", "party_size", "name", "email", "phone"]
        );
    }
}
