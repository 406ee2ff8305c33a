use marina_catalog::PricingConfig;
use marina_offer::BookingSelections;
use serde::{Deserialize, Serialize};

/// One failed check, keyed by the form field it concerns so the UI can
/// attach the message to the right input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("reservation validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn field_names(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Pre-submission gate. Runs every check and reports all failures in one
/// pass rather than stopping at the first, so the form renders the
/// complete error list.
pub fn validate(
    config: &PricingConfig,
    selections: &BookingSelections,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    let mut fail = |field: &str, message: String| {
        errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    };

    if selections.date_range.nights() <= 0 {
        fail("date_range", "select at least one night".to_string());
    }

    if selections.guests < 1 {
        fail("guests", "at least one guest is required".to_string());
    } else if selections.guests > config.capacity {
        fail(
            "guests",
            format!("this boat takes at most {} guests", config.capacity),
        );
    }

    if !is_valid_phone(selections.contact_phone.expose()) {
        fail(
            "contact_phone",
            "enter a phone number with at least 6 digits".to_string(),
        );
    }

    if !config.allows_rental_type(selections.rental_type) {
        fail(
            "rental_type",
            "this rental type is not offered for this boat".to_string(),
        );
    }

    if selections.children_count < 0 {
        fail("children_count", "cannot be negative".to_string());
    } else if selections.children_count > selections.guests {
        fail(
            "children_count",
            "children cannot outnumber the guests".to_string(),
        );
    }

    if !selections.confirmed {
        fail("confirmed", "please confirm the booking terms".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

/// Permissive phone check: an optional leading `+`, then digits, spaces,
/// hyphens and parentheses, with at least six digits overall.
fn is_valid_phone(phone: &str) -> bool {
    let mut digits = 0;
    for (i, c) in phone.chars().enumerate() {
        match c {
            '+' if i == 0 => {}
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits >= 6
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use marina_catalog::{Extras, PriceUnit, RentalType};
    use marina_shared::{DateRange, Masked};

    fn config() -> PricingConfig {
        PricingConfig {
            base_price: 100,
            price_unit: PriceUnit::Day,
            capacity: 4,
            allows_flexible_cancellation: true,
            allowed_rental_types: vec![RentalType::BoatOnly, RentalType::WithCaptain],
            extras: Extras::default(),
            service_fee_pct: None,
        }
    }

    fn selections() -> BookingSelections {
        let start = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 7, 13).unwrap();
        BookingSelections {
            date_range: DateRange::new(start, end).unwrap(),
            guests: 2,
            rental_type: RentalType::BoatOnly,
            flexible_cancellation: false,
            captain: false,
            fuel: false,
            contact_phone: Masked::new("+33 6 12 34 56 78".to_string()),
            children_count: 1,
            nautical_cv: None,
            confirmed: true,
        }
    }

    #[test]
    fn valid_selections_pass() {
        assert!(validate(&config(), &selections()).is_ok());
    }

    #[test]
    fn all_failures_are_reported_at_once() {
        let mut selections = selections();
        selections.guests = 0;
        selections.contact_phone = Masked::new(String::new());
        let err = validate(&config(), &selections).unwrap_err();
        let fields = err.field_names();
        assert!(fields.contains(&"guests"));
        assert!(fields.contains(&"contact_phone"));
        // children_count (1) > guests (0) also trips.
        assert!(fields.contains(&"children_count"));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut selections = selections();
        selections.guests = 5;
        let err = validate(&config(), &selections).unwrap_err();
        assert_eq!(err.field_names(), vec!["guests"]);
    }

    #[test]
    fn disallowed_rental_type_is_rejected() {
        let mut selections = selections();
        selections.rental_type = RentalType::OwnerOnboard;
        let err = validate(&config(), &selections).unwrap_err();
        assert_eq!(err.field_names(), vec!["rental_type"]);
    }

    #[test]
    fn empty_allowed_list_accepts_any_rental_type() {
        let mut config = config();
        config.allowed_rental_types.clear();
        let mut selections = selections();
        selections.rental_type = RentalType::OwnerOnboard;
        assert!(validate(&config, &selections).is_ok());
    }

    #[test]
    fn unacknowledged_confirmation_blocks() {
        let mut selections = selections();
        selections.confirmed = false;
        let err = validate(&config(), &selections).unwrap_err();
        assert_eq!(err.field_names(), vec!["confirmed"]);
    }

    #[test]
    fn phone_pattern_cases() {
        assert!(is_valid_phone("+33 6 12 34 56 78"));
        assert!(is_valid_phone("(06) 12-34-56"));
        assert!(is_valid_phone("061234"));
        assert!(!is_valid_phone("12345")); // too few digits
        assert!(!is_valid_phone("06 12 34 +")); // + only allowed in front
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone(""));
    }
}
