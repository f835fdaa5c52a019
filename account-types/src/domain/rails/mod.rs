//! Leaf payload variants, grouped by the layer they extend.

pub mod bank;
pub mod base;
pub mod country_based;
pub mod crypto;
pub mod ifsc;

pub use bank::*;
pub use base::*;
pub use country_based::*;
pub use crypto::*;
pub use ifsc::*;

use payment_rails::PaymentRail;

use crate::error::ValidationFailure;
use crate::domain::layers::{HOLDER_NAME_MAX_LENGTH, HOLDER_NAME_MIN_LENGTH};
use crate::validation::{validate_code_list, validate_currency_code, validate_required_text};

pub(crate) const ADDRESS_MIN_LENGTH: usize = 5;
pub(crate) const ADDRESS_MAX_LENGTH: usize = 200;
pub(crate) const TEXT_MAX_LENGTH: usize = 100;
pub(crate) const EXTRA_INFO_MAX_LENGTH: usize = 300;

pub(crate) fn validate_holder_name(value: &str) -> Result<(), ValidationFailure> {
    validate_required_text(
        "holder_name",
        value,
        HOLDER_NAME_MIN_LENGTH,
        HOLDER_NAME_MAX_LENGTH,
    )
}

/// Every selected code must be a currency the rail supports.
pub(crate) fn check_selected_currencies(
    rail: PaymentRail,
    codes: &[String],
) -> Result<(), ValidationFailure> {
    validate_code_list("selected_currency_codes", codes, validate_currency_code)?;
    match codes.iter().find(|code| !rail.supports_currency(code)) {
        Some(code) => Err(ValidationFailure::unsupported(
            "selected_currency_codes",
            code,
        )),
        None => Ok(()),
    }
}

pub(crate) fn check_selected_currency(
    rail: PaymentRail,
    code: &str,
) -> Result<(), ValidationFailure> {
    validate_currency_code("selected_currency_code", code)?;
    if !rail.supports_currency(code) {
        return Err(ValidationFailure::unsupported("selected_currency_code", code));
    }
    Ok(())
}

/// Fixed-length numeric identifiers such as sort codes.
pub(crate) fn validate_digits(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationFailure::format(field, "number"));
    }
    if value.len() < min || value.len() > max {
        return Err(ValidationFailure::length(field, min, max, value.len()));
    }
    Ok(())
}
