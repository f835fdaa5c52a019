//! Field validators.
//!
//! Pure checks shared by every payload and account type. Each returns the
//! first violation found as a [`ValidationFailure`]; callers chain them with `?`.

use crate::error::ValidationFailure;

pub const ID_MAX_LENGTH: usize = 50;
pub const CODE_MAX_LENGTH: usize = 50;
pub const EMAIL_MIN_LENGTH: usize = 3;
pub const EMAIL_MAX_LENGTH: usize = 100;
const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// Country calling codes for the regions phone numbers are checked against.
const CALLING_CODES: &[(&str, &str)] = &[
    ("AR", "54"),
    ("AU", "61"),
    ("BR", "55"),
    ("CA", "1"),
    ("CN", "86"),
    ("DE", "49"),
    ("ES", "34"),
    ("GB", "44"),
    ("IN", "91"),
    ("IT", "39"),
    ("PL", "48"),
    ("RU", "7"),
    ("SE", "46"),
    ("TH", "66"),
    ("US", "1"),
];

pub fn validate_id(value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required("id"));
    }
    let len = value.chars().count();
    if len > ID_MAX_LENGTH {
        return Err(ValidationFailure::length("id", 1, ID_MAX_LENGTH, len));
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationFailure::format("id", "identifier"));
    }
    Ok(())
}

pub fn validate_required_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationFailure> {
    if value.trim().is_empty() {
        return Err(ValidationFailure::required(field));
    }
    validate_length(field, value, min, max)
}

/// Checks bounds only when a value is present.
pub fn validate_optional_text(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationFailure> {
    match value {
        Some(value) => validate_length(field, value, min, max),
        None => Ok(()),
    }
}

fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationFailure> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationFailure::length(field, min, max, len));
    }
    Ok(())
}

/// Non-empty identifier made of upper-case letters, digits, `_` and `-`.
pub fn validate_code(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    if value.len() > CODE_MAX_LENGTH {
        return Err(ValidationFailure::length(
            field,
            1,
            CODE_MAX_LENGTH,
            value.len(),
        ));
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !valid {
        return Err(ValidationFailure::format(field, "code").with_value(value));
    }
    Ok(())
}

pub fn validate_country_code(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationFailure::format(field, "country code").with_value(value));
    }
    Ok(())
}

pub fn validate_currency_code(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    let valid = (3..=10).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(ValidationFailure::format(field, "currency code").with_value(value));
    }
    Ok(())
}

pub fn validate_email(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    validate_length(field, value, EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH)?;
    if !is_email(value) {
        return Err(ValidationFailure::format(field, "email address"));
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

/// Accepts an optional leading `+`, digits and the separators ` -()`.
///
/// When `region` is known and the number is written in international form,
/// its calling code must belong to that region.
pub fn validate_phone_number(
    field: &'static str,
    value: &str,
    region: Option<&str>,
) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    let (international, rest) = match value.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return Err(ValidationFailure::format(field, "phone number"));
    }
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < PHONE_MIN_DIGITS || digits.len() > PHONE_MAX_DIGITS {
        return Err(ValidationFailure::format(field, "phone number"));
    }
    if international {
        let calling_code = region.and_then(|region| {
            CALLING_CODES
                .iter()
                .find(|(code, _)| *code == region)
                .map(|(_, prefix)| *prefix)
        });
        if let Some(prefix) = calling_code {
            if !digits.starts_with(prefix) {
                return Err(ValidationFailure::format(field, "phone number for region"));
            }
        }
    }
    Ok(())
}

pub fn validate_email_or_phone(
    field: &'static str,
    value: &str,
    region: Option<&str>,
) -> Result<(), ValidationFailure> {
    if value.contains('@') {
        validate_email(field, value)
    } else {
        validate_phone_number(field, value, region)
            .map_err(|_| ValidationFailure::format(field, "email address or phone number"))
    }
}

/// Structure and ISO 7064 mod-97 checksum. Spaces are ignored.
pub fn validate_iban(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    let iban: String = value.chars().filter(|c| *c != ' ').collect();
    let len = iban.len();
    if !(15..=34).contains(&len) {
        return Err(ValidationFailure::length(field, 15, 34, len));
    }
    let bytes = iban.as_bytes();
    let structure_ok = bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if !structure_ok {
        return Err(ValidationFailure::format(field, "IBAN"));
    }

    let rearranged = bytes[4..].iter().chain(bytes[..4].iter());
    let mut remainder: u32 = 0;
    for b in rearranged {
        let value = if b.is_ascii_digit() {
            u32::from(b - b'0')
        } else {
            u32::from(b - b'A') + 10
        };
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }
    if remainder != 1 {
        return Err(ValidationFailure::format(field, "IBAN checksum"));
    }
    Ok(())
}

/// 4 letters bank code, 2 letters country, 2 alphanumerics location, optional 3 branch.
pub fn validate_bic(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    let bytes = value.as_bytes();
    let valid = (bytes.len() == 8 || bytes.len() == 11)
        && bytes[..6].iter().all(u8::is_ascii_uppercase)
        && bytes[6..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if !valid {
        return Err(ValidationFailure::format(field, "BIC"));
    }
    Ok(())
}

/// Indian Financial System Code: 4 letters, `0`, then 6 alphanumerics.
pub fn validate_ifsc(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    let bytes = value.as_bytes();
    let valid = bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4] == b'0'
        && bytes[5..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if !valid {
        return Err(ValidationFailure::format(field, "IFSC"));
    }
    Ok(())
}

pub fn validate_code_list(
    field: &'static str,
    values: &[String],
    validate: fn(&'static str, &str) -> Result<(), ValidationFailure>,
) -> Result<(), ValidationFailure> {
    if values.is_empty() {
        return Err(ValidationFailure::required(field));
    }
    for (i, value) in values.iter().enumerate() {
        validate(field, value)?;
        if values[..i].contains(value) {
            return Err(ValidationFailure::duplicate(field, value));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Constraint;

    #[test]
    fn test_required_text_bounds() {
        assert!(validate_required_text("holder_name", "Alice", 2, 100).is_ok());
        let long = "a".repeat(200);
        let err = validate_required_text("holder_name", &long, 2, 100).unwrap_err();
        assert!(matches!(
            err.constraint,
            Constraint::Length { actual: 200, .. }
        ));
        assert!(matches!(
            validate_required_text("holder_name", "  ", 2, 100),
            Err(ValidationFailure {
                constraint: Constraint::Required,
                ..
            })
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(validate_required_text("holder_name", "Zoë", 3, 3).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text("extra_info", None, 2, 10).is_ok());
        assert!(validate_optional_text("extra_info", Some("x"), 2, 10).is_err());
    }

    #[test]
    fn test_country_code() {
        assert!(validate_country_code("country_code", "DE").is_ok());
        assert!(validate_country_code("country_code", "de").is_err());
        assert!(validate_country_code("country_code", "DEU").is_err());
        let err = validate_country_code("country_code", "d1").unwrap_err();
        assert_eq!(err.value.as_deref(), Some("d1"));
    }

    #[test]
    fn test_currency_code() {
        assert!(validate_currency_code("currency_code", "EUR").is_ok());
        assert!(validate_currency_code("currency_code", "L-BTC").is_ok());
        assert!(validate_currency_code("currency_code", "eu").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("email", "alice@example.com").is_ok());
        assert!(validate_email("email", "alice@example").is_err());
        assert!(validate_email("email", "alice example@x.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
    }

    #[test]
    fn test_phone_number() {
        assert!(validate_phone_number("mobile_nr", "+34 612 345 678", Some("ES")).is_ok());
        assert!(validate_phone_number("mobile_nr", "(555) 123-4567", Some("US")).is_ok());
        assert!(validate_phone_number("mobile_nr", "+34612345678", Some("SE")).is_err());
        assert!(validate_phone_number("mobile_nr", "12345", None).is_err());
        assert!(validate_phone_number("mobile_nr", "+48abc", None).is_err());
    }

    #[test]
    fn test_email_or_phone() {
        assert!(validate_email_or_phone("contact", "alice@example.com", None).is_ok());
        assert!(validate_email_or_phone("contact", "+12025550123", Some("US")).is_ok());
        assert!(validate_email_or_phone("contact", "alice", None).is_err());
    }

    #[test]
    fn test_iban() {
        assert!(validate_iban("iban", "DE89370400440532013000").is_ok());
        assert!(validate_iban("iban", "DE89 3704 0044 0532 0130 00").is_ok());
        assert!(validate_iban("iban", "GB82WEST12345698765432").is_ok());
        assert!(validate_iban("iban", "DE89370400440532013001").is_err());
        assert!(validate_iban("iban", "DE8937").is_err());
    }

    #[test]
    fn test_bic() {
        assert!(validate_bic("bic", "DEUTDEFF").is_ok());
        assert!(validate_bic("bic", "DEUTDEFF500").is_ok());
        assert!(validate_bic("bic", "DEUT").is_err());
        assert!(validate_bic("bic", "deutdeff").is_err());
    }

    #[test]
    fn test_ifsc() {
        assert!(validate_ifsc("ifsc", "SBIN0001234").is_ok());
        assert!(validate_ifsc("ifsc", "SBIN1001234").is_err());
        assert!(validate_ifsc("ifsc", "SBIN000123").is_err());
    }

    #[test]
    fn test_code_list() {
        let codes = vec!["EUR".to_string(), "USD".to_string()];
        assert!(validate_code_list("currencies", &codes, validate_currency_code).is_ok());
        assert!(validate_code_list("currencies", &[], validate_currency_code).is_err());
    }

    #[test]
    fn test_code_list_rejects_repeats() {
        let codes = vec!["EUR".to_string(), "USD".to_string(), "EUR".to_string()];
        let err = validate_code_list("currencies", &codes, validate_currency_code).unwrap_err();
        assert_eq!(err.constraint, Constraint::Duplicate("EUR".into()));
        assert_eq!(err.value.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_code() {
        assert!(validate_code("code", "NATIVE_CHAIN").is_ok());
        assert!(validate_code("code", "").is_err());
        assert!(validate_code("code", "a b").is_err());
    }
}
