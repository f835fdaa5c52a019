//! Error types for account construction and the wire codec.

use std::fmt;

use crate::domain::Family;

/// The rule a field broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Constraint {
    #[error("value is required")]
    Required,

    #[error("length {actual} is outside {min}..={max}")]
    Length { min: usize, max: usize, actual: usize },

    #[error("not a valid {0}")]
    Format(&'static str),

    #[error("{0} is not supported")]
    Unsupported(String),

    #[error("{0} is listed more than once")]
    Duplicate(String),

    #[error("must be set together with {0}")]
    CoupledWith(&'static str),

    #[error("{0}")]
    Mismatch(String),
}

/// A field failed validation while a payload or account was being built.
///
/// Free-text values are never echoed back; `value` only carries codes
/// (country, currency, rail names) that are safe to log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {constraint}")]
pub struct ValidationFailure {
    pub field: &'static str,
    pub constraint: Constraint,
    pub value: Option<String>,
}

impl ValidationFailure {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::Required,
            value: None,
        }
    }

    pub fn length(field: &'static str, min: usize, max: usize, actual: usize) -> Self {
        Self {
            field,
            constraint: Constraint::Length { min, max, actual },
            value: None,
        }
    }

    pub fn format(field: &'static str, what: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::Format(what),
            value: None,
        }
    }

    pub fn unsupported(field: &'static str, code: &str) -> Self {
        Self {
            field,
            constraint: Constraint::Unsupported(code.to_string()),
            value: Some(code.to_string()),
        }
    }

    pub fn duplicate(field: &'static str, code: &str) -> Self {
        Self {
            field,
            constraint: Constraint::Duplicate(code.to_string()),
            value: Some(code.to_string()),
        }
    }

    pub fn coupled(field: &'static str, other: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::CoupledWith(other),
            value: None,
        }
    }

    pub fn mismatch(field: &'static str, detail: impl Into<String>) -> Self {
        Self {
            field,
            constraint: Constraint::Mismatch(detail.into()),
            value: None,
        }
    }

    /// Attaches a code value that is safe to report.
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

/// Which side of the model a wire message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Account,
    Payload,
}

/// A hierarchy level, e.g. `BankAccountPayload` or `CountryBasedAccount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level {
    pub side: Side,
    pub family: Family,
}

impl Level {
    pub fn account(family: Family) -> Self {
        Self {
            side: Side::Account,
            family,
        }
    }

    pub fn payload(family: Family) -> Self {
        Self {
            side: Side::Payload,
            family,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.side {
            Side::Account => "Account",
            Side::Payload => "AccountPayload",
        };
        write!(f, "{}{}", self.family.type_prefix(), suffix)
    }
}

/// Errors raised while encoding or decoding wire messages.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unknown variant tag {tag} in {level}")]
    UnknownVariant { level: Level, tag: u32 },

    #[error("unresolvable {level}: no variant set")]
    UnresolvableMessage { level: Level },

    #[error("field mismatch on {field}: {detail}")]
    FieldMismatch { field: &'static str, detail: String },

    #[error("malformed wire message: {0}")]
    Malformed(#[from] prost::DecodeError),

    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
}

impl CodecError {
    pub(crate) fn mismatch(field: &'static str, detail: impl Into<String>) -> Self {
        CodecError::FieldMismatch {
            field,
            detail: detail.into(),
        }
    }
}

/// Errors raised while populating the variant registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("variant tag {0} is already registered")]
    DuplicateTag(u32),

    #[error("layer tag {0} is already registered")]
    DuplicateLayer(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_display() {
        let err = ValidationFailure::length("holder_name", 2, 100, 200);
        assert_eq!(
            err.to_string(),
            "invalid holder_name: length 200 is outside 2..=100"
        );
        assert!(err.value.is_none());
    }

    #[test]
    fn test_unsupported_carries_code() {
        let err = ValidationFailure::unsupported("country_code", "XX");
        assert_eq!(err.value.as_deref(), Some("XX"));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::payload(Family::Bank).to_string(), "BankAccountPayload");
        assert_eq!(Level::account(Family::Base).to_string(), "Account");
        assert_eq!(
            Level::account(Family::CountryBased).to_string(),
            "CountryBasedAccount"
        );
    }

    #[test]
    fn test_validation_failure_converts_into_codec_error() {
        let err: CodecError = ValidationFailure::required("iban").into();
        assert!(matches!(err, CodecError::Invalid(_)));
    }
}
