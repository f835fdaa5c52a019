//! Account domain model.

use chrono::{DateTime, SubsecRound, Utc};
use payment_rails::{Country, PaymentRail};
use serde::Serialize;
use uuid::Uuid;

use super::Family;
use super::kind::{AccountKind, AccountPayload};
use crate::error::ValidationFailure;
use crate::registry::registry;
use crate::validation::{validate_id, validate_required_text};

pub const ACCOUNT_NAME_MIN_LENGTH: usize = 1;
pub const ACCOUNT_NAME_MAX_LENGTH: usize = 100;

/// Unique identifier for an Account.
///
/// New accounts get a UUID; decoded accounts keep whatever id they were stored with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new random AccountId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_id(s)?;
        Ok(Self(s.to_string()))
    }
}

/// The rail an account pays through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaymentMethod {
    rail: PaymentRail,
}

impl PaymentMethod {
    pub fn new(rail: PaymentRail) -> Self {
        Self { rail }
    }

    pub fn rail(&self) -> PaymentRail {
        self.rail
    }

    pub fn name(&self) -> &'static str {
        self.rail.name()
    }
}

/// A named, dated payment account wrapping one payload.
///
/// Payment method and country are derived from the payload when the account
/// is built, and checked against it again on every verify.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    creation_date: DateTime<Utc>,
    account_name: String,
    payment_method: PaymentMethod,
    country: Option<&'static Country>,
    payload: AccountPayload,
}

/// Account metadata read from the wire before the payload is attached.
#[derive(Debug, Clone)]
pub(crate) struct AccountParts {
    pub(crate) id: AccountId,
    pub(crate) creation_date: DateTime<Utc>,
    pub(crate) account_name: String,
}

impl Account {
    /// Creates a new account dated now.
    ///
    /// # Validation
    /// - Account name must be 1-100 characters
    /// - The payload must verify
    pub fn new(
        account_name: impl Into<String>,
        payload: AccountPayload,
    ) -> Result<Self, ValidationFailure> {
        Self::from_parts(AccountId::new(), Utc::now(), account_name, payload)
    }

    /// Creates an account with all fields specified (for reconstruction).
    /// The creation date is truncated to milliseconds, the wire precision.
    pub fn from_parts(
        id: AccountId,
        creation_date: DateTime<Utc>,
        account_name: impl Into<String>,
        payload: AccountPayload,
    ) -> Result<Self, ValidationFailure> {
        let country = match payload.country_code() {
            Some(code) => Some(
                payment_rails::country(code)
                    .ok_or_else(|| ValidationFailure::unsupported("country_code", code))?,
            ),
            None => None,
        };
        let account = Self {
            id,
            creation_date: creation_date.trunc_subsecs(3),
            account_name: account_name.into(),
            payment_method: PaymentMethod::new(payload.rail()),
            country,
            payload,
        };
        account.verify()?;
        Ok(account)
    }

    pub(crate) fn from_wire_parts(
        parts: AccountParts,
        payload: AccountPayload,
    ) -> Result<Self, ValidationFailure> {
        Self::from_parts(parts.id, parts.creation_date, parts.account_name, payload)
    }

    /// Runs the registered account validator for this account's kind.
    pub fn verify(&self) -> Result<(), ValidationFailure> {
        registry().validate_account(self)
    }

    /// Account-level checks. The payload is verified separately by the registry.
    pub(crate) fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_id(self.id.as_str())?;
        validate_required_text(
            "account_name",
            &self.account_name,
            ACCOUNT_NAME_MIN_LENGTH,
            ACCOUNT_NAME_MAX_LENGTH,
        )?;
        if self.payment_method.rail() != self.payload.rail() {
            return Err(ValidationFailure::mismatch(
                "payment_method",
                format!("payload belongs to {}", self.payload.rail()),
            )
            .with_value(self.payment_method.name()));
        }
        let country_code = self.country.map(|country| country.code);
        if country_code != self.payload.country_code() {
            return Err(ValidationFailure::mismatch(
                "country",
                "account and payload countries differ",
            ));
        }
        let expects_country = matches!(
            self.family(),
            Family::CountryBased | Family::Bank | Family::IfscBased
        );
        if expects_country != self.country.is_some() {
            return Err(ValidationFailure::mismatch(
                "country",
                format!("country presence does not fit {:?} accounts", self.family()),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn country(&self) -> Option<&'static Country> {
        self.country
    }

    pub fn payload(&self) -> &AccountPayload {
        &self.payload
    }

    pub fn kind(&self) -> AccountKind {
        self.payload.kind()
    }

    pub fn family(&self) -> Family {
        self.payload.family()
    }

    pub fn trade_currency_codes(&self) -> Vec<String> {
        self.payload.trade_currency_codes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryBasedFields, PayloadCore, Strike, Zelle};
    use crate::error::Constraint;
    use chrono::{TimeZone, Timelike};

    fn zelle() -> AccountPayload {
        Zelle::new(PayloadCore::new(), "Alice", "alice@example.com")
            .unwrap()
            .into()
    }

    #[test]
    fn test_account_creation() {
        let account = Account::new("My Zelle", zelle()).unwrap();
        assert_eq!(account.account_name(), "My Zelle");
        assert_eq!(account.payment_method().name(), "ZELLE");
        assert_eq!(account.kind(), AccountKind::Zelle);
        assert!(account.country().is_none());
        assert_eq!(account.trade_currency_codes(), vec!["USD"]);
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Account::new("", zelle());
        assert!(matches!(
            result,
            Err(ValidationFailure {
                field: "account_name",
                constraint: Constraint::Required,
                ..
            })
        ));
    }

    #[test]
    fn test_long_name_fails() {
        let result = Account::new("x".repeat(101), zelle());
        assert!(matches!(
            result,
            Err(ValidationFailure {
                constraint: Constraint::Length { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_country_derived_from_payload() {
        let strike = Strike::new(CountryBasedFields::new(PayloadCore::new(), "US"), "Alice")
            .unwrap();
        let account = Account::new("Strike", strike.into()).unwrap();
        assert_eq!(account.country().map(|c| c.code), Some("US"));
        assert_eq!(account.family(), Family::CountryBased);
    }

    #[test]
    fn test_creation_date_truncated_to_millis() {
        let date = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let account =
            Account::from_parts(AccountId::from("acct-1"), date, "Zelle", zelle()).unwrap();
        assert_eq!(account.creation_date().nanosecond(), 123_000_000);
        assert_eq!(account.id().as_str(), "acct-1");
    }

    #[test]
    fn test_account_id_parse() {
        assert!("acct-1".parse::<AccountId>().is_ok());
        assert!("".parse::<AccountId>().is_err());
    }
}
