//! Leaves that extend the bank account layer.
//!
//! Bank leaves differ only in a few optional free-text fields, so they are
//! declared through `define_bank_variants!`.

use serde::Serialize;

use super::{ADDRESS_MAX_LENGTH, ADDRESS_MIN_LENGTH, EXTRA_INFO_MAX_LENGTH};
use crate::canonical::{EncodeMode, normalize};
use crate::domain::layers::{BankAccountDetails, BankAccountFields};
use crate::domain::payload::PayloadVariant;
use crate::error::ValidationFailure;
use crate::validation::validate_optional_text;
use crate::wire;

/// Macro to define bank leaves with their optional extra fields.
///
/// # Syntax
/// ```ignore
/// define_bank_variants! {
///     /// Docs
///     Variant(ProtoMessage) { field: (min, max), ... },
/// }
/// ```
macro_rules! define_bank_variants {
    (
        $(
            $(#[$meta:meta])*
            $name:ident($proto:path) {
                $($field:ident: ($min:expr, $max:expr)),* $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
            pub struct $name {
                #[serde(flatten)]
                bank: BankAccountFields,
                $($field: Option<String>,)*
            }

            impl $name {
                pub fn new(
                    bank: BankAccountFields,
                    $($field: Option<String>,)*
                ) -> Result<Self, ValidationFailure> {
                    let payload = Self {
                        bank,
                        $($field: normalize($field),)*
                    };
                    payload.verify()?;
                    Ok(payload)
                }

                pub fn country(&self) -> &str {
                    self.bank.country()
                }

                pub fn details(&self) -> &BankAccountDetails {
                    self.bank.details()
                }

                $(
                    pub fn $field(&self) -> Option<&str> {
                        self.$field.as_deref()
                    }
                )*

                /// New payload with the same identity, country and extra fields but
                /// replaced bank details. Validated like a freshly built payload.
                pub fn with_bank_details(
                    &self,
                    details: BankAccountDetails,
                ) -> Result<Self, ValidationFailure> {
                    let payload = Self {
                        bank: self.bank.with_details(details),
                        $($field: self.$field.clone(),)*
                    };
                    payload.verify()?;
                    Ok(payload)
                }
            }

            impl PayloadVariant for $name {
                type Layer = BankAccountFields;
                type Proto = $proto;

                fn layer(&self) -> &BankAccountFields {
                    &self.bank
                }

                fn verify_fields(&self) -> Result<(), ValidationFailure> {
                    $(
                        validate_optional_text(
                            stringify!($field),
                            self.$field.as_deref(),
                            $min,
                            $max,
                        )?;
                    )*
                    Ok(())
                }

                fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
                    $proto {
                        $($field: self.$field.clone(),)*
                    }
                }

                fn from_proto(
                    bank: BankAccountFields,
                    #[allow(unused_variables)] proto: Self::Proto,
                ) -> Result<Self, ValidationFailure> {
                    Self::new(bank, $(proto.$field,)*)
                }

                fn fingerprint_data(&self) -> Vec<&str> {
                    self.bank.fingerprint_fields()
                }

                fn trade_currency_codes(&self) -> Vec<String> {
                    vec![self.bank.details().selected_currency_code.clone()]
                }
            }
        )*
    };
}

define_bank_variants! {
    /// Transfer between accounts at any bank within one country.
    NationalBank(wire::NationalBankAccountPayload) {},

    /// Transfer between accounts held at the same bank.
    SameBank(wire::SameBankAccountPayload) {},

    /// Cash paid in at a bank branch.
    CashDeposit(wire::CashDepositAccountPayload) {
        requirements: (1, EXTRA_INFO_MAX_LENGTH),
    },

    AchTransfer(wire::AchTransferAccountPayload) {
        holder_address: (ADDRESS_MIN_LENGTH, ADDRESS_MAX_LENGTH),
    },

    DomesticWireTransfer(wire::DomesticWireTransferAccountPayload) {
        holder_address: (ADDRESS_MIN_LENGTH, ADDRESS_MAX_LENGTH),
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layers::BankAccountType;
    use crate::domain::payload::{PayloadCore, PayloadLayer};
    use crate::error::Constraint;

    fn us_details() -> BankAccountDetails {
        BankAccountDetails {
            selected_currency_code: "USD".into(),
            holder_name: Some("Jane Doe".into()),
            bank_name: Some("First Bank".into()),
            bank_id: Some("111000025".into()),
            account_nr: "123456789".into(),
            bank_account_type: Some(BankAccountType::Checking),
            ..Default::default()
        }
    }

    fn german_details() -> BankAccountDetails {
        BankAccountDetails {
            selected_currency_code: "EUR".into(),
            holder_name: Some("Max Mustermann".into()),
            bank_name: Some("Sparkasse".into()),
            account_nr: "0532013000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_national_bank_us_requires_bank_id() {
        let details = BankAccountDetails {
            bank_id: None,
            ..us_details()
        };
        let result = NationalBank::new(BankAccountFields::new(PayloadCore::new(), "US", details));
        assert!(matches!(
            result,
            Err(ValidationFailure {
                field: "bank_id",
                constraint: Constraint::Required,
                ..
            })
        ));
    }

    #[test]
    fn test_national_bank_de_without_bank_id() {
        let result =
            NationalBank::new(BankAccountFields::new(PayloadCore::new(), "DE", german_details()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_with_bank_details_keeps_identity() {
        let original = AchTransfer::new(
            BankAccountFields::new(PayloadCore::new(), "US", us_details()),
            Some("1 Main Street".into()),
        )
        .unwrap();
        let updated = original
            .with_bank_details(BankAccountDetails {
                account_nr: "987654321".into(),
                ..us_details()
            })
            .unwrap();

        assert_eq!(updated.layer().core(), original.layer().core());
        assert_eq!(updated.holder_address(), Some("1 Main Street"));
        assert_eq!(updated.details().account_nr, "987654321");
        assert_eq!(original.details().account_nr, "123456789");
    }

    #[test]
    fn test_with_bank_details_revalidates() {
        let original =
            NationalBank::new(BankAccountFields::new(PayloadCore::new(), "US", us_details()))
                .unwrap();
        let result = original.with_bank_details(BankAccountDetails {
            bank_account_type: None,
            ..us_details()
        });
        assert!(matches!(
            result,
            Err(ValidationFailure {
                field: "bank_account_type",
                ..
            })
        ));
    }

    #[test]
    fn test_ach_only_in_us() {
        let result = AchTransfer::new(
            BankAccountFields::new(PayloadCore::new(), "DE", german_details()),
            None,
        );
        assert!(matches!(
            result,
            Err(ValidationFailure {
                field: "country_code",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_holder_address_is_absent() {
        let payload = DomesticWireTransfer::new(
            BankAccountFields::new(PayloadCore::new(), "US", us_details()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(payload.holder_address(), None);
        assert_eq!(payload.to_proto(EncodeMode::Hash).holder_address, None);
    }

    #[test]
    fn test_bank_fingerprint_only_required_fields() {
        let payload = CashDeposit::new(
            BankAccountFields::new(
                PayloadCore::new(),
                "DE",
                BankAccountDetails {
                    bank_id: Some("37040044".into()),
                    ..german_details()
                },
            ),
            Some("Bring ID".into()),
        )
        .unwrap();
        assert_eq!(
            payload.fingerprint(),
            b"CASH_DEPOSITDESparkasse0532013000".to_vec()
        );
        assert_eq!(payload.trade_currency_codes(), vec!["EUR"]);
    }
}
