//! Domain models for payment accounts.
//!
//! Payloads are composed in layers: every leaf embeds the fields of its
//! family (`PayloadCore`, `CountryBasedFields`, `BankAccountFields`,
//! `IfscBasedFields` or `CryptoAssetFields`) and verifies that layer before
//! its own fields.

pub mod account;
pub mod kind;
pub mod layers;
pub mod payload;
pub mod rails;

pub use account::{Account, AccountId, PaymentMethod};
pub use kind::{AccountKind, AccountPayload, KindedPayload};
pub use layers::{
    AutoConf, BankAccountDetails, BankAccountFields, BankAccountType, CountryBasedFields,
    CryptoAssetFields, IfscBasedFields,
};
pub use payload::{PayloadCore, PayloadLayer, PayloadVariant, SALT_LENGTH};
pub use rails::*;

use serde::Serialize;

use crate::wire;

/// A level of the payload and account hierarchies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    Base,
    CountryBased,
    Bank,
    IfscBased,
    CryptoAsset,
}

impl Family {
    pub fn parent(&self) -> Option<Family> {
        match self {
            Family::Base => None,
            Family::CountryBased | Family::CryptoAsset => Some(Family::Base),
            Family::Bank | Family::IfscBased => Some(Family::CountryBased),
        }
    }

    /// Envelope tag of the intermediate layer message.
    pub fn tag(&self) -> Option<u32> {
        match self {
            Family::Base => None,
            Family::CountryBased => Some(wire::COUNTRY_BASED_TAG),
            Family::Bank => Some(wire::BANK_TAG),
            Family::IfscBased => Some(wire::IFSC_BASED_TAG),
            Family::CryptoAsset => Some(wire::CRYPTO_ASSET_TAG),
        }
    }

    pub fn from_tag(tag: u32) -> Option<Family> {
        match tag {
            wire::COUNTRY_BASED_TAG => Some(Family::CountryBased),
            wire::BANK_TAG => Some(Family::Bank),
            wire::IFSC_BASED_TAG => Some(Family::IfscBased),
            wire::CRYPTO_ASSET_TAG => Some(Family::CryptoAsset),
            _ => None,
        }
    }

    /// Whether payloads of this family carry a country.
    pub fn has_country(&self) -> bool {
        matches!(
            self,
            Family::CountryBased | Family::Bank | Family::IfscBased
        )
    }

    pub(crate) fn type_prefix(&self) -> &'static str {
        match self {
            Family::Base => "",
            Family::CountryBased => "CountryBased",
            Family::Bank => "Bank",
            Family::IfscBased => "IfscBased",
            Family::CryptoAsset => "CryptoAsset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tags_round_trip() {
        for family in [
            Family::CountryBased,
            Family::Bank,
            Family::IfscBased,
            Family::CryptoAsset,
        ] {
            let tag = family.tag().unwrap();
            assert_eq!(Family::from_tag(tag), Some(family));
        }
        assert_eq!(Family::Base.tag(), None);
    }

    #[test]
    fn test_family_parents() {
        assert_eq!(Family::Bank.parent(), Some(Family::CountryBased));
        assert_eq!(Family::CryptoAsset.parent(), Some(Family::Base));
        assert_eq!(Family::Base.parent(), None);
    }
}
