//! Intermediate payload layers: country-based, bank, IFSC-based and crypto asset.

use payment_rails::{PaymentRail, bank_field_requirements};
use serde::Serialize;

use super::Family;
use super::payload::{DecodedPayload, PayloadCore, PayloadLayer};
use crate::canonical::{EncodeMode, normalize};
use crate::error::{CodecError, ValidationFailure};
use crate::validation::{
    validate_country_code, validate_currency_code, validate_ifsc, validate_optional_text,
    validate_required_text,
};
use crate::wire::{self, VariantEnvelope};

pub const HOLDER_NAME_MIN_LENGTH: usize = 2;
pub const HOLDER_NAME_MAX_LENGTH: usize = 100;
pub const ACCOUNT_NR_MIN_LENGTH: usize = 2;
pub const ACCOUNT_NR_MAX_LENGTH: usize = 50;
const BANK_NAME_MAX_LENGTH: usize = 100;
const BANK_CODE_MAX_LENGTH: usize = 50;
const BRANCH_ID_MAX_LENGTH: usize = 30;
const BANK_ACCOUNT_NR_MAX_LENGTH: usize = 30;
const ADDRESS_MAX_LENGTH: usize = 200;
const MAX_CONFIRMATIONS: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Country based
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryBasedFields {
    #[serde(flatten)]
    core: PayloadCore,
    country_code: String,
}

impl CountryBasedFields {
    pub fn new(core: PayloadCore, country_code: impl Into<String>) -> Self {
        Self {
            core,
            country_code: country_code.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country_code
    }
}

impl PayloadLayer for CountryBasedFields {
    const FAMILY: Family = Family::CountryBased;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn country_code(&self) -> Option<&str> {
        Some(&self.country_code)
    }

    fn verify(&self, rail: PaymentRail) -> Result<(), ValidationFailure> {
        self.core.verify(rail)?;
        validate_country_code("country_code", &self.country_code)?;
        if payment_rails::country(&self.country_code).is_none()
            || !rail.supports_country(&self.country_code)
        {
            return Err(ValidationFailure::unsupported(
                "country_code",
                &self.country_code,
            ));
        }
        Ok(())
    }

    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        mode: EncodeMode,
    ) -> wire::AccountPayload {
        let message = wire::CountryBasedAccountPayload {
            country_code: self.country_code.clone(),
            message: Some(child),
        };
        self.core.wrap(
            rail,
            VariantEnvelope::of(wire::COUNTRY_BASED_TAG, &message),
            mode,
        )
    }

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError> {
        let core = PayloadCore::from_decoded(decoded)?;
        let proto = decoded
            .country_based
            .take()
            .ok_or_else(|| CodecError::mismatch("country_based", "layer missing"))?;
        Ok(Self {
            core,
            country_code: proto.country_code,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bank
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Checking,
    Savings,
}

impl BankAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankAccountType::Checking => "CHECKING",
            BankAccountType::Savings => "SAVINGS",
        }
    }
}

impl std::str::FromStr for BankAccountType {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKING" => Ok(BankAccountType::Checking),
            "SAVINGS" => Ok(BankAccountType::Savings),
            _ => Err(ValidationFailure::unsupported("bank_account_type", s)),
        }
    }
}

/// Bank account data. Which optional fields must be set depends on the country.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BankAccountDetails {
    pub selected_currency_code: String,
    pub holder_name: Option<String>,
    pub holder_id: Option<String>,
    pub bank_name: Option<String>,
    pub bank_id: Option<String>,
    pub branch_id: Option<String>,
    pub account_nr: String,
    pub bank_account_type: Option<BankAccountType>,
    pub national_account_id: Option<String>,
}

impl BankAccountDetails {
    fn normalized(self) -> Self {
        Self {
            holder_name: normalize(self.holder_name),
            holder_id: normalize(self.holder_id),
            bank_name: normalize(self.bank_name),
            bank_id: normalize(self.bank_id),
            branch_id: normalize(self.branch_id),
            national_account_id: normalize(self.national_account_id),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountFields {
    #[serde(flatten)]
    country: CountryBasedFields,
    details: BankAccountDetails,
}

impl BankAccountFields {
    pub fn new(
        core: PayloadCore,
        country_code: impl Into<String>,
        details: BankAccountDetails,
    ) -> Self {
        Self {
            country: CountryBasedFields::new(core, country_code),
            details: details.normalized(),
        }
    }

    pub fn country(&self) -> &str {
        self.country.country()
    }

    pub fn details(&self) -> &BankAccountDetails {
        &self.details
    }

    /// Same identity and country with replaced details. Not yet verified.
    pub(crate) fn with_details(&self, details: BankAccountDetails) -> Self {
        Self {
            country: self.country.clone(),
            details: details.normalized(),
        }
    }

    /// Country code followed by the bank fields the country requires.
    pub(crate) fn fingerprint_fields(&self) -> Vec<&str> {
        let required = bank_field_requirements(self.country());
        let d = &self.details;
        let account_type = if required.account_type {
            d.bank_account_type.map(|t| t.as_str())
        } else {
            None
        };
        [
            Some(self.country()),
            pick(required.bank_name, &d.bank_name),
            pick(required.bank_id, &d.bank_id),
            pick(required.branch_id, &d.branch_id),
            Some(d.account_nr.as_str()),
            account_type,
            pick(required.holder_id, &d.holder_id),
            pick(required.national_account_id, &d.national_account_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn pick(needed: bool, value: &Option<String>) -> Option<&str> {
    if needed { value.as_deref() } else { None }
}

fn check_bank_field(
    field: &'static str,
    value: Option<&str>,
    required: bool,
    min: usize,
    max: usize,
) -> Result<(), ValidationFailure> {
    if required && value.is_none() {
        return Err(ValidationFailure::required(field));
    }
    validate_optional_text(field, value, min, max)
}

impl PayloadLayer for BankAccountFields {
    const FAMILY: Family = Family::Bank;

    fn core(&self) -> &PayloadCore {
        self.country.core()
    }

    fn country_code(&self) -> Option<&str> {
        Some(self.country.country())
    }

    fn verify(&self, rail: PaymentRail) -> Result<(), ValidationFailure> {
        self.country.verify(rail)?;
        let d = &self.details;
        validate_currency_code("selected_currency_code", &d.selected_currency_code)?;
        if !rail.supports_currency(&d.selected_currency_code) {
            return Err(ValidationFailure::unsupported(
                "selected_currency_code",
                &d.selected_currency_code,
            ));
        }

        let required = bank_field_requirements(self.country());
        check_bank_field(
            "holder_name",
            d.holder_name.as_deref(),
            required.holder_name,
            HOLDER_NAME_MIN_LENGTH,
            HOLDER_NAME_MAX_LENGTH,
        )?;
        check_bank_field(
            "holder_id",
            d.holder_id.as_deref(),
            required.holder_id,
            2,
            BANK_CODE_MAX_LENGTH,
        )?;
        check_bank_field(
            "bank_name",
            d.bank_name.as_deref(),
            required.bank_name,
            2,
            BANK_NAME_MAX_LENGTH,
        )?;
        check_bank_field(
            "bank_id",
            d.bank_id.as_deref(),
            required.bank_id,
            1,
            BANK_CODE_MAX_LENGTH,
        )?;
        check_bank_field(
            "branch_id",
            d.branch_id.as_deref(),
            required.branch_id,
            1,
            BRANCH_ID_MAX_LENGTH,
        )?;
        validate_required_text(
            "account_nr",
            &d.account_nr,
            ACCOUNT_NR_MIN_LENGTH,
            BANK_ACCOUNT_NR_MAX_LENGTH,
        )?;
        if required.account_type && d.bank_account_type.is_none() {
            return Err(ValidationFailure::required("bank_account_type"));
        }
        check_bank_field(
            "national_account_id",
            d.national_account_id.as_deref(),
            required.national_account_id,
            1,
            BANK_CODE_MAX_LENGTH,
        )
    }

    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        mode: EncodeMode,
    ) -> wire::AccountPayload {
        let d = &self.details;
        let message = wire::BankAccountPayload {
            selected_currency_code: d.selected_currency_code.clone(),
            holder_name: d.holder_name.clone(),
            holder_id: d.holder_id.clone(),
            bank_name: d.bank_name.clone(),
            bank_id: d.bank_id.clone(),
            branch_id: d.branch_id.clone(),
            account_nr: d.account_nr.clone(),
            bank_account_type: d.bank_account_type.map(|t| t.as_str().to_string()),
            national_account_id: d.national_account_id.clone(),
            message: Some(child),
        };
        self.country
            .wrap(rail, VariantEnvelope::of(wire::BANK_TAG, &message), mode)
    }

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError> {
        let country = CountryBasedFields::from_decoded(decoded)?;
        let proto = decoded
            .bank
            .take()
            .ok_or_else(|| CodecError::mismatch("bank", "layer missing"))?;
        let bank_account_type = normalize(proto.bank_account_type)
            .map(|t| t.parse::<BankAccountType>())
            .transpose()?;
        let details = BankAccountDetails {
            selected_currency_code: proto.selected_currency_code,
            holder_name: proto.holder_name,
            holder_id: proto.holder_id,
            bank_name: proto.bank_name,
            bank_id: proto.bank_id,
            branch_id: proto.branch_id,
            account_nr: proto.account_nr,
            bank_account_type,
            national_account_id: proto.national_account_id,
        };
        Ok(Self {
            country,
            details: details.normalized(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IFSC based
// ─────────────────────────────────────────────────────────────────────────────

/// Indian bank transfer fields. The country is always `IN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfscBasedFields {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
    account_nr: String,
    ifsc: String,
}

impl IfscBasedFields {
    pub const COUNTRY_CODE: &'static str = "IN";

    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        account_nr: impl Into<String>,
        ifsc: impl Into<String>,
    ) -> Self {
        Self {
            country: CountryBasedFields::new(core, Self::COUNTRY_CODE),
            holder_name: holder_name.into(),
            account_nr: account_nr.into(),
            ifsc: ifsc.into(),
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_nr(&self) -> &str {
        &self.account_nr
    }

    pub fn ifsc(&self) -> &str {
        &self.ifsc
    }
}

impl PayloadLayer for IfscBasedFields {
    const FAMILY: Family = Family::IfscBased;

    fn core(&self) -> &PayloadCore {
        self.country.core()
    }

    fn country_code(&self) -> Option<&str> {
        Some(self.country.country())
    }

    fn verify(&self, rail: PaymentRail) -> Result<(), ValidationFailure> {
        self.country.verify(rail)?;
        if self.country.country() != Self::COUNTRY_CODE {
            return Err(ValidationFailure::mismatch(
                "country_code",
                "IFSC accounts must be in IN",
            )
            .with_value(self.country.country()));
        }
        validate_required_text(
            "holder_name",
            &self.holder_name,
            HOLDER_NAME_MIN_LENGTH,
            HOLDER_NAME_MAX_LENGTH,
        )?;
        validate_required_text(
            "account_nr",
            &self.account_nr,
            ACCOUNT_NR_MIN_LENGTH,
            ACCOUNT_NR_MAX_LENGTH,
        )?;
        validate_ifsc("ifsc", &self.ifsc)
    }

    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        mode: EncodeMode,
    ) -> wire::AccountPayload {
        let message = wire::IfscBasedAccountPayload {
            holder_name: self.holder_name.clone(),
            account_nr: self.account_nr.clone(),
            ifsc: self.ifsc.clone(),
            message: Some(child),
        };
        self.country.wrap(
            rail,
            VariantEnvelope::of(wire::IFSC_BASED_TAG, &message),
            mode,
        )
    }

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError> {
        let country = CountryBasedFields::from_decoded(decoded)?;
        let proto = decoded
            .ifsc
            .take()
            .ok_or_else(|| CodecError::mismatch("ifsc_based", "layer missing"))?;
        Ok(Self {
            country,
            holder_name: proto.holder_name,
            account_nr: proto.account_nr,
            ifsc: proto.ifsc,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crypto asset
// ─────────────────────────────────────────────────────────────────────────────

/// Automatic trade confirmation settings. All three values travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoConf {
    pub num_confirmations: u32,
    pub max_trade_amount: u64,
    pub explorer_urls: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptoAssetFields {
    #[serde(flatten)]
    core: PayloadCore,
    currency_code: String,
    address: String,
    is_instant: bool,
    auto_conf: Option<AutoConf>,
}

impl CryptoAssetFields {
    pub fn new(
        core: PayloadCore,
        currency_code: impl Into<String>,
        address: impl Into<String>,
        is_instant: bool,
        auto_conf: Option<AutoConf>,
    ) -> Self {
        Self {
            core,
            currency_code: currency_code.into(),
            address: address.into(),
            is_instant,
            auto_conf,
        }
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_instant(&self) -> bool {
        self.is_instant
    }

    pub fn auto_conf(&self) -> Option<&AutoConf> {
        self.auto_conf.as_ref()
    }
}

impl PayloadLayer for CryptoAssetFields {
    const FAMILY: Family = Family::CryptoAsset;

    fn core(&self) -> &PayloadCore {
        &self.core
    }

    fn verify(&self, rail: PaymentRail) -> Result<(), ValidationFailure> {
        self.core.verify(rail)?;
        validate_currency_code("currency_code", &self.currency_code)?;
        if !rail.supports_currency(&self.currency_code) {
            return Err(ValidationFailure::unsupported(
                "currency_code",
                &self.currency_code,
            ));
        }
        validate_required_text("address", &self.address, 1, ADDRESS_MAX_LENGTH)?;
        if let Some(auto_conf) = &self.auto_conf {
            if auto_conf.num_confirmations == 0 || auto_conf.num_confirmations > MAX_CONFIRMATIONS
            {
                return Err(ValidationFailure::format(
                    "auto_conf_num_confirmations",
                    "confirmation count",
                ));
            }
            if auto_conf.max_trade_amount == 0 {
                return Err(ValidationFailure::format(
                    "auto_conf_max_trade_amount",
                    "positive amount",
                ));
            }
            validate_required_text(
                "auto_conf_explorer_urls",
                &auto_conf.explorer_urls,
                1,
                ADDRESS_MAX_LENGTH,
            )?;
        }
        Ok(())
    }

    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        mode: EncodeMode,
    ) -> wire::AccountPayload {
        let auto_conf = self.auto_conf.as_ref();
        let message = wire::CryptoAssetAccountPayload {
            currency_code: self.currency_code.clone(),
            address: self.address.clone(),
            is_instant: self.is_instant,
            auto_conf_num_confirmations: auto_conf.map(|a| a.num_confirmations),
            auto_conf_max_trade_amount: auto_conf.map(|a| a.max_trade_amount),
            auto_conf_explorer_urls: auto_conf.map(|a| a.explorer_urls.clone()),
            message: Some(child),
        };
        self.core.wrap(
            rail,
            VariantEnvelope::of(wire::CRYPTO_ASSET_TAG, &message),
            mode,
        )
    }

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError> {
        let core = PayloadCore::from_decoded(decoded)?;
        let proto = decoded
            .crypto
            .take()
            .ok_or_else(|| CodecError::mismatch("crypto_asset", "layer missing"))?;
        let auto_conf = match (
            proto.auto_conf_num_confirmations,
            proto.auto_conf_max_trade_amount,
            normalize(proto.auto_conf_explorer_urls),
        ) {
            (Some(num_confirmations), Some(max_trade_amount), Some(explorer_urls)) => {
                Some(AutoConf {
                    num_confirmations,
                    max_trade_amount,
                    explorer_urls,
                })
            }
            (None, None, None) => None,
            _ => {
                return Err(ValidationFailure::coupled(
                    "auto_conf",
                    "num_confirmations, max_trade_amount and explorer_urls",
                )
                .into());
            }
        };
        Ok(Self {
            core,
            currency_code: proto.currency_code,
            address: proto.address,
            is_instant: proto.is_instant,
            auto_conf,
        })
    }
}
