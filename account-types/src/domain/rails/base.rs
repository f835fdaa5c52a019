//! Leaves that extend the base payload directly.

use serde::Serialize;

use super::{
    ADDRESS_MAX_LENGTH, ADDRESS_MIN_LENGTH, EXTRA_INFO_MAX_LENGTH, TEXT_MAX_LENGTH,
    check_selected_currencies, validate_digits, validate_holder_name,
};
use crate::canonical::{EncodeMode, code_list, normalize};
use crate::domain::layers::{ACCOUNT_NR_MAX_LENGTH, ACCOUNT_NR_MIN_LENGTH};
use crate::domain::payload::{PayloadCore, PayloadVariant};
use crate::error::ValidationFailure;
use crate::validation::{
    validate_email, validate_email_or_phone, validate_optional_text, validate_phone_number,
    validate_required_text,
};
use crate::wire;

// ── Zelle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zelle {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    email_or_mobile_nr: String,
}

impl Zelle {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            email_or_mobile_nr: email_or_mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn email_or_mobile_nr(&self) -> &str {
        &self.email_or_mobile_nr
    }
}

impl PayloadVariant for Zelle {
    type Layer = PayloadCore;
    type Proto = wire::ZelleAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_email_or_phone("email_or_mobile_nr", &self.email_or_mobile_nr, Some("US"))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::ZelleAccountPayload {
            holder_name: self.holder_name.clone(),
            email_or_mobile_nr: self.email_or_mobile_nr.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.holder_name, proto.email_or_mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.email_or_mobile_nr]
    }
}

// ── US postal money order ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsPostalMoneyOrder {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    postal_address: String,
}

impl UsPostalMoneyOrder {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        postal_address: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            postal_address: postal_address.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn postal_address(&self) -> &str {
        &self.postal_address
    }
}

impl PayloadVariant for UsPostalMoneyOrder {
    type Layer = PayloadCore;
    type Proto = wire::UsPostalMoneyOrderAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text(
            "postal_address",
            &self.postal_address,
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::UsPostalMoneyOrderAccountPayload {
            holder_name: self.holder_name.clone(),
            postal_address: self.postal_address.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.holder_name, proto.postal_address)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.holder_name, &self.postal_address]
    }
}

// ── PayID ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayId {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    pay_id: String,
}

impl PayId {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        pay_id: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            pay_id: pay_id.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn pay_id(&self) -> &str {
        &self.pay_id
    }
}

impl PayloadVariant for PayId {
    type Layer = PayloadCore;
    type Proto = wire::PayIdAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("pay_id", &self.pay_id, 2, TEXT_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::PayIdAccountPayload {
            holder_name: self.holder_name.clone(),
            pay_id: self.pay_id.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.holder_name, proto.pay_id)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.pay_id, &self.holder_name]
    }
}

// ── Interac e-Transfer ──────────────────────────────────────────────────────

const SECRET_MAX_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteracETransfer {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    email: String,
    question: String,
    answer: String,
}

impl InteracETransfer {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            email: email.into(),
            question: question.into(),
            answer: answer.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

impl PayloadVariant for InteracETransfer {
    type Layer = PayloadCore;
    type Proto = wire::InteracETransferAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_email("email", &self.email)?;
        validate_required_text("question", &self.question, 1, SECRET_MAX_LENGTH)?;
        validate_required_text("answer", &self.answer, 1, SECRET_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::InteracETransferAccountPayload {
            holder_name: self.holder_name.clone(),
            email: self.email.clone(),
            question: self.question.clone(),
            answer: self.answer.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(
            core,
            proto.holder_name,
            proto.email,
            proto.question,
            proto.answer,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.email, &self.question, &self.answer]
    }
}

// ── HalCash ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalCash {
    #[serde(flatten)]
    core: PayloadCore,
    mobile_nr: String,
}

impl HalCash {
    pub fn new(core: PayloadCore, mobile_nr: impl Into<String>) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            mobile_nr: mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn mobile_nr(&self) -> &str {
        &self.mobile_nr
    }
}

impl PayloadVariant for HalCash {
    type Layer = PayloadCore;
    type Proto = wire::HalCashAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_phone_number("mobile_nr", &self.mobile_nr, Some("ES"))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::HalCashAccountPayload {
            mobile_nr: self.mobile_nr.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.mobile_nr]
    }
}

// ── Faster Payments ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FasterPayments {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    sort_code: String,
    account_nr: String,
}

impl FasterPayments {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        sort_code: impl Into<String>,
        account_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            sort_code: sort_code.into(),
            account_nr: account_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn sort_code(&self) -> &str {
        &self.sort_code
    }

    pub fn account_nr(&self) -> &str {
        &self.account_nr
    }
}

impl PayloadVariant for FasterPayments {
    type Layer = PayloadCore;
    type Proto = wire::FasterPaymentsAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_digits("sort_code", &self.sort_code, 6, 6)?;
        validate_digits("account_nr", &self.account_nr, 8, 8)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::FasterPaymentsAccountPayload {
            holder_name: self.holder_name.clone(),
            sort_code: self.sort_code.clone(),
            account_nr: self.account_nr.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.holder_name, proto.sort_code, proto.account_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.sort_code, &self.account_nr]
    }
}

// ── SBP ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sbp {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    mobile_number: String,
    bank_name: String,
}

impl Sbp {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        mobile_number: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            mobile_number: mobile_number.into(),
            bank_name: bank_name.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }
}

impl PayloadVariant for Sbp {
    type Layer = PayloadCore;
    type Proto = wire::SbpAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_phone_number("mobile_number", &self.mobile_number, Some("RU"))?;
        validate_required_text("bank_name", &self.bank_name, 2, TEXT_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::SbpAccountPayload {
            holder_name: self.holder_name.clone(),
            mobile_number: self.mobile_number.clone(),
            bank_name: self.bank_name.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.holder_name, proto.mobile_number, proto.bank_name)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.mobile_number, &self.bank_name]
    }
}

// ── Cash by mail ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashByMail {
    #[serde(flatten)]
    core: PayloadCore,
    postal_address: String,
    contact_info: String,
    extra_info: Option<String>,
}

impl CashByMail {
    pub fn new(
        core: PayloadCore,
        postal_address: impl Into<String>,
        contact_info: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            postal_address: postal_address.into(),
            contact_info: contact_info.into(),
            extra_info: normalize(extra_info),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn postal_address(&self) -> &str {
        &self.postal_address
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref()
    }
}

impl PayloadVariant for CashByMail {
    type Layer = PayloadCore;
    type Proto = wire::CashByMailAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_required_text(
            "postal_address",
            &self.postal_address,
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )?;
        validate_required_text("contact_info", &self.contact_info, 2, TEXT_MAX_LENGTH)?;
        validate_optional_text(
            "extra_info",
            self.extra_info.as_deref(),
            1,
            EXTRA_INFO_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::CashByMailAccountPayload {
            postal_address: self.postal_address.clone(),
            contact_info: self.contact_info.clone(),
            extra_info: self.extra_info.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.postal_address, proto.contact_info, proto.extra_info)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.contact_info, &self.postal_address]
    }
}

// ── Revolut ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revolut {
    #[serde(flatten)]
    core: PayloadCore,
    user_name: String,
    selected_currency_codes: Vec<String>,
}

impl Revolut {
    pub fn new(
        core: PayloadCore,
        user_name: impl Into<String>,
        selected_currency_codes: Vec<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            user_name: user_name.into(),
            selected_currency_codes,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn selected_currency_codes(&self) -> &[String] {
        &self.selected_currency_codes
    }
}

impl PayloadVariant for Revolut {
    type Layer = PayloadCore;
    type Proto = wire::RevolutAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_required_text("user_name", &self.user_name, 3, TEXT_MAX_LENGTH)?;
        check_selected_currencies(Self::rail(), &self.selected_currency_codes)
    }

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
        wire::RevolutAccountPayload {
            user_name: self.user_name.clone(),
            selected_currency_codes: code_list(&self.selected_currency_codes, mode),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.user_name, proto.selected_currency_codes)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.user_name]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        self.selected_currency_codes.clone()
    }
}

// ── Uphold ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uphold {
    #[serde(flatten)]
    core: PayloadCore,
    holder_name: String,
    account_id: String,
    selected_currency_codes: Vec<String>,
}

impl Uphold {
    pub fn new(
        core: PayloadCore,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
        selected_currency_codes: Vec<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            holder_name: holder_name.into(),
            account_id: account_id.into(),
            selected_currency_codes,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn selected_currency_codes(&self) -> &[String] {
        &self.selected_currency_codes
    }
}

impl PayloadVariant for Uphold {
    type Layer = PayloadCore;
    type Proto = wire::UpholdAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("account_id", &self.account_id, 2, TEXT_MAX_LENGTH)?;
        check_selected_currencies(Self::rail(), &self.selected_currency_codes)
    }

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
        wire::UpholdAccountPayload {
            holder_name: self.holder_name.clone(),
            account_id: self.account_id.clone(),
            selected_currency_codes: code_list(&self.selected_currency_codes, mode),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(
            core,
            proto.holder_name,
            proto.account_id,
            proto.selected_currency_codes,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.account_id]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        self.selected_currency_codes.clone()
    }
}

// ── Pin 4 ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pin4 {
    #[serde(flatten)]
    core: PayloadCore,
    mobile_nr: String,
}

impl Pin4 {
    pub const COUNTRY_CODE: &'static str = "PL";

    pub fn new(core: PayloadCore, mobile_nr: impl Into<String>) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            mobile_nr: mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn mobile_nr(&self) -> &str {
        &self.mobile_nr
    }
}

impl PayloadVariant for Pin4 {
    type Layer = PayloadCore;
    type Proto = wire::Pin4AccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_phone_number("mobile_nr", &self.mobile_nr, Some(Self::COUNTRY_CODE))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::Pin4AccountPayload {
            mobile_nr: self.mobile_nr.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![Self::COUNTRY_CODE, &self.mobile_nr]
    }
}

// ── User defined ────────────────────────────────────────────────────────────

const ACCOUNT_DATA_MAX_LENGTH: usize = 1000;

/// Free-form account description for rails without a dedicated variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDefinedFiat {
    #[serde(flatten)]
    core: PayloadCore,
    account_data: String,
}

impl UserDefinedFiat {
    pub fn new(
        core: PayloadCore,
        account_data: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            account_data: account_data.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn account_data(&self) -> &str {
        &self.account_data
    }
}

impl PayloadVariant for UserDefinedFiat {
    type Layer = PayloadCore;
    type Proto = wire::UserDefinedFiatAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_required_text("account_data", &self.account_data, 1, ACCOUNT_DATA_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::UserDefinedFiatAccountPayload {
            account_data: self.account_data.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.account_data)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.account_data]
    }
}

// ── Advanced Cash ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedCash {
    #[serde(flatten)]
    core: PayloadCore,
    account_nr: String,
    selected_currency_codes: Vec<String>,
}

impl AdvancedCash {
    pub fn new(
        core: PayloadCore,
        account_nr: impl Into<String>,
        selected_currency_codes: Vec<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            account_nr: account_nr.into(),
            selected_currency_codes,
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn account_nr(&self) -> &str {
        &self.account_nr
    }

    pub fn selected_currency_codes(&self) -> &[String] {
        &self.selected_currency_codes
    }
}

impl PayloadVariant for AdvancedCash {
    type Layer = PayloadCore;
    type Proto = wire::AdvancedCashAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_required_text(
            "account_nr",
            &self.account_nr,
            ACCOUNT_NR_MIN_LENGTH,
            ACCOUNT_NR_MAX_LENGTH,
        )?;
        check_selected_currencies(Self::rail(), &self.selected_currency_codes)
    }

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
        wire::AdvancedCashAccountPayload {
            account_nr: self.account_nr.clone(),
            selected_currency_codes: code_list(&self.selected_currency_codes, mode),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.account_nr, proto.selected_currency_codes)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.account_nr]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        self.selected_currency_codes.clone()
    }
}

// ── Perfect Money ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfectMoney {
    #[serde(flatten)]
    core: PayloadCore,
    account_nr: String,
}

impl PerfectMoney {
    pub fn new(core: PayloadCore, account_nr: impl Into<String>) -> Result<Self, ValidationFailure> {
        let payload = Self {
            core,
            account_nr: account_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn account_nr(&self) -> &str {
        &self.account_nr
    }
}

impl PayloadVariant for PerfectMoney {
    type Layer = PayloadCore;
    type Proto = wire::PerfectMoneyAccountPayload;

    fn layer(&self) -> &PayloadCore {
        &self.core
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_required_text(
            "account_nr",
            &self.account_nr,
            ACCOUNT_NR_MIN_LENGTH,
            ACCOUNT_NR_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::PerfectMoneyAccountPayload {
            account_nr: self.account_nr.clone(),
        }
    }

    fn from_proto(core: PayloadCore, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(core, proto.account_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.account_nr]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountPayload;
    use crate::error::Constraint;

    #[test]
    fn test_zelle_fingerprint() {
        let zelle = Zelle::new(PayloadCore::new(), "Alice", "alice@example.com").unwrap();
        assert_eq!(zelle.fingerprint(), b"CLEAR_X_CHANGEalice@example.com".to_vec());
    }

    #[test]
    fn test_pay_id_fingerprint() {
        let pay_id = PayId::new(PayloadCore::new(), "Alice", "alice$bank").unwrap();
        assert_eq!(pay_id.fingerprint(), b"AUSTRALIA_PAYIDalice$bankAlice".to_vec());
    }

    #[test]
    fn test_pin4_fingerprint_includes_country() {
        let pin4 = Pin4::new(PayloadCore::new(), "+48123456789").unwrap();
        assert_eq!(pin4.fingerprint(), b"PIN_4PL+48123456789".to_vec());
    }

    #[test]
    fn test_faster_payments_requires_six_digit_sort_code() {
        let result = FasterPayments::new(PayloadCore::new(), "Alice", "12345", "12345678");
        assert!(matches!(
            result,
            Err(ValidationFailure {
                field: "sort_code",
                ..
            })
        ));
    }

    #[test]
    fn test_cash_by_mail_normalizes_extra_info() {
        let payload = CashByMail::new(
            PayloadCore::new(),
            "123 Main St",
            "Alice",
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(payload.extra_info(), None);
        assert_eq!(payload.fingerprint(), b"CASH_BY_MAILAlice123 Main St".to_vec());
    }

    #[test]
    fn test_revolut_rejects_unsupported_currency() {
        let result = Revolut::new(PayloadCore::new(), "alice", vec!["KZT".into()]);
        assert!(matches!(
            result,
            Err(ValidationFailure {
                constraint: Constraint::Unsupported(_),
                ..
            })
        ));
    }

    #[test]
    fn test_revolut_trade_currencies_are_selected_codes() {
        let revolut =
            Revolut::new(PayloadCore::new(), "alice", vec!["EUR".into(), "GBP".into()]).unwrap();
        let payload = AccountPayload::from(revolut);
        assert_eq!(payload.trade_currency_codes(), vec!["EUR", "GBP"]);
        assert_eq!(payload.currency_code(), None);
    }

    #[test]
    fn test_single_currency_rail() {
        let zelle = Zelle::new(PayloadCore::new(), "Alice", "alice@example.com").unwrap();
        assert_eq!(AccountPayload::from(zelle).currency_code().as_deref(), Some("USD"));
    }

    #[test]
    fn test_hal_cash_rejects_foreign_number() {
        let result = HalCash::new(PayloadCore::new(), "+46701234567");
        assert!(result.is_err());
    }
}
