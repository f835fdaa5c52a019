//! Leaves that extend the country-based layer.

use payment_rails::{is_state_required, sepa_country_codes};
use serde::Serialize;

use super::{
    ADDRESS_MAX_LENGTH, ADDRESS_MIN_LENGTH, EXTRA_INFO_MAX_LENGTH, TEXT_MAX_LENGTH,
    check_selected_currencies, check_selected_currency, validate_holder_name,
};
use crate::canonical::{EncodeMode, code_list, compact, normalize};
use crate::domain::layers::{
    ACCOUNT_NR_MAX_LENGTH, ACCOUNT_NR_MIN_LENGTH, CountryBasedFields, HOLDER_NAME_MAX_LENGTH,
    HOLDER_NAME_MIN_LENGTH,
};
use crate::domain::payload::PayloadVariant;
use crate::error::ValidationFailure;
use crate::validation::{
    validate_bic, validate_code_list, validate_country_code, validate_email,
    validate_email_or_phone, validate_iban, validate_optional_text, validate_phone_number,
    validate_required_text,
};
use crate::wire;

// ── SEPA ────────────────────────────────────────────────────────────────────

fn verify_sepa(
    holder_name: &str,
    iban: &str,
    bic: &str,
    accepted_country_codes: &[String],
) -> Result<(), ValidationFailure> {
    validate_holder_name(holder_name)?;
    validate_iban("iban", iban)?;
    validate_bic("bic", bic)?;
    validate_code_list(
        "accepted_country_codes",
        accepted_country_codes,
        validate_country_code,
    )?;
    let sepa = sepa_country_codes();
    match accepted_country_codes
        .iter()
        .find(|code| !sepa.contains(&code.as_str()))
    {
        Some(code) => Err(ValidationFailure::unsupported(
            "accepted_country_codes",
            code,
        )),
        None => Ok(()),
    }
}

/// SEPA credit transfer and SEPA instant share their fields and rules.
macro_rules! define_sepa_variant {
    ($name:ident, $proto:path) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(flatten)]
            country: CountryBasedFields,
            holder_name: String,
            iban: String,
            bic: String,
            accepted_country_codes: Vec<String>,
        }

        impl $name {
            pub fn new(
                country: CountryBasedFields,
                holder_name: impl Into<String>,
                iban: impl Into<String>,
                bic: impl Into<String>,
                accepted_country_codes: Vec<String>,
            ) -> Result<Self, ValidationFailure> {
                let payload = Self {
                    country,
                    holder_name: holder_name.into(),
                    iban: compact(iban.into()),
                    bic: bic.into(),
                    accepted_country_codes,
                };
                payload.verify()?;
                Ok(payload)
            }

            pub fn holder_name(&self) -> &str {
                &self.holder_name
            }

            pub fn iban(&self) -> &str {
                &self.iban
            }

            pub fn bic(&self) -> &str {
                &self.bic
            }

            pub fn accepted_country_codes(&self) -> &[String] {
                &self.accepted_country_codes
            }

            pub fn accepts_country(&self, country_code: &str) -> bool {
                self.accepted_country_codes
                    .iter()
                    .any(|code| code == country_code)
            }
        }

        impl PayloadVariant for $name {
            type Layer = CountryBasedFields;
            type Proto = $proto;

            fn layer(&self) -> &CountryBasedFields {
                &self.country
            }

            fn verify_fields(&self) -> Result<(), ValidationFailure> {
                verify_sepa(
                    &self.holder_name,
                    &self.iban,
                    &self.bic,
                    &self.accepted_country_codes,
                )
            }

            fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
                $proto {
                    holder_name: self.holder_name.clone(),
                    iban: self.iban.clone(),
                    bic: self.bic.clone(),
                    accepted_country_codes: code_list(&self.accepted_country_codes, mode),
                }
            }

            fn from_proto(
                country: CountryBasedFields,
                proto: Self::Proto,
            ) -> Result<Self, ValidationFailure> {
                Self::new(
                    country,
                    proto.holder_name,
                    proto.iban,
                    proto.bic,
                    proto.accepted_country_codes,
                )
            }

            fn fingerprint_data(&self) -> Vec<&str> {
                vec![self.country.country(), &self.iban, &self.bic]
            }
        }
    };
}

define_sepa_variant!(Sepa, wire::SepaAccountPayload);
define_sepa_variant!(SepaInstant, wire::SepaInstantAccountPayload);

// ── Bizum ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bizum {
    #[serde(flatten)]
    country: CountryBasedFields,
    mobile_nr: String,
}

impl Bizum {
    pub fn new(
        country: CountryBasedFields,
        mobile_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            mobile_nr: mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn mobile_nr(&self) -> &str {
        &self.mobile_nr
    }
}

impl PayloadVariant for Bizum {
    type Layer = CountryBasedFields;
    type Proto = wire::BizumAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_phone_number("mobile_nr", &self.mobile_nr, Some(self.country.country()))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::BizumAccountPayload {
            mobile_nr: self.mobile_nr.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.mobile_nr]
    }
}

// ── Face to face ────────────────────────────────────────────────────────────

/// Cash trade in person, arranged through the contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct F2F {
    #[serde(flatten)]
    country: CountryBasedFields,
    selected_currency_code: String,
    city: String,
    contact: String,
    extra_info: Option<String>,
}

impl F2F {
    pub fn new(
        country: CountryBasedFields,
        selected_currency_code: impl Into<String>,
        city: impl Into<String>,
        contact: impl Into<String>,
        extra_info: Option<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            selected_currency_code: selected_currency_code.into(),
            city: city.into(),
            contact: contact.into(),
            extra_info: normalize(extra_info),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn selected_currency_code(&self) -> &str {
        &self.selected_currency_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref()
    }
}

impl PayloadVariant for F2F {
    type Layer = CountryBasedFields;
    type Proto = wire::F2fAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        check_selected_currency(Self::rail(), &self.selected_currency_code)?;
        validate_required_text("city", &self.city, 2, 50)?;
        validate_required_text("contact", &self.contact, 2, TEXT_MAX_LENGTH)?;
        validate_optional_text(
            "extra_info",
            self.extra_info.as_deref(),
            1,
            EXTRA_INFO_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::F2fAccountPayload {
            selected_currency_code: self.selected_currency_code.clone(),
            city: self.city.clone(),
            contact: self.contact.clone(),
            extra_info: self.extra_info.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(
            country,
            proto.selected_currency_code,
            proto.city,
            proto.contact,
            proto.extra_info,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.contact, &self.city]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        vec![self.selected_currency_code.clone()]
    }
}

// ── PIX ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pix {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
    pix_key: String,
}

impl Pix {
    pub fn new(
        country: CountryBasedFields,
        holder_name: impl Into<String>,
        pix_key: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: holder_name.into(),
            pix_key: pix_key.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn pix_key(&self) -> &str {
        &self.pix_key
    }
}

impl PayloadVariant for Pix {
    type Layer = CountryBasedFields;
    type Proto = wire::PixAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("pix_key", &self.pix_key, 2, TEXT_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::PixAccountPayload {
            holder_name: self.holder_name.clone(),
            pix_key: self.pix_key.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.holder_name, proto.pix_key)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.pix_key, &self.holder_name]
    }
}

// ── PromptPay ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPay {
    #[serde(flatten)]
    country: CountryBasedFields,
    prompt_pay_id: String,
}

impl PromptPay {
    pub fn new(
        country: CountryBasedFields,
        prompt_pay_id: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            prompt_pay_id: prompt_pay_id.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn prompt_pay_id(&self) -> &str {
        &self.prompt_pay_id
    }
}

impl PayloadVariant for PromptPay {
    type Layer = CountryBasedFields;
    type Proto = wire::PromptPayAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        // A citizen id (13 digits) or a mobile number.
        let id = &self.prompt_pay_id;
        if id.chars().all(|c| c.is_ascii_digit()) && id.len() == 13 {
            return Ok(());
        }
        validate_phone_number("prompt_pay_id", id, Some(self.country.country()))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::PromptPayAccountPayload {
            prompt_pay_id: self.prompt_pay_id.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.prompt_pay_id)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.prompt_pay_id]
    }
}

// ── Strike ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strike {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
}

impl Strike {
    pub fn new(
        country: CountryBasedFields,
        holder_name: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: holder_name.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }
}

impl PayloadVariant for Strike {
    type Layer = CountryBasedFields;
    type Proto = wire::StrikeAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::StrikeAccountPayload {
            holder_name: self.holder_name.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.holder_name)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.holder_name]
    }
}

// ── UPI ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upi {
    #[serde(flatten)]
    country: CountryBasedFields,
    virtual_payment_address: String,
}

impl Upi {
    pub fn new(
        country: CountryBasedFields,
        virtual_payment_address: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            virtual_payment_address: virtual_payment_address.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn virtual_payment_address(&self) -> &str {
        &self.virtual_payment_address
    }
}

impl PayloadVariant for Upi {
    type Layer = CountryBasedFields;
    type Proto = wire::UpiAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        let vpa = &self.virtual_payment_address;
        validate_required_text("virtual_payment_address", vpa, 3, TEXT_MAX_LENGTH)?;
        match vpa.split_once('@') {
            Some((handle, provider))
                if !handle.is_empty() && !provider.is_empty() && !provider.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ValidationFailure::format(
                "virtual_payment_address",
                "name@provider",
            )),
        }
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::UpiAccountPayload {
            virtual_payment_address: self.virtual_payment_address.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.virtual_payment_address)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.virtual_payment_address]
    }
}

// ── Wise ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wise {
    #[serde(flatten)]
    country: CountryBasedFields,
    selected_currency_codes: Vec<String>,
    holder_name: String,
    email: String,
}

impl Wise {
    pub fn new(
        country: CountryBasedFields,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            selected_currency_codes,
            holder_name: holder_name.into(),
            email: email.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn selected_currency_codes(&self) -> &[String] {
        &self.selected_currency_codes
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PayloadVariant for Wise {
    type Layer = CountryBasedFields;
    type Proto = wire::WiseAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        check_selected_currencies(Self::rail(), &self.selected_currency_codes)?;
        validate_holder_name(&self.holder_name)?;
        validate_email("email", &self.email)
    }

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
        wire::WiseAccountPayload {
            selected_currency_codes: code_list(&self.selected_currency_codes, mode),
            holder_name: self.holder_name.clone(),
            email: self.email.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(
            country,
            proto.selected_currency_codes,
            proto.holder_name,
            proto.email,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.email, &self.holder_name]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        self.selected_currency_codes.clone()
    }
}

// ── Wise USD ────────────────────────────────────────────────────────────────

/// USD-only Wise account. Holder name and beneficiary address travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiseUsd {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: Option<String>,
    email: String,
    beneficiary_address: Option<String>,
}

impl WiseUsd {
    pub fn new(
        country: CountryBasedFields,
        holder_name: Option<String>,
        email: impl Into<String>,
        beneficiary_address: Option<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: normalize(holder_name),
            email: email.into(),
            beneficiary_address: normalize(beneficiary_address),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> Option<&str> {
        self.holder_name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn beneficiary_address(&self) -> Option<&str> {
        self.beneficiary_address.as_deref()
    }
}

impl PayloadVariant for WiseUsd {
    type Layer = CountryBasedFields;
    type Proto = wire::WiseUsdAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        match (&self.holder_name, &self.beneficiary_address) {
            (Some(_), None) => {
                return Err(ValidationFailure::coupled(
                    "beneficiary_address",
                    "holder_name",
                ));
            }
            (None, Some(_)) => {
                return Err(ValidationFailure::coupled(
                    "holder_name",
                    "beneficiary_address",
                ));
            }
            _ => {}
        }
        validate_optional_text(
            "holder_name",
            self.holder_name.as_deref(),
            HOLDER_NAME_MIN_LENGTH,
            HOLDER_NAME_MAX_LENGTH,
        )?;
        validate_email("email", &self.email)?;
        validate_optional_text(
            "beneficiary_address",
            self.beneficiary_address.as_deref(),
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::WiseUsdAccountPayload {
            holder_name: self.holder_name.clone(),
            email: self.email.clone(),
            beneficiary_address: self.beneficiary_address.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(
            country,
            proto.holder_name,
            proto.email,
            proto.beneficiary_address,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![
            self.country.country(),
            self.holder_name.as_deref().unwrap_or_default(),
        ]
    }
}

// ── MoneyGram ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyGram {
    #[serde(flatten)]
    country: CountryBasedFields,
    selected_currency_codes: Vec<String>,
    holder_name: String,
    email: String,
    state: Option<String>,
}

impl MoneyGram {
    pub fn new(
        country: CountryBasedFields,
        selected_currency_codes: Vec<String>,
        holder_name: impl Into<String>,
        email: impl Into<String>,
        state: Option<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            selected_currency_codes,
            holder_name: holder_name.into(),
            email: email.into(),
            state: normalize(state),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn selected_currency_codes(&self) -> &[String] {
        &self.selected_currency_codes
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

impl PayloadVariant for MoneyGram {
    type Layer = CountryBasedFields;
    type Proto = wire::MoneyGramAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        check_selected_currencies(Self::rail(), &self.selected_currency_codes)?;
        validate_holder_name(&self.holder_name)?;
        validate_email("email", &self.email)?;
        if is_state_required(self.country.country()) && self.state.is_none() {
            return Err(ValidationFailure::required("state"));
        }
        validate_optional_text("state", self.state.as_deref(), 2, TEXT_MAX_LENGTH)
    }

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto {
        wire::MoneyGramAccountPayload {
            selected_currency_codes: code_list(&self.selected_currency_codes, mode),
            holder_name: self.holder_name.clone(),
            email: self.email.clone(),
            state: self.state.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(
            country,
            proto.selected_currency_codes,
            proto.holder_name,
            proto.email,
            proto.state,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![
            self.country.country(),
            self.state.as_deref().unwrap_or_default(),
            &self.holder_name,
            &self.email,
        ]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        self.selected_currency_codes.clone()
    }
}

// ── MoneyBeam ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyBeam {
    #[serde(flatten)]
    country: CountryBasedFields,
    selected_currency_code: String,
    holder_name: String,
    account_id: String,
}

impl MoneyBeam {
    pub fn new(
        country: CountryBasedFields,
        selected_currency_code: impl Into<String>,
        holder_name: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            selected_currency_code: selected_currency_code.into(),
            holder_name: holder_name.into(),
            account_id: account_id.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn selected_currency_code(&self) -> &str {
        &self.selected_currency_code
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl PayloadVariant for MoneyBeam {
    type Layer = CountryBasedFields;
    type Proto = wire::MoneyBeamAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        check_selected_currency(Self::rail(), &self.selected_currency_code)?;
        validate_holder_name(&self.holder_name)?;
        validate_email_or_phone("account_id", &self.account_id, None)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::MoneyBeamAccountPayload {
            selected_currency_code: self.selected_currency_code.clone(),
            holder_name: self.holder_name.clone(),
            account_id: self.account_id.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(
            country,
            proto.selected_currency_code,
            proto.holder_name,
            proto.account_id,
        )
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.account_id, &self.holder_name]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        vec![self.selected_currency_code.clone()]
    }
}

// ── Swish ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swish {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
    mobile_nr: String,
}

impl Swish {
    pub fn new(
        country: CountryBasedFields,
        holder_name: impl Into<String>,
        mobile_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: holder_name.into(),
            mobile_nr: mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn mobile_nr(&self) -> &str {
        &self.mobile_nr
    }
}

impl PayloadVariant for Swish {
    type Layer = CountryBasedFields;
    type Proto = wire::SwishAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_phone_number("mobile_nr", &self.mobile_nr, Some(self.country.country()))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::SwishAccountPayload {
            holder_name: self.holder_name.clone(),
            mobile_nr: self.mobile_nr.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.holder_name, proto.mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.mobile_nr]
    }
}

// ── Amazon gift card ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmazonGiftCard {
    #[serde(flatten)]
    country: CountryBasedFields,
    email_or_mobile_nr: String,
}

impl AmazonGiftCard {
    pub fn new(
        country: CountryBasedFields,
        email_or_mobile_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            email_or_mobile_nr: email_or_mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn email_or_mobile_nr(&self) -> &str {
        &self.email_or_mobile_nr
    }
}

impl PayloadVariant for AmazonGiftCard {
    type Layer = CountryBasedFields;
    type Proto = wire::AmazonGiftCardAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_email_or_phone(
            "email_or_mobile_nr",
            &self.email_or_mobile_nr,
            Some(self.country.country()),
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::AmazonGiftCardAccountPayload {
            email_or_mobile_nr: self.email_or_mobile_nr.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.email_or_mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec!["AmazonGiftCard", &self.email_or_mobile_nr]
    }

    /// Gift cards are issued per storefront, so only the country's currency trades.
    fn trade_currency_codes(&self) -> Vec<String> {
        let codes = payment_rails::country(self.country.country())
            .and_then(|country| storefront_currency(country.code));
        match codes {
            Some(code) => vec![code.to_string()],
            None => Self::rail()
                .supported_currency_codes()
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

fn storefront_currency(country_code: &str) -> Option<&'static str> {
    Some(match country_code {
        "AU" => "AUD",
        "CA" => "CAD",
        "DE" | "ES" | "FR" | "IT" | "NL" => "EUR",
        "GB" => "GBP",
        "IN" => "INR",
        "JP" => "JPY",
        "SA" => "SAR",
        "SE" => "SEK",
        "SG" => "SGD",
        "TR" => "TRY",
        "US" => "USD",
        _ => return None,
    })
}

// ── SWIFT ───────────────────────────────────────────────────────────────────

const SWIFT_NAME_MIN_LENGTH: usize = 2;
const SWIFT_NAME_MAX_LENGTH: usize = 100;
const SWIFT_PHONE_MIN_LENGTH: usize = 5;
const SWIFT_PHONE_MAX_LENGTH: usize = 30;
const SWIFT_INSTRUCTIONS_MIN_LENGTH: usize = 2;
const SWIFT_INSTRUCTIONS_MAX_LENGTH: usize = 300;

/// Beneficiary, bank and optional intermediary bank for an international wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SwiftAccountDetails {
    pub beneficiary_name: String,
    pub beneficiary_account_nr: String,
    pub beneficiary_phone: Option<String>,
    pub beneficiary_address: String,
    pub selected_currency_code: String,
    pub bank_swift_code: String,
    pub bank_name: String,
    pub bank_branch: Option<String>,
    pub bank_address: String,
    pub intermediary_bank_country_code: Option<String>,
    pub intermediary_bank_swift_code: Option<String>,
    pub intermediary_bank_name: Option<String>,
    pub intermediary_bank_branch: Option<String>,
    pub intermediary_bank_address: Option<String>,
    pub additional_instructions: Option<String>,
}

impl SwiftAccountDetails {
    fn normalized(self) -> Self {
        Self {
            beneficiary_phone: normalize(self.beneficiary_phone),
            bank_branch: normalize(self.bank_branch),
            intermediary_bank_country_code: normalize(self.intermediary_bank_country_code),
            intermediary_bank_swift_code: normalize(self.intermediary_bank_swift_code),
            intermediary_bank_name: normalize(self.intermediary_bank_name),
            intermediary_bank_branch: normalize(self.intermediary_bank_branch),
            intermediary_bank_address: normalize(self.intermediary_bank_address),
            additional_instructions: normalize(self.additional_instructions),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swift {
    #[serde(flatten)]
    country: CountryBasedFields,
    details: SwiftAccountDetails,
}

impl Swift {
    pub fn new(
        country: CountryBasedFields,
        details: SwiftAccountDetails,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            details: details.normalized(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn details(&self) -> &SwiftAccountDetails {
        &self.details
    }
}

impl PayloadVariant for Swift {
    type Layer = CountryBasedFields;
    type Proto = wire::SwiftAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        let d = &self.details;
        validate_required_text(
            "beneficiary_name",
            &d.beneficiary_name,
            SWIFT_NAME_MIN_LENGTH,
            SWIFT_NAME_MAX_LENGTH,
        )?;
        validate_required_text(
            "beneficiary_account_nr",
            &d.beneficiary_account_nr,
            ACCOUNT_NR_MIN_LENGTH,
            ACCOUNT_NR_MAX_LENGTH,
        )?;
        validate_optional_text(
            "beneficiary_phone",
            d.beneficiary_phone.as_deref(),
            SWIFT_PHONE_MIN_LENGTH,
            SWIFT_PHONE_MAX_LENGTH,
        )?;
        validate_required_text(
            "beneficiary_address",
            &d.beneficiary_address,
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )?;
        check_selected_currency(Self::rail(), &d.selected_currency_code)?;
        validate_bic("bank_swift_code", &d.bank_swift_code)?;
        validate_required_text(
            "bank_name",
            &d.bank_name,
            SWIFT_NAME_MIN_LENGTH,
            SWIFT_NAME_MAX_LENGTH,
        )?;
        validate_optional_text(
            "bank_branch",
            d.bank_branch.as_deref(),
            SWIFT_NAME_MIN_LENGTH,
            SWIFT_NAME_MAX_LENGTH,
        )?;
        validate_required_text(
            "bank_address",
            &d.bank_address,
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )?;
        if let Some(code) = &d.intermediary_bank_country_code {
            validate_country_code("intermediary_bank_country_code", code)?;
        }
        if let Some(code) = &d.intermediary_bank_swift_code {
            validate_bic("intermediary_bank_swift_code", code)?;
        }
        validate_optional_text(
            "intermediary_bank_name",
            d.intermediary_bank_name.as_deref(),
            SWIFT_NAME_MIN_LENGTH,
            SWIFT_NAME_MAX_LENGTH,
        )?;
        validate_optional_text(
            "intermediary_bank_branch",
            d.intermediary_bank_branch.as_deref(),
            SWIFT_NAME_MIN_LENGTH,
            SWIFT_NAME_MAX_LENGTH,
        )?;
        validate_optional_text(
            "intermediary_bank_address",
            d.intermediary_bank_address.as_deref(),
            ADDRESS_MIN_LENGTH,
            ADDRESS_MAX_LENGTH,
        )?;
        validate_optional_text(
            "additional_instructions",
            d.additional_instructions.as_deref(),
            SWIFT_INSTRUCTIONS_MIN_LENGTH,
            SWIFT_INSTRUCTIONS_MAX_LENGTH,
        )
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        let d = self.details.clone();
        wire::SwiftAccountPayload {
            beneficiary_name: d.beneficiary_name,
            beneficiary_account_nr: d.beneficiary_account_nr,
            beneficiary_phone: d.beneficiary_phone,
            beneficiary_address: d.beneficiary_address,
            selected_currency_code: d.selected_currency_code,
            bank_swift_code: d.bank_swift_code,
            bank_name: d.bank_name,
            bank_branch: d.bank_branch,
            bank_address: d.bank_address,
            intermediary_bank_country_code: d.intermediary_bank_country_code,
            intermediary_bank_swift_code: d.intermediary_bank_swift_code,
            intermediary_bank_name: d.intermediary_bank_name,
            intermediary_bank_branch: d.intermediary_bank_branch,
            intermediary_bank_address: d.intermediary_bank_address,
            additional_instructions: d.additional_instructions,
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        let details = SwiftAccountDetails {
            beneficiary_name: proto.beneficiary_name,
            beneficiary_account_nr: proto.beneficiary_account_nr,
            beneficiary_phone: proto.beneficiary_phone,
            beneficiary_address: proto.beneficiary_address,
            selected_currency_code: proto.selected_currency_code,
            bank_swift_code: proto.bank_swift_code,
            bank_name: proto.bank_name,
            bank_branch: proto.bank_branch,
            bank_address: proto.bank_address,
            intermediary_bank_country_code: proto.intermediary_bank_country_code,
            intermediary_bank_swift_code: proto.intermediary_bank_swift_code,
            intermediary_bank_name: proto.intermediary_bank_name,
            intermediary_bank_branch: proto.intermediary_bank_branch,
            intermediary_bank_address: proto.intermediary_bank_address,
            additional_instructions: proto.additional_instructions,
        };
        Self::new(country, details)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![&self.details.beneficiary_account_nr]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        vec![self.details.selected_currency_code.clone()]
    }
}

// ── Satispay ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Satispay {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
    mobile_nr: String,
}

impl Satispay {
    pub fn new(
        country: CountryBasedFields,
        holder_name: impl Into<String>,
        mobile_nr: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: holder_name.into(),
            mobile_nr: mobile_nr.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn mobile_nr(&self) -> &str {
        &self.mobile_nr
    }
}

impl PayloadVariant for Satispay {
    type Layer = CountryBasedFields;
    type Proto = wire::SatispayAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_phone_number("mobile_nr", &self.mobile_nr, Some(self.country.country()))
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::SatispayAccountPayload {
            holder_name: self.holder_name.clone(),
            mobile_nr: self.mobile_nr.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.holder_name, proto.mobile_nr)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.mobile_nr]
    }
}

// ── Mercado Pago ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MercadoPago {
    #[serde(flatten)]
    country: CountryBasedFields,
    holder_name: String,
    holder_id: String,
}

impl MercadoPago {
    pub fn new(
        country: CountryBasedFields,
        holder_name: impl Into<String>,
        holder_id: impl Into<String>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            country,
            holder_name: holder_name.into(),
            holder_id: holder_id.into(),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn holder_id(&self) -> &str {
        &self.holder_id
    }
}

impl PayloadVariant for MercadoPago {
    type Layer = CountryBasedFields;
    type Proto = wire::MercadoPagoAccountPayload;

    fn layer(&self) -> &CountryBasedFields {
        &self.country
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        validate_holder_name(&self.holder_name)?;
        validate_required_text("holder_id", &self.holder_id, 2, TEXT_MAX_LENGTH)
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::MercadoPagoAccountPayload {
            holder_name: self.holder_name.clone(),
            holder_id: self.holder_id.clone(),
        }
    }

    fn from_proto(
        country: CountryBasedFields,
        proto: Self::Proto,
    ) -> Result<Self, ValidationFailure> {
        Self::new(country, proto.holder_name, proto.holder_id)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.country.country(), &self.holder_id]
    }
}
