//! Leaf payload messages, one per rail.

use prost::Message;

// ── Base ────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct ZelleAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub email_or_mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct UsPostalMoneyOrderAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub postal_address: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct PayIdAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub pay_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct InteracETransferAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub question: String,
    #[prost(string, tag = "4")]
    pub answer: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct HalCashAccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct FasterPaymentsAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub sort_code: String,
    #[prost(string, tag = "3")]
    pub account_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SbpAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub mobile_number: String,
    #[prost(string, tag = "3")]
    pub bank_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct CashByMailAccountPayload {
    #[prost(string, tag = "1")]
    pub postal_address: String,
    #[prost(string, tag = "2")]
    pub contact_info: String,
    #[prost(string, optional, tag = "3")]
    pub extra_info: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RevolutAccountPayload {
    #[prost(string, tag = "1")]
    pub user_name: String,
    #[prost(string, repeated, tag = "2")]
    pub selected_currency_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct UpholdAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub account_id: String,
    #[prost(string, repeated, tag = "3")]
    pub selected_currency_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Pin4AccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct UserDefinedFiatAccountPayload {
    #[prost(string, tag = "1")]
    pub account_data: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct AdvancedCashAccountPayload {
    #[prost(string, tag = "1")]
    pub account_nr: String,
    #[prost(string, repeated, tag = "2")]
    pub selected_currency_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PerfectMoneyAccountPayload {
    #[prost(string, tag = "1")]
    pub account_nr: String,
}

// ── Country based ───────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct SepaAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub iban: String,
    #[prost(string, tag = "3")]
    pub bic: String,
    #[prost(string, repeated, tag = "4")]
    pub accepted_country_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SepaInstantAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub iban: String,
    #[prost(string, tag = "3")]
    pub bic: String,
    #[prost(string, repeated, tag = "4")]
    pub accepted_country_codes: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct BizumAccountPayload {
    #[prost(string, tag = "1")]
    pub mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct F2fAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub contact: String,
    #[prost(string, optional, tag = "4")]
    pub extra_info: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PixAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub pix_key: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct PromptPayAccountPayload {
    #[prost(string, tag = "1")]
    pub prompt_pay_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct StrikeAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct UpiAccountPayload {
    #[prost(string, tag = "1")]
    pub virtual_payment_address: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct WiseAccountPayload {
    #[prost(string, repeated, tag = "1")]
    pub selected_currency_codes: Vec<String>,
    #[prost(string, tag = "2")]
    pub holder_name: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct WiseUsdAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_name: Option<String>,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, optional, tag = "3")]
    pub beneficiary_address: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct MoneyGramAccountPayload {
    #[prost(string, repeated, tag = "1")]
    pub selected_currency_codes: Vec<String>,
    #[prost(string, tag = "2")]
    pub holder_name: String,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(string, optional, tag = "4")]
    pub state: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct MoneyBeamAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: String,
    #[prost(string, tag = "2")]
    pub holder_name: String,
    #[prost(string, tag = "3")]
    pub account_id: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SwishAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct AmazonGiftCardAccountPayload {
    #[prost(string, tag = "1")]
    pub email_or_mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct SwiftAccountPayload {
    #[prost(string, tag = "1")]
    pub beneficiary_name: String,
    #[prost(string, tag = "2")]
    pub beneficiary_account_nr: String,
    #[prost(string, optional, tag = "3")]
    pub beneficiary_phone: Option<String>,
    #[prost(string, tag = "4")]
    pub beneficiary_address: String,
    #[prost(string, tag = "5")]
    pub selected_currency_code: String,
    #[prost(string, tag = "6")]
    pub bank_swift_code: String,
    #[prost(string, tag = "7")]
    pub bank_name: String,
    #[prost(string, optional, tag = "8")]
    pub bank_branch: Option<String>,
    #[prost(string, tag = "9")]
    pub bank_address: String,
    #[prost(string, optional, tag = "10")]
    pub intermediary_bank_country_code: Option<String>,
    #[prost(string, optional, tag = "11")]
    pub intermediary_bank_swift_code: Option<String>,
    #[prost(string, optional, tag = "12")]
    pub intermediary_bank_name: Option<String>,
    #[prost(string, optional, tag = "13")]
    pub intermediary_bank_branch: Option<String>,
    #[prost(string, optional, tag = "14")]
    pub intermediary_bank_address: Option<String>,
    #[prost(string, optional, tag = "15")]
    pub additional_instructions: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SatispayAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub mobile_nr: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct MercadoPagoAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub holder_id: String,
}

// ── Bank ────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct NationalBankAccountPayload {}

#[derive(Clone, PartialEq, Message)]
pub struct SameBankAccountPayload {}

#[derive(Clone, PartialEq, Message)]
pub struct CashDepositAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub requirements: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AchTransferAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_address: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DomesticWireTransferAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub holder_address: Option<String>,
}

// ── IFSC based ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct ImpsAccountPayload {}

#[derive(Clone, PartialEq, Message)]
pub struct NeftAccountPayload {}

#[derive(Clone, PartialEq, Message)]
pub struct RtgsAccountPayload {}

// ── Crypto asset ────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct MoneroAccountPayload {
    #[prost(string, optional, tag = "1")]
    pub private_view_key: Option<String>,
    #[prost(bool, tag = "2")]
    pub use_sub_addresses: bool,
    #[prost(string, optional, tag = "3")]
    pub main_address: Option<String>,
    #[prost(uint32, optional, tag = "4")]
    pub account_index: Option<u32>,
    #[prost(uint32, optional, tag = "5")]
    pub initial_sub_address_index: Option<u32>,
    #[prost(string, optional, tag = "6")]
    pub sub_address: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct OtherCryptoAssetAccountPayload {}
