//! Wire messages.
//!
//! Every hierarchy level is its own protobuf message carrying that level's
//! fields plus a `message` envelope that selects the child variant by tag.
//! The child body is the child's own encoded message, so each level can be
//! parsed without knowing anything about the levels below it.

mod leaves;

pub use leaves::*;

use prost::Message;

/// Intermediate layer tags. Leaf tags live on `AccountKind`.
pub const COUNTRY_BASED_TAG: u32 = 1000;
pub const BANK_TAG: u32 = 1001;
pub const IFSC_BASED_TAG: u32 = 1002;
pub const CRYPTO_ASSET_TAG: u32 = 1003;

/// The selected child of a hierarchy level. Tag 0 means no variant is set.
#[derive(Clone, PartialEq, Message)]
pub struct VariantEnvelope {
    #[prost(uint32, tag = "1")]
    pub tag: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub body: Vec<u8>,
}

impl VariantEnvelope {
    pub fn new(tag: u32, body: Vec<u8>) -> Self {
        Self { tag, body }
    }

    pub fn of<M: Message>(tag: u32, message: &M) -> Self {
        Self::new(tag, message.encode_to_vec())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payload side
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct AccountPayload {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub payment_method_name: String,
    #[prost(bytes = "vec", tag = "3")]
    pub salt: Vec<u8>,
    #[prost(message, optional, tag = "4")]
    pub message: Option<VariantEnvelope>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CountryBasedAccountPayload {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, optional, tag = "2")]
    pub message: Option<VariantEnvelope>,
}

#[derive(Clone, PartialEq, Message)]
pub struct BankAccountPayload {
    #[prost(string, tag = "1")]
    pub selected_currency_code: String,
    #[prost(string, optional, tag = "2")]
    pub holder_name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub holder_id: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub bank_name: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub bank_id: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub branch_id: Option<String>,
    #[prost(string, tag = "7")]
    pub account_nr: String,
    #[prost(string, optional, tag = "8")]
    pub bank_account_type: Option<String>,
    #[prost(string, optional, tag = "9")]
    pub national_account_id: Option<String>,
    #[prost(message, optional, tag = "10")]
    pub message: Option<VariantEnvelope>,
}

#[derive(Clone, PartialEq, Message)]
pub struct IfscBasedAccountPayload {
    #[prost(string, tag = "1")]
    pub holder_name: String,
    #[prost(string, tag = "2")]
    pub account_nr: String,
    #[prost(string, tag = "3")]
    pub ifsc: String,
    #[prost(message, optional, tag = "4")]
    pub message: Option<VariantEnvelope>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CryptoAssetAccountPayload {
    #[prost(string, tag = "1")]
    pub currency_code: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(bool, tag = "3")]
    pub is_instant: bool,
    #[prost(uint32, optional, tag = "4")]
    pub auto_conf_num_confirmations: Option<u32>,
    #[prost(uint64, optional, tag = "5")]
    pub auto_conf_max_trade_amount: Option<u64>,
    #[prost(string, optional, tag = "6")]
    pub auto_conf_explorer_urls: Option<String>,
    #[prost(message, optional, tag = "7")]
    pub message: Option<VariantEnvelope>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Account side
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct PaymentMethod {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Country {
    #[prost(string, tag = "1")]
    pub code: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

impl From<&payment_rails::Country> for Country {
    fn from(country: &payment_rails::Country) -> Self {
        Self {
            code: country.code.to_string(),
            name: country.name.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(int64, tag = "2")]
    pub creation_date: i64,
    #[prost(string, tag = "3")]
    pub account_name: String,
    #[prost(message, optional, tag = "4")]
    pub account_payload: Option<AccountPayload>,
    #[prost(message, optional, tag = "5")]
    pub payment_method: Option<PaymentMethod>,
    #[prost(message, optional, tag = "6")]
    pub message: Option<VariantEnvelope>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CountryBasedAccount {
    #[prost(message, optional, tag = "1")]
    pub country: Option<Country>,
    #[prost(message, optional, tag = "2")]
    pub message: Option<VariantEnvelope>,
}

/// Shared shape of the bank, IFSC-based and crypto-asset account layers,
/// which add no fields of their own.
#[derive(Clone, PartialEq, Message)]
pub struct LayerAccount {
    #[prost(message, optional, tag = "1")]
    pub message: Option<VariantEnvelope>,
}

/// Leaf account message. Account leaves carry no fields beyond their tag.
#[derive(Clone, PartialEq, Message)]
pub struct LeafAccount {}
