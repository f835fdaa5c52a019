//! Payment Rail Catalog with Macro-Based Rail Generation
//!
//! Static reference data for the payment rails an account can settle over:
//! which countries and currencies each rail supports, how risky it is with
//! respect to chargebacks, and the identifier the legacy account-age
//! fingerprint was computed with. Rails are defined declaratively with a
//! macro that generates the `PaymentRail` enum and every lookup on it.
//!
//! # Adding a New Rail
//! Add a line to the `define_rails!` invocation:
//! ```ignore
//! define_rails! {
//!     // ... existing rails ...
//!     Twint => ("TWINT", "TWINT", &["CH"], &["CHF"], Low),
//! }
//! ```
//!
//! # Example
//! ```
//! use payment_rails::PaymentRail;
//!
//! let sepa: PaymentRail = "sepa".parse().unwrap();
//! assert_eq!(sepa.name(), "SEPA");
//! assert!(sepa.supports_country("DE"));
//! assert_eq!(sepa.single_currency(), Some("EUR"));
//! ```

mod bank;
mod countries;

pub use bank::{BankFieldRequirements, bank_field_requirements};
pub use countries::{
    ALL_COUNTRY_CODES, Country, all_countries, country, is_state_required, sepa_country_codes,
};

use countries::SEPA_COUNTRY_CODES;

// ─────────────────────────────────────────────────────────────────────────────
// Currency Lists
// ─────────────────────────────────────────────────────────────────────────────

/// Every fiat currency a rail without a narrower list accepts.
pub const ALL_FIAT_CURRENCY_CODES: &[&str] = &[
    "AED", "ARS", "AUD", "BDT", "BGN", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK",
    "EGP", "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "JPY", "KES", "KRW", "MXN", "MYR",
    "NGN", "NOK", "NZD", "PEN", "PHP", "PKR", "PLN", "RON", "RUB", "SAR", "SEK", "SGD", "THB",
    "TRY", "UAH", "USD", "VND", "ZAR",
];

/// Crypto assets settled on their native chain.
pub const CRYPTO_CURRENCY_CODES: &[&str] = &[
    "XMR", "LTC", "ETH", "ETC", "BCH", "DOGE", "DASH", "ZEC", "GRIN", "L-BTC",
];

const ADVANCED_CASH_CURRENCIES: &[&str] = &["BRL", "EUR", "GBP", "KZT", "RUB", "UAH", "USD"];

const AMAZON_GIFT_CARD_COUNTRIES: &[&str] = &[
    "AU", "CA", "FR", "DE", "IT", "NL", "ES", "GB", "IN", "JP", "SA", "SE", "SG", "TR", "US",
];
const AMAZON_GIFT_CARD_CURRENCIES: &[&str] = &[
    "AUD", "CAD", "EUR", "GBP", "INR", "JPY", "SAR", "SEK", "SGD", "TRY", "USD",
];

const MONESE_CURRENCIES: &[&str] = &["EUR", "GBP", "RON"];

const MONEY_BEAM_CURRENCIES: &[&str] = &["EUR", "GBP"];

const MONEY_GRAM_COUNTRIES: &[&str] = &[
    "AE", "AR", "AU", "BE", "BG", "BR", "CA", "CH", "CL", "CO", "CZ", "DE", "DK", "EG", "ES",
    "FI", "FR", "GB", "GR", "HK", "HU", "ID", "IE", "IL", "IN", "IT", "JP", "KE", "MX", "MY",
    "NG", "NL", "NO", "NZ", "PE", "PH", "PK", "PL", "PT", "RO", "SE", "SG", "TH", "TR", "UA",
    "US", "VN", "ZA",
];
const MONEY_GRAM_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BRL", "CAD", "CHF", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "IDR",
    "ILS", "INR", "JPY", "MXN", "MYR", "NOK", "NZD", "PHP", "PLN", "SEK", "SGD", "THB", "TRY",
    "USD", "ZAR",
];

const PAYSERA_CURRENCIES: &[&str] = &[
    "AUD", "BGN", "BYN", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "GEL", "HKD", "HUF",
    "ILS", "INR", "JPY", "KZT", "MXN", "NOK", "NZD", "PHP", "PLN", "RON", "RSD", "RUB", "SEK",
    "SGD", "TRY", "USD", "ZAR",
];

const REVOLUT_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IS", "IE",
    "IT", "LV", "LI", "LT", "LU", "MT", "NL", "NO", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
    "GB", "AU", "CA", "SG", "CH", "US", "NZ", "JP",
];
const REVOLUT_CURRENCIES: &[&str] = &[
    "AED", "AUD", "BGN", "CAD", "CHF", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "ILS", "INR",
    "JPY", "MXN", "NOK", "NZD", "PLN", "RON", "SAR", "SEK", "SGD", "THB", "TRY", "USD", "ZAR",
];

const UPHOLD_COUNTRIES: &[&str] = &[
    "AE", "AR", "AT", "AU", "BE", "BG", "BR", "CA", "CH", "CL", "CO", "CY", "CZ", "DE", "DK",
    "EE", "ES", "FI", "FR", "GB", "GR", "HR", "HU", "IE", "IL", "IT", "LT", "LU", "LV", "MT",
    "MX", "NL", "NO", "NZ", "PE", "PH", "PL", "PT", "RO", "SE", "SG", "SI", "SK", "US",
];
const UPHOLD_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BRL", "CAD", "CHF", "CNY", "DKK", "EUR", "GBP", "HKD", "ILS", "INR",
    "JPY", "KES", "MXN", "NOK", "NZD", "PHP", "PLN", "SEK", "SGD", "USD",
];

const VERSE_CURRENCIES: &[&str] = &["DKK", "EUR", "HUF", "PLN", "SEK"];

const WISE_COUNTRIES: &[&str] = &[
    "AR", "AU", "BD", "BR", "BG", "CA", "CL", "CN", "CO", "CZ", "DK", "EG", "HK", "HU", "IN",
    "ID", "IL", "JP", "KE", "MY", "MX", "NZ", "NO", "PK", "PH", "PL", "RO", "SG", "ZA", "KR",
    "SE", "CH", "TH", "TR", "UA", "AE", "GB", "US", "VN", "AT", "BE", "HR", "CY", "EE", "FI",
    "FR", "DE", "GR", "IE", "IT", "LV", "LT", "LU", "MT", "NL", "PT", "SK", "SI", "ES",
];
const WISE_CURRENCIES: &[&str] = &[
    "AED", "ARS", "AUD", "BDT", "BGN", "BRL", "CAD", "CHF", "CLP", "CNY", "COP", "CZK", "DKK",
    "EGP", "EUR", "GBP", "HKD", "HUF", "IDR", "ILS", "INR", "JPY", "KES", "KRW", "MXN", "MYR",
    "NOK", "NZD", "PHP", "PKR", "PLN", "RON", "SEK", "SGD", "THB", "TRY", "UAH", "USD", "VND",
    "ZAR",
];

// ─────────────────────────────────────────────────────────────────────────────
// Chargeback Risk
// ─────────────────────────────────────────────────────────────────────────────

/// How likely a completed payment can be reversed by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargebackRisk {
    VeryLow,
    Low,
    Moderate,
    Medium,
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines all rails and their static metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define payment rails with auto-generated lookups.
///
/// # Syntax
/// ```ignore
/// define_rails! {
///     RailName => ("WIRE_NAME", "LEGACY_ID", countries, currencies, RiskVariant),
/// }
/// ```
#[macro_export]
macro_rules! define_rails {
    (
        $(
            $name:ident => ($wire:literal, $legacy:literal, $countries:expr, $currencies:expr, $risk:ident)
        ),* $(,)?
    ) => {
        /// A payment rail, identified on the wire by its upper-case name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PaymentRail {
            $($name),*
        }

        impl PaymentRail {
            /// The wire name, e.g. `"SEPA"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(PaymentRail::$name => $wire),*
                }
            }

            /// Identifier used by the legacy account-age fingerprint.
            pub fn legacy_id(&self) -> &'static str {
                match self {
                    $(PaymentRail::$name => $legacy),*
                }
            }

            pub fn supported_country_codes(&self) -> &'static [&'static str] {
                match self {
                    $(PaymentRail::$name => $countries),*
                }
            }

            pub fn supported_currency_codes(&self) -> &'static [&'static str] {
                match self {
                    $(PaymentRail::$name => $currencies),*
                }
            }

            pub fn chargeback_risk(&self) -> ChargebackRisk {
                match self {
                    $(PaymentRail::$name => ChargebackRisk::$risk),*
                }
            }

            pub fn all() -> &'static [PaymentRail] {
                &[$(PaymentRail::$name),*]
            }
        }

        impl std::str::FromStr for PaymentRail {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($wire => Ok(PaymentRail::$name),)*
                    _ => Err(format!("Unknown payment rail: {}", s)),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// RAIL DEFINITIONS - Add new rails here!
// ─────────────────────────────────────────────────────────────────────────────

define_rails! {
    AchTransfer => ("ACH_TRANSFER", "ACH_TRANSFER", &["US"], &["USD"], Moderate),
    AdvancedCash => ("ADVANCED_CASH", "ADVANCED_CASH", ALL_COUNTRY_CODES, ADVANCED_CASH_CURRENCIES, VeryLow),
    AliPay => ("ALI_PAY", "ALI_PAY", &["CN"], &["CNY"], Low),
    AmazonGiftCard => ("AMAZON_GIFT_CARD", "AMAZON_GIFT_CARD", AMAZON_GIFT_CARD_COUNTRIES, AMAZON_GIFT_CARD_CURRENCIES, Moderate),
    Bizum => ("BIZUM", "BIZUM", &["ES"], &["EUR"], Low),
    CashApp => ("CASH_APP", "CASH_APP", &["US"], &["USD"], Moderate),
    CashByMail => ("CASH_BY_MAIL", "CASH_BY_MAIL", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Moderate),
    CashDeposit => ("CASH_DEPOSIT", "CASH_DEPOSIT", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Moderate),
    Custom => ("CUSTOM", "CUSTOM", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Moderate),
    DomesticWireTransfer => ("DOMESTIC_WIRE_TRANSFER", "DOMESTIC_WIRE_TRANSFER", &["US"], &["USD"], Moderate),
    F2F => ("F2F", "F2F", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Low),
    FasterPayments => ("FASTER_PAYMENTS", "FASTER_PAYMENTS", &["GB"], &["GBP"], Moderate),
    HalCash => ("HAL_CASH", "HAL_CASH", &["ES"], &["EUR"], Low),
    Imps => ("IMPS", "IMPS", &["IN"], &["INR"], Moderate),
    InteracETransfer => ("INTERAC_E_TRANSFER", "INTERAC_E_TRANSFER", &["CA"], &["CAD"], Moderate),
    MercadoPago => ("MERCADO_PAGO", "MERCADO_PAGO", &["AR"], &["ARS"], Moderate),
    Monese => ("MONESE", "MONESE", ALL_COUNTRY_CODES, MONESE_CURRENCIES, Moderate),
    MoneyBeam => ("MONEY_BEAM", "MONEY_BEAM", SEPA_COUNTRY_CODES, MONEY_BEAM_CURRENCIES, Moderate),
    MoneyGram => ("MONEY_GRAM", "MONEY_GRAM", MONEY_GRAM_COUNTRIES, MONEY_GRAM_CURRENCIES, Medium),
    NationalBank => ("NATIONAL_BANK", "NATIONAL_BANK", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Moderate),
    Neft => ("NEFT", "NEFT", &["IN"], &["INR"], Moderate),
    PayId => ("PAY_ID", "AUSTRALIA_PAYID", &["AU"], &["AUD"], Low),
    Paysera => ("PAYSERA", "PAYSERA", ALL_COUNTRY_CODES, PAYSERA_CURRENCIES, Moderate),
    PerfectMoney => ("PERFECT_MONEY", "PERFECT_MONEY", ALL_COUNTRY_CODES, &["USD"], Low),
    Pin4 => ("PIN_4", "PIN_4", &["PL"], &["PLN"], Low),
    Pix => ("PIX", "PIX", &["BR"], &["BRL"], Moderate),
    PromptPay => ("PROMPT_PAY", "PROMPT_PAY", &["TH"], &["THB"], Low),
    Revolut => ("REVOLUT", "REVOLUT", REVOLUT_COUNTRIES, REVOLUT_CURRENCIES, Moderate),
    Rtgs => ("RTGS", "RTGS", &["IN"], &["INR"], Moderate),
    SameBank => ("SAME_BANK", "SAME_BANK", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Moderate),
    Satispay => ("SATISPAY", "SATISPAY", &["IT"], &["EUR"], Moderate),
    Sbp => ("SBP", "SBP", &["RU"], &["RUB"], Moderate),
    Sepa => ("SEPA", "SEPA", SEPA_COUNTRY_CODES, &["EUR"], Moderate),
    SepaInstant => ("SEPA_INSTANT", "SEPA_INSTANT", SEPA_COUNTRY_CODES, &["EUR"], Moderate),
    Strike => ("STRIKE", "STRIKE", &["US"], &["USD"], Moderate),
    Swift => ("SWIFT", "SWIFT", ALL_COUNTRY_CODES, ALL_FIAT_CURRENCY_CODES, Medium),
    Swish => ("SWISH", "SWISH", &["SE"], &["SEK"], Low),
    Uphold => ("UPHOLD", "UPHOLD", UPHOLD_COUNTRIES, UPHOLD_CURRENCIES, Moderate),
    Upi => ("UPI", "UPI", &["IN"], &["INR"], Low),
    UsPostalMoneyOrder => ("US_POSTAL_MONEY_ORDER", "US_POSTAL_MONEY_ORDER", &["US"], &["USD"], Moderate),
    Verse => ("VERSE", "VERSE", ALL_COUNTRY_CODES, VERSE_CURRENCIES, Moderate),
    WechatPay => ("WECHAT_PAY", "WECHAT_PAY", &["CN"], &["CNY"], Low),
    Wise => ("WISE", "TRANSFERWISE", WISE_COUNTRIES, WISE_CURRENCIES, Moderate),
    WiseUsd => ("WISE_USD", "TRANSFERWISE_USD", &["US"], &["USD"], Moderate),
    Zelle => ("ZELLE", "CLEAR_X_CHANGE", &["US"], &["USD"], Moderate),
    NativeChain => ("NATIVE_CHAIN", "NATIVE_CHAIN", ALL_COUNTRY_CODES, CRYPTO_CURRENCY_CODES, VeryLow),
}

impl PaymentRail {
    pub fn supports_country(&self, country_code: &str) -> bool {
        self.supported_country_codes().contains(&country_code)
    }

    pub fn supports_currency(&self, currency_code: &str) -> bool {
        self.supported_currency_codes().contains(&currency_code)
    }

    /// The currency code when the rail settles in exactly one currency.
    pub fn single_currency(&self) -> Option<&'static str> {
        match self.supported_currency_codes() {
            [code] => Some(*code),
            _ => None,
        }
    }

    /// Maximum trade amount in USD, derived from the chargeback risk.
    pub fn trade_limit_usd(&self) -> u64 {
        match self.chargeback_risk() {
            ChargebackRisk::VeryLow | ChargebackRisk::Low => 10_000,
            ChargebackRisk::Medium => 5_000,
            ChargebackRisk::Moderate => 2_500,
        }
    }

    /// Rails offered for a currency.
    pub fn for_currency(currency_code: &str) -> Vec<PaymentRail> {
        Self::all()
            .iter()
            .copied()
            .filter(|rail| rail.supports_currency(currency_code))
            .collect()
    }
}

impl std::fmt::Display for PaymentRail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl serde::Serialize for PaymentRail {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for PaymentRail {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
