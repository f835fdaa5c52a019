//! Account kinds: the closed set of leaf variants.
//!
//! Each leaf is declared once in `define_account_kinds!`, which generates the
//! `AccountKind` discriminant, the `AccountPayload` sum type, conversions,
//! and the default variant registry entries.

use payment_rails::PaymentRail;
use serde::Serialize;

use super::Family;
use super::payload::ErasedPayload;
use super::rails::*;
use crate::registry::RailEntry;

/// Gives a leaf type its kind and a way to find it inside `AccountPayload`.
pub trait KindedPayload: Sized {
    const KIND: AccountKind;

    fn extract(payload: &AccountPayload) -> Option<&Self>;
}

/// Macro to define leaf variants with their wire tags, rails and families.
///
/// # Syntax
/// ```ignore
/// define_account_kinds! {
///     Variant(LeafType) => (tag, RailVariant, Family),
/// }
/// ```
macro_rules! define_account_kinds {
    (
        $(
            $variant:ident($ty:ty) => ($tag:literal, $rail:ident, $family:ident)
        ),* $(,)?
    ) => {
        /// Discriminant of a leaf payload and account variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum AccountKind {
            $($variant),*
        }

        impl AccountKind {
            /// Wire tag shared by the payload and account leaf.
            pub fn tag(&self) -> u32 {
                match self {
                    $(AccountKind::$variant => $tag),*
                }
            }

            pub fn from_tag(tag: u32) -> Option<Self> {
                match tag {
                    $($tag => Some(AccountKind::$variant),)*
                    _ => None,
                }
            }

            pub fn rail(&self) -> PaymentRail {
                match self {
                    $(AccountKind::$variant => PaymentRail::$rail),*
                }
            }

            pub fn family(&self) -> Family {
                match self {
                    $(AccountKind::$variant => Family::$family),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(AccountKind::$variant => stringify!($variant)),*
                }
            }

            pub fn all() -> &'static [AccountKind] {
                &[$(AccountKind::$variant),*]
            }
        }

        /// A validated payload of any leaf variant.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub enum AccountPayload {
            $($variant($ty)),*
        }

        impl AccountPayload {
            pub fn kind(&self) -> AccountKind {
                match self {
                    $(AccountPayload::$variant(_) => AccountKind::$variant),*
                }
            }

            pub(crate) fn as_erased(&self) -> &dyn ErasedPayload {
                match self {
                    $(AccountPayload::$variant(payload) => payload),*
                }
            }
        }

        $(
            impl From<$ty> for AccountPayload {
                fn from(payload: $ty) -> Self {
                    AccountPayload::$variant(payload)
                }
            }

            impl KindedPayload for $ty {
                const KIND: AccountKind = AccountKind::$variant;

                fn extract(payload: &AccountPayload) -> Option<&Self> {
                    match payload {
                        AccountPayload::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        pub(crate) fn default_rail_entries() -> Vec<RailEntry> {
            vec![$(RailEntry::of::<$ty>()),*]
        }
    };
}

define_account_kinds! {
    // Base
    Zelle(Zelle) => (1, Zelle, Base),
    UsPostalMoneyOrder(UsPostalMoneyOrder) => (2, UsPostalMoneyOrder, Base),
    PayId(PayId) => (3, PayId, Base),
    InteracETransfer(InteracETransfer) => (4, InteracETransfer, Base),
    HalCash(HalCash) => (5, HalCash, Base),
    FasterPayments(FasterPayments) => (6, FasterPayments, Base),
    Sbp(Sbp) => (7, Sbp, Base),
    CashByMail(CashByMail) => (8, CashByMail, Base),
    Revolut(Revolut) => (9, Revolut, Base),
    Uphold(Uphold) => (10, Uphold, Base),
    Pin4(Pin4) => (11, Pin4, Base),
    UserDefinedFiat(UserDefinedFiat) => (12, Custom, Base),
    AdvancedCash(AdvancedCash) => (13, AdvancedCash, Base),
    PerfectMoney(PerfectMoney) => (14, PerfectMoney, Base),

    // Country based
    Sepa(Sepa) => (100, Sepa, CountryBased),
    SepaInstant(SepaInstant) => (101, SepaInstant, CountryBased),
    Bizum(Bizum) => (102, Bizum, CountryBased),
    F2F(F2F) => (103, F2F, CountryBased),
    Pix(Pix) => (104, Pix, CountryBased),
    PromptPay(PromptPay) => (105, PromptPay, CountryBased),
    Strike(Strike) => (106, Strike, CountryBased),
    Upi(Upi) => (107, Upi, CountryBased),
    Wise(Wise) => (108, Wise, CountryBased),
    WiseUsd(WiseUsd) => (109, WiseUsd, CountryBased),
    MoneyGram(MoneyGram) => (110, MoneyGram, CountryBased),
    MoneyBeam(MoneyBeam) => (111, MoneyBeam, CountryBased),
    Swish(Swish) => (112, Swish, CountryBased),
    AmazonGiftCard(AmazonGiftCard) => (113, AmazonGiftCard, CountryBased),
    Swift(Swift) => (114, Swift, CountryBased),
    Satispay(Satispay) => (115, Satispay, CountryBased),
    MercadoPago(MercadoPago) => (116, MercadoPago, CountryBased),

    // Bank
    NationalBank(NationalBank) => (200, NationalBank, Bank),
    SameBank(SameBank) => (201, SameBank, Bank),
    CashDeposit(CashDeposit) => (202, CashDeposit, Bank),
    AchTransfer(AchTransfer) => (203, AchTransfer, Bank),
    DomesticWireTransfer(DomesticWireTransfer) => (204, DomesticWireTransfer, Bank),

    // IFSC based
    Imps(Imps) => (300, Imps, IfscBased),
    Neft(Neft) => (301, Neft, IfscBased),
    Rtgs(Rtgs) => (302, Rtgs, IfscBased),

    // Crypto asset
    Monero(Monero) => (400, NativeChain, CryptoAsset),
    OtherCryptoAsset(OtherCryptoAsset) => (401, NativeChain, CryptoAsset),
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
