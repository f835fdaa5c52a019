//! Payload core and the traits every payload layer and leaf implements.

use std::fmt;

use payment_rails::PaymentRail;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use super::Family;
use super::kind::{AccountPayload, KindedPayload};
use crate::canonical::EncodeMode;
use crate::error::{CodecError, ValidationFailure};
use crate::registry::registry;
use crate::validation::validate_id;
use crate::wire::{self, VariantEnvelope};

/// Length of the random salt mixed into every payload.
pub const SALT_LENGTH: usize = 32;

// ─────────────────────────────────────────────────────────────────────────────
// Payload core
// ─────────────────────────────────────────────────────────────────────────────

/// Fields shared by every payload: identity and salt.
///
/// The salt is random per payload and travels with it, so a hash of
/// low-entropy account data cannot be reversed by enumerating candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadCore {
    id: String,
    #[serde(serialize_with = "hex::serde::serialize")]
    salt: Vec<u8>,
}

impl PayloadCore {
    /// Fresh identity with a random id and salt.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Given id with a freshly generated salt.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut salt = vec![0u8; SALT_LENGTH];
        rand::rng().fill(&mut salt[..]);
        Self {
            id: id.into(),
            salt,
        }
    }

    /// Reconstructs a core from stored parts. Checked when the owning payload verifies.
    pub fn from_parts(id: impl Into<String>, salt: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            salt,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl Default for PayloadCore {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layers
// ─────────────────────────────────────────────────────────────────────────────

/// Intermediate layers decoded on the way down to a leaf.
#[derive(Debug, Clone)]
pub struct DecodedPayload {
    pub(crate) payment_method_name: String,
    pub(crate) core: PayloadCore,
    pub(crate) country_based: Option<wire::CountryBasedAccountPayload>,
    pub(crate) bank: Option<wire::BankAccountPayload>,
    pub(crate) ifsc: Option<wire::IfscBasedAccountPayload>,
    pub(crate) crypto: Option<wire::CryptoAssetAccountPayload>,
}

impl DecodedPayload {
    pub(crate) fn new(proto: &wire::AccountPayload) -> Self {
        Self {
            payment_method_name: proto.payment_method_name.clone(),
            core: PayloadCore::from_parts(proto.id.clone(), proto.salt.clone()),
            country_based: None,
            bank: None,
            ifsc: None,
            crypto: None,
        }
    }
}

/// One level of the payload hierarchy below the leaf.
pub trait PayloadLayer: Clone + fmt::Debug + PartialEq + Serialize {
    const FAMILY: Family;

    fn core(&self) -> &PayloadCore;

    fn country_code(&self) -> Option<&str> {
        None
    }

    /// Checks this layer and every layer above it.
    fn verify(&self, rail: PaymentRail) -> Result<(), ValidationFailure>;

    /// Wraps a child envelope in this layer's message and its ancestors'.
    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        mode: EncodeMode,
    ) -> wire::AccountPayload;

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError>;
}

impl PayloadLayer for PayloadCore {
    const FAMILY: Family = Family::Base;

    fn core(&self) -> &PayloadCore {
        self
    }

    fn verify(&self, _rail: PaymentRail) -> Result<(), ValidationFailure> {
        validate_id(&self.id)?;
        if self.salt.len() != SALT_LENGTH {
            return Err(ValidationFailure::length(
                "salt",
                SALT_LENGTH,
                SALT_LENGTH,
                self.salt.len(),
            ));
        }
        Ok(())
    }

    fn wrap(
        &self,
        rail: PaymentRail,
        child: VariantEnvelope,
        _mode: EncodeMode,
    ) -> wire::AccountPayload {
        wire::AccountPayload {
            id: self.id.clone(),
            payment_method_name: rail.name().to_string(),
            salt: self.salt.clone(),
            message: Some(child),
        }
    }

    fn from_decoded(decoded: &mut DecodedPayload) -> Result<Self, CodecError> {
        Ok(decoded.core.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Leaves
// ─────────────────────────────────────────────────────────────────────────────

/// A concrete payload type bound to one rail.
pub trait PayloadVariant:
    KindedPayload + Clone + fmt::Debug + PartialEq + Into<AccountPayload>
{
    type Layer: PayloadLayer;
    type Proto: prost::Message + Default;

    fn layer(&self) -> &Self::Layer;

    /// Checks the leaf's own fields. Layer checks run first in [`verify`](Self::verify).
    fn verify_fields(&self) -> Result<(), ValidationFailure>;

    fn to_proto(&self, mode: EncodeMode) -> Self::Proto;

    fn from_proto(layer: Self::Layer, proto: Self::Proto) -> Result<Self, ValidationFailure>;

    /// Identifying fields appended to the legacy id in the account-age fingerprint.
    fn fingerprint_data(&self) -> Vec<&str>;

    fn rail() -> PaymentRail {
        Self::KIND.rail()
    }

    fn verify(&self) -> Result<(), ValidationFailure> {
        self.layer().verify(Self::rail())?;
        self.verify_fields()
    }

    fn fingerprint(&self) -> Vec<u8> {
        let mut bytes = Self::rail().legacy_id().as_bytes().to_vec();
        for part in self.fingerprint_data() {
            bytes.extend_from_slice(part.as_bytes());
        }
        bytes
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        Self::rail()
            .supported_currency_codes()
            .iter()
            .map(|code| code.to_string())
            .collect()
    }

    fn to_wire(&self, mode: EncodeMode) -> wire::AccountPayload {
        let envelope = VariantEnvelope::of(Self::KIND.tag(), &self.to_proto(mode));
        self.layer().wrap(Self::rail(), envelope, mode)
    }
}

/// Object-safe view over any leaf, used by `AccountPayload` accessors.
pub(crate) trait ErasedPayload {
    fn erased_core(&self) -> &PayloadCore;
    fn erased_country(&self) -> Option<&str>;
    fn erased_fingerprint(&self) -> Vec<u8>;
    fn erased_trade_codes(&self) -> Vec<String>;
}

impl<T: PayloadVariant> ErasedPayload for T {
    fn erased_core(&self) -> &PayloadCore {
        self.layer().core()
    }

    fn erased_country(&self) -> Option<&str> {
        self.layer().country_code()
    }

    fn erased_fingerprint(&self) -> Vec<u8> {
        PayloadVariant::fingerprint(self)
    }

    fn erased_trade_codes(&self) -> Vec<String> {
        PayloadVariant::trade_currency_codes(self)
    }
}

impl AccountPayload {
    pub fn id(&self) -> &str {
        self.as_erased().erased_core().id()
    }

    pub fn salt(&self) -> &[u8] {
        self.as_erased().erased_core().salt()
    }

    pub fn rail(&self) -> PaymentRail {
        self.kind().rail()
    }

    pub fn payment_method_name(&self) -> &'static str {
        self.rail().name()
    }

    pub fn family(&self) -> Family {
        self.kind().family()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.as_erased().erased_country()
    }

    /// Legacy account-age fingerprint: the rail's legacy id followed by identifying fields.
    pub fn fingerprint(&self) -> Vec<u8> {
        self.as_erased().erased_fingerprint()
    }

    pub fn trade_currency_codes(&self) -> Vec<String> {
        self.as_erased().erased_trade_codes()
    }

    /// The currency code when the payload trades exactly one.
    pub fn currency_code(&self) -> Option<String> {
        let mut codes = self.trade_currency_codes();
        if codes.len() == 1 { codes.pop() } else { None }
    }

    pub fn verify(&self) -> Result<(), ValidationFailure> {
        registry().validate_payload(self)
    }
}
