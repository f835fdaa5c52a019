//! Canonical wire codec for payloads and accounts.
//!
//! Decoding walks the envelope chain from the top-level message down to a
//! leaf, resolving every tag through the registry. Anything the registry does
//! not know at the current level fails closed with a typed error.

use chrono::DateTime;
use prost::Message;

use crate::canonical::{EncodeMode, sha256};
use crate::domain::account::AccountParts;
use crate::domain::payload::DecodedPayload;
use crate::domain::{Account, AccountId, AccountPayload, Family};
use crate::error::{CodecError, Level};
use crate::registry::{RailEntry, registry};
use crate::wire::{self, VariantEnvelope};

/// Follows one envelope: `None` and tag 0 are both unset.
fn set_tag(envelope: &Option<VariantEnvelope>, level: Level) -> Result<u32, CodecError> {
    match envelope {
        Some(envelope) if envelope.tag != 0 => Ok(envelope.tag),
        _ => {
            tracing::debug!(%level, "Unresolvable message");
            Err(CodecError::UnresolvableMessage { level })
        }
    }
}

fn unknown_variant(level: Level, tag: u32) -> CodecError {
    tracing::debug!(%level, tag, "Unknown variant tag");
    CodecError::UnknownVariant { level, tag }
}

/// Leaf entry for a tag at the given level, if the tag names a leaf of that family.
fn leaf_at(tag: u32, family: Family) -> Option<&'static RailEntry> {
    registry().rail(tag).filter(|entry| entry.family == family)
}

// ─────────────────────────────────────────────────────────────────────────────
// Payload
// ─────────────────────────────────────────────────────────────────────────────

impl AccountPayload {
    pub fn to_proto(&self, mode: EncodeMode) -> Result<wire::AccountPayload, CodecError> {
        let kind = self.kind();
        registry()
            .rail(kind.tag())
            .and_then(|entry| (entry.encode_payload)(self, mode))
            .ok_or_else(|| unknown_variant(Level::payload(kind.family()), kind.tag()))
    }

    pub fn encode(&self, mode: EncodeMode) -> Result<Vec<u8>, CodecError> {
        Ok(self.to_proto(mode)?.encode_to_vec())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let proto = wire::AccountPayload::decode(bytes)?;
        Self::from_proto(proto)
    }

    pub fn from_proto(proto: wire::AccountPayload) -> Result<Self, CodecError> {
        let mut decoded = DecodedPayload::new(&proto);
        let mut envelope = proto.message;
        let mut family = Family::Base;
        loop {
            let level = Level::payload(family);
            let tag = set_tag(&envelope, level)?;
            let body = envelope.map(|e| e.body).unwrap_or_default();

            if let Some(layer) = registry()
                .layer(tag)
                .filter(|layer| layer.family.parent() == Some(family))
            {
                envelope = (layer.descend_payload)(&body, &mut decoded)?;
                family = layer.family;
                continue;
            }
            return match leaf_at(tag, family) {
                Some(entry) => (entry.decode_payload)(decoded, &body),
                None => Err(unknown_variant(level, tag)),
            };
        }
    }

    /// SHA-256 over the hash-mode encoding.
    pub fn hash(&self) -> Result<[u8; 32], CodecError> {
        Ok(sha256(&self.encode(EncodeMode::Hash)?))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Account
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a leaf account envelope in the layer messages of its family.
fn wrap_account(
    family: Family,
    country: Option<wire::Country>,
    leaf: VariantEnvelope,
) -> VariantEnvelope {
    let layer = |inner: VariantEnvelope, tag: u32| {
        VariantEnvelope::of(
            tag,
            &wire::LayerAccount {
                message: Some(inner),
            },
        )
    };
    let country_based = |inner: VariantEnvelope| {
        VariantEnvelope::of(
            wire::COUNTRY_BASED_TAG,
            &wire::CountryBasedAccount {
                country,
                message: Some(inner),
            },
        )
    };
    match family {
        Family::Base => leaf,
        Family::CountryBased => country_based(leaf),
        Family::Bank => country_based(layer(leaf, wire::BANK_TAG)),
        Family::IfscBased => country_based(layer(leaf, wire::IFSC_BASED_TAG)),
        Family::CryptoAsset => layer(leaf, wire::CRYPTO_ASSET_TAG),
    }
}

impl Account {
    pub fn to_proto(&self, mode: EncodeMode) -> Result<wire::Account, CodecError> {
        let kind = self.kind();
        let leaf = registry()
            .rail(kind.tag())
            .and_then(|entry| (entry.encode_account)(self, mode))
            .ok_or_else(|| unknown_variant(Level::account(kind.family()), kind.tag()))?;
        let country = self.country().map(wire::Country::from);
        Ok(wire::Account {
            id: self.id().to_string(),
            creation_date: self.creation_date().timestamp_millis(),
            account_name: self.account_name().to_string(),
            account_payload: Some(self.payload().to_proto(mode)?),
            payment_method: Some(wire::PaymentMethod {
                name: self.payment_method().name().to_string(),
            }),
            message: Some(wrap_account(self.family(), country, leaf)),
        })
    }

    pub fn encode(&self, mode: EncodeMode) -> Result<Vec<u8>, CodecError> {
        Ok(self.to_proto(mode)?.encode_to_vec())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let proto = wire::Account::decode(bytes)?;
        Self::from_proto(proto)
    }

    pub fn from_proto(proto: wire::Account) -> Result<Self, CodecError> {
        let payload_proto = proto
            .account_payload
            .ok_or_else(|| CodecError::mismatch("account_payload", "missing"))?;
        let payload = AccountPayload::from_proto(payload_proto)?;

        let payment_method = proto
            .payment_method
            .ok_or_else(|| CodecError::mismatch("payment_method", "missing"))?;
        if payment_method.name != payload.payment_method_name() {
            return Err(CodecError::mismatch(
                "payment_method",
                format!(
                    "{} does not match payload rail {}",
                    payment_method.name,
                    payload.payment_method_name()
                ),
            ));
        }

        let mut envelope = proto.message;
        let mut family = Family::Base;
        let mut country = None;
        let entry = loop {
            let level = Level::account(family);
            let tag = set_tag(&envelope, level)?;
            let body = envelope.map(|e| e.body).unwrap_or_default();

            if let Some(layer) = registry()
                .layer(tag)
                .filter(|layer| layer.family.parent() == Some(family))
            {
                let descent = (layer.descend_account)(&body)?;
                if descent.country.is_some() {
                    country = descent.country;
                }
                envelope = descent.message;
                family = layer.family;
                continue;
            }
            match leaf_at(tag, family) {
                Some(entry) => {
                    wire::LeafAccount::decode(body.as_slice())?;
                    break entry;
                }
                None => return Err(unknown_variant(level, tag)),
            }
        };

        if entry.kind != payload.kind() {
            return Err(CodecError::mismatch(
                "message",
                format!("{} account holds a {} payload", entry.kind, payload.kind()),
            ));
        }
        let account_country = country.as_ref().map(|c| c.code.as_str());
        if account_country != payload.country_code() {
            return Err(CodecError::mismatch(
                "country",
                "account and payload countries differ",
            ));
        }
        if let Some(country) = &country {
            let known = payment_rails::country(&country.code).map(|c| c.name);
            if known != Some(country.name.as_str()) {
                return Err(CodecError::mismatch(
                    "country",
                    format!("{} is not the name of {}", country.name, country.code),
                ));
            }
        }

        let creation_date = DateTime::from_timestamp_millis(proto.creation_date)
            .ok_or_else(|| CodecError::mismatch("creation_date", "out of range"))?;
        let parts = AccountParts {
            id: AccountId::from(proto.id),
            creation_date,
            account_name: proto.account_name,
        };
        (entry.decode_account)(parts, payload)
    }

    /// SHA-256 over the hash-mode encoding.
    pub fn hash(&self) -> Result<[u8; 32], CodecError> {
        Ok(sha256(&self.encode(EncodeMode::Hash)?))
    }
}
