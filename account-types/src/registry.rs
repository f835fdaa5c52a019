//! Variant registry: wire tag to typed decode, encode and validate functions.
//!
//! The table is built once per process on first use and is read-only
//! afterwards. Adding a rail means adding one line to `define_account_kinds!`;
//! the default entries are generated from that list.

use std::collections::HashMap;
use std::sync::OnceLock;

use prost::Message;

use crate::canonical::EncodeMode;
use crate::domain::account::AccountParts;
use crate::domain::kind::default_rail_entries;
use crate::domain::payload::DecodedPayload;
use crate::domain::{
    Account, AccountKind, AccountPayload, Family, KindedPayload, PayloadLayer, PayloadVariant,
};
use crate::error::{CodecError, RegistryError, ValidationFailure};
use crate::wire::{self, VariantEnvelope};

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// Typed functions for one leaf variant, shared by its payload and account.
#[derive(Clone, Copy)]
pub struct RailEntry {
    pub kind: AccountKind,
    pub family: Family,
    pub(crate) decode_payload: fn(DecodedPayload, &[u8]) -> Result<AccountPayload, CodecError>,
    pub(crate) encode_payload: fn(&AccountPayload, EncodeMode) -> Option<wire::AccountPayload>,
    pub(crate) validate_payload: fn(&AccountPayload) -> Result<(), ValidationFailure>,
    pub(crate) decode_account: fn(AccountParts, AccountPayload) -> Result<Account, CodecError>,
    pub(crate) encode_account: fn(&Account, EncodeMode) -> Option<VariantEnvelope>,
    pub(crate) validate_account: fn(&Account) -> Result<(), ValidationFailure>,
}

impl RailEntry {
    pub fn of<V: PayloadVariant>() -> Self {
        Self {
            kind: V::KIND,
            family: <V::Layer as PayloadLayer>::FAMILY,
            decode_payload: decode_payload::<V>,
            encode_payload: encode_payload::<V>,
            validate_payload: validate_payload::<V>,
            decode_account: decode_account::<V>,
            encode_account: encode_account::<V>,
            validate_account: validate_account::<V>,
        }
    }

    pub fn tag(&self) -> u32 {
        self.kind.tag()
    }
}

impl std::fmt::Debug for RailEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailEntry")
            .field("kind", &self.kind)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

fn decode_payload<V: PayloadVariant>(
    mut decoded: DecodedPayload,
    body: &[u8],
) -> Result<AccountPayload, CodecError> {
    let rail = V::rail();
    if decoded.payment_method_name != rail.name() {
        return Err(CodecError::mismatch(
            "payment_method_name",
            format!(
                "{} does not match {} variant",
                decoded.payment_method_name,
                V::KIND
            ),
        ));
    }
    let layer = V::Layer::from_decoded(&mut decoded)?;
    let proto = V::Proto::decode(body)?;
    Ok(V::from_proto(layer, proto)?.into())
}

fn encode_payload<V: PayloadVariant>(
    payload: &AccountPayload,
    mode: EncodeMode,
) -> Option<wire::AccountPayload> {
    V::extract(payload).map(|leaf| leaf.to_wire(mode))
}

fn validate_payload<V: PayloadVariant>(payload: &AccountPayload) -> Result<(), ValidationFailure> {
    match V::extract(payload) {
        Some(leaf) => leaf.verify(),
        None => Err(kind_mismatch::<V>(payload.kind())),
    }
}

fn decode_account<V: PayloadVariant>(
    parts: AccountParts,
    payload: AccountPayload,
) -> Result<Account, CodecError> {
    if V::extract(&payload).is_none() {
        return Err(CodecError::mismatch(
            "account_payload",
            format!("{} account holds a {} payload", V::KIND, payload.kind()),
        ));
    }
    Ok(Account::from_wire_parts(parts, payload)?)
}

fn encode_account<V: PayloadVariant>(account: &Account, _mode: EncodeMode) -> Option<VariantEnvelope> {
    V::extract(account.payload()).map(|_| VariantEnvelope::of(V::KIND.tag(), &wire::LeafAccount {}))
}

fn validate_account<V: PayloadVariant>(account: &Account) -> Result<(), ValidationFailure> {
    validate_payload::<V>(account.payload())?;
    account.verify_fields()
}

fn kind_mismatch<V: KindedPayload>(actual: AccountKind) -> ValidationFailure {
    ValidationFailure::mismatch("kind", format!("expected {}, found {}", V::KIND, actual))
}

/// What an intermediate account layer contributes on the way down.
#[derive(Debug, Clone, Default)]
pub(crate) struct AccountDescent {
    pub(crate) country: Option<wire::Country>,
    pub(crate) message: Option<VariantEnvelope>,
}

/// Decode steps for one intermediate layer.
#[derive(Clone, Copy)]
pub struct LayerEntry {
    pub tag: u32,
    pub family: Family,
    pub(crate) descend_payload:
        fn(&[u8], &mut DecodedPayload) -> Result<Option<VariantEnvelope>, CodecError>,
    pub(crate) descend_account: fn(&[u8]) -> Result<AccountDescent, CodecError>,
}

impl std::fmt::Debug for LayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerEntry")
            .field("tag", &self.tag)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

fn descend_country_based(
    body: &[u8],
    decoded: &mut DecodedPayload,
) -> Result<Option<VariantEnvelope>, CodecError> {
    let mut proto = wire::CountryBasedAccountPayload::decode(body)?;
    let message = proto.message.take();
    decoded.country_based = Some(proto);
    Ok(message)
}

fn descend_bank(
    body: &[u8],
    decoded: &mut DecodedPayload,
) -> Result<Option<VariantEnvelope>, CodecError> {
    let mut proto = wire::BankAccountPayload::decode(body)?;
    let message = proto.message.take();
    decoded.bank = Some(proto);
    Ok(message)
}

fn descend_ifsc(
    body: &[u8],
    decoded: &mut DecodedPayload,
) -> Result<Option<VariantEnvelope>, CodecError> {
    let mut proto = wire::IfscBasedAccountPayload::decode(body)?;
    let message = proto.message.take();
    decoded.ifsc = Some(proto);
    Ok(message)
}

fn descend_crypto(
    body: &[u8],
    decoded: &mut DecodedPayload,
) -> Result<Option<VariantEnvelope>, CodecError> {
    let mut proto = wire::CryptoAssetAccountPayload::decode(body)?;
    let message = proto.message.take();
    decoded.crypto = Some(proto);
    Ok(message)
}

fn descend_country_account(body: &[u8]) -> Result<AccountDescent, CodecError> {
    let proto = wire::CountryBasedAccount::decode(body)?;
    Ok(AccountDescent {
        country: proto.country,
        message: proto.message,
    })
}

fn descend_layer_account(body: &[u8]) -> Result<AccountDescent, CodecError> {
    let proto = wire::LayerAccount::decode(body)?;
    Ok(AccountDescent {
        country: None,
        message: proto.message,
    })
}

fn default_layer_entries() -> Vec<LayerEntry> {
    vec![
        LayerEntry {
            tag: wire::COUNTRY_BASED_TAG,
            family: Family::CountryBased,
            descend_payload: descend_country_based,
            descend_account: descend_country_account,
        },
        LayerEntry {
            tag: wire::BANK_TAG,
            family: Family::Bank,
            descend_payload: descend_bank,
            descend_account: descend_layer_account,
        },
        LayerEntry {
            tag: wire::IFSC_BASED_TAG,
            family: Family::IfscBased,
            descend_payload: descend_ifsc,
            descend_account: descend_layer_account,
        },
        LayerEntry {
            tag: wire::CRYPTO_ASSET_TAG,
            family: Family::CryptoAsset,
            descend_payload: descend_crypto,
            descend_account: descend_layer_account,
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct VariantRegistry {
    rails: HashMap<u32, RailEntry>,
    layers: HashMap<u32, LayerEntry>,
}

impl VariantRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from explicit entries. The first repeated tag fails the build.
    pub fn from_entries(
        layers: impl IntoIterator<Item = LayerEntry>,
        rails: impl IntoIterator<Item = RailEntry>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in layers {
            registry.register_layer(entry)?;
        }
        for entry in rails {
            registry.register(entry)?;
        }
        Ok(registry)
    }

    /// Every built-in layer and leaf variant.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables repeat a tag.
    pub fn with_defaults() -> Self {
        match Self::from_entries(default_layer_entries(), default_rail_entries()) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::error!(error = %e, "Built-in variant table is inconsistent");
                panic!("built-in variant table is inconsistent: {e}");
            }
        }
    }

    /// Adds a leaf variant. Tags are unique across leaves and layers.
    pub fn register(&mut self, entry: RailEntry) -> Result<(), RegistryError> {
        let tag = entry.tag();
        if self.rails.contains_key(&tag) || self.layers.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }
        self.rails.insert(tag, entry);
        Ok(())
    }

    pub fn register_layer(&mut self, entry: LayerEntry) -> Result<(), RegistryError> {
        if self.layers.contains_key(&entry.tag) || self.rails.contains_key(&entry.tag) {
            return Err(RegistryError::DuplicateLayer(entry.tag));
        }
        self.layers.insert(entry.tag, entry);
        Ok(())
    }

    pub fn rail(&self, tag: u32) -> Option<&RailEntry> {
        self.rails.get(&tag)
    }

    pub fn layer(&self, tag: u32) -> Option<&LayerEntry> {
        self.layers.get(&tag)
    }

    /// Number of registered leaf variants.
    pub fn len(&self) -> usize {
        self.rails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rails.is_empty()
    }

    pub fn validate_payload(&self, payload: &AccountPayload) -> Result<(), ValidationFailure> {
        let kind = payload.kind();
        match self.rail(kind.tag()) {
            Some(entry) => (entry.validate_payload)(payload),
            None => Err(ValidationFailure::unsupported("kind", kind.name())),
        }
    }

    pub fn validate_account(&self, account: &Account) -> Result<(), ValidationFailure> {
        let kind = account.kind();
        match self.rail(kind.tag()) {
            Some(entry) => (entry.validate_account)(account),
            None => Err(ValidationFailure::unsupported("kind", kind.name())),
        }
    }
}

static REGISTRY: OnceLock<VariantRegistry> = OnceLock::new();

/// The process-wide registry, populated with the defaults on first use.
pub fn registry() -> &'static VariantRegistry {
    REGISTRY.get_or_init(|| {
        let registry = VariantRegistry::with_defaults();
        tracing::debug!(
            variants = registry.len(),
            layers = registry.layers.len(),
            "Variant registry initialized"
        );
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PayloadCore, Zelle};

    #[test]
    fn test_defaults_cover_every_kind() {
        let registry = VariantRegistry::with_defaults();
        assert_eq!(registry.len(), AccountKind::all().len());
        for kind in AccountKind::all() {
            let entry = registry.rail(kind.tag()).unwrap();
            assert_eq!(entry.kind, *kind);
            assert_eq!(entry.family, kind.family());
        }
    }

    #[test]
    fn test_layers_registered() {
        let registry = VariantRegistry::with_defaults();
        for family in [
            Family::CountryBased,
            Family::Bank,
            Family::IfscBased,
            Family::CryptoAsset,
        ] {
            let tag = family.tag().unwrap();
            assert_eq!(registry.layer(tag).map(|l| l.family), Some(family));
        }
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut registry = VariantRegistry::new();
        registry.register(RailEntry::of::<Zelle>()).unwrap();
        let result = registry.register(RailEntry::of::<Zelle>());
        assert!(matches!(result, Err(RegistryError::DuplicateTag(1))));
    }

    #[test]
    fn test_default_tables_have_unique_tags() {
        let registry = VariantRegistry::from_entries(default_layer_entries(), default_rail_entries());
        assert!(registry.is_ok());

        let mut rails = default_rail_entries();
        rails.push(RailEntry::of::<Zelle>());
        let result = VariantRegistry::from_entries(default_layer_entries(), rails);
        assert!(matches!(result, Err(RegistryError::DuplicateTag(1))));

        let mut layers = default_layer_entries();
        let bank = layers[1];
        layers.push(bank);
        let result = VariantRegistry::from_entries(layers, default_rail_entries());
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateLayer(wire::BANK_TAG))
        ));
    }

    #[test]
    fn test_duplicate_layer_rejected() {
        let mut registry = VariantRegistry::new();
        let layer = default_layer_entries()[0];
        registry.register_layer(layer).unwrap();
        assert!(matches!(
            registry.register_layer(layer),
            Err(RegistryError::DuplicateLayer(wire::COUNTRY_BASED_TAG))
        ));
    }

    #[test]
    fn test_unregistered_kind_fails_validation() {
        let registry = VariantRegistry::new();
        let payload: AccountPayload = Zelle::new(PayloadCore::new(), "Alice", "alice@example.com")
            .unwrap()
            .into();
        assert!(registry.validate_payload(&payload).is_err());
    }

    #[test]
    fn test_global_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
        assert!(!registry().is_empty());
    }
}
