//! Crypto asset leaves: Monero with its wallet extras, and every other asset.

use serde::Serialize;

use crate::canonical::{EncodeMode, normalize};
use crate::domain::layers::CryptoAssetFields;
use crate::domain::payload::PayloadVariant;
use crate::error::ValidationFailure;
use crate::validation::validate_optional_text;
use crate::wire;

const MONERO_CODE: &str = "XMR";
const VIEW_KEY_LENGTH: usize = 64;
const ADDRESS_MAX_LENGTH: usize = 200;

// ── Monero ──────────────────────────────────────────────────────────────────

/// Wallet settings for receiving each trade on a fresh sub-address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneroSubaddresses {
    pub main_address: String,
    pub account_index: u32,
    pub initial_sub_address_index: u32,
    pub sub_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monero {
    #[serde(flatten)]
    asset: CryptoAssetFields,
    private_view_key: Option<String>,
    subaddresses: Option<MoneroSubaddresses>,
}

impl Monero {
    pub fn new(
        asset: CryptoAssetFields,
        private_view_key: Option<String>,
        subaddresses: Option<MoneroSubaddresses>,
    ) -> Result<Self, ValidationFailure> {
        let payload = Self {
            asset,
            private_view_key: normalize(private_view_key),
            subaddresses: subaddresses.map(|s| MoneroSubaddresses {
                sub_address: normalize(s.sub_address),
                ..s
            }),
        };
        payload.verify()?;
        Ok(payload)
    }

    pub fn asset(&self) -> &CryptoAssetFields {
        &self.asset
    }

    pub fn private_view_key(&self) -> Option<&str> {
        self.private_view_key.as_deref()
    }

    pub fn subaddresses(&self) -> Option<&MoneroSubaddresses> {
        self.subaddresses.as_ref()
    }
}

impl PayloadVariant for Monero {
    type Layer = CryptoAssetFields;
    type Proto = wire::MoneroAccountPayload;

    fn layer(&self) -> &CryptoAssetFields {
        &self.asset
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        if self.asset.currency_code() != MONERO_CODE {
            return Err(
                ValidationFailure::mismatch("currency_code", "Monero accounts hold XMR")
                    .with_value(self.asset.currency_code()),
            );
        }
        if let Some(key) = &self.private_view_key {
            if key.len() != VIEW_KEY_LENGTH || !key.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ValidationFailure::format("private_view_key", "64 hex digits"));
            }
        }
        if let Some(subaddresses) = &self.subaddresses {
            if self.private_view_key.is_none() {
                return Err(ValidationFailure::coupled(
                    "subaddresses",
                    "private_view_key",
                ));
            }
            validate_optional_text(
                "main_address",
                Some(&subaddresses.main_address),
                1,
                ADDRESS_MAX_LENGTH,
            )?;
            validate_optional_text(
                "sub_address",
                subaddresses.sub_address.as_deref(),
                1,
                ADDRESS_MAX_LENGTH,
            )?;
        }
        Ok(())
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        let sub = self.subaddresses.as_ref();
        wire::MoneroAccountPayload {
            private_view_key: self.private_view_key.clone(),
            use_sub_addresses: sub.is_some(),
            main_address: sub.map(|s| s.main_address.clone()),
            account_index: sub.map(|s| s.account_index),
            initial_sub_address_index: sub.map(|s| s.initial_sub_address_index),
            sub_address: sub.and_then(|s| s.sub_address.clone()),
        }
    }

    fn from_proto(asset: CryptoAssetFields, proto: Self::Proto) -> Result<Self, ValidationFailure> {
        let main_address = normalize(proto.main_address);
        let subaddresses = match (
            proto.use_sub_addresses,
            main_address,
            proto.account_index,
            proto.initial_sub_address_index,
        ) {
            (true, Some(main_address), Some(account_index), Some(initial_sub_address_index)) => {
                Some(MoneroSubaddresses {
                    main_address,
                    account_index,
                    initial_sub_address_index,
                    sub_address: proto.sub_address,
                })
            }
            (false, None, None, None) if normalize(proto.sub_address.clone()).is_none() => None,
            _ => {
                return Err(ValidationFailure::coupled(
                    "use_sub_addresses",
                    "main_address, account_index and initial_sub_address_index",
                ));
            }
        };
        Self::new(asset, proto.private_view_key, subaddresses)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![
            self.asset.currency_code(),
            self.asset.address(),
            self.private_view_key.as_deref().unwrap_or_default(),
        ]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        vec![self.asset.currency_code().to_string()]
    }
}

// ── Other assets ────────────────────────────────────────────────────────────

/// A plain receiving address for any supported asset other than Monero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherCryptoAsset {
    #[serde(flatten)]
    asset: CryptoAssetFields,
}

impl OtherCryptoAsset {
    pub fn new(asset: CryptoAssetFields) -> Result<Self, ValidationFailure> {
        let payload = Self { asset };
        payload.verify()?;
        Ok(payload)
    }

    pub fn asset(&self) -> &CryptoAssetFields {
        &self.asset
    }
}

impl PayloadVariant for OtherCryptoAsset {
    type Layer = CryptoAssetFields;
    type Proto = wire::OtherCryptoAssetAccountPayload;

    fn layer(&self) -> &CryptoAssetFields {
        &self.asset
    }

    fn verify_fields(&self) -> Result<(), ValidationFailure> {
        if self.asset.currency_code() == MONERO_CODE {
            return Err(ValidationFailure::unsupported(
                "currency_code",
                self.asset.currency_code(),
            ));
        }
        Ok(())
    }

    fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
        wire::OtherCryptoAssetAccountPayload {}
    }

    fn from_proto(asset: CryptoAssetFields, _proto: Self::Proto) -> Result<Self, ValidationFailure> {
        Self::new(asset)
    }

    fn fingerprint_data(&self) -> Vec<&str> {
        vec![self.asset.currency_code(), self.asset.address()]
    }

    fn trade_currency_codes(&self) -> Vec<String> {
        vec![self.asset.currency_code().to_string()]
    }
}
