//! Integration tests for the canonical codec.
//!
//! Every registered account kind is encoded and decoded through the public
//! API, both as a bare payload and wrapped in an account.

mod common;

use account_types::domain::{
    AccountKind, AchTransfer, BankAccountFields, KindedPayload, NationalBank, PayloadCore, Sepa,
    SepaInstant, Zelle,
};
use account_types::error::Side;
use account_types::wire::{self, VariantEnvelope};
use account_types::{
    Account, AccountPayload, CodecError, Constraint, EncodeMode, Family, ValidationFailure,
};
use prost::Message;

use common::{sample_payloads, sepa, zelle};

#[test]
fn test_samples_cover_every_kind() {
    let kinds: Vec<AccountKind> = sample_payloads().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, AccountKind::all());
}

#[test]
fn test_every_payload_round_trips() {
    for payload in sample_payloads() {
        let bytes = payload.encode(EncodeMode::Normal).unwrap();
        let decoded = AccountPayload::decode(&bytes)
            .unwrap_or_else(|e| panic!("{} failed to decode: {e}", payload.kind()));
        assert_eq!(decoded, payload, "{}", payload.kind());
    }
}

#[test]
fn test_every_account_round_trips() {
    for payload in sample_payloads() {
        let kind = payload.kind();
        let account = Account::new(format!("My {kind}"), payload).unwrap();
        let bytes = account.encode(EncodeMode::Normal).unwrap();
        let decoded = Account::decode(&bytes)
            .unwrap_or_else(|e| panic!("{kind} account failed to decode: {e}"));
        assert_eq!(decoded, account, "{kind}");
        assert_eq!(decoded.payment_method().name(), kind.rail().name());
    }
}

#[test]
fn test_hash_bytes_decode_to_same_hash() {
    for payload in sample_payloads() {
        let hash_bytes = payload.encode(EncodeMode::Hash).unwrap();
        let decoded = AccountPayload::decode(&hash_bytes).unwrap();
        assert_eq!(
            decoded.encode(EncodeMode::Hash).unwrap(),
            hash_bytes,
            "{}",
            payload.kind()
        );
        assert_eq!(decoded.hash().unwrap(), payload.hash().unwrap());
    }
}

#[test]
fn test_account_hash_stable_across_decode() {
    let account = Account::new("Sepa", sepa().into()).unwrap();
    let bytes = account.encode(EncodeMode::Normal).unwrap();
    let decoded = Account::decode(&bytes).unwrap();
    assert_eq!(decoded.hash().unwrap(), account.hash().unwrap());
}

#[test]
fn test_hash_ignores_code_list_order() {
    let a = sepa();
    let mut proto = AccountPayload::from(a.clone())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    let mut country_based =
        wire::CountryBasedAccountPayload::decode(proto.message.as_ref().unwrap().body.as_slice())
            .unwrap();
    let mut leaf =
        wire::SepaAccountPayload::decode(country_based.message.as_ref().unwrap().body.as_slice())
            .unwrap();
    leaf.accepted_country_codes.reverse();
    country_based.message = Some(VariantEnvelope::of(100, &leaf));
    proto.message = Some(VariantEnvelope::of(wire::COUNTRY_BASED_TAG, &country_based));

    let reordered = AccountPayload::from_proto(proto).unwrap();
    assert_ne!(reordered, AccountPayload::from(a.clone()));
    assert_eq!(reordered.hash().unwrap(), AccountPayload::from(a).hash().unwrap());
}

#[test]
fn test_absent_and_empty_optional_hash_alike() {
    let core = PayloadCore::new();
    let bank = || BankAccountFields::new(core.clone(), "US", common::us_bank_details());
    let absent = AchTransfer::new(bank(), None).unwrap();
    let empty = AchTransfer::new(bank(), Some(String::new())).unwrap();
    assert_eq!(
        AccountPayload::from(absent).hash().unwrap(),
        AccountPayload::from(empty).hash().unwrap()
    );
}

#[test]
fn test_hash_covers_identity() {
    let a: AccountPayload = zelle().into();
    let b: AccountPayload = zelle().into();
    // Same fields, fresh id and salt.
    assert_ne!(a.hash().unwrap(), b.hash().unwrap());
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_decoded_payload_extracts_to_leaf() {
    let bytes = AccountPayload::from(sepa()).encode(EncodeMode::Normal).unwrap();
    let decoded = AccountPayload::decode(&bytes).unwrap();
    let leaf = Sepa::extract(&decoded).unwrap();
    assert_eq!(leaf.iban(), "DE89370400440532013000");
    assert!(Zelle::extract(&decoded).is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_message_is_unresolvable() {
    let mut proto = AccountPayload::from(zelle())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    proto.message = None;
    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::UnresolvableMessage { level })
            if level.side == Side::Payload && level.family == Family::Base
    ));
}

#[test]
fn test_unset_leaf_under_layer_is_unresolvable() {
    let mut proto = AccountPayload::from(sepa())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    let country_based = wire::CountryBasedAccountPayload {
        country_code: "DE".into(),
        message: None,
    };
    proto.message = Some(VariantEnvelope::of(wire::COUNTRY_BASED_TAG, &country_based));
    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::UnresolvableMessage { level }) if level.family == Family::CountryBased
    ));
}

#[test]
fn test_unknown_tag_fails_closed() {
    let mut proto = AccountPayload::from(zelle())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    proto.message = Some(VariantEnvelope::new(9_999, Vec::new()));
    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::UnknownVariant { tag: 9_999, .. })
    ));
}

#[test]
fn test_base_leaf_under_country_layer_is_unknown() {
    // Zelle is a base leaf; it cannot sit under the country-based layer.
    let zelle_proto = AccountPayload::from(zelle())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    let zelle_leaf = zelle_proto.message.unwrap();
    let mut proto = AccountPayload::from(sepa())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    let country_based = wire::CountryBasedAccountPayload {
        country_code: "US".into(),
        message: Some(zelle_leaf),
    };
    proto.message = Some(VariantEnvelope::of(wire::COUNTRY_BASED_TAG, &country_based));
    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::UnknownVariant { tag: 1, level }) if level.family == Family::CountryBased
    ));
}

#[test]
fn test_account_leaf_must_match_payload_kind() {
    let account = Account::new("Sepa", sepa().into()).unwrap();
    let mut proto = account.to_proto(EncodeMode::Normal).unwrap();
    let instant = Account::new(
        "Instant",
        SepaInstant::new(
            common::in_country("DE"),
            "Max Mustermann",
            "DE89370400440532013000",
            "DEUTDEFF",
            common::codes(&["DE"]),
        )
        .unwrap()
        .into(),
    )
    .unwrap();
    proto.message = instant.to_proto(EncodeMode::Normal).unwrap().message;
    assert!(matches!(
        Account::from_proto(proto),
        Err(CodecError::FieldMismatch { field: "message", .. })
    ));
}

#[test]
fn test_account_unset_message_is_unresolvable() {
    let account = Account::new("Zelle", zelle().into()).unwrap();
    let mut proto = account.to_proto(EncodeMode::Normal).unwrap();
    proto.message = None;
    assert!(matches!(
        Account::from_proto(proto),
        Err(CodecError::UnresolvableMessage { level }) if level.side == Side::Account
    ));
}

#[test]
fn test_account_missing_payload() {
    let account = Account::new("Zelle", zelle().into()).unwrap();
    let mut proto = account.to_proto(EncodeMode::Normal).unwrap();
    proto.account_payload = None;
    assert!(matches!(
        Account::from_proto(proto),
        Err(CodecError::FieldMismatch {
            field: "account_payload",
            ..
        })
    ));
}

#[test]
fn test_decoded_values_are_validated() {
    let mut proto = AccountPayload::from(zelle())
        .to_proto(EncodeMode::Normal)
        .unwrap();
    let leaf = wire::ZelleAccountPayload {
        holder_name: "A".into(),
        email_or_mobile_nr: "alice@example.com".into(),
    };
    proto.message = Some(VariantEnvelope::of(1, &leaf));
    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::Invalid(_))
    ));
}

#[test]
fn test_decoded_bank_holder_name_is_bounded() {
    let payload: AccountPayload = NationalBank::new(common::us_bank()).unwrap().into();
    let mut proto = payload.to_proto(EncodeMode::Normal).unwrap();
    let mut country_based =
        wire::CountryBasedAccountPayload::decode(proto.message.as_ref().unwrap().body.as_slice())
            .unwrap();
    let mut bank =
        wire::BankAccountPayload::decode(country_based.message.as_ref().unwrap().body.as_slice())
            .unwrap();
    bank.holder_name = Some("A".repeat(200));
    country_based.message = Some(VariantEnvelope::of(wire::BANK_TAG, &bank));
    proto.message = Some(VariantEnvelope::of(wire::COUNTRY_BASED_TAG, &country_based));

    assert!(matches!(
        AccountPayload::from_proto(proto),
        Err(CodecError::Invalid(ValidationFailure {
            field: "holder_name",
            constraint: Constraint::Length { actual: 200, .. },
            ..
        }))
    ));
}

#[test]
fn test_truncated_bytes_are_malformed() {
    // Field 1 announces five bytes but only one follows.
    assert!(matches!(
        AccountPayload::decode(&[0x0a, 0x05, 0x61]),
        Err(CodecError::Malformed(_))
    ));
}
