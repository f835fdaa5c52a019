//! Integration tests for construction-time rules and the legacy fingerprint.

mod common;

use account_types::domain::*;
use account_types::{Constraint, ValidationFailure, registry};

use common::{codes, core, in_country, sample_payloads, us_bank_details};

fn assert_failure(
    result: Result<impl std::fmt::Debug, ValidationFailure>,
    expected_field: &str,
) -> Constraint {
    match result {
        Err(failure) => {
            assert_eq!(failure.field, expected_field);
            failure.constraint
        }
        Ok(value) => panic!("expected {expected_field} to fail, got {value:?}"),
    }
}

#[test]
fn test_every_sample_verifies_through_registry() {
    for payload in sample_payloads() {
        assert!(registry().validate_payload(&payload).is_ok(), "{}", payload.kind());
    }
}

#[test]
fn test_holder_name_length_bounds() {
    let too_long = Zelle::new(core(), "x".repeat(101), "alice@example.com");
    assert!(matches!(
        assert_failure(too_long, "holder_name"),
        Constraint::Length { max: 100, .. }
    ));

    let too_short = Strike::new(in_country("US"), "A");
    assert!(matches!(
        assert_failure(too_short, "holder_name"),
        Constraint::Length { min: 2, .. }
    ));

    assert!(Zelle::new(core(), "x".repeat(100), "alice@example.com").is_ok());
}

#[test]
fn test_bank_holder_name_length_bound() {
    let long_holder = || BankAccountDetails {
        holder_name: Some("A".repeat(200)),
        ..us_bank_details()
    };

    let national = NationalBank::new(BankAccountFields::new(core(), "US", long_holder()));
    assert!(matches!(
        assert_failure(national, "holder_name"),
        Constraint::Length { max: 100, actual: 200, .. }
    ));

    let same_bank = SameBank::new(BankAccountFields::new(core(), "US", long_holder()));
    assert!(matches!(
        assert_failure(same_bank, "holder_name"),
        Constraint::Length { max: 100, .. }
    ));
}

#[test]
fn test_wise_usd_holder_and_address_travel_together() {
    let lone_address = WiseUsd::new(
        in_country("US"),
        None,
        "jane@example.com",
        Some("1 Main Street".into()),
    );
    assert!(matches!(
        assert_failure(lone_address, "holder_name"),
        Constraint::CoupledWith(_)
    ));
}

#[test]
fn test_national_bank_requirements_follow_country() {
    let us_without_routing = BankAccountDetails {
        bank_id: None,
        ..us_bank_details()
    };
    let result = NationalBank::new(BankAccountFields::new(core(), "US", us_without_routing));
    assert_eq!(assert_failure(result, "bank_id"), Constraint::Required);

    let german = BankAccountDetails {
        selected_currency_code: "EUR".into(),
        holder_name: Some("Max Mustermann".into()),
        bank_name: Some("Sparkasse".into()),
        account_nr: "0532013000".into(),
        ..Default::default()
    };
    assert!(NationalBank::new(BankAccountFields::new(core(), "DE", german)).is_ok());
}

#[test]
fn test_money_gram_state() {
    let missing = MoneyGram::new(
        in_country("US"),
        codes(&["USD"]),
        "Jane Doe",
        "jane@example.com",
        Some(String::new()),
    );
    assert_eq!(assert_failure(missing, "state"), Constraint::Required);
}

#[test]
fn test_country_outside_rail_rejected() {
    let result = Bizum::new(in_country("PT"), "+351 912 345 678");
    assert!(matches!(
        assert_failure(result, "country_code"),
        Constraint::Unsupported(_)
    ));
}

#[test]
fn test_unknown_country_rejected() {
    let result = Swift::new(in_country("XX"), common::swift_details());
    assert!(matches!(
        assert_failure(result, "country_code"),
        Constraint::Unsupported(_)
    ));
}

#[test]
fn test_selected_currency_outside_rail_rejected() {
    let result = MoneyBeam::new(in_country("DE"), "USD", "Max Mustermann", "max@example.de");
    assert!(matches!(
        assert_failure(result, "selected_currency_code"),
        Constraint::Unsupported(_)
    ));
}

#[test]
fn test_empty_code_list_rejected() {
    let result = Revolut::new(core(), "alice", Vec::new());
    assert_eq!(
        assert_failure(result, "selected_currency_codes"),
        Constraint::Required
    );
}

#[test]
fn test_repeated_selected_currency_rejected() {
    let result = Revolut::new(core(), "alice", codes(&["EUR", "EUR"]));
    assert_eq!(
        assert_failure(result, "selected_currency_codes"),
        Constraint::Duplicate("EUR".into())
    );

    let single: AccountPayload = Revolut::new(core(), "alice", codes(&["EUR"]))
        .unwrap()
        .into();
    assert_eq!(single.currency_code().as_deref(), Some("EUR"));
}

#[test]
fn test_account_rejects_empty_name() {
    let result = Account::new("", common::zelle().into());
    assert_eq!(assert_failure(result, "account_name"), Constraint::Required);
}

// ─────────────────────────────────────────────────────────────────────────────
// Fingerprints
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fingerprint_vectors() {
    let cases: Vec<(AccountPayload, &str)> = vec![
        (common::zelle().into(), "CLEAR_X_CHANGEalice@example.com"),
        (
            Wise::new(
                in_country("GB"),
                codes(&["GBP"]),
                "Oliver Jones",
                "oliver@example.co.uk",
            )
            .unwrap()
            .into(),
            "TRANSFERWISEoliver@example.co.ukOliver Jones",
        ),
        (
            Neft::new(common::ifsc_fields()).unwrap().into(),
            "NEFTSBIN000123400012345678",
        ),
        (
            NationalBank::new(common::us_bank()).unwrap().into(),
            "NATIONAL_BANKUSFirst Bank111000025123456789CHECKING",
        ),
        (
            OtherCryptoAsset::new(CryptoAssetFields::new(core(), "LTC", "Laddr1", true, None))
                .unwrap()
                .into(),
            "NATIVE_CHAINLTCLaddr1",
        ),
    ];
    for (payload, expected) in cases {
        assert_eq!(
            payload.fingerprint(),
            expected.as_bytes(),
            "{}",
            payload.kind()
        );
    }
}

#[test]
fn test_fingerprint_ignores_identity_and_optional_extras() {
    let plain = CashByMail::new(core(), "123 Main St", "Alice", None).unwrap();
    let with_extra =
        CashByMail::new(core(), "123 Main St", "Alice", Some("Ring twice".into())).unwrap();
    assert_eq!(plain.fingerprint(), with_extra.fingerprint());
}

#[test]
fn test_trade_currencies() {
    for payload in sample_payloads() {
        let codes = payload.trade_currency_codes();
        assert!(!codes.is_empty(), "{}", payload.kind());
        for code in &codes {
            assert!(
                payload.rail().supports_currency(code),
                "{} trades {code}",
                payload.kind()
            );
        }
    }
}
