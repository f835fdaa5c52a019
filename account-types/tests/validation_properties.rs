//! Property-based tests for the field validators and canonical forms.

mod validator_properties {
    use account_types::Constraint;
    use account_types::validation::*;
    use proptest::prelude::*;

    const VALID_IBAN: &str = "DE89370400440532013000";

    proptest! {
        /// Text inside the bounds passes, text past the maximum reports its length.
        #[test]
        fn required_text_bounds(text in "[A-Za-z]{1,60}") {
            prop_assert!(validate_required_text("name", &text, 1, 60).is_ok());

            let longer = format!("{text}{}", "x".repeat(61));
            let err = validate_required_text("name", &longer, 1, 60).unwrap_err();
            prop_assert_eq!(
                err.constraint,
                Constraint::Length { min: 1, max: 60, actual: longer.chars().count() }
            );
        }

        /// Whitespace alone never satisfies a required field.
        #[test]
        fn blank_text_is_missing(text in "[ \t]{0,20}") {
            let err = validate_required_text("name", &text, 0, 60).unwrap_err();
            prop_assert_eq!(err.constraint, Constraint::Required);
        }

        #[test]
        fn simple_emails_accepted(
            local in "[a-z0-9._]{1,20}",
            host in "[a-z]{1,20}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{host}.{tld}");
            prop_assert!(validate_email("email", &email).is_ok());
        }

        #[test]
        fn emails_without_domain_dot_rejected(local in "[a-z]{1,20}", host in "[a-z]{1,20}") {
            let email = format!("{local}@{host}");
            prop_assert!(validate_email("email", &email).is_err());
        }

        /// Spanish numbers in international form pass for ES and fail for SE.
        #[test]
        fn phone_region_prefix(subscriber in "[0-9]{9}") {
            let number = format!("+34 {subscriber}");
            prop_assert!(validate_phone_number("mobile_nr", &number, Some("ES")).is_ok());
            prop_assert!(validate_phone_number("mobile_nr", &number, Some("SE")).is_err());
            prop_assert!(validate_phone_number("mobile_nr", &number, None).is_ok());
        }

        #[test]
        fn phone_with_letters_rejected(prefix in "[0-9]{4,8}", letter in "[a-zA-Z]") {
            let number = format!("{prefix}{letter}123");
            prop_assert!(validate_phone_number("mobile_nr", &number, None).is_err());
        }

        /// Any single-digit substitution breaks the mod-97 checksum.
        #[test]
        fn iban_single_digit_errors_detected(position in 2usize..22, digit in 0u8..10) {
            let mut bytes = VALID_IBAN.as_bytes().to_vec();
            let replacement = b'0' + digit;
            prop_assume!(bytes[position] != replacement);
            bytes[position] = replacement;
            let mutated = String::from_utf8(bytes).unwrap();
            prop_assert!(validate_iban("iban", &mutated).is_err());
        }

        #[test]
        fn ifsc_shape(bank in "[A-Z]{4}", branch in "[A-Z0-9]{6}") {
            let valid = format!("{bank}0{branch}");
            let invalid = format!("{bank}1{branch}");
            prop_assert!(validate_ifsc("ifsc", &valid).is_ok());
            prop_assert!(validate_ifsc("ifsc", &invalid).is_err());
        }
    }

    #[test]
    fn valid_iban_passes() {
        assert!(validate_iban("iban", VALID_IBAN).is_ok());
        assert!(validate_iban("iban", "DE89 3704 0044 0532 0130 00").is_ok());
    }
}

mod canonical_properties {
    use account_types::EncodeMode;
    use account_types::canonical::{code_list, normalize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normal_mode_keeps_order(codes in prop::collection::vec("[A-Z]{2}", 0..12)) {
            prop_assert_eq!(code_list(&codes, EncodeMode::Normal), codes);
        }

        /// Hash mode output is sorted, unique and independent of input order.
        #[test]
        fn hash_mode_is_canonical(codes in prop::collection::vec("[A-Z]{2}", 0..12)) {
            let hashed = code_list(&codes, EncodeMode::Hash);
            prop_assert!(hashed.windows(2).all(|w| w[0] < w[1]));

            let mut reversed = codes.clone();
            reversed.reverse();
            prop_assert_eq!(code_list(&reversed, EncodeMode::Hash), hashed.clone());
            prop_assert_eq!(code_list(&hashed, EncodeMode::Hash), hashed);
        }

        #[test]
        fn normalize_keeps_non_empty(value in "[a-z ]{1,20}") {
            prop_assert_eq!(normalize(Some(value.clone())), Some(value));
        }
    }
}

mod codec_properties {
    use account_types::domain::{PayloadCore, Revolut, Zelle};
    use account_types::{AccountPayload, EncodeMode};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn zelle_round_trips(
            first in "[A-Z][a-z]{1,20}",
            last in "[A-Z][a-z]{1,20}",
            user in "[a-z]{1,12}",
        ) {
            let holder = format!("{first} {last}");
            let email = format!("{user}@example.com");
            let payload: AccountPayload = Zelle::new(PayloadCore::new(), holder, email)
                .unwrap()
                .into();
            let bytes = payload.encode(EncodeMode::Normal).unwrap();
            prop_assert_eq!(AccountPayload::decode(&bytes).unwrap(), payload);
        }

        /// Selection order changes the normal encoding but never the hash.
        #[test]
        fn revolut_hash_ignores_selection_order(
            codes in prop::sample::subsequence(vec!["EUR", "GBP", "USD", "CHF", "SEK"], 1..5)
        ) {
            let codes: Vec<String> = codes.into_iter().map(String::from).collect();
            let mut reversed = codes.clone();
            reversed.reverse();

            let core = PayloadCore::new();
            let a: AccountPayload = Revolut::new(core.clone(), "alice", codes).unwrap().into();
            let b: AccountPayload = Revolut::new(core, "alice", reversed).unwrap().into();
            prop_assert_eq!(a.hash().unwrap(), b.hash().unwrap());
        }
    }
}
