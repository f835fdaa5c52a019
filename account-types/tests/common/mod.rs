//! Shared fixtures for the integration tests: one valid payload per account kind.

#![allow(dead_code)]

use account_types::domain::*;

pub const VIEW_KEY: &str = "0f3fe25d0c6d4c94dde0c0bcc214b233e9c72927f813728b0f01f28f9d5e1201";
pub const XMR_ADDRESS: &str = "4AdUndXHHZ6cfufTMvppY6JwXNou";

pub fn codes(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|code| code.to_string()).collect()
}

pub fn core() -> PayloadCore {
    PayloadCore::new()
}

pub fn in_country(code: &str) -> CountryBasedFields {
    CountryBasedFields::new(core(), code)
}

pub fn us_bank_details() -> BankAccountDetails {
    BankAccountDetails {
        selected_currency_code: "USD".into(),
        holder_name: Some("Jane Doe".into()),
        bank_name: Some("First Bank".into()),
        bank_id: Some("111000025".into()),
        account_nr: "123456789".into(),
        bank_account_type: Some(BankAccountType::Checking),
        ..Default::default()
    }
}

pub fn german_bank_details() -> BankAccountDetails {
    BankAccountDetails {
        selected_currency_code: "EUR".into(),
        holder_name: Some("Max Mustermann".into()),
        bank_name: Some("Sparkasse".into()),
        account_nr: "0532013000".into(),
        ..Default::default()
    }
}

pub fn us_bank() -> BankAccountFields {
    BankAccountFields::new(core(), "US", us_bank_details())
}

pub fn ifsc_fields() -> IfscBasedFields {
    IfscBasedFields::new(core(), "Asha Rao", "00012345678", "SBIN0001234")
}

pub fn swift_details() -> SwiftAccountDetails {
    SwiftAccountDetails {
        beneficiary_name: "Jane Doe".into(),
        beneficiary_account_nr: "12345678".into(),
        beneficiary_address: "1 Main Street".into(),
        selected_currency_code: "USD".into(),
        bank_swift_code: "DEUTDEFF".into(),
        bank_name: "Deutsche Bank".into(),
        bank_address: "Taunusanlage 12".into(),
        ..Default::default()
    }
}

pub fn monero_subaddresses() -> MoneroSubaddresses {
    MoneroSubaddresses {
        main_address: XMR_ADDRESS.into(),
        account_index: 0,
        initial_sub_address_index: 1,
        sub_address: Some("8BwSubAddress".into()),
    }
}

pub fn auto_conf() -> AutoConf {
    AutoConf {
        num_confirmations: 10,
        max_trade_amount: 500_000_000_000,
        explorer_urls: "https://xmrchain.net".into(),
    }
}

pub fn sepa() -> Sepa {
    Sepa::new(
        in_country("DE"),
        "Max Mustermann",
        "DE89370400440532013000",
        "DEUTDEFF",
        codes(&["FR", "DE", "AT"]),
    )
    .unwrap()
}

pub fn zelle() -> Zelle {
    Zelle::new(core(), "Alice Smith", "alice@example.com").unwrap()
}

pub fn ach_transfer(holder_address: Option<&str>) -> AchTransfer {
    AchTransfer::new(us_bank(), holder_address.map(str::to_string)).unwrap()
}

/// One valid payload for every registered account kind, in tag order.
pub fn sample_payloads() -> Vec<AccountPayload> {
    vec![
        zelle().into(),
        UsPostalMoneyOrder::new(core(), "Alice Smith", "123 Main St, Springfield")
            .unwrap()
            .into(),
        PayId::new(core(), "Olivia Brown", "olivia@payid.example")
            .unwrap()
            .into(),
        InteracETransfer::new(
            core(),
            "Jean Tremblay",
            "jean@example.ca",
            "Favourite colour?",
            "blue",
        )
        .unwrap()
        .into(),
        HalCash::new(core(), "+34 612 345 678").unwrap().into(),
        FasterPayments::new(core(), "Oliver Jones", "123456", "12345678")
            .unwrap()
            .into(),
        Sbp::new(core(), "Ivan Petrov", "+7 912 345 6789", "Sberbank")
            .unwrap()
            .into(),
        CashByMail::new(
            core(),
            "123 Main St, Springfield",
            "Alice Smith",
            Some("Registered mail only".into()),
        )
        .unwrap()
        .into(),
        Revolut::new(core(), "alice", codes(&["EUR", "GBP"]))
            .unwrap()
            .into(),
        Uphold::new(core(), "Alice Smith", "uphold-4711", codes(&["USD", "EUR"]))
            .unwrap()
            .into(),
        Pin4::new(core(), "+48 123 456 789").unwrap().into(),
        UserDefinedFiat::new(core(), "Pay to the cooperative ledger, member 42")
            .unwrap()
            .into(),
        AdvancedCash::new(core(), "U123456789012", codes(&["USD"]))
            .unwrap()
            .into(),
        PerfectMoney::new(core(), "U1234567").unwrap().into(),
        sepa().into(),
        SepaInstant::new(
            in_country("DE"),
            "Max Mustermann",
            "DE89370400440532013000",
            "DEUTDEFF",
            codes(&["DE"]),
        )
        .unwrap()
        .into(),
        Bizum::new(in_country("ES"), "+34 600 123 456").unwrap().into(),
        F2F::new(in_country("DE"), "EUR", "Berlin", "+49 30 1234567", None)
            .unwrap()
            .into(),
        Pix::new(in_country("BR"), "Joao Silva", "joao@example.com")
            .unwrap()
            .into(),
        PromptPay::new(in_country("TH"), "1234567890123")
            .unwrap()
            .into(),
        Strike::new(in_country("US"), "Alice Smith").unwrap().into(),
        Upi::new(in_country("IN"), "asha@okbank").unwrap().into(),
        Wise::new(
            in_country("GB"),
            codes(&["GBP", "EUR"]),
            "Oliver Jones",
            "oliver@example.co.uk",
        )
        .unwrap()
        .into(),
        WiseUsd::new(
            in_country("US"),
            Some("Jane Doe".into()),
            "jane@example.com",
            Some("1 Main Street".into()),
        )
        .unwrap()
        .into(),
        MoneyGram::new(
            in_country("US"),
            codes(&["USD"]),
            "Jane Doe",
            "jane@example.com",
            Some("NY".into()),
        )
        .unwrap()
        .into(),
        MoneyBeam::new(in_country("DE"), "EUR", "Max Mustermann", "max@example.de")
            .unwrap()
            .into(),
        Swish::new(in_country("SE"), "Anna Svensson", "+46 70 123 45 67")
            .unwrap()
            .into(),
        AmazonGiftCard::new(in_country("US"), "alice@example.com")
            .unwrap()
            .into(),
        Swift::new(in_country("DE"), swift_details()).unwrap().into(),
        Satispay::new(in_country("IT"), "Marco Rossi", "+39 312 345 6789")
            .unwrap()
            .into(),
        MercadoPago::new(in_country("AR"), "Juan Perez", "20-12345678-9")
            .unwrap()
            .into(),
        NationalBank::new(us_bank()).unwrap().into(),
        SameBank::new(BankAccountFields::new(core(), "DE", german_bank_details()))
            .unwrap()
            .into(),
        CashDeposit::new(
            BankAccountFields::new(
                core(),
                "DE",
                BankAccountDetails {
                    bank_id: Some("37040044".into()),
                    ..german_bank_details()
                },
            ),
            Some("Bring ID".into()),
        )
        .unwrap()
        .into(),
        ach_transfer(Some("1 Main Street")).into(),
        DomesticWireTransfer::new(us_bank(), None).unwrap().into(),
        Imps::new(ifsc_fields()).unwrap().into(),
        Neft::new(ifsc_fields()).unwrap().into(),
        Rtgs::new(ifsc_fields()).unwrap().into(),
        Monero::new(
            CryptoAssetFields::new(core(), "XMR", XMR_ADDRESS, false, Some(auto_conf())),
            Some(VIEW_KEY.into()),
            Some(monero_subaddresses()),
        )
        .unwrap()
        .into(),
        OtherCryptoAsset::new(CryptoAssetFields::new(core(), "LTC", "Laddr1", true, None))
            .unwrap()
            .into(),
    ]
}
