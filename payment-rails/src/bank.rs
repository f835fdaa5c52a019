//! Which optional bank-account fields a country's banking system needs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BankFieldRequirements {
    pub holder_name: bool,
    pub holder_id: bool,
    pub bank_name: bool,
    pub bank_id: bool,
    pub branch_id: bool,
    pub account_type: bool,
    pub national_account_id: bool,
}

impl BankFieldRequirements {
    const fn names(holder_name: bool, bank_name: bool) -> Self {
        Self {
            holder_name,
            holder_id: false,
            bank_name,
            bank_id: false,
            branch_id: false,
            account_type: false,
            national_account_id: false,
        }
    }
}

pub fn bank_field_requirements(country_code: &str) -> BankFieldRequirements {
    let base = BankFieldRequirements::names(true, true);
    match country_code {
        "US" => BankFieldRequirements {
            bank_id: true,
            account_type: true,
            ..base
        },
        "CA" => BankFieldRequirements {
            bank_id: true,
            branch_id: true,
            ..base
        },
        "GB" | "AU" => BankFieldRequirements {
            bank_id: true,
            ..BankFieldRequirements::names(true, false)
        },
        "SE" => BankFieldRequirements::default(),
        "BR" => BankFieldRequirements {
            holder_id: true,
            bank_id: true,
            branch_id: true,
            account_type: true,
            ..base
        },
        "AR" => BankFieldRequirements {
            holder_id: true,
            bank_id: true,
            branch_id: true,
            national_account_id: true,
            ..base
        },
        "CL" => BankFieldRequirements {
            holder_id: true,
            account_type: true,
            ..base
        },
        "MX" => BankFieldRequirements {
            national_account_id: true,
            ..base
        },
        _ => base,
    }
}
