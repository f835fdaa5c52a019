//! Accounts CLI
//!
//! Inspects canonical account encodings: decode to JSON, re-encode, hash,
//! fingerprint, and list the rail catalog.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_types::{Account, AccountPayload, EncodeMode};
use payment_rails::PaymentRail;

#[derive(Parser)]
#[command(name = "accounts")]
#[command(author, version, about = "Payment account codec inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List payment rails
    Rails {
        /// Only rails settling in this currency
        #[arg(long)]
        currency: Option<String>,
        /// Only rails available in this country
        #[arg(long)]
        country: Option<String>,
    },
    /// Decode hex bytes and print the value as JSON
    Decode {
        /// Hex-encoded bytes
        hex: String,
        /// Treat the bytes as a bare payload instead of an account
        #[arg(long)]
        payload: bool,
    },
    /// Decode hex bytes and encode them again
    Reencode {
        hex: String,
        #[arg(long)]
        payload: bool,
        /// normal or hash; defaults to ACCOUNTS_ENCODE_MODE
        #[arg(long)]
        mode: Option<EncodeMode>,
    },
    /// SHA-256 of the hash-mode encoding
    Hash {
        hex: String,
        #[arg(long)]
        payload: bool,
    },
    /// Legacy account-age fingerprint of a payload
    Fingerprint { hex: String },
}

/// A decoded account or bare payload.
enum Decoded {
    Account(Box<Account>),
    Payload(AccountPayload),
}

impl Decoded {
    fn from_hex(input: &str, payload: bool) -> Result<Self> {
        let bytes = hex::decode(input.trim()).context("Input is not valid hex")?;
        let decoded = if payload {
            Decoded::Payload(AccountPayload::decode(&bytes)?)
        } else {
            Decoded::Account(Box::new(Account::decode(&bytes)?))
        };
        Ok(decoded)
    }

    fn to_json(&self) -> Result<String> {
        Ok(match self {
            Decoded::Account(account) => serde_json::to_string_pretty(account)?,
            Decoded::Payload(payload) => serde_json::to_string_pretty(payload)?,
        })
    }

    fn encode(&self, mode: EncodeMode) -> Result<Vec<u8>> {
        Ok(match self {
            Decoded::Account(account) => account.encode(mode)?,
            Decoded::Payload(payload) => payload.encode(mode)?,
        })
    }

    fn hash(&self) -> Result<[u8; 32]> {
        Ok(match self {
            Decoded::Account(account) => account.hash()?,
            Decoded::Payload(payload) => payload.hash()?,
        })
    }
}

fn filter_rails(currency: Option<&str>, country: Option<&str>) -> Vec<PaymentRail> {
    PaymentRail::all()
        .iter()
        .copied()
        .filter(|rail| currency.is_none_or(|c| rail.supports_currency(&c.to_uppercase())))
        .filter(|rail| country.is_none_or(|c| rail.supports_country(&c.to_uppercase())))
        .collect()
}

fn render_rails(rails: &[PaymentRail]) -> String {
    let mut out = format!(
        "{:<24} {:<20} {:<10} {:>10}\n",
        "RAIL", "LEGACY ID", "RISK", "LIMIT USD"
    );
    for rail in rails {
        out.push_str(&format!(
            "{:<24} {:<20} {:<10} {:>10}\n",
            rail.name(),
            rail.legacy_id(),
            format!("{:?}", rail.chargeback_risk()),
            rail.trade_limit_usd()
        ));
    }
    out
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rails { currency, country } => {
            let rails = filter_rails(currency.as_deref(), country.as_deref());
            tracing::debug!(count = rails.len(), "Rails matched");
            print!("{}", render_rails(&rails));
        }

        Commands::Decode { hex, payload } => {
            let decoded = Decoded::from_hex(&hex, payload)?;
            println!("{}", decoded.to_json()?);
        }

        Commands::Reencode { hex, payload, mode } => {
            let mode = mode.unwrap_or(config.encode_mode);
            let decoded = Decoded::from_hex(&hex, payload)?;
            println!("{}", hex::encode(decoded.encode(mode)?));
        }

        Commands::Hash { hex, payload } => {
            let decoded = Decoded::from_hex(&hex, payload)?;
            println!("{}", hex::encode(decoded.hash()?));
        }

        Commands::Fingerprint { hex } => {
            let bytes = hex::decode(hex.trim()).context("Input is not valid hex")?;
            let payload = AccountPayload::decode(&bytes)?;
            println!("{}", hex::encode(payload.fingerprint()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_types::domain::{PayloadCore, Zelle};

    fn zelle_hex() -> String {
        let payload: AccountPayload = Zelle::new(PayloadCore::new(), "Alice", "alice@example.com")
            .unwrap()
            .into();
        hex::encode(payload.encode(EncodeMode::Normal).unwrap())
    }

    #[test]
    fn test_parse_reencode_mode() {
        let cli = Cli::try_parse_from(["accounts", "reencode", "0a00", "--payload", "--mode", "hash"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Reencode {
                payload: true,
                mode: Some(EncodeMode::Hash),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["accounts", "reencode", "0a00", "--mode", "compact"]).is_err());
    }

    #[test]
    fn test_filter_rails_by_country_and_currency() {
        let rails = filter_rails(Some("inr"), Some("IN"));
        assert!(rails.contains(&PaymentRail::Upi));
        assert!(rails.contains(&PaymentRail::Neft));
        assert!(!rails.contains(&PaymentRail::Zelle));
        assert_eq!(filter_rails(None, None).len(), PaymentRail::all().len());
    }

    #[test]
    fn test_render_rails_has_header_and_rows() {
        let table = render_rails(&[PaymentRail::Zelle]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("RAIL"));
        assert!(lines[1].contains("CLEAR_X_CHANGE"));
    }

    #[test]
    fn test_decode_payload_hex() {
        let decoded = Decoded::from_hex(&zelle_hex(), true).unwrap();
        assert!(decoded.to_json().unwrap().contains("alice@example.com"));
    }

    #[test]
    fn test_payload_hex_is_not_an_account() {
        assert!(Decoded::from_hex(&zelle_hex(), false).is_err());
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Decoded::from_hex("zz", true).is_err());
    }
}
