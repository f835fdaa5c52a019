//! Canonical forms shared by construction, encoding and decoding.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// How a value is written to the wire.
///
/// `Hash` produces byte-stable output suitable for hashing and signing:
/// set-like code lists are sorted and de-duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeMode {
    #[default]
    Normal,
    Hash,
}

impl EncodeMode {
    pub fn is_hash(&self) -> bool {
        matches!(self, EncodeMode::Hash)
    }
}

impl std::str::FromStr for EncodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(EncodeMode::Normal),
            "hash" => Ok(EncodeMode::Hash),
            _ => Err(format!("Unknown encode mode: {}", s)),
        }
    }
}

impl std::fmt::Display for EncodeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeMode::Normal => write!(f, "normal"),
            EncodeMode::Hash => write!(f, "hash"),
        }
    }
}

/// Collapses an empty string to absence.
pub fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Drops the grouping spaces of account identifiers such as IBANs.
pub fn compact(value: String) -> String {
    if value.contains(' ') {
        value.chars().filter(|c| *c != ' ').collect()
    } else {
        value
    }
}

/// Code list as written to the wire in the given mode.
pub fn code_list(codes: &[String], mode: EncodeMode) -> Vec<String> {
    let mut codes = codes.to_vec();
    if mode.is_hash() {
        codes.sort();
        codes.dedup();
    }
    codes
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("x".into())), Some("x".into()));
    }

    #[test]
    fn test_compact_drops_spaces() {
        assert_eq!(
            compact("DE89 3704 0044 0532 0130 00".into()),
            "DE89370400440532013000"
        );
        assert_eq!(compact("DEUTDEFF".into()), "DEUTDEFF");
    }

    #[test]
    fn test_code_list_sorted_only_in_hash_mode() {
        let codes = vec!["USD".to_string(), "EUR".to_string(), "USD".to_string()];
        assert_eq!(code_list(&codes, EncodeMode::Normal), codes);
        assert_eq!(
            code_list(&codes, EncodeMode::Hash),
            vec!["EUR".to_string(), "USD".to_string()]
        );
    }

    #[test]
    fn test_encode_mode_parse() {
        assert_eq!("HASH".parse::<EncodeMode>().unwrap(), EncodeMode::Hash);
        assert!("compact".parse::<EncodeMode>().is_err());
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
