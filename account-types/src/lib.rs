//! # Account Types
//!
//! Payment account model for a peer-to-peer trading system: validated
//! payloads for every supported payment rail, the accounts that wrap them,
//! and a canonical protobuf codec for both.
//! This crate has ZERO IO - only data structures, validation rules and the
//! wire format.
//!
//! ## Architecture
//!
//! - `domain/` - Payload layers, leaf variants per rail, accounts
//! - `validation` - Pure field validators shared by every variant
//! - `registry` - Process-wide wire tag table (decode/encode/validate per variant)
//! - `codec` - Envelope walking decoder and Normal/Hash encoder
//! - `canonical` - Normalization and hash-mode canonical forms
//! - `wire` - Prost message definitions
//! - `error` - Validation, codec and registry errors

pub mod canonical;
pub mod codec;
pub mod domain;
pub mod error;
pub mod registry;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use canonical::EncodeMode;
pub use domain::{
    Account, AccountId, AccountKind, AccountPayload, BankAccountDetails, BankAccountType, Family,
    PayloadCore, PayloadVariant, PaymentMethod,
};
pub use error::{CodecError, Constraint, RegistryError, ValidationFailure};
pub use payment_rails::PaymentRail;
pub use registry::{VariantRegistry, registry};
