//! Indian transfer rails. All of their data lives in the IFSC layer.

use serde::Serialize;

use crate::canonical::EncodeMode;
use crate::domain::layers::IfscBasedFields;
use crate::domain::payload::PayloadVariant;
use crate::error::ValidationFailure;
use crate::wire;

macro_rules! define_ifsc_variants {
    ($($(#[$meta:meta])* $name:ident($proto:path)),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
            pub struct $name {
                #[serde(flatten)]
                ifsc: IfscBasedFields,
            }

            impl $name {
                pub fn new(ifsc: IfscBasedFields) -> Result<Self, ValidationFailure> {
                    let payload = Self { ifsc };
                    payload.verify()?;
                    Ok(payload)
                }

                pub fn fields(&self) -> &IfscBasedFields {
                    &self.ifsc
                }
            }

            impl PayloadVariant for $name {
                type Layer = IfscBasedFields;
                type Proto = $proto;

                fn layer(&self) -> &IfscBasedFields {
                    &self.ifsc
                }

                fn verify_fields(&self) -> Result<(), ValidationFailure> {
                    Ok(())
                }

                fn to_proto(&self, _mode: EncodeMode) -> Self::Proto {
                    $proto {}
                }

                fn from_proto(
                    ifsc: IfscBasedFields,
                    _proto: Self::Proto,
                ) -> Result<Self, ValidationFailure> {
                    Self::new(ifsc)
                }

                fn fingerprint_data(&self) -> Vec<&str> {
                    vec![self.ifsc.ifsc(), self.ifsc.account_nr()]
                }
            }
        )*
    };
}

define_ifsc_variants! {
    /// Immediate Payment Service.
    Imps(wire::ImpsAccountPayload),
    /// National Electronic Funds Transfer.
    Neft(wire::NeftAccountPayload),
    /// Real Time Gross Settlement.
    Rtgs(wire::RtgsAccountPayload),
}
