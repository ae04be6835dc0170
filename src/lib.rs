//! # p256coz
//!
//! NIST P-256 point arithmetic on a co-Z Montgomery ladder, SEC1 point
//! encoding and a strict canonical DER codec.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! p256coz = "0.3"
//! ```
//!
//! ```
//! use p256coz::prelude::*;
//!
//! let g = base_point_g();
//! let two_g = g.mul(&Scalar::from_u64(2)).unwrap();
//! assert_eq!(two_g, g.double());
//!
//! let bytes = two_g.to_sec1(true);
//! assert_eq!(Point::from_sec1(&bytes).unwrap(), two_g);
//!
//! let der = Asn1Value::Sequence(vec![Asn1Value::from(1i64), Asn1Value::from(-1i64)]).to_der();
//! assert_eq!(der, [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0xff]);
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): re-export the arithmetic and codec crate
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`p256coz-api`]: error type and codec traits
//! - [`p256coz-params`]: curve parameters and wire tags
//! - [`p256coz-internal`]: constant-time limb helpers
//! - [`p256coz-algorithms`]: field, group law, co-Z ladder, SEC1 and DER codecs

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use p256coz_api as api;
pub use p256coz_internal as internal;
pub use p256coz_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use p256coz_algorithms as algorithms;

/// Common imports for p256coz users
pub mod prelude {
    // Re-export error types
    pub use crate::api::error::ErrorKind;
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{DerDecode, DerEncode, PointCodec};

    // Curve parameters
    pub use crate::params::{CurveParams, NIST_P256};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::der::{Asn1Value, SignaturePair};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::p256::{base_point_g, FieldElement, Point, Scalar};
}

// Big integers appear in the DER value type
pub use num_bigint::BigInt;
