//! Codec traits implemented by p256coz types

pub mod serialize;

pub use serialize::{DerDecode, DerEncode, PointCodec};
