//! Error type definitions for point arithmetic and DER decoding

use thiserror::Error as ThisError;

/// Primary error type for p256coz operations
///
/// Every failure is local to one call and recoverable by the caller; nothing
/// in the library treats these as fatal.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A value's discriminant did not match what the operation expected
    #[error("{context}: type mismatch, expected {expected}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
    },

    /// Indefinite length, non-minimal length or an invalid length-of-length
    #[error("{context}: malformed length encoding")]
    MalformedLength { context: &'static str },

    /// Declared length exceeds the remaining buffer
    #[error("{context}: truncated input (needed {needed} bytes, {available} available)")]
    TruncatedInput {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// INTEGER content octets are not the shortest two's-complement form
    #[error("{context}: non-canonical integer encoding")]
    NonCanonicalInteger { context: &'static str },

    /// Top-level decode left unconsumed bytes
    #[error("{context}: {remaining} trailing bytes after value")]
    TrailingData {
        context: &'static str,
        remaining: usize,
    },

    /// Octet string length or tag does not match any legal point form
    #[error("{context}: invalid point encoding")]
    InvalidPointEncoding { context: &'static str },

    /// Coordinates fail the curve equation
    #[error("{context}: point not on curve")]
    PointNotOnCurve { context: &'static str },

    /// Compressed-point decompression found no square root for x
    #[error("{context}: x-coordinate has no square root (non-residue)")]
    NoSquareRoot { context: &'static str },

    /// SEQUENCE nesting deeper than the decoder accepts
    #[error("{context}: nesting deeper than {limit} levels")]
    NestingTooDeep { context: &'static str, limit: usize },

    /// Caller contract violation (e.g. inverting zero)
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for p256coz operations
pub type Result<T> = core::result::Result<T, Error>;

/// Field-less discriminant of [`Error`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    MalformedLength,
    TruncatedInput,
    NonCanonicalInteger,
    TrailingData,
    InvalidPointEncoding,
    PointNotOnCurve,
    NoSquareRoot,
    NestingTooDeep,
    InvalidParameter,
}

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// The kind of this error, without its payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::MalformedLength { .. } => ErrorKind::MalformedLength,
            Self::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            Self::NonCanonicalInteger { .. } => ErrorKind::NonCanonicalInteger,
            Self::TrailingData { .. } => ErrorKind::TrailingData,
            Self::InvalidPointEncoding { .. } => ErrorKind::InvalidPointEncoding,
            Self::PointNotOnCurve { .. } => ErrorKind::PointNotOnCurve,
            Self::NoSquareRoot { .. } => ErrorKind::NoSquareRoot,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }

    /// The operation that produced this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::TypeMismatch { context, .. }
            | Self::MalformedLength { context }
            | Self::TruncatedInput { context, .. }
            | Self::NonCanonicalInteger { context }
            | Self::TrailingData { context, .. }
            | Self::InvalidPointEncoding { context }
            | Self::PointNotOnCurve { context }
            | Self::NoSquareRoot { context }
            | Self::NestingTooDeep { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its kind and payload
    pub fn with_context(mut self, new_context: &'static str) -> Self {
        match &mut self {
            Self::TypeMismatch { context, .. }
            | Self::MalformedLength { context }
            | Self::TruncatedInput { context, .. }
            | Self::NonCanonicalInteger { context }
            | Self::TrailingData { context, .. }
            | Self::InvalidPointEncoding { context }
            | Self::PointNotOnCurve { context }
            | Self::NoSquareRoot { context }
            | Self::NestingTooDeep { context, .. }
            | Self::InvalidParameter { context, .. } => *context = new_context,
        }
        self
    }
}
