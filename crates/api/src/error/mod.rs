//! Error handling for the p256coz ecosystem

pub mod types;
pub mod traits;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

// Specialized result types for different operations
pub type PointResult<T> = Result<T>;
pub type DerResult<T> = Result<T>;
