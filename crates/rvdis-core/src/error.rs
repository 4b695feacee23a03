//! Error types for rvdis-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An extension name that no decoder knows about.
    #[error("unknown extension: {0:?}")]
    UnknownExtension(String),

    /// A base width other than rv32, rv64 or rv128.
    #[error("invalid ISA width: {0:?} (expected rv32, rv64 or rv128)")]
    InvalidXlen(String),
}

impl Error {
    /// Creates a new UnknownExtension error.
    pub fn unknown_extension(name: impl Into<String>) -> Self {
        Self::UnknownExtension(name.into())
    }

    /// Creates a new InvalidXlen error.
    pub fn invalid_xlen(name: impl Into<String>) -> Self {
        Self::InvalidXlen(name.into())
    }
}
