// ABOUTME: Error types for token issuance and parameter file parsing
// ABOUTME: Splits fatal issuance failures from recoverable parameter file warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! # Error Types
//!
//! - [`IssueError`] - fatal failures that abort issuance (missing parameters,
//!   unreadable or malformed keys, decryption and signing failures)
//! - [`ParameterFileError`] - problems found while reading parameter files;
//!   these are logged and skipped, never propagated as fatal

mod parameter;

pub use parameter::ParameterFileError;

use std::io;
use std::path::PathBuf;

/// Result alias for fallible issuance operations
pub type IssueResult<T> = Result<T, IssueError>;

/// Fatal errors raised while loading the signing key or producing the token
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// A required value was absent or blank
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The key file could not be read
    #[error("unable to read private key file {}: {source}", path.display())]
    KeyRead {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The key file is not a PEM-encoded PKCS#1 RSA private key
    #[error("bad private key data: {0}")]
    MalformedKey(String),

    /// The encrypted key could not be decrypted with the supplied password
    #[error("unable to decrypt private key: {0}")]
    Decryption(String),

    /// The claim set could not be serialized or signed
    #[error("unable to sign token: {0}")]
    Signing(String),
}

impl IssueError {
    /// Malformed key error with a static reason
    #[must_use]
    pub fn malformed_key(reason: impl Into<String>) -> Self {
        Self::MalformedKey(reason.into())
    }

    /// Decryption error with the underlying cause
    #[must_use]
    pub fn decryption(reason: impl Into<String>) -> Self {
        Self::Decryption(reason.into())
    }

    /// Signing error with the underlying cause
    #[must_use]
    pub fn signing(reason: impl Into<String>) -> Self {
        Self::Signing(reason.into())
    }
}
