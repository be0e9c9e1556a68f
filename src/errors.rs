// ABOUTME: Application error type for the make-jwt binary
// ABOUTME: Maps issuance failures to stable error codes and process exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! # Error Handling
//!
//! The library reports failures as [`IssueError`]. At the process boundary
//! they are wrapped in [`AppError`], which carries a stable [`ErrorCode`]
//! and the exit code the binary terminates with.

use std::error::Error as StdError;
use std::fmt;
use std::process::ExitCode;

use make_jwt_core::IssueError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes for fatal failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A required parameter was not supplied
    #[serde(rename = "MISSING_PARAMETER")]
    MissingParameter,
    /// The key file could not be read
    #[serde(rename = "KEY_READ_FAILED")]
    KeyReadFailed,
    /// The key file is not a PKCS#1 RSA private key
    #[serde(rename = "MALFORMED_KEY")]
    MalformedKey,
    /// The encrypted key could not be decrypted
    #[serde(rename = "DECRYPTION_FAILED")]
    DecryptionFailed,
    /// Claim serialization or signing failed
    #[serde(rename = "SIGNING_FAILED")]
    SigningFailed,
    /// Any other failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::MissingParameter => 3,
            Self::KeyReadFailed => 4,
            Self::MalformedKey => 5,
            Self::DecryptionFailed => 6,
            Self::SigningFailed => 7,
        }
    }

    /// Short human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingParameter => "A required parameter is missing",
            Self::KeyReadFailed => "The private key file could not be read",
            Self::MalformedKey => "The private key data is malformed",
            Self::DecryptionFailed => "The private key could not be decrypted",
            Self::SigningFailed => "The token could not be signed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the binary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Internal failure outside the issuance taxonomy
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Exit code the process should terminate with
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code.exit_code())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<IssueError> for AppError {
    fn from(error: IssueError) -> Self {
        let code = match &error {
            IssueError::MissingParameter(_) => ErrorCode::MissingParameter,
            IssueError::KeyRead { .. } => ErrorCode::KeyReadFailed,
            IssueError::MalformedKey(_) => ErrorCode::MalformedKey,
            IssueError::Decryption(_) => ErrorCode::DecryptionFailed,
            IssueError::Signing(_) => ErrorCode::SigningFailed,
            _ => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
