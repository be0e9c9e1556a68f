// ABOUTME: Library entry point for the make-jwt identity token issuer
// ABOUTME: Wires configuration, key loading, claim assembly and RS256 signing into one pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

#![deny(unsafe_code)]

//! # make-jwt
//!
//! Issues a short-lived RS256-signed JSON Web Token asserting a user
//! identity, for local development and testing.
//!
//! ## Architecture
//!
//! - **Config**: layered parameters (defaults, `~/.make-jwt`, `./.make-jwt`, flags)
//! - **Keys**: PEM RSA private key loading, including legacy encrypted PEM
//! - **Token**: ordered claim set and RS256 signer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use make_jwt::config::{resolve_configuration, ConfigPatch, ParameterFiles};
//!
//! let flags = ConfigPatch {
//!     key_path: Some("id_rsa.pem".into()),
//!     username: Some("alice".into()),
//!     ..ConfigPatch::default()
//! };
//! let config = resolve_configuration(&ParameterFiles::discover(), flags);
//! let token = make_jwt::issue_token(&config)?;
//! print!("{token}");
//! # Ok::<(), make_jwt::IssueError>(())
//! ```

/// Layered configuration and parameter files
pub mod config;

/// Binary-facing error type with exit codes
pub mod errors;

/// PEM RSA private key loading
pub mod keys;

/// Tracing subscriber setup
pub mod logging;

/// Claim set assembly and signing
pub mod token;

use chrono::{DateTime, Utc};
use tracing::debug;

pub use config::Configuration;
pub use make_jwt_core::{IssueError, IssueResult};

/// Issue a token for `config`, timestamped now.
///
/// # Errors
///
/// Returns an `IssueError` if the key cannot be loaded or the token cannot
/// be signed.
pub fn issue_token(config: &Configuration) -> IssueResult<String> {
    issue_token_at(config, Utc::now())
}

/// Issue a token for `config` as if issued at `now`.
///
/// # Errors
///
/// Returns an `IssueError` if the key cannot be loaded or the token cannot
/// be signed.
pub fn issue_token_at(config: &Configuration, now: DateTime<Utc>) -> IssueResult<String> {
    let key = keys::load_signing_key(config.key_path(), config.key_password())?;
    let claims = token::build_claims(config, now)?;
    debug!(claims = ?claims.names().collect::<Vec<_>>(), "Signing token");
    token::sign(&claims, &key)
}
