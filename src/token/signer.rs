// ABOUTME: RS256 signing of claim sets into compact JWTs
// ABOUTME: Validates the RSA key and signs with RSA PKCS#1 v1.5 over SHA-256
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use make_jwt_core::{IssueError, IssueResult};
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::RsaPrivateKey;

use super::ClaimSet;

/// The only signing algorithm this tool emits
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::RS256;

/// Sign `claims` with `key`, returning `header.claims.signature`.
///
/// # Errors
///
/// Returns `IssueError::Signing` if the key fails validation, cannot be
/// re-encoded for the signer, or if encoding or signing fails.
pub fn sign(claims: &ClaimSet, key: &RsaPrivateKey) -> IssueResult<String> {
    key.validate()
        .map_err(|e| IssueError::signing(format!("invalid RSA key: {e}")))?;

    let der = key
        .to_pkcs1_der()
        .map_err(|e| IssueError::signing(format!("failed to encode RSA key: {e}")))?;
    let encoding_key = EncodingKey::from_rsa_der(der.as_bytes());

    encode(&Header::new(SIGNING_ALGORITHM), claims, &encoding_key)
        .map_err(|e| IssueError::signing(format!("failed to encode RS256 JWT: {e}")))
}
