// ABOUTME: Signing key loader for PEM-encoded PKCS#1 RSA private keys
// ABOUTME: Reads the key file, validates the PEM block, decrypts it when needed and parses the key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! Signing key loading
//!
//! Only legacy `RSA PRIVATE KEY` blocks are accepted, either in the clear or
//! encrypted with a password using the OpenSSL traditional format. Every
//! failure here is a configuration problem and is returned immediately.

/// RFC 1423 encrypted PEM support
pub mod legacy_pem;

use std::fs;
use std::path::Path;

use make_jwt_core::constants::{key_format::RSA_PRIVATE_KEY_TAG, params};
use make_jwt_core::{IssueError, IssueResult};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::RsaPrivateKey;
use tracing::debug;

/// Load the RSA signing key stored at `path`.
///
/// `password` is only consulted when the PEM block is encrypted.
///
/// # Errors
///
/// - `MissingParameter("key-path")` if `path` is empty
/// - `KeyRead` if the file cannot be read
/// - `MalformedKey` if the content is not a PKCS#1 RSA private key
/// - `MissingParameter("key-pass")` if the key is encrypted and no password was given
/// - `Decryption` if the password is wrong or the ciphertext is corrupt
pub fn load_signing_key(path: &Path, password: &str) -> IssueResult<RsaPrivateKey> {
    if path.as_os_str().is_empty() {
        return Err(IssueError::MissingParameter(params::KEY_PATH));
    }

    debug!("Reading signing key from {}", path.display());
    let pem_data = fs::read(path).map_err(|source| IssueError::KeyRead {
        path: path.to_path_buf(),
        source,
    })?;

    decode_signing_key(&pem_data, password)
}

/// Decode an RSA signing key from PEM file content.
///
/// # Errors
///
/// Same as [`load_signing_key`], minus the I/O failures.
pub fn decode_signing_key(pem_data: &[u8], password: &str) -> IssueResult<RsaPrivateKey> {
    let block = pem::parse(pem_data).map_err(|e| {
        debug!("PEM parsing failed: {e}");
        IssueError::malformed_key("not PEM-encoded")
    })?;

    if block.tag() != RSA_PRIVATE_KEY_TAG {
        return Err(IssueError::malformed_key(format!(
            "wrong key type {:?}: expected {RSA_PRIVATE_KEY_TAG:?}",
            block.tag()
        )));
    }

    if legacy_pem::is_encrypted(&block) {
        if password.is_empty() {
            return Err(IssueError::MissingParameter(params::KEY_PASS));
        }

        debug!("Signing key is encrypted, decrypting");
        let der = legacy_pem::decrypt_block(&block, password.as_bytes())?;

        // Padding can survive a wrong password by chance; the DER parse catches it.
        return RsaPrivateKey::from_pkcs1_der(&der)
            .map_err(|_| IssueError::decryption("decryption password incorrect"));
    }

    RsaPrivateKey::from_pkcs1_der(block.contents()).map_err(|e| {
        debug!("PKCS#1 parsing failed: {e}");
        IssueError::malformed_key("invalid key structure")
    })
}
