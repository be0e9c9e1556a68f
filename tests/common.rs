// ABOUTME: Shared test utilities and fixtures for make-jwt integration tests
// ABOUTME: Provides key fixture paths, scratch parameter files and token segment decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `make_jwt`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use rsa::pkcs1::EncodeRsaPublicKey;
use rsa::RsaPrivateKey;
use serde_json::Value;
use tempfile::TempDir;

/// Password of the encrypted key fixtures
pub const FIXTURE_PASSWORD: &str = "correct-horse";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Path of a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Unencrypted PKCS#1 key
pub fn plain_key_path() -> PathBuf {
    fixture("rsa_plain.pem")
}

/// Load the unencrypted fixture key
pub fn plain_key() -> RsaPrivateKey {
    make_jwt::keys::load_signing_key(&plain_key_path(), "").unwrap()
}

/// Write a parameter file named `.make-jwt` into `dir`
pub fn write_param_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".make-jwt");
    fs::write(&path, contents).unwrap();
    path
}

/// Fresh scratch directory
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Split a compact token into its three dot-separated segments
pub fn segments(token: &str) -> [&str; 3] {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "token must have three segments: {token}");
    [parts[0], parts[1], parts[2]]
}

/// Decode one base64url segment as JSON
pub fn decode_segment(segment: &str) -> Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Verify `token` against the public half of `key`, without `exp` checks
pub fn verify(token: &str, key: &RsaPrivateKey) -> TokenData<Value> {
    let public_der = key.to_public_key().to_pkcs1_der().unwrap();
    let decoding_key = DecodingKey::from_rsa_der(public_der.as_bytes());

    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Value>(token, &decoding_key, &validation).unwrap()
}
