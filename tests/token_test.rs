// ABOUTME: Integration tests for claim assembly and RS256 token issuance
// ABOUTME: Checks expiration, optional identity claims, header and signature verification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use make_jwt::config::{ConfigPatch, Configuration};
use make_jwt::token::{build_claims, sign, ClaimValue};
use make_jwt::{issue_token, issue_token_at};
use make_jwt_core::IssueError;
use serde_json::json;

fn configuration(patch: ConfigPatch) -> Configuration {
    Configuration::resolve([patch])
}

fn alice() -> ConfigPatch {
    ConfigPatch {
        key_path: Some(common::plain_key_path()),
        username: Some("alice".to_owned()),
        lifetime_secs: Some(60),
        ..ConfigPatch::default()
    }
}

#[test]
fn test_exp_is_issuance_time_plus_lifetime() {
    let config = configuration(alice());
    let before = Utc::now().timestamp();
    let token = issue_token(&config).unwrap();
    let after = Utc::now().timestamp();

    let claims = common::decode_segment(common::segments(&token)[1]);
    let exp = claims["exp"].as_i64().unwrap();
    assert!(claims["exp"].is_i64());
    assert!(exp >= before + 60 && exp <= after + 60);
}

#[test]
fn test_pinned_issuance_time() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let config = configuration(alice());

    let token = issue_token_at(&config, now).unwrap();
    let claims = common::decode_segment(common::segments(&token)[1]);
    assert_eq!(claims, json!({"sub": "alice", "exp": now.timestamp() + 60}));
}

#[test]
fn test_empty_identity_fields_are_omitted() {
    let config = configuration(ConfigPatch {
        email: Some(String::new()),
        name: Some("   ".to_owned()),
        ..alice()
    });

    let claims = build_claims(&config, Utc::now()).unwrap();
    assert_eq!(claims.names().collect::<Vec<_>>(), ["sub", "exp"]);
    assert!(claims.get("email").is_none());
    assert!(claims.get("name").is_none());
}

#[test]
fn test_all_identity_fields_present_in_order() {
    let config = configuration(ConfigPatch {
        email: Some("alice@example.com".to_owned()),
        given_name: Some("Alice".to_owned()),
        family_name: Some("Liddell".to_owned()),
        name: Some("Alice Liddell".to_owned()),
        ..alice()
    });

    let claims = build_claims(&config, Utc::now()).unwrap();
    assert_eq!(
        claims.names().collect::<Vec<_>>(),
        ["sub", "email", "given_name", "family_name", "name", "exp"]
    );
    assert_eq!(
        claims.get("family_name"),
        Some(&ClaimValue::Text("Liddell".to_owned()))
    );
}

#[test]
fn test_claims_segment_matches_built_claims() {
    let config = configuration(ConfigPatch {
        given_name: Some("Alice".to_owned()),
        ..alice()
    });
    let claims = build_claims(&config, Utc::now()).unwrap();

    let token = sign(&claims, &common::plain_key()).unwrap();
    let decoded = common::decode_segment(common::segments(&token)[1]);
    assert_eq!(decoded, serde_json::to_value(&claims).unwrap());
}

#[test]
fn test_header_declares_rs256_and_signature_verifies() {
    let key = common::plain_key();
    let token = issue_token(&configuration(alice())).unwrap();

    let header = common::decode_segment(common::segments(&token)[0]);
    assert_eq!(header["alg"], "RS256");
    assert_eq!(header["typ"], "JWT");

    let verified = common::verify(&token, &key);
    assert_eq!(verified.claims["sub"], "alice");
}

#[test]
fn test_encrypted_key_issues_verifiable_token() {
    let config = configuration(ConfigPatch {
        key_path: Some(common::fixture("rsa_aes128.pem")),
        key_password: Some(common::FIXTURE_PASSWORD.to_owned()),
        ..alice()
    });

    let token = issue_token(&config).unwrap();
    let key = make_jwt::keys::load_signing_key(
        &common::fixture("rsa_aes128.pem"),
        common::FIXTURE_PASSWORD,
    )
    .unwrap();
    common::verify(&token, &key);
}

#[test]
fn test_missing_key_path_fails_before_signing() {
    let config = configuration(ConfigPatch {
        key_path: None,
        ..alice()
    });
    let err = issue_token(&config).unwrap_err();
    assert!(matches!(err, IssueError::MissingParameter("key-path")));
}
