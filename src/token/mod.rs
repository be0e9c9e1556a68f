// ABOUTME: Token assembly: claim set construction and RS256 signing
// ABOUTME: Re-exports the claim builder and signer used by the issuance pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

/// Claim set and claim table
pub mod claims;

/// RS256 signer
pub mod signer;

pub use claims::{build_claims, ClaimSet, ClaimValue, CLAIM_TABLE};
pub use signer::{sign, SIGNING_ALGORITHM};
