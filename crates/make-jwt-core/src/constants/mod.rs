// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Parameter names, claim names, key formats and defaults for make-jwt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! Constants module
//!
//! Constants are grouped by domain: parameter names shared by flags and
//! parameter files, claim names written into tokens, and key format markers.

/// Parameter names and defaults
pub mod params;

/// Claim names written into issued tokens
pub mod claims;

/// PEM key format markers
pub mod key_format;

pub use params::{DEFAULT_LIFETIME_SECS, PARAMETER_FILE_NAME};
