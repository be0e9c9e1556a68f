// ABOUTME: Core types and constants for the make-jwt token issuer
// ABOUTME: Foundation crate with the fatal/non-fatal error taxonomy and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

#![deny(unsafe_code)]

//! # make-jwt Core
//!
//! Shared types for the `make-jwt` workspace. This crate is designed to change
//! infrequently so the issuer library and binary can depend on a stable error
//! taxonomy.
//!
//! ## Modules
//!
//! - **errors**: `IssueError` (fatal) and `ParameterFileError` (logged and skipped)
//! - **constants**: Parameter names, claim names, file names and defaults

/// Error taxonomy for token issuance and parameter file handling
pub mod errors;

/// Parameter, claim and key-format constants
pub mod constants;

pub use errors::{IssueError, IssueResult, ParameterFileError};
