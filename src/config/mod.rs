// ABOUTME: Layered configuration for token issuance
// ABOUTME: Resolves defaults, parameter files and command-line flags into one Configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! Configuration resolution
//!
//! Each configuration layer produces a [`ConfigPatch`] that sets any subset of
//! fields. Patches are folded in precedence order (defaults, home parameter
//! file, local parameter file, flags) and the result is frozen into a
//! [`Configuration`]. Nothing downstream ever sees a partially merged state.

/// Line-oriented `name=value` parameter file reader
pub mod param_file;

/// Ordered override sources feeding the fold
pub mod sources;

pub use param_file::ParamFile;
pub use sources::{resolve_configuration, OverrideSource, ParameterFiles};

use std::fmt;
use std::path::{Path, PathBuf};

use make_jwt_core::constants::{params, DEFAULT_LIFETIME_SECS};
use make_jwt_core::ParameterFileError;
use tracing::warn;

/// Identity values that end up as token claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    /// Emitted as `sub`
    pub username: String,
    /// Emitted as `email`
    pub email: String,
    /// Emitted as `given_name`
    pub given_name: String,
    /// Emitted as `family_name`
    pub family_name: String,
    /// Emitted as `name`
    pub name: String,
}

/// Fully resolved settings for one issuance run.
///
/// Only [`Configuration::resolve`] builds one, so holding a `Configuration`
/// means every override has already been applied.
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    lifetime_secs: u64,
    key_path: PathBuf,
    key_password: String,
    identity: IdentityFields,
}

impl Configuration {
    /// Fold `patches` over the built-in defaults, later patches winning field by field
    #[must_use]
    pub fn resolve<I>(patches: I) -> Self
    where
        I: IntoIterator<Item = ConfigPatch>,
    {
        let merged = patches
            .into_iter()
            .fold(ConfigPatch::defaults(), ConfigPatch::merge);

        Self {
            lifetime_secs: merged.lifetime_secs.unwrap_or(DEFAULT_LIFETIME_SECS),
            key_path: merged.key_path.unwrap_or_default(),
            key_password: merged.key_password.unwrap_or_default(),
            identity: IdentityFields {
                username: merged.username.unwrap_or_default(),
                email: merged.email.unwrap_or_default(),
                given_name: merged.given_name.unwrap_or_default(),
                family_name: merged.family_name.unwrap_or_default(),
                name: merged.name.unwrap_or_default(),
            },
        }
    }

    /// Token lifetime in seconds
    #[must_use]
    pub const fn lifetime_secs(&self) -> u64 {
        self.lifetime_secs
    }

    /// Path of the PEM private key, empty when never configured
    #[must_use]
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Password for an encrypted key, empty when never configured
    #[must_use]
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Identity fields destined for claims
    #[must_use]
    pub const fn identity(&self) -> &IdentityFields {
        &self.identity
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("lifetime_secs", &self.lifetime_secs)
            .field("key_path", &self.key_path)
            .field("key_password", &redact(&self.key_password))
            .field("identity", &self.identity)
            .finish()
    }
}

/// A partial configuration produced by one override source
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    /// Token lifetime in seconds
    pub lifetime_secs: Option<u64>,
    /// Path to the PEM private key
    pub key_path: Option<PathBuf>,
    /// Password for an encrypted key
    pub key_password: Option<String>,
    /// Username (`sub`)
    pub username: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Given name
    pub given_name: Option<String>,
    /// Family name
    pub family_name: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl ConfigPatch {
    /// The built-in defaults layer
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            lifetime_secs: Some(DEFAULT_LIFETIME_SECS),
            ..Self::default()
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            lifetime_secs: other.lifetime_secs.or(self.lifetime_secs),
            key_path: other.key_path.or(self.key_path),
            key_password: other.key_password.or(self.key_password),
            username: other.username.or(self.username),
            email: other.email.or(self.email),
            given_name: other.given_name.or(self.given_name),
            family_name: other.family_name.or(self.family_name),
            name: other.name.or(self.name),
        }
    }

    /// Assign a named parameter, validating its value.
    ///
    /// On error the patch is left untouched so the previous value survives.
    ///
    /// # Errors
    ///
    /// Returns `UnrecognizedName` for unknown names and `InvalidValue` when
    /// `lifetime` is not a positive integer.
    pub fn set(&mut self, name: &str, value: String) -> Result<(), ParameterFileError> {
        match name {
            params::LIFETIME => self.lifetime_secs = Some(parse_lifetime(&value)?),
            params::KEY_PATH => self.key_path = Some(PathBuf::from(value)),
            params::KEY_PASS => self.key_password = Some(value),
            params::USERNAME => self.username = Some(value),
            params::EMAIL => self.email = Some(value),
            params::GIVEN_NAME => self.given_name = Some(value),
            params::FAMILY_NAME => self.family_name = Some(value),
            params::NAME => self.name = Some(value),
            _ => {
                return Err(ParameterFileError::UnrecognizedName {
                    name: name.to_owned(),
                })
            }
        }
        Ok(())
    }

    /// Build a patch from `(name, value)` pairs, logging and skipping bad entries
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = Result<(String, String), ParameterFileError>>,
    {
        let mut patch = Self::default();
        for pair in pairs {
            let outcome = pair.and_then(|(name, value)| patch.set(&name, value));
            if let Err(e) = outcome {
                warn!("{e}");
            }
        }
        patch
    }

}

impl fmt::Debug for ConfigPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigPatch")
            .field("lifetime_secs", &self.lifetime_secs)
            .field("key_path", &self.key_path)
            .field("key_password", &self.key_password.as_deref().map(redact))
            .field("username", &self.username)
            .field("email", &self.email)
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("name", &self.name)
            .finish()
    }
}

fn parse_lifetime(value: &str) -> Result<u64, ParameterFileError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ParameterFileError::InvalidValue {
            name: params::LIFETIME,
            value: value.to_owned(),
            reason: "expected a positive number of seconds",
        }),
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}
