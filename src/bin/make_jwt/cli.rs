// ABOUTME: Command-line surface of make-jwt
// ABOUTME: Declares the flags and accepts single-dash long flags by rewriting them before parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use make_jwt::config::ConfigPatch;
use make_jwt_core::constants::params;

/// Long flags that are not parameters but may still be written with one dash
const EXTRA_LONG_FLAGS: [&str; 3] = ["verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(
    name = "make-jwt",
    version,
    about = "Issue a short-lived RS256 identity token",
    long_about = "Issue a short-lived RS256-signed JWT asserting a user identity. \
                  Values are read from ~/.make-jwt, then ./.make-jwt, then these flags; \
                  later sources win."
)]
pub struct Cli {
    /// Token lifetime in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    lifetime: Option<u64>,

    /// Path to the PEM-encoded RSA private key
    #[arg(long, allow_hyphen_values = true)]
    key_path: Option<String>,

    /// Password for an encrypted private key
    #[arg(long, allow_hyphen_values = true)]
    key_pass: Option<String>,

    /// Subject of the token (`sub` claim)
    #[arg(long, allow_hyphen_values = true)]
    username: Option<String>,

    /// `email` claim
    #[arg(long, allow_hyphen_values = true)]
    email: Option<String>,

    /// `given_name` claim
    #[arg(long, allow_hyphen_values = true)]
    given_name: Option<String>,

    /// `family_name` claim
    #[arg(long, allow_hyphen_values = true)]
    family_name: Option<String>,

    /// `name` claim
    #[arg(long, allow_hyphen_values = true)]
    name: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments, accepting `-name` as well as `--name`
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_go_style_flags(env::args_os()))
    }

    /// Values given explicitly on the command line
    pub fn into_patch(self) -> ConfigPatch {
        ConfigPatch {
            lifetime_secs: self.lifetime,
            key_path: self.key_path.map(PathBuf::from),
            key_password: self.key_pass,
            username: self.username,
            email: self.email,
            given_name: self.given_name,
            family_name: self.family_name,
            name: self.name,
        }
    }
}

/// Rewrite `-flag` and `-flag=value` to `--flag` forms for known long flags.
///
/// The argument after a parameter flag written without `=` is its value and
/// is never rewritten, so `-key-pass -name` keeps `-name` as the password.
/// Arguments after a bare `--` and values that are not valid UTF-8 are left
/// untouched.
pub fn normalize_go_style_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    let mut awaiting_value = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if awaiting_value {
                awaiting_value = false;
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(text) => {
                    awaiting_value = takes_separate_value(text);
                    as_long_flag(text).map_or(arg, OsString::from)
                }
                None => arg,
            }
        })
        .collect()
}

fn as_long_flag(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    let known = params::ALL.contains(&name) || EXTRA_LONG_FLAGS.contains(&name);
    known.then(|| format!("-{arg}"))
}

/// Whether `arg` is a parameter flag whose value is the next argument
fn takes_separate_value(arg: &str) -> bool {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'));
    name.is_some_and(|name| params::ALL.contains(&name))
}
