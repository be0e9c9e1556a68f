// ABOUTME: make-jwt binary entry point
// ABOUTME: Resolves layered parameters, issues one token and prints it to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors
//!
//! Usage:
//! ```bash
//! # Token for alice, valid for one minute
//! make-jwt -key-path ~/.keys/dev.pem -username=alice -lifetime=60
//!
//! # Encrypted key, identity taken from ~/.make-jwt
//! make-jwt --key-path dev-enc.pem --key-pass hunter2
//! ```

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use make_jwt::config::{resolve_configuration, ParameterFiles};
use make_jwt::errors::{AppError, AppResult};
use make_jwt::logging::LoggingConfig;
use tracing::error;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(e) = LoggingConfig::for_verbosity(cli.verbose).init() {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = resolve_configuration(&ParameterFiles::discover(), cli.into_patch());
    let token = make_jwt::issue_token(&config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(token.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| AppError::internal("failed to write token to stdout").with_source(e))
}
