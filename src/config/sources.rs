// ABOUTME: Override sources that feed the configuration fold
// ABOUTME: Locates the home and working-directory parameter files and turns each layer into a patch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

use std::iter;
use std::path::{Path, PathBuf};

use make_jwt_core::constants::PARAMETER_FILE_NAME;
use tracing::{debug, warn};

use super::{ConfigPatch, Configuration, ParamFile};

/// One layer of configuration, lowest precedence first when listed in order
#[derive(Debug, Clone)]
pub enum OverrideSource {
    /// A `name=value` parameter file; missing files contribute nothing
    ParameterFile(PathBuf),
    /// Values given explicitly on the command line
    Flags(ConfigPatch),
}

impl OverrideSource {
    /// Produce the patch this source contributes
    #[must_use]
    pub fn into_patch(self) -> ConfigPatch {
        match self {
            Self::ParameterFile(path) => load_parameter_file(&path),
            Self::Flags(patch) => patch,
        }
    }
}

/// Locations of the two parameter files, consulted home first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFiles {
    /// `~/.make-jwt`, absent when the home directory is unknown
    pub home: Option<PathBuf>,
    /// `./.make-jwt`
    pub local: PathBuf,
}

impl ParameterFiles {
    /// Standard locations: the user's home directory and the working directory
    #[must_use]
    pub fn discover() -> Self {
        let home = dirs::home_dir().map(|dir| dir.join(PARAMETER_FILE_NAME));
        if home.is_none() {
            warn!("Unable to determine home directory, skipping home parameter file");
        }

        Self {
            home,
            local: PathBuf::from(PARAMETER_FILE_NAME),
        }
    }

    /// Parameter files as override sources, in precedence order
    #[must_use]
    pub fn sources(&self) -> Vec<OverrideSource> {
        self.home
            .iter()
            .chain(iter::once(&self.local))
            .cloned()
            .map(OverrideSource::ParameterFile)
            .collect()
    }
}

/// Read one parameter file into a patch.
///
/// A missing file yields an empty patch. An unreadable file is logged and
/// also yields an empty patch; malformed lines, unknown names and invalid
/// values are logged and skipped.
#[must_use]
pub fn load_parameter_file(path: &Path) -> ConfigPatch {
    match ParamFile::open(path) {
        Ok(Some(file)) => {
            debug!("Loading parameter file {}", file.path().display());
            ConfigPatch::from_pairs(file)
        }
        Ok(None) => {
            debug!("No parameter file at {}", path.display());
            ConfigPatch::default()
        }
        Err(e) => {
            warn!("{e}");
            ConfigPatch::default()
        }
    }
}

/// Resolve the effective configuration: defaults, then `files`, then `flags`
#[must_use]
pub fn resolve_configuration(files: &ParameterFiles, flags: ConfigPatch) -> Configuration {
    let mut sources = files.sources();
    sources.push(OverrideSource::Flags(flags));

    let config = Configuration::resolve(sources.into_iter().map(OverrideSource::into_patch));
    debug!("Resolved configuration: {config:?}");
    config
}
