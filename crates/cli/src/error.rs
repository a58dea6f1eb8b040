// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffsync::CoreError;
use staffsync_hr::HrApiError;

/// Errors surfaced by the command-line driver.
#[derive(Debug)]
pub enum CliError {
    /// A file could not be read or written.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// A local JSON file did not parse.
    InvalidJson {
        path: String,
        source: serde_json::Error,
    },
    /// Directory data could not be read or normalized.
    Directory(HrApiError),
    /// Settings or the apply step were rejected.
    Sync(CoreError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Cannot access '{path}': {source}"),
            Self::InvalidJson { path, source } => write!(f, "Invalid JSON in '{path}': {source}"),
            Self::Directory(err) => write!(f, "{err}"),
            Self::Sync(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidJson { source, .. } => Some(source),
            Self::Directory(err) => Some(err),
            Self::Sync(err) => Some(err),
        }
    }
}

impl From<HrApiError> for CliError {
    fn from(err: HrApiError) -> Self {
        Self::Directory(err)
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Sync(err)
    }
}
