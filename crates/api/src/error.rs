// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the HR directory boundary.

use thiserror::Error;

/// Classification of a directory failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrApiErrorKind {
    /// 401: the access token was rejected.
    InvalidCredentials,
    /// 403: the token lacks permission.
    Forbidden,
    /// 404: the endpoint or resource does not exist.
    NotFound,
    /// 429: too many requests.
    RateLimited,
    /// Any other non-2xx status.
    Api,
    /// The request never produced a response.
    Connectivity,
    /// A 2xx response whose body could not be understood.
    MalformedResponse,
}

impl HrApiErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid credentials",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::RateLimited => "rate limited",
            Self::Api => "api error",
            Self::Connectivity => "connectivity error",
            Self::MalformedResponse => "malformed response",
        }
    }
}

impl std::fmt::Display for HrApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failure talking to the HR directory, carrying `(status, message)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HR directory {kind}{}: {message}", .status.map_or_else(String::new, |status| format!(" (HTTP {status})")))]
pub struct HrApiError {
    kind: HrApiErrorKind,
    status: Option<u16>,
    message: String,
}

impl HrApiError {
    /// Classifies a non-2xx response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind: HrApiErrorKind = match status {
            401 => HrApiErrorKind::InvalidCredentials,
            403 => HrApiErrorKind::Forbidden,
            404 => HrApiErrorKind::NotFound,
            429 => HrApiErrorKind::RateLimited,
            _ => HrApiErrorKind::Api,
        };
        let message: String = if body.trim().is_empty() {
            kind.as_str().to_string()
        } else {
            body.trim().to_string()
        };
        Self {
            kind,
            status: Some(status),
            message,
        }
    }

    /// A request that failed before any response arrived.
    #[must_use]
    pub fn connectivity(message: &str) -> Self {
        Self {
            kind: HrApiErrorKind::Connectivity,
            status: None,
            message: message.to_string(),
        }
    }

    /// A response body that did not match the documented contract.
    #[must_use]
    pub fn malformed(message: &str) -> Self {
        Self {
            kind: HrApiErrorKind::MalformedResponse,
            status: None,
            message: message.to_string(),
        }
    }

    /// A client configured without usable credentials.
    #[must_use]
    pub fn missing_credentials() -> Self {
        Self {
            kind: HrApiErrorKind::InvalidCredentials,
            status: None,
            message: String::from("no access token configured"),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> HrApiErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether retrying the same request later may succeed.
    ///
    /// Retry policy itself belongs to the transport.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            HrApiErrorKind::RateLimited | HrApiErrorKind::Connectivity => true,
            HrApiErrorKind::Api => self.status.is_some_and(|status| status >= 500),
            _ => false,
        }
    }
}
