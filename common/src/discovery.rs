//! # Discovery Contract
//!
//! `GET {base_url}/api/discovery` answers `200 OK` with `{ "name": <string> }`.
//! A host is accepted when `name` contains the service identity token,
//! compared case-insensitively.
//!
//! Every probe ends in exactly one [`ProbeOutcome`]; only
//! [`ProbeOutcome::Matched`] is ever reported to callers, the other variants
//! exist so the scanner can log why a host was excluded.

use std::fmt;

use serde::Deserialize;

use crate::error::ProbeError;

/// Raw reply of a discovery endpoint, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResponse {
    pub status: u16,
    pub body: String,
}

impl DiscoveryResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DiscoveryBody {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Matched(String),
    IdentityMismatch(String),
    Timeout,
    ConnectionRefused,
    UnexpectedStatus(u16),
    MalformedBody(String),
    Transport(String),
}

impl ProbeOutcome {
    /// Validates a discovery reply coming from `base_url`.
    pub fn from_response(response: &DiscoveryResponse, identity: &str, base_url: &str) -> Self {
        if response.status != 200 {
            return Self::UnexpectedStatus(response.status);
        }

        let body: DiscoveryBody = match serde_json::from_str(&response.body) {
            Ok(body) => body,
            Err(e) => return Self::MalformedBody(e.to_string()),
        };

        if matches_identity(&body.name, identity) {
            Self::Matched(base_url.to_string())
        } else {
            Self::IdentityMismatch(body.name)
        }
    }

    pub fn matched_url(self) -> Option<String> {
        match self {
            Self::Matched(url) => Some(url),
            _ => None,
        }
    }
}

impl From<ProbeError> for ProbeOutcome {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Timeout => Self::Timeout,
            ProbeError::ConnectionRefused => Self::ConnectionRefused,
            ProbeError::Transport(reason) => Self::Transport(reason),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(url) => write!(f, "matched at {url}"),
            Self::IdentityMismatch(name) => write!(f, "identity mismatch ('{name}')"),
            Self::Timeout => f.write_str("timed out"),
            Self::ConnectionRefused => f.write_str("connection refused"),
            Self::UnexpectedStatus(code) => write!(f, "unexpected status {code}"),
            Self::MalformedBody(reason) => write!(f, "malformed body: {reason}"),
            Self::Transport(reason) => write!(f, "transport error: {reason}"),
        }
    }
}

/// Case-insensitive substring test of a reported service name.
pub fn matches_identity(name: &str, identity: &str) -> bool {
    name.to_lowercase().contains(&identity.to_lowercase())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
