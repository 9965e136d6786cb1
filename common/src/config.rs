use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DISCOVERY_PATH: &str = "/api/discovery";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5_000);
pub const DEFAULT_CONCURRENCY: usize = 32;
pub const DEFAULT_IDENTITY: &str = "empowerer";
/// Base URL used by the API bootstrap when no backend answers on the LAN.
pub const DEFAULT_FALLBACK_URL: &str = "http://localhost:3001";

/// Tunables for a single subnet sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Port the backend's discovery endpoint listens on.
    pub port: u16,
    /// Path appended to every base URL, must start with `/`.
    pub discovery_path: String,
    /// Upper bound for one probe, connect through body.
    pub timeout: Duration,
    /// Maximum number of probes in flight at once.
    pub concurrency: usize,
    /// Token the reported `name` has to contain (case-insensitive).
    pub identity: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            discovery_path: DEFAULT_DISCOVERY_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            identity: DEFAULT_IDENTITY.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.identity.trim().is_empty() {
            return Err(ConfigError::EmptyIdentity);
        }
        if !self.discovery_path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.discovery_path.clone()));
        }
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
