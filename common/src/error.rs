use thiserror::Error;

/// Reasons a local address cannot be turned into a subnet prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("'{0}' has fewer than 3 dot-separated octets")]
    TooFewOctets(String),
    #[error("'{octet}' in '{ip}' is not a valid octet")]
    InvalidOctet { ip: String, octet: String },
}

/// Transport-level failure of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The host exists but did not answer in time, or is firewalled.
    #[error("probe timed out")]
    Timeout,
    /// Nothing is listening on the probed port.
    #[error("connection refused")]
    ConnectionRefused,
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,
    #[error("service identity cannot be empty")]
    EmptyIdentity,
    #[error("discovery path '{0}' must start with '/'")]
    InvalidPath(String),
}
