use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use seekr_common::discovery::DiscoveryResponse;
use seekr_common::error::ProbeError;

use crate::ports::DiscoveryClient;

/// [`DiscoveryClient`] backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct HttpDiscoveryClient {
    client: reqwest::Client,
}

impl HttpDiscoveryClient {
    pub fn new() -> anyhow::Result<Self> {
        // LAN addresses must never be routed through a system proxy, and a
        // sweep talks to each host once so idle connections are useless.
        let client = reqwest::Client::builder()
            .no_proxy()
            .pool_max_idle_per_host(0)
            .user_agent(concat!("seekr/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DiscoveryClient for HttpDiscoveryClient {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<DiscoveryResponse, ProbeError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;

        Ok(DiscoveryResponse { status, body })
    }
}

fn classify_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout;
    }

    match io_error_kind(&err) {
        Some(io::ErrorKind::ConnectionRefused) => ProbeError::ConnectionRefused,
        Some(io::ErrorKind::TimedOut) => ProbeError::Timeout,
        _ if err.is_connect() => ProbeError::Transport(format!("connect failed: {err}")),
        _ => ProbeError::Transport(err.to_string()),
    }
}

/// Walks the source chain down to the socket error, if there is one.
fn io_error_kind(err: &reqwest::Error) -> Option<io::ErrorKind> {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(inner) = source {
        if let Some(io_err) = inner.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        source = inner.source();
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
