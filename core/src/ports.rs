//! Boundaries between the scanner and the platform.
//!
//! The scanner depends on these traits only; [`crate::network`] provides the
//! concrete implementations and tests provide fakes.

use std::time::Duration;

use async_trait::async_trait;
use seekr_common::discovery::DiscoveryResponse;
use seekr_common::error::ProbeError;
use seekr_common::network::NetworkInfo;

/// Supplies the device's current local address.
#[async_trait]
pub trait NetworkInfoProvider: Send + Sync {
    async fn network_info(&self) -> NetworkInfo;
}

/// Issues one discovery GET.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Fetches `url`, giving up after `timeout`.
    ///
    /// Any HTTP status is a successful fetch; only transport failures are errors.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<DiscoveryResponse, ProbeError>;
}
