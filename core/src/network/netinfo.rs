use async_trait::async_trait;
use seekr_common::network::{NetworkInfo, interface};
use tracing::{debug, warn};

use crate::ports::NetworkInfoProvider;

/// Reads the address of the best LAN interface on this machine.
pub struct InterfaceInfoProvider;

#[async_trait]
impl NetworkInfoProvider for InterfaceInfoProvider {
    async fn network_info(&self) -> NetworkInfo {
        // Interface enumeration hits the OS (and shells out on macOS).
        match tokio::task::spawn_blocking(interface::local_ipv4).await {
            Ok(Some(ip)) => {
                debug!("Detected local address {ip}");
                NetworkInfo::new(ip.to_string())
            }
            Ok(None) => NetworkInfo::unavailable(),
            Err(e) => {
                warn!("Interface detection failed: {e}");
                NetworkInfo::unavailable()
            }
        }
    }
}

/// Reports a fixed address, e.g. one passed on the command line.
#[derive(Debug, Clone)]
pub struct StaticInfoProvider {
    ip_address: Option<String>,
}

impl StaticInfoProvider {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
        }
    }

    pub fn offline() -> Self {
        Self { ip_address: None }
    }
}

#[async_trait]
impl NetworkInfoProvider for StaticInfoProvider {
    async fn network_info(&self) -> NetworkInfo {
        NetworkInfo {
            ip_address: self.ip_address.clone(),
        }
    }
}
