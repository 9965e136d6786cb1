use std::sync::Arc;
use std::time::Duration;

use seekr_common::config::{DEFAULT_FALLBACK_URL, ScanConfig};
use seekr_core::network::http::HttpDiscoveryClient;
use seekr_core::network::netinfo::StaticInfoProvider;
use seekr_core::{ApiEndpoint, NetworkScanner};

fn endpoint(info: StaticInfoProvider, cfg: ScanConfig) -> anyhow::Result<ApiEndpoint> {
    let scanner = NetworkScanner::new(Arc::new(info), Arc::new(HttpDiscoveryClient::new()?), cfg);
    Ok(ApiEndpoint::new(scanner, DEFAULT_FALLBACK_URL))
}

#[tokio::test]
async fn offline_device_uses_the_fallback() -> anyhow::Result<()> {
    let endpoint = endpoint(StaticInfoProvider::offline(), ScanConfig::default())?;

    assert_eq!(endpoint.resolve().await, DEFAULT_FALLBACK_URL);
    assert_eq!(endpoint.current(), DEFAULT_FALLBACK_URL);
    Ok(())
}

#[tokio::test]
async fn malformed_address_uses_the_fallback() -> anyhow::Result<()> {
    let endpoint = endpoint(StaticInfoProvider::new("not-an-ip"), ScanConfig::default())?;

    assert_eq!(endpoint.resolve().await, DEFAULT_FALLBACK_URL);
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn discovered_server_becomes_the_active_endpoint() -> anyhow::Result<()> {
    use crate::utils::{StubReply, StubServer, loopback};

    let server = StubServer::bind(loopback(77), 0, StubReply::Json(200, r#"{"name":"empowerer"}"#)).await?;
    let cfg = ScanConfig::default()
        .with_port(server.addr.port())
        .with_timeout(Duration::from_secs(2));
    let endpoint = endpoint(StaticInfoProvider::new("127.0.0.1"), cfg)?;
    let mut rx = endpoint.subscribe();

    assert_eq!(endpoint.resolve().await, server.base_url());
    assert!(rx.has_changed()?);
    assert_eq!(*rx.borrow_and_update(), server.base_url());
    Ok(())
}
