//! Sweeps of the 127.0.0.0/24 loopback segment with the real HTTP client.
//!
//! Linux routes the whole of 127.0.0.0/8 to the loopback interface, so each
//! stub can own its own address while sharing one port.
#![cfg(target_os = "linux")]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use seekr_common::config::ScanConfig;
use seekr_core::network::http::HttpDiscoveryClient;
use seekr_core::network::netinfo::StaticInfoProvider;
use seekr_core::{CancelHandle, NetworkScanner};

use crate::utils::{StubReply, StubServer, loopback};

const EMPOWERER: StubReply = StubReply::Json(200, r#"{"name":"Empowerer API","version":"1.4.0"}"#);
const STRANGER: StubReply = StubReply::Json(200, r#"{"name":"Some Other Service"}"#);

fn scanner(port: u16, timeout: Duration) -> anyhow::Result<NetworkScanner> {
    let cfg = ScanConfig::default()
        .with_port(port)
        .with_timeout(timeout);
    Ok(NetworkScanner::new(
        Arc::new(StaticInfoProvider::new("127.0.0.57")),
        Arc::new(HttpDiscoveryClient::new()?),
        cfg,
    ))
}

#[tokio::test]
async fn finds_only_the_hosts_reporting_our_identity() -> anyhow::Result<()> {
    let first = StubServer::bind(loopback(42), 0, EMPOWERER).await?;
    let port = first.addr.port();
    let second = StubServer::bind(loopback(7), port, EMPOWERER).await?;
    let _stranger = StubServer::bind(loopback(9), port, STRANGER).await?;

    let found: HashSet<String> = scanner(port, Duration::from_secs(2))?
        .find_servers()
        .await
        .into_iter()
        .collect();

    let expected: HashSet<String> = [first.base_url(), second.base_url()].into_iter().collect();
    assert_eq!(found, expected);
    Ok(())
}

#[tokio::test]
async fn error_status_and_garbage_bodies_are_excluded() -> anyhow::Result<()> {
    let good = StubServer::bind(loopback(20), 0, EMPOWERER).await?;
    let port = good.addr.port();
    let _not_found = StubServer::bind(loopback(21), port, StubReply::Json(404, r#"{"name":"Empowerer"}"#)).await?;
    let _garbage = StubServer::bind(loopback(22), port, StubReply::Json(200, "<html>hi</html>")).await?;

    let found = scanner(port, Duration::from_secs(2))?.find_servers().await;

    assert_eq!(found, vec![good.base_url()]);
    Ok(())
}

#[tokio::test]
async fn silent_host_costs_at_most_one_timeout() -> anyhow::Result<()> {
    let good = StubServer::bind(loopback(30), 0, EMPOWERER).await?;
    let port = good.addr.port();
    let _silent = StubServer::bind(loopback(31), port, StubReply::Silent).await?;

    let started = Instant::now();
    let found = scanner(port, Duration::from_millis(500))?.find_servers().await;

    assert_eq!(found, vec![good.base_url()]);
    assert!(
        started.elapsed() < Duration::from_secs(10),
        "sweep took {:?}",
        started.elapsed()
    );
    Ok(())
}

#[tokio::test]
async fn cancelled_sweep_returns_promptly() -> anyhow::Result<()> {
    let silent = StubServer::bind(loopback(40), 0, StubReply::Silent).await?;
    let port = silent.addr.port();

    let handle = CancelHandle::new();
    let token = handle.token();
    let scanner = scanner(port, Duration::from_secs(30))?;

    let started = Instant::now();
    let sweep = tokio::spawn(async move { scanner.find_servers_with(token).await });
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.cancel();

    let found = sweep.await?;
    assert!(found.is_empty());
    assert!(started.elapsed() < Duration::from_secs(5));
    Ok(())
}
