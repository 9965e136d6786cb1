//! In-memory [`DiscoveryClient`] for exercising sweeps without sockets.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use seekr_common::discovery::DiscoveryResponse;
use seekr_common::error::ProbeError;

use crate::ports::DiscoveryClient;

#[derive(Debug, Clone)]
pub enum FakeReply {
    Reply(u16, String),
    Delayed(Duration, String),
    Fail(ProbeError),
    /// Never answers; only the scanner's own timeout ends the probe.
    Hang,
}

impl FakeReply {
    pub fn ok(body: &str) -> Self {
        Self::Reply(200, body.to_string())
    }
}

pub struct FakeClient {
    default: FakeReply,
    per_host: HashMap<Ipv4Addr, FakeReply>,
    requested: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeClient {
    pub fn new(default: FakeReply) -> Self {
        Self {
            default,
            per_host: HashMap::new(),
            requested: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_host(mut self, host: Ipv4Addr, reply: FakeReply) -> Self {
        self.per_host.insert(host, reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn reply_for(&self, url: &str) -> FakeReply {
        url.strip_prefix("http://")
            .and_then(|rest| rest.split(':').next())
            .and_then(|host| host.parse::<Ipv4Addr>().ok())
            .and_then(|host| self.per_host.get(&host).cloned())
            .unwrap_or_else(|| self.default.clone())
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DiscoveryClient for FakeClient {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<DiscoveryResponse, ProbeError> {
        self.requested.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        match self.reply_for(url) {
            FakeReply::Reply(status, body) => Ok(DiscoveryResponse::new(status, body)),
            FakeReply::Delayed(delay, body) => {
                tokio::time::sleep(delay).await;
                Ok(DiscoveryResponse::new(200, body))
            }
            FakeReply::Fail(err) => Err(err),
            FakeReply::Hang => std::future::pending().await,
        }
    }
}
