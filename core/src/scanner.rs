//! # Subnet Sweep
//!
//! Finds every host of the local /24 that answers the discovery endpoint with
//! this application's identity.
//!
//! A sweep never fails: a missing or malformed local address yields an empty
//! list without touching the network, and every per-host failure (refusal,
//! timeout, wrong status, foreign identity) only excludes that host. Faults
//! are reported through `tracing`, the caller only sees the matched URLs.
//!
//! Probes run as independent tokio tasks admitted by a semaphore of
//! [`ScanConfig::concurrency`] permits. They live in a [`JoinSet`], so results
//! come back in completion order, a panicking probe cannot take its siblings
//! down with it, and dropping a sweep aborts every probe still queued.

use std::sync::Arc;

use seekr_common::config::ScanConfig;
use seekr_common::discovery::ProbeOutcome;
use seekr_common::network::subnet::{HOSTS_PER_SUBNET, SubnetPrefix};
use seekr_common::network::target::ProbeTarget;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::ports::{DiscoveryClient, NetworkInfoProvider};

pub mod cancel;
#[cfg(test)]
pub(crate) mod testing;

use cancel::CancelToken;

type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct NetworkScanner {
    info: Arc<dyn NetworkInfoProvider>,
    client: Arc<dyn DiscoveryClient>,
    cfg: Arc<ScanConfig>,
    on_progress: Option<ProgressCallback>,
}

impl NetworkScanner {
    /// Concurrency is clamped to `1..=254`: zero permits would never admit a
    /// probe, and more permits than hosts buy nothing.
    pub fn new(
        info: Arc<dyn NetworkInfoProvider>,
        client: Arc<dyn DiscoveryClient>,
        mut cfg: ScanConfig,
    ) -> Self {
        let bounded = cfg.concurrency.clamp(1, HOSTS_PER_SUBNET);
        if bounded != cfg.concurrency {
            warn!("Concurrency {} out of range, using {bounded}", cfg.concurrency);
            cfg.concurrency = bounded;
        }

        Self {
            info,
            client,
            cfg: Arc::new(cfg),
            on_progress: None,
        }
    }

    /// Registers a callback receiving the number of settled probes after each settlement.
    pub fn with_progress(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Sweeps the local /24 and returns the base URL of every matching backend.
    pub async fn find_servers(&self) -> Vec<String> {
        self.find_servers_with(CancelToken::never()).await
    }

    /// Same as [`Self::find_servers`], but stops early when `cancel` fires and
    /// returns the matches collected up to that point.
    pub async fn find_servers_with(&self, cancel: CancelToken) -> Vec<String> {
        let Some(prefix) = self.local_subnet().await else {
            return Vec::new();
        };

        let targets: Vec<ProbeTarget> = prefix.targets(self.cfg.port);
        info!(
            "Probing {} hosts in {prefix}0/24 on port {}",
            targets.len(),
            self.cfg.port
        );

        let servers: Vec<String> = self
            .sweep(targets, cancel)
            .await
            .into_iter()
            .filter_map(ProbeOutcome::matched_url)
            .collect();

        info!("Sweep finished with {} matching server(s)", servers.len());
        servers
    }

    /// Derives the subnet to sweep from the network-info provider.
    pub async fn local_subnet(&self) -> Option<SubnetPrefix> {
        let network_info = self.info.network_info().await;
        let Some(ip) = network_info.ip_address else {
            warn!("No local IP address available, skipping discovery");
            return None;
        };

        match ip.parse::<SubnetPrefix>() {
            Ok(prefix) => Some(prefix),
            Err(e) => {
                warn!("Cannot derive a subnet from the local address: {e}");
                None
            }
        }
    }

    /// Probes every target and returns one outcome per settled probe, in
    /// completion order.
    pub async fn sweep(&self, targets: Vec<ProbeTarget>, mut cancel: CancelToken) -> Vec<ProbeOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.cfg.concurrency));
        let total = targets.len();

        let mut probes: JoinSet<ProbeOutcome> = JoinSet::new();
        for target in targets {
            let semaphore = Arc::clone(&semaphore);
            let client = Arc::clone(&self.client);
            let cfg = Arc::clone(&self.cfg);

            probes.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let outcome = probe(client.as_ref(), &target, &cfg).await;
                log_outcome(&target, &outcome, &cfg.identity);
                outcome
            });
        }

        let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(total);
        loop {
            tokio::select! {
                next = probes.join_next() => match next {
                    Some(Ok(outcome)) => {
                        outcomes.push(outcome);
                        if let Some(callback) = &self.on_progress {
                            callback(outcomes.len());
                        }
                    }
                    Some(Err(e)) => warn!("Probe task failed: {e}"),
                    None => break,
                },
                _ = cancel.cancelled() => {
                    warn!("Discovery cancelled after {} of {total} probes", outcomes.len());
                    probes.abort_all();
                    break;
                }
            }
        }

        outcomes
    }
}

/// Runs one discovery GET against `target` and classifies the result.
///
/// The timeout is enforced here as well as by the client, so a client that
/// ignores its deadline still cannot stall the sweep.
pub async fn probe(client: &dyn DiscoveryClient, target: &ProbeTarget, cfg: &ScanConfig) -> ProbeOutcome {
    let url = target.discovery_url(&cfg.discovery_path);

    match timeout(cfg.timeout, client.fetch(&url, cfg.timeout)).await {
        Ok(Ok(response)) => ProbeOutcome::from_response(&response, &cfg.identity, &target.base_url),
        Ok(Err(err)) => err.into(),
        Err(_elapsed) => ProbeOutcome::Timeout,
    }
}

fn log_outcome(target: &ProbeTarget, outcome: &ProbeOutcome, identity: &str) {
    match outcome {
        ProbeOutcome::Matched(url) => info!("Found server at {url}"),
        ProbeOutcome::IdentityMismatch(name) => {
            info!("Rejected {target}: reports '{name}', expected '{identity}'")
        }
        ProbeOutcome::Timeout => debug!(host = %target.host, "probe timed out, host may be slow or firewalled"),
        ProbeOutcome::ConnectionRefused => debug!(host = %target.host, "nothing listening"),
        other => debug!(host = %target.host, "excluded: {other}"),
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
