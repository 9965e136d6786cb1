//! # API Endpoint Bootstrap
//!
//! Chooses the base URL the rest of the application talks to.
//!
//! The first server a sweep returns becomes the active endpoint and is cached
//! in memory; when nothing answers, the configured fallback URL is used and
//! the next [`ApiEndpoint::resolve`] sweeps again. Interested components
//! [`ApiEndpoint::subscribe`] to be told whenever the active URL changes.

use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use crate::scanner::NetworkScanner;

pub struct ApiEndpoint {
    scanner: NetworkScanner,
    fallback_url: String,
    discovered: Mutex<Option<String>>,
    active: watch::Sender<String>,
}

impl ApiEndpoint {
    pub fn new(scanner: NetworkScanner, fallback_url: impl Into<String>) -> Self {
        let fallback_url = fallback_url.into();
        let (active, _rx) = watch::channel(fallback_url.clone());
        Self {
            scanner,
            fallback_url,
            discovered: Mutex::new(None),
            active,
        }
    }

    /// Returns the cached server, sweeping the subnet first if there is none.
    ///
    /// Concurrent callers wait for the same sweep instead of starting their own.
    pub async fn resolve(&self) -> String {
        let mut discovered = self.discovered.lock().await;
        if let Some(url) = discovered.as_ref() {
            return url.clone();
        }

        let url = self.sweep_into(&mut discovered).await;
        self.publish(&url);
        url
    }

    /// Drops the cache and sweeps again.
    pub async fn refresh(&self) -> String {
        let mut discovered = self.discovered.lock().await;
        *discovered = None;

        let url = self.sweep_into(&mut discovered).await;
        self.publish(&url);
        url
    }

    /// Pins `url` as the active endpoint until the next [`Self::refresh`].
    pub async fn set_override(&self, url: impl Into<String>) {
        let url = url.into();
        *self.discovered.lock().await = Some(url.clone());
        self.publish(&url);
    }

    pub fn current(&self) -> String {
        self.active.borrow().clone()
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Receiver that yields every change of the active base URL.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.active.subscribe()
    }

    async fn sweep_into(&self, discovered: &mut Option<String>) -> String {
        match self.scanner.find_servers().await.into_iter().next() {
            Some(url) => {
                info!("Using discovered API at {url}");
                *discovered = Some(url.clone());
                url
            }
            None => {
                warn!("No server found on the local network, falling back to {}", self.fallback_url);
                self.fallback_url.clone()
            }
        }
    }

    fn publish(&self, url: &str) {
        self.active.send_if_modified(|current| {
            if current == url {
                return false;
            }
            *current = url.to_string();
            true
        });
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
