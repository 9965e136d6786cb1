pub mod discover;
pub mod info;
pub mod resolve;

use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use seekr_common::config::{
    DEFAULT_CONCURRENCY, DEFAULT_DISCOVERY_PATH, DEFAULT_FALLBACK_URL, DEFAULT_IDENTITY,
    DEFAULT_PORT, ScanConfig,
};
use seekr_core::network::netinfo::{InterfaceInfoProvider, StaticInfoProvider};
use seekr_core::ports::NetworkInfoProvider;

#[derive(Parser)]
#[command(name = "seekr")]
#[command(about = "Finds the Empowerer backend on the local network.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output: -q hides headers, -qq prints bare URLs only
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the local address and the subnet a sweep would cover
    #[command(alias = "i")]
    Info {
        /// Use this address instead of detecting one
        #[arg(long)]
        ip: Option<String>,
    },
    /// Sweep the local /24 for backend servers
    #[command(alias = "d")]
    Discover(ScanArgs),
    /// Print the base URL the app would use, falling back when nothing answers
    #[command(alias = "r")]
    Resolve {
        #[command(flatten)]
        scan: ScanArgs,
        /// URL used when the sweep finds nothing
        #[arg(long, default_value = DEFAULT_FALLBACK_URL)]
        fallback: String,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// Local IPv4 address to derive the subnet from (detected when omitted)
    #[arg(long)]
    pub ip: Option<String>,
    /// Port of the discovery endpoint
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Path of the discovery endpoint
    #[arg(long, default_value = DEFAULT_DISCOVERY_PATH)]
    pub path: String,
    /// Per-probe timeout in milliseconds
    #[arg(short, long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,
    /// Maximum number of probes in flight
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,
    /// Token the reported service name must contain
    #[arg(long, default_value = DEFAULT_IDENTITY)]
    pub identity: String,
}

impl ScanArgs {
    pub fn to_config(&self) -> anyhow::Result<ScanConfig> {
        let cfg = ScanConfig {
            port: self.port,
            discovery_path: self.path.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.concurrency,
            identity: self.identity.clone(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn info_provider(&self) -> Arc<dyn NetworkInfoProvider> {
        info_provider(self.ip.as_deref())
    }
}

pub fn info_provider(ip: Option<&str>) -> Arc<dyn NetworkInfoProvider> {
    match ip {
        Some(ip) => Arc::new(StaticInfoProvider::new(ip)),
        None => Arc::new(InterfaceInfoProvider),
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
