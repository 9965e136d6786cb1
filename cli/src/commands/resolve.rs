use std::sync::Arc;

use colored::*;
use seekr_core::network::http::HttpDiscoveryClient;
use seekr_core::{ApiEndpoint, NetworkScanner};

use crate::commands::ScanArgs;
use crate::terminal::{colors, print};

pub async fn resolve(args: &ScanArgs, fallback: &str, q_level: u8) -> anyhow::Result<()> {
    let cfg = args.to_config()?;
    let client = Arc::new(HttpDiscoveryClient::new()?);
    let scanner = NetworkScanner::new(args.info_provider(), client, cfg);
    let endpoint = ApiEndpoint::new(scanner, fallback);

    let url = endpoint.resolve().await;
    let used_fallback = url == endpoint.fallback_url();

    if q_level >= 2 {
        println!("{url}");
        return Ok(());
    }

    print::header("api endpoint", q_level);
    print::aligned_line("Base URL", url.color(colors::URL), 8);
    let source = if used_fallback {
        "fallback".yellow()
    } else {
        "discovered".green()
    };
    print::aligned_line("Source", source, 8);
    Ok(())
}
