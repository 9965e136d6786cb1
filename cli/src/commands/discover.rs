use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use seekr_common::network::subnet::HOSTS_PER_SUBNET;
use seekr_core::network::http::HttpDiscoveryClient;
use seekr_core::{CancelHandle, NetworkScanner};
use tracing::{Instrument, info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::commands::ScanArgs;
use crate::sprint;
use crate::terminal::{colors, format, print, progress};

pub async fn discover(args: &ScanArgs, q_level: u8) -> anyhow::Result<()> {
    let cfg = args.to_config()?;
    let client = Arc::new(HttpDiscoveryClient::new()?);

    let span = info_span!("discovery", indicatif.pb_show = true);
    span.pb_set_style(&progress::sweep_style());
    span.pb_set_length(HOSTS_PER_SUBNET as u64);
    span.pb_set_message("sweeping");

    let progress_span = span.clone();
    let scanner = NetworkScanner::new(args.info_provider(), client, cfg)
        .with_progress(move |settled| progress_span.pb_set_position(settled as u64));

    let handle = CancelHandle::new();
    let token = handle.token();
    let interrupted = token.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, collecting the servers found so far");
            handle.cancel();
        }
    });

    let start_time = Instant::now();
    let mut servers = scanner.find_servers_with(token).instrument(span).await;
    ctrl_c.abort();

    servers.sort();
    discovery_ends(&servers, start_time.elapsed(), interrupted.is_cancelled(), q_level);
    Ok(())
}

fn discovery_ends(servers: &[String], total_time: Duration, partial: bool, q_level: u8) {
    if q_level >= 2 {
        for url in servers {
            println!("{url}");
        }
        return;
    }

    if servers.is_empty() {
        print::header("zero servers found", q_level);
        print::no_results();
        return;
    }

    print::header("Discovered Servers", q_level);
    for (idx, url) in servers.iter().enumerate() {
        print::tree_head(idx, url);
        print::as_tree_one_level(format::url_to_details(url));
        if idx + 1 != servers.len() {
            sprint!();
        }
    }
    print_summary(servers.len(), total_time, partial, q_level);
}

fn print_summary(found: usize, total_time: Duration, partial: bool, q_level: u8) {
    let title = if partial { "Discovery Interrupted" } else { "Discovery Complete" };
    let found: ColoredString = format!("{found} server(s)").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("{title}: {found} identified in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            sprint!();
            info!("{output}");
        }
    }
}
