use colored::*;
use seekr_common::network::subnet::{FIRST_HOST, LAST_HOST, SubnetPrefix};
use seekr_core::ports::NetworkInfoProvider;

use crate::commands::info_provider;
use crate::terminal::{colors, print};

const KEY_WIDTH: usize = 10;

pub async fn info(ip: Option<&str>, q_level: u8) -> anyhow::Result<()> {
    let network_info = info_provider(ip).network_info().await;

    print::header("local network", q_level);

    let Some(address) = network_info.ip_address else {
        print::aligned_line("Address", "unavailable".red(), KEY_WIDTH);
        return Ok(());
    };
    print::aligned_line("Address", address.color(colors::IPV4_ADDR), KEY_WIDTH);

    match address.parse::<SubnetPrefix>() {
        Ok(prefix) => {
            print::aligned_line("Subnet", format!("{prefix}0/24").color(colors::IPV4_ADDR), KEY_WIDTH);
            let range = format!("{prefix}{FIRST_HOST} - {prefix}{LAST_HOST}");
            print::aligned_line("Probes", range.normal(), KEY_WIDTH);
        }
        Err(e) => print::aligned_line("Subnet", e.to_string().red(), KEY_WIDTH),
    }
    Ok(())
}
