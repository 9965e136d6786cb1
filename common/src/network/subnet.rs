//! # Subnet Prefix
//!
//! A `/24` segment identified by the first three octets of the device address.
//!
//! The prefix is kept in its textual form (`"192.168.1."`) since every probe
//! target is built by appending a host number to it.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SubnetError;
use crate::network::target::ProbeTarget;

/// First usable host number; `.0` is the network address.
pub const FIRST_HOST: u8 = 1;
/// Last usable host number; `.255` is the broadcast address.
pub const LAST_HOST: u8 = 254;
/// Number of probe targets generated for one segment.
pub const HOSTS_PER_SUBNET: usize = (LAST_HOST - FIRST_HOST + 1) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetPrefix {
    octets: [u8; 3],
}

impl SubnetPrefix {
    pub fn host(&self, suffix: u8) -> Ipv4Addr {
        let [a, b, c] = self.octets;
        Ipv4Addr::new(a, b, c, suffix)
    }

    /// Every usable host of the segment, `.1` through `.254`.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> + '_ {
        (FIRST_HOST..=LAST_HOST).map(|suffix| self.host(suffix))
    }

    /// One probe target per usable host, all on the same `port`.
    pub fn targets(&self, port: u16) -> Vec<ProbeTarget> {
        self.hosts().map(|host| ProbeTarget::new(host, port)).collect()
    }
}

impl FromStr for SubnetPrefix {
    type Err = SubnetError;

    /// Keeps the first three dot-separated parts of `s`.
    ///
    /// Anything after the third part is ignored, so both `"10.0.0.7"` and
    /// `"10.0.0"` yield `10.0.0.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() < 3 {
            return Err(SubnetError::TooFewOctets(s.to_string()));
        }

        let mut octets = [0u8; 3];
        for (slot, part) in octets.iter_mut().zip(&parts[..3]) {
            *slot = part.parse::<u8>().map_err(|_| SubnetError::InvalidOctet {
                ip: s.to_string(),
                octet: part.to_string(),
            })?;
        }

        Ok(Self { octets })
    }
}

impl From<Ipv4Addr> for SubnetPrefix {
    fn from(ip: Ipv4Addr) -> Self {
        let [a, b, c, _] = ip.octets();
        Self { octets: [a, b, c] }
    }
}

impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.octets;
        write!(f, "{a}.{b}.{c}.")
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
