use std::fmt;
use std::net::Ipv4Addr;

/// One candidate host of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeTarget {
    pub host: Ipv4Addr,
    pub port: u16,
    /// `http://{host}:{port}`, the value reported back on a match.
    pub base_url: String,
}

impl ProbeTarget {
    pub fn new(host: Ipv4Addr, port: u16) -> Self {
        Self {
            host,
            port,
            base_url: format!("http://{host}:{port}"),
        }
    }

    pub fn discovery_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}
