pub mod interface;
pub mod subnet;
pub mod target;

/// Snapshot of what the platform knows about the device's connectivity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Local address as reported by the platform; `None` when offline.
    pub ip_address: Option<String>,
}

impl NetworkInfo {
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
        }
    }

    pub fn unavailable() -> Self {
        Self { ip_address: None }
    }
}
