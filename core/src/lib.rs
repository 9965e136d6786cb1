//! # Seekr Core
//!
//! Finds this application's backend on the local /24 without knowing its
//! address in advance.
//!
//! * **[`ports`]**: what the scanner needs from the outside world.
//! * **[`network`]**: concrete providers and the HTTP discovery client.
//! * **[`scanner`]**: the parallel subnet sweep.
//! * **[`endpoint`]**: picks the active API base URL from a sweep, with fallback.

pub mod endpoint;
pub mod network;
pub mod ports;
pub mod scanner;

pub use endpoint::ApiEndpoint;
pub use scanner::NetworkScanner;
pub use scanner::cancel::{CancelHandle, CancelToken};
