//! # Seekr Common
//!
//! Shared domain model for backend discovery on the local network.
//!
//! * **[`config`]**: scan tunables and their validation.
//! * **[`network`]**: subnet prefixes, probe targets and local interface detection.
//! * **[`discovery`]**: the discovery endpoint contract and probe outcome taxonomy.
//! * **[`error`]**: error types shared by every layer.

pub mod config;
pub mod discovery;
pub mod error;
pub mod network;
