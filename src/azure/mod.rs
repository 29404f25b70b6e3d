//! Azure network client implementations.
//!
//! This module handles all upstream-facing operations:
//! - [`client`] - the [`NetworkClient`] trait seam
//! - [`rest`] - real ARM REST implementation
//! - [`mock`] - deterministic offline implementation for tests

mod client;
mod mock;
mod rest;

// Re-export public types
pub use client::NetworkClient;
pub use mock::MockNetworkClient;
pub use rest::ArmNetworkClient;
