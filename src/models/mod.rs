//! Domain models for subnet provisioning.
//!
//! This module contains the wire-level data structures:
//! - [`SubnetDescriptor`] - outgoing create-or-update request body
//! - [`SubnetRecord`] - subnet state snapshot returned by the server

mod subnet;

// Re-export public types
pub use subnet::{SubnetDescriptor, SubnetProperties, SubnetRecord, SubnetRecordProperties};
