//! Error types for subnet provisioning.
//!
//! Upstream (ARM) failures are kept separate from the caller-facing error so
//! that only the one documented error kind gets translated; everything else
//! surfaces with its original diagnostic detail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ARM error response body, e.g. `{"error": {"code": "...", "message": "..."}}`.
///
/// All fields are optional: a truncated or malformed error body must never
/// crash the error translation itself.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Nested `error` object of an ARM error response.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Human-readable message from the nested error body, or `""` if absent.
    pub fn message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .unwrap_or("")
    }
}

/// Failure kinds a [`NetworkClient`](crate::azure::NetworkClient) call can
/// produce.
///
/// Only [`OperationError::Operation`] is translated by the executor; the other
/// kinds propagate to the caller unmodified.
#[derive(Error, Debug)]
pub enum OperationError {
    /// ARM rejected the operation and returned a structured error body.
    #[error("Azure operation failed with status {status}: {message}", message = .body.message())]
    Operation { status: u16, body: ErrorResponse },

    /// Token acquisition failed.
    #[error("credential error: {0}")]
    Credential(#[from] azure_core::Error),

    /// HTTP transport failed before a response body was available.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that did not parse as a subnet.
    #[error("invalid response body: {0}")]
    Body(String),
}

/// Caller-facing error for [`create_subnet`](crate::create_subnet).
#[derive(Error, Debug)]
pub enum CreateSubnetError {
    /// The documented upstream operation failure, carrying the inputs and the
    /// upstream message as fields. The display string is reconstructed here,
    /// at the presentation boundary.
    #[error("Exception creating Subnet {name} in Resource Group: {resource_group}. {message}")]
    SubnetCreation {
        name: String,
        resource_group: String,
        message: String,
    },

    /// Any other upstream failure, passed through unchanged.
    #[error(transparent)]
    Upstream(#[from] OperationError),
}
