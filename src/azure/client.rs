//! Network client trait.

use crate::error::OperationError;
use crate::models::{SubnetDescriptor, SubnetRecord};
use async_trait::async_trait;

/// Upstream network-management client (allows mocking in tests).
///
/// One method: create-or-update a subnet inside a virtual network, returning
/// either the resulting subnet snapshot or a structured upstream error. The
/// real and mock executors are two implementations of this trait.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn create_or_update_subnet(
        &self,
        resource_group: &str,
        virtual_network_name: &str,
        subnet_name: &str,
        subnet: &SubnetDescriptor,
    ) -> Result<SubnetRecord, OperationError>;
}
