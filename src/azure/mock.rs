//! Mock network client for offline tests.

use crate::azure::NetworkClient;
use crate::config;
use crate::error::OperationError;
use crate::models::{SubnetDescriptor, SubnetRecord, SubnetRecordProperties};
use async_trait::async_trait;

/// Fabricates schema-shaped subnet records without any network access.
///
/// The resource id uses the fixed placeholder subscription id from `config`,
/// so identical inputs always yield a byte-identical id. This client never
/// fails.
pub struct MockNetworkClient;

#[async_trait]
impl NetworkClient for MockNetworkClient {
    async fn create_or_update_subnet(
        &self,
        resource_group: &str,
        virtual_network_name: &str,
        subnet_name: &str,
        subnet: &SubnetDescriptor,
    ) -> Result<SubnetRecord, OperationError> {
        Ok(SubnetRecord {
            id: Some(format!(
                "/subscriptions/{sub}/resourceGroups/{resource_group}/providers/Microsoft.Network/virtualNetworks/{virtual_network_name}/subnets/{subnet_name}",
                sub = config::MOCK_SUBSCRIPTION_ID,
            )),
            properties: SubnetRecordProperties {
                address_prefix: subnet.properties.address_prefix.clone(),
                provisioning_state: Some("Succeeded".to_string()),
            },
            name: Some(subnet.name.clone()),
            resource_type: None,
            etag: None,
        })
    }
}
