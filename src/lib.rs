// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod azure;
mod config;
pub mod error;
pub mod models;

use azure::NetworkClient;
use error::{CreateSubnetError, OperationError};
use models::{SubnetDescriptor, SubnetRecord};

/// Create (or update) a subnet inside a virtual network.
///
/// Builds the subnet descriptor, issues the create-or-update call on the
/// injected client, and waits for it to resolve. `address_prefix = None` means
/// the property is omitted from the outgoing request entirely.
///
/// The one documented upstream failure kind (a structured ARM operation error)
/// is translated into [`CreateSubnetError::SubnetCreation`]; any other failure
/// propagates unmodified.
pub async fn create_subnet<C: NetworkClient + ?Sized>(
    client: &C,
    resource_group: &str,
    name: &str,
    virtual_network_name: &str,
    address_prefix: Option<&str>,
) -> Result<SubnetRecord, CreateSubnetError> {
    log::debug!("Creating Subnet: {name}...");
    let subnet = SubnetDescriptor::new(name, address_prefix);

    match client
        .create_or_update_subnet(resource_group, virtual_network_name, name, &subnet)
        .await
    {
        Ok(record) => {
            log::debug!("Subnet {name} created successfully.");
            Ok(record)
        }
        Err(OperationError::Operation { body, .. }) => Err(CreateSubnetError::SubnetCreation {
            name: name.to_string(),
            resource_group: resource_group.to_string(),
            message: body.message().to_string(),
        }),
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use error::{ErrorDetail, ErrorResponse};

    /// Stub client that fails every call with a configurable error.
    struct FailingClient {
        kind: fn() -> OperationError,
    }

    #[async_trait]
    impl NetworkClient for FailingClient {
        async fn create_or_update_subnet(
            &self,
            _resource_group: &str,
            _virtual_network_name: &str,
            _subnet_name: &str,
            _subnet: &SubnetDescriptor,
        ) -> Result<SubnetRecord, OperationError> {
            Err((self.kind)())
        }
    }

    #[tokio::test]
    async fn test_create_subnet_round_trips_name() {
        let record = create_subnet(
            &azure::MockNetworkClient,
            "rg1",
            "subnet1",
            "vnet1",
            Some("10.0.0.0/24"),
        )
        .await
        .expect("Mock path must not fail");
        assert_eq!(record.name.as_deref(), Some("subnet1"));
        assert_eq!(
            record.properties.address_prefix.as_deref(),
            Some("10.0.0.0/24")
        );
    }

    #[tokio::test]
    async fn test_operation_error_is_translated() {
        let client = FailingClient {
            kind: || OperationError::Operation {
                status: 400,
                body: ErrorResponse {
                    error: Some(ErrorDetail {
                        code: Some("NetcfgInvalidSubnet".to_string()),
                        message: Some("Subnet is not valid in virtual network.".to_string()),
                    }),
                },
            },
        };
        let err = create_subnet(&client, "rg1", "subnet1", "vnet1", None)
            .await
            .expect_err("Expected translated failure");
        assert_eq!(
            err.to_string(),
            "Exception creating Subnet subnet1 in Resource Group: rg1. Subnet is not valid in virtual network."
        );
        assert!(matches!(err, CreateSubnetError::SubnetCreation { .. }));
    }

    #[tokio::test]
    async fn test_operation_error_without_message_translates_to_empty() {
        let client = FailingClient {
            kind: || OperationError::Operation {
                status: 500,
                body: ErrorResponse::default(),
            },
        };
        let err = create_subnet(&client, "rg1", "subnet1", "vnet1", None)
            .await
            .expect_err("Expected translated failure");
        assert_eq!(
            err.to_string(),
            "Exception creating Subnet subnet1 in Resource Group: rg1. "
        );
    }

    #[tokio::test]
    async fn test_other_errors_pass_through() {
        let client = FailingClient {
            kind: || OperationError::Body("path=properties error=missing field".to_string()),
        };
        let err = create_subnet(&client, "rg1", "subnet1", "vnet1", None)
            .await
            .expect_err("Expected pass-through failure");
        assert!(matches!(
            err,
            CreateSubnetError::Upstream(OperationError::Body(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid response body: path=properties error=missing field"
        );
    }
}
